//! Tests for rhizome-yail-metadata.

use crate::*;
use rhizome_yail_ir::ValueKind;

const DESCRIPTORS: &str = r#"[
  {
    "type": "com.google.appinventor.components.runtime.Button",
    "name": "Button",
    "external": "false",
    "version": "7",
    "categoryString": "USERINTERFACE",
    "nonVisible": "false",
    "properties": [
      {"name": "BackgroundColor", "editorType": "color", "defaultValue": "&H00000000"},
      {"name": "Text", "editorType": "string", "defaultValue": ""},
      {"name": "Enabled", "editorType": "boolean", "defaultValue": "True"},
      {"name": "FontSize", "editorType": "non_negative_float", "defaultValue": "14.0"}
    ],
    "blockProperties": [
      {"name": "BackgroundColor", "type": "number", "rw": "read-write", "description": "bg"},
      {"name": "Text", "type": "text", "rw": "read-write"},
      {"name": "FontSize", "type": "number", "rw": "read-write"}
    ],
    "methods": [],
    "events": [{"name": "Click", "params": []}]
  },
  {
    "type": "com.google.appinventor.components.runtime.Clock",
    "name": "Clock",
    "version": 4,
    "categoryString": "SENSORS",
    "nonVisible": "true",
    "methods": [
      {"name": "FormatDate", "params": [{"name": "instant", "type": "InstantInTime"}, {"name": "pattern", "type": "text"}], "returnType": "text"},
      {"name": "SystemTime", "params": [], "returnType": "number"},
      {"name": "Reset", "params": [{"name": "when"}]}
    ],
    "events": [{"name": "Timer", "params": []}]
  },
  {
    "type": "com.google.appinventor.components.runtime.Form",
    "name": "Form",
    "events": [
      {"name": "Initialize", "params": []},
      {"name": "ErrorOccurred", "params": [{"name": "component", "type": "component"}, {"name": "errorNumber", "type": "number"}]}
    ]
  }
]"#;

fn env() -> Environment {
    Environment::from_json("default", DESCRIPTORS).unwrap()
}

#[test]
fn test_type_tables() {
    assert_eq!(normalize_type(Some("Number")), ValueKind::Number);
    assert_eq!(normalize_type(Some("color")), ValueKind::Number);
    assert_eq!(normalize_type(Some("asset")), ValueKind::Text);
    assert_eq!(normalize_type(Some("void")), ValueKind::Text);
    assert_eq!(normalize_type(Some("any")), ValueKind::Any);
    assert_eq!(normalize_type(Some("InstantInTime")), ValueKind::Text);
    assert_eq!(normalize_type(None), ValueKind::Text);

    assert_eq!(editor_kind(Some("non_negative_integer")), ValueKind::Number);
    assert_eq!(editor_kind(Some("visibility")), ValueKind::Boolean);
    assert_eq!(editor_kind(Some("lego_sensor_port")), ValueKind::Text);
    assert_eq!(editor_kind(Some("textArea")), ValueKind::Text);
}

#[test]
fn test_resolve_short_and_qualified() {
    let env = env();
    let meta = ComponentMetadata::new(&env);
    assert!(meta.resolve("Button").is_some());
    assert!(
        meta.resolve("com.google.appinventor.components.runtime.Button")
            .is_some()
    );
    assert!(meta.resolve("Slider").is_none());
}

#[test]
fn test_property_prefers_block_declaration() {
    let env = env();
    let meta = ComponentMetadata::new(&env);

    let color = meta.property("Button", "BackgroundColor").unwrap();
    assert_eq!(color.kind, ValueKind::Number);
    assert_eq!(color.description, "bg");
    assert_eq!(color.default_value.as_deref(), Some("&H00000000"));

    // Only a designer entry exists.
    assert_eq!(
        meta.property("Button", "Enabled").unwrap().kind,
        ValueKind::Boolean
    );
    // Designer says text (unknown editor), block says number: block wins.
    assert_eq!(
        meta.property("Button", "FontSize").unwrap().kind,
        ValueKind::Number
    );
    assert!(meta.property("Button", "Missing").is_none());
    assert!(meta.property("Slider", "Text").is_none());
}

#[test]
fn test_methods_and_events() {
    let env = env();
    let meta = ComponentMetadata::new(&env);

    let format = meta.method("Clock", "FormatDate").unwrap();
    assert_eq!(format.return_kind, ValueKind::Text);
    assert_eq!(format.params[1].kind, Some(ValueKind::Text));

    assert_eq!(
        meta.method("Clock", "SystemTime").unwrap().return_kind,
        ValueKind::Number
    );
    let reset = meta.method("Clock", "Reset").unwrap();
    assert_eq!(reset.return_kind, ValueKind::Text);
    assert_eq!(reset.params[0].kind, None);

    let error = meta.event("Form", "ErrorOccurred").unwrap();
    assert_eq!(error.param_names(), vec!["component", "errorNumber"]);
    assert!(meta.event("Form", "Missing").is_none());
}

#[test]
fn test_descriptor_attributes() {
    let env = env();
    let meta = ComponentMetadata::new(&env);
    assert_eq!(meta.category("Clock"), "SENSORS");
    assert_eq!(meta.category("Form"), "UNKNOWN");
    assert!(!meta.is_visible("Clock"));
    assert!(meta.is_visible("Button"));
    assert!(meta.is_visible("Slider"));
    assert_eq!(meta.version("Clock"), "4");
    assert_eq!(meta.version("Form"), "1");
}

#[test]
fn test_statistics() {
    let env = env();
    let stats = ComponentMetadata::new(&env).statistics();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.non_visible, 1);
    assert_eq!(stats.visible, 2);
    assert_eq!(stats.categories.get("UNKNOWN"), Some(&1));
}

#[test]
fn test_extend_returns_new_environment() {
    let base = env();
    let ext = ComponentDescriptor {
        component_type: "edu.mit.appinventor.ble.BluetoothLE".into(),
        name: "BluetoothLE".into(),
        external: true,
        ..ComponentDescriptor::default()
    };
    let extended = base.extend([ext]);
    assert_eq!(base.descriptors().len(), 3);
    assert_eq!(extended.descriptors().len(), 4);
    assert_eq!(extended.name(), "default");
    assert!(extended.is_supported("edu.mit.appinventor.ble.BluetoothLE"));
    assert!(!base.is_supported("edu.mit.appinventor.ble.BluetoothLE"));
}

#[test]
fn test_validate_components() {
    let env = env();
    let meta = ComponentMetadata::new(&env);
    let screen = rhizome_yail_syntax_scm::parse(
        "#|\n$JSON\n{\"Properties\":{\"$Name\":\"Screen1\",\"$Type\":\"Form\",\
         \"$Components\":[{\"$Name\":\"Button1\",\"$Type\":\"Button\"},\
         {\"$Name\":\"Slider1\",\"$Type\":\"Slider\"}]}}\n|#",
    )
    .unwrap();

    let report = meta.validate_components(screen.components());
    assert!(!report.is_valid());
    assert_eq!(report.valid, vec!["Screen1", "Button1"]);
    assert_eq!(
        report.messages(),
        vec!["Unsupported component: Slider (Slider1)"]
    );
}

#[test]
fn test_invalid_json() {
    assert!(matches!(
        Environment::from_json("x", "{"),
        Err(MetadataError::Json(_))
    ));
}
