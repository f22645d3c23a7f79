//! Tests for rhizome-yail-syntax-scm.

use crate::{ScmError, parse};
use serde_json::json;

const SCREEN: &str = r##"#|
$JSON
{"authURL":["ai2.appinventor.mit.edu"],"YaVersion":"208","Source":"Form","Properties":{"$Name":"Screen1","$Type":"Form","$Version":"27","AppName":"Counter","Title":"Screen1","Uuid":"0","$Components":[{"$Name":"HorizontalArrangement1","$Type":"HorizontalArrangement","$Version":"4","Uuid":"11","$Components":[{"$Name":"Button1","$Type":"Button","$Version":"7","Text":"Tap","BackgroundColor":"&HFF2196F3","Uuid":"12"}]},{"$Name":"Clock1","$Type":"Clock","$Version":"4","TimerInterval":"500","Uuid":"13"}]}}
|#"##;

#[test]
fn test_parse_form() {
    let screen = parse(SCREEN).unwrap();
    assert_eq!(screen.form_name(), "Screen1");
    assert_eq!(screen.form_type(), "Form");
    assert_eq!(screen.ya_version(), Some(208));
    assert_eq!(screen.source(), Some("Form"));
    assert!(screen.form().is_form());
    assert_eq!(screen.form().version.as_deref(), Some("27"));
}

#[test]
fn test_form_properties_exclude_reserved_keys() {
    let screen = parse(SCREEN).unwrap();
    let keys: Vec<_> = screen.form_properties().keys().cloned().collect();
    assert_eq!(keys, vec!["AppName", "Title"]);
}

#[test]
fn test_component_tree_order_and_parents() {
    let screen = parse(SCREEN).unwrap();
    let names: Vec<_> = screen
        .components()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Screen1", "HorizontalArrangement1", "Button1", "Clock1"]
    );

    let button = screen.component("Button1").unwrap();
    assert_eq!(button.parent.as_deref(), Some("HorizontalArrangement1"));
    assert_eq!(button.uuid.as_deref(), Some("12"));
    assert_eq!(button.property("Text"), Some(&json!("Tap")));
    assert_eq!(
        screen.component("Clock1").unwrap().parent.as_deref(),
        Some("Screen1")
    );
    assert_eq!(screen.components_of_type("Clock").len(), 1);
    assert_eq!(screen.component_count(), 4);
}

#[test]
fn test_numeric_version() {
    let text = "#|\n$JSON\n{\"YaVersion\":159,\"Properties\":{\"$Name\":\"Main\",\"$Type\":\"Form\"}}\n|#";
    let screen = parse(text).unwrap();
    assert_eq!(screen.ya_version(), Some(159));
    assert_eq!(screen.form_name(), "Main");
    assert!(screen.form().children.is_empty());
}

#[test]
fn test_invalid_version() {
    let text = "#|\n$JSON\n{\"YaVersion\":\"abc\",\"Properties\":{\"$Name\":\"S\",\"$Type\":\"Form\"}}\n|#";
    assert!(matches!(parse(text), Err(ScmError::InvalidVersion(_))));
}

#[test]
fn test_missing_wrapper() {
    assert!(matches!(
        parse("{\"Properties\":{}}"),
        Err(ScmError::MissingJsonBlock)
    ));
}

#[test]
fn test_bad_json() {
    assert!(matches!(
        parse("#|\n$JSON\n{not json}\n|#"),
        Err(ScmError::Json(_))
    ));
}
