//! End-to-end compilation of whole screens.

use rhizome_yail_codegen::{CompileError, CompileOptions, Generator, ScreenSource, Warning};
use rhizome_yail_metadata::Environment;

const DESCRIPTORS: &str = r#"[
  {
    "type": "com.google.appinventor.components.runtime.Button",
    "name": "Button",
    "properties": [{"name": "Text", "editorType": "string", "defaultValue": ""}],
    "blockProperties": [{"name": "Text", "type": "text", "rw": "read-write"}],
    "events": [{"name": "Click", "params": []}]
  },
  {
    "type": "com.google.appinventor.components.runtime.Form",
    "name": "Form",
    "events": [{"name": "Initialize", "params": []}]
  }
]"#;

const COUNTER_SCM: &str = r##"#|
$JSON
{"authURL":[],"YaVersion":"208","Source":"Form","Properties":{"$Name":"Screen1","$Type":"Form","$Version":"27","AppName":"Counter","Title":"Screen1","Uuid":"0","$Components":[{"$Name":"Button1","$Type":"Button","$Version":"7","Text":"Tap","Uuid":"12"}]}}
|#"##;

const COUNTER_BKY: &str = r#"<xml xmlns="https://developers.google.com/blockly/xml">
  <block type="global_declaration" id="g1" x="10" y="10">
    <field name="NAME">Count</field>
    <value name="VALUE">
      <block type="math_number"><field name="NUM">0</field></block>
    </value>
  </block>
  <block type="procedures_defnoreturn" id="p1" x="10" y="60">
    <field name="NAME">Bump</field>
    <statement name="STACK">
      <block type="lexical_variable_set">
        <field name="VAR">global Count</field>
        <value name="VALUE">
          <block type="math_add">
            <mutation items="2"></mutation>
            <value name="NUM0">
              <block type="lexical_variable_get"><field name="VAR">global Count</field></block>
            </value>
            <value name="NUM1">
              <block type="math_number"><field name="NUM">1</field></block>
            </value>
          </block>
        </value>
      </block>
    </statement>
  </block>
  <block type="component_event" id="e1" x="10" y="120">
    <mutation component_type="Form" instance_name="Screen1" event_name="Initialize"></mutation>
    <statement name="DO">
      <block type="procedures_callnoreturn">
        <mutation name="Bump"></mutation>
        <field name="PROCNAME">Bump</field>
      </block>
    </statement>
  </block>
  <block type="component_event" id="e2" x="10" y="180">
    <mutation component_type="Button" instance_name="Button1" event_name="Click"></mutation>
    <field name="COMPONENT_SELECTOR">Button1</field>
    <statement name="DO">
      <block type="component_set_property">
        <field name="COMPONENT_SELECTOR">Button1</field>
        <field name="PROPERTY_NAME">Text</field>
        <value name="VALUE">
          <block type="text"><field name="TEXT">Clicked</field></block>
        </value>
      </block>
    </statement>
  </block>
  <yacodeblocks ya-version="208" language-version="33"></yacodeblocks>
</xml>"#;

const COUNTER_YAIL: &str = r#"#|
$Source $Yail
|#

(define-repl-form appinventor.ai_test.Counter.Screen1 Screen1)

(require <com.google.youngandroid.runtime>)

(def g$Count 0)

(def (p$Bump) (set-var! g$Count (call-yail-primitive + (*list-for-runtime* (get-var g$Count) 1) '(number number) "+")))

;;; Screen1

(do-after-form-creation (set-and-coerce-property! 'Screen1 'AppName "Counter" 'text) (set-and-coerce-property! 'Screen1 'Title "Screen1" 'text))

(define-event Screen1 Initialize () (set-this-form) ((get-var p$Bump)))

;;; Button1

(add-component Screen1 com.google.appinventor.components.runtime.Button Button1 (set-and-coerce-property! 'Button1 'Text "Tap" 'text))

(define-event Button1 Click () (set-this-form) (set-and-coerce-property! 'Button1 'Text "Clicked" 'text))

(init-runtime)
"#;

fn generator() -> Generator {
    let env = Environment::from_json("default", DESCRIPTORS).unwrap();
    Generator::new(env, CompileOptions::new("appinventor.ai_test.Counter"))
}

#[test]
fn test_compile_counter_screen() {
    let output = generator()
        .compile_screen(COUNTER_SCM, COUNTER_BKY)
        .unwrap();
    assert_eq!(output.form_name, "Screen1");
    assert_eq!(output.text, COUNTER_YAIL);
    assert!(output.warnings.is_empty());
}

#[test]
fn test_compile_without_blocks() {
    let output = generator().compile_screen(COUNTER_SCM, "").unwrap();
    assert!(output.text.starts_with("#|\n$Source $Yail\n|#\n\n(define-repl-form"));
    assert!(!output.text.contains("(def "));
    assert!(!output.text.contains("define-event"));
    assert!(output.text.ends_with("(init-runtime)\n"));
}

#[test]
fn test_unsupported_component_warns() {
    let scm = COUNTER_SCM.replace(r#""$Type":"Button""#, r#""$Type":"Slider""#);
    let output = generator().compile_screen(&scm, "").unwrap();
    assert_eq!(
        output.warnings,
        vec![Warning::UnsupportedComponent {
            name: "Button1".into(),
            component_type: "Slider".into(),
        }]
    );
    assert_eq!(
        output.warnings[0].to_string(),
        "Unsupported component: Slider (Button1)"
    );
    assert!(output.text.contains("com.google.appinventor.components.runtime.Slider Button1"));
}

#[test]
fn test_unregistered_block_aborts() {
    let bky = r#"<xml><block type="not_a_real_block"></block>
      <block type="global_declaration"><field name="NAME">x</field>
        <value name="VALUE"><block type="not_a_real_block"></block></value>
      </block></xml>"#;
    let err = generator().compile_screen(COUNTER_SCM, bky).unwrap_err();
    assert!(matches!(err, CompileError::UnresolvedSymbol(tag) if tag == "not_a_real_block"));
}

#[test]
fn test_missing_package_name() {
    let env = Environment::from_json("default", DESCRIPTORS).unwrap();
    let generator = Generator::new(env, CompileOptions::default());
    assert!(matches!(
        generator.compile_screen(COUNTER_SCM, COUNTER_BKY),
        Err(CompileError::MissingInput(_))
    ));
}

#[test]
fn test_malformed_inputs() {
    let generator = generator();
    assert!(matches!(
        generator.compile_screen("no wrapper here", ""),
        Err(CompileError::Scm(_))
    ));
    assert!(matches!(
        generator.compile_screen(COUNTER_SCM, "<xml><block"),
        Err(CompileError::Bky(_))
    ));
}

#[test]
fn test_compile_screens_in_parallel() {
    let screens = vec![
        ScreenSource {
            name: "Screen1".into(),
            scm: COUNTER_SCM.into(),
            bky: COUNTER_BKY.into(),
        },
        ScreenSource {
            name: "Broken".into(),
            scm: String::new(),
            bky: String::new(),
        },
        ScreenSource {
            name: "Screen2".into(),
            scm: COUNTER_SCM.replace(r#""$Name":"Screen1""#, r#""$Name":"Screen2""#),
            bky: String::new(),
        },
    ];
    let results = generator().compile_screens(&screens);
    let names: Vec<_> = results.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["Screen1", "Broken", "Screen2"]);

    assert_eq!(results[0].1.as_ref().unwrap().text, COUNTER_YAIL);
    assert!(matches!(results[1].1, Err(CompileError::MissingInput(_))));
    assert_eq!(results[2].1.as_ref().unwrap().form_name, "Screen2");
}

#[test]
fn test_space_separator_survives() {
    let bky = r#"<xml>
      <block type="global_declaration">
        <field name="NAME">sep</field>
        <value name="VALUE"><block type="text"><field name="TEXT"> </field></block></value>
      </block>
    </xml>"#;
    let output = generator().compile_screen(COUNTER_SCM, bky).unwrap();
    assert!(output.text.contains("(def g$sep \" \")"));
}
