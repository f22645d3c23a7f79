//! Tests for rhizome-yail-syntax-bky.

use crate::{BkyError, parse};

const COUNTER: &str = r#"<xml xmlns="https://developers.google.com/blockly/xml">
  <block type="global_declaration" id="g1" x="10" y="20">
    <field name="NAME">Count</field>
    <value name="VALUE">
      <block type="math_number" id="n1"><field name="NUM">0</field></block>
    </value>
  </block>
  <block type="procedures_defnoreturn" id="p1" x="10.7" y="80">
    <mutation><arg name="step"></arg></mutation>
    <field name="NAME">Bump</field>
    <statement name="STACK">
      <block type="lexical_variable_set" id="s1">
        <field name="VAR">global Count</field>
        <value name="VALUE">
          <shadow type="math_number" id="sh1"><field name="NUM">1</field></shadow>
        </value>
        <next>
          <block type="controls_break" id="b1"></block>
        </next>
      </block>
    </statement>
  </block>
  <block type="component_event" id="e1" collapsed="true">
    <mutation component_type="Form" instance_name="Screen1" event_name="Initialize"></mutation>
  </block>
  <yacodeblocks ya-version="208" language-version="33"></yacodeblocks>
</xml>"#;

#[test]
fn test_parse_top_level_blocks() {
    let doc = parse(COUNTER).unwrap();
    let types: Vec<_> = doc
        .top_level()
        .iter()
        .map(|b| b.block_type.as_str())
        .collect();
    assert_eq!(
        types,
        vec!["global_declaration", "procedures_defnoreturn", "component_event"]
    );
}

#[test]
fn test_parse_attributes() {
    let doc = parse(COUNTER).unwrap();
    let global = &doc.top_level()[0];
    assert_eq!(global.id.as_deref(), Some("g1"));
    assert_eq!((global.x, global.y), (10, 20));
    assert!(!global.collapsed);
    assert_eq!(global.field("NAME"), Some("Count"));
    assert_eq!(global.value("VALUE").unwrap().field("NUM"), Some("0"));

    let procedure = &doc.top_level()[1];
    assert_eq!(procedure.x, 10);
    assert_eq!(procedure.mutation_names(), ["step".to_string()]);

    let event = &doc.top_level()[2];
    assert!(event.collapsed);
    assert_eq!(event.mutation_attr("event_name"), Some("Initialize"));
    assert_eq!(event.mutation_attr("missing"), None);
}

#[test]
fn test_statement_chain_and_shadow() {
    let doc = parse(COUNTER).unwrap();
    let head = doc.top_level()[1].statement("STACK").unwrap();
    let chain: Vec<_> = head.chain().map(|b| b.block_type.as_str()).collect();
    assert_eq!(chain, vec!["lexical_variable_set", "controls_break"]);
    assert_eq!(head.value("VALUE").unwrap().block_type, "math_number");
}

#[test]
fn test_flatten_counts_nested_blocks() {
    let doc = parse(COUNTER).unwrap();
    assert_eq!(doc.top_level().len(), 3);
    // global + number, procedure + set + shadow number + break, event
    assert_eq!(doc.flatten().len(), 7);
    assert!(doc.contains_type("controls_break"));
    assert_eq!(doc.blocks_of_type("math_number").len(), 2);
}

#[test]
fn test_queries() {
    let doc = parse(COUNTER).unwrap();
    assert_eq!(doc.global_declarations().len(), 1);
    assert_eq!(doc.procedure_definitions().len(), 1);
    assert_eq!(doc.event_handlers().len(), 1);
    let stats = doc.statistics();
    assert_eq!(stats.total_blocks, 7);
    assert_eq!(stats.top_level_blocks, 3);
    assert_eq!(stats.block_types.get("math_number"), Some(&2));
}

#[test]
fn test_procedure_order() {
    let xml = r#"<xml>
      <block type="procedures_defreturn"><field name="NAME">A</field></block>
      <block type="procedures_defnoreturn"><field name="NAME">B</field></block>
    </xml>"#;
    let doc = parse(xml).unwrap();
    let names: Vec<_> = doc
        .procedure_definitions()
        .iter()
        .map(|b| b.field("NAME").unwrap())
        .collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn test_mutation_text_and_attributes() {
    let xml = r#"<XML><block type="text_join"><mutation items="3"> note </mutation></block></XML>"#;
    let doc = parse(xml).unwrap();
    let block = &doc.top_level()[0];
    assert_eq!(block.mutation_count("items"), Some(3));
    assert_eq!(block.mutation.as_ref().unwrap().text.as_deref(), Some("note"));
}

#[test]
fn test_empty_container() {
    let doc = parse("<xml></xml>").unwrap();
    assert!(doc.is_empty());
    assert!(doc.flatten().is_empty());
}

#[test]
fn test_missing_root() {
    let err = parse("<workspace><block type=\"text\"/></workspace>").unwrap_err();
    assert!(matches!(err, BkyError::MissingRoot));
}

#[test]
fn test_malformed_xml() {
    let err = parse("<xml><block type=\"text\"></xml>").unwrap_err();
    assert!(matches!(err, BkyError::Xml(_)));
}

#[test]
fn test_whitespace_only_field_text() {
    let xml = r#"<xml>
      <block type="text"><field name="TEXT"> </field></block>
      <block type="text"><field name="TEXT">  </field></block>
      <block type="text"><field name="TEXT"> Hello </field></block>
    </xml>"#;
    let doc = parse(xml).unwrap();
    let texts: Vec<_> = doc
        .top_level()
        .iter()
        .map(|b| b.field("TEXT"))
        .collect();
    assert_eq!(texts, vec![Some(" "), Some("  "), Some(" Hello ")]);
}
