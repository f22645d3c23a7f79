//! Tests for rhizome-yail-ir.

use crate::builders::*;
use crate::{Expr, ValueKind, escape_string, format_number};

#[test]
fn test_print_atoms_and_symbols() {
    assert_eq!(Expr::atom("42").to_text(), "42");
    assert_eq!(Expr::symbol("g$Count").to_text(), "g$Count");
    assert_eq!(Expr::quoted_symbol("Button1").to_text(), "'Button1");
    assert_eq!(Expr::boolean(true).to_text(), "#t");
    assert_eq!(Expr::boolean(false).to_text(), "#f");
    assert_eq!(Expr::null().to_text(), "*the-null-value*");
    assert_eq!(Expr::empty_list().to_text(), "'()");
}

#[test]
fn test_print_lists() {
    assert_eq!(Expr::list(vec![]).to_text(), "()");
    let expr = Expr::call("+", vec![Expr::integer(1), Expr::integer(2)]);
    assert_eq!(expr.to_text(), "(+ 1 2)");
}

#[test]
fn test_print_special_forms() {
    let cond = Expr::symbol("c");
    assert_eq!(
        Expr::if_(cond.clone(), Expr::atom("1"), None).to_text(),
        "(if c 1)"
    );
    assert_eq!(
        Expr::if_(cond, Expr::atom("1"), Some(Expr::atom("2"))).to_text(),
        "(if c 1 2)"
    );
    assert_eq!(
        Expr::begin(vec![Expr::atom("1"), Expr::atom("2")]).to_text(),
        "(begin 1 2)"
    );
    assert_eq!(Expr::begin(vec![]).to_text(), "(begin )");
    let bindings = vec![
        ("$a".to_string(), Expr::atom("1")),
        ("$b".to_string(), Expr::string("x")),
    ];
    assert_eq!(
        Expr::let_(bindings, Expr::symbol("body")).to_text(),
        "(let (($a 1) ($b \"x\")) body)"
    );
}

#[test]
fn test_print_comments() {
    assert_eq!(Expr::line_comment("Screen1").to_text(), ";;; Screen1");
    assert_eq!(Expr::line_comment("a\nb").to_text(), ";;; a\n;;; b");
    assert_eq!(
        Expr::block_comment("$Source $Yail").to_text(),
        "#|\n$Source $Yail\n|#"
    );
}

#[test]
fn test_string_escaping() {
    assert_eq!(Expr::string("a\"b").to_text(), "\"a\\\"b\"");
    assert_eq!(escape_string("back\\slash"), "back\\\\slash");
    assert_eq!(escape_string("l1\nl2\r\t"), "l1\\nl2\\r\\t");
    assert_eq!(escape_string("\u{2260}"), "\\u2260");
    assert_eq!(escape_string("é"), "\\u00e9");
    // Astral characters are written as surrogate pairs.
    assert_eq!(escape_string("\u{1F600}"), "\\ud83d\\ude00");
}

#[test]
fn test_printing_is_deterministic() {
    let expr = primitive_call(
        "yail-equal?",
        vec![Expr::string("é"), Expr::integer(1)],
        &[ValueKind::Any, ValueKind::Any],
        "=",
    );
    assert_eq!(expr.to_text(), expr.to_text());
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(42.0), "42");
    assert_eq!(format_number(-16777216.0), "-16777216");
    assert_eq!(format_number(1.5), "1.5");
    assert_eq!(format_number(0.1), "0.1");
    assert_eq!(format_number(1e20), "100000000000000000000");
    assert_eq!(format_number(1e21), "1e+21");
    assert_eq!(format_number(-2.5e22), "-2.5e+22");
    assert_eq!(format_number(0.000001), "0.000001");
    assert_eq!(format_number(1.5e-7), "1.5e-7");
}

#[test]
fn test_form_and_runtime() {
    assert_eq!(
        form_def("appinventor.ai_test.Counter", "Screen1").to_text(),
        "(define-repl-form appinventor.ai_test.Counter.Screen1 Screen1)"
    );
    assert_eq!(
        require_runtime(RUNTIME_MODULE).to_text(),
        "(require <com.google.youngandroid.runtime>)"
    );
    assert_eq!(init_runtime().to_text(), "(init-runtime)");
}

#[test]
fn test_definitions() {
    assert_eq!(
        global_def("Count", Expr::integer(0)).to_text(),
        "(def g$Count 0)"
    );
    assert_eq!(
        procedure_def("Add", &["a".into(), "b".into()], vec![Expr::atom("1")]).to_text(),
        "(def (p$Add $a $b) 1)"
    );
    assert_eq!(procedure_def("Noop", &[], vec![]).to_text(), "(def (p$Noop))");
}

#[test]
fn test_component_constructs() {
    let prop = set_property("Button1", "Text", Expr::string("Hi"), ValueKind::Text);
    assert_eq!(
        prop.to_text(),
        "(set-and-coerce-property! 'Button1 'Text \"Hi\" 'text)"
    );
    let ty = qualify_type(RUNTIME_NAMESPACE, "Button");
    assert_eq!(
        add_component("Screen1", &ty, "Button1", vec![prop]).to_text(),
        "(add-component Screen1 com.google.appinventor.components.runtime.Button Button1 \
         (set-and-coerce-property! 'Button1 'Text \"Hi\" 'text))"
    );
    assert_eq!(qualify_type(RUNTIME_NAMESPACE, "edu.mit.Ext"), "edu.mit.Ext");
    assert_eq!(
        get_property("Label1", "Text").to_text(),
        "(get-property 'Label1 'Text)"
    );
    assert_eq!(
        get_component("Label1").to_text(),
        "(get-component Label1)"
    );
    assert_eq!(
        method_call("Sound1", "Play", vec![], &[]).to_text(),
        "(call-component-method 'Sound1 'Play (*list-for-runtime*) '())"
    );
}

#[test]
fn test_event_def() {
    let body = vec![Expr::list(vec![get_var("p$Bump")])];
    assert_eq!(
        event_def("Screen1", "Initialize", &[], body).to_text(),
        "(define-event Screen1 Initialize () (set-this-form) ((get-var p$Bump)))"
    );
    assert_eq!(
        event_def("Clock1", "Timer", &["x".into()], vec![]).to_text(),
        "(define-event Clock1 Timer ($x) (set-this-form))"
    );
}

#[test]
fn test_primitive_call() {
    let expr = primitive_call(
        "+",
        vec![get_var("g$Count"), Expr::integer(1)],
        &[ValueKind::Number, ValueKind::Number],
        "+",
    );
    assert_eq!(
        expr.to_text(),
        "(call-yail-primitive + (*list-for-runtime* (get-var g$Count) 1) '(number number) \"+\")"
    );
    assert_eq!(
        primitive_call("get-start-value", vec![], &[], "get start value").to_text(),
        "(call-yail-primitive get-start-value (*list-for-runtime*) '() \"get start value\")"
    );
}

#[test]
fn test_variables_and_lambda() {
    assert_eq!(lexical_value("item").to_text(), "(lexical-value $item)");
    assert_eq!(
        set_var("g$x", Expr::integer(2)).to_text(),
        "(set-var! g$x 2)"
    );
    assert_eq!(
        lambda(&[], Expr::begin(vec![])).to_text(),
        "(lambda () (begin ))"
    );
    assert_eq!(
        or_delayed(vec![Expr::boolean(true), Expr::boolean(false)]).to_text(),
        "(or-delayed #t #f)"
    );
    assert_eq!(
        form_setup(vec![]).to_text(),
        "(do-after-form-creation)"
    );
}
