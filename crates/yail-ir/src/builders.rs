//! Builders for the fixed YAIL constructs.
//!
//! Names passed in are the bare block-level names; the `g$`, `p$` and `$`
//! prefixes for globals, procedures and locals are applied here.

use crate::{Expr, ValueKind};

/// Package holding the built-in component classes.
pub const RUNTIME_NAMESPACE: &str = "com.google.appinventor.components.runtime";

/// Module required by every screen.
pub const RUNTIME_MODULE: &str = "<com.google.youngandroid.runtime>";

pub fn global_name(name: &str) -> String {
    format!("g${name}")
}

pub fn procedure_name(name: &str) -> String {
    format!("p${name}")
}

pub fn local_name(name: &str) -> String {
    format!("${name}")
}

/// Qualify a short component type with `namespace`. Types that already
/// contain a `.` are returned unchanged.
pub fn qualify_type(namespace: &str, component_type: &str) -> String {
    if component_type.contains('.') {
        component_type.to_string()
    } else {
        format!("{namespace}.{component_type}")
    }
}

/// `'(k1 k2 ...)`
pub fn kind_list(kinds: &[ValueKind]) -> Expr {
    Expr::quote(Expr::list(
        kinds.iter().map(|kind| Expr::symbol(kind.as_str())).collect(),
    ))
}

/// `(*list-for-runtime* args...)`
pub fn runtime_list(args: Vec<Expr>) -> Expr {
    Expr::call("*list-for-runtime*", args)
}

/// `(define-repl-form package.Form Form)`
pub fn form_def(package: &str, form: &str) -> Expr {
    Expr::call(
        "define-repl-form",
        vec![Expr::symbol(format!("{package}.{form}")), Expr::symbol(form)],
    )
}

/// `(require <module>)`
pub fn require_runtime(module: &str) -> Expr {
    Expr::call("require", vec![Expr::symbol(module)])
}

/// `(def g$Name value)`
pub fn global_def(name: &str, value: Expr) -> Expr {
    Expr::call("def", vec![Expr::symbol(global_name(name)), value])
}

/// `(def (p$Name $a $b) body...)`
pub fn procedure_def(name: &str, params: &[String], body: Vec<Expr>) -> Expr {
    let mut signature = vec![Expr::symbol(procedure_name(name))];
    signature.extend(params.iter().map(|param| Expr::symbol(local_name(param))));
    let mut items = vec![Expr::list(signature)];
    items.extend(body);
    Expr::call("def", items)
}

/// `(add-component Parent qualified.Type Name props...)`
pub fn add_component(parent: &str, qualified_type: &str, name: &str, props: Vec<Expr>) -> Expr {
    let mut items = vec![
        Expr::symbol(parent),
        Expr::symbol(qualified_type),
        Expr::symbol(name),
    ];
    items.extend(props);
    Expr::call("add-component", items)
}

/// `(set-and-coerce-property! 'Component 'Property value 'kind)`
pub fn set_property(component: &str, property: &str, value: Expr, kind: ValueKind) -> Expr {
    Expr::call(
        "set-and-coerce-property!",
        vec![
            Expr::quoted_symbol(component),
            Expr::quoted_symbol(property),
            value,
            Expr::quoted_symbol(kind.as_str()),
        ],
    )
}

/// `(get-property 'Component 'Property)`
pub fn get_property(component: &str, property: &str) -> Expr {
    Expr::call(
        "get-property",
        vec![Expr::quoted_symbol(component), Expr::quoted_symbol(property)],
    )
}

/// `(call-component-method 'Component 'Method (*list-for-runtime* args...) '(kinds...))`
pub fn method_call(component: &str, method: &str, args: Vec<Expr>, kinds: &[ValueKind]) -> Expr {
    Expr::call(
        "call-component-method",
        vec![
            Expr::quoted_symbol(component),
            Expr::quoted_symbol(method),
            runtime_list(args),
            kind_list(kinds),
        ],
    )
}

/// `(define-event Component Event ($p...) (set-this-form) body...)`
pub fn event_def(component: &str, event: &str, params: &[String], body: Vec<Expr>) -> Expr {
    let mut items = vec![
        Expr::symbol(component),
        Expr::symbol(event),
        Expr::list(
            params
                .iter()
                .map(|param| Expr::symbol(local_name(param)))
                .collect(),
        ),
        Expr::call("set-this-form", Vec::new()),
    ];
    items.extend(body);
    Expr::call("define-event", items)
}

/// `(call-yail-primitive name (*list-for-runtime* args...) '(kinds...) "label")`
pub fn primitive_call(name: &str, args: Vec<Expr>, kinds: &[ValueKind], label: &str) -> Expr {
    Expr::call(
        "call-yail-primitive",
        vec![
            Expr::symbol(name),
            runtime_list(args),
            kind_list(kinds),
            Expr::string(label),
        ],
    )
}

/// `(do-after-form-creation props...)`
pub fn form_setup(props: Vec<Expr>) -> Expr {
    Expr::call("do-after-form-creation", props)
}

/// `(get-component Name)`
pub fn get_component(name: &str) -> Expr {
    Expr::call("get-component", vec![Expr::symbol(name)])
}

/// Short-circuit `or`.
pub fn or_delayed(operands: Vec<Expr>) -> Expr {
    Expr::call("or-delayed", operands)
}

/// Short-circuit `and`.
pub fn and_delayed(operands: Vec<Expr>) -> Expr {
    Expr::call("and-delayed", operands)
}

/// `(get-var symbol)`; `symbol` carries its own prefix.
pub fn get_var(symbol: &str) -> Expr {
    Expr::call("get-var", vec![Expr::symbol(symbol)])
}

/// `(set-var! symbol value)`
pub fn set_var(symbol: &str, value: Expr) -> Expr {
    Expr::call("set-var!", vec![Expr::symbol(symbol), value])
}

/// `(lexical-value $name)`
pub fn lexical_value(name: &str) -> Expr {
    Expr::call("lexical-value", vec![Expr::symbol(local_name(name))])
}

/// `(lambda (params...) body)`
pub fn lambda(params: &[String], body: Expr) -> Expr {
    Expr::call(
        "lambda",
        vec![
            Expr::list(params.iter().map(|p| Expr::symbol(p.as_str())).collect()),
            body,
        ],
    )
}

/// `(init-runtime)`
pub fn init_runtime() -> Expr {
    Expr::call("init-runtime", Vec::new())
}
