//! component_* blocks: method calls, property access and component refs.

use crate::infer::{method_name, property_name};
use crate::{CompileError, Pass, Registry, Warning};
use rhizome_yail_ir::builders::{get_component, get_property, method_call, set_property};
use rhizome_yail_ir::Expr;
use rhizome_yail_syntax_bky::Block;

pub(crate) fn register(registry: &mut Registry) {
    registry.register("component_method", method);
    registry.register("component_get_property", property_get);
    registry.register("component_set_property", property_set);
    registry.register("component_component_block", component);
    registry.register("component_set_get", set_get);

    registry.register_unhandled("component_all_component_block");
    registry.register_unhandled("component_all_method");
    registry.register_unhandled("component_all_set_get");
}

/// `(call-component-method 'C 'M (*list-for-runtime* args...) '(kinds...))`
///
/// Each argument's kind comes from the method's parameter metadata, falling
/// back to the kind inferred from the argument block.
fn method(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let instance = pass.component_instance(block);
    let method = method_name(block);
    let component_type = pass.component_type(block, &instance);

    let signature = component_type
        .as_deref()
        .and_then(|ty| pass.metadata().method(ty, method));
    if signature.is_none()
        && let Some(ty) = &component_type
    {
        pass.warn(Warning::MissingMetadata {
            component_type: ty.clone(),
            member: method.to_string(),
        });
    }

    let mut args = Vec::new();
    let mut kinds = Vec::new();
    let mut i = 0;
    while let Some(arg) = block.value(&format!("ARG{i}")) {
        let declared = signature
            .as_ref()
            .and_then(|signature| signature.params.get(i))
            .and_then(|param| param.kind);
        kinds.push(declared.unwrap_or_else(|| pass.infer(Some(arg))));
        args.push(pass.expr(arg)?);
        i += 1;
    }
    Ok(method_call(&instance, method, args, &kinds))
}

fn property_get(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let instance = pass.component_instance(block);
    Ok(get_property(&instance, property_name(block)))
}

/// Setter kind: the property's declared kind, else the value's inferred kind.
fn property_set(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let instance = pass.component_instance(block);
    let property = property_name(block);
    let component_type = pass.component_type(block, &instance);
    let kind = pass
        .property_kind(component_type.as_deref(), property)
        .unwrap_or_else(|| pass.infer(block.value("VALUE")));
    let value = pass.value(block, "VALUE")?;
    Ok(set_property(&instance, property, value, kind))
}

fn component(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let name = block.field("COMPONENT_SELECTOR").unwrap_or(pass.form_name());
    Ok(get_component(name))
}

/// Setter when a `VALUE` slot is connected, getter otherwise.
fn set_get(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    if block.value("VALUE").is_some() {
        property_set(pass, block)
    } else {
        property_get(pass, block)
    }
}
