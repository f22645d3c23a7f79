//! procedures_* blocks.

use crate::{CompileError, Pass, Registry};
use rhizome_yail_ir::Expr;
use rhizome_yail_ir::builders::{get_var, procedure_def, procedure_name};
use rhizome_yail_syntax_bky::Block;

pub(crate) fn register(registry: &mut Registry) {
    registry.register("procedures_defnoreturn", define);
    registry.register("procedures_defreturn", define);
    registry.register("procedures_callnoreturn", call);
    registry.register("procedures_callreturn", call);
    registry.register(
        "procedure_lexical_variable_get",
        super::variable::lexical_get,
    );
    registry.register("procedures_do_then_return", do_then_return);
}

fn parameters(block: &Block) -> Vec<String> {
    match block
        .mutation_attr("parameters")
        .or_else(|| block.mutation_attr("parameterNames"))
    {
        Some(list) => list.split(',').map(|param| param.trim().to_string()).collect(),
        None => block.mutation_names().to_vec(),
    }
}

/// `(def (p$Name $params...) body...)`. A returning procedure ends with its
/// `RETURN` value, preceded by the statements wrapped in one `begin`.
fn define(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let name = block.field("NAME").unwrap_or("unnamed");
    let params = parameters(block);
    let statements = pass.statements(block, "STACK")?;

    let body = if block.block_type == "procedures_defreturn" {
        let result = pass.value(block, "RETURN")?;
        if statements.is_empty() {
            vec![result]
        } else {
            vec![Expr::begin(statements), result]
        }
    } else {
        statements
    };
    tracing::trace!(procedure = name, params = params.len(), "procedure definition");
    Ok(procedure_def(name, &params, body))
}

/// `((get-var p$Name) args...)` over the consecutive `ARGn` slots.
fn call(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let name = block
        .mutation_attr("name")
        .or_else(|| block.field("PROCNAME"))
        .or_else(|| block.field("NAME"))
        .unwrap_or("unknown");

    let mut items = vec![get_var(&procedure_name(name))];
    let mut i = 0;
    while let Some(arg) = block.value(&format!("ARG{i}")) {
        items.push(pass.expr(arg)?);
        i += 1;
    }
    Ok(Expr::list(items))
}

fn do_then_return(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let mut body = pass.statements(block, "STACK")?;
    let result = pass.value(block, "RETURN")?;
    if body.is_empty() {
        Ok(result)
    } else {
        body.push(result);
        Ok(Expr::begin(body))
    }
}
