//! controls_* blocks: branching, loops and screen flow.

use super::{empty_dictionary, list_item};
use crate::{CompileError, Pass, Registry};
use rhizome_yail_ir::builders::{get_var, lambda, primitive_call};
use rhizome_yail_ir::{Expr, ValueKind as K};
use rhizome_yail_syntax_bky::Block;

pub(crate) fn register(registry: &mut Registry) {
    registry.register("controls_if", if_);
    registry.register("controls_repeat_ext", repeat);
    registry.register("controls_whileUntil", while_);
    registry.register("controls_while", while_);
    registry.register("controls_forEach", for_each);
    registry.register("controls_for", for_range);
    registry.register("controls_forRange", for_range);
    registry.register("controls_choose", choose);
    registry.register("controls_do_then_return", do_then_return);
    registry.register("controls_for_each_dict", for_each_dict);
    registry.register("controls_break", break_);
    registry.register("for_lexical_variable_get", super::variable::lexical_get);
    registry.register("controls_eval_but_ignore", eval_but_ignore);
    registry.register("controls_nothing", nothing);

    registry.register("controls_openAnotherScreen", open_another_screen);
    registry.register(
        "controls_openAnotherScreenWithStartValue",
        open_another_screen_with_start_value,
    );
    registry.register("controls_getStartValue", get_start_value);
    registry.register("controls_closeScreen", close_screen);
    registry.register("controls_closeScreenWithValue", close_screen_with_value);
    registry.register("controls_closeApplication", close_application);
    registry.register("controls_getPlainStartText", get_plain_start_text);
    registry.register(
        "controls_closeScreenWithPlainText",
        close_screen_with_plain_text,
    );
}

/// `(if IF0 (begin DO0...) (if IF1 ... (begin ELSE...)))`
fn if_(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let else_ifs = block.mutation_count("elseif").unwrap_or(0);
    let mut arms = Vec::new();
    for n in 0.. {
        let cond_slot = format!("IF{n}");
        let body_slot = format!("DO{n}");
        let present = block.value(&cond_slot).is_some() || block.statement(&body_slot).is_some();
        if n > 0 && n > else_ifs && !present {
            break;
        }
        let cond = pass.value(block, &cond_slot)?;
        let body = Expr::begin(pass.statements(block, &body_slot)?);
        arms.push((cond, body));
    }

    let mut otherwise = match block.statement("ELSE") {
        Some(_) => Some(Expr::begin(pass.statements(block, "ELSE")?)),
        None => None,
    };
    let mut arms = arms.into_iter();
    let first = arms.next();
    for (cond, body) in arms.rev() {
        otherwise = Some(Expr::if_(cond, body, otherwise));
    }
    Ok(match first {
        Some((cond, body)) => Expr::if_(cond, body, otherwise),
        None => Expr::begin(Vec::new()),
    })
}

fn body_lambda(
    pass: &mut Pass<'_>,
    block: &Block,
    slot: &str,
    params: &[String],
) -> Result<Expr, CompileError> {
    let body = pass.statements(block, slot)?;
    Ok(lambda(params, Expr::begin(body)))
}

fn repeat(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let times = pass.value(block, "TIMES")?;
    let body = body_lambda(pass, block, "DO", &[])?;
    Ok(primitive_call(
        "yail-repeat",
        vec![times, body],
        &[K::Number, K::Procedure],
        "repeat",
    ))
}

/// `UNTIL` mode negates the test.
fn while_(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let mut test = pass.value(block, "TEST")?;
    if block.field("MODE") == Some("UNTIL") {
        test = primitive_call("yail-not", vec![test], &[K::Boolean], "not");
    }
    let test = lambda(&[], test);
    let body = body_lambda(pass, block, "STATEMENT", &[])?;
    Ok(primitive_call(
        "yail-while",
        vec![test, body],
        &[K::Procedure, K::Procedure],
        "while",
    ))
}

fn for_each(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let var = block.field("VAR").unwrap_or("item").to_string();
    let list = pass.value(block, "LIST")?;
    let body = body_lambda(pass, block, "DO", &[var])?;
    Ok(primitive_call(
        "yail-for-each",
        vec![body, list],
        &[K::Procedure, K::List],
        "for each",
    ))
}

fn for_range(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let var = block.field("VAR").unwrap_or("i").to_string();
    pass.record_variable(format!("${var}"), K::Number);
    let start = pass.value(block, "FROM")?;
    let end = pass.value(block, "TO")?;
    let step = pass.value_or(block, "BY", Expr::integer(1))?;
    let body = body_lambda(pass, block, "DO", &[var])?;
    Ok(primitive_call(
        "yail-for-range",
        vec![body, start, end, step],
        &[K::Procedure, K::Number, K::Number, K::Number],
        "for range",
    ))
}

fn choose(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let test = pass.value(block, "TEST")?;
    let then = pass.value(block, "THENRETURN")?;
    let otherwise = pass.value(block, "ELSERETURN")?;
    Ok(Expr::if_(test, then, Some(otherwise)))
}

fn do_then_return(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let mut body = pass.statements(block, "STACK")?;
    let result = pass.optional_value(block, "RETURN")?;
    Ok(match result {
        Some(result) if body.is_empty() => result,
        Some(result) => {
            body.push(result);
            Expr::begin(body)
        }
        None if body.len() == 1 => body.remove(0),
        None if body.is_empty() => Expr::string(""),
        None => Expr::begin(body),
    })
}

/// Iterates the dictionary's pairs, binding key and value as locals.
fn for_each_dict(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let key = format!("$local_{}", block.field("KEY").unwrap_or("key"));
    let value = format!("$local_{}", block.field("VALUE").unwrap_or("value"));
    let pair = get_var("item");

    let body = pass.statements(block, "DO")?;
    let dictionary = pass.value_or(block, "DICT", empty_dictionary())?;

    let bindings = Expr::list(vec![
        Expr::list(vec![Expr::symbol(key), list_item(pair.clone(), 1)]),
        Expr::list(vec![Expr::symbol(value), list_item(pair, 2)]),
    ]);
    let mut scoped = vec![bindings];
    scoped.extend(body);

    Ok(Expr::call(
        "foreach",
        vec![Expr::symbol("item"), Expr::call("let", scoped), dictionary],
    ))
}

fn break_(_pass: &mut Pass<'_>, _block: &Block) -> Result<Expr, CompileError> {
    Ok(Expr::call("*yail-break*", vec![Expr::boolean(false)]))
}

fn eval_but_ignore(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let value = pass.value_or(block, "VALUE", Expr::boolean(false))?;
    Ok(Expr::begin(vec![value, Expr::string("ignored")]))
}

fn nothing(_pass: &mut Pass<'_>, _block: &Block) -> Result<Expr, CompileError> {
    Ok(Expr::null())
}

fn open_another_screen(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let screen = pass.value_or(block, "SCREEN", Expr::symbol("null"))?;
    Ok(primitive_call(
        "open-another-screen",
        vec![screen],
        &[K::Text],
        "open another screen",
    ))
}

fn open_another_screen_with_start_value(
    pass: &mut Pass<'_>,
    block: &Block,
) -> Result<Expr, CompileError> {
    let screen = pass.value_or(block, "SCREENNAME", Expr::symbol("null"))?;
    let start = pass.value_or(block, "STARTVALUE", Expr::symbol("null"))?;
    Ok(primitive_call(
        "open-another-screen-with-start-value",
        vec![screen, start],
        &[K::Text, K::Any],
        "open another screen with start value",
    ))
}

fn get_start_value(_pass: &mut Pass<'_>, _block: &Block) -> Result<Expr, CompileError> {
    Ok(primitive_call("get-start-value", vec![], &[], "get start value"))
}

fn close_screen(_pass: &mut Pass<'_>, _block: &Block) -> Result<Expr, CompileError> {
    Ok(primitive_call("close-screen", vec![], &[], "close screen"))
}

fn close_screen_with_value(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let value = pass.value_or(block, "SCREEN", Expr::symbol("null"))?;
    Ok(primitive_call(
        "close-screen-with-value",
        vec![value],
        &[K::Any],
        "close screen with value",
    ))
}

fn close_application(_pass: &mut Pass<'_>, _block: &Block) -> Result<Expr, CompileError> {
    Ok(primitive_call("close-application", vec![], &[], "close application"))
}

fn get_plain_start_text(_pass: &mut Pass<'_>, _block: &Block) -> Result<Expr, CompileError> {
    Ok(primitive_call(
        "get-plain-start-text",
        vec![],
        &[],
        "get plain start text",
    ))
}

fn close_screen_with_plain_text(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let text = pass.value_or(block, "TEXT", Expr::boolean(false))?;
    Ok(primitive_call(
        "close-screen-with-plain-text",
        vec![text],
        &[K::Text],
        "close screen with plain text",
    ))
}
