//! `exparse calc`: a one-shot calculator.

use std::io::Write;

use clap::Args;
use exparse::{BasicContext, ParseTree, ScalarValue, parse_expression, render_error};

use crate::error::CliError;

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Define a variable, auto-typed from its text (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
    vars: Vec<(String, String)>,

    /// Also print the debug markup of the folded tree
    #[arg(long)]
    markup: bool,

    /// Expression words, joined with spaces
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    expr: Vec<String>,
}

fn parse_var(text: &str) -> Result<(String, String), String> {
    match text.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(CliError::BadVariable(text.to_string()).to_string()),
    }
}

pub fn run(args: &CalcArgs) -> Result<(), CliError> {
    let source = args.expr.join(" ");

    let mut ctx = BasicContext::new();
    for (name, value) in &args.vars {
        ctx.set_variable(name.as_str(), ScalarValue::from_auto_string(value));
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    evaluate(&source, &ctx, args.markup, &mut out)
}

fn evaluate(
    source: &str,
    ctx: &BasicContext,
    markup: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let tree: ParseTree = parse_expression(source).map_err(|e| {
        render_error(source, &e);
        CliError::Reported
    })?;

    writeln!(out, "parsed: {}", tree)?;
    if markup {
        write!(out, "{}", tree.to_markup())?;
    }

    let value = tree.evaluate(ctx).map_err(|e| {
        render_error(source, &e);
        CliError::Reported
    })?;
    writeln!(out, "evaluated: {}", value)?;
    Ok(())
}
