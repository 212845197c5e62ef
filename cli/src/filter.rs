//! `exparse filter`: copy the rows of delimited text that match an
//! expression.
//!
//! The first input line is the header and names the columns. Every later
//! line is a row; the expression sees its fields as variables.

use std::io::{BufRead, BufWriter, Write};

use clap::Args;
use exparse::{BasicContext, Context, ParseTree, Result, ScalarValue, parse_expression};

use crate::error::CliError;

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Field separator
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Filter expression words, joined with spaces
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    expr: Vec<String>,
}

pub fn run(args: &FilterArgs) -> Result<(), CliError> {
    let source = args.expr.join(" ");
    let tree = parse_expression(&source).map_err(|e| {
        exparse::render_error(&source, &e);
        CliError::Reported
    })?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = filter(&tree, &source, args.delimiter, stdin.lock(), &mut out)?;
    out.flush()?;

    eprintln!("{}", summary);
    Ok(())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub processed: usize,
    pub copied: usize,
    pub skipped: usize,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Processed {} lines, copied {} and skipped {} lines",
            self.processed, self.copied, self.skipped
        )
    }
}

/// Variables come from the current row. Anything else goes to `fallback`.
struct RowContext<'a> {
    header: &'a [String],
    fields: Vec<&'a str>,
    fallback: &'a BasicContext,
}

impl Context for RowContext<'_> {
    fn lookup_variable(&self, name: &str) -> Result<ScalarValue> {
        match self.header.iter().position(|column| column == name) {
            Some(index) => Ok(ScalarValue::from_auto_string(
                self.fields.get(index).copied().unwrap_or(""),
            )),
            None => self.fallback.lookup_variable(name),
        }
    }

    fn call_function(&self, name: &str, args: &[ScalarValue]) -> Result<ScalarValue> {
        self.fallback.call_function(name, args)
    }
}

fn filter(
    tree: &ParseTree,
    source: &str,
    delimiter: char,
    input: impl BufRead,
    out: &mut dyn Write,
) -> Result<Summary, CliError> {
    let mut lines = input.lines();
    let mut summary = Summary::default();

    let header_line = match lines.next() {
        Some(line) => line?,
        None => return Ok(summary),
    };
    writeln!(out, "{}", header_line)?;
    let header: Vec<String> = header_line
        .split(delimiter)
        .map(|column| column.trim().to_string())
        .collect();
    tracing::debug!(columns = ?header, "Read header");

    let fallback = BasicContext::new();
    for (index, line) in lines.enumerate() {
        let line = line?;
        summary.processed += 1;

        let row = RowContext {
            header: &header,
            fields: line.split(delimiter).collect(),
            fallback: &fallback,
        };

        match tree.evaluate(&row) {
            Ok(ScalarValue::Bool(true)) => {
                writeln!(out, "{}", line)?;
                summary.copied += 1;
            }
            Ok(ScalarValue::Bool(false)) => summary.skipped += 1,
            Ok(value) => {
                tracing::info!(row = index + 1, %value, "Expression is not a boolean, copying row");
                writeln!(out, "{}", line)?;
                summary.copied += 1;
            }
            Err(e) => {
                eprintln!("row {}: {}", index + 1, e);
                tracing::debug!(row = index + 1, expr = source, "Row skipped");
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}
