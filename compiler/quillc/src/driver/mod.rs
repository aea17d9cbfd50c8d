//! Feeds input units to a [`Session`] and reports the outcome.
//!
//! Results go to `out`, diagnostics to `err`. Evaluation errors are ordinary
//! results; only lex and parse failures count as failed units.

use std::io::{self, BufRead, Write};

use quill_ir::Node;
use tracing::debug;

use crate::{parse_source, reporting, RunConfig, Session};

pub const PROMPT: &str = "quill> ";

/// Run one unit. Returns `Ok(false)` if it failed to lex or parse.
pub fn run_unit<W: Write, E: Write>(
    session: &mut Session,
    config: &RunConfig,
    name: &str,
    source: &str,
    out: &mut W,
    err: &mut E,
) -> io::Result<bool> {
    let expr = match parse_source(source) {
        Ok(expr) => expr,
        Err(error) => {
            debug!(%error, "input rejected");
            reporting::write_report(err, &error, name, source, config.color)?;
            return Ok(false);
        }
    };

    let node: Node = expr.into();
    if config.dump {
        write!(out, "{}", node.dump())?;
    }
    let result = session.evaluate_unit(&node);
    if !config.quiet || result.is_error() {
        writeln!(out, "{result}")?;
    }
    Ok(true)
}

/// Run each non-blank unit in order. Returns the number of failed units.
pub fn run_units<'a, I, W, E>(
    session: &mut Session,
    config: &RunConfig,
    name: &str,
    units: I,
    out: &mut W,
    err: &mut E,
) -> io::Result<usize>
where
    I: IntoIterator<Item = &'a str>,
    W: Write,
    E: Write,
{
    let mut failures = 0usize;
    for unit in units {
        if unit.trim().is_empty() {
            continue;
        }
        if !run_unit(session, config, name, unit, out, err)? {
            failures = failures.saturating_add(1);
        }
    }
    Ok(failures)
}

/// Prompt, read a line, run it; until end of input.
///
/// Failed units are reported and the loop continues.
pub fn repl<R: BufRead, W: Write, E: Write>(
    session: &mut Session,
    config: &RunConfig,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let unit = line.trim_end_matches(['\n', '\r']);
        if unit.trim().is_empty() {
            continue;
        }
        run_unit(session, config, "<stdin>", unit, out, err)?;
    }
}
