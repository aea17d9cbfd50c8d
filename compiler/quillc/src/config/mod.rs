//! Command-line configuration for the `quill` binary.

use std::path::PathBuf;

/// Where input units come from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Read lines from stdin with a prompt.
    #[default]
    Repl,
    /// Each `-e` argument is one unit, in order.
    Expressions(Vec<String>),
    /// Each non-blank line of the file is one unit.
    File(PathBuf),
}

/// Options for one `quill` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: Mode,
    /// Print the parsed tree before evaluating each unit.
    pub dump: bool,
    /// Suppress non-error results.
    pub quiet: bool,
    /// Colorize diagnostics.
    pub color: bool,
    pub help: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            mode: Mode::Repl,
            dump: false,
            quiet: false,
            color: true,
            help: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("`{0}` requires a value")]
    MissingValue(String),
    #[error("unknown option `{0}`")]
    UnknownFlag(String),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error("`-e` cannot be combined with a file argument")]
    ConflictingInputs,
}

impl RunConfig {
    /// Parse arguments, not including the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = RunConfig::default();
        let mut exprs = Vec::new();
        let mut file: Option<PathBuf> = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-e" | "--eval" => {
                    let expr = args.next().ok_or(ConfigError::MissingValue(arg))?;
                    exprs.push(expr);
                }
                "--dump" => config.dump = true,
                "-q" | "--quiet" => config.quiet = true,
                "--no-color" => config.color = false,
                "-h" | "--help" => config.help = true,
                flag if flag.starts_with('-') && flag != "-" => {
                    return Err(ConfigError::UnknownFlag(arg));
                }
                _ if file.is_some() => return Err(ConfigError::UnexpectedArgument(arg)),
                _ => file = Some(PathBuf::from(arg)),
            }
        }

        config.mode = match (exprs.is_empty(), file) {
            (true, None) => Mode::Repl,
            (false, None) => Mode::Expressions(exprs),
            (true, Some(path)) => Mode::File(path),
            (false, Some(_)) => return Err(ConfigError::ConflictingInputs),
        };
        Ok(config)
    }
}

pub const USAGE: &str = "\
Usage: quill [OPTIONS] [FILE]

Without FILE or -e, starts an interactive session.

Options:
  -e, --eval <EXPR>  Evaluate EXPR (repeatable, runs in order)
      --dump         Print the parse tree of each input before evaluating
  -q, --quiet        Only print error results
      --no-color     Disable colored diagnostics
  -h, --help         Print this help

Set RUST_LOG (for example RUST_LOG=quill_eval=debug) for trace output.";
