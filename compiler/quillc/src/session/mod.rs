//! One evaluation session: a single environment that lives as long as the
//! host keeps the session, fed one input unit at a time.

use quill_eval::{evaluate, Builtin, Environment};
use quill_ir::{ExprKind, Expression, Node, Span};
use quill_lexer::LexError;
use quill_parse::ParseError;
use tracing::debug;

/// Why an input unit never reached the evaluator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SourceError {
    /// Location of the problem within the input unit. `None` means "at the end".
    pub fn span(&self) -> Option<Span> {
        match self {
            SourceError::Lex(err) => err.span(),
            SourceError::Parse(err) => err.span(),
        }
    }

    /// Short label attached to the span in rendered diagnostics.
    pub fn label(&self) -> String {
        match self {
            SourceError::Lex(LexError::UnrecognizedCharacter { .. }) => {
                "not valid here".to_owned()
            }
            SourceError::Lex(LexError::SourceTooLarge(_)) => "input too large".to_owned(),
            SourceError::Parse(err) => err.label(),
        }
    }
}

/// Lex and parse one input unit.
pub fn parse_source(source: &str) -> Result<Expression, SourceError> {
    let tokens = quill_lexer::lex(source)?;
    Ok(quill_parse::parse_expression(&tokens)?)
}

/// A long-lived environment plus the entry points that feed it.
#[derive(Debug, Default)]
pub struct Session {
    env: Environment,
}

impl Session {
    pub fn new() -> Self {
        Session {
            env: Environment::new(),
        }
    }

    /// Parse and evaluate one input unit.
    ///
    /// Lex and parse failures come back as `Err`; evaluation failures are
    /// `Ok(Node::Error(..))` like any other value.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run(&mut self, source: &str) -> Result<Node, SourceError> {
        let expr = parse_source(source)?;
        Ok(self.evaluate_unit(&expr.into()))
    }

    /// Evaluate a parsed input unit in this session's environment.
    ///
    /// A unit consisting of one identifier that is not a builtin name
    /// (`x`) evaluates that identifier, so entering a name shows its
    /// binding. Every other unit is evaluated as the S-expression it is.
    pub fn evaluate_unit(&mut self, unit: &Node) -> Node {
        let target = match unit {
            Node::Expression(expr) if expr.kind == ExprKind::SExpression => {
                match expr.elements.as_slice() {
                    [only @ Node::Identifier(name)] if Builtin::from_name(name).is_none() => only,
                    _ => unit,
                }
            }
            _ => unit,
        };
        let result = evaluate(target, &mut self.env);
        debug!(result = %result, "evaluated");
        result
    }
}
