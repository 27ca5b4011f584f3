//! Parser diagnostics and the pluggable sink they are reported through.
//!
//! The parser never fails outright: malformed input is recovered from in place and reported as
//! a [`Diagnostic`] value instead. What happens to that value is the sink's decision, not the
//! parser's; tests collect them into a `Vec`, the CLI forwards them through [`log`].

use thiserror::Error;

/// One non-fatal condition raised while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("unclosed parentheses at position {position} in \"{remainder}\"")]
    UnclosedParenthesis { position: usize, remainder: String },

    #[error("failed to parse constant from \"{remainder}\" at position {position}")]
    MalformedConstant { position: usize, remainder: String },

    #[error("constant parsed from \"{remainder}\" at position {position} is out of range")]
    IntegerLiteralOutOfRange { position: usize, remainder: String },

    #[error(
        "non-zero constant {value} parsed from \"{remainder}\" at position {position} will be \
         implicitly converted into a 1"
    )]
    NonBinaryConstantCoerced {
        position: usize,
        remainder: String,
        value: i64,
    },

    #[error("trailing characters \"{remainder}\" after expression")]
    TrailingCharacters { position: usize, remainder: String },
}

impl Diagnostic {
    /// Whether this diagnostic represents an error severe enough that the parser had to
    /// substitute a placeholder, as opposed to a mere warning about an otherwise-usable parse.
    pub fn is_error(&self) -> bool {
        matches!(self, Diagnostic::MalformedConstant { .. })
    }
}

/// A sink that receives [`Diagnostic`] values as the parser produces them.
pub trait Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics into a plain `Vec`, in the order they were reported.
impl Diagnostics for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Discards every diagnostic reported to it.
///
/// Useful when a caller wants the most forgiving possible parse and has no interest in why the
/// input was imperfect.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Forwards diagnostics through the [`log`] facade: errors at `error!`, warnings at `warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            log::error!("{diagnostic}");
        } else {
            log::warn!("{diagnostic}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_collects_in_order() {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        diagnostics.report(Diagnostic::TrailingCharacters {
            position: 3,
            remainder: "xyz".to_string(),
        });
        diagnostics.report(Diagnostic::MalformedConstant {
            position: 0,
            remainder: "".to_string(),
        });

        assert_eq!(diagnostics.len(), 2);
        assert!(matches!(diagnostics[0], Diagnostic::TrailingCharacters { .. }));
        assert!(matches!(diagnostics[1], Diagnostic::MalformedConstant { .. }));
    }

    #[test]
    fn null_sink_discards() {
        let mut sink = NullDiagnostics;
        sink.report(Diagnostic::TrailingCharacters {
            position: 0,
            remainder: "x".to_string(),
        });
    }

    #[test]
    fn malformed_constant_is_an_error_everything_else_is_a_warning() {
        assert!(Diagnostic::MalformedConstant {
            position: 0,
            remainder: String::new()
        }
        .is_error());
        assert!(!Diagnostic::TrailingCharacters {
            position: 0,
            remainder: String::new()
        }
        .is_error());
    }
}
