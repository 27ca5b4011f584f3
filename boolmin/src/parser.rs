//! A hand-written recursive-descent parser for the expression grammar:
//!
//! ```text
//! atom       = '(' expression ')' | letter | integer
//! primary    = '!' primary | atom { '\'' }
//! factor     = primary { primary }          (implicit conjunction)
//! term       = factor { ('&' | '*') factor }
//! expression = term { ('|' | '+') term }
//! ```
//!
//! The parser never fails: malformed input is recovered from in place (a missing `)` is treated
//! as present, an unparsable constant becomes `Constant(false)`) and reported through the
//! [`Diagnostics`] sink instead of aborting the parse.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::expr::Expr;

struct Parser<'a, D: Diagnostics> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    diagnostics: &'a mut D,
}

impl<'a, D: Diagnostics> Parser<'a, D> {
    fn new(input: &'a str, diagnostics: &'a mut D) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            diagnostics,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn remainder(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| (b as char).is_whitespace()) {
            self.advance();
        }
    }

    fn parse_atom(&mut self) -> Expr {
        self.skip_whitespace();

        match self.peek() {
            Some(b'(') => {
                self.advance();
                let inner = self.parse_expression();
                self.skip_whitespace();
                if self.peek() == Some(b')') {
                    self.advance();
                } else {
                    self.diagnostics.report(Diagnostic::UnclosedParenthesis {
                        position: self.pos,
                        remainder: self.remainder().to_string(),
                    });
                }
                inner
            }
            Some(b) if (b as char).is_ascii_alphabetic() => {
                self.advance();
                Expr::variable(b as char)
            }
            _ => self.parse_integer_literal(),
        }
    }

    fn parse_integer_literal(&mut self) -> Expr {
        let start = self.pos;

        if matches!(self.peek(), Some(b'+') | Some(b'-')) {
            self.advance();
        }
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.advance();
        }

        let text = &self.input[start..self.pos];
        let digits_consumed = text.bytes().any(|b| b.is_ascii_digit());

        if !digits_consumed {
            self.pos = start;
            self.diagnostics.report(Diagnostic::MalformedConstant {
                position: start,
                remainder: self.remainder().to_string(),
            });
            return Expr::constant(false);
        }

        // Mirrors strtol's two independent checks: range overflow clamps the value but does not
        // stop the non-0/1 coercion warning from also firing below.
        let value = match text.parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                self.diagnostics.report(Diagnostic::IntegerLiteralOutOfRange {
                    position: start,
                    remainder: self.input[start..].to_string(),
                });
                if text.starts_with('-') { i64::MIN } else { i64::MAX }
            }
        };

        if value != 0 && value != 1 {
            self.diagnostics.report(Diagnostic::NonBinaryConstantCoerced {
                position: start,
                remainder: self.input[start..].to_string(),
                value,
            });
        }

        Expr::constant(value != 0)
    }

    fn parse_primary(&mut self) -> Expr {
        self.skip_whitespace();

        let mut result = if self.peek() == Some(b'!') {
            self.advance();
            Expr::not(self.parse_primary())
        } else {
            self.parse_atom()
        };

        loop {
            self.skip_whitespace();
            if self.peek() == Some(b'\'') {
                self.advance();
                result = Expr::not(result);
            } else {
                break;
            }
        }

        result
    }

    fn starts_primary(byte: u8) -> bool {
        byte == b'!' || byte == b'(' || (byte as char).is_ascii_alphabetic()
    }

    fn parse_factor(&mut self) -> Expr {
        let mut result = self.parse_primary();

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b) if Self::starts_primary(b) => {
                    let rhs = self.parse_primary();
                    result = Expr::and(result, rhs);
                }
                _ => break,
            }
        }

        result
    }

    fn parse_term(&mut self) -> Expr {
        let mut result = self.parse_factor();

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'&') | Some(b'*') => {
                    self.advance();
                    let rhs = self.parse_factor();
                    result = Expr::and(result, rhs);
                }
                _ => break,
            }
        }

        result
    }

    fn parse_expression(&mut self) -> Expr {
        let mut result = self.parse_term();

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'|') | Some(b'+') => {
                    self.advance();
                    let rhs = self.parse_term();
                    result = Expr::or(result, rhs);
                }
                _ => break,
            }
        }

        result
    }
}

/// Parses `input` into a best-effort expression tree, reporting recoverable problems to
/// `diagnostics`. Always returns a well-formed tree.
pub fn parse(input: &str, diagnostics: &mut impl Diagnostics) -> Expr {
    let mut parser = Parser::new(input, diagnostics);
    let expr = parser.parse_expression();

    parser.skip_whitespace();
    if parser.pos < parser.input.len() {
        let remainder = parser.remainder().to_string();
        parser.diagnostics.report(Diagnostic::TrailingCharacters {
            position: parser.pos,
            remainder,
        });
    }

    expr
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(input: &str) -> Expr {
        let mut diagnostics = Vec::new();
        let expr = parse(input, &mut diagnostics);
        assert!(diagnostics.is_empty(), "unexpected diagnostics: {diagnostics:?}");
        expr
    }

    #[test]
    fn parses_variables_and_constants() {
        assert_eq!(parse_ok("a"), Expr::variable('a'));
        assert_eq!(parse_ok("0"), Expr::constant(false));
        assert_eq!(parse_ok("1"), Expr::constant(true));
    }

    #[test]
    fn parses_prefix_and_postfix_negation() {
        assert_eq!(parse_ok("!a"), Expr::not(Expr::variable('a')));
        assert_eq!(parse_ok("a'"), Expr::not(Expr::variable('a')));
        assert_eq!(
            parse_ok("a''"),
            Expr::not(Expr::not(Expr::variable('a')))
        );
    }

    #[test]
    fn implicit_conjunction_binds_like_and() {
        assert_eq!(
            parse_ok("ab"),
            Expr::and(Expr::variable('a'), Expr::variable('b'))
        );
        assert_eq!(
            parse_ok("a b"),
            Expr::and(Expr::variable('a'), Expr::variable('b'))
        );
    }

    #[test]
    fn explicit_and_or_and_precedence() {
        assert_eq!(
            parse_ok("a & b"),
            Expr::and(Expr::variable('a'), Expr::variable('b'))
        );
        assert_eq!(
            parse_ok("a * b"),
            Expr::and(Expr::variable('a'), Expr::variable('b'))
        );
        assert_eq!(
            parse_ok("a | b"),
            Expr::or(Expr::variable('a'), Expr::variable('b'))
        );
        assert_eq!(
            parse_ok("a + bc"),
            Expr::or(
                Expr::variable('a'),
                Expr::and(Expr::variable('b'), Expr::variable('c'))
            )
        );
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(
            parse_ok("(a + b)c"),
            Expr::and(
                Expr::or(Expr::variable('a'), Expr::variable('b')),
                Expr::variable('c')
            )
        );
    }

    #[test]
    fn and_or_are_left_associative() {
        assert_eq!(
            parse_ok("a + b + c"),
            Expr::or(
                Expr::or(Expr::variable('a'), Expr::variable('b')),
                Expr::variable('c')
            )
        );
    }

    #[test]
    fn unclosed_parenthesis_recovers_and_reports() {
        let mut diagnostics = Vec::new();
        let expr = parse("(a + b", &mut diagnostics);
        assert_eq!(expr, Expr::or(Expr::variable('a'), Expr::variable('b')));
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(diagnostics[0], Diagnostic::UnclosedParenthesis { .. }));
    }

    #[test]
    fn non_binary_literal_is_coerced_to_true_with_a_diagnostic() {
        let mut diagnostics = Vec::new();
        let expr = parse("5", &mut diagnostics);
        assert_eq!(expr, Expr::constant(true));
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(
            diagnostics[0],
            Diagnostic::NonBinaryConstantCoerced { value: 5, .. }
        ));
    }

    #[test]
    fn missing_constant_substitutes_false_and_reports() {
        let mut diagnostics = Vec::new();
        let expr = parse("", &mut diagnostics);
        assert_eq!(expr, Expr::constant(false));
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(diagnostics[0], Diagnostic::MalformedConstant { .. }));
    }

    #[test]
    fn trailing_characters_are_reported_but_do_not_fail_the_parse() {
        let mut diagnostics = Vec::new();
        let expr = parse("a)", &mut diagnostics);
        assert_eq!(expr, Expr::variable('a'));
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(diagnostics[0], Diagnostic::TrailingCharacters { .. }));
    }

    #[test]
    fn whitespace_is_skipped_freely() {
        assert_eq!(
            parse_ok("  a  &  b  "),
            Expr::and(Expr::variable('a'), Expr::variable('b'))
        );
    }
}
