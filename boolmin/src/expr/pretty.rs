//! The canonical printer: a two-pass writer that computes the exact output length before
//! allocating, then fills a pre-sized buffer.

use super::{Expr, Op};

/// The precedence of `expr` if it is an operation, `None` for a constant or variable (those
/// never need parenthesization on their own).
fn operand_precedence(expr: &Expr) -> Option<u8> {
    match expr {
        Expr::Operation { op, .. } => Some(op.precedence()),
        _ => None,
    }
}

/// Whether `operand` needs parentheses when printed as a child of `parent`, given the
/// strictness of the comparison (`<` for most positions, `<=` for `Or`'s right operand to
/// preserve left-associative grouping).
fn needs_parens(operand: &Expr, parent: Op, inclusive: bool) -> bool {
    match operand_precedence(operand) {
        Some(p) if inclusive => p <= parent.precedence(),
        Some(p) => p < parent.precedence(),
        None => false,
    }
}

/// Whether either operand of an `And` is a constant; `And`'s separator is `" * "` in that case
/// and plain juxtaposition otherwise.
fn and_needs_star(operands: &[Box<Expr>]) -> bool {
    matches!(*operands[0], Expr::Constant(_)) || matches!(*operands[1], Expr::Constant(_))
}

/// Computes the exact length of the canonical printed form of `expr`, with no allocation.
fn len(expr: &Expr) -> usize {
    match expr {
        Expr::Constant(_) => 1,
        Expr::Variable(_) => 1,
        Expr::Operation { op: Op::Not, operands } => {
            let operand = &operands[0];
            let mut n = len(operand) + 1; // trailing '
            if needs_parens(operand, Op::Not, false) {
                n += 2;
            }
            n
        }
        Expr::Operation { op, operands } if *op == Op::And || *op == Op::Or => {
            let separator_len = if *op == Op::And {
                if and_needs_star(operands) { 3 } else { 0 }
            } else {
                3
            };

            let left_parens = needs_parens(&operands[0], *op, false);
            let right_inclusive = *op == Op::Or;
            let right_parens = needs_parens(&operands[1], *op, right_inclusive);

            let mut n = len(&operands[0]) + separator_len + len(&operands[1]);
            if left_parens {
                n += 2;
            }
            if right_parens {
                n += 2;
            }
            n
        }
        Expr::Operation { .. } => unreachable!("Not handled above; And/Or are the only binaries"),
    }
}

/// Writes the canonical printed form of `expr` into `out`.
fn write(expr: &Expr, out: &mut String) {
    match expr {
        Expr::Constant(value) => out.push(if *value { '1' } else { '0' }),
        Expr::Variable(letter) => out.push(*letter),
        Expr::Operation { op: Op::Not, operands } => {
            let operand = &operands[0];
            if needs_parens(operand, Op::Not, false) {
                out.push('(');
                write(operand, out);
                out.push(')');
            } else {
                write(operand, out);
            }
            out.push('\'');
        }
        Expr::Operation { op, operands } if *op == Op::And || *op == Op::Or => {
            let left = &operands[0];
            let right = &operands[1];

            if needs_parens(left, *op, false) {
                out.push('(');
                write(left, out);
                out.push(')');
            } else {
                write(left, out);
            }

            if *op == Op::And {
                if and_needs_star(operands) {
                    out.push_str(" * ");
                }
            } else {
                out.push_str(" + ");
            }

            let right_inclusive = *op == Op::Or;
            if needs_parens(right, *op, right_inclusive) {
                out.push('(');
                write(right, out);
                out.push(')');
            } else {
                write(right, out);
            }
        }
        Expr::Operation { .. } => unreachable!("Not handled above; And/Or are the only binaries"),
    }
}

/// Prints `expr` in its canonical textual form.
pub fn to_string(expr: &Expr) -> String {
    let expected_len = len(expr);
    let mut out = String::with_capacity(expected_len);
    write(expr, &mut out);
    debug_assert_eq!(out.len(), expected_len);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{Expr, Op};

    #[test]
    fn constants_and_variables() {
        assert_eq!(to_string(&Expr::constant(true)), "1");
        assert_eq!(to_string(&Expr::constant(false)), "0");
        assert_eq!(to_string(&Expr::variable('a')), "a");
    }

    #[test]
    fn and_juxtaposes_unless_a_constant_operand() {
        let e = Expr::and(Expr::variable('a'), Expr::variable('b'));
        assert_eq!(to_string(&e), "ab");

        let e = Expr::and(Expr::constant(true), Expr::variable('b'));
        assert_eq!(to_string(&e), "1 * b");
    }

    #[test]
    fn or_uses_plus_and_not_uses_trailing_quote() {
        let e = Expr::or(Expr::variable('a'), Expr::variable('b'));
        assert_eq!(to_string(&e), "a + b");

        let e = Expr::not(Expr::variable('a'));
        assert_eq!(to_string(&e), "a'");
    }

    #[test]
    fn lower_precedence_operands_are_parenthesized() {
        // (a + b) * c : the Or operand of an And must be parenthesized.
        let e = Expr::and(
            Expr::or(Expr::variable('a'), Expr::variable('b')),
            Expr::variable('c'),
        );
        assert_eq!(to_string(&e), "(a + b)c");

        // a + (b * c) would print without parens since And binds tighter than Or.
        let e = Expr::or(
            Expr::variable('a'),
            Expr::and(Expr::variable('b'), Expr::variable('c')),
        );
        assert_eq!(to_string(&e), "a + bc");
    }

    #[test]
    fn or_right_operand_parenthesized_on_equal_precedence() {
        // a + (b + c) must keep its parens to preserve left associativity on re-parse.
        let e = Expr::or(
            Expr::variable('a'),
            Expr::or(Expr::variable('b'), Expr::variable('c')),
        );
        assert_eq!(to_string(&e), "a + (b + c)");

        // (a + b) + c has no need for parens; left-associative grouping is the default shape.
        let e = Expr::or(
            Expr::or(Expr::variable('a'), Expr::variable('b')),
            Expr::variable('c'),
        );
        assert_eq!(to_string(&e), "a + b + c");
    }

    #[test]
    fn not_parenthesizes_lower_precedence_operand() {
        let e = Expr::not(Expr::or(Expr::variable('a'), Expr::variable('b')));
        assert_eq!(to_string(&e), "(a + b)'");
    }

    #[test]
    fn length_matches_computed_length() {
        let e = Expr::or(
            Expr::and(Expr::variable('a'), Expr::not(Expr::variable('b'))),
            Expr::constant(true),
        );
        assert_eq!(to_string(&e).len(), len(&e));
    }
}
