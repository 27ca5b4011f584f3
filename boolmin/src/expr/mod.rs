//! The expression tree and its algebra: construction, evaluation, constant folding, and the
//! canonical printer.

use smallvec::SmallVec;
use strum::EnumIs;

use crate::environment::Environment;

pub mod pretty;

/// An operator applied to an expression's operands.
///
/// Role
///  - Tags an [`Expr::Operation`] node with which boolean connective it represents and, via
///    [`Op::arity`] and [`Op::precedence`], how many operands it takes and how tightly it binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs)]
pub enum Op {
    And,
    Or,
    Not,
}

impl Op {
    /// The number of operands this operator takes.
    pub fn arity(self) -> usize {
        match self {
            Op::And | Op::Or => 2,
            Op::Not => 1,
        }
    }

    /// The operator's binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Or => 0,
            Op::And => 1,
            Op::Not => 2,
        }
    }
}

/// A boolean expression tree.
///
/// Role
///  - The central data type of this crate: a literal, a single-letter variable, or an operation
///    over a fixed-arity sequence of owned operand subtrees.
///  - An expression exclusively owns its operands; cloning deep-copies the whole tree and
///    dropping releases it from the leaves up (see the [`Drop`] impl for why this is not the
///    derived recursive drop).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Constant(bool),
    Variable(char),
    Operation {
        op: Op,
        operands: SmallVec<[Box<Expr>; 2]>,
    },
}

impl Expr {
    /// Builds a constant expression.
    pub fn constant(value: bool) -> Self {
        Expr::Constant(value)
    }

    /// Builds a variable expression.
    ///
    /// `letter` must be an ASCII alphabet letter.
    pub fn variable(letter: char) -> Self {
        assert!(
            letter.is_ascii_alphabetic(),
            "variable name must be an ASCII letter, got {letter:?}"
        );
        Expr::Variable(letter)
    }

    /// Builds an operation expression. `operands` must match `op`'s arity.
    pub fn operation(op: Op, operands: impl IntoIterator<Item = Expr>) -> Self {
        let operands: SmallVec<[Box<Expr>; 2]> =
            operands.into_iter().map(Box::new).collect();
        assert_eq!(
            operands.len(),
            op.arity(),
            "operation {op:?} requires {} operand(s), got {}",
            op.arity(),
            operands.len()
        );
        Expr::Operation { op, operands }
    }

    /// Builds `a AND b`.
    pub fn and(a: Expr, b: Expr) -> Self {
        Self::operation(Op::And, [a, b])
    }

    /// Builds `a OR b`.
    pub fn or(a: Expr, b: Expr) -> Self {
        Self::operation(Op::Or, [a, b])
    }

    /// Builds `NOT a`.
    pub fn not(a: Expr) -> Self {
        Self::operation(Op::Not, [a])
    }

    /// Evaluates the expression under `env`.
    ///
    /// A variable with no `env` provided evaluates to `false`. `And`/`Or` short-circuit in
    /// left-to-right operand order.
    pub fn evaluate(&self, env: Option<&Environment>) -> bool {
        match self {
            Expr::Constant(value) => *value,
            Expr::Variable(letter) => env.map(|env| env.get(*letter)).unwrap_or(false),
            Expr::Operation { op, operands } => match op {
                Op::And => operands.iter().all(|operand| operand.evaluate(env)),
                Op::Or => operands.iter().any(|operand| operand.evaluate(env)),
                Op::Not => !operands[0].evaluate(env),
            },
        }
    }

    /// Constant-folds the expression in place.
    ///
    /// Recursively simplifies operands first, then applies `Not(Constant(v)) -> Constant(!v)`
    /// and the `And`/`Or` identity/annihilator rules for a constant operand. Variables are never
    /// eliminated; no environment is consulted, since none of these rules depend on one.
    pub fn simplify(&mut self) {
        let Expr::Operation { op, operands } = self else {
            return;
        };

        for operand in operands.iter_mut() {
            operand.simplify();
        }

        match op {
            Op::Not => {
                if let Expr::Constant(value) = *operands[0] {
                    *self = Expr::Constant(!value);
                }
            }
            Op::And => {
                if let Expr::Constant(left) = *operands[0] {
                    *self = if left {
                        (*operands[1]).clone()
                    } else {
                        Expr::Constant(false)
                    };
                } else if let Expr::Constant(right) = *operands[1] {
                    *self = if right {
                        (*operands[0]).clone()
                    } else {
                        Expr::Constant(false)
                    };
                }
            }
            Op::Or => {
                if let Expr::Constant(left) = *operands[0] {
                    *self = if left {
                        Expr::Constant(true)
                    } else {
                        (*operands[1]).clone()
                    };
                } else if let Expr::Constant(right) = *operands[1] {
                    *self = if right {
                        Expr::Constant(true)
                    } else {
                        (*operands[0]).clone()
                    };
                }
            }
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&pretty::to_string(self))
    }
}

// The default derived `Drop` for a recursive, `Box`-based enum recurses one stack frame per
// tree level, which overflows the stack for deep expressions (e.g. a long chain of implicit
// conjunctions). Detach operands onto an explicit work stack instead and drop them iteratively.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut stack: Vec<Expr> = Vec::new();

        if let Expr::Operation { operands, .. } = self {
            for operand in operands.drain(..) {
                stack.push(*operand);
            }
        }

        while let Some(mut expr) = stack.pop() {
            if let Expr::Operation { operands, .. } = &mut expr {
                for operand in operands.drain(..) {
                    stack.push(*operand);
                }
            }
        }
    }
}
