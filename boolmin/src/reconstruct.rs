//! Reconstructs an expression tree from a set of implicants and the variables list they were
//! computed against.

use crate::expr::Expr;
use crate::qm::Implicant;

/// Builds the product term for one implicant: a variable for each fixed bit with value 1, its
/// negation for each fixed bit with value 0, chained by left-associative `And`. An implicant
/// with an all-zero mask (no fixed bits) becomes `Constant(true)`.
fn product(implicant: &Implicant, variables: &[char]) -> Expr {
    let k = variables.len();
    let literals: Vec<Expr> = variables
        .iter()
        .enumerate()
        .filter_map(|(i, &letter)| {
            let bit = k - 1 - i;
            if (implicant.mask >> bit) & 1 == 0 {
                return None;
            }
            let value_bit = (implicant.value >> bit) & 1 != 0;
            Some(if value_bit {
                Expr::variable(letter)
            } else {
                Expr::not(Expr::variable(letter))
            })
        })
        .collect();

    literals.into_iter().reduce(Expr::and).unwrap_or_else(|| Expr::constant(true))
}

/// Reconstructs a sum-of-products expression from `implicants`, scanning `variables` at list
/// index `i` against bit `(variables.len() - 1 - i)` of each implicant's value and mask (the
/// same encoding minterm enumeration uses). An empty implicant set becomes `Constant(false)`.
pub fn expr_from_implicants(implicants: &[Implicant], variables: &[char]) -> Expr {
    implicants
        .iter()
        .map(|implicant| product(implicant, variables))
        .reduce(Expr::or)
        .unwrap_or_else(|| Expr::constant(false))
}
