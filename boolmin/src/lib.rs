//! boolmin: parses a textual boolean formula, enumerates its minterms, and
//! minimizes it into a sum-of-products form via Quine-McCluskey.
//!
//! Pipeline
//!  - [`parser`] turns source text into an owned [`expr::Expr`] tree, never failing outright;
//!    malformed input produces a best-effort tree plus [`diagnostics::Diagnostic`] values.
//!  - [`minterms`] walks the tree to find its variables and the minterms it is true for.
//!  - [`qm`] generates prime implicants from those minterms with the tabular Quine-McCluskey
//!    method.
//!  - [`cover`] greedily selects a reduced covering subset of the prime implicants.
//!  - [`reconstruct`] turns the surviving implicants back into an [`expr::Expr`].
//!
//! Example
//! ```
//! use boolmin::prelude::*;
//!
//! let mut diagnostics = Vec::new();
//! let expr = parse("a'b + ab' + ab", &mut diagnostics);
//! assert!(diagnostics.is_empty());
//!
//! let vars = variables(&expr);
//! let minterms = enumerate_minterms(&expr, &vars);
//! let mut implicants = generate_prime_implicants(&minterms);
//! select_cover(&mut implicants, &minterms);
//! let minimized = expr_from_implicants(&implicants, &vars);
//!
//! assert_eq!(minimized.to_string(), "b + a");
//! ```

/// Cover selection: shrinks a prime-implicant set down to one that still covers every minterm.
pub mod cover;
/// Parser diagnostics and the pluggable sink they are reported through.
pub mod diagnostics;
/// The 52-slot variable valuation used to evaluate expressions.
pub mod environment;
/// The expression tree, its algebra, and its canonical printer.
pub mod expr;
/// Truth-table extraction: variables list and minterm enumeration.
pub mod minterms;
/// Hand-written recursive-descent parser for the expression grammar.
pub mod parser;
/// Quine-McCluskey prime-implicant generation.
pub mod qm;
/// Reconstructing an expression from a set of implicants.
pub mod reconstruct;

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - [`Expr`] and [`Op`] for building and inspecting expression trees
    //! - [`Environment`] for evaluation
    //! - [`parse`] and [`Diagnostic`] for turning text into a tree
    //! - the minimization pipeline: [`variables`], [`enumerate_minterms`],
    //!   [`generate_prime_implicants`], [`select_cover`], [`expr_from_implicants`]
    pub use crate::cover::select_cover;
    pub use crate::diagnostics::{Diagnostic, Diagnostics};
    pub use crate::environment::Environment;
    pub use crate::expr::{Expr, Op};
    pub use crate::minterms::{Minterms, enumerate_minterms, variables};
    pub use crate::parser::parse;
    pub use crate::qm::{Implicant, generate_prime_implicants};
    pub use crate::reconstruct::expr_from_implicants;
}
