//! Reads one boolean expression from standard input and prints its canonical form, its minterm
//! summary, and its minimized form.
//!
//! This binary is a thin external collaborator: all algorithmic work lives in the `boolmin`
//! library crate. It contributes only line-oriented I/O and exit-code wiring.

use std::io::{BufRead, Read, Write};

use boolmin::diagnostics::LogDiagnostics;
use boolmin::prelude::*;

/// Matches the reference implementation's `MAXIMUM_INPUT_LENGTH`: the line, including its
/// trailing newline, must fit in this many bytes.
const MAXIMUM_INPUT_LENGTH: usize = 1024;

fn main() {
    let stdin = std::io::stdin();
    let mut line = String::new();

    stdin
        .lock()
        .take(MAXIMUM_INPUT_LENGTH as u64)
        .read_line(&mut line)
        .expect("failed to read a line from standard input");

    let input = line.trim_end_matches(['\n', '\r']);

    let mut diagnostics = LogDiagnostics;
    let expr = parse(input, &mut diagnostics);

    let vars = variables(&expr);
    let minterms = enumerate_minterms(&expr, &vars);
    let mut implicants = generate_prime_implicants(&minterms);
    select_cover(&mut implicants, &minterms);
    let minimized = expr_from_implicants(&implicants, &vars);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{expr}").expect("failed to write to standard output");

    let var_list = vars
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let minterm_list = minterms
        .indices
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(out, "f({var_list}) = \u{03a3}m({minterm_list}) = {expr}")
        .expect("failed to write to standard output");
    writeln!(out, "{minimized}").expect("failed to write to standard output");
}
