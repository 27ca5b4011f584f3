//! Quine-McCluskey prime-implicant generation: the tabular combination method, grouped by
//! masked one-bits popcount.

use std::collections::HashSet;

use crate::minterms::Minterms;

/// A partial assignment: `mask` marks which bit positions are fixed, `value`'s bits at those
/// positions give the fixed values. Bits where `mask` is 0 are don't-cares and are always kept
/// zeroed in `value`, so two implicants that cover the same set of assignments also compare
/// equal as raw `(value, mask)` tuples (see [`generate_prime_implicants`]'s duplicate
/// suppression).
///
/// [`PartialEq`] implements the logical notion of implicant equality instead of raw tuple
/// equality: two implicants are equal when they fix the same bits to the same values, regardless
/// of what bit happens to be stored at a don't-care position.
#[derive(Debug, Clone, Copy)]
pub struct Implicant {
    pub value: u64,
    pub mask: u64,
}

impl PartialEq for Implicant {
    fn eq(&self, other: &Self) -> bool {
        self.mask == other.mask && (self.value ^ other.value) & self.mask == 0
    }
}
impl Eq for Implicant {}

impl Implicant {
    /// Whether this implicant covers minterm `m`.
    pub fn covers(&self, m: u64) -> bool {
        (self.value ^ m) & self.mask == 0
    }
}

/// Two implicants combine when their masks agree and they differ in exactly one fixed bit.
fn combinable(a: Implicant, b: Implicant) -> bool {
    a.mask == b.mask && ((a.value ^ b.value) & a.mask).count_ones() == 1
}

/// Combines two combinable implicants, clearing the mask at the bit where they differed.
fn combine(a: Implicant, b: Implicant) -> Implicant {
    let mask = a.mask & !(a.value ^ b.value);
    Implicant { value: a.value & mask, mask }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    implicant: Implicant,
    combined: bool,
}

/// Generates the prime implicants of `minterms` by the tabular Quine-McCluskey method.
///
/// Maintains two tables of `k + 1` groups (one group per masked one-bits popcount), alternating
/// as input and output across passes. Each pass tries to combine every term in group `g` with
/// every term in group `g + 1`; anything left uncombined at the end of a pass is a prime
/// implicant. Iteration stops once a pass makes no combinations.
pub fn generate_prime_implicants(minterms: &Minterms) -> Vec<Implicant> {
    let k = minterms.variables.len();
    let full_mask = if k == 0 { 0 } else { (1u64 << k) - 1 };

    let mut input: Vec<Vec<Entry>> = (0..=k).map(|_| Vec::new()).collect();
    for &m in &minterms.indices {
        let group = m.count_ones() as usize;
        input[group].push(Entry {
            implicant: Implicant { value: m, mask: full_mask },
            combined: false,
        });
    }

    let mut output: Vec<Vec<Entry>> = (0..=k).map(|_| Vec::new()).collect();
    let mut primes = Vec::new();

    loop {
        let mut seen_this_pass: HashSet<(u64, u64)> = HashSet::new();
        let mut any_combined = false;

        for g in 0..k {
            // group g and group g+1 are disjoint; split_at_mut lets both be scanned and have
            // their `combined` flags set in the same pass without a borrow conflict.
            let (left, right) = input.split_at_mut(g + 1);
            let group_g = &mut left[g];
            let group_g1 = &mut right[0];

            for a in group_g.iter_mut() {
                for b in group_g1.iter_mut() {
                    if combinable(a.implicant, b.implicant) {
                        a.combined = true;
                        b.combined = true;
                        any_combined = true;

                        let combined = combine(a.implicant, b.implicant);
                        if seen_this_pass.insert((combined.value, combined.mask)) {
                            let dest = combined.value.count_ones() as usize;
                            output[dest].push(Entry { implicant: combined, combined: false });
                        }
                    }
                }
            }
        }

        for group in &input {
            for entry in group {
                if !entry.combined {
                    primes.push(entry.implicant);
                }
            }
        }

        if !any_combined {
            break;
        }

        std::mem::swap(&mut input, &mut output);
        for group in &mut output {
            group.clear();
        }
    }

    primes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minterms(variables: &[char], indices: &[u64]) -> Minterms {
        Minterms {
            variables: variables.to_vec(),
            indices: indices.to_vec(),
        }
    }

    #[test]
    fn implicant_equality_ignores_dont_care_bits() {
        let a = Implicant { value: 0b10, mask: 0b10 };
        let b = Implicant { value: 0b11, mask: 0b10 };
        assert_eq!(a, b);

        let c = Implicant { value: 0b00, mask: 0b10 };
        assert_ne!(a, c);
    }

    #[test]
    fn single_minterm_yields_itself_as_the_only_prime() {
        let m = minterms(&['a'], &[1]);
        let primes = generate_prime_implicants(&m);
        assert_eq!(primes.len(), 1);
        assert_eq!(primes[0], Implicant { value: 1, mask: 0b1 });
    }

    #[test]
    fn two_adjacent_minterms_combine_into_one_prime() {
        // a=1 regardless of b: minterms 2 (10) and 3 (11) combine to value=10 mask=10 (just `a`).
        let m = minterms(&['a', 'b'], &[2, 3]);
        let primes = generate_prime_implicants(&m);
        assert_eq!(primes.len(), 1);
        assert_eq!(primes[0], Implicant { value: 0b10, mask: 0b10 });
    }

    #[test]
    fn scenario_a_b_plus_a_not_b_minimizes_to_a() {
        let m = minterms(&['a', 'b'], &[2, 3]);
        let primes = generate_prime_implicants(&m);
        assert!(primes.iter().all(|p| p.covers(2) && p.covers(3)));
    }

    #[test]
    fn constant_true_with_no_variables_yields_the_all_dont_care_implicant() {
        let m = minterms(&[], &[0]);
        let primes = generate_prime_implicants(&m);
        assert_eq!(primes, vec![Implicant { value: 0, mask: 0 }]);
    }

    #[test]
    fn no_minterms_yields_no_prime_implicants() {
        let m = minterms(&['a'], &[]);
        assert!(generate_prime_implicants(&m).is_empty());
    }

    #[test]
    fn every_minterm_is_covered_by_at_least_one_prime_implicant() {
        let m = minterms(&['a', 'b'], &[1, 2, 3]);
        let primes = generate_prime_implicants(&m);
        for &minterm in &m.indices {
            assert!(primes.iter().any(|p| p.covers(minterm)));
        }
    }
}
