//! Greedy cover selection: shrinks a prime-implicant set down to a subset that still covers
//! every minterm.
//!
//! This is a documented heuristic, not an exact minimum set cover. It guarantees total coverage
//! because every minterm is either already covered when reached, or gets an implicant selected
//! for it on the spot.

use crate::minterms::Minterms;
use crate::qm::Implicant;

/// Shrinks `implicants` in place to a subset that still covers every minterm in `minterms`.
///
/// For each minterm (visited in ascending, i.e. natural, order): if it is already covered by a
/// previously selected implicant, it is skipped; otherwise the implicant covering it with the
/// highest remaining frequency is selected, breaking ties toward the first implicant encountered
/// (not the last; `Iterator::max_by_key` would pick the wrong one here). After a minterm is
/// handled, the frequency of every implicant covering it is decremented, so later choices reflect
/// only the coverage still needed.
pub fn select_cover(implicants: &mut Vec<Implicant>, minterms: &Minterms) {
    let factor_lists: Vec<Vec<usize>> = minterms
        .indices
        .iter()
        .map(|&m| {
            implicants
                .iter()
                .enumerate()
                .filter(|(_, implicant)| implicant.covers(m))
                .map(|(i, _)| i)
                .collect()
        })
        .collect();

    let mut frequency = vec![0usize; implicants.len()];
    for factors in &factor_lists {
        for &i in factors {
            frequency[i] += 1;
        }
    }

    let mut selected = vec![false; implicants.len()];

    for factors in &factor_lists {
        if !factors.iter().any(|&i| selected[i]) {
            let mut best: Option<usize> = None;
            for &i in factors {
                let is_new_best = match best {
                    None => true,
                    Some(current) => frequency[i] > frequency[current],
                };
                if is_new_best {
                    best = Some(i);
                }
            }
            if let Some(i) = best {
                selected[i] = true;
            }
        }

        for &i in factors {
            frequency[i] -= 1;
        }
    }

    let mut i = 0;
    implicants.retain(|_| {
        let keep = selected[i];
        i += 1;
        keep
    });
}
