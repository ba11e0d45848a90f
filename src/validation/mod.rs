// src/validation/mod.rs

//! Provides functions to check a `Tableau` against the structural invariants
//! every reachable stabilizer state satisfies.
//!
//! The engine never calls these itself; the update rules preserve the
//! invariants algebraically. They exist for tests and for callers that build
//! or edit tableaus by hand.

use crate::core::{ChpError, PauliRow, Result, Tableau};

// --- Helper Functions ---

/// Gaussian elimination over GF(2) on packed bit rows. Consumes the rows.
fn gf2_rank_of(mut rows: Vec<Vec<u64>>) -> usize {
    let width = rows.first().map_or(0, |r| r.len() * u64::BITS as usize);
    let mut rank = 0;
    for col in 0..width {
        let (w, mask) = (col / u64::BITS as usize, 1u64 << (col % u64::BITS as usize));
        let Some(pivot) = (rank..rows.len()).find(|&r| rows[r][w] & mask != 0) else {
            continue;
        };
        rows.swap(rank, pivot);
        let pivot_row = rows[rank].clone();
        for (r, row) in rows.iter_mut().enumerate() {
            if r != rank && row[w] & mask != 0 {
                for (a, b) in row.iter_mut().zip(&pivot_row) {
                    *a ^= b;
                }
            }
        }
        rank += 1;
        if rank == rows.len() {
            break;
        }
    }
    rank
}

// --- Public Validation Functions ---

/// Symplectic inner product of two rows: `true` when they anticommute.
pub fn symplectic_product(a: &PauliRow, b: &PauliRow) -> bool {
    a.anticommutes_with(b)
}

/// Rank over GF(2) of the tableau's `(x, z)` bits, ignoring signs.
/// A valid n-qubit tableau has rank `2n`.
pub fn gf2_rank(tableau: &Tableau) -> usize {
    gf2_rank_of(tableau.rows().iter().map(PauliRow::symplectic_words).collect())
}

/// Checks the commutation structure of the generators.
///
/// # Returns
/// * `Ok(())` if stabilizers pairwise commute, destabilizers pairwise commute,
///   and destabilizer `i` anticommutes with stabilizer `j` exactly when `i == j`.
/// * `Err(ChpError::InvariantViolation)` naming the first offending pair otherwise.
pub fn check_commutation(tableau: &Tableau) -> Result<()> {
    let n = tableau.num_qubits();
    for i in 0..2 * n {
        for j in (i + 1)..2 * n {
            let paired = j == i + n;
            if symplectic_product(tableau.row(i), tableau.row(j)) != paired {
                let relation = if paired { "commute" } else { "anticommute" };
                return Err(ChpError::InvariantViolation {
                    message: format!(
                        "rows {} ({}) and {} ({}) {} but should not",
                        i,
                        tableau.row(i),
                        j,
                        tableau.row(j),
                        relation
                    ),
                });
            }
        }
    }
    Ok(())
}

/// Checks that the `2n` generators are linearly independent over GF(2).
///
/// # Returns
/// * `Ok(())` if the rank is `2n`.
/// * `Err(ChpError::InvariantViolation)` with the observed rank otherwise.
pub fn check_rank(tableau: &Tableau) -> Result<()> {
    let rank = gf2_rank(tableau);
    let expected = tableau.num_rows();
    if rank != expected {
        return Err(ChpError::InvariantViolation {
            message: format!("generator rank is {}, expected {}", rank, expected),
        });
    }
    Ok(())
}

/// Runs every tableau check.
pub fn validate_tableau(tableau: &Tableau) -> Result<()> {
    check_rank(tableau)?;
    check_commutation(tableau)?;
    Ok(())
}
