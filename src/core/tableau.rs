// src/core/tableau.rs

//! Bit-packed storage for generator rows and the destabilizer/stabilizer
//! tableau built from them.

use super::pauli::{Pauli, pauli_product_phase};
use std::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// Number of `u64` words needed to hold one bit per qubit.
pub(crate) fn words_for(num_qubits: usize) -> usize {
    num_qubits.div_ceil(WORD_BITS)
}

#[inline]
fn locate(col: usize) -> (usize, u64) {
    (col / WORD_BITS, 1u64 << (col % WORD_BITS))
}

/// One generator of the tableau: an n-qubit Pauli product with a sign.
///
/// Qubit `j` contributes the pair `(x_j, z_j)` (see [`Pauli`]); the phase bit
/// is `false` for `+` and `true` for `-`. Bits are packed into `u64` words and
/// the unused high bits of the last word are kept at zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PauliRow {
    num_qubits: usize,
    x: Vec<u64>,
    z: Vec<u64>,
    phase: bool,
}

impl PauliRow {
    /// The `+I` row on `num_qubits` qubits.
    pub fn identity(num_qubits: usize) -> Self {
        let words = words_for(num_qubits);
        Self {
            num_qubits,
            x: vec![0; words],
            z: vec![0; words],
            phase: false,
        }
    }

    /// Builds a positive row from one Pauli per qubit.
    pub fn from_paulis(paulis: &[Pauli]) -> Self {
        let mut row = Self::identity(paulis.len());
        for (col, p) in paulis.iter().enumerate() {
            row.set_pauli(col, *p);
        }
        row
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[inline]
    #[track_caller]
    fn check_col(&self, col: usize) {
        assert!(
            col < self.num_qubits,
            "qubit column {} out of range for a {}-qubit row",
            col,
            self.num_qubits
        );
    }

    /// X bit of qubit `col`.
    #[inline]
    #[track_caller]
    pub fn x(&self, col: usize) -> bool {
        self.check_col(col);
        let (w, mask) = locate(col);
        self.x[w] & mask != 0
    }

    /// Z bit of qubit `col`.
    #[inline]
    #[track_caller]
    pub fn z(&self, col: usize) -> bool {
        self.check_col(col);
        let (w, mask) = locate(col);
        self.z[w] & mask != 0
    }

    /// Sign bit: `true` means the operator carries a `-1`.
    #[inline]
    pub fn phase(&self) -> bool {
        self.phase
    }

    #[inline]
    #[track_caller]
    pub fn set_x(&mut self, col: usize, value: bool) {
        self.check_col(col);
        let (w, mask) = locate(col);
        if value {
            self.x[w] |= mask;
        } else {
            self.x[w] &= !mask;
        }
    }

    #[inline]
    #[track_caller]
    pub fn set_z(&mut self, col: usize, value: bool) {
        self.check_col(col);
        let (w, mask) = locate(col);
        if value {
            self.z[w] |= mask;
        } else {
            self.z[w] &= !mask;
        }
    }

    #[inline]
    pub fn set_phase(&mut self, value: bool) {
        self.phase = value;
    }

    /// The Pauli acting on qubit `col`.
    #[track_caller]
    pub fn pauli(&self, col: usize) -> Pauli {
        Pauli::from_bits(self.x(col), self.z(col))
    }

    #[track_caller]
    pub fn set_pauli(&mut self, col: usize, pauli: Pauli) {
        let (x, z) = pauli.bits();
        self.set_x(col, x);
        self.set_z(col, z);
    }

    /// Resets the row to `+I`.
    pub fn clear(&mut self) {
        self.x.fill(0);
        self.z.fill(0);
        self.phase = false;
    }

    /// Number of qubits on which the row acts non-trivially.
    pub fn weight(&self) -> usize {
        self.x
            .iter()
            .zip(&self.z)
            .map(|(x, z)| (x | z).count_ones() as usize)
            .sum()
    }

    /// Symplectic inner product of the two rows: `true` when the operators
    /// anticommute.
    #[track_caller]
    pub fn anticommutes_with(&self, other: &PauliRow) -> bool {
        self.check_width(other);
        let ones: u32 = self
            .x
            .iter()
            .zip(&self.z)
            .zip(other.x.iter().zip(&other.z))
            .map(|((x1, z1), (x2, z2))| ((x1 & z2) ^ (z1 & x2)).count_ones())
            .sum();
        ones % 2 == 1
    }

    pub fn commutes_with(&self, other: &PauliRow) -> bool {
        !self.anticommutes_with(other)
    }

    #[inline]
    #[track_caller]
    fn check_width(&self, other: &PauliRow) {
        assert_eq!(
            self.num_qubits, other.num_qubits,
            "cannot combine rows of different widths"
        );
    }

    /// Exponent `k` (in `0..4`) such that `self · other = i^k · P`, where `P`
    /// is the sign-free product `self ⊕ other`. The signs of both rows are
    /// included.
    #[track_caller]
    pub fn product_phase_exponent(&self, other: &PauliRow) -> u8 {
        self.check_width(other);
        let mut acc = 2 * self.phase as i32 + 2 * other.phase as i32;
        for col in 0..self.num_qubits {
            acc += pauli_product_phase(self.x(col), self.z(col), other.x(col), other.z(col));
        }
        acc.rem_euclid(4) as u8
    }

    /// Replaces this row with the product `self · other` ("rowsum").
    ///
    /// # Panics
    /// If the product carries a phase of `±i`. That only happens when the two
    /// rows anticommute, which the tableau algorithms never allow, so reaching
    /// it means the engine itself is broken.
    #[track_caller]
    pub fn absorb(&mut self, other: &PauliRow) {
        self.phase = match self.product_phase_exponent(other) {
            0 => false,
            2 => true,
            k => panic!(
                "internal consistency fault: row product has phase i^{}, generators anticommute",
                k
            ),
        };
        for (a, b) in self.x.iter_mut().zip(&other.x) {
            *a ^= b;
        }
        for (a, b) in self.z.iter_mut().zip(&other.z) {
            *a ^= b;
        }
    }

    /// Concatenated X then Z words, used by the GF(2) rank computation.
    pub(crate) fn symplectic_words(&self) -> Vec<u64> {
        self.x.iter().chain(&self.z).copied().collect()
    }
}

impl fmt::Display for PauliRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.phase { '-' } else { '+' })?;
        for col in 0..self.num_qubits {
            write!(f, "{}", self.pauli(col).symbol())?;
        }
        Ok(())
    }
}

/// The destabilizer/stabilizer tableau of an n-qubit stabilizer state.
///
/// Rows `0..n` are destabilizers and rows `n..2n` are stabilizers; row `i`
/// and row `i + n` form a pair. A freshly built tableau describes `|0…0⟩`:
/// destabilizer `i` is `+X_i` and stabilizer `i` is `+Z_i`.
///
/// The accessors here are raw storage: they never check the commutation
/// structure (see [`crate::validation`] for that), and indices outside
/// `0..2n` / `0..n` panic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tableau {
    num_qubits: usize,
    rows: Vec<PauliRow>,
}

impl Tableau {
    /// Identity tableau for `num_qubits` qubits. Zero qubits gives an empty
    /// tableau.
    pub fn new(num_qubits: usize) -> Self {
        let mut rows = vec![PauliRow::identity(num_qubits); 2 * num_qubits];
        for q in 0..num_qubits {
            rows[q].set_x(q, true);
            rows[q + num_qubits].set_z(q, true);
        }
        Self { num_qubits, rows }
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Always `2 * num_qubits`.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[track_caller]
    pub fn x(&self, row: usize, col: usize) -> bool {
        self.rows[row].x(col)
    }

    #[inline]
    #[track_caller]
    pub fn z(&self, row: usize, col: usize) -> bool {
        self.rows[row].z(col)
    }

    #[inline]
    #[track_caller]
    pub fn phase(&self, row: usize) -> bool {
        self.rows[row].phase()
    }

    #[inline]
    #[track_caller]
    pub fn set_x(&mut self, row: usize, col: usize, value: bool) {
        self.rows[row].set_x(col, value);
    }

    #[inline]
    #[track_caller]
    pub fn set_z(&mut self, row: usize, col: usize, value: bool) {
        self.rows[row].set_z(col, value);
    }

    #[inline]
    #[track_caller]
    pub fn set_phase(&mut self, row: usize, value: bool) {
        self.rows[row].set_phase(value);
    }

    #[track_caller]
    pub fn row(&self, row: usize) -> &PauliRow {
        &self.rows[row]
    }

    #[track_caller]
    pub(crate) fn row_mut(&mut self, row: usize) -> &mut PauliRow {
        &mut self.rows[row]
    }

    /// All 2n rows, destabilizers first.
    pub fn rows(&self) -> &[PauliRow] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut PauliRow> {
        self.rows.iter_mut()
    }

    /// Destabilizer rows `0..n`.
    pub fn destabilizers(&self) -> &[PauliRow] {
        &self.rows[..self.num_qubits]
    }

    /// Stabilizer rows `n..2n`.
    pub fn stabilizers(&self) -> &[PauliRow] {
        &self.rows[self.num_qubits..]
    }

    /// Overwrites row `dst` with a copy of row `src`.
    #[track_caller]
    pub fn copy_row(&mut self, src: usize, dst: usize) {
        if src != dst {
            let source = self.rows[src].clone();
            self.rows[dst] = source;
        }
    }

    /// Rowsum: replaces row `h` with the product (row `h`)·(row `i`), leaving
    /// row `i` untouched.
    ///
    /// # Panics
    /// If `h == i`, if either index is out of range, or if the rows
    /// anticommute (see [`PauliRow::absorb`]).
    #[track_caller]
    pub fn rowsum(&mut self, h: usize, i: usize) {
        assert_ne!(h, i, "rowsum needs two distinct rows");
        let (target, source) = if h < i {
            let (lo, hi) = self.rows.split_at_mut(i);
            (&mut lo[h], &hi[0])
        } else {
            let (lo, hi) = self.rows.split_at_mut(h);
            (&mut hi[0], &lo[i])
        };
        target.absorb(source);
    }
}

impl fmt::Display for Tableau {
    /// Destabilizers, a rule of dashes as wide as a row, then stabilizers. No
    /// trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.destabilizers() {
            writeln!(f, "{}", row)?;
        }
        write!(f, "{}", "-".repeat(self.num_qubits + 1))?;
        for row in self.stabilizers() {
            write!(f, "\n{}", row)?;
        }
        Ok(())
    }
}
