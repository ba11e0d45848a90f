// src/core/pauli.rs

//! Single-qubit Pauli operators and the phase rule for their products.

use std::fmt;

/// A single-qubit Pauli operator, ignoring phase.
///
/// Encoded in a tableau row as an `(x, z)` bit pair:
///
/// | x | z | Pauli |
/// |---|---|-------|
/// | 0 | 0 | I     |
/// | 1 | 0 | X     |
/// | 1 | 1 | Y     |
/// | 0 | 1 | Z     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pauli {
    I,
    X,
    Y,
    Z,
}

impl Pauli {
    /// Decodes an `(x, z)` bit pair.
    pub fn from_bits(x: bool, z: bool) -> Self {
        match (x, z) {
            (false, false) => Pauli::I,
            (true, false) => Pauli::X,
            (true, true) => Pauli::Y,
            (false, true) => Pauli::Z,
        }
    }

    /// Encodes the operator as its `(x, z)` bit pair.
    pub fn bits(self) -> (bool, bool) {
        match self {
            Pauli::I => (false, false),
            Pauli::X => (true, false),
            Pauli::Y => (true, true),
            Pauli::Z => (false, true),
        }
    }

    /// The glyph used when rendering a tableau. Identity renders as `.` so
    /// that the non-trivial entries stand out.
    pub fn symbol(self) -> char {
        match self {
            Pauli::I => '.',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pauli::I => "I",
            Pauli::X => "X",
            Pauli::Y => "Y",
            Pauli::Z => "Z",
        };
        write!(f, "{}", name)
    }
}

/// Returns the power of `i` picked up by the product of two single-qubit
/// Paulis, each given as an `(x, z)` bit pair.
///
/// For example `X·Y = iZ`, so `pauli_product_phase(true, false, true, true)`
/// is `1`. The result is always in `-1..=1`.
pub fn pauli_product_phase(x1: bool, z1: bool, x2: bool, z2: bool) -> i32 {
    let (x2, z2) = (x2 as i32, z2 as i32);
    match (x1, z1) {
        // I·P = P
        (false, false) => 0,
        // YI = Y, YX = -iZ, YY = I, YZ = iX
        (true, true) => z2 - x2,
        // XI = X, XX = I, XY = iZ, XZ = -iY
        (true, false) => z2 * (2 * x2 - 1),
        // ZI = Z, ZX = iY, ZY = -iX, ZZ = I
        (false, true) => x2 * (1 - 2 * z2),
    }
}
