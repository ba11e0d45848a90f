// src/operations/mod.rs

//! Gate and measurement operations a driver can hand to
//! [`ChpSimulator::apply`](crate::ChpSimulator::apply) one at a time.
//!
//! Every operation is a Clifford unitary or a Pauli-basis measurement, so all
//! of them reduce to H, S, CNOT and Z-basis measurement on the tableau.

use std::fmt;

/// Pauli axis along which a qubit is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureBasis {
    X,
    Y,
    Z,
}

impl fmt::Display for MeasureBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureBasis::X => write!(f, "X"),
            MeasureBasis::Y => write!(f, "Y"),
            MeasureBasis::Z => write!(f, "Z"),
        }
    }
}

/// A single stabilizer-circuit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Hadamard (X ↔ Z).
    Hadamard { target: usize },
    /// S gate, the quarter turn about Z.
    Phase { target: usize },
    /// Controlled-NOT.
    Cnot { control: usize, target: usize },
    /// Controlled-Z. Symmetric in its two qubits.
    Cz { control: usize, target: usize },
    /// Exchanges the states of two qubits.
    Swap { qubit1: usize, qubit2: usize },
    PauliX { target: usize },
    PauliY { target: usize },
    PauliZ { target: usize },
    /// Measurement along `basis`; the qubit is left in the observed eigenstate.
    Measure { target: usize, basis: MeasureBasis },
    /// Measurement along `basis` followed by a reset of the qubit to `|0⟩`.
    MeasureReset { target: usize, basis: MeasureBasis },
}

impl Operation {
    /// Every qubit index the operation reads or writes.
    pub fn involved_qubits(&self) -> Vec<usize> {
        match *self {
            Operation::Hadamard { target }
            | Operation::Phase { target }
            | Operation::PauliX { target }
            | Operation::PauliY { target }
            | Operation::PauliZ { target }
            | Operation::Measure { target, .. }
            | Operation::MeasureReset { target, .. } => vec![target],
            Operation::Cnot { control, target } | Operation::Cz { control, target } => {
                vec![control, target]
            }
            Operation::Swap { qubit1, qubit2 } => vec![qubit1, qubit2],
        }
    }

    /// `true` for the operations that produce a measurement record.
    pub fn is_measurement(&self) -> bool {
        matches!(self, Operation::Measure { .. } | Operation::MeasureReset { .. })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Hadamard { target } => write!(f, "H {}", target),
            Operation::Phase { target } => write!(f, "S {}", target),
            Operation::Cnot { control, target } => write!(f, "CNOT {} {}", control, target),
            Operation::Cz { control, target } => write!(f, "CZ {} {}", control, target),
            Operation::Swap { qubit1, qubit2 } => write!(f, "SWAP {} {}", qubit1, qubit2),
            Operation::PauliX { target } => write!(f, "X {}", target),
            Operation::PauliY { target } => write!(f, "Y {}", target),
            Operation::PauliZ { target } => write!(f, "Z {}", target),
            Operation::Measure { target, basis } => write!(f, "M{} {}", basis, target),
            Operation::MeasureReset { target, basis } => write!(f, "MR{} {}", basis, target),
        }
    }
}
