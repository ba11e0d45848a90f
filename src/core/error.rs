//! Error handling logic

use thiserror::Error;

/// Errors reported by the simulator.
///
/// Every variant describes a contract violation by the caller (or, for
/// `InvariantViolation`, a tableau that failed an explicit validation check).
#[derive(Debug, Clone, PartialEq, Eq, Error)] // Eq useful for testing error variants
pub enum ChpError {
    /// A qubit index outside `0..num_qubits` was passed to an operation.
    #[error("Qubit Out Of Range: qubit {qubit} does not exist in a {num_qubits}-qubit system")]
    QubitOutOfRange {
        /// The offending index
        qubit: usize,
        /// Width of the simulator that rejected it
        num_qubits: usize,
    },

    /// An operation is inconsistent with its own arguments (e.g. a CNOT whose
    /// control and target coincide).
    #[error("Invalid Operation: {message}")]
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },

    /// The requested qubit count produces a tableau too large to address.
    #[error("Capacity Overflow: a {num_qubits}-qubit tableau does not fit in addressable memory")]
    CapacityOverflow {
        /// Requested qubit count
        num_qubits: usize,
    },

    /// A tableau failed one of the checks in [`crate::validation`].
    #[error("Invariant Violation: {message}")]
    InvariantViolation {
        /// InvariantViolation failure message
        message: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChpError>;
