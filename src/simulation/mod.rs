// src/simulation/mod.rs

//! Simulates stabilizer circuits one operation at a time.
//! This module contains the `ChpSimulator` entry point, its configuration,
//! and the internal `SimulationEngine` that owns the tableau.

mod compound;
pub(crate) mod engine;
pub mod random;
mod results;

pub use random::{BitSequence, BitSource, FixedBits, RngBits};
pub use results::MeasureResult;

use crate::core::{ChpError, Result, Tableau};
use crate::core::tableau::words_for;
use crate::operations::{MeasureBasis, Operation};
use engine::SimulationEngine;
use std::fmt;
use tracing::debug;

/// Settings for a simulator built with [`ChpSimulator::with_config`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Seed for the random-outcome generator. `None` draws a seed from the
    /// operating system, so runs differ.
    pub seed: Option<u64>,
}

impl SimulatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the generator seed, making every run with the same gates produce
    /// the same outcomes.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn bit_source(&self) -> RngBits {
        match self.seed {
            Some(seed) => RngBits::from_seed(seed),
            None => RngBits::from_entropy(),
        }
    }
}

/// An n-qubit stabilizer-state simulator.
///
/// The width is fixed at construction. Each qubit index passed to an
/// operation is checked against it and rejected with
/// [`ChpError::QubitOutOfRange`]; two-qubit gates also reject coinciding
/// qubits with [`ChpError::InvalidOperation`]. A rejected call leaves the
/// state untouched.
///
/// Gates cost O(n); measurements cost O(n²) in the worst case.
pub struct ChpSimulator<B: BitSource = RngBits> {
    engine: SimulationEngine<B>,
}

impl ChpSimulator {
    /// A simulator in `|0…0⟩` whose random outcomes are seeded from OS
    /// entropy.
    pub fn new(num_qubits: usize) -> Result<Self> {
        Self::with_config(num_qubits, SimulatorConfig::default())
    }

    pub fn with_config(num_qubits: usize, config: SimulatorConfig) -> Result<Self> {
        debug!(num_qubits, seed = ?config.seed, "creating simulator");
        Self::with_bit_source(num_qubits, config.bit_source())
    }
}

impl<B: BitSource> ChpSimulator<B> {
    /// A simulator in `|0…0⟩` that draws random outcomes from `bits`.
    ///
    /// # Errors
    /// [`ChpError::CapacityOverflow`] if the tableau for `num_qubits` cannot
    /// be addressed.
    pub fn with_bit_source(num_qubits: usize, bits: B) -> Result<Self> {
        check_capacity(num_qubits)?;
        Ok(Self {
            engine: SimulationEngine::init(num_qubits, bits),
        })
    }

    pub fn num_qubits(&self) -> usize {
        self.engine.tableau().num_qubits()
    }

    /// Read-only view of the destabilizer/stabilizer tableau.
    pub fn tableau(&self) -> &Tableau {
        self.engine.tableau()
    }

    pub fn bit_source_mut(&mut self) -> &mut B {
        self.engine.bits_mut()
    }

    /// Applies a Hadamard gate to `qubit`.
    pub fn hadamard(&mut self, qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;
        self.engine.hadamard(qubit);
        Ok(())
    }

    /// Applies an S gate to `qubit`.
    pub fn phase(&mut self, qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;
        self.engine.phase(qubit);
        Ok(())
    }

    /// Applies a CNOT with `control` and `target`.
    pub fn cnot(&mut self, control: usize, target: usize) -> Result<()> {
        self.check_pair(control, target, "CNOT")?;
        self.engine.cnot(control, target);
        Ok(())
    }

    /// Measures `qubit` in the computational (Z) basis.
    ///
    /// When the outcome is random the state collapses onto it, so measuring
    /// the same qubit again returns the same value as a determined result.
    pub fn measure(&mut self, qubit: usize) -> Result<MeasureResult> {
        self.check_qubit(qubit)?;
        Ok(self.engine.measure(qubit))
    }

    /// Applies one operation, returning the measurement result for
    /// measurement operations and `None` otherwise.
    pub fn apply(&mut self, op: &Operation) -> Result<Option<MeasureResult>> {
        match *op {
            Operation::Hadamard { target } => self.hadamard(target).map(|()| None),
            Operation::Phase { target } => self.phase(target).map(|()| None),
            Operation::Cnot { control, target } => self.cnot(control, target).map(|()| None),
            Operation::Cz { control, target } => self.cz(control, target).map(|()| None),
            Operation::Swap { qubit1, qubit2 } => self.swap(qubit1, qubit2).map(|()| None),
            Operation::PauliX { target } => self.x(target).map(|()| None),
            Operation::PauliY { target } => self.y(target).map(|()| None),
            Operation::PauliZ { target } => self.z(target).map(|()| None),
            Operation::Measure { target, basis } => {
                let result = match basis {
                    MeasureBasis::X => self.measure_x(target)?,
                    MeasureBasis::Y => self.measure_y(target)?,
                    MeasureBasis::Z => self.measure_z(target)?,
                };
                Ok(Some(result))
            }
            Operation::MeasureReset { target, basis } => {
                let result = match basis {
                    MeasureBasis::X => self.measure_x_and_reset(target)?,
                    MeasureBasis::Y => self.measure_y_and_reset(target)?,
                    MeasureBasis::Z => self.measure_z_and_reset(target)?,
                };
                Ok(Some(result))
            }
        }
    }

    /// Applies operations in order, collecting the measurement results.
    /// Stops at the first rejected operation; the ones before it stay applied.
    pub fn apply_all<'a, I>(&mut self, ops: I) -> Result<Vec<MeasureResult>>
    where
        I: IntoIterator<Item = &'a Operation>,
    {
        let mut results = Vec::new();
        for op in ops {
            if let Some(result) = self.apply(op)? {
                results.push(result);
            }
        }
        Ok(results)
    }

    fn check_qubit(&self, qubit: usize) -> Result<()> {
        let num_qubits = self.num_qubits();
        if qubit >= num_qubits {
            return Err(ChpError::QubitOutOfRange { qubit, num_qubits });
        }
        Ok(())
    }

    fn check_pair(&self, a: usize, b: usize, gate: &str) -> Result<()> {
        self.check_qubit(a)?;
        self.check_qubit(b)?;
        if a == b {
            return Err(ChpError::InvalidOperation {
                message: format!("{} needs two distinct qubits, got {} twice", gate, a),
            });
        }
        Ok(())
    }
}

impl<B: BitSource> fmt::Display for ChpSimulator<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.tableau(), f)
    }
}

impl<B: BitSource> fmt::Debug for ChpSimulator<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChpSimulator")
            .field("num_qubits", &self.num_qubits())
            .field("tableau", self.tableau())
            .finish_non_exhaustive()
    }
}

/// Rejects qubit counts whose tableau (2n rows of 2·⌈n/64⌉ words) would
/// overflow the address space.
fn check_capacity(num_qubits: usize) -> Result<()> {
    let bytes = num_qubits
        .checked_mul(2)
        .and_then(|rows| rows.checked_mul(2 * words_for(num_qubits)))
        .and_then(|words| words.checked_mul(std::mem::size_of::<u64>()))
        .filter(|&bytes| bytes <= isize::MAX as usize);
    match bytes {
        Some(_) => Ok(()),
        None => Err(ChpError::CapacityOverflow { num_qubits }),
    }
}
