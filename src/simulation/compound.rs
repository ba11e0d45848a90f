// src/simulation/compound.rs

//! Clifford gates and Pauli-basis measurements built from H, S, CNOT and
//! Z-basis measurement.

use super::{ChpSimulator, MeasureResult};
use crate::core::Result;
use crate::simulation::random::BitSource;

impl<B: BitSource> ChpSimulator<B> {
    /// Pauli X (bit flip): H S S H.
    pub fn x(&mut self, qubit: usize) -> Result<()> {
        self.hadamard(qubit)?;
        self.z(qubit)?;
        self.hadamard(qubit)
    }

    /// Pauli Y: Z followed by X, equal to Y up to global phase.
    pub fn y(&mut self, qubit: usize) -> Result<()> {
        self.z(qubit)?;
        self.x(qubit)
    }

    /// Pauli Z (phase flip): S S.
    pub fn z(&mut self, qubit: usize) -> Result<()> {
        self.phase(qubit)?;
        self.phase(qubit)
    }

    /// +90° rotation about X.
    pub fn sqrt_x(&mut self, qubit: usize) -> Result<()> {
        self.hadamard(qubit)?;
        self.phase(qubit)?;
        self.hadamard(qubit)
    }

    /// -90° rotation about X.
    pub fn sqrt_x_dag(&mut self, qubit: usize) -> Result<()> {
        self.hadamard(qubit)?;
        self.sqrt_z_dag(qubit)?;
        self.hadamard(qubit)
    }

    /// +90° rotation about Z; the same as [`phase`](Self::phase).
    pub fn sqrt_z(&mut self, qubit: usize) -> Result<()> {
        self.phase(qubit)
    }

    /// -90° rotation about Z: S S S.
    pub fn sqrt_z_dag(&mut self, qubit: usize) -> Result<()> {
        self.phase(qubit)?;
        self.phase(qubit)?;
        self.phase(qubit)
    }

    /// 180° rotation about X+Z; the same as [`hadamard`](Self::hadamard).
    pub fn h_xz(&mut self, qubit: usize) -> Result<()> {
        self.hadamard(qubit)
    }

    /// 180° rotation about Y+Z, exchanging the Y and Z axes.
    pub fn h_yz(&mut self, qubit: usize) -> Result<()> {
        self.hadamard(qubit)?;
        self.phase(qubit)?;
        self.hadamard(qubit)?;
        self.z(qubit)
    }

    /// 180° rotation about X+Y, exchanging the X and Y axes.
    pub fn h_xy(&mut self, qubit: usize) -> Result<()> {
        self.x(qubit)?;
        self.phase(qubit)
    }

    /// X gate controlled on the X axis of `control`.
    pub fn xnot(&mut self, control: usize, target: usize) -> Result<()> {
        self.check_pair(control, target, "XNOT")?;
        self.hadamard(control)?;
        self.cnot(control, target)?;
        self.hadamard(control)
    }

    /// Controlled-Z.
    pub fn cz(&mut self, control: usize, target: usize) -> Result<()> {
        self.check_pair(control, target, "CZ")?;
        self.hadamard(target)?;
        self.cnot(control, target)?;
        self.hadamard(target)
    }

    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_pair(a, b, "SWAP")?;
        self.cnot(a, b)?;
        self.cnot(b, a)?;
        self.cnot(a, b)
    }

    /// Z-basis measurement; the same as [`measure`](Self::measure).
    pub fn measure_z(&mut self, qubit: usize) -> Result<MeasureResult> {
        self.measure(qubit)
    }

    /// X-basis measurement. The qubit is left in `|+⟩` or `|-⟩`.
    pub fn measure_x(&mut self, qubit: usize) -> Result<MeasureResult> {
        self.hadamard(qubit)?;
        let result = self.measure(qubit)?;
        self.hadamard(qubit)?;
        Ok(result)
    }

    /// Y-basis measurement. The qubit is left in `|+i⟩` or `|-i⟩`.
    pub fn measure_y(&mut self, qubit: usize) -> Result<MeasureResult> {
        self.h_yz(qubit)?;
        let result = self.measure(qubit)?;
        self.h_yz(qubit)?;
        Ok(result)
    }

    /// Z-basis measurement, then flips the qubit back to `|0⟩` if it read 1.
    pub fn measure_z_and_reset(&mut self, qubit: usize) -> Result<MeasureResult> {
        let result = self.measure(qubit)?;
        if result.value() {
            self.x(qubit)?;
        }
        Ok(result)
    }

    /// X-basis measurement followed by a reset to `|0⟩`.
    pub fn measure_x_and_reset(&mut self, qubit: usize) -> Result<MeasureResult> {
        self.hadamard(qubit)?;
        self.measure_z_and_reset(qubit)
    }

    /// Y-basis measurement followed by a reset to `|0⟩`.
    pub fn measure_y_and_reset(&mut self, qubit: usize) -> Result<MeasureResult> {
        self.h_yz(qubit)?;
        self.measure_z_and_reset(qubit)
    }
}
