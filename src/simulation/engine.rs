// src/simulation/engine.rs
use crate::core::{PauliRow, Tableau};
use crate::simulation::MeasureResult;
use crate::simulation::random::BitSource;
use tracing::{debug, trace};

/// The tableau engine: gate update rules and the measurement algorithm.
///
/// Indices are assumed valid here; `ChpSimulator` checks them before
/// delegating, and the raw tableau accessors panic on anything that slips
/// through. (Internal visibility)
pub(crate) struct SimulationEngine<B> {
    tableau: Tableau,
    bits: B,
}

impl<B: BitSource> SimulationEngine<B> {
    /// Engine in the `|0…0⟩` state.
    pub(crate) fn init(num_qubits: usize, bits: B) -> Self {
        Self {
            tableau: Tableau::new(num_qubits),
            bits,
        }
    }

    pub(crate) fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    #[cfg(test)]
    pub(crate) fn tableau_mut(&mut self) -> &mut Tableau {
        &mut self.tableau
    }

    pub(crate) fn bits_mut(&mut self) -> &mut B {
        &mut self.bits
    }

    /// H: X ↔ Z, Y → -Y.
    pub(crate) fn hadamard(&mut self, qubit: usize) {
        trace!(qubit, "hadamard");
        for row in self.tableau.rows_mut() {
            let (x, z) = (row.x(qubit), row.z(qubit));
            row.set_phase(row.phase() ^ (x & z));
            row.set_x(qubit, z);
            row.set_z(qubit, x);
        }
    }

    /// S: X → Y, Y → -X, Z → Z.
    pub(crate) fn phase(&mut self, qubit: usize) {
        trace!(qubit, "phase");
        for row in self.tableau.rows_mut() {
            let (x, z) = (row.x(qubit), row.z(qubit));
            row.set_phase(row.phase() ^ (x & z));
            row.set_z(qubit, z ^ x);
        }
    }

    /// CNOT: X_c → X_c X_t, Z_t → Z_c Z_t, X_t and Z_c unchanged.
    pub(crate) fn cnot(&mut self, control: usize, target: usize) {
        debug_assert_ne!(control, target);
        trace!(control, target, "cnot");
        for row in self.tableau.rows_mut() {
            let (xc, zc) = (row.x(control), row.z(control));
            let (xt, zt) = (row.x(target), row.z(target));
            row.set_phase(row.phase() ^ (xc & zt & !(xt ^ zc)));
            row.set_x(target, xt ^ xc);
            row.set_z(control, zc ^ zt);
        }
    }

    /// Z-basis measurement of `qubit`, collapsing the tableau when the
    /// outcome is random.
    pub(crate) fn measure(&mut self, qubit: usize) -> MeasureResult {
        let n = self.tableau.num_qubits();
        // A stabilizer with an X or Y on `qubit` anticommutes with Z_qubit.
        let anticommuting = (n..2 * n).find(|&p| self.tableau.x(p, qubit));
        match anticommuting {
            Some(p) => self.measure_random(qubit, p),
            None => self.measure_determined(qubit),
        }
    }

    fn measure_random(&mut self, qubit: usize, p: usize) -> MeasureResult {
        let n = self.tableau.num_qubits();
        let partner = p - n;
        // Row `partner` anticommutes with row p and is overwritten below.
        for i in 0..2 * n {
            if i != p && i != partner && self.tableau.x(i, qubit) {
                self.tableau.rowsum(i, p);
            }
        }
        self.tableau.copy_row(p, partner);

        let value = self.bits.next_bit();
        let pivot = self.tableau.row_mut(p);
        pivot.clear();
        pivot.set_z(qubit, true);
        pivot.set_phase(value);

        debug!(qubit, pivot = p, value, "random measurement");
        MeasureResult::random(value)
    }

    fn measure_determined(&self, qubit: usize) -> MeasureResult {
        let n = self.tableau.num_qubits();
        // ±Z_qubit is the product of the stabilizers whose destabilizer
        // partners anticommute with it.
        let mut scratch = PauliRow::identity(n);
        for i in 0..n {
            if self.tableau.x(i, qubit) {
                scratch.absorb(self.tableau.row(i + n));
            }
        }
        let value = scratch.phase();
        debug!(qubit, value, "determined measurement");
        MeasureResult::determined(value)
    }
}
