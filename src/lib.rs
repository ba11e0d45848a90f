// src/lib.rs

//! `chp_sim` - A simulator for quantum stabilizer circuits
//!
//! Circuits built from Hadamard, Phase (S) and CNOT gates plus computational
//! basis measurement are simulated in polynomial time by tracking 2n
//! destabilizer/stabilizer generators instead of 2ⁿ amplitudes.
//!
//! Reference: Scott Aaronson and Daniel Gottesman, "Improved Simulation of
//! Stabilizer Circuits", <https://arxiv.org/abs/quant-ph/0406196>.

pub mod core;
pub mod operations;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{ChpError, Pauli, PauliRow, Result, Tableau};
pub use operations::{MeasureBasis, Operation};
pub use simulation::{
    BitSequence, BitSource, ChpSimulator, FixedBits, MeasureResult, RngBits, SimulatorConfig,
};
pub use validation::{check_commutation, check_rank, gf2_rank, validate_tableau};

// Example 1: Bell pair
// The first measurement is a coin flip; the second is forced to agree.
/// ```
/// use chp_sim::{ChpSimulator, ChpError, SimulatorConfig};
///
/// let mut sim = ChpSimulator::with_config(2, SimulatorConfig::new().with_seed(11))?;
/// sim.hadamard(0)?;
/// sim.cnot(0, 1)?;
///
/// let first = sim.measure(0)?;
/// let second = sim.measure(1)?;
/// println!("q0 = {}, q1 = {}", first, second);
///
/// assert!(first.is_random());
/// assert!(second.is_determined());
/// assert_eq!(first.value(), second.value());
/// # Ok::<(), ChpError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Rendering the tableau
// Each line is a signed Pauli string; destabilizers sit above the rule and
// stabilizers below it.
/// ```
/// use chp_sim::{ChpSimulator, ChpError, FixedBits};
///
/// let mut sim = ChpSimulator::with_bit_source(3, FixedBits(false))?;
/// sim.hadamard(2)?;
/// sim.cnot(2, 0)?;
/// sim.cnot(2, 1)?;
/// sim.phase(0)?;
/// sim.phase(1)?;
/// sim.hadamard(0)?;
/// sim.hadamard(1)?;
/// sim.hadamard(2)?;
///
/// assert_eq!(
///     sim.to_string(),
///     "-Y..\n-.Y.\n+..X\n----\n+X.X\n+.XX\n+YYZ"
/// );
/// # Ok::<(), ChpError>(())
/// ```
#[doc(hidden)]
const _: () = ();
