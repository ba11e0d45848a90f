// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod pauli;
pub mod tableau;

// Re-export public types for convenient access via `chp_sim::core::TypeName`
pub use error::{ChpError, Result};
pub use pauli::{Pauli, pauli_product_phase};
pub use tableau::{PauliRow, Tableau};
