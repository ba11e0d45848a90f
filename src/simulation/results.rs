// src/simulation/results.rs
use std::fmt;

/// Outcome of a single-qubit measurement.
///
/// `determined` is `true` when the result was forced by the stabilizer group
/// (any repetition of the experiment gives the same value) and `false` when
/// it was a fair coin flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasureResult {
    value: bool,
    determined: bool,
}

impl MeasureResult {
    pub fn new(value: bool, determined: bool) -> Self {
        Self { value, determined }
    }

    /// A result implied by the current stabilizers.
    pub(crate) fn determined(value: bool) -> Self {
        Self::new(value, true)
    }

    /// A result drawn uniformly at random.
    pub(crate) fn random(value: bool) -> Self {
        Self::new(value, false)
    }

    /// The measured bit: `true` for `|1⟩`.
    pub fn value(&self) -> bool {
        self.value
    }

    pub fn is_determined(&self) -> bool {
        self.determined
    }

    pub fn is_random(&self) -> bool {
        !self.determined
    }
}

impl From<MeasureResult> for bool {
    fn from(result: MeasureResult) -> bool {
        result.value
    }
}

/// Compares the measured bit only, ignoring how it was obtained.
impl PartialEq<bool> for MeasureResult {
    fn eq(&self, other: &bool) -> bool {
        self.value == *other
    }
}

impl fmt::Display for MeasureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.determined { "determined" } else { "random" };
        write!(f, "{} ({})", self.value, kind)
    }
}
