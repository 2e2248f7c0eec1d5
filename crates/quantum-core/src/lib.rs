//! Conversion of pixel sample values into an image library's internal
//! quantum representation.
//!
//! Depth (`q8`, `q16`, `q32`) and storage (`hdri`) are fixed at build time
//! through Cargo features. Every conversion is total: values outside
//! `0..=QUANTUM_RANGE` saturate to the nearest bound.

pub mod error;

pub mod clamp;
pub mod convert;
pub mod depth;
pub mod quantum;
pub mod sample;

pub use crate::clamp::clamp_to_quantum;
pub use crate::convert::{convert, convert_row, convert_row_into, ToQuantum};
pub use crate::depth::{QuantumDepth, QuantumRepr, IS_HDRI, QUANTUM_DEPTH};
pub use crate::error::{QuantumError, Result};
pub use crate::quantum::{depth, max, Quantum, QUANTUM_RANGE};
pub use crate::sample::{Sample, SampleKind};
