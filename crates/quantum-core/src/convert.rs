// crates/quantum-core/src/convert.rs

use crate::clamp::clamp_to_quantum;
use crate::depth::QuantumDepth;
use crate::error::{QuantumError, Result};
use crate::quantum::Quantum;

/// Conversion of an externally supplied sample into a [`Quantum`].
///
/// Narrow integer kinds (`u8`, `i16`) are rescaled to the build's range.
/// Wide kinds (`i32`, `i64`, `f64`) are assumed to be quantum-scale already
/// and only saturate. Nothing here can fail.
pub trait ToQuantum {
    fn to_quantum(self) -> Quantum;
}

impl ToQuantum for u8 {
    #[inline]
    fn to_quantum(self) -> Quantum {
        clamp_to_quantum(self as f64 * QuantumDepth::BUILD.byte_scale())
    }
}

impl ToQuantum for i16 {
    #[inline]
    fn to_quantum(self) -> Quantum {
        clamp_to_quantum(self as f64 * QuantumDepth::BUILD.short_scale())
    }
}

impl ToQuantum for i32 {
    #[inline]
    fn to_quantum(self) -> Quantum {
        clamp_to_quantum(self as f64)
    }
}

impl ToQuantum for i64 {
    #[inline]
    fn to_quantum(self) -> Quantum {
        // Precision loss past 2^53 is irrelevant: those values saturate.
        clamp_to_quantum(self as f64)
    }
}

impl ToQuantum for f64 {
    #[inline]
    fn to_quantum(self) -> Quantum {
        clamp_to_quantum(self)
    }
}

impl ToQuantum for Quantum {
    #[inline]
    fn to_quantum(self) -> Quantum {
        clamp_to_quantum(self.to_f64())
    }
}

/// Convert one sample of any supported kind.
#[inline]
pub fn convert<T: ToQuantum>(value: T) -> Quantum {
    value.to_quantum()
}

/// Convert a row of samples.
pub fn convert_row<T: ToQuantum + Copy>(src: &[T]) -> Vec<Quantum> {
    src.iter().map(|&v| v.to_quantum()).collect()
}

/// Convert a row of samples into a caller-owned buffer of the same length.
///
/// Returns the number of samples written.
pub fn convert_row_into<T: ToQuantum + Copy>(src: &[T], dst: &mut [Quantum]) -> Result<usize> {
    if src.len() != dst.len() {
        return Err(QuantumError::Validation(format!(
            "row length mismatch: src={} dst={}",
            src.len(),
            dst.len()
        )));
    }
    for (out, &v) in dst.iter_mut().zip(src) {
        *out = v.to_quantum();
    }
    Ok(src.len())
}
