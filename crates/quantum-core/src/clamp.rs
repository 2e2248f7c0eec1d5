// crates/quantum-core/src/clamp.rs

use crate::depth::{QuantumRepr, IS_HDRI};
use crate::quantum::{Quantum, QUANTUM_RANGE};

/// Saturate a real value into `0..=QUANTUM_RANGE`.
///
/// - NaN and anything `<= 0` map to zero
/// - anything `>= QUANTUM_RANGE` maps to the maximum
/// - integer builds round half-up; HDRI builds keep the fraction
///
/// Total over `f64`; every conversion path ends here.
#[inline]
pub fn clamp_to_quantum(value: f64) -> Quantum {
    let range = QUANTUM_RANGE as f64;

    if value.is_nan() || value <= 0.0 {
        return Quantum::ZERO;
    }
    if value >= range {
        return Quantum::MAX;
    }
    if IS_HDRI {
        return Quantum(value as QuantumRepr);
    }

    // value + 0.5 < range + 0.5, so the floor stays in range.
    Quantum((value + 0.5).floor() as QuantumRepr)
}
