// crates/quantum-core/src/quantum.rs

use crate::depth::{QuantumDepth, QuantumRepr, QUANTUM_DEPTH};

/// Maximum representable quantum value (QuantumRange) in storage units.
///
/// `2^depth - 1` in every build, HDRI included.
pub const QUANTUM_RANGE: QuantumRepr = QuantumDepth::BUILD.range_u64() as QuantumRepr;

/// One channel sample in the library's internal representation.
///
/// Values built through the conversion paths always lie in
/// `0..=QUANTUM_RANGE`. The field is public so callers can wrap raw buffer
/// contents; such values are re-validated by the `Quantum` overload of
/// [`crate::convert`].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(not(feature = "hdri"), derive(Eq, Ord, Hash))]
#[repr(transparent)]
pub struct Quantum(pub QuantumRepr);

impl Quantum {
    pub const ZERO: Quantum = Quantum(0 as QuantumRepr);
    pub const MAX: Quantum = Quantum(QUANTUM_RANGE);

    /// Build-time bit depth of the quantum type.
    #[inline]
    pub const fn depth() -> u32 {
        QUANTUM_DEPTH
    }

    /// Build-time maximum quantum value.
    #[inline]
    pub const fn max() -> Quantum {
        Quantum::MAX
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64
    }

    #[inline]
    pub fn is_max(self) -> bool {
        self.0 == QUANTUM_RANGE
    }

    /// Scale back down to an 8-bit sample, rounding to nearest.
    pub fn to_byte(self) -> u8 {
        QuantumDepth::BUILD.quantum_to_byte(self.to_f64())
    }

    /// Scale back down to a non-negative 16-bit signed sample, rounding to nearest.
    ///
    /// `MAX` maps to `i16::MAX` in every build.
    pub fn to_short(self) -> i16 {
        QuantumDepth::BUILD.quantum_to_short(self.to_f64())
    }
}

impl std::fmt::Display for Quantum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build-time bit depth (8, 16 or 32).
#[inline]
pub const fn depth() -> u32 {
    Quantum::depth()
}

/// Build-time maximum quantum value.
#[inline]
pub const fn max() -> Quantum {
    Quantum::max()
}
