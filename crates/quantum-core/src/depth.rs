// crates/quantum-core/src/depth.rs

use crate::error::{QuantumError, Result};

#[cfg(not(any(feature = "q8", feature = "q16", feature = "q32")))]
compile_error!("quantum-core needs one of the `q8`, `q16` or `q32` features");

/// Bits per channel sample, fixed at build time. The widest enabled
/// depth feature wins when several are unified into one build.
#[cfg(feature = "q32")]
pub const QUANTUM_DEPTH: u32 = 32;
#[cfg(all(feature = "q16", not(feature = "q32")))]
pub const QUANTUM_DEPTH: u32 = 16;
#[cfg(all(feature = "q8", not(any(feature = "q16", feature = "q32"))))]
pub const QUANTUM_DEPTH: u32 = 8;

/// True when samples are stored as floating point (no rounding on clamp).
pub const IS_HDRI: bool = cfg!(feature = "hdri");

/// Storage type behind [`crate::Quantum`].
#[cfg(all(not(feature = "hdri"), feature = "q32"))]
pub type QuantumRepr = u32;
#[cfg(all(not(feature = "hdri"), feature = "q16", not(feature = "q32")))]
pub type QuantumRepr = u16;
#[cfg(all(
    not(feature = "hdri"),
    feature = "q8",
    not(any(feature = "q16", feature = "q32"))
))]
pub type QuantumRepr = u8;
#[cfg(all(feature = "hdri", feature = "q32"))]
pub type QuantumRepr = f64;
#[cfg(all(feature = "hdri", not(feature = "q32")))]
pub type QuantumRepr = f32;

/// Supported quantum depths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuantumDepth {
    Q8,
    Q16,
    Q32,
}

impl QuantumDepth {
    /// Depth this crate was built with.
    pub const BUILD: QuantumDepth = match QUANTUM_DEPTH {
        8 => QuantumDepth::Q8,
        16 => QuantumDepth::Q16,
        _ => QuantumDepth::Q32,
    };

    pub fn from_bits(bits: u32) -> Result<QuantumDepth> {
        match bits {
            8 => Ok(QuantumDepth::Q8),
            16 => Ok(QuantumDepth::Q16),
            32 => Ok(QuantumDepth::Q32),
            other => Err(QuantumError::Validation(format!(
                "quantum depth must be 8, 16 or 32 (got {other})"
            ))),
        }
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            QuantumDepth::Q8 => 8,
            QuantumDepth::Q16 => 16,
            QuantumDepth::Q32 => 32,
        }
    }

    /// `2^bits - 1`, the maximum quantum value at this depth.
    #[inline]
    pub const fn range_u64(self) -> u64 {
        (1u64 << self.bits()) - 1
    }

    #[inline]
    pub fn range(self) -> f64 {
        self.range_u64() as f64
    }

    /// Factor applied to 8-bit samples: `range / 255`.
    ///
    /// Exact for every depth: 1, 257 and 16843009.
    #[inline]
    pub fn byte_scale(self) -> f64 {
        self.range() / 255.0
    }

    /// Factor applied to 16-bit signed samples: `2^bits / 2^15`.
    ///
    /// Q16 gives exactly 2, so `32767 -> 65534`; Q8 gives 1/128 and Q32 131072.
    #[inline]
    pub fn short_scale(self) -> f64 {
        (1u64 << self.bits()) as f64 / 32768.0
    }

    /// Quantum value at this depth down to an 8-bit sample, rounding to nearest.
    pub fn quantum_to_byte(self, value: f64) -> u8 {
        let v = value * 255.0 / self.range();
        (v + 0.5).floor().clamp(0.0, u8::MAX as f64) as u8
    }

    /// Quantum value at this depth down to a non-negative `i16`, rounding to nearest.
    ///
    /// Full range maps to `i16::MAX` at every depth.
    pub fn quantum_to_short(self, value: f64) -> i16 {
        let v = value * i16::MAX as f64 / self.range();
        (v + 0.5).floor().clamp(0.0, i16::MAX as f64) as i16
    }
}

impl std::fmt::Display for QuantumDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}", self.bits())
    }
}
