// crates/quantum-core/src/sample.rs

use std::fmt;
use std::str::FromStr;

use crate::convert::ToQuantum;
use crate::depth::QuantumRepr;
use crate::error::{QuantumError, Result};
use crate::quantum::Quantum;

/// Input numeric kinds accepted by the converter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SampleKind {
    Byte,
    Short,
    Int32,
    Int64,
    Double,
    Quantum,
}

impl SampleKind {
    pub const ALL: [SampleKind; 6] = [
        SampleKind::Byte,
        SampleKind::Short,
        SampleKind::Int32,
        SampleKind::Int64,
        SampleKind::Double,
        SampleKind::Quantum,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SampleKind::Byte => "byte",
            SampleKind::Short => "short",
            SampleKind::Int32 => "int",
            SampleKind::Int64 => "long",
            SampleKind::Double => "double",
            SampleKind::Quantum => "quantum",
        }
    }
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleKind {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<SampleKind> {
        match s.trim().to_ascii_lowercase().as_str() {
            "byte" | "u8" => Ok(SampleKind::Byte),
            "short" | "i16" => Ok(SampleKind::Short),
            "int" | "i32" => Ok(SampleKind::Int32),
            "long" | "i64" => Ok(SampleKind::Int64),
            "double" | "f64" => Ok(SampleKind::Double),
            "quantum" | "q" => Ok(SampleKind::Quantum),
            other => Err(QuantumError::Parse(format!("unknown sample kind: {other}"))),
        }
    }
}

/// A sample tagged with its input kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    Byte(u8),
    Short(i16),
    Int32(i32),
    Int64(i64),
    Double(f64),
    Quantum(Quantum),
}

impl Sample {
    pub fn kind(&self) -> SampleKind {
        match self {
            Sample::Byte(_) => SampleKind::Byte,
            Sample::Short(_) => SampleKind::Short,
            Sample::Int32(_) => SampleKind::Int32,
            Sample::Int64(_) => SampleKind::Int64,
            Sample::Double(_) => SampleKind::Double,
            Sample::Quantum(_) => SampleKind::Quantum,
        }
    }

    /// Parse `text` as a value of `kind`.
    ///
    /// Text that does not fit the kind is an error; saturation only
    /// applies once a value has been read.
    pub fn parse(kind: SampleKind, text: &str) -> Result<Sample> {
        let t = text.trim();
        let bad = |e: &dyn fmt::Display| QuantumError::Parse(format!("{kind} value {t:?}: {e}"));
        let sample = match kind {
            SampleKind::Byte => Sample::Byte(t.parse::<u8>().map_err(|e| bad(&e))?),
            SampleKind::Short => Sample::Short(t.parse::<i16>().map_err(|e| bad(&e))?),
            SampleKind::Int32 => Sample::Int32(t.parse::<i32>().map_err(|e| bad(&e))?),
            SampleKind::Int64 => Sample::Int64(t.parse::<i64>().map_err(|e| bad(&e))?),
            SampleKind::Double => Sample::Double(t.parse::<f64>().map_err(|e| bad(&e))?),
            SampleKind::Quantum => {
                Sample::Quantum(Quantum(t.parse::<QuantumRepr>().map_err(|e| bad(&e))?))
            }
        };
        Ok(sample)
    }
}

impl ToQuantum for Sample {
    #[inline]
    fn to_quantum(self) -> Quantum {
        match self {
            Sample::Byte(v) => v.to_quantum(),
            Sample::Short(v) => v.to_quantum(),
            Sample::Int32(v) => v.to_quantum(),
            Sample::Int64(v) => v.to_quantum(),
            Sample::Double(v) => v.to_quantum(),
            Sample::Quantum(v) => v.to_quantum(),
        }
    }
}

impl From<u8> for Sample {
    fn from(v: u8) -> Sample {
        Sample::Byte(v)
    }
}

impl From<i16> for Sample {
    fn from(v: i16) -> Sample {
        Sample::Short(v)
    }
}

impl From<i32> for Sample {
    fn from(v: i32) -> Sample {
        Sample::Int32(v)
    }
}

impl From<i64> for Sample {
    fn from(v: i64) -> Sample {
        Sample::Int64(v)
    }
}

impl From<f64> for Sample {
    fn from(v: f64) -> Sample {
        Sample::Double(v)
    }
}

impl From<Quantum> for Sample {
    fn from(v: Quantum) -> Sample {
        Sample::Quantum(v)
    }
}
