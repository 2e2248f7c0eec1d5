// crates/quantum-cli/src/io/raw.rs

use anyhow::{bail, Context};
use quantum_core::Quantum;

pub fn read_file(path: &str) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read samples: {path}"))
}

/// Little-endian i16 samples; trailing odd byte is rejected.
pub fn decode_i16_le(bytes: &[u8]) -> anyhow::Result<Vec<i16>> {
    if bytes.len() % 2 != 0 {
        bail!("short samples need an even byte count (got {})", bytes.len());
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]))
        .collect())
}

/// Quantums as little-endian values of the build's storage width.
pub fn encode_quantums_le(qs: &[Quantum]) -> Vec<u8> {
    let width = std::mem::size_of::<Quantum>();
    let mut out = Vec::with_capacity(qs.len() * width);
    for q in qs {
        out.extend_from_slice(&q.0.to_le_bytes());
    }
    out
}

pub fn write_file(path: &str, bytes: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("write quantums: {path}"))?;
    Ok(())
}
