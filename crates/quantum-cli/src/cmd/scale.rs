use anyhow::Context;
use clap::{Args, ValueEnum};
use quantum_core::clamp_to_quantum;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ScaleTarget {
    Byte,
    Short,
}

#[derive(Args, Debug)]
pub struct ScaleArgs {
    /// Target sample width
    #[arg(long, value_enum, default_value_t = ScaleTarget::Byte)]
    pub to: ScaleTarget,

    /// Quantum values; out-of-range values are clamped first
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}

pub fn run(args: ScaleArgs) -> anyhow::Result<()> {
    for text in &args.values {
        let raw: f64 = text
            .trim()
            .parse()
            .with_context(|| format!("scale: bad quantum {text:?}"))?;
        let q = clamp_to_quantum(raw);
        match args.to {
            ScaleTarget::Byte => println!("{}", q.to_byte()),
            ScaleTarget::Short => println!("{}", q.to_short()),
        }
    }

    Ok(())
}
