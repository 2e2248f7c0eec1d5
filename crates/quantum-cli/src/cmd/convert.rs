use anyhow::Context;
use clap::Args;
use quantum_core::{Sample, SampleKind, ToQuantum};
use tracing::debug;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input kind: byte, short, int, long, double or quantum
    #[arg(long, default_value = "byte")]
    pub kind: SampleKind,

    /// Values to convert, one quantum is printed per value
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    debug!(kind = %args.kind, count = args.values.len(), "convert");

    for text in &args.values {
        let sample = Sample::parse(args.kind, text)
            .with_context(|| format!("convert: bad input {text:?}"))?;
        let q = sample.to_quantum();
        debug!(input = %text, quantum = %q, "converted");
        println!("{q}");
    }

    Ok(())
}
