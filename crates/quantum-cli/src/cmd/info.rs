use clap::Args;
use quantum_core::{depth, max, QuantumDepth, IS_HDRI};
use tracing::debug;

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Report range and scales for another depth (8, 16 or 32) instead of this build
    #[arg(long)]
    pub depth: Option<u32>,
}

pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let d = match args.depth {
        Some(bits) => QuantumDepth::from_bits(bits)?,
        None => QuantumDepth::BUILD,
    };
    debug!(depth = %d, build = %QuantumDepth::BUILD, "info");

    if d == QuantumDepth::BUILD {
        println!("depth       = {}", depth());
        println!("hdri        = {}", IS_HDRI);
        println!("max         = {}", max());
    } else {
        println!("depth       = {}", d.bits());
        println!("max         = {}", d.range_u64());
    }
    println!("byte_scale  = {}", d.byte_scale());
    println!("short_scale = {}", d.short_scale());

    Ok(())
}
