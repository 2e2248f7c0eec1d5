use clap::{Args, ValueEnum};
use quantum_core::{convert_row, Quantum, QUANTUM_DEPTH};
use tracing::info;

use crate::io::raw::{decode_i16_le, encode_quantums_le, read_file, write_file};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FileKind {
    /// One unsigned byte per sample
    Byte,
    /// Little-endian i16 per sample
    Short,
}

#[derive(Args, Debug)]
pub struct ConvertFileArgs {
    /// Raw sample file
    #[arg(long)]
    pub r#in: String,

    /// Output file of little-endian quantums
    #[arg(long)]
    pub out: String,

    /// Sample layout of the input file
    #[arg(long, value_enum, default_value_t = FileKind::Byte)]
    pub kind: FileKind,
}

pub fn run(args: ConvertFileArgs) -> anyhow::Result<()> {
    let bytes = read_file(&args.r#in)?;

    let qs: Vec<Quantum> = match args.kind {
        FileKind::Byte => convert_row(&bytes),
        FileKind::Short => convert_row(&decode_i16_le(&bytes)?),
    };

    let out = encode_quantums_le(&qs);
    write_file(&args.out, &out)?;

    let crc = crc32fast::hash(&out);
    info!(
        input = %args.r#in,
        output = %args.out,
        samples = qs.len(),
        depth = QUANTUM_DEPTH,
        "converted sample file"
    );

    println!("samples = {}", qs.len());
    println!("bytes   = {}", out.len());
    println!("crc32   = 0x{crc:08X}");

    Ok(())
}
