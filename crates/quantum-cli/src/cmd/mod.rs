// crates/quantum-cli/src/cmd/mod.rs

pub mod convert;
pub mod convert_file;
pub mod info;
pub mod scale;
