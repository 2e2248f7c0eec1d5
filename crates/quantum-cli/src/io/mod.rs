// crates/quantum-cli/src/io/mod.rs

pub mod raw;
