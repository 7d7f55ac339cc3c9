// crates/relativist-cli/src/io/mod.rs

pub mod jsonl;
pub mod store_file;
