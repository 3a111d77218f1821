//! Benchmark-only crate; see `benches/dispatch.rs`.
