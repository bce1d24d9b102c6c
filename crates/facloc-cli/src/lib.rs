//! Library surface of the preparation CLI; the binary in `main.rs` is a thin
//! wrapper over [`pipeline::run_prepare`].

pub mod cli;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
