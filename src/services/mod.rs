pub mod benchmark;
pub mod output;

pub use benchmark::{run_benchmark, run_chain, BenchmarkRequest};
pub use output::{prepare_paths, to_json, write_json, OutputPaths, METRICS_FILE_NAME};
