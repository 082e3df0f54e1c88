pub mod options;
pub use options::{parse_tolerance, SolveOptions, DEFAULT_MAX_ITERS};
