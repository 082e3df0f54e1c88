pub mod convergence;
pub use convergence::{
    check_system, is_decoupled, residual_norm, step_norm, Convergence, ErrorHistory, SolveResult,
};
