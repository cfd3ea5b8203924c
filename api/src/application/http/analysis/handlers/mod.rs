pub mod get_analyses;
pub mod process_problem;
pub mod resolve_analysis;
