pub mod assign_problem;
pub mod create_problem;
pub mod delete_problem;
pub mod get_assigned_problems;
pub mod get_problem;
pub mod get_problems;
pub mod get_problems_by_status;
pub mod get_problems_by_user;
pub mod update_problem;
pub mod update_problem_status;
