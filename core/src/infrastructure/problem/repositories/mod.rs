pub mod problem_repository;
