pub mod analysis_records;
pub mod problems;
pub mod users;
