pub mod analysis;
pub mod common;
pub mod health;
pub mod problem;
pub mod user;
