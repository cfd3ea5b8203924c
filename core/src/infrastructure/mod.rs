pub mod ai;
pub mod analysis;
pub mod db;
pub mod health;
pub mod problem;
pub mod user;
