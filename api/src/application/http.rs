pub mod analysis;
pub mod health;
pub mod problem;
pub mod server;
