pub mod config;
pub mod env;
pub mod fixtures;
pub mod users;

pub use env::TestEnv;
