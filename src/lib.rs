pub mod config;
pub mod error;
pub mod gate;
pub mod hook;
pub mod runner;
