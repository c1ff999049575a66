pub mod board;
pub mod config;
