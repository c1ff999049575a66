pub mod board;
pub mod ticket;
pub mod user;
