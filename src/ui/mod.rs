pub mod board;
pub mod icons;
