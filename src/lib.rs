pub mod attacks;
pub mod board;
pub mod check;
pub mod color;
pub mod config;
pub mod error;
pub mod game;
pub mod movegen;
pub mod r#move;
pub mod notation;
pub mod outcome;
pub mod pieces;
pub mod position;

#[cfg(feature = "serde")]
pub mod serde_support;
