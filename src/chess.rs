//! Implementation of chess rules: board state, move generation and legality.

pub mod attacks;
pub mod board;
pub mod core;
pub mod game;
pub mod movegen;
