//! Implementation of the chess rules: board representation, move application,
//! move generation and king safety.

pub mod board;
pub mod core;
pub mod movegen;
pub mod safety;
