//! Win and draw rules.
//!
//! Evaluation is a pure function of the board. The engine calls into
//! these after each move but never stores the result.

pub mod lines;
pub mod outcome;

pub use lines::{evaluate, lines, winning_line, Line};
pub use outcome::Outcome;
