mod board;
mod cell;
mod error;
mod moves;
mod position;

#[cfg(test)]
mod tests;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use moves::*;
pub use position::*;
