//! The word board.
//!
//! - `allocator`: samples a vocabulary into a 9/9/6/1 partition and draws the
//!   play order
//! - `board`: remaining/known bookkeeping and guess classification
//! - `group`: the four word groups and the classification signal

pub mod allocator;
#[allow(clippy::module_inception)]
pub mod board;
pub mod group;

pub use allocator::{
    Deal, PlayOrder, WordAllocator, WordPartition, BOARD_SIZE, NEUTRAL_WORDS, TEAM_WORDS,
};
pub use board::Board;
pub use group::{Classification, Group};
