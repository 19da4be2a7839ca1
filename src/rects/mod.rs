//! Rectangle reconstruction from classified line groups.
//!
//! - [`assemble`] pairs adjacent horizontal lines with every ordered pair of
//!   vertical lines to produce candidates.
//! - [`dedupe`] merges near-identical candidates and orders them top to bottom.
//! - [`rank`] orders by area and labels the frame/main/sub hierarchy.

mod assemble;
mod dedup;
mod rank;

pub use assemble::{assemble, AssembleOptions};
pub use dedup::dedupe;
pub use rank::rank;
