pub mod format;
mod tour;

pub use tour::{Tour, walk_length};
