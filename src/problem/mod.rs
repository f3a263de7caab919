mod index;
mod problem;

pub use problem::{MAX_COORDINATE, Problem};
