pub mod progress;
pub mod two_opt;

pub use self::two_opt::two_opt;
