mod timestamp;

pub use timestamp::*;
