mod workout;

pub use workout::*;
