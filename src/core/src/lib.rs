pub mod summary;
pub mod workout;

pub use summary::*;
pub use workout::*;
