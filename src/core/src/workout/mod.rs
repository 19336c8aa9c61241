pub mod draft;
pub mod error;
pub mod record;

pub use draft::*;
pub use error::*;
pub use record::*;
