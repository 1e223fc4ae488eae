pub mod error;
pub mod traits;

pub use error::{Result, SkirtError};
pub use traits::{BoundingBox, Validate};
