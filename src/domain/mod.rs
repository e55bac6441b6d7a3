mod denomination;
mod error;
mod till;

pub use denomination::*;
pub use error::*;
pub use till::*;
