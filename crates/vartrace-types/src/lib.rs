pub mod error;
pub mod record;
pub mod store;

pub use error::{Error, Result};
pub use record::*;
pub use store::*;
