mod errors;

pub use errors::{ArgusError, Result};
