//! Prelude for common imports used throughout all panel crates

pub use super::error::{Error, Result, ResultExt};
pub use tracing::{debug, error, info, instrument, trace, warn};
