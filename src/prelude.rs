#![allow(unused_imports)]

pub use tracing::{Level, debug, info, instrument, trace, warn};

pub use crate::error::Error;

pub type Result<T = (), E = Error> = core::result::Result<T, E>;
