//! Result type for the binary entry point.
//!
//! Library code returns [`crate::error::Result`] with a typed
//! [`crate::error::DetectError`]. The binary wraps everything in
//! `color-eyre` so failures are reported on stderr with context.
//!
//! ```rust,ignore
//! use crate::result::Result;
//! use color_eyre::eyre::Context;
//!
//! fn run(args: &Args) -> Result<ExitCode> {
//!     let detection = detector.detect(root)
//!         .wrap_err("Failed to detect project")?;
//!     Ok(ExitCode::SUCCESS)
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used by the command layer and `main`.
pub type Result<T> = EyreResult<T>;
