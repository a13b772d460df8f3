//! Error types for the thumbstick module
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and scan-cycle processing ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors while reading the stick
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware read errors
//!
//! ## Example
//!
//! ```
//! use thumbstick::{Builder, BuilderError};
//!
//! // No directional sectors
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::NoDirections)));
//!
//! // Negative hysteresis margin
//! let result = Builder::new().directions(4).angle_threshold(-1.0).build();
//! assert!(result.is_err());
//! ```

use crate::interface::StickInterface;

/// Errors that can occur while processing a scan cycle
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
pub enum Error<I: StickInterface> {
    /// Interface error (ADC/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`StickInterface`] implementation.
    Interface(I::Error),
}

impl<I: StickInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "Interface error: {e:?}"),
        }
    }
}

// Hand-written so the interface itself need not be `Debug`.
impl<I: StickInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
        }
    }
}

impl<I: StickInterface> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These are fatal: a thumbstick that fails to build is a firmware
/// configuration mistake, not a runtime condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuilderError {
    /// No directional inputs were configured
    ///
    /// At least one sector is required, otherwise the sector width is undefined.
    NoDirections,
    /// Hysteresis margin is negative, NaN or infinite
    InvalidAngleThreshold {
        /// Margin in degrees as requested
        degrees: f64,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderError::NoDirections => write!(f, "At least one input must be provided"),
            BuilderError::InvalidAngleThreshold { degrees } => write!(
                f,
                "Invalid angle threshold {degrees} (must be a finite, non-negative number of degrees)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn builder_error_messages() {
        assert_eq!(
            BuilderError::NoDirections.to_string(),
            "At least one input must be provided"
        );
        assert!(BuilderError::InvalidAngleThreshold { degrees: -2.0 }
            .to_string()
            .contains("-2"));
    }
}
