//! Analog thumbstick as directional keys.
//!
//! Turns a two-axis analog stick into one of N directional key presses plus
//! an optional push button, for keyboard firmware scan loops. Works on MCUs
//! (`no_std` + `alloc`) and on the host.
//!
//! ## Layout
//!
//! - [`classifier`] - sector classification with deadzone and hysteresis
//! - [`config`] - configuration and [`Builder`]
//! - [`interface`] - hardware traits: [`AnalogAxis`], [`StickInterface`]
//! - [`keys`] - [`KeySink`] and sector-to-key reconciliation
//! - [`module`] - [`ScanModule`] lifecycle hooks and the [`Thumbstick`] module
//!
//! ## Example
//!
//! ```
//! use thumbstick::{Builder, DirectionClassifier};
//!
//! let config = Builder::new().directions(4).build().unwrap();
//! let mut classifier = DirectionClassifier::new(config);
//!
//! assert_eq!(classifier.classify(32768, 32768), 0); // deadzone
//! assert_eq!(classifier.classify(42768, 32768), 1); // right
//! assert_eq!(classifier.classify(32768, 65535), 2); // up
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

extern crate alloc;

pub mod classifier;
pub mod config;
pub mod error;
pub mod interface;
pub mod keys;
pub mod module;

pub use classifier::{DirectionClassifier, CENTER};
pub use config::{Builder, Config, ADC_CENTER, DEFAULT_ANGLE_THRESHOLD, DEFAULT_CENTER_THRESHOLD};
pub use error::{BuilderError, Error};
pub use interface::{AnalogAxis, Interface, InterfaceError, NoButton, Sample, StickInterface};
pub use keys::{DirectionKeys, KeySink};
pub use module::{ScanModule, Thumbstick};
