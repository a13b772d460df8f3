//! Hardware interface abstraction
//!
//! This module provides the [`StickInterface`] trait and the [`Interface`] struct
//! for reading a thumbstick's two analog axes and its optional push button.
//!
//! ## Hardware Requirements
//!
//! A thumbstick needs:
//! - 2 ADC channels (X and Y), sampled as 16-bit values centered on 32768
//! - optionally 1 GPIO input for the push button:
//!   - **BTN**: active low, pulled up (input)
//!
//! embedded-hal 1.0 has no ADC trait, so axes are read through
//! [`AnalogAxis`]. Any `FnMut() -> u16` is an axis, which keeps HAL glue to
//! a closure.
//!
//! ## Example
//!
//! ```rust,ignore
//! use thumbstick::Interface;
//!
//! let interface = Interface::new(
//!     || adc.read_blocking(&mut x_channel),
//!     || adc.read_blocking(&mut y_channel),
//! )
//! .with_button(button_pin);
//! ```

use core::convert::Infallible;
use core::fmt::Debug;

use embedded_hal::digital::{ErrorType, InputPin};

/// One raw reading of both axes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sample {
    /// Raw X axis value
    pub x: u16,
    /// Raw Y axis value
    pub y: u16,
}

impl Sample {
    /// Sample from raw axis values
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// A single analog axis
pub trait AnalogAxis {
    /// Error type for axis reads
    type Error: Debug;

    /// Read the axis, scaled to the full 16-bit range
    fn read_raw(&mut self) -> Result<u16, Self::Error>;
}

impl<F> AnalogAxis for F
where
    F: FnMut() -> u16,
{
    type Error = Infallible;

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        Ok(self())
    }
}

/// Trait for the hardware behind a thumbstick
///
/// For most cases, use the provided [`Interface`] struct. Implement this
/// trait directly when samples come from somewhere else (a replayed trace,
/// a split keyboard link, a test script).
pub trait StickInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Read both axes
    ///
    /// # Errors
    ///
    /// Returns an error if either ADC read fails.
    fn read_sample(&mut self) -> Result<Sample, Self::Error>;

    /// Whether a button line is wired
    fn has_button(&self) -> bool;

    /// Read the button line
    ///
    /// Returns `Some(true)` while pressed, with the active-low inversion
    /// already applied, and `None` when no button line is wired.
    ///
    /// # Errors
    ///
    /// Returns an error if the GPIO read fails.
    fn read_button(&mut self) -> Result<Option<bool>, Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over ADC and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<AxisErr, PinErr> {
    /// ADC read error
    Axis(AxisErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<AxisErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<AxisErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterfaceError::Axis(e) => write!(f, "Axis read error: {e:?}"),
            InterfaceError::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<AxisErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<AxisErr, PinErr> {}

/// Placeholder pin for sticks without a push button
///
/// Reads as released (high). Never read in practice: an [`Interface`]
/// without [`Interface::with_button`] reports no button line.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoButton;

impl ErrorType for NoButton {
    type Error = Infallible;
}

impl InputPin for NoButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }
}

/// Hardware interface implementation for a thumbstick
///
/// ## Type Parameters
///
/// * `X` - X axis implementing [`AnalogAxis`]
/// * `Y` - Y axis implementing [`AnalogAxis`] with the same error type
/// * `BTN` - Button pin implementing [`InputPin`], [`NoButton`] if absent
pub struct Interface<X, Y, BTN = NoButton> {
    /// X axis ADC channel
    x: X,
    /// Y axis ADC channel
    y: Y,
    /// Push button (active low)
    button: Option<BTN>,
}

impl<X, Y> Interface<X, Y, NoButton>
where
    X: AnalogAxis,
    Y: AnalogAxis<Error = X::Error>,
{
    /// Create a new Interface with no button line
    pub fn new(x: X, y: Y) -> Self {
        Self { x, y, button: None }
    }

    /// Attach a push button line
    ///
    /// The pin should be configured as an input with pull-up; the button
    /// shorts it to ground.
    pub fn with_button<BTN: InputPin>(self, button: BTN) -> Interface<X, Y, BTN> {
        Interface {
            x: self.x,
            y: self.y,
            button: Some(button),
        }
    }
}

impl<X, Y, BTN> Interface<X, Y, BTN> {
    /// Give back the axes and button pin
    pub fn release(self) -> (X, Y, Option<BTN>) {
        (self.x, self.y, self.button)
    }
}

impl<X, Y, BTN> StickInterface for Interface<X, Y, BTN>
where
    X: AnalogAxis,
    Y: AnalogAxis<Error = X::Error>,
    BTN: InputPin,
{
    type Error = InterfaceError<X::Error, BTN::Error>;

    fn read_sample(&mut self) -> Result<Sample, Self::Error> {
        let x = self.x.read_raw().map_err(InterfaceError::Axis)?;
        let y = self.y.read_raw().map_err(InterfaceError::Axis)?;
        Ok(Sample { x, y })
    }

    fn has_button(&self) -> bool {
        self.button.is_some()
    }

    fn read_button(&mut self) -> Result<Option<bool>, Self::Error> {
        match self.button.as_mut() {
            Some(pin) => pin.is_low().map(Some).map_err(InterfaceError::Pin),
            None => Ok(None),
        }
    }
}
