//! Classifier configuration types and builder

pub use crate::error::BuilderError;

/// Raw ADC reading at rest
///
/// Axis samples are 16-bit; the resting midpoint is tied to that bit width
/// and is not configurable.
pub const ADC_CENTER: u16 = 32768;

/// Default deadzone radius in raw ADC units
pub const DEFAULT_CENTER_THRESHOLD: u16 = 10_000;

/// Default hysteresis margin in degrees
pub const DEFAULT_ANGLE_THRESHOLD: f64 = 3.0;

/// Classifier configuration
///
/// Immutable once built. Use [`Builder`] to create a Config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Number of directional sectors (always at least 1)
    num_directions: usize,
    /// Deadzone radius in raw units, applied per axis
    pub center_threshold: u16,
    /// Hysteresis margin in degrees, applied between adjacent sectors only
    pub angle_threshold: f64,
}

impl Config {
    /// Number of directional sectors
    pub fn num_directions(&self) -> usize {
        self.num_directions
    }

    /// Angular width of one sector in degrees
    pub fn section_size(&self) -> f64 {
        360.0 / self.num_directions as f64
    }
}

/// Builder for constructing classifier configuration
///
/// # Example
///
/// ```
/// use thumbstick::Builder;
///
/// let config = Builder::new()
///     .directions(8)
///     .center_threshold(12_000)
///     .angle_threshold(5.0)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.section_size(), 45.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Builder {
    /// Number of directional sectors (required, must be non-zero)
    num_directions: usize,
    /// Deadzone radius
    center_threshold: u16,
    /// Hysteresis margin
    angle_threshold: f64,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            num_directions: 0,
            center_threshold: DEFAULT_CENTER_THRESHOLD,
            angle_threshold: DEFAULT_ANGLE_THRESHOLD,
        }
    }
}

impl Builder {
    /// Create a new Builder with default thresholds and no directions
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of directional sectors (required)
    pub fn directions(mut self, count: usize) -> Self {
        self.num_directions = count;
        self
    }

    /// Set the deadzone radius in raw ADC units
    pub fn center_threshold(mut self, value: u16) -> Self {
        self.center_threshold = value;
        self
    }

    /// Set the hysteresis margin in degrees
    pub fn angle_threshold(mut self, degrees: f64) -> Self {
        self.angle_threshold = degrees;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::NoDirections` if the direction count is zero,
    /// whatever the other settings are. Returns
    /// `BuilderError::InvalidAngleThreshold` for a negative or non-finite margin.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.num_directions == 0 {
            return Err(BuilderError::NoDirections);
        }
        if !self.angle_threshold.is_finite() || self.angle_threshold < 0.0 {
            return Err(BuilderError::InvalidAngleThreshold {
                degrees: self.angle_threshold,
            });
        }
        Ok(Config {
            num_directions: self.num_directions,
            center_threshold: self.center_threshold,
            angle_threshold: self.angle_threshold,
        })
    }
}
