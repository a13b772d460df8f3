//! Sector classification for analog stick samples
//!
//! The plane around the stick's resting point is split into N equal
//! angular sectors. Sector 1 is centered on the positive X axis and the
//! numbering runs counter-clockwise (towards positive Y). Sector 0 means
//! the stick is inside the deadzone.
//!
//! ## Hysteresis
//!
//! When the stick rotates from one sector into its immediate neighbour, the
//! new sector only wins once the angle is `angle_threshold` degrees past the
//! border. A sample jittering on the border therefore keeps reporting the
//! sector it came from. Jumps of two or more sectors switch immediately.
//!
//! Sectors 1 and N are neighbours on the circle but are *not* treated as
//! adjacent here: rotating across the 0° seam is never hysteresis-guarded.

use core::f64::consts::PI;

use crate::config::{Config, ADC_CENTER};

/// Sector index reported when the stick rests inside the deadzone
pub const CENTER: usize = 0;

/// Maps raw stick samples to a stable sector index
///
/// Holds the last resolved sector between calls. Must not be shared
/// between two sticks.
#[derive(Clone, Debug)]
pub struct DirectionClassifier {
    config: Config,
    current_sector: usize,
}

impl DirectionClassifier {
    /// Create a classifier with no sector held
    pub fn new(config: Config) -> Self {
        Self {
            config,
            current_sector: CENTER,
        }
    }

    /// Configuration this classifier was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of directional sectors
    pub fn num_directions(&self) -> usize {
        self.config.num_directions()
    }

    /// Last non-deadzone sector resolved, or [`CENTER`] before the first one
    pub fn current_sector(&self) -> usize {
        self.current_sector
    }

    /// Classify a raw sample into a sector in `0..=num_directions`
    ///
    /// Samples in the deadzone return [`CENTER`] and leave the held sector
    /// untouched.
    pub fn classify(&mut self, x: u16, y: u16) -> usize {
        let xn = i32::from(x) - i32::from(ADC_CENTER);
        let yn = i32::from(y) - i32::from(ADC_CENTER);

        let threshold = i32::from(self.config.center_threshold);
        if xn.abs() < threshold && yn.abs() < threshold {
            return CENTER;
        }

        let mut angle = libm::atan2(f64::from(yn), f64::from(xn)) * 180.0 / PI;
        if angle < 0.0 {
            angle += 360.0;
        }

        let section_size = self.config.section_size();
        let shifted = (angle + section_size / 2.0) % 360.0;

        // Rounding right below the 360° seam may land one past the last sector.
        let mut sector = ((shifted / section_size) as usize + 1).min(self.num_directions());

        if self.current_sector != CENTER && sector.abs_diff(self.current_sector) == 1 {
            let min_angle = (sector - 1) as f64 * section_size + self.config.angle_threshold;
            let max_angle = sector as f64 * section_size - self.config.angle_threshold;
            if !(shifted > min_angle && shifted < max_angle) {
                sector = self.current_sector;
            }
        }

        if sector != self.current_sector {
            log::debug!(
                "thumbstick: sector {} -> {} ({:.1} deg)",
                self.current_sector,
                sector,
                angle
            );
        }
        self.current_sector = sector;
        sector
    }
}
