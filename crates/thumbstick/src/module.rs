//! Scan-loop module wiring a stick to the key pipeline

use alloc::vec::Vec;

use crate::classifier::DirectionClassifier;
use crate::config::Builder;
use crate::error::{BuilderError, Error};
use crate::interface::StickInterface;
use crate::keys::{DirectionKeys, KeySink};

/// Hooks a keyboard firmware calls around each matrix scan
///
/// Every hook defaults to doing nothing; modules override the points they
/// care about.
pub trait ScanModule<S> {
    /// Error type returned from hooks
    type Error;

    /// Once, before the first scan
    fn during_bootup(&mut self, _sink: &mut S) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Before the key matrix is scanned
    fn before_matrix_scan(&mut self, _sink: &mut S) -> Result<(), Self::Error> {
        Ok(())
    }

    /// After the key matrix is scanned
    fn after_matrix_scan(&mut self, _sink: &mut S) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Before the HID report goes out
    fn before_hid_send(&mut self, _sink: &mut S) -> Result<(), Self::Error> {
        Ok(())
    }

    /// After the HID report went out
    fn after_hid_send(&mut self, _sink: &mut S) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Entering power-save
    fn on_powersave_enable(&mut self, _sink: &mut S) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Leaving power-save
    fn on_powersave_disable(&mut self, _sink: &mut S) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Thumbstick acting as a set of directional keys plus an optional button
///
/// # Example
///
/// ```
/// use thumbstick::{Builder, Interface, Thumbstick};
///
/// let interface = Interface::new(|| 60_000u16, || 32_768u16);
/// let mut stick = Thumbstick::new(
///     interface,
///     vec!['d', 'w', 'a', 's'],
///     None,
///     Builder::new(),
/// )
/// .expect("four directions");
///
/// let mut events = Vec::new();
/// let sector = stick
///     .process(&mut |key: char, pressed: bool| events.push((key, pressed)))
///     .unwrap();
/// assert_eq!(sector, 1);
/// assert_eq!(events, [('d', true)]);
/// ```
pub struct Thumbstick<I, K> {
    interface: I,
    classifier: DirectionClassifier,
    keys: DirectionKeys<K>,
    use_button: bool,
}

impl<I, K> Thumbstick<I, K>
where
    I: StickInterface,
    K: Copy + PartialEq,
{
    /// Create a thumbstick module
    ///
    /// The number of sectors is the number of `directional_inputs`; the
    /// builder's own direction count is overridden. The button is only
    /// reported when the interface has a button line and `button_input`
    /// is given.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::NoDirections` if `directional_inputs` is empty,
    /// or any other error from [`Builder::build`].
    pub fn new(
        interface: I,
        directional_inputs: Vec<K>,
        button_input: Option<K>,
        builder: Builder,
    ) -> Result<Self, BuilderError> {
        let config = builder.directions(directional_inputs.len()).build()?;

        let use_button = interface.has_button() && button_input.is_some();
        if button_input.is_some() && !interface.has_button() {
            log::warn!("thumbstick: button key given but no button line, button disabled");
        }
        log::debug!(
            "thumbstick: {} directions, deadzone {}, margin {} deg, button {}",
            config.num_directions(),
            config.center_threshold,
            config.angle_threshold,
            if use_button { "on" } else { "off" }
        );

        Ok(Self {
            interface,
            classifier: DirectionClassifier::new(config),
            keys: DirectionKeys::new(directional_inputs, button_input),
            use_button,
        })
    }

    /// Run one scan cycle
    ///
    /// Reads the stick, emits directional key events, then emits the
    /// button's state if the button is enabled. Returns this cycle's sector.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if a hardware read fails. A failed axis
    /// read emits nothing.
    pub fn process<S: KeySink<K>>(&mut self, sink: &mut S) -> Result<usize, Error<I>> {
        let sample = self.interface.read_sample().map_err(Error::Interface)?;
        log::trace!("thumbstick: sample x={} y={}", sample.x, sample.y);

        let sector = self.classifier.classify(sample.x, sample.y);
        self.keys.reconcile(sector, sink);

        if self.use_button {
            if let Some(pressed) = self.interface.read_button().map_err(Error::Interface)? {
                self.keys.button_state(pressed, sink);
            }
        }

        Ok(sector)
    }

    /// Whether button events are emitted
    pub fn button_enabled(&self) -> bool {
        self.use_button
    }

    /// The direction classifier
    pub fn classifier(&self) -> &DirectionClassifier {
        &self.classifier
    }

    /// The key table
    pub fn keys(&self) -> &DirectionKeys<K> {
        &self.keys
    }

    /// The hardware interface
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Give back the hardware interface
    pub fn release(self) -> I {
        self.interface
    }
}

impl<I, K, S> ScanModule<S> for Thumbstick<I, K>
where
    I: StickInterface,
    K: Copy + PartialEq,
    S: KeySink<K>,
{
    type Error = Error<I>;

    fn after_matrix_scan(&mut self, sink: &mut S) -> Result<(), Self::Error> {
        self.process(sink).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::tests::TestPin;
    use crate::interface::{Interface, InterfaceError};
    use alloc::vec;
    use core::cell::Cell;

    type Events = Vec<(u8, bool)>;

    const UP: u8 = 1;
    const RIGHT: u8 = 2;
    const DOWN: u8 = 3;
    const LEFT: u8 = 4;
    const CLICK: u8 = 9;

    fn four_way<I: StickInterface>(interface: I, button: Option<u8>) -> Thumbstick<I, u8> {
        Thumbstick::new(
            interface,
            vec![RIGHT, UP, LEFT, DOWN],
            button,
            Builder::new(),
        )
        .unwrap()
    }

    #[test]
    fn empty_directions_rejected() {
        let interface = Interface::new(|| 0u16, || 0u16);
        let result: Result<Thumbstick<_, u8>, _> =
            Thumbstick::new(interface, Vec::new(), Some(CLICK), Builder::new());
        assert!(matches!(result, Err(BuilderError::NoDirections)));
    }

    #[test]
    fn direction_count_comes_from_inputs() {
        let interface = Interface::new(|| 0u16, || 0u16);
        let stick = Thumbstick::new(
            interface,
            vec![RIGHT, UP, LEFT],
            None,
            Builder::new().directions(8),
        )
        .unwrap();
        assert_eq!(stick.classifier().num_directions(), 3);
        assert_eq!(stick.keys().len(), 3);
        assert_eq!(stick.keys().button(), None);
        assert!(!stick.button_enabled());
    }

    #[test]
    fn button_needs_pin_and_key() {
        let level = Cell::new(true);
        let pin = TestPin {
            level: Some(&level),
        };
        let interface = Interface::new(|| 0u16, || 0u16).with_button(pin);
        let stick = Thumbstick::new(interface, vec![UP], None, Builder::new()).unwrap();
        assert!(!stick.button_enabled());

        let interface = Interface::new(|| 0u16, || 0u16);
        let stick = Thumbstick::new(interface, vec![UP], Some(CLICK), Builder::new()).unwrap();
        assert_eq!(stick.keys().button(), Some(CLICK));
        assert!(!stick.button_enabled());
    }

    #[test]
    fn cycle_emits_direction_then_button() {
        let x = Cell::new(32768u16);
        let y = Cell::new(32768u16);
        let level = Cell::new(true);
        let pin = TestPin {
            level: Some(&level),
        };
        let interface = Interface::new(|| x.get(), || y.get()).with_button(pin);
        let mut stick = four_way(interface, Some(CLICK));
        assert!(stick.button_enabled());

        let mut events = Events::new();
        let mut sink = |key: u8, pressed: bool| events.push((key, pressed));

        // Centered, button up.
        assert_eq!(stick.process(&mut sink).unwrap(), 0);
        // Pushed up with the button held.
        y.set(60_000);
        level.set(false);
        assert_eq!(stick.process(&mut sink).unwrap(), 2);
        // Back to center, button released.
        y.set(32768);
        level.set(true);
        assert_eq!(stick.process(&mut sink).unwrap(), 0);

        assert_eq!(
            events,
            vec![
                (CLICK, false),
                (UP, true),
                (CLICK, true),
                (UP, false),
                (CLICK, false),
            ]
        );
    }

    #[test]
    fn after_matrix_scan_runs_a_cycle() {
        let interface = Interface::new(|| 32768u16, || 0u16);
        let mut stick = four_way(interface, None);

        let mut events = Events::new();
        let mut sink = |key: u8, pressed: bool| events.push((key, pressed));
        stick.during_bootup(&mut sink).unwrap();
        stick.before_matrix_scan(&mut sink).unwrap();
        stick.after_matrix_scan(&mut sink).unwrap();
        stick.on_powersave_enable(&mut sink).unwrap();
        assert_eq!(events, vec![(DOWN, true)]);
    }

    #[test]
    fn release_gives_back_the_interface() {
        let level = Cell::new(false);
        let pin = TestPin {
            level: Some(&level),
        };
        let interface = Interface::new(|| 60_000u16, || 32768u16).with_button(pin);
        let mut stick = four_way(interface, Some(CLICK));

        let mut events = Events::new();
        let mut sink = |key: u8, pressed: bool| events.push((key, pressed));
        assert_eq!(stick.process(&mut sink).unwrap(), 1);
        assert_eq!(stick.keys().previous(), Some(RIGHT));

        let mut interface = stick.release();
        assert_eq!(interface.read_sample().unwrap().x, 60_000);
        assert_eq!(interface.read_button().unwrap(), Some(true));

        let (_, _, button) = interface.release();
        assert!(button.is_some());
        assert_eq!(events, vec![(RIGHT, true), (CLICK, true)]);
    }

    #[test]
    fn button_read_failure_propagates() {
        let interface = Interface::new(|| 32768u16, || 32768u16).with_button(TestPin::default());
        let mut stick = Thumbstick::new(interface, vec![UP], Some(CLICK), Builder::new()).unwrap();

        let mut events = Events::new();
        let result = stick.process(&mut |key: u8, pressed: bool| events.push((key, pressed)));
        assert!(matches!(
            result,
            Err(Error::Interface(InterfaceError::Pin(_)))
        ));
        assert!(events.is_empty());
    }
}
