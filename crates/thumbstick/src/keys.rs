//! Key event sink and sector-to-key reconciliation

use alloc::vec::Vec;

use crate::classifier::CENTER;

/// Receiver of key press/release events
///
/// Stands in for the host keyboard's key pipeline. Implemented for any
/// `FnMut(K, bool)` closure.
pub trait KeySink<K> {
    /// Handle one key transition, `pressed == false` meaning release
    fn process_key(&mut self, key: K, pressed: bool);
}

impl<K, F> KeySink<K> for F
where
    F: FnMut(K, bool),
{
    fn process_key(&mut self, key: K, pressed: bool) {
        self(key, pressed)
    }
}

/// Maps sectors to key identifiers and emits press/release transitions
///
/// Sector `s` in `1..=N` presses the `s - 1`th directional key; sector 0
/// presses nothing.
#[derive(Clone, Debug)]
pub struct DirectionKeys<K> {
    directional: Vec<K>,
    button: Option<K>,
    previous: Option<K>,
}

impl<K> DirectionKeys<K>
where
    K: Copy + PartialEq,
{
    /// Key table for the given directional keys and optional button key
    pub fn new(directional: Vec<K>, button: Option<K>) -> Self {
        Self {
            directional,
            button,
            previous: None,
        }
    }

    /// Number of directional keys
    pub fn len(&self) -> usize {
        self.directional.len()
    }

    /// Whether there are no directional keys
    pub fn is_empty(&self) -> bool {
        self.directional.is_empty()
    }

    /// Key bound to the button, if any
    pub fn button(&self) -> Option<K> {
        self.button
    }

    /// Last directional key pressed
    ///
    /// Stays set after the stick returns to center.
    pub fn previous(&self) -> Option<K> {
        self.previous
    }

    /// Key for a sector, `None` for the center or an unknown sector
    pub fn key_for(&self, sector: usize) -> Option<K> {
        if sector == CENTER {
            return None;
        }
        self.directional.get(sector - 1).copied()
    }

    /// Emit events for this cycle's sector
    ///
    /// Releases the previous key when it differs from the one to press, then
    /// presses the sector's key. A held direction is pressed again every
    /// cycle, and a centered stick releases the last key every cycle.
    pub fn reconcile<S: KeySink<K>>(&mut self, sector: usize, sink: &mut S) {
        let key_to_press = self.key_for(sector);

        if key_to_press != self.previous {
            if let Some(previous) = self.previous {
                sink.process_key(previous, false);
            }
        }

        if let Some(key) = key_to_press {
            sink.process_key(key, true);
            self.previous = Some(key);
        }
    }

    /// Emit the button key's state for this cycle
    ///
    /// Does nothing when no button key is bound.
    pub fn button_state<S: KeySink<K>>(&self, pressed: bool, sink: &mut S) {
        if let Some(key) = self.button {
            sink.process_key(key, pressed);
        }
    }
}
