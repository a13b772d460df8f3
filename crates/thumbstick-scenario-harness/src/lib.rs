//! Host-side scenario test harness for scripted thumbstick flows.

pub mod trace;

use std::f64::consts::PI;

use thumbstick::{Builder, BuilderError, Error, Sample, StickInterface, Thumbstick, ADC_CENTER};

pub use trace::{parse_trace, TraceError, TraceSample};

/// Fault injected into a scripted read
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptedFault {
    /// ADC read failed
    Axis,
    /// Button GPIO read failed
    Pin,
}

/// Stick whose readings are set by the test script
#[derive(Clone, Debug)]
pub struct ScriptedStick {
    sample: Sample,
    button_wired: bool,
    /// Raw line level, pulled up when idle
    button_level: bool,
    fault: Option<ScriptedFault>,
}

impl ScriptedStick {
    /// Resting stick, with or without a button line
    pub fn new(button_wired: bool) -> Self {
        Self {
            sample: Sample::new(ADC_CENTER, ADC_CENTER),
            button_wired,
            button_level: true,
            fault: None,
        }
    }

    /// Set the sample returned by the next axis read.
    pub fn set_sample(&mut self, sample: Sample) {
        self.sample = sample;
    }

    /// Set the raw button line level (`false` = pressed).
    pub fn set_button_level(&mut self, level: bool) {
        self.button_level = level;
    }

    /// Make the next read of the given kind fail once.
    pub fn inject_fault(&mut self, fault: ScriptedFault) {
        self.fault = Some(fault);
    }

    fn take_fault(&mut self, kind: ScriptedFault) -> Result<(), ScriptedFault> {
        if self.fault == Some(kind) {
            self.fault = None;
            return Err(kind);
        }
        Ok(())
    }
}

impl StickInterface for ScriptedStick {
    type Error = ScriptedFault;

    fn read_sample(&mut self) -> Result<Sample, Self::Error> {
        self.take_fault(ScriptedFault::Axis)?;
        Ok(self.sample)
    }

    fn has_button(&self) -> bool {
        self.button_wired
    }

    fn read_button(&mut self) -> Result<Option<bool>, Self::Error> {
        if !self.button_wired {
            return Ok(None);
        }
        self.take_fault(ScriptedFault::Pin)?;
        Ok(Some(!self.button_level))
    }
}

/// One key transition seen by the sink
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent<K> {
    /// Scan cycle the event was emitted in, starting at 0
    pub cycle: usize,
    /// Key the event is for
    pub key: K,
    /// `true` for a press, `false` for a release
    pub pressed: bool,
}

/// Raw sample `radius` units from center at `angle` degrees.
pub fn sample_at(angle: f64, radius: f64) -> Sample {
    let rad = angle * PI / 180.0;
    let center = f64::from(ADC_CENTER);
    let x = (center + radius * rad.cos()).round().clamp(0.0, 65535.0);
    let y = (center + radius * rad.sin()).round().clamp(0.0, 65535.0);
    Sample::new(x as u16, y as u16)
}

/// Couples a thumbstick module, scripted hardware, and an event log.
pub struct ScenarioHarness<K> {
    stick: Thumbstick<ScriptedStick, K>,
    events: Vec<KeyEvent<K>>,
    cycle: usize,
}

impl<K> ScenarioHarness<K>
where
    K: Copy + PartialEq,
{
    /// Harness with a wired button line.
    pub fn new(
        directional: Vec<K>,
        button: Option<K>,
        builder: Builder,
    ) -> Result<Self, BuilderError> {
        Self::with_stick(ScriptedStick::new(true), directional, button, builder)
    }

    /// Harness whose stick has no button line.
    pub fn without_button_line(
        directional: Vec<K>,
        button: Option<K>,
        builder: Builder,
    ) -> Result<Self, BuilderError> {
        Self::with_stick(ScriptedStick::new(false), directional, button, builder)
    }

    fn with_stick(
        stick: ScriptedStick,
        directional: Vec<K>,
        button: Option<K>,
        builder: Builder,
    ) -> Result<Self, BuilderError> {
        Ok(Self {
            stick: Thumbstick::new(stick, directional, button, builder)?,
            events: Vec::new(),
            cycle: 0,
        })
    }

    /// Run one scan cycle, returning the sector.
    pub fn try_step(&mut self, sample: Sample) -> Result<usize, Error<ScriptedStick>> {
        self.stick.interface_mut().set_sample(sample);

        let cycle = self.cycle;
        self.cycle += 1;

        let events = &mut self.events;
        let mut sink = |key: K, pressed: bool| {
            events.push(KeyEvent {
                cycle,
                key,
                pressed,
            });
        };
        self.stick.process(&mut sink)
    }

    /// Run one scan cycle with raw axis values, returning the sector.
    pub fn step(&mut self, x: u16, y: u16) -> usize {
        self.try_step(Sample::new(x, y))
            .expect("scripted stick read should succeed")
    }

    /// Run one scan cycle with the stick at `angle` degrees, `radius` from center.
    pub fn step_angle(&mut self, angle: f64, radius: f64) -> usize {
        let sample = sample_at(angle, radius);
        self.step(sample.x, sample.y)
    }

    /// Run one scan cycle with the stick at rest.
    pub fn step_center(&mut self) -> usize {
        self.step(ADC_CENTER, ADC_CENTER)
    }

    /// Run a whole trace, returning the sector of each cycle.
    pub fn run_trace(&mut self, trace: &[TraceSample]) -> Result<Vec<usize>, Error<ScriptedStick>> {
        let mut sectors = Vec::with_capacity(trace.len());
        for entry in trace {
            if let Some(level) = entry.button_level {
                self.stick.interface_mut().set_button_level(level);
            }
            sectors.push(self.try_step(entry.sample)?);
        }
        Ok(sectors)
    }

    /// Hold the push button down (line low).
    pub fn press_button(&mut self) {
        self.stick.interface_mut().set_button_level(false);
    }

    /// Let the push button go (line pulled high).
    pub fn release_button(&mut self) {
        self.stick.interface_mut().set_button_level(true);
    }

    /// Make the next read of the given kind fail once.
    pub fn inject_fault(&mut self, fault: ScriptedFault) {
        self.stick.interface_mut().inject_fault(fault);
    }

    /// Every event emitted so far.
    pub fn events(&self) -> &[KeyEvent<K>] {
        &self.events
    }

    /// Events emitted during one cycle.
    pub fn events_in_cycle(&self, cycle: usize) -> Vec<(K, bool)> {
        self.events
            .iter()
            .filter(|event| event.cycle == cycle)
            .map(|event| (event.key, event.pressed))
            .collect()
    }

    /// Events that changed a key's state, dropping repeated presses and releases.
    ///
    /// Every key starts released.
    pub fn transitions(&self) -> Vec<KeyEvent<K>> {
        let mut held: Vec<K> = Vec::new();
        let mut transitions = Vec::new();

        for event in &self.events {
            let index = held.iter().position(|key| *key == event.key);
            match (event.pressed, index) {
                (true, None) => {
                    held.push(event.key);
                    transitions.push(*event);
                }
                (false, Some(index)) => {
                    held.remove(index);
                    transitions.push(*event);
                }
                _ => {}
            }
        }

        transitions
    }

    /// Keys currently held, in press order.
    pub fn held(&self) -> Vec<K> {
        let mut held = Vec::new();
        for event in self.transitions() {
            if event.pressed {
                held.push(event.key);
            } else {
                held.retain(|key| *key != event.key);
            }
        }
        held
    }

    /// Forget recorded events. Cycle numbering and stick state carry on.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Number of cycles run so far.
    pub fn cycles(&self) -> usize {
        self.cycle
    }

    /// Access the module for assertions.
    pub fn stick(&self) -> &Thumbstick<ScriptedStick, K> {
        &self.stick
    }
}
