use thumbstick::{Builder, Error};
use thumbstick_scenario_harness::{ScenarioHarness, ScriptedFault};

const KEYS: [&str; 4] = ["right", "up", "left", "down"];
const RADIUS: f64 = 25_000.0;

fn with_button() -> ScenarioHarness<&'static str> {
    ScenarioHarness::new(KEYS.to_vec(), Some("click"), Builder::new()).expect("valid setup")
}

#[test]
fn button_state_is_reported_every_cycle() {
    let mut harness = with_button();
    assert!(harness.stick().button_enabled());

    harness.step_center();
    harness.press_button();
    harness.step_center();
    harness.step_center();
    harness.release_button();
    harness.step_center();

    assert_eq!(harness.events_in_cycle(0), vec![("click", false)]);
    assert_eq!(harness.events_in_cycle(1), vec![("click", true)]);
    assert_eq!(harness.events_in_cycle(2), vec![("click", true)]);
    assert_eq!(harness.events_in_cycle(3), vec![("click", false)]);
}

#[test]
fn button_is_independent_of_direction() {
    let mut harness = with_button();

    harness.press_button();
    harness.step_angle(90.0, RADIUS);
    harness.step_angle(0.0, RADIUS);
    harness.release_button();
    harness.step_angle(0.0, RADIUS);

    assert_eq!(
        harness.events_in_cycle(0),
        vec![("up", true), ("click", true)]
    );
    assert_eq!(
        harness.events_in_cycle(1),
        vec![("up", false), ("right", true), ("click", true)]
    );
    assert_eq!(
        harness.events_in_cycle(2),
        vec![("right", true), ("click", false)]
    );
    assert_eq!(harness.held(), vec!["right"]);
}

#[test]
fn no_button_line_disables_button() {
    let mut harness =
        ScenarioHarness::without_button_line(KEYS.to_vec(), Some("click"), Builder::new())
            .expect("valid setup");
    assert!(!harness.stick().button_enabled());

    harness.press_button();
    harness.step_center();
    harness.step_angle(180.0, RADIUS);
    assert!(harness.events().iter().all(|event| event.key != "click"));
}

#[test]
fn no_button_key_disables_button() {
    let mut harness = ScenarioHarness::new(KEYS.to_vec(), None, Builder::new()).expect("valid");
    assert!(!harness.stick().button_enabled());

    harness.press_button();
    harness.step_center();
    assert!(harness.events().is_empty());
}

#[test]
fn axis_fault_emits_nothing_and_recovers() {
    let mut harness = with_button();
    harness.step_angle(90.0, RADIUS);

    harness.inject_fault(ScriptedFault::Axis);
    let result = harness.try_step(thumbstick_scenario_harness::sample_at(0.0, RADIUS));
    assert!(matches!(result, Err(Error::Interface(ScriptedFault::Axis))));
    assert!(harness.events_in_cycle(1).is_empty());

    // Failed cycle did not move the held sector.
    assert_eq!(harness.stick().classifier().current_sector(), 2);
    assert_eq!(harness.step_angle(92.0, RADIUS), 2);
}

#[test]
fn pin_fault_surfaces_after_direction_events() {
    let mut harness = with_button();
    harness.inject_fault(ScriptedFault::Pin);

    let result = harness.try_step(thumbstick_scenario_harness::sample_at(180.0, RADIUS));
    let err = result.unwrap_err();
    assert!(matches!(err, Error::Interface(ScriptedFault::Pin)));
    assert_eq!(err.to_string(), "Interface error: Pin");
    assert_eq!(harness.events_in_cycle(0), vec![("left", true)]);
}
