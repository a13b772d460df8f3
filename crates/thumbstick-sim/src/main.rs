//! Trace simulator for the thumbstick module.
//!
//! Replays a recorded `x y [button]` trace through the classifier and prints
//! the key events a keyboard would receive.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use thumbstick::{Builder, DEFAULT_ANGLE_THRESHOLD, DEFAULT_CENTER_THRESHOLD};
use thumbstick_scenario_harness::{parse_trace, KeyEvent, ScenarioHarness};

#[derive(Parser, Debug)]
#[command(about = "Replay a thumbstick trace and print key events")]
struct Args {
    /// Trace file, one `x y [button]` sample per line. Reads stdin if omitted.
    trace: Option<PathBuf>,

    /// Directional keys, counter-clockwise starting at the positive X axis.
    #[arg(long, value_delimiter = ',', default_value = "right,up,left,down")]
    keys: Vec<String>,

    /// Key for the push button; the trace's third column drives it.
    #[arg(long)]
    button: Option<String>,

    /// Deadzone radius in raw ADC units.
    #[arg(long, default_value_t = DEFAULT_CENTER_THRESHOLD)]
    center_threshold: u16,

    /// Hysteresis margin in degrees.
    #[arg(long, default_value_t = DEFAULT_ANGLE_THRESHOLD)]
    angle_threshold: f64,

    /// Only print events that change a key's state.
    #[arg(long)]
    changes_only: bool,
}

fn main() -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let args = Args::parse();

    let text = read_trace(args.trace.as_deref())?;
    for event in replay(&text, &args)? {
        println!("{}", format_event(&event));
    }

    Ok(())
}

fn read_trace(path: Option<&Path>) -> Result<String> {
    let Some(path) = path else {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading trace from stdin")?;
        return Ok(text);
    };
    fs::read_to_string(path)
        .with_context(|| format!("reading trace {}", path.display()))
}

/// Run a trace through a thumbstick configured from the arguments.
fn replay<'a>(text: &str, args: &'a Args) -> Result<Vec<KeyEvent<&'a str>>> {
    let trace = parse_trace(text).context("parsing trace")?;
    log::info!("Replaying {} samples", trace.len());

    let keys: Vec<&str> = args.keys.iter().map(String::as_str).collect();
    let builder = Builder::new()
        .center_threshold(args.center_threshold)
        .angle_threshold(args.angle_threshold);
    let button = args.button.as_deref();
    let harness = match button {
        Some(_) => ScenarioHarness::new(keys, button, builder),
        None => ScenarioHarness::without_button_line(keys, None, builder),
    };
    let mut harness = harness.context("invalid thumbstick configuration")?;

    harness.run_trace(&trace).context("replaying trace")?;

    let events = if args.changes_only {
        harness.transitions()
    } else {
        harness.events().to_vec()
    };
    Ok(events)
}

fn format_event(event: &KeyEvent<&str>) -> String {
    let action = if event.pressed { "press" } else { "release" };
    format!("cycle {}: {} {}", event.cycle, action, event.key)
}
