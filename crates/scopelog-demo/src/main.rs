use std::panic;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use scopelog::{Level, LoggingConfig, Record, init_logging};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::with_filter("debug,demo::noisy=warn"))
        .context("installing log bridge")?;

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║         SCOPELOG MISSION CONTROL       ║");
    println!("  ║   stderr records  ·  scope timers      ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    scopelog::trace_scope!("mission");

    every_level();
    systems_check();
    launch_sequence(3);

    // ── OVERRIDE ──────────────────────────────────────────────────────
    // Unwinding through a timed scope reports EXCEPTION! and keeps the panic.
    if panic::catch_unwind(deploy_payload).is_err() {
        scopelog::critical!(category: "payload", "deployment aborted");
    }

    // ── BRIDGE ────────────────────────────────────────────────────────
    log::info!(target: "demo::telemetry", "downlink at {} kbps", 512);
    log::debug!(target: "demo::noisy", "filtered out");
    log::warn!(target: "demo::noisy", "antenna drift {:.1} deg", 0.7);

    Ok(())
}

fn every_level() {
    scopelog::trace_scope!();

    for level in Level::ALL {
        Record::begin(level, "levels").append("sample ").append(level);
    }
}

fn systems_check() {
    scopelog::trace_scope!();

    let readings = [("CPU", 78), ("MEMORY", 41), ("GPU", 96), ("NETWORK", 19)];
    for (name, load) in readings {
        if load > 90 {
            scopelog::warning!(category: "diag", name, " running hot at ", load, "%");
        } else {
            scopelog::info!(category: "diag", name, " nominal at ", load, "%");
        }
    }

    let mut summary = scopelog::record::notice("diag");
    summary.append(readings.len()).append(" subsystems checked");
}

fn launch_sequence(countdown: u32) {
    scopelog::trace_scope!("launch_sequence");

    for t in (1..=countdown).rev() {
        let _step = scopelog::ScopeTimer::new(format!("T-{t:02}"));
        thread::sleep(Duration::from_millis(1));
        scopelog::debug!(category: "launch", "T-", t, " GO");
    }
    scopelog::profiling!("liftoff confirmed");
}

fn deploy_payload() {
    scopelog::trace_scope!();

    thread::sleep(Duration::from_millis(2));
    panic!("payload bay jammed");
}
