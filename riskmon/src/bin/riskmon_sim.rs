// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Headless run of the sensor simulation.
//!
//! ```text
//! riskmon-sim --seconds 30
//! riskmon-sim --config plant.toml --sensor S003 --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use riskmon::logging::init_tracing;
use riskmon::{DetailPage, Engine, EngineConfig};
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::{interval, sleep, MissedTickBehavior};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "riskmon-sim", version, about = "Run the simulated sensor dashboard")]
struct Args {
    /// TOML configuration file; built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How long to run.
    #[arg(short, long, default_value_t = 10)]
    seconds: u64,

    /// Open the detail view of this sensor instead of the dashboard.
    #[arg(long)]
    sensor: Option<String>,

    /// Print each snapshot as a JSON line on stdout.
    #[arg(long)]
    json: bool,

    /// Seconds between snapshots.
    #[arg(long, default_value_t = 3)]
    every: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    init_tracing(&config.log_filter)?;

    let run_for = Duration::from_secs(args.seconds);
    let engine = Engine::from_config(config)?;
    info!(sensors = engine.store().len(), seconds = args.seconds, "simulation starting");

    match args.sensor.as_deref() {
        Some(id) => run_detail(&engine, id, &args, run_for).await?,
        None => run_dashboard(&engine, &args, run_for).await?,
    }

    info!("simulation finished");
    Ok(())
}

async fn run_dashboard(engine: &Engine, args: &Args, run_for: Duration) -> Result<()> {
    let dashboard = engine.dashboard();
    let deadline = sleep(run_for);
    tokio::pin!(deadline);
    let mut snapshots = snapshot_interval(args.every);

    loop {
        tokio::select! {
            () = &mut deadline => break,
            _ = snapshots.tick() => {
                let view = dashboard.view();
                if args.json {
                    println!("{}", serde_json::to_string(&view)?);
                } else {
                    info!(status = view.system_label, "dashboard snapshot");
                    for card in &view.sensors {
                        info!(
                            sensor = %card.id,
                            reading = %card.reading_display,
                            unit = %card.unit,
                            status = %card.status,
                            "sensor"
                        );
                    }
                }
            }
        }
    }

    let alerts = engine.store().alerts().len();
    dashboard.stop().await;
    info!(alerts, "dashboard closed");
    Ok(())
}

async fn run_detail(engine: &Engine, id: &str, args: &Args, run_for: Duration) -> Result<()> {
    let session = match engine.open_detail(id) {
        DetailPage::Live(session) => session,
        DetailPage::NotFound(view) => {
            warn!(sensor = %view.sensor_id, "{}", view.title);
            if args.json {
                println!("{}", serde_json::to_string(&view)?);
            }
            return Ok(());
        }
    };

    let deadline = sleep(run_for);
    tokio::pin!(deadline);
    let mut snapshots = snapshot_interval(args.every);

    loop {
        tokio::select! {
            () = &mut deadline => break,
            _ = snapshots.tick() => {
                let view = session.snapshot()?;
                if args.json {
                    println!("{}", serde_json::to_string(&view)?);
                } else {
                    info!(
                        sensor = %view.sensor.id(),
                        reading = %view.reading_display,
                        status = %view.sensor.status(),
                        points = view.chart.points.len(),
                        "detail snapshot"
                    );
                }
            }
        }
    }

    session.stop().await;
    Ok(())
}

fn snapshot_interval(every_secs: u64) -> tokio::time::Interval {
    let mut ticker = interval(Duration::from_secs(every_secs.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}
