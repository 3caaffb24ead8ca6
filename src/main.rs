#![deny(warnings, clippy::all, clippy::pedantic, clippy::nursery)]

use anyhow::{Context, Result};
use clap::Parser;
use roudmap::app::{App, AppConfig};
use roudmap::headless::{FixedGeolocator, HeadlessPage, RecordingMapProvider};
use roudmap::{cli, replay, utils};

#[macro_use]
extern crate roudmap;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let events = replay::read_script(&cli.script)?;
    dlog!(
        "mode=replay script={} events={} position={:?}",
        cli.script.display(),
        events.len(),
        cli.position
    );

    let config = AppConfig {
        zoom: cli.zoom,
        tile_url: cli.tile_url,
    };
    let mut app = App::new(config, RecordingMapProvider, HeadlessPage::default());
    let mut geo = FixedGeolocator::new(cli.position);

    // Failure is already alerted; the session carries on with no map.
    if let Err(e) = app.start(&mut geo) {
        dlog!("geolocation unavailable: {e}");
    }

    let summary = replay::replay(&mut app, &events)?;
    dlog!("summary {summary:?}");

    if app.map().is_none() {
        anyhow::bail!("Map never loaded. Pass --position LAT,LNG to simulate geolocation.");
    }

    if cli.json {
        let out = serde_json::to_string_pretty(app.workouts()).context("serializing workouts")?;
        println!("{out}");
    } else {
        for row in &app.page().rows {
            println!("{row}");
        }
    }

    Ok(())
}
