use crate::app::{DEFAULT_TILE_URL, DEFAULT_ZOOM};
use crate::types::Coords;
use crate::utils::parse_coords;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "roudmap",
    about = "Replay a recorded map session and print the logged workouts"
)]
pub struct Cli {
    /// JSON-lines file of UI events (click, type, input, submit).
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Device position as "LAT,LNG". Without it, geolocation fails and
    /// the map never loads.
    #[arg(long, value_parser = coords_arg)]
    pub position: Option<Coords>,

    /// Initial map zoom.
    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: u8,

    /// Tile layer URL template.
    #[arg(long, default_value = DEFAULT_TILE_URL)]
    pub tile_url: String,

    /// Print workouts as JSON instead of sidebar markup.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

fn coords_arg(s: &str) -> Result<Coords, String> {
    parse_coords(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["roudmap", "session.jsonl"]).unwrap();
        assert_eq!(cli.script, PathBuf::from("session.jsonl"));
        assert_eq!(cli.position, None);
        assert_eq!(cli.zoom, 13);
        assert_eq!(cli.tile_url, DEFAULT_TILE_URL);
        assert!(!cli.json);
    }

    #[test]
    fn position_and_verbosity() {
        let cli = Cli::try_parse_from([
            "roudmap",
            "s.jsonl",
            "--position",
            "10,20",
            "--json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.position, Some(Coords::new(10.0, 20.0)));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn bad_position_is_rejected() {
        assert!(Cli::try_parse_from(["roudmap", "s.jsonl", "--position", "here"]).is_err());
    }
}
