use crate::types::Coords;
use anyhow::{Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing_subscriber::{EnvFilter, fmt};

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Initialize colorful logging.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let net = i16::from(verbose) - i16::from(quiet);
    let level = match net {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i16::MAX => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,roudmap={level}")));

    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .init();
}

static COORDS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(-?\d+(?:\.\d+)?)\s*[,; ]\s*(-?\d+(?:\.\d+)?)\s*$").expect("valid regex")
});

/// Parses `"LAT,LNG"` (comma, semicolon or space separated) in degrees.
pub fn parse_coords(s: &str) -> Result<Coords> {
    let Some(caps) = COORDS_RE.captures(s) else {
        bail!("expected \"LAT,LNG\", got {s:?}");
    };
    let lat: f64 = caps[1].parse()?;
    let lng: f64 = caps[2].parse()?;

    if !(-90.0..=90.0).contains(&lat) {
        bail!("latitude out of range: {lat}");
    }
    if !(-180.0..=180.0).contains(&lng) {
        bail!("longitude out of range: {lng}");
    }
    Ok(Coords::new(lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_separators() {
        assert_eq!(parse_coords("10,20").unwrap(), Coords::new(10.0, 20.0));
        assert_eq!(
            parse_coords(" 48.117, -1.677 ").unwrap(),
            Coords::new(48.117, -1.677)
        );
        assert_eq!(parse_coords("1.5;2.5").unwrap(), Coords::new(1.5, 2.5));
        assert_eq!(parse_coords("-3 4").unwrap(), Coords::new(-3.0, 4.0));
    }

    #[test]
    fn rejects_garbage_and_out_of_range() {
        assert!(parse_coords("north").is_err());
        assert!(parse_coords("10").is_err());
        assert!(parse_coords("91,0").is_err());
        assert!(parse_coords("0,-181").is_err());
    }
}
