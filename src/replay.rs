use crate::app::{App, SubmitOutcome};
use crate::dlog;
use crate::error::Field;
use crate::headless::{HeadlessPage, RecordingMapProvider};
use crate::types::{Coords, WorkoutType};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One recorded UI interaction, one per line of a script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum UiEvent {
    Click { lat: f64, lng: f64 },
    Type { kind: WorkoutType },
    Input { field: Field, value: String },
    Submit,
}

pub type HeadlessApp = App<RecordingMapProvider, HeadlessPage>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub added: usize,
    pub rejected: usize,
    pub ignored: usize,
}

/// JSON lines; blank lines and `#` comments are skipped.
pub fn parse_script(text: &str) -> Result<Vec<UiEvent>> {
    let mut out = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let ev: UiEvent = serde_json::from_str(line)
            .with_context(|| format!("line {}: bad event: {line}", i + 1))?;
        out.push(ev);
    }
    Ok(out)
}

pub fn read_script(path: &Path) -> Result<Vec<UiEvent>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading script: {}", path.display()))?;
    parse_script(&text).with_context(|| format!("parsing script: {}", path.display()))
}

pub fn replay(app: &mut HeadlessApp, events: &[UiEvent]) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for ev in events {
        summary.events += 1;
        dlog!("replay {ev:?}");
        match ev {
            UiEvent::Click { lat, lng } => app.map_clicked(Coords::new(*lat, *lng)),
            UiEvent::Type { kind } => {
                app.page_mut().select_type(*kind);
                app.type_changed();
            }
            UiEvent::Input { field, value } => app.page_mut().type_in(*field, value.as_str()),
            UiEvent::Submit => match app.submit()? {
                SubmitOutcome::Added(_) => summary.added += 1,
                SubmitOutcome::Rejected(_) => summary.rejected += 1,
                SubmitOutcome::Ignored => summary.ignored += 1,
            },
        }
    }

    tracing::info!(
        events = summary.events,
        added = summary.added,
        rejected = summary.rejected,
        ignored = summary.ignored,
        "replay done"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_event_kind() {
        let evs = parse_script(
            r#"
            # a ride
            {"event":"click","lat":10.0,"lng":20.0}
            {"event":"type","kind":"cycling"}

            {"event":"input","field":"climb","value":"300"}
            {"event":"submit"}
            "#,
        )
        .unwrap();

        assert_eq!(
            evs,
            vec![
                UiEvent::Click {
                    lat: 10.0,
                    lng: 20.0
                },
                UiEvent::Type {
                    kind: WorkoutType::Cycling
                },
                UiEvent::Input {
                    field: Field::Climb,
                    value: "300".into()
                },
                UiEvent::Submit,
            ]
        );
    }

    #[test]
    fn bad_line_reports_line_number() {
        let err = parse_script("{\"event\":\"submit\"}\n{\"event\":\"jump\"}").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }
}
