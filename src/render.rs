use crate::types::{Workout, WorkoutKind};
use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

/// Popup bound to a workout marker. Stays open when other popups open
/// or the map is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub content: String,
    pub class_name: String,
    pub auto_close: bool,
    pub close_on_click: bool,
}

pub fn popup(w: &Workout) -> Popup {
    let ty = w.workout_type();
    Popup {
        content: format!("{} {}", ty.icon(), w.description),
        class_name: format!("{ty}-popup"),
        auto_close: false,
        close_on_click: false,
    }
}

/// Sidebar `<li>` for one workout.
pub fn workout_row(w: &Workout) -> Result<String> {
    let ty = w.workout_type();
    let class = format!("workout workout--{ty}");

    let mut xml = Writer::new(Vec::new());
    let li = BytesStart::new("li")
        .with_attributes([("class", class.as_str()), ("data-id", w.id.as_str())]);
    xml.write_event(Event::Start(li))?;

    xml.write_event(Event::Start(
        BytesStart::new("h2").with_attributes([("class", "workout__title")]),
    ))?;
    xml.write_event(Event::Text(BytesText::new(&w.description)))?;
    xml.write_event(Event::End(BytesEnd::new("h2")))?;

    detail(&mut xml, ty.icon(), &amount(w.distance), "km")?;
    detail(&mut xml, "⏱", &amount(w.duration), "min")?;

    match w.kind {
        WorkoutKind::Running { cadence, pace } => {
            detail(&mut xml, "⚡️", &format!("{pace:.2}"), "min/km")?;
            detail(&mut xml, "🦶🏼", &amount(cadence), "spm")?;
        }
        WorkoutKind::Cycling { climb, speed } => {
            detail(&mut xml, "⚡️", &format!("{speed:.2}"), "km/h")?;
            detail(&mut xml, "⛰", &amount(climb), "m")?;
        }
    }

    xml.write_event(Event::End(BytesEnd::new("li")))?;

    Ok(String::from_utf8(xml.into_inner())?)
}

/// Two decimals at most, trailing zeros dropped: `5`, `5.5`, `5.25`.
fn amount(v: f64) -> String {
    let s = format!("{v:.2}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

fn detail(xml: &mut Writer<Vec<u8>>, icon: &str, value: &str, unit: &str) -> Result<()> {
    xml.write_event(Event::Start(
        BytesStart::new("div").with_attributes([("class", "workout__details")]),
    ))?;
    span(xml, "workout__icon", icon)?;
    span(xml, "workout__value", value)?;
    span(xml, "workout__unit", unit)?;
    xml.write_event(Event::End(BytesEnd::new("div")))?;
    Ok(())
}

fn span(xml: &mut Writer<Vec<u8>>, class: &str, text: &str) -> Result<()> {
    xml.write_event(Event::Start(
        BytesStart::new("span").with_attributes([("class", class)]),
    ))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new("span")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coords;
    use chrono::{TimeZone, Utc};

    fn created() -> chrono::DateTime<Utc> {
        Utc.timestamp_millis_opt(1_760_654_321_987).unwrap()
    }

    #[test]
    fn running_row_has_pace_and_cadence() {
        let w = Workout::running(Coords::new(10.0, 20.0), 5.0, 27.0, 160.0, created());
        let html = workout_row(&w).unwrap();

        assert!(html.starts_with(r#"<li class="workout workout--running" data-id="0654321987">"#));
        assert!(html.contains(r#"<h2 class="workout__title">Run on "#));
        assert!(html.contains(r#"<span class="workout__value">5.40</span><span class="workout__unit">min/km</span>"#));
        assert!(html.contains(r#"<span class="workout__value">160</span><span class="workout__unit">spm</span>"#));
        assert!(!html.contains("km/h"));
        assert!(html.ends_with("</li>"));
    }

    #[test]
    fn cycling_row_has_speed_and_climb() {
        let w = Workout::cycling(Coords::new(10.0, 20.0), 20.0, 45.0, 300.0, created());
        let html = workout_row(&w).unwrap();

        assert!(html.contains("workout--cycling"));
        assert!(html.contains(r#"<span class="workout__value">26.67</span><span class="workout__unit">km/h</span>"#));
        assert!(html.contains(r#"<span class="workout__value">300</span><span class="workout__unit">m</span>"#));
        assert!(!html.contains("spm"));
    }

    #[test]
    fn popup_is_sticky_and_typed() {
        let w = Workout::cycling(Coords::new(10.0, 20.0), 20.0, 60.0, 300.0, created());
        let p = popup(&w);
        assert_eq!(p.class_name, "cycling-popup");
        assert!(p.content.contains(&w.description));
        assert!(!p.auto_close);
        assert!(!p.close_on_click);
    }

    #[test]
    fn amounts_are_bounded_to_two_decimals() {
        assert_eq!(amount(5.0), "5");
        assert_eq!(amount(5.5), "5.5");
        assert_eq!(amount(5.257), "5.26");
        assert_eq!(amount(160.0), "160");
        assert_eq!(amount(1e-320), "0");
    }

    #[test]
    fn tiny_distance_keeps_row_short() {
        let w = Workout::running(Coords::new(10.0, 20.0), 1e-320, 25.0, 160.0, created());
        let html = workout_row(&w).unwrap();

        assert!(html.contains(r#"<span class="workout__value">0</span><span class="workout__unit">km</span>"#));
        assert!(!html.contains("0.000"));
        assert!(html.len() < 1000, "{}", html.len());
    }
}
