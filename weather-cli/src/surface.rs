use cityweather_core::{DisplaySurface, IconCategory, QueryError, WeatherReport};
use std::io::Write;
use tracing::warn;

/// Renders results as plain lines on a writer (stdout in practice).
pub struct TerminalSurface<W: Write> {
    out: W,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            warn!(error = %e, "failed to write to terminal");
        }
    }
}

pub fn icon_glyph(icon: IconCategory) -> &'static str {
    match icon {
        IconCategory::Thunder => "⛈",
        IconCategory::Drizzle => "🌦",
        IconCategory::Rain => "🌧",
        IconCategory::Snow => "❄",
        IconCategory::Mist => "🌫",
        IconCategory::Clear => "☀",
        IconCategory::Cloud => "☁",
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn show_error(&mut self, error: &QueryError) {
        let marker = if error.kind.is_transport() { "" } else { "❌ " };
        self.emit(&format!("{marker}{}:\n{}", error.kind.title(), error.message));
    }

    fn show_weather(&mut self, temperature_celsius: f64, description: &str, icon: Option<IconCategory>) {
        self.emit(&format!("{temperature_celsius:.0}°C"));
        match icon {
            Some(icon) => self.emit(&format!("{} {icon}", icon_glyph(icon))),
            None => self.emit("No icon"),
        }
        self.emit(description);
    }

    fn show_details(&mut self, report: &WeatherReport) {
        if let Some(name) = &report.location_name {
            self.emit(&format!("Location: {name}"));
        }
        if let Some(at) = report.observation_time {
            self.emit(&format!("Observed: {}", at.format("%Y-%m-%d %H:%M UTC")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use cityweather_core::{ErrorKind, render};

    fn rendered(result: cityweather_core::WeatherResult) -> String {
        let mut surface = TerminalSurface::new(Vec::new());
        render(&result, &mut surface);
        String::from_utf8(surface.into_inner()).expect("utf8 output")
    }

    #[test]
    fn status_errors_are_marked() {
        let out = rendered(Err(QueryError::new(ErrorKind::NotFound)));
        assert_eq!(out, "❌ 404 Not Found:\nCity not found\n");
    }

    #[test]
    fn transport_errors_are_not_marked() {
        let out = rendered(Err(QueryError::new(ErrorKind::Timeout)));
        assert_eq!(out, "Timeout Error:\nServer too slow\n");

        let out = rendered(Err(QueryError::request_failure("builder error")));
        assert_eq!(out, "Request Error:\nbuilder error\n");
    }

    #[test]
    fn success_rounds_temperature_and_shows_icon() {
        let report = WeatherReport {
            temperature_celsius: 26.6,
            condition_code: 800,
            description: "clear sky".into(),
            icon_category: Some(IconCategory::Clear),
            location_name: Some("Paris".into()),
            observation_time: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()),
        };

        let out = rendered(Ok(report));
        assert_eq!(
            out,
            "27°C\n☀ clear\nclear sky\nLocation: Paris\nObserved: 2024-05-01 12:30 UTC\n"
        );
    }

    #[test]
    fn missing_icon_says_so() {
        let report = WeatherReport {
            temperature_celsius: -3.4,
            condition_code: 951,
            description: "calm".into(),
            icon_category: None,
            location_name: None,
            observation_time: None,
        };

        let out = rendered(Ok(report));
        assert_eq!(out, "-3°C\nNo icon\ncalm\n");
    }
}
