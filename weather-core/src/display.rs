//! Rendering seam between the query service and whatever draws the result.

use crate::{
    error::QueryError,
    icon::IconCategory,
    model::{WeatherReport, WeatherResult},
};

/// Something that can show the outcome of a weather query.
///
/// Each call replaces whatever was shown before.
pub trait DisplaySurface {
    fn show_error(&mut self, error: &QueryError);

    fn show_weather(
        &mut self,
        temperature_celsius: f64,
        description: &str,
        icon: Option<IconCategory>,
    );

    /// Optional extra fields of a successful report (location, observation time).
    fn show_details(&mut self, _report: &WeatherReport) {}
}

/// Hand one result to the surface.
pub fn render<S: DisplaySurface + ?Sized>(result: &WeatherResult, surface: &mut S) {
    match result {
        Ok(report) => {
            surface.show_weather(
                report.temperature_celsius,
                &report.description,
                report.icon_category,
            );
            surface.show_details(report);
        }
        Err(error) => surface.show_error(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<String>,
    }

    impl DisplaySurface for RecordingSurface {
        fn show_error(&mut self, error: &QueryError) {
            self.calls.push(format!("error:{}", error.message));
        }

        fn show_weather(&mut self, temperature_celsius: f64, description: &str, icon: Option<IconCategory>) {
            self.calls
                .push(format!("weather:{temperature_celsius:.1}:{description}:{icon:?}"));
        }
    }

    #[test]
    fn success_goes_to_show_weather_only() {
        let report = WeatherReport {
            temperature_celsius: 21.5,
            condition_code: 500,
            description: "light rain".into(),
            icon_category: Some(IconCategory::Rain),
            location_name: None,
            observation_time: None,
        };

        let mut surface = RecordingSurface::default();
        render(&Ok(report), &mut surface);

        assert_eq!(surface.calls, vec!["weather:21.5:light rain:Some(Rain)"]);
    }

    #[test]
    fn error_goes_to_show_error_only() {
        let mut surface = RecordingSurface::default();
        render(&Err(QueryError::new(ErrorKind::RateLimited)), &mut surface);

        assert_eq!(surface.calls, vec!["error:API limit reached"]);
    }
}
