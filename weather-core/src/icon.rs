use serde::Serialize;

/// Coarse weather-condition bucket used to pick a display icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconCategory {
    Thunder,
    Drizzle,
    Rain,
    Snow,
    Mist,
    Clear,
    Cloud,
}

impl IconCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconCategory::Thunder => "thunder",
            IconCategory::Drizzle => "drizzle",
            IconCategory::Rain => "rain",
            IconCategory::Snow => "snow",
            IconCategory::Mist => "mist",
            IconCategory::Clear => "clear",
            IconCategory::Cloud => "cloud",
        }
    }

    /// Conventional image file name for this category, e.g. `thunder.jpg`.
    pub fn asset_file(&self) -> String {
        format!("{}.jpg", self.as_str())
    }

    pub const fn all() -> &'static [IconCategory] {
        &[
            IconCategory::Thunder,
            IconCategory::Drizzle,
            IconCategory::Rain,
            IconCategory::Snow,
            IconCategory::Mist,
            IconCategory::Clear,
            IconCategory::Cloud,
        ]
    }
}

impl std::fmt::Display for IconCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an OpenWeather condition id to its icon category.
///
/// Bounds are inclusive; codes outside every group resolve to `None`.
pub fn resolve_icon(code: i64) -> Option<IconCategory> {
    match code {
        200..=232 => Some(IconCategory::Thunder),
        300..=321 => Some(IconCategory::Drizzle),
        500..=531 => Some(IconCategory::Rain),
        600..=622 => Some(IconCategory::Snow),
        700..=781 => Some(IconCategory::Mist),
        800 => Some(IconCategory::Clear),
        801..=804 => Some(IconCategory::Cloud),
        _ => None,
    }
}
