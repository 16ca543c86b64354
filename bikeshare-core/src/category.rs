//! Categorical fields of a rental record.
//!
//! Each enum is declared in its display order, so the derived `Ord` and the
//! `ORDER` constant agree. Views that sort by category rely on that order
//! rather than on comparing label strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ORDER: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Position in `ORDER` (Monday = 0).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a full ("Monday") or abbreviated ("Mon") day name, any case.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase();
        Self::ORDER.into_iter().find(|day| {
            let name = day.label().to_ascii_lowercase();
            name == label || &name[..3] == label.as_str()
        })
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::ORDER[day.num_days_from_monday() as usize]
    }
}

/// Meteorological season label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ORDER: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" | "autumn" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }
}

/// Weather bucket, from mildest to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weather {
    #[serde(rename = "Clear/Partly Cloudy")]
    ClearPartlyCloudy,
    #[serde(rename = "Misty/Cloudy")]
    MistyCloudy,
    #[serde(rename = "Light Snow/Rain")]
    LightSnowRain,
    #[serde(rename = "Severe Weather")]
    SevereWeather,
}

impl Weather {
    pub const ORDER: [Weather; 4] = [
        Weather::ClearPartlyCloudy,
        Weather::MistyCloudy,
        Weather::LightSnowRain,
        Weather::SevereWeather,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Weather::ClearPartlyCloudy => "Clear/Partly Cloudy",
            Weather::MistyCloudy => "Misty/Cloudy",
            Weather::LightSnowRain => "Light Snow/Rain",
            Weather::SevereWeather => "Severe Weather",
        }
    }

    /// Parse a weather label, case-insensitive.
    ///
    /// The cleaned hourly dataset spells the first bucket "Clear/Party Cloudy";
    /// that spelling is accepted too.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "clear/partly cloudy" | "clear/party cloudy" => Some(Weather::ClearPartlyCloudy),
            "misty/cloudy" => Some(Weather::MistyCloudy),
            "light snow/rain" => Some(Weather::LightSnowRain),
            "severe weather" => Some(Weather::SevereWeather),
            _ => None,
        }
    }
}

/// Casual (non-member) or registered (member) rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiderType {
    Casual,
    Registered,
}

impl RiderType {
    pub const ORDER: [RiderType; 2] = [RiderType::Casual, RiderType::Registered];

    pub fn label(&self) -> &'static str {
        match self {
            RiderType::Casual => "casual",
            RiderType::Registered => "registered",
        }
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.pad(self.label())
                }
            }
        )*
    };
}

display_label!(Weekday, Season, Weather, RiderType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_order_matches_ord() {
        let mut shuffled = vec![Weekday::Sunday, Weekday::Wednesday, Weekday::Monday];
        shuffled.sort();
        assert_eq!(shuffled, vec![Weekday::Monday, Weekday::Wednesday, Weekday::Sunday]);
        assert_eq!(Weekday::Sunday.index(), 6);
    }

    #[test]
    fn weekday_from_full_and_short_names() {
        assert_eq!(Weekday::from_label("Tuesday"), Some(Weekday::Tuesday));
        assert_eq!(Weekday::from_label("sat"), Some(Weekday::Saturday));
        assert_eq!(Weekday::from_label("Funday"), None);
    }

    #[test]
    fn weekday_from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Mon), Weekday::Monday);
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
    }

    #[test]
    fn weather_accepts_source_spellings() {
        assert_eq!(
            Weather::from_label("Clear/Party Cloudy"),
            Some(Weather::ClearPartlyCloudy)
        );
        assert_eq!(Weather::from_label("light Snow/Rain"), Some(Weather::LightSnowRain));
        assert_eq!(Weather::from_label("Sunny"), None);
    }

    #[test]
    fn weather_order_is_by_severity() {
        assert!(Weather::ClearPartlyCloudy < Weather::MistyCloudy);
        assert!(Weather::LightSnowRain < Weather::SevereWeather);
        assert_eq!(Weather::ORDER[3], Weather::SevereWeather);
    }

    #[test]
    fn season_labels() {
        assert_eq!(Season::from_label("autumn"), Some(Season::Fall));
        assert_eq!(Season::Winter.to_string(), "Winter");
        assert_eq!(Season::ORDER, [Season::Spring, Season::Summer, Season::Fall, Season::Winter]);
    }

    #[test]
    fn categories_serialize_as_labels() {
        assert_eq!(
            serde_json::to_string(&Weather::MistyCloudy).unwrap(),
            "\"Misty/Cloudy\""
        );
        assert_eq!(serde_json::to_string(&RiderType::Registered).unwrap(), "\"registered\"");
        assert_eq!(serde_json::to_string(&Weekday::Friday).unwrap(), "\"Friday\"");
    }
}
