use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::RecordField;
use crate::error::TrackerError;

/// Placeholder the lookup service's omissions are normalized to
pub const NOT_AVAILABLE: &str = "N/A";

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

/// One IP's normalized geolocation attributes.
///
/// String fields hold the `"N/A"` sentinel when the lookup service omitted
/// them. The coordinates are typed (`Option<f64>`) internally; the sentinel
/// exists for them only at the presentation boundary, i.e. in display
/// output and in the saved JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpRecord {
    #[serde(default = "not_available")]
    pub ip: String,
    #[serde(default = "not_available")]
    pub city: String,
    #[serde(default = "not_available")]
    pub region: String,
    #[serde(default = "not_available")]
    pub country: String,
    #[serde(default, with = "coordinate")]
    pub latitude: Option<f64>,
    #[serde(default, with = "coordinate")]
    pub longitude: Option<f64>,
    #[serde(default = "not_available")]
    pub isp: String,
    #[serde(default = "not_available")]
    pub timezone: String,
}

impl IpRecord {
    /// Borrow the text behind `field`; `None` for the numeric fields
    pub fn text_value(&self, field: RecordField) -> Option<&str> {
        match field {
            RecordField::Ip => Some(&self.ip),
            RecordField::City => Some(&self.city),
            RecordField::Region => Some(&self.region),
            RecordField::Country => Some(&self.country),
            RecordField::Isp => Some(&self.isp),
            RecordField::Timezone => Some(&self.timezone),
            RecordField::Latitude | RecordField::Longitude => None,
        }
    }

    /// The coordinate behind `field`; `None` when the field is textual or
    /// the coordinate is absent
    pub fn coordinate_value(&self, field: RecordField) -> Option<f64> {
        match field {
            RecordField::Latitude => self.latitude,
            RecordField::Longitude => self.longitude,
            _ => None,
        }
    }

    /// Value of `field` in its display form; absent coordinates come back
    /// as the sentinel
    pub fn display_value(&self, field: RecordField) -> String {
        match self.text_value(field) {
            Some(text) => text.to_string(),
            None => format_coordinate(self.coordinate_value(field)),
        }
    }

    /// Assign `value` to `field`. Text fields take the value as given; the
    /// numeric fields parse it at the boundary and reject anything that is
    /// neither a number nor the sentinel, leaving the record untouched.
    pub fn set_value(&mut self, field: RecordField, value: &str) -> Result<(), TrackerError> {
        match field {
            RecordField::Ip => self.ip = value.to_string(),
            RecordField::City => self.city = value.to_string(),
            RecordField::Region => self.region = value.to_string(),
            RecordField::Country => self.country = value.to_string(),
            RecordField::Isp => self.isp = value.to_string(),
            RecordField::Timezone => self.timezone = value.to_string(),
            RecordField::Latitude => self.latitude = parse_coordinate(field, value)?,
            RecordField::Longitude => self.longitude = parse_coordinate(field, value)?,
        }
        Ok(())
    }
}

impl fmt::Display for IpRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {})",
            self.ip, self.city, self.region, self.country
        )
    }
}

/// Sentinel (or blank) means absent; anything else must parse as a number
fn parse_coordinate(field: RecordField, value: &str) -> Result<Option<f64>, TrackerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_AVAILABLE) {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| TrackerError::InvalidValue {
            field: field.name(),
            value: value.to_string(),
        })
}

/// Display form of a coordinate: the number, or the sentinel when absent
pub fn format_coordinate(value: Option<f64>) -> String {
    match value {
        Some(number) => number.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Serde boundary for the coordinate fields. On disk a coordinate is a
/// JSON number when the service reported one, the literal string `"N/A"`
/// when it did not. Reading tolerates numbers, numeric strings, the
/// sentinel, and null.
mod coordinate {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(number) => serializer.serialize_f64(*number),
            None => serializer.serialize_str(super::NOT_AVAILABLE),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(match raw {
            serde_json::Value::Number(number) => number.as_f64(),
            serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        })
    }
}
