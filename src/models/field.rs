/// Field-name dispatch for update and sort
use std::fmt;

/// The eight attributes every stored record carries, in record order.
///
/// User input naming anything else is rejected with `InvalidField` instead
/// of being looked up dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Ip,
    City,
    Region,
    Country,
    Latitude,
    Longitude,
    Isp,
    Timezone,
}

impl RecordField {
    /// Every field, in the order records are displayed and saved
    pub const ALL: [RecordField; 8] = [
        RecordField::Ip,
        RecordField::City,
        RecordField::Region,
        RecordField::Country,
        RecordField::Latitude,
        RecordField::Longitude,
        RecordField::Isp,
        RecordField::Timezone,
    ];

    /// Resolve a user-supplied field name. Names match the saved JSON keys
    /// exactly; anything else is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iptrack::models::RecordField;
    ///
    /// assert_eq!(RecordField::parse("city"), Some(RecordField::City));
    /// assert_eq!(RecordField::parse("latitude"), Some(RecordField::Latitude));
    /// assert_eq!(RecordField::parse("hostname"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "ip" => Some(RecordField::Ip),
            "city" => Some(RecordField::City),
            "region" => Some(RecordField::Region),
            "country" => Some(RecordField::Country),
            "latitude" => Some(RecordField::Latitude),
            "longitude" => Some(RecordField::Longitude),
            "isp" => Some(RecordField::Isp),
            "timezone" => Some(RecordField::Timezone),
            _ => None,
        }
    }

    /// The field's name as it appears in prompts and saved files
    pub fn name(&self) -> &'static str {
        match self {
            RecordField::Ip => "ip",
            RecordField::City => "city",
            RecordField::Region => "region",
            RecordField::Country => "country",
            RecordField::Latitude => "latitude",
            RecordField::Longitude => "longitude",
            RecordField::Isp => "isp",
            RecordField::Timezone => "timezone",
        }
    }

    /// Latitude and longitude carry an optional coordinate instead of text
    pub fn is_numeric(&self) -> bool {
        matches!(self, RecordField::Latitude | RecordField::Longitude)
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_names_round_trip() {
        for field in RecordField::ALL {
            assert_eq!(RecordField::parse(field.name()), Some(field));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_cased_names() {
        assert_eq!(RecordField::parse("City"), None);
        assert_eq!(RecordField::parse("regionName"), None);
        assert_eq!(RecordField::parse(""), None);
    }

    #[test]
    fn test_numeric_fields() {
        assert!(RecordField::Latitude.is_numeric());
        assert!(RecordField::Longitude.is_numeric());
        assert!(!RecordField::Country.is_numeric());
        assert!(!RecordField::Ip.is_numeric());
    }
}
