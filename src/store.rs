use std::cmp::Ordering;

use crate::error::TrackerError;
use crate::models::{IpRecord, RecordField};

/// The session's records, in insertion order. Owned by the shell and
/// passed into each operation by reference; nothing here touches the disk
/// or the network. `ip` acts as the key for delete and update, but
/// uniqueness is not enforced on insert: duplicates may coexist, and both
/// operations act on the first match only.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<IpRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub fn records(&self) -> &[IpRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record and hand back its ip for the success report.
    pub fn store(&mut self, record: IpRecord) -> String {
        let ip = record.ip.clone();
        tracing::debug!(%record, "storing record");
        self.records.push(record);
        ip
    }

    /// Remove and return the first record with this IP. Later duplicates
    /// stay put.
    pub fn delete(&mut self, ip: &str) -> Result<IpRecord, TrackerError> {
        match self.records.iter().position(|record| record.ip == ip) {
            Some(index) => Ok(self.records.remove(index)),
            None => Err(TrackerError::RecordNotFound(ip.to_string())),
        }
    }

    /// Overwrite one field of the first record with this IP. The record is
    /// located before the field name is checked, so an unknown IP wins over
    /// an unknown field when both are wrong.
    pub fn update(&mut self, ip: &str, field_name: &str, value: &str) -> Result<(), TrackerError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.ip == ip)
            .ok_or_else(|| TrackerError::RecordNotFound(ip.to_string()))?;
        let field = RecordField::parse(field_name)
            .ok_or_else(|| TrackerError::InvalidField(field_name.to_string()))?;
        record.set_value(field, value)
    }

    /// Stable ascending sort by one field, in place. Absent coordinates
    /// order before any present value. A NaN coordinate makes the ordering
    /// undefined, so the store is left in its pre-call order and
    /// `SortFailure` is reported.
    pub fn sort(&mut self, field_name: &str) -> Result<(), TrackerError> {
        let field = RecordField::parse(field_name)
            .ok_or_else(|| TrackerError::InvalidField(field_name.to_string()))?;

        if field.is_numeric() {
            let incomparable = self
                .records
                .iter()
                .any(|record| record.coordinate_value(field).map_or(false, f64::is_nan));
            if incomparable {
                return Err(TrackerError::SortFailure(format!(
                    "incomparable {} values",
                    field.name()
                )));
            }
            self.records.sort_by(|a, b| {
                compare_coordinates(a.coordinate_value(field), b.coordinate_value(field))
            });
        } else {
            self.records.sort_by(|a, b| {
                a.text_value(field)
                    .unwrap_or("")
                    .cmp(b.text_value(field).unwrap_or(""))
            });
        }
        tracing::debug!(field = field.name(), records = self.records.len(), "store sorted");
        Ok(())
    }

    /// Drop the current contents in favor of a freshly loaded set.
    pub fn replace_all(&mut self, records: Vec<IpRecord>) {
        self.records = records;
    }
}

/// Missing sorts before any present value; present values order naturally.
/// Callers have already screened out NaN.
fn compare_coordinates(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_coordinates_missing_first() {
        assert_eq!(compare_coordinates(None, Some(-90.0)), Ordering::Less);
        assert_eq!(compare_coordinates(Some(-90.0), None), Ordering::Greater);
        assert_eq!(compare_coordinates(None, None), Ordering::Equal);
        assert_eq!(compare_coordinates(Some(1.0), Some(2.0)), Ordering::Less);
    }
}
