//! CSV reader producing untyped rows for the normalizer.
//!
//! Cells are typed dynamically the way spreadsheet exports usually expect:
//! empty cells become [`RawValue::Null`], `true`/`false` become booleans,
//! numeric text becomes a number and everything else stays text.
//! Surrounding whitespace is ignored when deciding whether a cell is
//! numeric, so `" 7 "` reads as `7`.
//!
//! Rows keep their cells in header order. When a key repeats, the later
//! cell wins.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// A single untyped cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Null,
}

impl RawValue {
    /// Types a raw CSV cell.
    pub fn infer(cell: &str) -> Self {
        if cell.is_empty() {
            return RawValue::Null;
        }

        match cell {
            "true" | "TRUE" => return RawValue::Bool(true),
            "false" | "FALSE" => return RawValue::Bool(false),
            _ => {}
        }

        match cell.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => RawValue::Number(n),
            _ => RawValue::Text(cell.to_string()),
        }
    }
}

/// Column name to cell, in header order and exactly as read. Header names
/// are not trimmed here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow(Vec<(String, RawValue)>);

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, overwriting an existing cell with exactly that name in
    /// place. New keys go at the end.
    pub fn insert(&mut self, key: impl Into<String>, value: RawValue) {
        let key = key.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }

    /// Builder-style insert, mostly for tests and programmatic callers.
    pub fn with(mut self, key: &str, value: RawValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Cells in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, RawValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, RawValue)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (key, value) in iter {
            row.insert(key, value);
        }
        row
    }
}

impl Serialize for RawRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RawRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = RawRow;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of column name to cell")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RawRow, A::Error> {
                let mut row = RawRow::new();
                while let Some((key, value)) = access.next_entry::<String, RawValue>()? {
                    row.insert(key, value);
                }
                Ok(row)
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}

/// Parses CSV text with a header row into [`RawRow`]s.
///
/// Blank lines are skipped, lines starting with `#` are comments, and rows
/// shorter than the header simply lack the trailing keys.
///
/// # Errors
///
/// Returns an error if the CSV is structurally malformed.
pub fn parse_csv(text: &str) -> Result<Vec<RawRow>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(text.as_bytes());

    let headers = reader.headers().context("CSV header row is unreadable")?.clone();
    debug!(columns = headers.len(), "CSV headers read");

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV parsing error in data row {}", index + 1))?;

        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.to_string(), RawValue::infer(cell)))
            .collect();
        rows.push(row);
    }

    debug!(rows = rows.len(), "CSV rows parsed");
    Ok(rows)
}

/// Reads and parses a CSV file from disk.
pub fn parse_csv_file(path: &Path) -> Result<Vec<RawRow>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_csv(&text)
}

/// Parses a JSON array of objects into [`RawRow`]s.
pub fn parse_json_rows(text: &str) -> Result<Vec<RawRow>> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_cell_types() {
        assert_eq!(RawValue::infer(""), RawValue::Null);
        assert_eq!(RawValue::infer("TRUE"), RawValue::Bool(true));
        assert_eq!(RawValue::infer("false"), RawValue::Bool(false));
        assert_eq!(RawValue::infer("45"), RawValue::Number(45.0));
        assert_eq!(RawValue::infer(" 7 "), RawValue::Number(7.0));
        assert_eq!(RawValue::infer("Yes"), RawValue::Text("Yes".to_string()));
        assert_eq!(RawValue::infer("True"), RawValue::Text("True".to_string()));
        assert_eq!(RawValue::infer("NaN"), RawValue::Text("NaN".to_string()));
    }

    #[test]
    fn test_parse_csv_rows() {
        let text = "Meeting_Title,Duration_Minutes,Decision_Made\n\
                    Planning,60,Yes\n\
                    \n\
                    # skipped comment\n\
                    Retro,45,no\n";
        let rows = parse_csv(text).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].get("Meeting_Title"),
            Some(&RawValue::Text("Planning".to_string()))
        );
        assert_eq!(rows[1].get("Duration_Minutes"), Some(&RawValue::Number(45.0)));
        assert_eq!(
            rows[1].get("Decision_Made"),
            Some(&RawValue::Text("no".to_string()))
        );
    }

    #[test]
    fn test_parse_csv_short_row_lacks_keys() {
        let rows = parse_csv("A,B,C\n1,2\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains_key("B"));
        assert!(!rows[0].contains_key("C"));
    }

    #[test]
    fn test_parse_csv_keeps_header_whitespace() {
        let rows = parse_csv(" Participants ,X\n4,y\n").unwrap();
        assert!(rows[0].contains_key(" Participants "));
    }

    #[test]
    fn test_parse_csv_keeps_header_order() {
        let rows = parse_csv("Participants,Meeting_Title, Participants \n4,Sync,20\n").unwrap();
        let keys: Vec<_> = rows[0].iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Participants", "Meeting_Title", " Participants "]);
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let row = RawRow::new()
            .with("A", RawValue::Number(1.0))
            .with("B", RawValue::Null)
            .with("A", RawValue::Number(2.0));
        assert_eq!(row.len(), 2);
        assert_eq!(row.iter().next(), Some(("A", &RawValue::Number(2.0))));
    }

    #[test]
    fn test_parse_csv_strips_bom() {
        let rows = parse_csv("\u{feff}Meeting_Title\nSync\n").unwrap();
        assert!(rows[0].contains_key("Meeting_Title"));
    }

    #[test]
    fn test_parse_json_rows() {
        let rows =
            parse_json_rows(r#"[{"Meeting_Title": "Sync", "Participants": 4, "Could_Be_Async": null}]"#)
                .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Participants"), Some(&RawValue::Number(4.0)));
        assert_eq!(rows[0].get("Could_Be_Async"), Some(&RawValue::Null));
    }

    #[test]
    fn test_parse_json_rows_keep_document_order() {
        let rows = parse_json_rows(r#"[{"Participants": 4, " Participants ": 20}]"#).unwrap();
        let keys: Vec<_> = rows[0].iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Participants", " Participants "]);
        assert_eq!(
            serde_json::to_string(&rows[0]).unwrap(),
            r#"{"Participants":4.0," Participants ":20.0}"#
        );
    }
}
