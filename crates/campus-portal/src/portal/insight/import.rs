use super::domain::{InteractionRecord, Resolution, Sentiment};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Failure raised while reading an interaction-log export.
#[derive(Debug, thiserror::Error)]
pub enum InteractionImportError {
    #[error("failed to read interaction export: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: '{value}' is not a recognizable timestamp")]
    InvalidTimestamp { row: usize, value: String },
}

/// Parse an interaction-log CSV export. Sentiment and resolution columns are
/// optional and tolerate unknown labels (scored at neutral downstream); the
/// domain tag is carried through verbatim so the grouping seam can judge it.
pub fn parse_interactions<R: Read>(
    reader: R,
) -> Result<Vec<InteractionRecord>, InteractionImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<InteractionRow>().enumerate() {
        let row = row?;
        let occurred_at =
            parse_timestamp(&row.occurred_at).ok_or_else(|| {
                InteractionImportError::InvalidTimestamp {
                    row: index + 1,
                    value: row.occurred_at.clone(),
                }
            })?;

        records.push(InteractionRecord {
            domain_tag: row.domain,
            department_id: row.department,
            sentiment: row.sentiment.as_deref().and_then(Sentiment::from_tag),
            resolution: row.resolution.as_deref().and_then(Resolution::from_tag),
            occurred_at,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct InteractionRow {
    #[serde(rename = "Domain")]
    domain: String,
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "Sentiment", default, deserialize_with = "empty_string_as_none")]
    sentiment: Option<String>,
    #[serde(rename = "Resolution", default, deserialize_with = "empty_string_as_none")]
    resolution: Option<String>,
    #[serde(rename = "Occurred At")]
    occurred_at: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::insight::domain::{Resolution, Sentiment};

    const EXPORT: &str = "\
Domain,Department,Sentiment,Resolution,Occurred At
FEES,CSE,POSITIVE,RESOLVED,2026-02-10T08:45:00Z
hostel,ECE,,ESCALATED,2026-02-11
CAFETERIA,ME,NEGATIVE,,2026-02-12T10:00:00+05:30
";

    #[test]
    fn parses_rows_with_optional_columns() {
        let records = parse_interactions(EXPORT.as_bytes()).expect("export parses");
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].sentiment, Some(Sentiment::Positive));
        assert_eq!(records[0].resolution, Some(Resolution::Resolved));

        assert_eq!(records[1].sentiment, None);
        assert_eq!(records[1].resolution, Some(Resolution::Escalated));
        assert_eq!(
            records[1].occurred_at,
            DateTime::parse_from_rfc3339("2026-02-11T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc)
        );

        // Offsets normalize to UTC.
        assert_eq!(
            records[2].occurred_at,
            DateTime::parse_from_rfc3339("2026-02-12T04:30:00Z")
                .unwrap()
                .with_timezone(&Utc)
        );
    }

    #[test]
    fn keeps_unknown_domain_tags_verbatim() {
        let records = parse_interactions(EXPORT.as_bytes()).expect("export parses");
        assert_eq!(records[2].domain_tag, "CAFETERIA");
    }

    #[test]
    fn rejects_unparseable_timestamps() {
        let export = "Domain,Department,Sentiment,Resolution,Occurred At\nFEES,CSE,,,soon\n";
        let err = parse_interactions(export.as_bytes()).expect_err("bad timestamp rejected");
        assert!(matches!(
            err,
            InteractionImportError::InvalidTimestamp { row: 1, .. }
        ));
    }
}
