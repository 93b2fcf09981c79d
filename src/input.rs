//! Parsing of free-text user input before it reaches the task manager.

use chrono::NaiveDate;

use crate::error::{Result, TaskError};

/// Accept only zero-padded `YYYY-MM-DD` naming a real calendar day.
pub fn parse_due_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    let shaped = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(TaskError::MalformedDate(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| TaskError::MalformedDate(raw.to_string()))
}

pub fn parse_priority(raw: &str) -> Result<i64> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .map_err(|_| TaskError::InvalidInput(format!("priority must be an integer, got '{raw}'")))
}

/// Split a comma-separated list of task names. Blank entries are dropped,
/// so an empty line means no dependencies.
pub fn parse_dependencies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_date_accepts_iso_dates() {
        let date = parse_due_date("2024-12-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());
        assert!(parse_due_date(" 2024-02-29 ").is_ok());
    }

    #[test]
    fn due_date_rejects_other_shapes() {
        for raw in ["2024-1-05", "15/12/2024", "2024-12-15T00:00", "tomorrow", "", "+2024-1-1"] {
            let err = parse_due_date(raw).unwrap_err();
            assert!(matches!(err, TaskError::MalformedDate(_)), "{raw} should be rejected");
        }
    }

    #[test]
    fn due_date_rejects_impossible_days() {
        assert!(parse_due_date("2023-02-29").is_err());
        assert!(parse_due_date("2024-13-01").is_err());
    }

    #[test]
    fn priority_must_be_integer() {
        assert_eq!(parse_priority(" -2 ").unwrap(), -2);
        assert!(matches!(parse_priority("high"), Err(TaskError::InvalidInput(_))));
        assert!(matches!(parse_priority("1.5"), Err(TaskError::InvalidInput(_))));
    }

    #[test]
    fn dependencies_split_on_commas() {
        assert_eq!(parse_dependencies("T2, T3 ,,"), vec!["T2", "T3"]);
        assert!(parse_dependencies("").is_empty());
        assert!(parse_dependencies(" , ").is_empty());
    }
}
