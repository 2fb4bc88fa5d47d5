use crate::types::BillRecord;
use chrono::NaiveDate;
use std::cmp::Reverse;

/// Sort bills by urgency rank (high first), then by last action date with
/// the most recent first. Records without a parseable date are treated as
/// the minimum date, so they land after every dated record of the same
/// urgency. The sort is stable: ties keep their input order.
pub fn sort_bills(mut records: Vec<BillRecord>) -> Vec<BillRecord> {
    records.sort_by_key(|record| {
        (
            record.urgency.rank(),
            Reverse(record.action_date().unwrap_or(NaiveDate::MIN)),
        )
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Urgency;

    fn bill(id: &str, urgency: Urgency, date: Option<&str>) -> BillRecord {
        BillRecord {
            id: id.to_string(),
            number: id.to_string(),
            title: String::new(),
            description: String::new(),
            urgency,
            last_action_date: date.map(|d| d.to_string()),
            status: String::new(),
        }
    }

    fn ids(records: &[BillRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_urgency_before_date() {
        let sorted = sort_bills(vec![
            bill("old-high", Urgency::High, Some("2020-01-01")),
            bill("new-low", Urgency::Low, Some("2024-01-01")),
            bill("new-medium", Urgency::Medium, Some("2024-01-01")),
        ]);
        assert_eq!(ids(&sorted), vec!["old-high", "new-medium", "new-low"]);
    }

    #[test]
    fn test_recent_dates_first_within_urgency() {
        let sorted = sort_bills(vec![
            bill("a", Urgency::High, Some("2023-06-10")),
            bill("b", Urgency::High, Some("2023-06-20")),
            bill("c", Urgency::High, Some("2023-06-15")),
        ]);
        assert_eq!(ids(&sorted), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_missing_date_sorts_last_within_urgency() {
        let sorted = sort_bills(vec![
            bill("undated", Urgency::High, None),
            bill("garbage", Urgency::High, Some("soon")),
            bill("dated", Urgency::High, Some("2021-03-01")),
        ]);
        // undated and garbage both collapse to the minimum date and keep
        // their relative input order
        assert_eq!(ids(&sorted), vec!["dated", "undated", "garbage"]);
    }

    #[test]
    fn test_unknown_urgency_after_low() {
        let sorted = sort_bills(vec![
            bill("mystery", Urgency::Unknown, Some("2024-01-01")),
            bill("low", Urgency::Low, None),
        ]);
        assert_eq!(ids(&sorted), vec!["low", "mystery"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let input = vec![
            bill("a", Urgency::Low, Some("2023-01-01")),
            bill("b", Urgency::High, None),
            bill("c", Urgency::High, Some("2023-05-05")),
            bill("d", Urgency::Medium, Some("bad date")),
        ];
        let once = sort_bills(input);
        let twice = sort_bills(once.clone());
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_empty_input() {
        assert!(sort_bills(Vec::new()).is_empty());
    }
}
