use crate::types::BillRecord;

/// Keep the bills whose number, title, or description contains the search
/// term, matched case-insensitively. A blank term (after trimming) keeps
/// every record. The matched subset preserves its input order.
pub fn filter_bills(records: &[BillRecord], term: &str) -> Vec<BillRecord> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| {
            record.number.to_lowercase().contains(&term)
                || record.title.to_lowercase().contains(&term)
                || record.description.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}
