use crate::error::Result;
use crate::types::BillRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Boundary to the data-fetch layer. The pipeline makes no assumption
/// about where records come from beyond their shape.
///
/// Implementations that talk to a real legislative-data API receive their
/// credentials as constructor arguments; nothing in this crate reads an
/// ambient or process-wide key.
pub trait BillSource {
    /// Fetch the bills for one state. Unknown states are not an error:
    /// they simply have no bills.
    fn bills_for_state(&self, state: &str) -> Result<Vec<BillRecord>>;
}

/// In-memory source backed by a small built-in catalogue. Used by the CLI
/// when no input file is given, and by tests that need realistic records.
pub struct FixtureSource {
    bills: Vec<(&'static str, BillRecord)>,
}

impl FixtureSource {
    pub fn new() -> Self {
        let catalogue = [
            (
                "California",
                "SB1234",
                "Clean Energy Act",
                "A bill to promote renewable energy sources and reduce carbon emissions.",
                "high",
                "2023-06-15",
                "In committee",
            ),
            (
                "New York",
                "HB5678",
                "Education Funding Reform",
                "Increases funding for public schools and teacher salaries.",
                "medium",
                "2023-07-20",
                "Passed House",
            ),
            (
                "Texas",
                "AB9012",
                "Healthcare Accessibility Act",
                "Expands healthcare coverage for low-income families.",
                "high",
                "2023-06-10",
                "Pending vote",
            ),
            (
                "Florida",
                "SB3456",
                "Housing Affordability Act",
                "Creates incentives for affordable housing development.",
                "medium",
                "2023-08-05",
                "In committee",
            ),
            (
                "Michigan",
                "HB7890",
                "Infrastructure Investment",
                "Allocates funding for roads, bridges, and public transportation.",
                "low",
                "2023-09-15",
                "Introduced",
            ),
            (
                "Illinois",
                "SB2468",
                "Criminal Justice Reform",
                "Reforms sentencing guidelines and promotes rehabilitation programs.",
                "high",
                "2023-06-20",
                "Passed Senate",
            ),
        ];

        let bills = catalogue
            .into_iter()
            .map(|(state, number, title, description, urgency, date, status)| {
                (
                    state,
                    BillRecord {
                        id: number.to_string(),
                        number: number.to_string(),
                        title: title.to_string(),
                        description: description.to_string(),
                        urgency: urgency.into(),
                        last_action_date: Some(date.to_string()),
                        status: status.to_string(),
                    },
                )
            })
            .collect();

        Self { bills }
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

impl BillSource for FixtureSource {
    fn bills_for_state(&self, state: &str) -> Result<Vec<BillRecord>> {
        Ok(self
            .bills
            .iter()
            .filter(|(bill_state, _)| bill_state.eq_ignore_ascii_case(state))
            .map(|(_, record)| record.clone())
            .collect())
    }
}

/// Source backed by a JSON file holding an array of bill records. The file
/// is assumed to already be scoped to one state, so every record is
/// returned regardless of the state asked for.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load every record in the file.
    pub fn load(&self) -> Result<Vec<BillRecord>> {
        let file = File::open(&self.path)?;
        read_records(BufReader::new(file))
    }
}

impl BillSource for JsonFileSource {
    fn bills_for_state(&self, _state: &str) -> Result<Vec<BillRecord>> {
        self.load()
    }
}

/// Parse a JSON array of bill records from any reader.
/// Useful for stdio pipelines: `curl ... | billview --stdin`
pub fn read_records(reader: impl Read) -> Result<Vec<BillRecord>> {
    let records = serde_json::from_reader(reader)?;
    Ok(records)
}

/// Convenience for loading records from a path without keeping a source
/// around.
pub fn read_records_from_path(path: impl AsRef<Path>) -> Result<Vec<BillRecord>> {
    JsonFileSource::new(path.as_ref()).load()
}
