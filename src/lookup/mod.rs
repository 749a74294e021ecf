// src/lookup/mod.rs
use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::utils::error::LookupError;

/// One listed security. `code` is the canonical identifier used for API calls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SecurityRecord {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub market: String,
    #[serde(default)]
    pub industry: String,
}

impl fmt::Display for SecurityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', '{}', '{}', '{}')", self.code, self.name, self.market, self.industry)
    }
}

/// Maps a security name or code to its listing record.
pub trait TickerDirectory {
    /// `Ok(None)` when nothing matches.
    fn lookup(&self, query: &str) -> Result<Option<SecurityRecord>, LookupError>;
}

/// Directory backed by a listings CSV with a `code,name,market,industry` header.
pub struct CsvTickerDirectory {
    records: Vec<SecurityRecord>,
}

impl CsvTickerDirectory {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LookupError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let directory = Self::from_reader(file)?;
        tracing::debug!("Loaded {} listings from {}", directory.records.len(), path.display());
        Ok(directory)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, LookupError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let records = csv_reader
            .deserialize::<SecurityRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }
}

impl TickerDirectory for CsvTickerDirectory {
    fn lookup(&self, query: &str) -> Result<Option<SecurityRecord>, LookupError> {
        let query = query.trim();
        let found = self
            .records
            .iter()
            .find(|r| r.code == query)
            .or_else(|| self.records.iter().find(|r| r.name.eq_ignore_ascii_case(query)));
        Ok(found.cloned())
    }
}

/// Resolves user input to a listing record, failing with a not-found error
/// that names the input.
pub fn resolve_security(
    directory: &dyn TickerDirectory,
    name_or_code: &str,
) -> Result<SecurityRecord, LookupError> {
    match directory.lookup(name_or_code)? {
        Some(record) => {
            tracing::info!("Resolved '{}' to code {} ({})", name_or_code, record.code, record.name);
            Ok(record)
        }
        None => {
            tracing::warn!("No listing matches '{}'", name_or_code);
            Err(LookupError::NotFound(name_or_code.to_string()))
        }
    }
}
