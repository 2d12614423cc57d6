use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One row of the movie catalog. Only `overview` feeds the similarity
/// engine; the remaining fields are opaque display metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "Movie")]
    pub title: String,
    #[serde(rename = "Overview", default)]
    pub overview: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Certificate", default)]
    pub certificate: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "Rating", default)]
    pub rating: String,
    #[serde(rename = "No.of.Ratings", default)]
    pub rating_count: String,
}

/// Insertion-ordered, read-only-after-load movie table keyed by title.
/// Record positions are stable for the lifetime of one instance and align
/// with the vectors of a `FeatureIndex` built from it.
pub struct Catalog {
    records: Vec<MovieRecord>,
    by_title: HashMap<String, usize>,
}

impl Catalog {
    /// Load the catalog from a delimited file. An unopenable file is a
    /// fatal error; malformed rows inside it are skipped with a warning.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Catalog> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("opening catalog file {}", path.display()))?;
        Self::from_reader(file)
    }

    /// Load the catalog from any reader producing CSV with a header row.
    /// Header names are trimmed of surrounding whitespace; unknown columns
    /// (e.g. a pandas `Unnamed: 0` index column) are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        rdr.headers().context("reading catalog header row")?;

        let mut records: Vec<MovieRecord> = Vec::new();
        let mut skipped = 0usize;
        for (row, result) in rdr.deserialize::<MovieRecord>().enumerate() {
            match result {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(row, %err, "skipping malformed catalog row");
                    skipped += 1;
                }
            }
        }
        tracing::debug!(rows = records.len(), skipped, "catalog rows parsed");
        Ok(Self::from_records(records))
    }

    /// Build a catalog directly from records, applying the load rules:
    /// rows with an empty title are dropped, and on duplicate titles the
    /// first-seen record wins.
    pub fn from_records(input: Vec<MovieRecord>) -> Catalog {
        let mut records: Vec<MovieRecord> = Vec::with_capacity(input.len());
        let mut by_title: HashMap<String, usize> = HashMap::with_capacity(input.len());
        for record in input {
            if record.title.is_empty() {
                tracing::warn!("skipping catalog row with empty title");
                continue;
            }
            if by_title.contains_key(&record.title) {
                tracing::warn!(title = %record.title, "duplicate title, keeping first occurrence");
                continue;
            }
            by_title.insert(record.title.clone(), records.len());
            records.push(record);
        }
        tracing::info!(num_records = records.len(), "catalog loaded");
        Catalog { records, by_title }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Full metadata record for a title, exact match only.
    pub fn get(&self, title: &str) -> Option<&MovieRecord> {
        self.position(title).map(|pos| &self.records[pos])
    }

    /// Stable position of a title within this catalog instance.
    pub fn position(&self, title: &str) -> Option<usize> {
        self.by_title.get(title).copied()
    }

    /// Distinct titles, alphabetically sorted for display.
    pub fn titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.records.iter().map(|r| r.title.as_str()).collect();
        titles.sort_unstable();
        titles
    }
}
