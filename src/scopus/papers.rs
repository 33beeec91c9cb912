use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::input::read_latin1;

pub const TITLE: &str = "Title";
pub const AFFILIATIONS: &str = "Affiliations";
pub const CONFERENCE_NAME: &str = "Conference name";
pub const YEAR: &str = "Year";
pub const CITED_BY: &str = "Cited by";

const REQUIRED_COLUMNS: &[&str] = &[TITLE, AFFILIATIONS, CONFERENCE_NAME, YEAR, CITED_BY];

/// One row of a Scopus export.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperRecord {
    pub fields: BTreeMap<String, String>,
    pub year: i32,
    /// Parsed from `Cited by` when the paper is indexed; out-of-range
    /// papers keep 0.
    pub citations: u64,
    /// Canonical institutions derived from the affiliation list.
    pub institutions: BTreeSet<String>,
}

impl PaperRecord {
    pub fn from_fields(fields: BTreeMap<String, String>) -> Result<Self> {
        for column in REQUIRED_COLUMNS {
            if !fields.contains_key(*column) {
                bail!("Missing column {:?}", column);
            }
        }

        let raw_year = &fields[YEAR];
        let year = raw_year
            .trim()
            .parse()
            .with_context(|| format!("Invalid year {:?}", raw_year))?;

        Ok(Self {
            fields,
            year,
            citations: 0,
            institutions: BTreeSet::new(),
        })
    }

    /// The `Cited by` count; empty reads as 0.
    pub fn cited_by(&self) -> Result<u64> {
        let raw = self.field(CITED_BY).trim();
        if raw.is_empty() {
            return Ok(0);
        }
        raw.parse()
            .with_context(|| format!("Invalid citation count {:?}", raw))
    }

    pub fn field(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.field(TITLE)
    }

    pub fn affiliations(&self) -> &str {
        self.field(AFFILIATIONS)
    }

    pub fn conference_name(&self) -> &str {
        self.field(CONFERENCE_NAME)
    }
}

/// Parses Scopus CSV text (header row first) into paper records.
pub fn parse_papers(text: &str) -> Result<Vec<PaperRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            bail!("Export has no {:?} column", column);
        }
    }

    let mut papers = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let fields: BTreeMap<String, String> = headers
            .iter()
            .cloned()
            .zip(record.iter().map(String::from))
            .collect();
        let paper = PaperRecord::from_fields(fields).with_context(|| format!("Row {}", idx + 1))?;
        papers.push(paper);
    }

    Ok(papers)
}

/// Reads a Latin-1 encoded Scopus export.
pub fn read_papers<P: AsRef<Path>>(path: P) -> Result<Vec<PaperRecord>> {
    let path = path.as_ref();
    let text = read_latin1(path)?;
    parse_papers(&text).with_context(|| format!("Failed to parse {}", path.display()))
}
