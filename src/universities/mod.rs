mod display;
pub mod tables;

pub use display::DisplayTable;

use anyhow::Result;
use clap::Args;
use std::collections::{HashMap, HashSet};
use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Args)]
pub struct NormalizeArgs {
    /// Affiliation strings to normalize (reads stdin lines when omitted)
    pub affiliations: Vec<String>,
}

/// Maps raw, often compound affiliation strings to canonical institution names.
pub struct AffiliationNormalizer {
    skip: HashSet<String>,
    synonyms: HashMap<String, String>,
}

impl AffiliationNormalizer {
    pub fn new<S, M>(skip: S, synonyms: M) -> Self
    where
        S: IntoIterator<Item = String>,
        M: IntoIterator<Item = (String, String)>,
    {
        Self {
            skip: skip.into_iter().collect(),
            synonyms: synonyms.into_iter().collect(),
        }
    }

    /// Picks the most useful institution name out of a comma-separated
    /// affiliation.
    ///
    /// The first clause mentioning "Univ" or "UC" wins; any later university
    /// clause is ignored. Without one, the result is the first surviving
    /// clause, or the last clause mentioning "Tech" or "Institute" if any.
    /// Returns `None` when no clause survives.
    pub fn normalize(&self, affiliation: &str) -> Option<String> {
        let mut university: Option<&str> = None;
        let mut fallback: Option<&str> = None;

        for clause in affiliation.split(',') {
            let clause = clause.trim();
            if clause.is_empty() {
                continue;
            }

            let name = self
                .synonyms
                .get(clause)
                .map(String::as_str)
                .unwrap_or(clause);

            if self.skip.contains(name) || name.starts_with("Department") || name.starts_with("Dept")
            {
                continue;
            }

            if fallback.is_none() {
                fallback = Some(name);
            }

            if name.contains("Univ") || name.contains("UC") {
                match university {
                    Some(existing) => {
                        debug!("Keeping {} over {} in: {}", existing, name, affiliation)
                    }
                    None => university = Some(name),
                }
            }

            if name.contains("Tech") || name.contains("Institute") {
                fallback = Some(name);
            }
        }

        university.or(fallback).map(String::from)
    }
}

impl Default for AffiliationNormalizer {
    fn default() -> Self {
        Self::new(
            tables::SKIP_AFFILIATIONS.iter().map(|s| s.to_string()),
            tables::SYNONYMS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }
}

/// The institutions a report tracks and how they group.
#[derive(Debug, Clone)]
pub struct Roster {
    pub focal: String,
    /// Every institution accepted by the topic pipeline, focal included.
    pub tracked: Vec<String>,
    pub peers: Vec<String>,
    pub selected: Vec<String>,
    /// Known institutions that are dropped without error.
    pub ignored: Vec<String>,
    pub conference_plot: Vec<String>,
}

impl Roster {
    pub fn uva() -> Self {
        let owned = |names: &[&str]| -> Vec<String> { names.iter().map(|s| s.to_string()).collect() };
        let tracked = owned(tables::TRACKED);
        let peers = tracked
            .iter()
            .filter(|u| u.as_str() != tables::FOCAL)
            .cloned()
            .collect();

        Self {
            focal: tables::FOCAL.to_string(),
            tracked,
            peers,
            selected: owned(tables::SELECTED),
            ignored: owned(tables::IGNORED),
            conference_plot: owned(tables::CONFERENCE_PLOT),
        }
    }

    pub fn is_tracked(&self, institution: &str) -> bool {
        self.tracked.iter().any(|u| u == institution)
    }

    pub fn is_peer(&self, institution: &str) -> bool {
        self.peers.iter().any(|u| u == institution)
    }

    pub fn is_ignored(&self, institution: &str) -> bool {
        self.ignored.iter().any(|u| u == institution)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::uva()
    }
}

pub fn run(args: NormalizeArgs) -> Result<()> {
    crate::init_tracing();

    let normalizer = AffiliationNormalizer::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut emit = |raw: &str| -> Result<()> {
        let canonical = normalizer.normalize(raw);
        writeln!(out, "{}\t{}", raw, canonical.as_deref().unwrap_or("-"))?;
        Ok(())
    };

    if args.affiliations.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            emit(&line)?;
        }
    } else {
        for raw in &args.affiliations {
            emit(raw)?;
        }
    }

    Ok(())
}
