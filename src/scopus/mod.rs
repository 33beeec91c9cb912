mod charts;
mod index;
mod papers;

pub use charts::{
    conference_citations, conference_citations_by_institution, conference_papers_by_institution,
    conference_totals, institution_citation_fractions, institution_paper_fractions, plot_order,
    render_all, FIXED_CHARTS, MEAN_CITATION_START,
};
pub use index::ConferenceIndex;
pub use papers::{parse_papers, read_papers, PaperRecord};

use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

use crate::input::expand_pattern;
use crate::universities::{AffiliationNormalizer, DisplayTable, Roster};
use crate::{ConferenceYearRecord, InstitutionYearRecord};

/// A conference name and the export file(s) holding its papers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConferenceInput {
    pub conference: String,
    pub pattern: String,
}

impl FromStr for ConferenceInput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((conference, pattern)) if !conference.trim().is_empty() && !pattern.is_empty() => {
                let conference = conference.trim();
                check_conference_name(conference).map_err(|e| e.to_string())?;
                Ok(Self {
                    conference: conference.to_string(),
                    pattern: pattern.to_string(),
                })
            }
            _ => Err(format!("expected NAME=PATTERN, got {:?}", s)),
        }
    }
}

/// Conference names become chart file stems inside the output directory.
pub fn check_conference_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        bail!("Conference name {:?} is not a valid file name", name);
    }
    if FIXED_CHARTS.contains(&name) {
        bail!("Conference name {:?} clashes with a chart of the same name", name);
    }
    Ok(())
}

#[derive(Args)]
pub struct ConferencesArgs {
    /// Conference export as NAME=PATTERN; PATTERN may be a glob and the
    /// flag may repeat, including for the same conference
    #[arg(short, long = "input", required = true)]
    pub inputs: Vec<ConferenceInput>,

    /// Directory for charts and summaries
    #[arg(short, long, default_value = "scopusoutput")]
    pub output: PathBuf,

    /// First year counted
    #[arg(long, default_value = "2012")]
    pub start_year: i32,

    /// Last year counted
    #[arg(long, default_value = "2022")]
    pub end_year: i32,
}

pub fn load_index(
    inputs: &[ConferenceInput],
    years: RangeInclusive<i32>,
    normalizer: &AffiliationNormalizer,
) -> Result<ConferenceIndex> {
    let mut index = ConferenceIndex::new(years);

    for input in inputs {
        check_conference_name(&input.conference)?;
        for path in expand_pattern(&input.pattern)? {
            let papers = read_papers(&path)?;
            let read = papers.len();
            let kept = index
                .add_papers(&input.conference, papers, normalizer)
                .with_context(|| format!("Failed to index {}", path.display()))?;
            info!(
                "Read {} papers from {} ({} in range) for {}",
                read,
                path.display(),
                kept,
                input.conference
            );
        }
    }

    Ok(index)
}

fn write_jsonl<T: serde::Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn conference_records(index: &ConferenceIndex) -> Vec<ConferenceYearRecord> {
    let mut records = Vec::new();
    for conference in index.conferences() {
        for year in index.years() {
            records.push(ConferenceYearRecord {
                conference: conference.to_string(),
                year,
                editions: index.editions(conference, year),
                papers: index.all_papers(conference, year).len(),
                citations: index.total_citations(conference, year),
            });
        }
    }
    records
}

/// One record per non-empty (institution, conference, year) bucket.
pub fn institution_records(index: &ConferenceIndex) -> Vec<InstitutionYearRecord> {
    let mut records = Vec::new();
    for institution in index.institutions() {
        for conference in index.conferences() {
            for year in index.years() {
                let papers = index.institution_papers(institution, conference, year);
                if papers.is_empty() {
                    continue;
                }
                records.push(InstitutionYearRecord {
                    institution: institution.to_string(),
                    conference: conference.to_string(),
                    year,
                    papers: papers.len(),
                    citations: index.citations(papers),
                });
            }
        }
    }
    records
}

pub fn write_summaries(index: &ConferenceIndex, output: &Path) -> Result<()> {
    write_jsonl(
        &output.join("conference_summary.jsonl"),
        &conference_records(index),
    )?;
    write_jsonl(
        &output.join("institution_papers.jsonl"),
        &institution_records(index),
    )
}

pub fn run(args: ConferencesArgs) -> Result<()> {
    crate::init_tracing();

    if args.start_year > args.end_year {
        bail!("Start year {} is after end year {}", args.start_year, args.end_year);
    }

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    let normalizer = AffiliationNormalizer::default();
    let roster = Roster::default();
    let mut display = DisplayTable::default();

    let index = load_index(&args.inputs, args.start_year..=args.end_year, &normalizer)?;
    info!(
        "Papers: {}, Affiliations: {}, Cleaned: {}",
        index.papers().len(),
        index.raw_affiliation_count(),
        index.institutions().count()
    );

    write_summaries(&index, &args.output)?;

    let charts = render_all(&index, &roster, &mut display, &args.output)?;
    info!("Wrote {} charts to {}", charts, args.output.display());

    Ok(())
}
