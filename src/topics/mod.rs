mod aggregate;
mod charts;

pub use aggregate::{
    Bucket, RowOutcome, Statistic, Thresholds, TopicAggregator, TopicRow, TopicStats,
};
pub use charts::{build_chart, chart_file_name, render_all, ChartVariant};

use anyhow::{bail, Context, Result};
use clap::Args;
use csv::ReaderBuilder;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::input::open_input;
use crate::universities::{AffiliationNormalizer, DisplayTable, Roster};

/// Topic-model score columns and their display names.
pub const AREAS: &[(&str, &str)] = &[
    ("neural networks", "Neural Networks"),
    ("artificial intelligence", "Artificial Intelligence"),
    ("quantitative methods", "Quantitative Methods"),
    ("applied work", "Applied Work"),
    ("machine learning", "Machine Learning"),
    ("natural language processing", "NLP"),
    ("data analysis", "Data Analysis"),
    ("data mining", "Data Mining"),
    ("bioinformatics", "Bioinformatics"),
    ("statistics", "Statistics"),
];

/// Aggregated and exported but never charted.
pub const UNCHARTED_AREAS: &[&str] = &["applied work", "quantitative methods", "data analysis"];

pub const REQUIRED_COLUMNS: &[&str] = &[
    "publication_date",
    "University",
    "cited_by_count",
    "Year",
    "Area",
];

pub fn area_name(area: &str) -> &str {
    AREAS
        .iter()
        .find(|(column, _)| *column == area)
        .map(|(_, name)| *name)
        .unwrap_or(area)
}

#[derive(Args)]
pub struct TopicsArgs {
    /// Scored publications CSV (optionally .gz)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory for charts and topic_stats.jsonl
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// First year counted
    #[arg(long, default_value = "1980")]
    pub start_year: i32,

    /// Last year counted
    #[arg(long, default_value = "2023")]
    pub end_year: i32,

    /// Score threshold for num_above_t1
    #[arg(long, default_value = "0.25")]
    pub low_threshold: f64,

    /// Score threshold for num_above_t2
    #[arg(long, default_value = "0.75")]
    pub high_threshold: f64,

    /// Rows discarded after the header row
    #[arg(long, default_value = "1")]
    pub skip_rows: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadSummary {
    pub rows: u64,
    pub counted: u64,
    pub ignored: u64,
    pub out_of_range: u64,
}

/// Streams a scored-publications CSV into `aggregator`.
pub fn aggregate_file<P: AsRef<Path>>(
    path: P,
    skip_rows: usize,
    aggregator: &mut TopicAggregator<'_>,
) -> Result<ReadSummary> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(open_input(path)?);

    let header: HashMap<String, usize> = reader
        .headers()
        .with_context(|| format!("Failed to read header of {}", path.display()))?
        .iter()
        .enumerate()
        .map(|(i, col)| (col.to_string(), i))
        .collect();

    let column = |name: &str| -> Result<usize> {
        match header.get(name) {
            Some(&i) => Ok(i),
            None => bail!("{} has no {:?} column", path.display(), name),
        }
    };
    for name in REQUIRED_COLUMNS {
        column(*name)?;
    }
    let univ_col = column("University")?;
    let year_col = column("Year")?;
    let area_cols = aggregator
        .areas()
        .iter()
        .map(|area| column(area.as_str()))
        .collect::<Result<Vec<_>>>()?;

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} rows")?,
    );

    let mut summary = ReadSummary::default();
    // Skipped rows are dropped along with any parse error; they need not
    // match the header.
    for (idx, result) in reader.into_records().enumerate().skip(skip_rows) {
        let record = result.with_context(|| format!("Failed to parse {}", path.display()))?;
        summary.rows += 1;
        progress.inc(1);

        let field = |i: usize| record.get(i).unwrap_or_default();
        let row = TopicRow {
            university: field(univ_col).trim(),
            year: field(year_col),
            scores: area_cols.iter().map(|&i| field(i)).collect(),
        };

        // +2: header line and 1-based numbering
        let outcome = aggregator
            .add_row(&row)
            .with_context(|| format!("{} line {}", path.display(), idx + 2))?;
        match outcome {
            RowOutcome::Counted => summary.counted += 1,
            RowOutcome::Ignored => summary.ignored += 1,
            RowOutcome::OutOfRange => summary.out_of_range += 1,
        }
    }
    progress.finish_and_clear();

    Ok(summary)
}

pub fn write_stats<P: AsRef<Path>>(stats: &TopicStats, path: P) -> Result<usize> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let records = stats.records();
    for record in &records {
        debug!(
            "{} {} {}: count = {}, mean score = {:.4}, t1 count = {}, t2 count = {}",
            record.area,
            record.year,
            record.institution,
            record.count,
            record.mean_score,
            record.num_above_t1,
            record.num_above_t2
        );
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(records.len())
}

pub fn run(args: TopicsArgs) -> Result<()> {
    crate::init_tracing();

    if args.start_year > args.end_year {
        bail!("Start year {} is after end year {}", args.start_year, args.end_year);
    }
    if !(0.0..=1.0).contains(&args.low_threshold)
        || !(0.0..=1.0).contains(&args.high_threshold)
        || args.low_threshold > args.high_threshold
    {
        bail!(
            "Thresholds must satisfy 0 <= low <= high <= 1 (got {}, {})",
            args.low_threshold,
            args.high_threshold
        );
    }

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    let normalizer = AffiliationNormalizer::default();
    let roster = Roster::default();
    let mut display = DisplayTable::default();

    let areas = AREAS.iter().map(|(column, _)| column.to_string()).collect();
    let mut aggregator = TopicAggregator::new(
        &normalizer,
        &roster,
        areas,
        args.start_year..=args.end_year,
        Thresholds {
            low: args.low_threshold,
            high: args.high_threshold,
        },
    );

    info!("Reading {}", args.input.display());
    let summary = aggregate_file(&args.input, args.skip_rows, &mut aggregator)?;
    info!(
        "Read {} rows: {} counted, {} ignored, {} outside {}-{}",
        summary.rows,
        summary.counted,
        summary.ignored,
        summary.out_of_range,
        args.start_year,
        args.end_year
    );

    let stats = aggregator.finish();
    let stats_path = args.output.join("topic_stats.jsonl");
    let buckets = write_stats(&stats, &stats_path)?;
    info!("Wrote {} buckets to {}", buckets, stats_path.display());

    let charts = render_all(&stats, &roster, &mut display, &args.output)?;
    info!("Wrote {} charts to {}", charts, args.output.display());

    Ok(())
}
