use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::universities::{AffiliationNormalizer, Roster};
use crate::{ratio, TopicBucketRecord, PEERS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub low: f64,
    pub high: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low: 0.25,
            high: 0.75,
        }
    }
}

/// Accumulated scores for one (area, institution, year).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bucket {
    pub count: u64,
    pub total_score: f64,
    pub num_above_t1: u64,
    pub num_above_t2: u64,
}

impl Bucket {
    fn add(&mut self, score: f64, thresholds: Thresholds) {
        self.count += 1;
        self.total_score += score;
        if score >= thresholds.low {
            self.num_above_t1 += 1;
        }
        if score >= thresholds.high {
            self.num_above_t2 += 1;
        }
    }

    /// Zero for an empty bucket.
    pub fn mean_score(&self) -> f64 {
        ratio(self.total_score, self.count as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    MeanScore,
    NumAboveT1,
    NumAboveT2,
}

impl Statistic {
    pub const ALL: [Statistic; 3] = [
        Statistic::MeanScore,
        Statistic::NumAboveT1,
        Statistic::NumAboveT2,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Statistic::MeanScore => "mean_score",
            Statistic::NumAboveT1 => "num_above_t1",
            Statistic::NumAboveT2 => "num_above_t2",
        }
    }

    pub fn of(self, bucket: &Bucket) -> f64 {
        match self {
            Statistic::MeanScore => bucket.mean_score(),
            Statistic::NumAboveT1 => bucket.num_above_t1 as f64,
            Statistic::NumAboveT2 => bucket.num_above_t2 as f64,
        }
    }
}

/// One CSV row, with `scores` aligned to the aggregator's areas.
#[derive(Debug, Clone)]
pub struct TopicRow<'r> {
    pub university: &'r str,
    pub year: &'r str,
    pub scores: Vec<&'r str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Counted,
    Ignored,
    OutOfRange,
}

// (area, institution, year)
type BucketKey = (String, String, i32);

pub struct TopicAggregator<'a> {
    normalizer: &'a AffiliationNormalizer,
    roster: &'a Roster,
    areas: Vec<String>,
    years: RangeInclusive<i32>,
    thresholds: Thresholds,
    buckets: BTreeMap<BucketKey, Bucket>,
}

impl<'a> TopicAggregator<'a> {
    pub fn new(
        normalizer: &'a AffiliationNormalizer,
        roster: &'a Roster,
        areas: Vec<String>,
        years: RangeInclusive<i32>,
        thresholds: Thresholds,
    ) -> Self {
        Self {
            normalizer,
            roster,
            areas,
            years,
            thresholds,
            buckets: BTreeMap::new(),
        }
    }

    pub fn areas(&self) -> &[String] {
        &self.areas
    }

    /// Adds one paper to its institution's buckets, and to the peers
    /// aggregate when the institution is a peer.
    ///
    /// Institutions outside the roster are an error unless listed as
    /// ignored. Scores must lie in [0, 1].
    pub fn add_row(&mut self, row: &TopicRow<'_>) -> Result<RowOutcome> {
        let institution = match self.normalizer.normalize(row.university) {
            Some(name) if self.roster.is_tracked(&name) => name,
            Some(name) if self.roster.is_ignored(&name) => return Ok(RowOutcome::Ignored),
            Some(name) => bail!("Unknown institution: {} (from {:?})", name, row.university),
            None => bail!("No institution in affiliation {:?}", row.university),
        };

        let year: i32 = row
            .year
            .trim()
            .parse()
            .with_context(|| format!("Invalid year {:?}", row.year))?;
        if !self.years.contains(&year) {
            return Ok(RowOutcome::OutOfRange);
        }

        if row.scores.len() != self.areas.len() {
            bail!(
                "Expected {} topic scores, found {}",
                self.areas.len(),
                row.scores.len()
            );
        }

        let mut scores = Vec::with_capacity(row.scores.len());
        for (area, raw) in self.areas.iter().zip(&row.scores) {
            let score: f64 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid {} score {:?}", area, raw))?;
            if !(0.0..=1.0).contains(&score) {
                bail!("{} score {} for {} is outside [0, 1]", area, score, institution);
            }
            scores.push(score);
        }

        let peer = self.roster.is_peer(&institution);
        for (area, score) in self.areas.iter().zip(scores) {
            self.buckets
                .entry((area.clone(), institution.clone(), year))
                .or_default()
                .add(score, self.thresholds);
            if peer {
                self.buckets
                    .entry((area.clone(), PEERS.to_string(), year))
                    .or_default()
                    .add(score, self.thresholds);
            }
        }

        Ok(RowOutcome::Counted)
    }

    pub fn finish(self) -> TopicStats {
        TopicStats {
            areas: self.areas,
            tracked: self.roster.tracked.clone(),
            peers: self.roster.peers.clone(),
            years: self.years,
            thresholds: self.thresholds,
            buckets: self.buckets,
        }
    }
}

/// Final per-bucket figures, with every unseen bucket reading as zero.
pub struct TopicStats {
    areas: Vec<String>,
    tracked: Vec<String>,
    peers: Vec<String>,
    years: RangeInclusive<i32>,
    thresholds: Thresholds,
    buckets: BTreeMap<BucketKey, Bucket>,
}

impl TopicStats {
    pub fn areas(&self) -> &[String] {
        &self.areas
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.years.clone()
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Tracked institutions followed by the peers aggregate.
    pub fn institutions(&self) -> impl Iterator<Item = &str> {
        self.tracked
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(PEERS))
    }

    pub fn bucket(&self, area: &str, institution: &str, year: i32) -> Bucket {
        self.buckets
            .get(&(area.to_string(), institution.to_string(), year))
            .copied()
            .unwrap_or_default()
    }

    pub fn value(&self, area: &str, institution: &str, year: i32, stat: Statistic) -> f64 {
        stat.of(&self.bucket(area, institution, year))
    }

    /// Per-peer figure for the focal-vs-peers comparison: counts are the
    /// peers aggregate divided by the number of peers, mean score is the
    /// average of the members' means.
    pub fn peer_average(&self, area: &str, year: i32, stat: Statistic) -> f64 {
        let n = self.peers.len() as f64;
        match stat {
            Statistic::MeanScore => {
                let sum: f64 = self
                    .peers
                    .iter()
                    .map(|peer| self.bucket(area, peer, year).mean_score())
                    .sum();
                ratio(sum, n)
            }
            _ => ratio(self.value(area, PEERS, year, stat), n),
        }
    }

    pub fn records(&self) -> Vec<TopicBucketRecord> {
        let mut records = Vec::new();
        for area in &self.areas {
            for institution in self.institutions() {
                for year in self.years() {
                    let bucket = self.bucket(area, institution, year);
                    records.push(TopicBucketRecord {
                        area: area.clone(),
                        institution: institution.to_string(),
                        year,
                        count: bucket.count,
                        total_score: bucket.total_score,
                        mean_score: bucket.mean_score(),
                        num_above_t1: bucket.num_above_t1,
                        num_above_t2: bucket.num_above_t2,
                    });
                }
            }
        }
        records
    }
}
