use anyhow::{Context, Result};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::ops::RangeInclusive;

use super::papers::PaperRecord;
use crate::universities::AffiliationNormalizer;
use crate::ratio;

// conference -> year -> paper ids
type YearBuckets = BTreeMap<String, BTreeMap<i32, Vec<usize>>>;

/// Papers bucketed by (institution, conference, year), plus an "all"
/// bucket per (conference, year) regardless of institution.
pub struct ConferenceIndex {
    years: RangeInclusive<i32>,
    papers: Vec<PaperRecord>,
    conferences: BTreeSet<String>,
    all: YearBuckets,
    by_place: BTreeMap<String, YearBuckets>,
    editions: BTreeMap<(String, i32), BTreeSet<String>>,
    raw_affiliations: HashSet<String>,
}

impl ConferenceIndex {
    pub fn new(years: RangeInclusive<i32>) -> Self {
        Self {
            years,
            papers: Vec::new(),
            conferences: BTreeSet::new(),
            all: BTreeMap::new(),
            by_place: BTreeMap::new(),
            editions: BTreeMap::new(),
            raw_affiliations: HashSet::new(),
        }
    }

    /// Adds one export's papers under `conference` and returns how many fell
    /// inside the year range. Papers outside the range are dropped before
    /// their citation count is read.
    ///
    /// A paper joins each institution bucket at most once, however many of
    /// its affiliations resolve to that institution.
    pub fn add_papers(
        &mut self,
        conference: &str,
        papers: Vec<PaperRecord>,
        normalizer: &AffiliationNormalizer,
    ) -> Result<usize> {
        self.conferences.insert(conference.to_string());

        let mut kept = 0;
        for mut paper in papers {
            if !self.years.contains(&paper.year) {
                continue;
            }
            paper.citations = paper
                .cited_by()
                .with_context(|| format!("{} paper {:?}", conference, paper.title()))?;
            let id = self.papers.len();
            let year = paper.year;

            self.editions
                .entry((conference.to_string(), year))
                .or_default()
                .insert(paper.conference_name().to_string());
            self.all
                .entry(conference.to_string())
                .or_default()
                .entry(year)
                .or_default()
                .push(id);

            let mut institutions = BTreeSet::new();
            for affiliation in paper.affiliations().split(';') {
                self.raw_affiliations.insert(affiliation.to_string());

                let Some(institution) = normalizer.normalize(affiliation) else {
                    continue;
                };
                let bucket = self
                    .by_place
                    .entry(institution.clone())
                    .or_default()
                    .entry(conference.to_string())
                    .or_default()
                    .entry(year)
                    .or_default();
                if !bucket.contains(&id) {
                    bucket.push(id);
                }
                institutions.insert(institution);
            }
            paper.institutions = institutions;

            self.papers.push(paper);
            kept += 1;
        }
        Ok(kept)
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.years.clone()
    }

    pub fn papers(&self) -> &[PaperRecord] {
        &self.papers
    }

    pub fn paper(&self, id: usize) -> Option<&PaperRecord> {
        self.papers.get(id)
    }

    pub fn conferences(&self) -> impl Iterator<Item = &str> {
        self.conferences.iter().map(String::as_str)
    }

    /// Canonical institutions seen in any affiliation.
    pub fn institutions(&self) -> impl Iterator<Item = &str> {
        self.by_place.keys().map(String::as_str)
    }

    pub fn raw_affiliation_count(&self) -> usize {
        self.raw_affiliations.len()
    }

    pub fn editions(&self, conference: &str, year: i32) -> Vec<String> {
        self.editions
            .get(&(conference.to_string(), year))
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn lookup<'a>(buckets: Option<&'a YearBuckets>, conference: &str, year: i32) -> &'a [usize] {
        buckets
            .and_then(|b| b.get(conference))
            .and_then(|years| years.get(&year))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn all_papers(&self, conference: &str, year: i32) -> &[usize] {
        Self::lookup(Some(&self.all), conference, year)
    }

    pub fn institution_papers(&self, institution: &str, conference: &str, year: i32) -> &[usize] {
        Self::lookup(self.by_place.get(institution), conference, year)
    }

    pub fn citations(&self, ids: &[usize]) -> u64 {
        ids.iter()
            .filter_map(|&id| self.paper(id))
            .map(|paper| paper.citations)
            .sum()
    }

    pub fn total_citations(&self, conference: &str, year: i32) -> u64 {
        self.citations(self.all_papers(conference, year))
    }

    pub fn institution_citations(&self, institution: &str, conference: &str, year: i32) -> u64 {
        self.citations(self.institution_papers(institution, conference, year))
    }

    /// Years with at least one paper at `conference`.
    pub fn active_years(&self, conference: &str) -> Vec<i32> {
        self.years()
            .filter(|&year| !self.all_papers(conference, year).is_empty())
            .collect()
    }

    /// Sum over conferences of the institution's share of that
    /// conference's papers; conferences without papers contribute 0.
    pub fn paper_fraction(&self, institution: &str, year: i32) -> f64 {
        self.conferences()
            .map(|conf| {
                ratio(
                    self.institution_papers(institution, conf, year).len() as f64,
                    self.all_papers(conf, year).len() as f64,
                )
            })
            .sum()
    }

    /// The institution's share of all citations across conferences.
    pub fn citation_fraction(&self, institution: &str, year: i32) -> f64 {
        let (own, total) = self.conferences().fold((0u64, 0u64), |(own, total), conf| {
            (
                own + self.institution_citations(institution, conf, year),
                total + self.total_citations(conf, year),
            )
        });
        ratio(own as f64, total as f64)
    }

    pub fn conference_citation_fraction(&self, institution: &str, conference: &str, year: i32) -> f64 {
        ratio(
            self.institution_citations(institution, conference, year) as f64,
            self.total_citations(conference, year) as f64,
        )
    }
}
