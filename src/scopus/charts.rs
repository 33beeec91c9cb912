use anyhow::Result;
use std::cmp::Reverse;
use std::path::Path;

use super::index::ConferenceIndex;
use crate::chart::{parse_color, LineChart, Series};
use crate::ratio;
use crate::universities::{DisplayTable, Roster};

/// First year included in the mean-citation chart, per conference. Early
/// ICLR editions hold a handful of papers with tens of thousands of
/// citations each.
pub const MEAN_CITATION_START: &[(&str, i32)] = &[("ICLR", 2016)];

/// File stems of the cross-conference charts. Per-conference charts are
/// named after the conference and must not collide with these.
pub const FIXED_CHARTS: &[&str] = &[
    "confcitings-mean",
    "confcitings-total",
    "conftotals",
    "allconfs",
    "fraccitings",
];

const WIDE: (u32, u32) = (1500, 600);

fn mean_citation_start(conference: &str) -> Option<i32> {
    MEAN_CITATION_START
        .iter()
        .find(|(conf, _)| *conf == conference)
        .map(|&(_, year)| year)
}

fn series(
    display: &mut DisplayTable,
    name: &str,
    points: Vec<(i32, f64)>,
    emphasis: bool,
) -> Result<Series> {
    Ok(Series {
        label: display.label(name).to_string(),
        color: parse_color(&display.color(name))?,
        points,
        emphasis,
    })
}

/// Roster conference-plot institutions, most papers in the last year first.
pub fn plot_order(index: &ConferenceIndex, roster: &Roster) -> Vec<String> {
    let last = *index.years().end();
    let mut order = roster.conference_plot.clone();
    order.sort_by_key(|univ| {
        Reverse(
            index
                .conferences()
                .map(|conf| index.institution_papers(univ, conf, last).len())
                .sum::<usize>(),
        )
    });
    order
}

/// Total or mean citations per paper for each conference.
pub fn conference_citations(
    index: &ConferenceIndex,
    display: &mut DisplayTable,
    mean: bool,
) -> Result<LineChart> {
    let last = *index.years().end();
    let mut conferences: Vec<&str> = index.conferences().collect();
    conferences.sort_by_key(|conf| Reverse(index.total_citations(conf, last)));

    let y_desc = if mean {
        "Mean Citings per Paper"
    } else {
        "Total Citings"
    };
    let mut chart = LineChart::new(y_desc, index.years());

    for conf in conferences {
        let start = if mean { mean_citation_start(conf) } else { None };
        let points = index
            .active_years(conf)
            .into_iter()
            .filter(|&year| start.map_or(true, |start| year >= start))
            .map(|year| {
                let citations = index.total_citations(conf, year) as f64;
                let value = if mean {
                    ratio(citations, index.all_papers(conf, year).len() as f64)
                } else {
                    citations
                };
                (year, value)
            })
            .collect();
        chart.series.push(series(display, conf, points, true)?);
    }

    Ok(chart)
}

/// Papers per conference, sorted by the second-to-last year.
pub fn conference_totals(index: &ConferenceIndex, display: &mut DisplayTable) -> Result<LineChart> {
    let sort_year = *index.years().end() - 1;
    let mut conferences: Vec<&str> = index.conferences().collect();
    conferences.sort_by_key(|conf| Reverse(index.all_papers(conf, sort_year).len()));

    let mut chart = LineChart::new("Number of Papers", index.years());
    for conf in conferences {
        let points = index
            .active_years(conf)
            .into_iter()
            .map(|year| (year, index.all_papers(conf, year).len() as f64))
            .collect();
        chart.series.push(series(display, conf, points, true)?);
    }

    Ok(chart)
}

pub fn institution_paper_fractions(
    index: &ConferenceIndex,
    roster: &Roster,
    display: &mut DisplayTable,
) -> Result<LineChart> {
    let mut chart = LineChart::new("Fraction of Papers", index.years());
    chart.size = WIDE;

    for univ in plot_order(index, roster) {
        let points = index
            .years()
            .map(|year| (year, index.paper_fraction(&univ, year)))
            .collect();
        let emphasis = univ == roster.focal;
        chart.series.push(series(display, &univ, points, emphasis)?);
    }

    Ok(chart)
}

pub fn institution_citation_fractions(
    index: &ConferenceIndex,
    roster: &Roster,
    display: &mut DisplayTable,
) -> Result<LineChart> {
    let mut chart = LineChart::new("Fraction of Citings", index.years());
    chart.size = WIDE;

    for univ in plot_order(index, roster) {
        let points = index
            .years()
            .map(|year| (year, index.citation_fraction(&univ, year)))
            .collect();
        let emphasis = univ == roster.focal;
        chart.series.push(series(display, &univ, points, emphasis)?);
    }

    Ok(chart)
}

pub fn conference_papers_by_institution(
    index: &ConferenceIndex,
    roster: &Roster,
    display: &mut DisplayTable,
    conference: &str,
) -> Result<LineChart> {
    let mut chart = LineChart::new("Number of Papers", index.years());
    chart.title = Some(format!("{} Total Papers by University", conference));
    chart.x_desc = Some("Year".to_string());

    let years = index.active_years(conference);
    for univ in plot_order(index, roster) {
        let points = years
            .iter()
            .map(|&year| {
                let papers = index.institution_papers(&univ, conference, year).len();
                (year, papers as f64)
            })
            .collect();
        let emphasis = univ == roster.focal;
        chart.series.push(series(display, &univ, points, emphasis)?);
    }

    Ok(chart)
}

pub fn conference_citations_by_institution(
    index: &ConferenceIndex,
    roster: &Roster,
    display: &mut DisplayTable,
    conference: &str,
) -> Result<LineChart> {
    let mut chart = LineChart::new("Fraction of Citings", index.years());
    chart.title = Some(format!("{} Citings by University", conference));
    chart.x_desc = Some("Year".to_string());

    let years = index.active_years(conference);
    for univ in plot_order(index, roster) {
        let points = years
            .iter()
            .map(|&year| (year, index.conference_citation_fraction(&univ, conference, year)))
            .collect();
        let emphasis = univ == roster.focal;
        chart.series.push(series(display, &univ, points, emphasis)?);
    }

    Ok(chart)
}

/// Renders every conference chart and returns how many were written.
pub fn render_all(
    index: &ConferenceIndex,
    roster: &Roster,
    display: &mut DisplayTable,
    output: &Path,
) -> Result<usize> {
    let fixed = [
        conference_citations(index, display, true)?,
        conference_citations(index, display, false)?,
        conference_totals(index, display)?,
        institution_paper_fractions(index, roster, display)?,
        institution_citation_fractions(index, roster, display)?,
    ];
    let mut charts: Vec<(String, LineChart)> = FIXED_CHARTS
        .iter()
        .map(|name| name.to_string())
        .zip(fixed)
        .collect();
    for conf in index.conferences() {
        charts.push((
            conf.to_string(),
            conference_papers_by_institution(index, roster, display, conf)?,
        ));
        charts.push((
            format!("{}-citings", conf),
            conference_citations_by_institution(index, roster, display, conf)?,
        ));
    }

    for (name, chart) in &charts {
        chart.render(&output.join(format!("{}.svg", name)))?;
    }
    Ok(charts.len())
}
