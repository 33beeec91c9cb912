use anyhow::Result;
use std::path::Path;

use super::aggregate::{Statistic, TopicStats};
use super::{area_name, UNCHARTED_AREAS};
use crate::chart::{parse_color, LineChart, Series};
use crate::universities::{DisplayTable, Roster};
use crate::PEERS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartVariant {
    /// Focal institution against the per-peer average.
    Group,
    Selected,
    All,
}

impl ChartVariant {
    pub const ALL: [ChartVariant; 3] = [ChartVariant::Group, ChartVariant::Selected, ChartVariant::All];

    pub fn key(self) -> &'static str {
        match self {
            ChartVariant::Group => "group",
            ChartVariant::Selected => "selected",
            ChartVariant::All => "all",
        }
    }
}

pub fn chart_file_name(area: &str, variant: ChartVariant, stat: Statistic) -> String {
    format!("{}-{}-{}.svg", area, variant.key(), stat.key())
}

fn axis_label(stats: &TopicStats, stat: Statistic) -> String {
    match stat {
        Statistic::MeanScore => "Mean Topic Score".to_string(),
        Statistic::NumAboveT1 => format!("Papers with score >= {}", stats.thresholds().low),
        Statistic::NumAboveT2 => format!("Papers with score >= {}", stats.thresholds().high),
    }
}

fn institution_series(
    stats: &TopicStats,
    display: &mut DisplayTable,
    area: &str,
    institution: &str,
    stat: Statistic,
    emphasis: bool,
) -> Result<Series> {
    Ok(Series {
        label: display.label(institution).to_string(),
        color: parse_color(&display.color(institution))?,
        points: stats
            .years()
            .map(|year| (year, stats.value(area, institution, year, stat)))
            .collect(),
        emphasis,
    })
}

pub fn build_chart(
    stats: &TopicStats,
    roster: &Roster,
    display: &mut DisplayTable,
    area: &str,
    stat: Statistic,
    variant: ChartVariant,
) -> Result<LineChart> {
    let mut chart = LineChart::new(axis_label(stats, stat), stats.years());
    chart.title = Some(area_name(area).to_string());
    chart.x_desc = Some("Year".to_string());

    match variant {
        ChartVariant::Group => {
            chart.series.push(institution_series(
                stats,
                display,
                area,
                &roster.focal,
                stat,
                true,
            )?);
            chart.series.push(Series {
                label: display.label(PEERS).to_string(),
                color: parse_color(&display.color(PEERS))?,
                points: stats
                    .years()
                    .map(|year| (year, stats.peer_average(area, year, stat)))
                    .collect(),
                emphasis: false,
            });
        }
        ChartVariant::Selected | ChartVariant::All => {
            let members = if variant == ChartVariant::Selected {
                &roster.selected
            } else {
                &roster.tracked
            };
            for institution in members {
                let emphasis = *institution == roster.focal;
                chart.series.push(institution_series(
                    stats,
                    display,
                    area,
                    institution,
                    stat,
                    emphasis,
                )?);
            }
        }
    }

    Ok(chart)
}

/// Renders every (area, statistic, variant) chart and returns how many
/// were written.
pub fn render_all(
    stats: &TopicStats,
    roster: &Roster,
    display: &mut DisplayTable,
    output: &Path,
) -> Result<usize> {
    let mut written = 0;
    for area in stats.areas() {
        if UNCHARTED_AREAS.contains(&area.as_str()) {
            continue;
        }
        for stat in Statistic::ALL {
            for variant in ChartVariant::ALL {
                let chart = build_chart(stats, roster, display, area, stat, variant)?;
                chart.render(&output.join(chart_file_name(area, variant, stat)))?;
                written += 1;
            }
        }
    }
    Ok(written)
}
