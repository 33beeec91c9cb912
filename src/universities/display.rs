use std::collections::HashMap;
use tracing::warn;

use super::tables;
use crate::fallback_color;

/// Short labels and chart colors for canonical institution names.
pub struct DisplayTable {
    labels: HashMap<String, String>,
    colors: HashMap<String, String>,
    assigned: HashMap<String, String>,
}

impl DisplayTable {
    pub fn new<L, C>(labels: L, colors: C) -> Self
    where
        L: IntoIterator<Item = (String, String)>,
        C: IntoIterator<Item = (String, String)>,
    {
        Self {
            labels: labels.into_iter().collect(),
            colors: colors.into_iter().collect(),
            assigned: HashMap::new(),
        }
    }

    pub fn label<'a>(&'a self, name: &'a str) -> &'a str {
        self.labels.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Names missing from the table get a hash-derived color, reported once.
    pub fn color(&mut self, name: &str) -> String {
        if let Some(color) = self.colors.get(name) {
            return color.clone();
        }
        self.assigned
            .entry(name.to_string())
            .or_insert_with(|| {
                let color = fallback_color(name);
                warn!("Selecting color {} for unlisted name: {}", color, name);
                color
            })
            .clone()
    }
}

impl Default for DisplayTable {
    fn default() -> Self {
        let owned = |pairs: &[(&str, &str)]| -> Vec<(String, String)> {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        };
        Self::new(owned(tables::LABELS), owned(tables::COLORS))
    }
}
