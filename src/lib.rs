use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

pub mod chart;
pub mod input;
pub mod scopus;
pub mod topics;
pub mod universities;

/// Synthetic institution key for the peer-group aggregate.
pub const PEERS: &str = "peers";

/// Divides `num` by `den`, yielding 0.0 for an empty denominator.
pub fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

/// Stable `#rrggbb` color for a name absent from the display table.
pub fn fallback_color(name: &str) -> String {
    format!("#{:06x}", xxh3_64(name.as_bytes()) & 0x00ff_ffff)
}

pub(crate) fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pubtrends=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicBucketRecord {
    pub area: String,
    pub institution: String,
    pub year: i32,
    pub count: u64,
    pub total_score: f64,
    pub mean_score: f64,
    pub num_above_t1: u64,
    pub num_above_t2: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConferenceYearRecord {
    pub conference: String,
    pub year: i32,
    pub editions: Vec<String>,
    pub papers: usize,
    pub citations: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionYearRecord {
    pub institution: String,
    pub conference: String,
    pub year: i32,
    pub papers: usize,
    pub citations: u64,
}
