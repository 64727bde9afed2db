use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{CatalogConfig, CatalogReader, ColumnLayout};
use crate::error::Result;
use crate::select::BrightestSet;
use crate::star::Star;

/// Rectangular field of view centered on a target coordinate.
///
/// The containment test is an inclusive half-width comparison on raw
/// angle values. There is no RA wraparound at the 0/360 seam and no
/// correction near the poles; a window straddling either gives the
/// literal rectangular answer.
#[derive(Clone, Copy, Debug)]
pub struct Window {
    pub center_ra: f64,
    pub center_dec: f64,
    pub fov_ra: f64,
    pub fov_dec: f64,
}

impl Window {
    pub fn contains(&self, ra: f64, dec: f64) -> bool {
        (ra - self.center_ra).abs() <= self.fov_ra / 2.0
            && (dec - self.center_dec).abs() <= self.fov_dec / 2.0
    }
}

/// How the final short-list distance is computed. `Planar` reproduces
/// the historical behavior and stays the default; `Spherical` is the
/// opt-in great-circle variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceMetric {
    #[default]
    Planar,
    Spherical,
}

impl DistanceMetric {
    pub fn distance(&self, ra1: f64, dec1: f64, ra2: f64, dec2: f64) -> f64 {
        match self {
            Self::Planar => planar_distance(ra1, dec1, ra2, dec2),
            Self::Spherical => angular_separation(ra1, dec1, ra2, dec2),
        }
    }
}

impl std::fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Planar => write!(f, "planar"),
            Self::Spherical => write!(f, "spherical"),
        }
    }
}

/// Planar Euclidean distance over raw angle values, in degrees.
pub fn planar_distance(ra1: f64, dec1: f64, ra2: f64, dec2: f64) -> f64 {
    ((ra1 - ra2).powi(2) + (dec1 - dec2).powi(2)).sqrt()
}

/// Great-circle separation in degrees (haversine form).
pub fn angular_separation(ra1: f64, dec1: f64, ra2: f64, dec2: f64) -> f64 {
    let (l1, b1) = (ra1.to_radians(), dec1.to_radians());
    let (l2, b2) = (ra2.to_radians(), dec2.to_radians());
    let h = ((b2 - b1) / 2.0).sin().powi(2)
        + b1.cos() * b2.cos() * ((l2 - l1) / 2.0).sin().powi(2);
    (2.0 * h.sqrt().min(1.0).asin()).to_degrees()
}

/// One short-list query: where to look, how wide, how many to keep.
#[derive(Clone, Copy, Debug)]
pub struct Query {
    pub center_ra: f64,
    pub center_dec: f64,
    pub fov_ra: f64,
    pub fov_dec: f64,
    pub count: usize,
    pub metric: DistanceMetric,
}

impl Query {
    pub fn window(&self) -> Window {
        Window {
            center_ra: self.center_ra,
            center_dec: self.center_dec,
            fov_ra: self.fov_ra,
            fov_dec: self.fov_dec,
        }
    }
}

/// Per-scan counters, reported to the operator at the end of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_seen: u64,
    pub parse_failures: u64,
    pub outside_window: u64,
    pub accepted: u64,
}

#[derive(Clone, Debug)]
pub struct QueryResult {
    /// Surviving stars, ascending by distance from the query center.
    /// Equal distances keep selector order (brightest first).
    pub stars: Vec<Star>,
    pub stats: ScanStats,
}

/// Stream data lines, select the brightest in-window stars, then order
/// the survivors by distance from the query center.
///
/// Parse failures and out-of-window rows are counted and skipped; only
/// I/O errors mid-stream and an invalid `count` abort the query. An
/// empty result is a normal value, not an error.
pub fn run_query<I>(lines: I, layout: &ColumnLayout, query: &Query) -> Result<QueryResult>
where
    I: IntoIterator<Item = std::io::Result<String>>,
{
    let mut selected = BrightestSet::new(query.count)?;
    let window = query.window();
    let mut stats = ScanStats::default();

    for line in lines {
        let line = line?;
        stats.lines_seen += 1;

        let star = match Star::parse(&line, layout) {
            Ok(star) => star,
            Err(err) => {
                debug!(%err, %line, "skipping unparseable row");
                stats.parse_failures += 1;
                continue;
            }
        };
        if !window.contains(star.ra, star.dec) {
            stats.outside_window += 1;
            continue;
        }
        stats.accepted += 1;
        selected.offer(star);
    }

    let held = selected.len();
    let mut stars = selected.into_stars();
    for star in &mut stars {
        star.distance = Some(query.metric.distance(
            star.ra,
            star.dec,
            query.center_ra,
            query.center_dec,
        ));
    }
    // Stable sort, so equal distances keep the brightness-descending
    // selector order and re-runs stay byte-identical.
    stars.sort_by(|a, b| {
        a.distance
            .unwrap_or(f64::INFINITY)
            .total_cmp(&b.distance.unwrap_or(f64::INFINITY))
    });

    info!(
        lines = stats.lines_seen,
        parse_failures = stats.parse_failures,
        outside_window = stats.outside_window,
        accepted = stats.accepted,
        held,
        "catalog scan complete"
    );

    Ok(QueryResult { stars, stats })
}

/// Open a catalog file and run one query against it.
pub fn filter_stars(path: &Path, config: &CatalogConfig, query: &Query) -> Result<QueryResult> {
    let reader = CatalogReader::open(path, config)?;
    run_query(reader, &config.layout, query)
}
