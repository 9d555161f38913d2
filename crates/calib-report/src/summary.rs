//! Aggregation of report tables into summary statistics.
//!
//! [`compute_statistics`] consumes a slice of [`Report`] rows and produces
//! per-pair marker separation statistics, per-marker location statistics, and
//! the contributing report counts. Statistics are computed over present
//! values only; a measurement that no report supplies is omitted from the
//! output entirely.

use crate::report::{pivot_measures, MarkerId, MarkerObservation, Report, SeparationPair};
use crate::stats::{circular_mean, mean, median, sample_std};
use crate::Real;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Separation statistics for one marker pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparationStat {
    /// Which marker pair this row describes.
    pub pair: SeparationPair,
    /// Formatted `mean ± std` over the reports that supplied this pair.
    pub mean: String,
    /// Formatted median over the reports that supplied this pair.
    pub median: String,
}

/// Location statistics for one fiducial marker.
///
/// Positions are reported in a local relative frame: x means are shifted so
/// the smallest marker mean is at zero, and y means are flipped so the
/// largest original mean maps to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerStat {
    /// Which marker this row describes.
    pub marker: MarkerId,
    /// Formatted recentered `x mean ± std`.
    pub x: String,
    /// Formatted flipped and recentered `y mean ± std`.
    pub y: String,
    /// Formatted circular mean angle in degrees, in `[0, 360)`.
    pub angle: String,
}

/// Summary statistics over a table of calibration reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// One row per marker pair with at least one measured separation.
    pub separations: Vec<SeparationStat>,
    /// One row per marker with at least one observation, or `None` when no
    /// report supplied any marker position.
    pub markers: Option<Vec<MarkerStat>>,
    /// Number of reports behind the separation statistics (the full input
    /// row count, not filtered per field).
    pub num_separation_reports: usize,
    /// Number of reports behind the marker statistics (median of per-marker
    /// observation counts, rounded); 0 when `markers` is `None`.
    pub num_marker_reports: usize,
}

/// Compute separation and marker-location statistics over a report table.
///
/// Pure function over its input: the same table always yields the same
/// summary. An empty table yields no separation rows, absent marker
/// statistics, and zero report counts.
pub fn compute_statistics(reports: &[Report]) -> ReportSummary {
    let num_separation_reports = reports.len();

    let mut separations = Vec::new();
    for pair in SeparationPair::ALL {
        let values: Vec<Real> = reports.iter().filter_map(|r| r.separation(pair)).collect();
        if values.is_empty() {
            continue;
        }
        separations.push(SeparationStat {
            pair,
            mean: format_mean_std(mean(&values), sample_std(&values)),
            median: format!("{:.3}", median(&values)),
        });
    }

    // Pivot every report and keep observations with at least one coordinate.
    let observations: Vec<MarkerObservation> = reports
        .iter()
        .flat_map(pivot_measures)
        .filter(|obs| obs.x.is_some() || obs.y.is_some())
        .collect();

    if observations.is_empty() {
        return ReportSummary {
            separations,
            markers: None,
            num_separation_reports,
            num_marker_reports: 0,
        };
    }

    let mut groups: BTreeMap<MarkerId, Vec<MarkerObservation>> = BTreeMap::new();
    for obs in observations {
        groups.entry(obs.marker).or_default().push(obs);
    }

    let x_counts: Vec<Real> = groups
        .values()
        .map(|g| g.iter().filter(|o| o.x.is_some()).count() as Real)
        .collect();
    let num_marker_reports = median(&x_counts).round() as usize;

    // Recenter x so the smallest marker mean sits at zero; flip y and
    // recenter so the largest original mean maps to zero. Markers whose
    // coordinate is entirely missing have a NaN mean and are skipped by the
    // extrema.
    let x_means: Vec<Real> = groups.values().map(|g| mean(&present_x(g))).collect();
    let y_means: Vec<Real> = groups.values().map(|g| mean(&present_y(g))).collect();
    let x_origin = finite_min(&x_means);
    let y_origin = finite_max(&y_means);

    let mut markers = Vec::with_capacity(groups.len());
    for (i, (&marker, group)) in groups.iter().enumerate() {
        let x_std = sample_std(&present_x(group));
        let y_std = sample_std(&present_y(group));
        let angle_deg = group_angle(group).to_degrees().rem_euclid(360.0);
        markers.push(MarkerStat {
            marker,
            x: format_mean_std(x_means[i] - x_origin, x_std),
            y: format_mean_std(y_origin - y_means[i], y_std),
            angle: format!("{angle_deg:.3}"),
        });
    }

    ReportSummary {
        separations,
        markers: Some(markers),
        num_separation_reports,
        num_marker_reports,
    }
}

fn format_mean_std(mean: Real, std: Real) -> String {
    format!("{mean:.3} ± {std:.3}")
}

fn present_x(group: &[MarkerObservation]) -> Vec<Real> {
    group.iter().filter_map(|o| o.x).collect()
}

fn present_y(group: &[MarkerObservation]) -> Vec<Real> {
    group.iter().filter_map(|o| o.y).collect()
}

/// Circular mean of a marker's observation angles. A missing angle (one
/// coordinate absent) propagates: the whole group aggregates to NaN.
fn group_angle(group: &[MarkerObservation]) -> Real {
    if group.iter().any(|o| o.angle.is_none()) {
        return Real::NAN;
    }
    let angles: Vec<Real> = group.iter().filter_map(|o| o.angle).collect();
    circular_mean(&angles)
}

fn finite_min(values: &[Real]) -> Real {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(Real::NAN, Real::min)
}

fn finite_max(values: &[Real]) -> Real {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(Real::NAN, Real::max)
}
