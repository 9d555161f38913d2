//! Summary statistics for fiducial-marker calibration reports.
//!
//! This crate contains:
//! - the report data model ([`Report`], [`MarkerId`], [`SeparationPair`]),
//! - scalar statistics helpers (`mean`, `sample_std`, `median`, `circular_mean`),
//! - the aggregation step ([`compute_statistics`]) producing per-pair marker
//!   separation and per-marker location statistics,
//! - markdown grid-table rendering ([`render_summary`], [`nice_table`]).
//!
//! A report carries up to eight fiducial marker positions (`P1`..`P8`) and
//! four measured inter-marker separations. Any measurement may be missing;
//! statistics are computed over the values that are present.

/// Markdown grid-table rendering.
pub mod render;
/// Report data model and the per-report pivot.
pub mod report;
/// Scalar statistics helpers.
pub mod stats;
/// Aggregation of report tables into summary statistics.
pub mod summary;

pub use render::{nice_table, render_summary};
pub use report::{pivot_measures, MarkerId, MarkerObservation, Report, SeparationPair};
pub use summary::{compute_statistics, MarkerStat, ReportSummary, SeparationStat};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;
