//! Report data model.
//!
//! A [`Report`] is one row of calibration measurement data: the pixel
//! positions of up to eight fiducial markers plus four measured inter-marker
//! separations. Every field is optional; a `None` models a measurement the
//! report did not supply.

use crate::Real;
use serde::{Deserialize, Serialize};

/// One calibration report.
///
/// Corner coordinate fields follow the `{corner}{axis}` naming of the report
/// format (`llx` = lower-left x, `mty` = middle-top y, ...). The corner
/// prefixes map to marker identifiers via [`MarkerId`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Report {
    // Corner markers: lower-left, upper-right, upper-left, lower-right.
    pub llx: Option<Real>,
    pub lly: Option<Real>,
    pub urx: Option<Real>,
    pub ury: Option<Real>,
    pub ulx: Option<Real>,
    pub uly: Option<Real>,
    pub lrx: Option<Real>,
    pub lry: Option<Real>,
    // Edge-midpoint markers: middle-left, middle-right, middle-top, middle-bottom.
    pub mlx: Option<Real>,
    pub mly: Option<Real>,
    pub mrx: Option<Real>,
    pub mry: Option<Real>,
    pub mtx: Option<Real>,
    pub mty: Option<Real>,
    pub mbx: Option<Real>,
    pub mby: Option<Real>,
    /// Measured left-right separation (P5 - P6).
    pub lr_dist: Option<Real>,
    /// Measured top-bottom separation (P7 - P8).
    pub tb_dist: Option<Real>,
    /// Measured lower-left to upper-right diagonal (P1 - P2).
    pub llur_dist: Option<Real>,
    /// Measured upper-left to lower-right diagonal (P3 - P4).
    pub ullr_dist: Option<Real>,
}

impl Report {
    /// Get the (x, y) position fields for a marker. Either coordinate may be
    /// missing independently.
    pub fn marker_position(&self, marker: MarkerId) -> (Option<Real>, Option<Real>) {
        match marker {
            MarkerId::P1 => (self.llx, self.lly),
            MarkerId::P2 => (self.urx, self.ury),
            MarkerId::P3 => (self.ulx, self.uly),
            MarkerId::P4 => (self.lrx, self.lry),
            MarkerId::P5 => (self.mlx, self.mly),
            MarkerId::P6 => (self.mrx, self.mry),
            MarkerId::P7 => (self.mtx, self.mty),
            MarkerId::P8 => (self.mbx, self.mby),
        }
    }

    /// Get the measured separation for a marker pair.
    pub fn separation(&self, pair: SeparationPair) -> Option<Real> {
        match pair {
            SeparationPair::LeftRight => self.lr_dist,
            SeparationPair::TopBottom => self.tb_dist,
            SeparationPair::LowerLeftUpperRight => self.llur_dist,
            SeparationPair::UpperLeftLowerRight => self.ullr_dist,
        }
    }
}

/// Fiducial marker identifier.
///
/// Markers are numbered `P1`..`P8` in corner order
/// `ll, ur, ul, lr, ml, mr, mt, mb`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MarkerId {
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
    P7,
    P8,
}

impl MarkerId {
    /// All markers in ascending order.
    pub const ALL: [MarkerId; 8] = [
        MarkerId::P1,
        MarkerId::P2,
        MarkerId::P3,
        MarkerId::P4,
        MarkerId::P5,
        MarkerId::P6,
        MarkerId::P7,
        MarkerId::P8,
    ];
}

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MarkerId::P1 => "P1",
            MarkerId::P2 => "P2",
            MarkerId::P3 => "P3",
            MarkerId::P4 => "P4",
            MarkerId::P5 => "P5",
            MarkerId::P6 => "P6",
            MarkerId::P7 => "P7",
            MarkerId::P8 => "P8",
        };
        write!(f, "{name}")
    }
}

/// A measured separation between two fiducial markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeparationPair {
    /// `lr_dist`: middle-left to middle-right.
    LeftRight,
    /// `tb_dist`: middle-top to middle-bottom.
    TopBottom,
    /// `llur_dist`: lower-left to upper-right diagonal.
    LowerLeftUpperRight,
    /// `ullr_dist`: upper-left to lower-right diagonal.
    UpperLeftLowerRight,
}

impl SeparationPair {
    /// All pairs, in report-field order.
    pub const ALL: [SeparationPair; 4] = [
        SeparationPair::LeftRight,
        SeparationPair::TopBottom,
        SeparationPair::LowerLeftUpperRight,
        SeparationPair::UpperLeftLowerRight,
    ];

    /// Marker-pair label used in rendered tables.
    pub fn label(&self) -> &'static str {
        match self {
            SeparationPair::LeftRight => "P5 - P6",
            SeparationPair::TopBottom => "P7 - P8",
            SeparationPair::LowerLeftUpperRight => "P1 - P2",
            SeparationPair::UpperLeftLowerRight => "P3 - P4",
        }
    }
}

/// One marker position derived from a single report.
///
/// The angle is `atan2(y, x)` in radians and is present only when both
/// coordinates are; a missing coordinate propagates to a missing angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerObservation {
    /// Which marker this observation belongs to.
    pub marker: MarkerId,
    /// Marker x position, if the report supplied it.
    pub x: Option<Real>,
    /// Marker y position, if the report supplied it.
    pub y: Option<Real>,
    /// `atan2(y, x)` in radians, if both coordinates are present.
    pub angle: Option<Real>,
}

/// Pivot one report into its eight marker observations.
///
/// Always returns exactly eight observations in `P1`..`P8` order; callers
/// filter out the fully-missing ones. No validation is performed.
pub fn pivot_measures(report: &Report) -> Vec<MarkerObservation> {
    MarkerId::ALL
        .iter()
        .map(|&marker| {
            let (x, y) = report.marker_position(marker);
            let angle = match (x, y) {
                (Some(x), Some(y)) => Some(y.atan2(x)),
                _ => None,
            };
            MarkerObservation { marker, x, y, angle }
        })
        .collect()
}
