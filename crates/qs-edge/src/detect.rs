use log::debug;

use crate::Error;
use crate::peaks::{Maximum, find_maxima, select_strongest};
use crate::refine::{find_lowest_point, find_zero_point};
use crate::smooth::{average, deltas};

/// Number of dark-to-bright transitions expected along one axis.
pub const TRANSITION_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeConfig {
    /// Raw samples folded into one averaged sample.
    pub block_size: usize,
    /// Width, in raw samples, of the backward darkest-pixel search.
    pub search_limit: usize,
    /// Pixel offset applied to the refined transitions to place boundaries.
    pub margin: isize,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            block_size: 3,
            search_limit: 10,
            margin: 5,
        }
    }
}

impl EdgeConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.block_size == 0 {
            return Err(Error::InvalidBlockSize);
        }
        Ok(())
    }
}

/// One refined transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Peak in the delta sequence.
    pub peak: Maximum,
    /// Start of the rising block containing the peak, in averaged samples.
    pub block_start: usize,
    /// `block_start` mapped back to raw samples.
    pub anchor: usize,
    /// Darkest raw sample found at or before `anchor`.
    pub lowest: usize,
}

/// Boundaries found along one axis, ordered by position.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisEdges {
    /// `[outer start, inner end, inner start, outer end]`: the first and last
    /// close the outer transitions, the middle pair brackets the central one.
    pub edges: [isize; 4],
    pub transitions: [Transition; TRANSITION_COUNT],
}

/// Locates four boundaries in a profile with three dominant transitions.
pub fn detect_edges(points: &[f32], cfg: &EdgeConfig) -> Result<AxisEdges, Error> {
    cfg.validate()?;

    let avg = average(points, cfg.block_size)?;
    let d = deltas(&avg);
    let maxima = find_maxima(&d);
    debug!(
        "profile of {} samples: {} averaged, {} candidate peaks",
        points.len(),
        avg.len(),
        maxima.len()
    );

    // Exactly TRANSITION_COUNT peaks, ordered by index.
    let strongest = select_strongest(maxima, TRANSITION_COUNT)?;
    let left = refine_transition(points, &d, strongest[0], cfg)?;
    let center = refine_transition(points, &d, strongest[1], cfg)?;
    let right = refine_transition(points, &d, strongest[2], cfg)?;

    let m = cfg.margin;
    let edges = [
        shifted(left.lowest, m, isize::checked_add)?,
        shifted(center.lowest, m, isize::checked_sub)?,
        shifted(center.lowest, m, isize::checked_add)?,
        shifted(right.lowest, m, isize::checked_sub)?,
    ];
    debug!("edges {edges:?}");

    Ok(AxisEdges {
        edges,
        transitions: [left, center, right],
    })
}

fn shifted(
    lowest: usize,
    margin: isize,
    op: fn(isize, isize) -> Option<isize>,
) -> Result<isize, Error> {
    isize::try_from(lowest)
        .ok()
        .and_then(|base| op(base, margin))
        .ok_or(Error::BoundaryOverflow { lowest, margin })
}

fn refine_transition(
    points: &[f32],
    deltas: &[f32],
    peak: Maximum,
    cfg: &EdgeConfig,
) -> Result<Transition, Error> {
    let block_start = find_zero_point(deltas, peak.index)?;
    let anchor = block_start * cfg.block_size;
    let lowest = find_lowest_point(points, anchor, cfg.search_limit)?;
    debug!(
        "peak {} ({:.1}) -> block {block_start}, anchor {anchor}, lowest {lowest}",
        peak.index, peak.value
    );

    Ok(Transition {
        peak,
        block_start,
        anchor,
        lowest,
    })
}

#[cfg(test)]
mod tests {
    use super::{EdgeConfig, detect_edges};
    use crate::Error;

    const BACKGROUND: f32 = 200.0;
    const DIP: f32 = 50.0;

    /// Flat background with a 9-pixel dark band centered on each position.
    fn dips_profile(len: usize, centers: &[usize]) -> Vec<f32> {
        let mut out = vec![BACKGROUND; len];
        for &c in centers {
            for v in &mut out[c - 4..=c + 4] {
                *v = DIP;
            }
        }
        out
    }

    #[test]
    fn three_dips_yield_bracketing_edges() {
        let centers = [60usize, 150, 240];
        let profile = dips_profile(300, &centers);
        let cfg = EdgeConfig::default();

        let found = detect_edges(&profile, &cfg).expect("three transitions");
        assert_eq!(found.edges, [62, 142, 152, 232]);

        let peaks: Vec<usize> = found.transitions.iter().map(|t| t.peak.index).collect();
        assert_eq!(peaks, vec![21, 51, 81]);
        let anchors: Vec<usize> = found.transitions.iter().map(|t| t.anchor).collect();
        assert_eq!(anchors, vec![57, 147, 237]);

        let m = cfg.margin;
        let [e1, e2, e3, e4] = found.edges;
        assert!((e1 - m - centers[0] as isize).abs() <= m);
        assert!(((e2 + e3) / 2 - centers[1] as isize).abs() <= m);
        assert!((e4 + m - centers[2] as isize).abs() <= m);
    }

    #[test]
    fn snaps_to_darkest_raw_pixel_in_window() {
        let mut profile = dips_profile(300, &[60, 150, 240]);
        profile[55] = 20.0;

        let found = detect_edges(&profile, &EdgeConfig::default()).expect("three transitions");
        assert_eq!(found.transitions[0].anchor, 57);
        assert_eq!(found.transitions[0].lowest, 55);
        assert_eq!(found.edges[0], 60);
    }

    #[test]
    fn weakest_transitions_are_dropped() {
        let mut profile = dips_profile(300, &[30, 100, 170, 240]);
        // Shallow second dip: its rising delta is the smallest.
        for v in &mut profile[96..=104] {
            *v = 180.0;
        }

        let found = detect_edges(&profile, &EdgeConfig::default()).expect("three transitions");
        let anchors: Vec<usize> = found.transitions.iter().map(|t| t.anchor).collect();
        assert_eq!(anchors, vec![27, 168, 237]);
    }

    #[test]
    fn detection_is_repeatable() {
        let profile = dips_profile(300, &[60, 150, 240]);
        let cfg = EdgeConfig::default();
        let a = detect_edges(&profile, &cfg).expect("three transitions");
        let b = detect_edges(&profile, &cfg).expect("three transitions");
        assert_eq!(a, b);
    }

    #[test]
    fn single_dip_reports_missing_peaks() {
        let profile = dips_profile(300, &[150]);
        assert_eq!(
            detect_edges(&profile, &EdgeConfig::default()),
            Err(Error::InsufficientPeaks {
                found: 1,
                required: 3
            })
        );
    }

    #[test]
    fn extreme_margin_is_an_error() {
        let profile = dips_profile(300, &[60, 150, 240]);
        for margin in [isize::MAX, isize::MIN] {
            let cfg = EdgeConfig {
                margin,
                ..EdgeConfig::default()
            };
            assert!(matches!(
                detect_edges(&profile, &cfg),
                Err(Error::BoundaryOverflow { margin: m, .. }) if m == margin
            ));
        }
    }

    #[test]
    fn negative_margin_narrows_outer_pair() {
        let profile = dips_profile(300, &[60, 150, 240]);
        let cfg = EdgeConfig {
            margin: -2,
            ..EdgeConfig::default()
        };
        let found = detect_edges(&profile, &cfg).expect("three transitions");
        assert_eq!(found.edges, [55, 149, 145, 239]);
    }

    #[test]
    fn zero_block_size_is_rejected() {
        let cfg = EdgeConfig {
            block_size: 0,
            ..EdgeConfig::default()
        };
        assert_eq!(
            detect_edges(&[1.0, 2.0], &cfg),
            Err(Error::InvalidBlockSize)
        );
    }
}
