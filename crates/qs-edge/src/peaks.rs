use crate::Error;

/// Strict local maximum of a delta sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Maximum {
    pub index: usize,
    pub value: f32,
}

/// Collects interior samples strictly greater than both neighbours.
///
/// The first and last samples are never reported and plateaus never qualify.
pub fn find_maxima(deltas: &[f32]) -> Vec<Maximum> {
    deltas
        .windows(3)
        .enumerate()
        .filter(|(_, w)| w[1] > w[0] && w[1] > w[2])
        .map(|(i, w)| Maximum {
            index: i + 1,
            value: w[1],
        })
        .collect()
}

/// Keeps the `k` strongest maxima and returns them ordered by index.
///
/// Equal values keep their scan order, so the earlier maximum wins a tie for
/// the last slot.
pub fn select_strongest(mut maxima: Vec<Maximum>, k: usize) -> Result<Vec<Maximum>, Error> {
    if maxima.len() < k {
        return Err(Error::InsufficientPeaks {
            found: maxima.len(),
            required: k,
        });
    }

    // `sort_by` is stable.
    maxima.sort_by(|a, b| b.value.total_cmp(&a.value));
    maxima.truncate(k);
    maxima.sort_by_key(|m| m.index);
    Ok(maxima)
}
