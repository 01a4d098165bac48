use crate::Error;

/// Walks back from `from` to the start of the rising block containing it.
///
/// Returns the index just after the nearest negative delta at or before
/// `from`, or `0` when no negative delta precedes it. Index `0` itself is
/// never inspected.
pub fn find_zero_point(deltas: &[f32], from: usize) -> Result<usize, Error> {
    if from >= deltas.len() {
        return Err(Error::IndexOutOfRange {
            index: from,
            len: deltas.len(),
        });
    }

    Ok((1..=from)
        .rev()
        .find(|&i| deltas[i] < 0.0)
        .map_or(0, |i| i + 1))
}

/// Index of the smallest value among `values[start]` and the `limit - 1`
/// samples before it.
///
/// The scan runs backwards from `start` and only moves on a strictly smaller
/// value, so ties resolve to the higher index. The window never extends
/// below `0`; a `limit` of `0` or `1` returns `start`.
pub fn find_lowest_point(values: &[f32], start: usize, limit: usize) -> Result<usize, Error> {
    let Some(&first) = values.get(start) else {
        return Err(Error::IndexOutOfRange {
            index: start,
            len: values.len(),
        });
    };

    let lo = (start + 1).saturating_sub(limit);
    let mut min = first;
    let mut best = start;
    for i in (lo..start).rev() {
        if values[i] < min {
            min = values[i];
            best = i;
        }
    }
    Ok(best)
}
