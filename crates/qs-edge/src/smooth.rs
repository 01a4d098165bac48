use crate::Error;

/// Block-averages `points` into `ceil(len / block_size)` samples.
///
/// A trailing partial block is completed by repeating the last sample of
/// `points` until it holds `block_size` values, so the final average leans
/// towards that sample.
pub fn average(points: &[f32], block_size: usize) -> Result<Vec<f32>, Error> {
    if block_size == 0 {
        return Err(Error::InvalidBlockSize);
    }
    let Some(&last) = points.last() else {
        return Err(Error::EmptyProfile);
    };

    let scale = block_size as f32;
    Ok(points
        .chunks(block_size)
        .map(|block| {
            let pad = block_size - block.len();
            let sum: f32 = block
                .iter()
                .copied()
                .chain(std::iter::repeat_n(last, pad))
                .sum();
            sum / scale
        })
        .collect())
}

/// Forward differences: `out[i] = points[i + 1] - points[i]`.
///
/// Inputs with fewer than two samples yield an empty sequence.
pub fn deltas(points: &[f32]) -> Vec<f32> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };

    let mut prev = first;
    let mut out = Vec::with_capacity(rest.len());
    for &p in rest {
        out.push(p - prev);
        prev = p;
    }
    out
}
