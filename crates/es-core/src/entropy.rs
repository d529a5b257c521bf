use crate::histogram::ByteHistogram;

/// Compute the Shannon entropy of a block from its byte histogram.
/// Returned in bits, from 0.0 (a single repeated value) to 8.0 (all
/// 256 values equally frequent).
///
/// The histogram must cover at least one byte. Zero-count values
/// contribute nothing, avoiding `0 * log2(0)`.
pub fn block_entropy(hist: &ByteHistogram) -> f64 {
    assert!(hist.total > 0, "entropy is undefined for an empty block");

    let total = hist.total as f64;
    hist.counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        // `Sum<f64>` folds from -0.0, so a single-value block yields
        // -0.0; adding 0.0 canonicalizes the zero sign and is an
        // identity on every other value.
        .sum::<f64>()
        + 0.0
}

/// Entropy of a raw block, building the histogram internally.
pub fn entropy_of(block: &[u8]) -> f64 {
    block_entropy(&ByteHistogram::from_block(block))
}
