use crate::config::ScanConfig;
use crate::types::Classification;

/// Classify a block's entropy against the configured thresholds.
///
/// Rules applied in order:
/// 1. **Low** — entropy strictly below `low_threshold`
/// 2. **High** — entropy strictly above `high_threshold`
/// 3. **Normal** — everything else, including entropy exactly equal
///    to either threshold
///
/// Classification always uses the unrounded entropy value; rounding
/// only happens at print time.
pub fn classify(entropy: f64, cfg: &ScanConfig) -> Classification {
    debug_assert!(
        cfg.low_threshold < cfg.high_threshold,
        "thresholds must be ordered low < high"
    );

    if entropy < cfg.low_threshold {
        Classification::Low
    } else if entropy > cfg.high_threshold {
        Classification::High
    } else {
        Classification::Normal
    }
}
