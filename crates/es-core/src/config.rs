//! Tunable parameters for a scan run.
//!
//! Everything the report depends on lives here rather than in scattered
//! constants, so one `ScanConfig` value fully determines the output for
//! a given input file.

/// Block size used when the caller does not request one.
pub const DEFAULT_BLOCK_SIZE: u64 = 1024;

/// Entropy strictly below this counts as a Low block.
pub const DEFAULT_LOW_THRESHOLD: f64 = 2.0;

/// Entropy strictly above this counts as a High block.
pub const DEFAULT_HIGH_THRESHOLD: f64 = 7.0;

/// Decimal places used when formatting entropy values.
pub const DEFAULT_PRECISION: usize = 2;

/// Parameters governing how a file is partitioned, classified and printed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    /// Nominal block size in bytes. Always positive.
    pub block_size: u64,
    /// Lower classification threshold in bits.
    pub low_threshold: f64,
    /// Upper classification threshold in bits.
    pub high_threshold: f64,
    /// Decimal places for printed entropy values.
    pub precision: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            low_threshold: DEFAULT_LOW_THRESHOLD,
            high_threshold: DEFAULT_HIGH_THRESHOLD,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl ScanConfig {
    /// Apply a user-requested block size. Zero and negative requests fall
    /// back to [`DEFAULT_BLOCK_SIZE`] so a scan can always proceed.
    pub fn with_requested_block_size(mut self, requested: i64) -> Self {
        self.block_size = if requested > 0 {
            requested as u64
        } else {
            DEFAULT_BLOCK_SIZE
        };
        self
    }
}
