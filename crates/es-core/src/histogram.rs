//! Byte histogram computation for one block.
//!
//! Counts the distribution of byte values (0-255) in a block of data.
//! The histogram is the sole input to the entropy kernel, so a block's
//! entropy depends only on its byte counts, never on byte order.

/// Histogram of byte values (0-255) within a single block.
#[derive(Debug, Clone)]
pub struct ByteHistogram {
    /// Count of each byte value (index = byte value).
    pub counts: [u64; 256],
    /// Total number of bytes counted. Always the block length.
    pub total: u64,
}

impl Default for ByteHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }

    /// Count every byte of a block.
    pub fn from_block(block: &[u8]) -> Self {
        let mut hist = Self::new();
        for &byte in block {
            hist.counts[byte as usize] += 1;
        }
        hist.total = block.len() as u64;
        hist
    }

    /// Number of distinct byte values present in the block.
    pub fn distinct_values(&self) -> u32 {
        self.counts.iter().filter(|&&c| c > 0).count() as u32
    }

    /// Most frequent byte value and its count, or `None` for an empty block.
    pub fn most_common(&self) -> Option<(u8, u64)> {
        if self.total == 0 {
            return None;
        }
        self.counts
            .iter()
            .enumerate()
            .max_by_key(|(_, &c)| c)
            .map(|(value, &count)| (value as u8, count))
    }
}
