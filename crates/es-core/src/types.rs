/// Tag assigned to a block by comparing its entropy against the two
/// configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Entropy strictly below the low threshold (repetitive/structured).
    Low,
    /// Entropy between the thresholds, inclusive on both ends.
    Normal,
    /// Entropy strictly above the high threshold (compressed/encrypted).
    High,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
        }
    }
}

/// Entropy measurement for a single block, immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockResult {
    /// 0-based position of the block within the file.
    pub index: u64,
    /// Shannon entropy of the block in bits, in `[0.0, 8.0]`.
    pub entropy: f64,
    /// Tag derived from the unrounded entropy value.
    pub class: Classification,
}

/// Running tally of Low and High classified blocks across one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub low_blocks: u64,
    pub high_blocks: u64,
}

impl RunSummary {
    /// Count one classified block. Normal blocks are not tallied.
    pub fn record(&mut self, class: Classification) {
        match class {
            Classification::Low => self.low_blocks += 1,
            Classification::High => self.high_blocks += 1,
            Classification::Normal => {}
        }
    }

    /// Fold another summary into this one. Associative and commutative,
    /// so partial tallies from out-of-order block processing combine to
    /// the same totals as a sequential pass.
    pub fn merge(&mut self, other: &RunSummary) {
        self.low_blocks += other.low_blocks;
        self.high_blocks += other.high_blocks;
    }
}
