//! Partitioning of a file into fixed-size blocks.
//!
//! The plan is pure arithmetic over the file length and the configured
//! block size. It is computed once per scan and then consulted for every
//! block, so the layout cannot drift between the histogram pass and the
//! report.

/// Block layout of a file: how many blocks there are and how long each is.
///
/// All blocks have the nominal size except possibly the final one, which
/// covers exactly the remaining bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPlan {
    block_size: u64,
    total_blocks: u64,
    last_block_size: u64,
}

impl BlockPlan {
    /// Compute the layout for a file of `file_size` bytes.
    ///
    /// A zero-length file has zero blocks. Otherwise the count rounds up
    /// so every byte belongs to exactly one block.
    pub fn for_file(file_size: u64, block_size: u64) -> Self {
        assert!(block_size > 0, "block size must be positive");

        let total_blocks = if file_size == 0 {
            0
        } else {
            file_size.div_ceil(block_size)
        };

        let remainder = file_size % block_size;
        let last_block_size = if remainder == 0 { block_size } else { remainder };

        Self {
            block_size,
            total_blocks,
            last_block_size,
        }
    }

    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    pub fn total_blocks(&self) -> u64 {
        self.total_blocks
    }

    /// Length of the final block. Equal to `block_size` when the file
    /// divides evenly; meaningless when the plan has zero blocks.
    pub fn last_block_size(&self) -> u64 {
        self.last_block_size
    }

    /// Byte offset where block `index` starts.
    pub fn offset_of(&self, index: u64) -> u64 {
        index * self.block_size
    }

    /// Length of block `index`. Every block is `block_size` bytes long
    /// except the final one, which may be shorter.
    pub fn size_of(&self, index: u64) -> u64 {
        debug_assert!(index < self.total_blocks, "block index out of range");
        if index + 1 == self.total_blocks {
            self.last_block_size
        } else {
            self.block_size
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_has_no_blocks() {
        let plan = BlockPlan::for_file(0, 1024);
        assert_eq!(plan.total_blocks(), 0);
    }

    #[test]
    fn file_smaller_than_block_is_one_short_block() {
        let plan = BlockPlan::for_file(100, 1024);
        assert_eq!(plan.total_blocks(), 1);
        assert_eq!(plan.last_block_size(), 100);
        assert_eq!(plan.size_of(0), 100);
    }

    #[test]
    fn exact_multiple_has_full_final_block() {
        let plan = BlockPlan::for_file(2048, 1024);
        assert_eq!(plan.total_blocks(), 2);
        assert_eq!(plan.last_block_size(), 1024);
        assert_eq!(plan.size_of(0), 1024);
        assert_eq!(plan.size_of(1), 1024);
    }

    #[test]
    fn one_full_block_exactly() {
        let plan = BlockPlan::for_file(1024, 1024);
        assert_eq!(plan.total_blocks(), 1);
        assert_eq!(plan.size_of(0), 1024);
    }

    #[test]
    fn one_byte_over_spills_into_second_block() {
        let plan = BlockPlan::for_file(1025, 1024);
        assert_eq!(plan.total_blocks(), 2);
        assert_eq!(plan.size_of(0), 1024);
        assert_eq!(plan.size_of(1), 1);
    }

    #[test]
    fn trailing_remainder_shortens_final_block() {
        let plan = BlockPlan::for_file(2500, 1024);
        assert_eq!(plan.total_blocks(), 3);
        assert_eq!(plan.size_of(0), 1024);
        assert_eq!(plan.size_of(1), 1024);
        assert_eq!(plan.size_of(2), 452);
    }

    #[test]
    fn single_byte_file() {
        let plan = BlockPlan::for_file(1, 1024);
        assert_eq!(plan.total_blocks(), 1);
        assert_eq!(plan.size_of(0), 1);
    }

    #[test]
    fn block_size_one_yields_one_block_per_byte() {
        let plan = BlockPlan::for_file(10, 1);
        assert_eq!(plan.total_blocks(), 10);
        assert_eq!(plan.last_block_size(), 1);
        for i in 0..10 {
            assert_eq!(plan.offset_of(i), i);
            assert_eq!(plan.size_of(i), 1);
        }
    }

    #[test]
    fn offsets_advance_by_block_size() {
        let plan = BlockPlan::for_file(4096, 512);
        assert_eq!(plan.offset_of(0), 0);
        assert_eq!(plan.offset_of(1), 512);
        assert_eq!(plan.offset_of(7), 3584);
    }

    #[test]
    fn block_size_larger_than_file() {
        let plan = BlockPlan::for_file(300, 1 << 20);
        assert_eq!(plan.total_blocks(), 1);
        assert_eq!(plan.size_of(0), 300);
    }

    #[test]
    #[should_panic(expected = "block size must be positive")]
    fn zero_block_size_panics() {
        BlockPlan::for_file(100, 0);
    }

    #[test]
    fn sizes_sum_to_file_size() {
        for &(file_size, block_size) in &[(2048u64, 1024u64), (2500, 1024), (1, 7), (999, 1000)] {
            let plan = BlockPlan::for_file(file_size, block_size);
            let covered: u64 = (0..plan.total_blocks()).map(|i| plan.size_of(i)).sum();
            assert_eq!(covered, file_size, "plan must cover every byte exactly once");
        }
    }
}
