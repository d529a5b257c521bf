//! Block scan driver.
//!
//! Walks the block plan over a mapped file and produces one entropy
//! measurement per block, in file order, plus the Low/High tallies.
//! Two entry points share the same per-block computation: a plain
//! sequential walk and a rayon-parallel walk for large inputs.

use rayon::prelude::*;

use crate::classify::classify;
use crate::config::ScanConfig;
use crate::entropy::entropy_of;
use crate::mapped_file::MappedFile;
use crate::plan::BlockPlan;
use crate::types::{BlockResult, RunSummary};

/// Inputs below this size are scanned sequentially even through the
/// parallel entry point; thread fan-out costs more than it saves.
const MIN_PARALLEL_BYTES: u64 = 1024 * 1024;

/// Everything one scan produces: per-block results in ascending block
/// order plus the Low/High tallies over all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    pub results: Vec<BlockResult>,
    pub summary: RunSummary,
}

/// Fault raised while reading block bytes out of the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// A block came back shorter than the plan promised. The expected
    /// length already accounts for the short final block, so any
    /// shortfall means the file changed underneath the scan.
    ShortRead {
        block: u64,
        expected: u64,
        actual: u64,
    },
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::ShortRead {
                block,
                expected,
                actual,
            } => write!(
                f,
                "short read in block {block}: expected {expected} bytes, got {actual}"
            ),
        }
    }
}

impl std::error::Error for ScanError {}

/// Measure and classify a single block.
fn compute_block(
    file: &MappedFile,
    plan: &BlockPlan,
    cfg: &ScanConfig,
    index: u64,
) -> Result<BlockResult, ScanError> {
    let expected = plan.size_of(index);
    let block = file.slice_at(plan.offset_of(index), expected);

    if (block.len() as u64) != expected {
        return Err(ScanError::ShortRead {
            block: index,
            expected,
            actual: block.len() as u64,
        });
    }

    let entropy = entropy_of(block);
    Ok(BlockResult {
        index,
        entropy,
        class: classify(entropy, cfg),
    })
}

/// Scan every block of a file sequentially.
///
/// An empty file yields an empty result list and a zeroed summary.
pub fn scan_file(file: &MappedFile, cfg: &ScanConfig) -> Result<ScanReport, ScanError> {
    let plan = BlockPlan::for_file(file.len(), cfg.block_size);
    log::debug!(
        "scanning {} bytes as {} blocks of {} (final block {} bytes)",
        file.len(),
        plan.total_blocks(),
        plan.block_size(),
        plan.last_block_size()
    );

    let mut results = Vec::with_capacity(plan.total_blocks() as usize);
    let mut summary = RunSummary::default();

    for index in 0..plan.total_blocks() {
        let result = compute_block(file, &plan, cfg, index)?;
        summary.record(result.class);
        results.push(result);
    }

    Ok(ScanReport { results, summary })
}

/// Scan every block of a file across all cores.
///
/// Produces exactly the same report as [`scan_file`]: blocks are
/// independent, collection preserves block order, and the summary
/// merge is order-insensitive. Small inputs fall back to the
/// sequential walk.
pub fn scan_file_parallel(file: &MappedFile, cfg: &ScanConfig) -> Result<ScanReport, ScanError> {
    if file.len() < MIN_PARALLEL_BYTES {
        log::debug!(
            "input of {} bytes is below the parallel threshold, scanning sequentially",
            file.len()
        );
        return scan_file(file, cfg);
    }

    let plan = BlockPlan::for_file(file.len(), cfg.block_size);
    log::debug!(
        "parallel scan of {} bytes as {} blocks of {}",
        file.len(),
        plan.total_blocks(),
        plan.block_size()
    );

    let results: Vec<BlockResult> = (0..plan.total_blocks())
        .into_par_iter()
        .map(|index| compute_block(file, &plan, cfg, index))
        .collect::<Result<_, _>>()?;

    let summary = results
        .par_iter()
        .fold(RunSummary::default, |mut acc, result| {
            acc.record(result.class);
            acc
        })
        .reduce(RunSummary::default, |mut left, right| {
            left.merge(&right);
            left
        });

    Ok(ScanReport { results, summary })
}
