//! Plain-text report rendering.
//!
//! The layout is fixed: a title line naming the input, a column header,
//! one tab-separated row per block, then the Low/High totals. Title,
//! column header and totals are printed even when there are no blocks,
//! so an empty input still produces a complete report.

use std::io::{self, Write};
use std::path::Path;

use crate::config::ScanConfig;
use crate::scan::ScanReport;

/// Render a scan report. The path is printed exactly as the caller
/// supplied it, and entropy values are rounded to `cfg.precision`
/// decimals at this point only.
pub fn write_report<W: Write>(
    out: &mut W,
    source: &Path,
    report: &ScanReport,
    cfg: &ScanConfig,
) -> io::Result<()> {
    writeln!(out, "entropy report for {}", source.display())?;
    writeln!(out, "block#\tentropy")?;

    for result in &report.results {
        writeln!(
            out,
            "{}\t{:.prec$}",
            result.index,
            result.entropy,
            prec = cfg.precision
        )?;
    }

    writeln!(out, "Low entropy blocks: {}", report.summary.low_blocks)?;
    writeln!(out, "High entropy blocks: {}", report.summary.high_blocks)?;

    Ok(())
}
