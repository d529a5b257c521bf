//! Example: scan a file and inspect each block beyond the plain report.
//!
//! Usage:
//!   cargo run -p es-core --example inspect_blocks -- test-fixtures/mixed_entropy.bin
//!   cargo run -p es-core --example inspect_blocks -- test-fixtures/partial_tail.bin

use std::path::Path;

use es_core::{
    scan_file_parallel, write_report, BlockPlan, ByteHistogram, MappedFile, ScanConfig,
};

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: inspect_blocks <path>");
        eprintln!("  Try: cargo run -p es-core --example inspect_blocks -- test-fixtures/mixed_entropy.bin");
        std::process::exit(1);
    });

    let cfg = ScanConfig::default();
    let file = MappedFile::open(Path::new(&path)).expect("failed to open file");
    let plan = BlockPlan::for_file(file.len(), cfg.block_size);

    println!("=== File: {} ===", path);
    println!(
        "Size: {} bytes ({:.2} KB), {} blocks of {}",
        file.len(),
        file.len() as f64 / 1024.0,
        plan.total_blocks(),
        plan.block_size()
    );
    println!();

    let report = scan_file_parallel(&file, &cfg).expect("scan failed");

    // --- The plain report, exactly as the CLI prints it ---
    let mut stdout = std::io::stdout().lock();
    write_report(&mut stdout, Path::new(&path), &report, &cfg).expect("failed to write report");
    drop(stdout);
    println!();

    // --- Per-block detail: class, distinct values, dominant byte ---
    println!("--- Block detail ---");
    println!("block#  entropy  class   distinct  top byte");

    const MAX_DETAIL: usize = 32;
    for result in report.results.iter().take(MAX_DETAIL) {
        let block = file.slice_at(plan.offset_of(result.index), plan.size_of(result.index));
        let hist = ByteHistogram::from_block(block);

        let top = match hist.most_common() {
            Some((value, count)) => {
                let pct = count as f64 / hist.total as f64 * 100.0;
                format!("0x{value:02X} ({pct:.1}%)")
            }
            None => "-".to_string(),
        };

        println!(
            "{:<7} {:<8.3} {:<7} {:<9} {}",
            result.index,
            result.entropy,
            result.class.label(),
            hist.distinct_values(),
            top
        );
    }
    if report.results.len() > MAX_DETAIL {
        println!("... {} more blocks", report.results.len() - MAX_DETAIL);
    }
}
