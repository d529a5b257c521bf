pub mod types;
pub mod config;
pub mod plan;
pub mod mapped_file;
pub mod histogram;
pub mod entropy;
pub mod classify;
pub mod scan;
pub mod report;

pub use types::*;
pub use config::{ScanConfig, DEFAULT_BLOCK_SIZE, DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD};
pub use plan::BlockPlan;
pub use mapped_file::MappedFile;
pub use histogram::ByteHistogram;
pub use entropy::{block_entropy, entropy_of};
pub use classify::classify;
pub use scan::{scan_file, scan_file_parallel, ScanError, ScanReport};
pub use report::write_report;
