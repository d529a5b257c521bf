//! Generates test fixture files in `test-fixtures/`.
//! Run with: `cargo run -p es-core --example gen_fixtures`

use std::fs;
use std::io::Write;
use std::path::Path;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() {
    let dir = Path::new("test-fixtures");
    fs::create_dir_all(dir).expect("failed to create test-fixtures/");

    gen_all_zeros(dir);
    gen_byte_cycle(dir);
    gen_mixed_entropy(dir);
    gen_partial_tail(dir);
    let log = gen_ascii_log(dir);
    gen_compressed_log(dir, &log);
    gen_seeded_random(dir);

    println!("All fixtures generated in {}", dir.display());
}

/// 4 KB of zero bytes: every block reports entropy 0.00 and counts Low.
fn gen_all_zeros(dir: &Path) {
    let data = vec![0u8; 4096];
    fs::write(dir.join("all_zeros.bin"), &data).expect("failed to write all_zeros.bin");
    println!("  all_zeros.bin      (4096 bytes)");
}

/// 4 KB cycling through all 256 byte values: entropy exactly 8.00,
/// every block counts High.
fn gen_byte_cycle(dir: &Path) {
    let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    fs::write(dir.join("byte_cycle.bin"), &data).expect("failed to write byte_cycle.bin");
    println!("  byte_cycle.bin     (4096 bytes)");
}

/// 4 KB with four 1 KB zones, one per classification band:
/// - Block 0: all zeros (entropy 0.0, Low)
/// - Block 1: two alternating values (entropy 1.0, Low)
/// - Block 2: LCG pseudo-random (entropy ~7.8, High)
/// - Block 3: repeating "ABCD" (entropy exactly 2.0, which sits on the
///   low threshold and therefore counts Normal)
fn gen_mixed_entropy(dir: &Path) {
    let mut data = Vec::with_capacity(4096);

    data.extend_from_slice(&[0u8; 1024]);

    for i in 0..1024u16 {
        data.push((i % 2) as u8);
    }

    let mut state: u32 = 0xDEAD_BEEF;
    for _ in 0..1024 {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        data.push((state >> 16) as u8);
    }

    for _ in 0..256 {
        data.extend_from_slice(b"ABCD");
    }

    assert_eq!(data.len(), 4096);
    fs::write(dir.join("mixed_entropy.bin"), &data).expect("failed to write mixed_entropy.bin");
    println!("  mixed_entropy.bin  (4096 bytes, 4 zones)");
}

/// 1124 bytes: one full high-entropy block plus a 100-byte single-value
/// tail. The report must show the tail as its own block at entropy 0.00.
fn gen_partial_tail(dir: &Path) {
    let mut data: Vec<u8> = Vec::with_capacity(1124);

    let mut state: u64 = 0x1234_5678_9ABC_DEF0;
    for _ in 0..1024 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        data.push((state >> 33) as u8);
    }
    data.extend(vec![0xAB; 100]);

    fs::write(dir.join("partial_tail.bin"), &data).expect("failed to write partial_tail.bin");
    println!("  partial_tail.bin   (1124 bytes, 100-byte tail)");
}

/// ~3 KB simulated build log. Text blocks land between the thresholds.
fn gen_ascii_log(dir: &Path) -> Vec<u8> {
    let lines = [
        "[00:00.012] fetch   registry index up to date",
        "[00:00.480] resolve 214 packages, 0 conflicts",
        "[00:01.233] compile core v0.4.1 (lib)",
        "[00:02.871] compile codec v0.4.1 (lib)",
        "[00:03.002] warn    unused variable `offset` at codec/src/frame.rs:88",
        "[00:04.559] compile transport v0.4.1 (lib)",
        "[00:06.114] compile service v0.4.1 (bin)",
        "[00:06.790] link    target/release/service",
        "[00:07.001] strip   debug symbols (saved 4.2 MB)",
        "[00:07.188] test    core: 48 passed, 0 failed",
        "[00:08.342] test    codec: 31 passed, 0 failed",
        "[00:09.107] test    transport: 22 passed, 0 failed",
        "[00:09.644] test    service: 9 passed, 0 failed",
        "[00:09.812] bench   frame_decode: 412 MiB/s (+2.1%)",
        "[00:10.554] bench   frame_encode: 388 MiB/s (-0.4%)",
        "[00:11.023] package service-0.4.1.tar.gz (1.8 MB)",
        "[00:11.340] upload  artifacts to cache (3 files)",
        "[00:11.822] done    build finished in 11.8s",
        "[00:11.901] notify  #builds channel updated",
        "[00:12.007] clean   removed 112 stale objects",
        "[00:12.155] audit   0 advisories against 214 packages",
        "[00:12.319] report  coverage 87.4% (+0.3%)",
        "[00:12.500] exit    status 0",
    ];
    let content = (lines.join("\n") + "\n").repeat(3).into_bytes();
    fs::write(dir.join("ascii_log.txt"), &content).expect("failed to write ascii_log.txt");
    println!("  ascii_log.txt      ({} bytes)", content.len());
    content
}

/// Zlib-compressed copy of the log, repeated enough that the compressed
/// stream spans several blocks. Compressed blocks report High.
fn gen_compressed_log(dir: &Path, log: &[u8]) {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    for _ in 0..24 {
        encoder.write_all(log).expect("failed to compress log");
    }
    let data = encoder.finish().expect("failed to finish zlib stream");
    fs::write(dir.join("compressed_log.zlib"), &data)
        .expect("failed to write compressed_log.zlib");
    println!("  compressed_log.zlib ({} bytes)", data.len());
}

/// 8 KB of seeded random bytes: reproducible maximum-entropy input.
fn gen_seeded_random(dir: &Path) {
    let mut data = vec![0u8; 8192];
    let mut rng = StdRng::seed_from_u64(0x5EED);
    rng.fill(&mut data[..]);
    fs::write(dir.join("seeded_random.bin"), &data).expect("failed to write seeded_random.bin");
    println!("  seeded_random.bin  (8192 bytes)");
}
