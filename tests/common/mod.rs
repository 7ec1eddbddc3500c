use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};

use cps2phoenix::layout::{SEGMENT_COUNT, SEGMENT_SIZE};
use cps2phoenix::{segment_path, swap_word_pairs};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn temp_dir(prefix: &str) -> PathBuf {
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let mut dir = std::env::temp_dir();
    dir.push(format!("cps2phoenix_{prefix}_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn write_file(path: &Path, data: &[u8]) {
    std::fs::write(path, data).unwrap();
}

/// Run the binary with the given working directory (output files land there).
pub fn run_tool(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cps2phoenix"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("cps2phoenix failed: {stderr}");
    }
}

pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "cps2phoenix unexpectedly succeeded"
    );
}

/// Deterministic contents for segment `index` (1-based).
pub fn segment_data(index: usize) -> Vec<u8> {
    (0..SEGMENT_SIZE)
        .map(|j| (j as u8).wrapping_mul(7).wrapping_add(index as u8))
        .collect()
}

/// Write a full set of 8 segment files under `dir` and return the expected
/// assembled (pre-swap) buffer.
pub fn write_full_segment_set(dir: &Path, base: &str) -> Vec<u8> {
    let mut assembled = Vec::with_capacity(SEGMENT_SIZE * SEGMENT_COUNT);
    for index in 1..=SEGMENT_COUNT {
        let data = segment_data(index);
        write_file(&dir.join(segment_path(base, index)), &data);
        assembled.extend_from_slice(&data);
    }
    assembled
}

/// Word-swapped copy of `data`.
pub fn swapped(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    swap_word_pairs(&mut out).unwrap();
    out
}
