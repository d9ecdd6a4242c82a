//! Requirement claim extraction from lower-cased requirement text.
//!
//! Each extractor looks at the first occurrence only. Matches are
//! best-effort: unrelated prose can match and unusual phrasing can be
//! missed.

use std::sync::LazyLock;

use regex::Regex;

// --- Compiled regexes (one-time via LazyLock) ---

static RAM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*gb\s*ram").unwrap());

static VRAM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*gb\s*(?:vram|video memory|graphics)").unwrap());

static CPU_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(intel|amd).*(i\d|ryzen\s\d|fx|pentium|celeron)").unwrap()
});

static GPU_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(gtx|rtx|rx).*(\d+)").unwrap());

/// Required system memory in GB ("8 GB RAM").
pub fn required_ram_gb(text: &str) -> Option<u64> {
    first_quantity(&RAM_REGEX, text)
}

/// Required graphics memory in GB ("4 GB VRAM", "2 GB video memory").
pub fn required_vram_gb(text: &str) -> Option<u64> {
    first_quantity(&VRAM_REGEX, text)
}

/// Required CPU claim, from the vendor name through the last model token
/// on the same line.
pub fn required_cpu(text: &str) -> Option<&str> {
    CPU_REGEX.find(text).map(|m| m.as_str())
}

/// Required GPU claim, from the series prefix through the last digit on the
/// same line.
pub fn required_gpu(text: &str) -> Option<&str> {
    GPU_REGEX.find(text).map(|m| m.as_str())
}

/// The first match's quantity; zero or unparsable quantities count as no
/// claim.
fn first_quantity(regex: &Regex, text: &str) -> Option<u64> {
    let caps = regex.captures(text)?;
    caps[1].parse::<u64>().ok().filter(|&n| n > 0)
}
