//! Hardware capability scoring.
//!
//! Maps free-text CPU and GPU names to a normalized 0-100 score by an
//! ordered, case-insensitive substring lookup. Names that match nothing get
//! a mid-range default rather than an error.
//!
//! # Example
//!
//! ```
//! use pixelbuddy::scoring::ScoreTable;
//!
//! let table = ScoreTable::builtin();
//! assert_eq!(table.score_cpu("Intel Core i7-9700K"), 70);
//! assert_eq!(table.score_gpu("NVIDIA GeForce RTX 3070"), 90);
//! assert_eq!(table.score_gpu("Unobtainium X1"), 50);
//! ```

pub mod tables;

pub use tables::{CPU_SCORES, DEFAULT_CPU_SCORE, DEFAULT_GPU_SCORE, GPU_SCORES};

/// Ordered CPU and GPU lookup tables with their fallback scores.
#[derive(Debug, Clone, Copy)]
pub struct ScoreTable {
    cpu: &'static [(&'static str, u32)],
    gpu: &'static [(&'static str, u32)],
    cpu_default: u32,
    gpu_default: u32,
}

static BUILTIN: ScoreTable = ScoreTable {
    cpu: CPU_SCORES,
    gpu: GPU_SCORES,
    cpu_default: DEFAULT_CPU_SCORE,
    gpu_default: DEFAULT_GPU_SCORE,
};

impl ScoreTable {
    /// The process-wide built-in table.
    pub fn builtin() -> &'static ScoreTable {
        &BUILTIN
    }

    /// Score a CPU name. Unknown names score [`DEFAULT_CPU_SCORE`].
    pub fn score_cpu(&self, name: &str) -> u32 {
        lookup(self.cpu, name).unwrap_or(self.cpu_default)
    }

    /// Score a GPU name. Unknown names score [`DEFAULT_GPU_SCORE`].
    pub fn score_gpu(&self, name: &str) -> u32 {
        lookup(self.gpu, name).unwrap_or(self.gpu_default)
    }
}

/// First entry whose key occurs anywhere in the lower-cased name.
fn lookup(table: &[(&str, u32)], name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    table
        .iter()
        .find(|(key, _)| name.contains(key))
        .map(|&(_, score)| score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_lookup_is_case_insensitive() {
        let table = ScoreTable::builtin();
        assert_eq!(table.score_cpu("Intel i7-9700K"), 70);
        assert_eq!(table.score_cpu("INTEL I7-9700K"), 70);
        assert_eq!(table.score_cpu("intel i7-9700k"), 70);
    }

    #[test]
    fn cpu_ryzen_models() {
        let table = ScoreTable::builtin();
        assert_eq!(table.score_cpu("AMD Ryzen 7 5800X"), 70);
        assert_eq!(table.score_cpu("AMD Ryzen 5 3600"), 50);
        assert_eq!(table.score_cpu("AMD Ryzen 9 7950X3D"), 90);
    }

    #[test]
    fn cpu_unknown_gets_default() {
        let table = ScoreTable::builtin();
        assert_eq!(table.score_cpu("Unobtainium X1"), 40);
        assert_eq!(table.score_cpu(""), 40);
    }

    #[test]
    fn gpu_unknown_gets_default() {
        let table = ScoreTable::builtin();
        assert_eq!(table.score_gpu("Unobtainium X1"), 50);
        assert_eq!(table.score_gpu(""), 50);
    }

    #[test]
    fn gpu_lookup_matches_substring() {
        let table = ScoreTable::builtin();
        assert_eq!(table.score_gpu("NVIDIA GeForce GTX 1060 6GB"), 50);
        assert_eq!(table.score_gpu("AMD Radeon RX 580"), 50);
        assert_eq!(table.score_gpu("AMD Radeon RX 6800 XT"), 90);
    }

    #[test]
    fn first_key_in_table_order_wins() {
        let table = ScoreTable::builtin();
        // "pentium" precedes "i3" in the table even though both appear.
        assert_eq!(table.score_cpu("Intel Pentium or i3"), 15);
        // "amd fx" precedes "amd a".
        assert_eq!(table.score_cpu("AMD FX-8350 / AMD A10"), 40);
    }

    #[test]
    fn gpu_order_quirks_are_preserved() {
        let table = ScoreTable::builtin();
        // "rx 560" is checked before "rx 5600" and shadows it.
        assert_eq!(table.score_gpu("Radeon RX 5600 XT"), 30);
        assert_eq!(table.score_gpu("Radeon RX 5500"), 60);
    }

    #[test]
    fn scores_stay_in_range() {
        let table = ScoreTable::builtin();
        for name in ["i9", "rtx 4070", "celeron", "???"] {
            assert!(table.score_cpu(name) <= 100);
            assert!(table.score_gpu(name) <= 100);
        }
    }
}
