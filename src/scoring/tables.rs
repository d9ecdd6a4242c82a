//! Built-in capability lookup tables.
//!
//! Keys are lower-case substrings. Lookups take the first key found in the
//! input, so the order of each slice is part of its meaning.

/// CPU family substrings and their 0-100 scores.
pub const CPU_SCORES: &[(&str, u32)] = &[
    ("pentium", 15),
    ("celeron", 10),
    ("i3", 30),
    ("i5", 50),
    ("i7", 70),
    ("i9", 90),
    ("ryzen 3", 30),
    ("ryzen 5", 50),
    ("ryzen 7", 70),
    ("ryzen 9", 90),
    ("amd fx", 40),
    ("amd a", 25),
];

/// GPU model substrings and their 0-100 scores.
pub const GPU_SCORES: &[(&str, u32)] = &[
    ("gtx 650", 20),
    ("gtx 750", 25),
    ("gtx 950", 30),
    ("gtx 1050", 35),
    ("gtx 1060", 50),
    ("gtx 1070", 60),
    ("gtx 1080", 70),
    ("rtx 2060", 70),
    ("rtx 2070", 75),
    ("rtx 2080", 80),
    ("rtx 3060", 85),
    ("rtx 3070", 90),
    ("rtx 3080", 95),
    ("rtx 3090", 100),
    ("rtx 4070", 100),
    ("rx 560", 30),
    ("rx 570", 40),
    ("rx 580", 50),
    ("rx 590", 55),
    ("rx 5500", 60),
    ("rx 5600", 65),
    ("rx 5700", 70),
    ("rx 6600", 80),
    ("rx 6700", 85),
    ("rx 6800", 90),
    ("rx 6900", 95),
    ("rx 7900", 100),
];

/// Score assumed for a CPU name that matches no table key.
pub const DEFAULT_CPU_SCORE: u32 = 40;

/// Score assumed for a GPU name that matches no table key.
pub const DEFAULT_GPU_SCORE: u32 = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_lowercase() {
        for (key, _) in CPU_SCORES.iter().chain(GPU_SCORES) {
            assert_eq!(*key, key.to_lowercase(), "key {key:?} must be lower-case");
        }
    }

    #[test]
    fn scores_are_within_range() {
        for (key, score) in CPU_SCORES.iter().chain(GPU_SCORES) {
            assert!(*score <= 100, "{key} scores {score}");
        }
        assert!(DEFAULT_CPU_SCORE <= 100);
        assert!(DEFAULT_GPU_SCORE <= 100);
    }

    #[test]
    fn table_sizes() {
        assert_eq!(CPU_SCORES.len(), 12);
        assert_eq!(GPU_SCORES.len(), 27);
    }
}
