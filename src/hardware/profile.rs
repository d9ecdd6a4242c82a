//! Hardware profile snapshot.

use serde::{Deserialize, Serialize};

/// Measured hardware of the local machine.
///
/// Produced once per session by a [`HardwareProbe`](super::HardwareProbe)
/// and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareProfile {
    /// Operating system name and release.
    #[serde(rename = "OS")]
    pub os: String,
    /// CPU model identifier.
    #[serde(rename = "CPU")]
    pub cpu: String,
    /// CPU architecture (e.g., "x86_64").
    #[serde(rename = "CPU Architecture")]
    pub cpu_arch: String,
    /// Total system memory in GB.
    #[serde(rename = "RAM (GB)")]
    pub ram_gb: f64,
    /// GPU model identifier.
    #[serde(rename = "GPU")]
    pub gpu: String,
    /// Dedicated graphics memory in MB.
    #[serde(rename = "VRAM (MB)")]
    pub vram_mb: f64,
    /// Total disk size in GB.
    #[serde(rename = "Disk (GB)")]
    pub disk_gb: f64,
}

impl Default for HardwareProfile {
    fn default() -> Self {
        Self {
            os: UNKNOWN.to_string(),
            cpu: UNKNOWN.to_string(),
            cpu_arch: std::env::consts::ARCH.to_string(),
            ram_gb: 0.0,
            gpu: UNKNOWN.to_string(),
            vram_mb: 0.0,
            disk_gb: 0.0,
        }
    }
}

/// Placeholder for values that could not be detected.
pub const UNKNOWN: &str = "Unknown";

impl HardwareProfile {
    /// Labelled values in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("OS", self.os.clone()),
            ("CPU", self.cpu.clone()),
            ("CPU Architecture", self.cpu_arch.clone()),
            ("RAM (GB)", format_amount(self.ram_gb)),
            ("GPU", self.gpu.clone()),
            ("VRAM (MB)", format_amount(self.vram_mb)),
            ("Disk (GB)", format_amount(self.disk_gb)),
        ]
    }

    /// Apply manual overrides on top of the measured values.
    pub fn with_overrides(mut self, overrides: &HardwareOverrides) -> Self {
        if let Some(cpu) = &overrides.cpu {
            self.cpu = cpu.clone();
        }
        if let Some(gpu) = &overrides.gpu {
            self.gpu = gpu.clone();
        }
        if let Some(ram) = overrides.ram_gb {
            self.ram_gb = ram;
        }
        if let Some(vram) = overrides.vram_mb {
            self.vram_mb = vram;
        }
        self
    }
}

/// Manually supplied values that replace probed ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardwareOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram_gb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vram_mb: Option<f64>,
}

impl HardwareOverrides {
    /// Combine two override sets; values in `over` win.
    pub fn merged(&self, over: &HardwareOverrides) -> HardwareOverrides {
        HardwareOverrides {
            cpu: over.cpu.clone().or_else(|| self.cpu.clone()),
            gpu: over.gpu.clone().or_else(|| self.gpu.clone()),
            ram_gb: over.ram_gb.or(self.ram_gb),
            vram_mb: over.vram_mb.or(self.vram_mb),
        }
    }
}

/// Format a quantity without a trailing `.0`, and with at most two decimals.
///
/// ```
/// use pixelbuddy::hardware::format_amount;
///
/// assert_eq!(format_amount(4.0), "4");
/// assert_eq!(format_amount(15.5), "15.5");
/// assert_eq!(format_amount(7.634), "7.63");
/// ```
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{:.0}", value);
    }
    let fixed = format!("{:.2}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Round to two decimals, the precision probes report at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HardwareProfile {
        HardwareProfile {
            os: "Linux 6.8.0".to_string(),
            cpu: "AMD Ryzen 5 3600".to_string(),
            cpu_arch: "x86_64".to_string(),
            ram_gb: 15.55,
            gpu: "NVIDIA GeForce GTX 1060 6GB".to_string(),
            vram_mb: 6144.0,
            disk_gb: 476.94,
        }
    }

    #[test]
    fn entries_in_display_order() {
        let labels: Vec<_> = sample().entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            labels,
            vec![
                "OS",
                "CPU",
                "CPU Architecture",
                "RAM (GB)",
                "GPU",
                "VRAM (MB)",
                "Disk (GB)"
            ]
        );
    }

    #[test]
    fn entries_format_numbers() {
        let entries = sample().entries();
        assert_eq!(entries[3].1, "15.55");
        assert_eq!(entries[5].1, "6144");
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let overrides = HardwareOverrides {
            gpu: Some("RTX 3070".to_string()),
            ram_gb: Some(32.0),
            ..Default::default()
        };
        let profile = sample().with_overrides(&overrides);
        assert_eq!(profile.gpu, "RTX 3070");
        assert_eq!(profile.ram_gb, 32.0);
        assert_eq!(profile.cpu, "AMD Ryzen 5 3600");
        assert_eq!(profile.vram_mb, 6144.0);
    }

    #[test]
    fn merged_prefers_later_values() {
        let base = HardwareOverrides {
            cpu: Some("i5".to_string()),
            ram_gb: Some(8.0),
            ..Default::default()
        };
        let over = HardwareOverrides {
            cpu: Some("i9".to_string()),
            ..Default::default()
        };
        let merged = base.merged(&over);
        assert_eq!(merged.cpu.as_deref(), Some("i9"));
        assert_eq!(merged.ram_gb, Some(8.0));
        assert_eq!(merged.gpu, None);
    }

    #[test]
    fn format_amount_variants() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(8.0), "8");
        assert_eq!(format_amount(6144.0), "6144");
        assert_eq!(format_amount(15.55), "15.55");
        assert_eq!(format_amount(3.10), "3.1");
    }

    #[test]
    fn round2_rounds_half_up() {
        assert_eq!(round2(15.554), 15.55);
        assert_eq!(round2(15.556), 15.56);
    }

    #[test]
    fn serializes_with_display_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["RAM (GB)"], 15.55);
        assert_eq!(json["CPU Architecture"], "x86_64");
    }
}
