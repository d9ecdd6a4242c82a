//! Local hardware detection.
//!
//! Every value is best-effort: a source that is missing or unreadable
//! leaves the field at its fallback (`"Unknown"` or `0`) and is logged at
//! debug level. Probing never fails.
//!
//! # Example
//!
//! ```no_run
//! use pixelbuddy::hardware::{HardwareProbe, SystemProbe};
//!
//! let profile = SystemProbe::new().probe();
//! println!("{} with {} GB RAM", profile.cpu, profile.ram_gb);
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::shell::{execute_quiet, os_family};

use super::profile::{round2, HardwareProfile, UNKNOWN};

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Source of a [`HardwareProfile`].
pub trait HardwareProbe {
    /// Measure the machine.
    fn probe(&self) -> HardwareProfile;
}

/// Probe that reads the running system.
#[derive(Debug, Clone)]
pub struct SystemProbe {
    proc_root: PathBuf,
    disk_root: PathBuf,
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemProbe {
    /// Probe the real `/proc` and the root filesystem.
    pub fn new() -> Self {
        Self {
            proc_root: PathBuf::from("/proc"),
            disk_root: PathBuf::from("/"),
        }
    }

    /// Probe with a custom `/proc` directory (for testing).
    pub fn with_proc_root(proc_root: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: proc_root.into(),
            disk_root: PathBuf::from("/"),
        }
    }

    fn read_proc(&self, name: &str) -> Option<String> {
        let path = self.proc_root.join(name);
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                debug!("Cannot read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn os(&self) -> String {
        let family = os_family();
        let release = if cfg!(target_os = "linux") {
            self.read_proc("sys/kernel/osrelease")
                .map(|r| r.trim().to_string())
        } else if cfg!(unix) {
            execute_quiet("uname", &["-r"])
        } else {
            None
        };

        match release {
            Some(release) if !release.is_empty() => format!("{} {}", family, release),
            _ => family,
        }
    }

    fn cpu(&self) -> Option<String> {
        if cfg!(target_os = "linux") {
            return self.read_proc("cpuinfo").and_then(|c| parse_cpuinfo(&c));
        }
        if cfg!(target_os = "macos") {
            return execute_quiet("sysctl", &["-n", "machdep.cpu.brand_string"]);
        }
        std::env::var("PROCESSOR_IDENTIFIER").ok()
    }

    fn ram_gb(&self) -> Option<f64> {
        if cfg!(target_os = "linux") {
            return self.read_proc("meminfo").and_then(|m| parse_meminfo(&m));
        }
        let bytes = if cfg!(target_os = "macos") {
            execute_quiet("sysctl", &["-n", "hw.memsize"])
        } else if cfg!(windows) {
            execute_quiet(
                "powershell",
                &[
                    "-NoProfile",
                    "-Command",
                    "(Get-CimInstance Win32_ComputerSystem).TotalPhysicalMemory",
                ],
            )
        } else {
            None
        }?;
        let bytes: f64 = bytes.trim().parse().ok()?;
        Some(round2(bytes / BYTES_PER_GB))
    }

    fn gpu(&self) -> Option<(String, f64)> {
        let output = execute_quiet(
            "nvidia-smi",
            &[
                "--query-gpu=name,memory.total",
                "--format=csv,noheader,nounits",
            ],
        )?;
        parse_nvidia_smi(&output)
    }
}

impl HardwareProbe for SystemProbe {
    fn probe(&self) -> HardwareProfile {
        let (gpu, vram_mb) = self.gpu().unwrap_or_else(|| (UNKNOWN.to_string(), 0.0));

        let profile = HardwareProfile {
            os: self.os(),
            cpu: self.cpu().unwrap_or_else(|| UNKNOWN.to_string()),
            cpu_arch: std::env::consts::ARCH.to_string(),
            ram_gb: self.ram_gb().unwrap_or(0.0),
            gpu,
            vram_mb,
            disk_gb: disk_total_bytes(&self.disk_root)
                .map(|b| round2(b as f64 / BYTES_PER_GB))
                .unwrap_or(0.0),
        };

        debug!("Probed hardware: {:?}", profile);
        profile
    }
}

/// Extract the first `model name` from `/proc/cpuinfo`.
pub fn parse_cpuinfo(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        let value = value.trim();
        (key.trim() == "model name" && !value.is_empty()).then(|| value.to_string())
    })
}

/// Extract `MemTotal` from `/proc/meminfo`, in GB rounded to two decimals.
pub fn parse_meminfo(content: &str) -> Option<f64> {
    let line = content.lines().find(|l| l.starts_with("MemTotal:"))?;
    let kib: f64 = line
        .trim_start_matches("MemTotal:")
        .split_whitespace()
        .next()?
        .parse()
        .ok()?;
    Some(round2(kib * 1024.0 / BYTES_PER_GB))
}

/// Pick the GPU with the most memory from `nvidia-smi` CSV output.
///
/// Each line is `name, memory_mb`.
pub fn parse_nvidia_smi(output: &str) -> Option<(String, f64)> {
    output
        .lines()
        .filter_map(|line| {
            let (name, memory) = line.rsplit_once(',')?;
            let memory: f64 = memory.trim().parse().ok()?;
            Some((name.trim().to_string(), memory))
        })
        .fold(None, |best: Option<(String, f64)>, gpu| match best {
            Some(b) if b.1 >= gpu.1 => Some(b),
            _ => Some(gpu),
        })
}

/// Total size of the filesystem holding `path`, in bytes.
#[cfg(unix)]
fn disk_total_bytes(path: &Path) -> Option<u64> {
    use std::os::unix::ffi::OsStrExt;

    let c_path = std::ffi::CString::new(path.as_os_str().as_bytes()).ok()?;
    // SAFETY: statvfs is plain old data; zeroed is a valid initial value.
    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    // SAFETY: c_path is NUL-terminated and stat is a valid out-pointer.
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
    if rc != 0 {
        debug!("statvfs({}) failed", path.display());
        return None;
    }
    // Field widths differ between platforms.
    #[allow(clippy::unnecessary_cast)]
    let total = stat.f_blocks as u64 * stat.f_frsize as u64;
    Some(total)
}

#[cfg(not(unix))]
fn disk_total_bytes(_path: &Path) -> Option<u64> {
    None
}
