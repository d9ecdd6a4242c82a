//! The `specs` command: show the local hardware profile.

use tracing::debug;

use crate::cli::args::SpecsArgs;
use crate::config::PixelBuddyConfig;
use crate::error::Result;
use crate::hardware::{HardwareOverrides, HardwareProbe, HardwareProfile};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::specs_table;

/// Probe the machine and apply overrides.
///
/// Command-line overrides win over configured ones, which win over probed
/// values.
pub fn effective_profile(
    probe: &dyn HardwareProbe,
    configured: &HardwareOverrides,
    cli: &HardwareOverrides,
) -> HardwareProfile {
    let overrides = configured.merged(cli);
    debug!("Hardware overrides: {:?}", overrides);
    probe.probe().with_overrides(&overrides)
}

/// The specs command implementation.
pub struct SpecsCommand<'a> {
    probe: &'a dyn HardwareProbe,
    config: &'a PixelBuddyConfig,
    args: SpecsArgs,
}

impl<'a> SpecsCommand<'a> {
    /// Create a new specs command.
    pub fn new(probe: &'a dyn HardwareProbe, config: &'a PixelBuddyConfig, args: SpecsArgs) -> Self {
        Self {
            probe,
            config,
            args,
        }
    }
}

impl Command for SpecsCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let profile = effective_profile(
            self.probe,
            &self.config.hardware,
            &self.args.hardware.overrides(),
        );

        if self.args.json {
            let json = serde_json::to_string_pretty(&profile)
                .map_err(|e| anyhow::anyhow!("Failed to serialize profile: {}", e))?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Your System Specs");
        ui.data(&specs_table(&profile).render());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::HardwareArgs;
    use crate::ui::MockUI;

    struct FixedProbe(HardwareProfile);

    impl HardwareProbe for FixedProbe {
        fn probe(&self) -> HardwareProfile {
            self.0.clone()
        }
    }

    fn probe() -> FixedProbe {
        FixedProbe(HardwareProfile {
            os: "Linux 6.1.0".to_string(),
            cpu: "Intel Core i5-9400".to_string(),
            cpu_arch: "x86_64".to_string(),
            ram_gb: 15.55,
            gpu: "NVIDIA GeForce GTX 1060".to_string(),
            vram_mb: 6144.0,
            disk_gb: 465.76,
        })
    }

    #[test]
    fn prints_table() {
        let probe = probe();
        let config = PixelBuddyConfig::default();
        let cmd = SpecsCommand::new(&probe, &config, SpecsArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.headers(), ["Your System Specs"]);
        assert!(ui.has_data("Intel Core i5-9400"));
        assert!(ui.has_data("15.55"));
        assert!(ui.has_data("CPU Architecture"));
    }

    #[test]
    fn prints_json_with_display_keys() {
        let probe = probe();
        let config = PixelBuddyConfig::default();
        let args = SpecsArgs {
            json: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();

        SpecsCommand::new(&probe, &config, args)
            .execute(&mut ui)
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.data_text()).unwrap();
        assert_eq!(json["CPU"], "Intel Core i5-9400");
        assert_eq!(json["VRAM (MB)"], 6144.0);
        assert!(ui.headers().is_empty());
    }

    #[test]
    fn cli_overrides_beat_config_overrides() {
        let mut config = PixelBuddyConfig::default();
        config.hardware.gpu = Some("RTX 2060".to_string());
        config.hardware.ram_gb = Some(32.0);

        let cli = HardwareArgs {
            gpu: Some("RTX 4070".to_string()),
            ..Default::default()
        };

        let profile = effective_profile(&probe(), &config.hardware, &cli.overrides());

        assert_eq!(profile.gpu, "RTX 4070");
        assert_eq!(profile.ram_gb, 32.0);
        assert_eq!(profile.cpu, "Intel Core i5-9400");
    }
}
