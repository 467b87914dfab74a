//! Case data passed explicitly to whatever needs it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::inlet_outlet::InletOutletConfig;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Case {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub inlet_outlet: InletOutletConfig,
}

impl Case {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read case file {}", path.display()))?;
        let case: Case = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse case file {}", path.display()))?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_case_serde {
            log::info!(
                "Loaded case '{}' from {} ({} inlet/outlet zones)",
                case.name,
                path.display(),
                case.inlet_outlet.zones.len()
            );
        }

        Ok(case)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).context("Failed to serialize case")?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write case file {}", path.display()))?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_case_serde {
            log::info!("Saved case '{}' to {}", self.name, path.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inlet_outlet::{DetermLimit, ExtrapolateMode, InletOutletZone};

    fn temp_case_path(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("inlet_config_{}_{}.json", tag, uuid::Uuid::new_v4()))
    }

    #[test]
    fn save_then_load_preserves_inlet_outlet_settings() {
        let mut case = Case {
            name: "dambreak".to_string(),
            ..Default::default()
        };
        case.inlet_outlet.resizetime = 1.25;
        case.inlet_outlet.extrapolatemode = ExtrapolateMode::Double;
        case.inlet_outlet.determlimit = DetermLimit::FirstOrder;
        case.inlet_outlet.zones.push(InletOutletZone::new());

        let path = temp_case_path("roundtrip");
        case.save(&path).unwrap();
        let loaded = Case::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, case);
    }

    #[test]
    fn load_reports_missing_file() {
        let path = temp_case_path("missing");
        let err = Case::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read case file"));
    }

    #[test]
    fn load_rejects_bad_extrapolate_mode() {
        let path = temp_case_path("badmode");
        fs::write(&path, r#"{"inlet_outlet": {"extrapolatemode": 9}}"#).unwrap();
        let result = Case::load(&path);
        let _ = fs::remove_file(&path);
        assert!(result.is_err());
    }
}
