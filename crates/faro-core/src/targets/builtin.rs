use crate::error::FaroError;
use crate::targets::schema::TargetCatalog;

const PRTG_CABA_JSON: &str = include_str!("../../../../targets/prtg-caba.json");

/// Available predefined target catalogs.
pub const PRESETS: &[&str] = &["prtg-caba"];

/// Load a predefined target catalog by name.
pub fn load_preset(name: &str) -> Result<TargetCatalog, FaroError> {
    match name {
        "prtg-caba" => {
            let catalog: TargetCatalog = serde_json::from_str(PRTG_CABA_JSON)?;
            Ok(catalog)
        }
        _ => Err(FaroError::CatalogInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_prtg_caba_preset() {
        let catalog = load_preset("prtg-caba").unwrap();
        assert_eq!(catalog.declaration_marker, "Probe, Group, Device:");
        assert_eq!(catalog.statistics_marker, "Uptime Stats:");
        assert_eq!(catalog.targets.len(), 5);
        assert!(catalog.primary_target().is_some());
        assert!(catalog.secondary_target().is_some());
    }

    #[test]
    fn test_builtin_preset_is_valid() {
        let catalog = load_preset("prtg-caba").unwrap();
        crate::targets::validate_catalog(&catalog).unwrap();
    }

    #[test]
    fn test_subpath_literals_precede_site_root() {
        // Discovery classification is first-match: the bare site root must
        // come after every literal that contains it as a prefix.
        let catalog = load_preset("prtg-caba").unwrap();
        let root_pos = catalog
            .targets
            .iter()
            .position(|t| t.canonical == catalog.primary)
            .unwrap();
        assert_eq!(root_pos, catalog.targets.len() - 1);
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("xyz").is_err());
    }
}
