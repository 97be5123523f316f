pub mod builtin;
pub mod schema;

use crate::error::FaroError;
use schema::TargetCatalog;
use std::path::Path;

/// Load a target catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<TargetCatalog, FaroError> {
    let content = std::fs::read_to_string(path).map_err(|e| FaroError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let catalog: TargetCatalog =
        serde_json::from_str(&content).map_err(|e| FaroError::CatalogLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Parse a catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<TargetCatalog, FaroError> {
    let catalog: TargetCatalog = serde_json::from_str(json).map_err(FaroError::Json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Validate that a catalog is well-formed.
pub fn validate_catalog(catalog: &TargetCatalog) -> Result<(), FaroError> {
    if catalog.declaration_marker.trim().is_empty() {
        return Err(FaroError::CatalogInvalid(
            "declaration_marker must not be empty".into(),
        ));
    }

    if catalog.statistics_marker.trim().is_empty() {
        return Err(FaroError::CatalogInvalid(
            "statistics_marker must not be empty".into(),
        ));
    }

    if catalog.targets.is_empty() {
        return Err(FaroError::CatalogInvalid("targets must not be empty".into()));
    }

    for target in &catalog.targets {
        if target.literal.is_empty() {
            return Err(FaroError::CatalogInvalid(format!(
                "target '{}' has an empty literal",
                target.canonical
            )));
        }
        if target.canonical.is_empty() {
            return Err(FaroError::CatalogInvalid(format!(
                "literal '{}' has an empty canonical identity",
                target.literal
            )));
        }
    }

    if catalog.primary_target().is_none() {
        return Err(FaroError::CatalogInvalid(format!(
            "primary '{}' does not match any target's canonical identity",
            catalog.primary
        )));
    }

    if catalog.secondary_target().is_none() {
        return Err(FaroError::CatalogInvalid(format!(
            "secondary '{}' does not match any target's canonical identity",
            catalog.secondary
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_json(targets: &str) -> String {
        format!(
            r#"{{
                "name": "Test",
                "declaration_marker": "Device:",
                "statistics_marker": "Stats:",
                "primary": "https://a.example/",
                "secondary": "b.example/",
                "targets": {targets}
            }}"#
        )
    }

    #[test]
    fn test_parse_valid_catalog() {
        let json = catalog_json(
            r#"[
                { "literal": "a.example", "canonical": "https://a.example/" },
                { "literal": "b.example", "canonical": "b.example/" }
            ]"#,
        );
        let catalog = parse_catalog_str(&json).unwrap();
        assert_eq!(catalog.name, "Test");
        assert_eq!(catalog.targets.len(), 2);
        assert!(catalog.conflict_markers.is_empty());
    }

    #[test]
    fn test_empty_targets_rejected() {
        let json = catalog_json("[]");
        assert!(parse_catalog_str(&json).is_err());
    }

    #[test]
    fn test_unknown_primary_rejected() {
        let json = catalog_json(
            r#"[
                { "literal": "b.example", "canonical": "b.example/" }
            ]"#,
        );
        assert!(matches!(
            parse_catalog_str(&json),
            Err(FaroError::CatalogInvalid(_))
        ));
    }

    #[test]
    fn test_empty_literal_rejected() {
        let json = catalog_json(
            r#"[
                { "literal": "", "canonical": "https://a.example/" },
                { "literal": "b.example", "canonical": "b.example/" }
            ]"#,
        );
        assert!(parse_catalog_str(&json).is_err());
    }
}
