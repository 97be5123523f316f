use faro_core::targets::builtin;
use std::path::Path;

pub fn list() -> Result<(), faro_core::error::FaroError> {
    println!("Available predefined target catalogs:\n");
    for name in builtin::PRESETS {
        let catalog = builtin::load_preset(name)?;
        println!("  {:<12} {}", name, catalog.name);
        if let Some(ref desc) = catalog.description {
            println!("               {}", desc);
        }
        println!("               primary: {}", catalog.primary);
        println!("               secondary: {}", catalog.secondary);
        println!("               {} target form(s)", catalog.targets.len());
        println!();
    }
    Ok(())
}

pub fn schema() -> Result<(), faro_core::error::FaroError> {
    print!(
        r#"JSON Catalog Schema
===================

A catalog file names the monitored targets of one report family and the
text markers that anchor their records in the extracted page text.

Top-level fields:
  name                (string, required)  Human-readable catalog name
  description         (string, optional)  What this catalog covers
  declaration_marker  (string, required)  Substring of the line announcing
                                          which target a statistics block
                                          describes
  statistics_marker   (string, required)  Substring of the line carrying the
                                          up/down percentages and durations
  conflict_markers    (array, optional)   Substrings that disqualify a
                                          declaration line in single-target
                                          mode (subpath forms embedding
                                          another target as a prefix)
  primary             (string, required)  Canonical identity feeding the
                                          primary summary counters
  secondary           (string, required)  Canonical identity feeding the
                                          secondary summary counters
  targets             (array, required)   Ordered target forms (see below)

Each entry in "targets":
  literal             (string, required)  Substring searched for in
                                          declaration lines
  canonical           (string, required)  Identity emitted in output records

Order targets from most to least specific: discovery-mode classification
takes the first literal contained in the line, so a subpath form like
"site.example/foo" must come before the bare "site.example" it contains.
primary and secondary must match the canonical identity of some entry.

Example:
{{
  "name": "My monitoring catalog",
  "declaration_marker": "Probe, Group, Device:",
  "statistics_marker": "Uptime Stats:",
  "conflict_markers": ["/foo"],
  "primary": "https://site.example/",
  "secondary": "backup.site.example/",
  "targets": [
    {{ "literal": "site.example/foo", "canonical": "site.example/foo" }},
    {{ "literal": "backup.site.example", "canonical": "backup.site.example/" }},
    {{ "literal": "> https://site.example/", "canonical": "https://site.example/" }}
  ]
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), faro_core::error::FaroError> {
    let catalog = faro_core::targets::load_catalog(file)?;

    println!("Catalog '{}' is valid.", catalog.name);
    println!("  Targets: {} form(s)", catalog.targets.len());
    println!("  Primary: {}", catalog.primary);
    println!("  Secondary: {}", catalog.secondary);

    // Ordering pitfalls are warnings, not errors
    let mut warnings = Vec::new();
    for (i, earlier) in catalog.targets.iter().enumerate() {
        for later in &catalog.targets[i + 1..] {
            if later.literal.contains(&earlier.literal) {
                warnings.push(format!(
                    "literal '{}' contains earlier literal '{}' and can never match \
                     (order targets most-specific first)",
                    later.literal, earlier.literal
                ));
            }
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
