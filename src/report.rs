use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::annotator::AnnotatedGroup;

/// Serialize the annotated groups as pretty-printed JSON
pub fn to_json(groups: &[AnnotatedGroup]) -> Result<String> {
    serde_json::to_string_pretty(groups).context("Failed to serialize match report")
}

/// Write a match report to disk
pub fn write_report(groups: &[AnnotatedGroup], path: &Path) -> Result<()> {
    let json = to_json(groups)?;
    fs::write(path, json)
        .context(format!("Failed to write match report: {}", path.display()))?;

    eprintln!("[report] ✓ Wrote {} groups to {}", groups.len(), path.display());
    Ok(())
}

/// Load a previously written match report
pub fn read_report(path: &Path) -> Result<Vec<AnnotatedGroup>> {
    let contents = fs::read_to_string(path)
        .context(format!("Failed to read match report: {}", path.display()))?;

    serde_json::from_str(&contents).context("Failed to parse match report JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Person;

    fn sample_groups() -> Vec<AnnotatedGroup> {
        vec![AnnotatedGroup {
            matches: vec![Person::named("Ada"), Person::named("Grace")],
            common_attributes: vec!["chess".to_string()],
        }]
    }

    #[test]
    fn test_report_shape() {
        let json = to_json(&sample_groups()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        // Downstream renderers rely on these two keys
        assert!(value[0].get("matches").is_some());
        assert!(value[0].get("common_attributes").is_some());
    }

    #[test]
    fn test_report_round_trip() {
        let groups = sample_groups();

        let json = to_json(&groups).unwrap();
        let parsed: Vec<AnnotatedGroup> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].matches[0].name, "Ada");
        assert_eq!(parsed[0].common_attributes, groups[0].common_attributes);
    }
}
