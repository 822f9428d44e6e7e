use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::error::MatchError;
use crate::roster::Person;

/// Load a roster from disk.
///
/// `.json` files hold an array of person records; any other file is treated
/// as a newline-delimited name list, one person per line.
pub fn load_roster(path: &Path) -> Result<Vec<Person>> {
    let contents = fs::read_to_string(path)
        .context(format!("Failed to read roster file: {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let roster = if is_json {
        parse_roster_json(&contents)
            .context(format!("Failed to load roster: {}", path.display()))?
    } else {
        parse_roster_lines(&contents)
            .context(format!("Failed to load roster: {}", path.display()))?
    };

    eprintln!("[roster] ✓ Loaded {} people from {}", roster.len(), path.display());
    Ok(roster)
}

/// Parse a newline-delimited name list.
///
/// A blank interior line is a malformed record and rejects the whole roster
/// rather than being silently grouped. A single trailing newline is accepted.
pub fn parse_roster_lines(contents: &str) -> Result<Vec<Person>, MatchError> {
    let contents = contents.strip_suffix('\n').unwrap_or(contents);
    if contents.is_empty() {
        return Ok(Vec::new());
    }

    let mut roster = Vec::new();
    for (index, line) in contents.split('\n').enumerate() {
        let name = line.trim();
        if name.is_empty() {
            return Err(MatchError::InvalidArgument(format!(
                "blank roster entry on line {}",
                index + 1
            )));
        }
        roster.push(Person::named(name));
    }

    Ok(roster)
}

/// Parse a JSON array of person records.
pub fn parse_roster_json(contents: &str) -> Result<Vec<Person>> {
    let roster: Vec<Person> =
        serde_json::from_str(contents).context("Failed to parse roster JSON")?;

    for person in &roster {
        if person.name.trim().is_empty() {
            return Err(MatchError::InvalidArgument(
                "roster record with a blank name".to_string(),
            )
            .into());
        }
    }

    Ok(roster)
}
