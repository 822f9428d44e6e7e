mod loader;
mod record;

#[cfg(test)]
mod tests;

pub use loader::{load_roster, parse_roster_json, parse_roster_lines};
pub use record::{Group, Person};
