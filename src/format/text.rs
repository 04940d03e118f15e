//! Human-readable text output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::viewmodel::State;

/// Shown instead of the list when loading failed
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch locations";

/// Text formatter - outputs a numbered list
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable list"
    }

    fn format(&self, state: &State) -> Result<String> {
        let output = match state {
            State::Loading => "Loading…".to_string(),
            State::Error => FETCH_FAILED_MESSAGE.to_string(),
            State::Data { locations } if locations.is_empty() => "No locations".to_string(),
            State::Data { locations } => {
                let mut output = String::new();
                for (index, item) in locations.iter().enumerate() {
                    output.push_str(&format!(
                        "{:>3}. {} ({:.6}, {:.6})\n",
                        index, item.name, item.coordinates.latitude, item.coordinates.longitude
                    ));
                }
                output.truncate(output.trim_end().len());
                output
            }
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{amsterdam, mumbai};

    #[test]
    fn test_text_format() {
        let state = State::data(vec![amsterdam(), mumbai()], "?");
        let output = TextFormatter.format(&state).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  0. Amsterdam (52.354750, 4.83392"));
        assert!(lines[1].contains("Mumbai"));
    }

    #[test]
    fn test_text_format_other_states() {
        assert_eq!(TextFormatter.format(&State::Error).unwrap(), FETCH_FAILED_MESSAGE);
        assert_eq!(TextFormatter.format(&State::Loading).unwrap(), "Loading…");
        assert_eq!(
            TextFormatter.format(&State::Data { locations: vec![] }).unwrap(),
            "No locations"
        );
    }
}
