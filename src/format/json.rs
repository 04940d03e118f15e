//! JSON output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::viewmodel::State;

/// JSON formatter - outputs the display state as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Display state as JSON"
    }

    fn format(&self, state: &State) -> Result<String> {
        Ok(serde_json::to_string_pretty(state)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{amsterdam, unknown};

    #[test]
    fn test_json_format() {
        let state = State::data(vec![amsterdam(), unknown()], "Unknown location");
        let output = JsonFormatter.format(&state).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["state"], "data");
        assert_eq!(parsed["locations"][1]["name"], "Unknown location");
        assert_eq!(parsed["locations"][1]["coordinates"]["longitude"], -3.7495758);
    }

    #[test]
    fn test_json_format_error() {
        let output = JsonFormatter.format(&State::Error).unwrap();
        let parsed: State = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, State::Error);
    }
}
