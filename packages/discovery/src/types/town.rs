//! The municipality being analyzed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A municipality to discover meeting information for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Town {
    /// Town or city name, e.g. "Cambridge"
    pub name: String,

    /// Two-letter state code, e.g. "MA"
    pub state: Option<String>,
}

impl Town {
    /// Create a town with no state.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: None,
        }
    }

    /// Set the state code (normalized to uppercase).
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into().to_uppercase());
        self
    }

    /// "Cambridge, MA" when a state is set, otherwise just the name.
    pub fn location(&self) -> String {
        match &self.state {
            Some(state) => format!("{}, {}", self.name, state),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location())
    }
}

/// Whether a string is a valid two-letter state code.
pub fn is_valid_state_code(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_with_state() {
        let town = Town::new("Cambridge").with_state("ma");
        assert_eq!(town.location(), "Cambridge, MA");
        assert_eq!(town.to_string(), "Cambridge, MA");
    }

    #[test]
    fn test_location_without_state() {
        let town = Town::new("Springfield");
        assert_eq!(town.location(), "Springfield");
    }

    #[test]
    fn test_state_code_validation() {
        assert!(is_valid_state_code("VT"));
        assert!(is_valid_state_code("ma"));
        assert!(!is_valid_state_code("Vermont"));
        assert!(!is_valid_state_code("V1"));
        assert!(!is_valid_state_code(""));
    }
}
