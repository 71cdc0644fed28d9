use crate::constants::validation::{
    INVALID_COMPONENT_NAME, INVALID_PROJECT_NAME, NAME_PATTERN,
};
use crate::error::{Error, Result};
use regex::Regex;

fn matches_name_grammar(name: &str) -> bool {
    match Regex::new(NAME_PATTERN) {
        Ok(re) => re.is_match(name),
        Err(err) => {
            log::error!("Invalid name pattern '{NAME_PATTERN}': {err}");
            false
        }
    }
}

/// Validates a component name: one or more lowercase ASCII letters, digits or hyphens.
pub fn validate_component_name(name: &str) -> Result<()> {
    if matches_name_grammar(name) {
        Ok(())
    } else {
        Err(Error::InvalidNameError {
            name: name.to_string(),
            reason: INVALID_COMPONENT_NAME.to_string(),
        })
    }
}

/// Validates a project name; same grammar as components.
pub fn validate_project_name(name: &str) -> Result<()> {
    if matches_name_grammar(name) {
        Ok(())
    } else {
        Err(Error::InvalidNameError {
            name: name.to_string(),
            reason: INVALID_PROJECT_NAME.to_string(),
        })
    }
}
