//! Interactive confirmation for destructive commands.

use crate::error::Result;
use dialoguer::Confirm;

/// Asks a yes/no question defaulting to "no". `skip` answers "yes" without
/// touching the terminal.
pub fn confirm(skip: bool, prompt: String) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}
