//! Name-form conversions for kebab-case component names.
//!
//! Component names follow the `[a-z0-9-]+` grammar; every conversion here is
//! total over arbitrary strings anyway and never fails.

/// Derived spellings of a kebab-case identifier.
pub trait NameExt {
    /// `chat-panel` -> `ChatPanel`
    fn to_pascal_case(&self) -> String;

    /// `chat-panel` -> `chatPanel`
    fn to_camel_case(&self) -> String;

    /// `chat-panel` -> `Chat Panel`
    fn to_title_case(&self) -> String;

    /// `chat-panel` -> `chat_panel`
    fn to_snake_case(&self) -> String;
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl NameExt for str {
    fn to_pascal_case(&self) -> String {
        self.split('-').map(capitalize).collect()
    }

    fn to_camel_case(&self) -> String {
        let pascal = self.to_pascal_case();
        let mut chars = pascal.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn to_title_case(&self) -> String {
        self.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
    }

    fn to_snake_case(&self) -> String {
        self.replace('-', "_")
    }
}
