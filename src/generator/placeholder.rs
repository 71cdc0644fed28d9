//! Placeholder substitution for generator templates.
//!
//! Seven literal tokens are recognised. Substitution is a single left-to-right
//! pass: text produced by a replacement is never scanned again, so a component
//! path that happens to contain `{{name}}` comes out verbatim.

use crate::ext::NameExt;
use serde_json::{Map, Value};

pub const NAME: &str = "{{name}}";
pub const CLASS_NAME: &str = "{{className}}";
pub const KEBAB_NAME: &str = "{{kebabName}}";
pub const CAMEL_NAME: &str = "{{camelName}}";
pub const TITLE_NAME: &str = "{{titleName}}";
pub const SNAKE_NAME: &str = "{{snakeName}}";
pub const TARGET_PATH: &str = "{{targetPath}}";

/// Every recognised token, in the order they are documented.
pub const TOKENS: [&str; 7] =
    [NAME, CLASS_NAME, KEBAB_NAME, CAMEL_NAME, TITLE_NAME, SNAKE_NAME, TARGET_PATH];

const TOKEN_OPEN: &str = "{{";

/// Token values derived from one component name and its target path.
#[derive(Debug, Clone)]
pub struct Placeholders {
    values: [(&'static str, String); 7],
}

impl Placeholders {
    pub fn new(name: &str, target_path: &str) -> Self {
        Self {
            values: [
                (NAME, name.to_string()),
                (CLASS_NAME, name.to_pascal_case()),
                (KEBAB_NAME, name.to_string()),
                (CAMEL_NAME, name.to_camel_case()),
                (TITLE_NAME, name.to_title_case()),
                (SNAKE_NAME, name.to_snake_case()),
                (TARGET_PATH, target_path.to_string()),
            ],
        }
    }

    /// Value substituted for `token`, if it is one of the recognised tokens.
    pub fn value_of(&self, token: &str) -> Option<&str> {
        self.values.iter().find(|(t, _)| *t == token).map(|(_, v)| v.as_str())
    }

    /// Replaces every occurrence of every token in `text`.
    pub fn render(&self, text: &str) -> String {
        let mut rendered = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find(TOKEN_OPEN) {
            rendered.push_str(&rest[..start]);
            let tail = &rest[start..];
            match self.values.iter().find(|(token, _)| tail.starts_with(token)) {
                Some((token, value)) => {
                    rendered.push_str(value);
                    rest = &tail[token.len()..];
                }
                None => {
                    // Advance by one brace so `{{{name}}` still matches at the next offset.
                    rendered.push('{');
                    rest = &tail[1..];
                }
            }
        }
        rendered.push_str(rest);
        rendered
    }

    /// Renders every string and object key inside a JSON value.
    pub fn render_json(&self, value: &Value) -> Value {
        match value {
            Value::String(s) => Value::String(self.render(s)),
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.render_json(item)).collect())
            }
            Value::Object(map) => {
                let rendered: Map<String, Value> = map
                    .iter()
                    .map(|(key, item)| (self.render(key), self.render_json(item)))
                    .collect();
                Value::Object(rendered)
            }
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replaces_every_token() {
        let placeholders = Placeholders::new("chat-panel", "src/extensions/chat-panel");
        let text = "{{name}} {{className}} {{kebabName}} {{camelName}} {{titleName}} {{snakeName}} {{targetPath}}";
        assert_eq!(
            placeholders.render(text),
            "chat-panel ChatPanel chat-panel chatPanel Chat Panel chat_panel src/extensions/chat-panel"
        );
    }

    #[test]
    fn replaces_all_occurrences() {
        let placeholders = Placeholders::new("router", "");
        assert_eq!(
            placeholders.render("class {{className}} extends Base<{{className}}> {}"),
            "class Router extends Base<Router> {}"
        );
    }

    #[test]
    fn leaves_token_free_text_untouched() {
        let placeholders = Placeholders::new("router", "src/modules/router");
        let text = "export const x = { a: 1 };\n{{ notAToken }} {{unknown}} {single}";
        assert_eq!(placeholders.render(text), text);
    }

    #[test]
    fn leaves_no_tokens_behind() {
        let placeholders = Placeholders::new("my-widget", "out/my-widget");
        let text: String = TOKENS.iter().map(|t| format!("[{t}]{t}")).collect();
        let rendered = placeholders.render(&text);
        for token in TOKENS {
            assert!(!rendered.contains(token), "{token} survived in {rendered}");
        }
    }

    #[test]
    fn does_not_resubstitute_inserted_values() {
        let placeholders = Placeholders::new("widget", "dir/{{className}}");
        assert_eq!(placeholders.render("{{targetPath}}"), "dir/{{className}}");
    }

    #[test]
    fn matches_token_after_extra_brace() {
        let placeholders = Placeholders::new("widget", "");
        assert_eq!(placeholders.render("{{{name}}}"), "{widget}");
    }

    #[test]
    fn renders_json_strings_and_keys() {
        let placeholders = Placeholders::new("chat-panel", "src/extensions/chat-panel");
        let entry = json!({
            "tag": "{{name}}",
            "{{camelName}}": true,
            "path": "{{targetPath}}/component.ts",
            "order": 3,
            "labels": ["{{titleName}}", null]
        });
        assert_eq!(
            placeholders.render_json(&entry),
            json!({
                "tag": "chat-panel",
                "chatPanel": true,
                "path": "src/extensions/chat-panel/component.ts",
                "order": 3,
                "labels": ["Chat Panel", null]
            })
        );
    }

    #[test]
    fn exposes_token_values() {
        let placeholders = Placeholders::new("chat-panel", "t");
        assert_eq!(placeholders.value_of(CLASS_NAME), Some("ChatPanel"));
        assert_eq!(placeholders.value_of("{{nope}}"), None);
    }
}
