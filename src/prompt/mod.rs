use crate::{Error, Result};
use std::collections::HashMap;

/// A prompt template with named `{placeholder}` fields.
///
/// Placeholder names are recorded at construction time in order of first
/// appearance so callers (the console harness in particular) can enumerate the
/// parameters a template requires. Doubled braces are literal braces.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
    placeholders: Vec<String>,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        let placeholders = parse_placeholders(&template);
        Self {
            template,
            placeholders,
        }
    }

    /// Placeholder names in order of first appearance, deduplicated.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Substitutes every placeholder from `args`.
    ///
    /// A placeholder with no corresponding entry fails with
    /// [`Error::MissingParameter`]; a blank is never substituted silently.
    /// Entries in `args` that the template does not mention are ignored.
    pub fn render(&self, args: &HashMap<String, String>) -> Result<String> {
        let mut out = String::with_capacity(self.template.len());
        let mut chars = self.template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    if chars.peek() == Some(&'{') {
                        chars.next();
                        out.push('{');
                        continue;
                    }
                    let mut name = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        // Unterminated field, keep it literal.
                        out.push('{');
                        out.push_str(&name);
                        break;
                    }
                    if name.is_empty() {
                        // An empty field is not a placeholder; keep it literal,
                        // mirroring what placeholders() records.
                        out.push_str("{}");
                        continue;
                    }
                    match args.get(&name) {
                        Some(value) => out.push_str(value),
                        None => return Err(Error::MissingParameter { name }),
                    }
                }
                '}' => {
                    if chars.peek() == Some(&'}') {
                        chars.next();
                    }
                    out.push('}');
                }
                _ => out.push(c),
            }
        }

        Ok(out)
    }
}

fn parse_placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    continue;
                }
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if closed && !name.is_empty() && !names.iter().any(|n| n == &name) {
                    names.push(name);
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
            }
            _ => {}
        }
    }

    names
}
