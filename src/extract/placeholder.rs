//! Placeholder token scanning.

use regex::Regex;

/// Placeholder syntaxes, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderSyntax {
    /// `${name}`
    DollarBrace,
    /// `{name}`
    Brace,
}

/// A placeholder token found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Field name, trimmed of surrounding whitespace
    pub name: &'a str,
    /// Syntax the token was written in
    pub syntax: PlaceholderSyntax,
    /// Byte offset of the token in the scanned text
    pub offset: usize,
}

/// Scanner for `${name}` and `{name}` tokens.
///
/// At any position `${...}` is tried first; `{...}` is only considered
/// where no `${...}` token starts.
pub struct PlaceholderScanner {
    pattern: Regex,
}

impl PlaceholderScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\$\{([^{}]*)\}|\{([^{}]*)\}").unwrap(),
        }
    }

    /// Scan text and return its placeholders in order of appearance.
    ///
    /// Tokens whose name is empty after trimming are skipped.
    pub fn scan<'a>(&self, text: &'a str) -> Vec<Placeholder<'a>> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let (group, syntax) = match caps.get(1) {
                    Some(m) => (m, PlaceholderSyntax::DollarBrace),
                    None => (caps.get(2)?, PlaceholderSyntax::Brace),
                };
                let name = group.as_str().trim();
                if name.is_empty() {
                    return None;
                }
                Some(Placeholder {
                    name,
                    syntax,
                    offset: caps.get(0)?.start(),
                })
            })
            .collect()
    }

    /// Check if text contains at least one placeholder.
    pub fn contains_placeholder(&self, text: &str) -> bool {
        !self.scan(text).is_empty()
    }
}

impl Default for PlaceholderScanner {
    fn default() -> Self {
        Self::new()
    }
}
