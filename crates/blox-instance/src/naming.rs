//! Luau variable names for generated scripts.

use convert_case::{Case, Casing};
use indexmap::IndexSet;

const LUA_KEYWORDS: &[&str] = &[
    "and", "break", "continue", "do", "else", "elseif", "end", "export", "false", "for",
    "function", "if", "in", "local", "nil", "not", "or", "repeat", "return", "then", "true",
    "type", "typeof", "until", "while",
];

/// Turn an instance name into a camelCase Luau identifier.
pub fn identifier(name: &str) -> String {
    let camel = name.to_case(Case::Camel);
    let mut ident: String = camel
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    if ident.is_empty() {
        ident.push_str("instance");
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if LUA_KEYWORDS.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

/// Hands out unique variable names within one script.
#[derive(Debug, Default)]
pub struct VariableNames {
    used: IndexSet<String>,
}

impl VariableNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a name derived from `name`, adding a numeric suffix on clashes.
    pub fn claim(&mut self, name: &str) -> String {
        let base = identifier(name);
        if self.used.insert(base.clone()) {
            return base;
        }
        let mut n = 1u32;
        loop {
            let candidate = format!("{}{}", base, n);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Names claimed so far, in order.
    pub fn claimed(&self) -> impl Iterator<Item = &str> {
        self.used.iter().map(String::as_str)
    }
}
