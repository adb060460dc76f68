//! Per-plugin export state: options and file name counters.

use crate::output::FileKind;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

/// Options for an export session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportOptions {
    /// Prefix of every generated file name.
    pub base_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            base_name: "blox_ui".to_string(),
        }
    }
}

/// Hands out file names, one counter per file kind.
///
/// The first file of a kind is `<base>_<ext>`, later ones `<base>_<ext>_<n>`
/// with `n` counting from 1. Counters only move forward and are safe to
/// share between threads.
#[derive(Debug, Default)]
pub struct ExportSession {
    options: ExportOptions,
    lua: AtomicU32,
    rbxmx: AtomicU32,
}

impl ExportSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ExportOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    fn counter(&self, kind: FileKind) -> &AtomicU32 {
        match kind {
            FileKind::Lua => &self.lua,
            FileKind::Rbxmx => &self.rbxmx,
        }
    }

    /// Claim the next name for `kind`.
    pub fn next_name(&self, kind: FileKind) -> String {
        let n = self.counter(kind).fetch_add(1, Ordering::Relaxed);
        if n == 0 {
            format!("{}_{}", self.options.base_name, kind.extension())
        } else {
            format!("{}_{}_{}", self.options.base_name, kind.extension(), n)
        }
    }

    /// How many names have been claimed for `kind`.
    pub fn issued(&self, kind: FileKind) -> u32 {
        self.counter(kind).load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_names_per_kind() {
        let session = ExportSession::new();
        assert_eq!(session.next_name(FileKind::Lua), "blox_ui_lua");
        assert_eq!(session.next_name(FileKind::Lua), "blox_ui_lua_1");
        assert_eq!(session.next_name(FileKind::Rbxmx), "blox_ui_rbxmx");
        assert_eq!(session.next_name(FileKind::Lua), "blox_ui_lua_2");
        assert_eq!(session.issued(FileKind::Lua), 3);
        assert_eq!(session.issued(FileKind::Rbxmx), 1);
    }

    #[test]
    fn test_custom_base_name() {
        let session = ExportSession::with_options(ExportOptions {
            base_name: "hud".into(),
        });
        assert_eq!(session.next_name(FileKind::Rbxmx), "hud_rbxmx");
    }

    #[test]
    fn test_options_from_json() {
        let options: ExportOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ExportOptions::default());
        let options: ExportOptions = serde_json::from_str(r#"{"baseName":"menu"}"#).unwrap();
        assert_eq!(options.base_name, "menu");
    }

    #[test]
    fn test_concurrent_names_are_unique() {
        let session = Arc::new(ExportSession::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let session = Arc::clone(&session);
                thread::spawn(move || {
                    (0..25)
                        .map(|_| session.next_name(FileKind::Lua))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut names = HashSet::new();
        for handle in handles {
            for name in handle.join().unwrap() {
                assert!(names.insert(name));
            }
        }
        assert_eq!(names.len(), 200);
        assert!(names.contains("blox_ui_lua"));
        assert!(names.contains("blox_ui_lua_199"));
    }
}
