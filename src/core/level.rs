//! Log level definitions and the default level table

use super::color::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub const INFO: &str = "INFO";
pub const INIT: &str = "INIT";
pub const ERROR: &str = "ERROR";
pub const FATAL: &str = "FATAL";
pub const DEBUG: &str = "DEBUG";
pub const SUCCESS: &str = "SUCCESS";
pub const WARNING: &str = "WARNING";

/// A named log level with its terminal color attributes.
///
/// Levels are configuration values: built once, shared as `Arc<Level>`
/// across every message that carries them, and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub foreground: Color,
    pub foreground_hi: bool,
    pub background: Color,
    pub background_hi: bool,
}

impl Level {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn foreground_hi(mut self, color: Color) -> Self {
        self.foreground = color;
        self.foreground_hi = true;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn background_hi(mut self, color: Color) -> Self {
        self.background = color;
        self.background_hi = true;
        self
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Name-keyed table of levels, shared read-only across loggers.
///
/// Lookups for unknown names fall back to the INFO style so a typo in a
/// level name garbles colors rather than dropping the message.
#[derive(Debug, Clone)]
pub struct LevelTable {
    levels: HashMap<String, Arc<Level>>,
    fallback: Arc<Level>,
}

impl LevelTable {
    /// Build a table from explicit levels. The INFO style (or a plain
    /// default if absent) becomes the fallback for unknown names.
    pub fn new(levels: impl IntoIterator<Item = Level>) -> Self {
        let levels: HashMap<String, Arc<Level>> = levels
            .into_iter()
            .map(|level| (level.name.clone(), Arc::new(level)))
            .collect();
        let fallback = levels
            .get(INFO)
            .cloned()
            .unwrap_or_else(|| Arc::new(Level::new(INFO).foreground(Color::Green)));
        Self { levels, fallback }
    }

    /// Look up a level by name, falling back to the INFO style.
    pub fn get(&self, name: &str) -> Arc<Level> {
        self.levels.get(name).cloned().unwrap_or_else(|| {
            Arc::new(Level {
                name: name.to_string(),
                ..(*self.fallback).clone()
            })
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.levels.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl Default for LevelTable {
    /// The stock level table.
    fn default() -> Self {
        Self::new([
            Level::new(INFO).foreground(Color::Green),
            Level::new(INIT).foreground_hi(Color::Blue),
            Level::new(WARNING).background_hi(Color::Yellow),
            Level::new(ERROR).foreground(Color::White).background(Color::Red),
            Level::new(FATAL)
                .foreground(Color::White)
                .background_hi(Color::Red),
            Level::new(SUCCESS).foreground(Color::Cyan),
            Level::new(DEBUG).background_hi(Color::Yellow),
        ])
    }
}
