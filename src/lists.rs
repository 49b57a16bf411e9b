//! Named color lists (favorites, history).
//!
//! SYSTEM CONTEXT
//! ==============
//! A web layer keeps these lists in a cookie as a JSON array of strings and
//! calls into this module to read and update them. Storage and transport stay
//! with the caller; this module only owns the list semantics and the JSON
//! value shape.
//!
//! Lists are most-recent-first and never hold the same string twice. Colors
//! are compared as given, with no case folding.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("no color provided")]
    MissingColor,
    #[error("unknown color list: {0}")]
    UnknownList(String),
    #[error("color list JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which stored list a [`ColorList`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Favorites,
    History,
}

impl ListKind {
    /// Storage key for this list.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Favorites => "favorites",
            Self::History => "history",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ListKind {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "favorites" => Ok(Self::Favorites),
            "history" => Ok(Self::History),
            other => Err(ListError::UnknownList(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorList {
    kind: ListKind,
    colors: Vec<String>,
}

impl ColorList {
    #[must_use]
    pub fn new(kind: ListKind) -> Self {
        Self { kind, colors: Vec::new() }
    }

    /// Rebuild a list from its stored JSON value.
    ///
    /// An absent or empty value is an empty list. Duplicates in the stored
    /// value collapse onto their first (most recent) occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Json`] when the value is not a JSON array of
    /// strings.
    pub fn from_json(kind: ListKind, raw: Option<&str>) -> Result<Self, ListError> {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            return Ok(Self::new(kind));
        };
        let stored: Vec<String> = serde_json::from_str(raw)?;

        let mut colors: Vec<String> = Vec::with_capacity(stored.len());
        for color in stored {
            if !colors.contains(&color) {
                colors.push(color);
            }
        }
        Ok(Self { kind, colors })
    }

    #[must_use]
    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Colors, most recent first.
    #[must_use]
    pub fn get(&self) -> &[String] {
        &self.colors
    }

    /// Move `color` to the front, inserting it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::MissingColor`] for an empty color.
    pub fn add(&mut self, color: &str) -> Result<&[String], ListError> {
        if color.is_empty() {
            return Err(ListError::MissingColor);
        }
        self.colors.retain(|c| c != color);
        self.colors.insert(0, color.to_owned());
        tracing::debug!(list = %self.kind, color, len = self.colors.len(), "color added");
        Ok(&self.colors)
    }

    /// Drop `color` if present. Removing an absent color is a no-op.
    pub fn remove(&mut self, color: &str) -> &[String] {
        let before = self.colors.len();
        self.colors.retain(|c| c != color);
        if self.colors.len() != before {
            tracing::debug!(list = %self.kind, color, "color removed");
        }
        &self.colors
    }

    /// Encode as the stored JSON array value.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures as [`ListError::Json`].
    pub fn to_json(&self) -> Result<String, ListError> {
        Ok(serde_json::to_string(&self.colors)?)
    }
}

#[cfg(test)]
#[path = "lists_test.rs"]
mod tests;
