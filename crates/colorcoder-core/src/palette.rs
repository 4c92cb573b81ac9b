//! The palette: an ordered list of uniquely named colors.
//!
//! Insertion order is display order. The sequence index of an entry decides
//! its cell in the 3-column grid (see [`crate::layout`]).

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::Rejected;

/// Normalize a color name to its stored form. Only case is folded; spaces
/// are part of the name.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Whether a name has nothing but whitespace in it.
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// One named color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    /// Lowercase, not blank, unique within a palette.
    pub name: String,
    /// Color rendered in the scene.
    pub scene_color: Rgb,
    /// Color used for the object's outliner label.
    pub outliner_color: Rgb,
}

impl ColorEntry {
    /// Create an entry with independent scene and outliner colors.
    pub fn new(name: impl Into<String>, scene_color: Rgb, outliner_color: Rgb) -> Self {
        Self {
            name: name.into(),
            scene_color,
            outliner_color,
        }
    }

    /// Create an entry whose scene and outliner colors are the same.
    pub fn uniform(name: impl Into<String>, color: Rgb) -> Self {
        Self::new(name, color, color)
    }

    /// The `(scene, outliner)` pair handed to a color applier.
    pub fn colors(&self) -> (Rgb, Rgb) {
        (self.scene_color, self.outliner_color)
    }
}

// Persisted as a single-key mapping: `{"name": [scene, outliner]}`.
impl Serialize for ColorEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &(self.scene_color, self.outliner_color))?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for ColorEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<String, (Rgb, Rgb)>::deserialize(deserializer)?;
        if map.len() != 1 {
            return Err(de::Error::custom(format!(
                "color entry must have exactly one key, found {}",
                map.len()
            )));
        }
        let (name, (scene_color, outliner_color)) = map
            .into_iter()
            .next()
            .ok_or_else(|| de::Error::custom("empty color entry"))?;
        Ok(Self::new(name, scene_color, outliner_color))
    }
}

/// Ordered collection of color entries with pairwise distinct names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    entries: Vec<ColorEntry>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a palette from entries, normalizing names.
    ///
    /// Fails on an empty name or on two entries whose normalized names collide.
    pub fn from_entries(entries: impl IntoIterator<Item = ColorEntry>) -> Result<Self, Rejected> {
        let mut palette = Self::new();
        for entry in entries {
            palette.push(entry)?;
        }
        Ok(palette)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    /// Iterate entries in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColorEntry> {
        self.entries.iter()
    }

    /// Sequence index of the entry named `name` (case-insensitive).
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let name = normalize_name(name);
        self.entries.iter().position(|e| e.name == name)
    }

    /// Look up an entry by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&ColorEntry> {
        self.index_of(name).map(|i| &self.entries[i])
    }

    /// Whether an entry with this name exists (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Append an entry, returning its sequence index.
    ///
    /// The name is normalized before the uniqueness check.
    pub fn push(&mut self, mut entry: ColorEntry) -> Result<usize, Rejected> {
        entry.name = normalize_name(&entry.name);
        if is_blank(&entry.name) {
            return Err(Rejected::EmptyName);
        }
        if self.contains(&entry.name) {
            return Err(Rejected::DuplicateName(entry.name));
        }
        self.entries.push(entry);
        Ok(self.entries.len() - 1)
    }

    /// Remove and return the entry at `index`, shifting later entries down.
    pub fn remove(&mut self, index: usize) -> Option<ColorEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColorEntry;
    type IntoIter = std::slice::Iter<'a, ColorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for ColorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
