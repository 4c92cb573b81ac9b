//! The slot-based palette document and its JSON form.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::{StorageError, StorageResult};
use crate::error::Rejected;
use crate::palette::{ColorEntry, Palette};

/// Indentation used when writing documents.
const INDENT: &[u8] = b"    ";

/// What a "Save" menu entry writes back into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOption {
    /// The color palette, slot 0.
    Colors,
}

impl SaveOption {
    /// Every option, in menu order.
    pub const ALL: [SaveOption; 1] = [SaveOption::Colors];

    /// Document slot this option owns.
    pub fn slot(self) -> usize {
        match self {
            SaveOption::Colors => 0,
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            SaveOption::Colors => "colors",
        }
    }
}

/// A loaded palette file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedDocument {
    /// Slot 0.
    pub palette: Palette,
    /// Slots 1.. in file order, opaque.
    pub extra_slots: Vec<Value>,
}

impl PersistedDocument {
    /// A document holding only a palette.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            extra_slots: Vec::new(),
        }
    }

    /// Parse a document.
    pub fn from_json(json: &str) -> StorageResult<Self> {
        let slots: Vec<Value> = serde_json::from_str(json)
            .map_err(|e| StorageError::Format(format!("expected an array of slots: {}", e)))?;
        let mut slots = slots.into_iter();

        let colors = slots
            .next()
            .ok_or_else(|| StorageError::Format("document has no color slot".to_string()))?;
        let entries: Vec<ColorEntry> = serde_json::from_value(colors)
            .map_err(|e| StorageError::Format(format!("invalid color slot: {}", e)))?;

        if let Some(bad) = entries
            .iter()
            .find(|e| !e.scene_color.is_normalized() || !e.outliner_color.is_normalized())
        {
            return Err(StorageError::Format(format!(
                "color \"{}\" has a component outside 0..1",
                bad.name
            )));
        }

        let palette = Palette::from_entries(entries).map_err(|e| match e {
            Rejected::EmptyName => StorageError::Format("color with an empty name".to_string()),
            Rejected::DuplicateName(name) => {
                StorageError::Format(format!("color \"{}\" appears more than once", name))
            }
            other => StorageError::Format(other.to_string()),
        })?;

        Ok(Self {
            palette,
            extra_slots: slots.collect(),
        })
    }

    /// Serialize pretty-printed with sorted keys and a 4-space indent.
    pub fn to_json(&self) -> StorageResult<String> {
        let colors = serde_json::to_value(self.palette.entries())
            .map_err(|e| StorageError::Format(e.to_string()))?;
        let slots: Vec<&Value> = std::iter::once(&colors).chain(&self.extra_slots).collect();

        let mut out = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
        slots
            .serialize(&mut serializer)
            .map_err(|e| StorageError::Format(e.to_string()))?;
        String::from_utf8(out).map_err(|e| StorageError::Format(e.to_string()))
    }

    /// Copy the working palette into the slot owned by `option`.
    pub fn store(&mut self, option: SaveOption, palette: &Palette) {
        match option {
            SaveOption::Colors => self.palette = palette.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    const SAMPLE: &str = r#"[
        [
            {"red": [[1.0, 0.0, 0.0], [0.8, 0.0, 0.0]]},
            {"Blue": [[0, 0, 1], [0, 0, 1]]}
        ],
        {"controllers": ["circle"]}
    ]"#;

    #[test]
    fn test_parse_sample() {
        let doc = PersistedDocument::from_json(SAMPLE).unwrap();
        assert_eq!(doc.palette.len(), 2);
        let red = doc.palette.get("red").unwrap();
        assert_eq!(red.scene_color, Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(red.outliner_color, Rgb::new(0.8, 0.0, 0.0));
        // names are normalized on load
        assert_eq!(doc.palette.entries()[1].name, "blue");
        assert_eq!(doc.extra_slots.len(), 1);
    }

    #[test]
    fn test_extra_slots_pass_through() {
        let doc = PersistedDocument::from_json(SAMPLE).unwrap();
        let again = PersistedDocument::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(again, doc);
        assert_eq!(again.extra_slots[0]["controllers"][0], "circle");
    }

    #[test]
    fn test_output_is_indented_with_four_spaces() {
        let palette =
            Palette::from_entries([ColorEntry::uniform("red", Rgb::new(1.0, 0.0, 0.0))]).unwrap();
        let json = PersistedDocument::new(palette).to_json().unwrap();
        assert!(json.starts_with("[\n    [\n        {\n            \"red\": ["));
    }

    #[test]
    fn test_extra_slot_keys_sorted() {
        let doc = PersistedDocument::from_json(r#"[[], {"b": 1, "a": 2}]"#).unwrap();
        let json = doc.to_json().unwrap();
        let a = json.find("\"a\"").unwrap();
        let b = json.find("\"b\"").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_format_errors() {
        for bad in [
            "not json",
            "{}",
            "[]",
            "[{}]",
            r#"[[{"red": [[1, 0, 0]]}]]"#,
            r#"[[{"red": [[1, 0, 0], [1, 0, 0]], "blue": [[0, 0, 1], [0, 0, 1]]}]]"#,
            r#"[[{"red": [[2, 0, 0], [1, 0, 0]]}]]"#,
            r#"[[{"red": [[1, 0, 0], [1, 0, 0]]}, {"RED": [[1, 0, 0], [1, 0, 0]]}]]"#,
            r#"[[{"": [[1, 0, 0], [1, 0, 0]]}]]"#,
        ] {
            assert!(
                matches!(PersistedDocument::from_json(bad), Err(StorageError::Format(_))),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn test_store_colors_slot() {
        let mut doc = PersistedDocument::default();
        let palette =
            Palette::from_entries([ColorEntry::uniform("green", Rgb::new(0.0, 1.0, 0.0))]).unwrap();
        doc.store(SaveOption::Colors, &palette);
        assert_eq!(doc.palette, palette);
        assert_eq!(SaveOption::Colors.slot(), 0);
    }
}
