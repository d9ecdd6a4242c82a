//! Requirement categories and the parsed requirement block.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One of the fixed requirement categories.
///
/// Variant order is the label matching precedence used by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Os,
    Processor,
    Memory,
    Graphics,
    Storage,
    SoundCard,
    AdditionalNotes,
    Other,
}

impl Category {
    /// All categories in precedence order.
    pub const ALL: [Category; 8] = [
        Category::Os,
        Category::Processor,
        Category::Memory,
        Category::Graphics,
        Category::Storage,
        Category::SoundCard,
        Category::AdditionalNotes,
        Category::Other,
    ];

    /// The label as it appears in requirement text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Os => "OS",
            Self::Processor => "Processor",
            Self::Memory => "Memory",
            Self::Graphics => "Graphics",
            Self::Storage => "Storage",
            Self::SoundCard => "Sound Card",
            Self::AdditionalNotes => "Additional Notes",
            Self::Other => "Other requirements",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Requirement text for one tier, keyed by [`Category`].
///
/// Every category is always present; missing ones hold an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementBlock {
    values: [String; 8],
}

impl RequirementBlock {
    /// Create a block with every category empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for a category.
    pub fn get(&self, category: Category) -> &str {
        &self.values[category.index()]
    }

    /// Replace the text for a category.
    pub fn set(&mut self, category: Category, value: impl Into<String>) {
        self.values[category.index()] = value.into();
    }

    /// Append to Additional Notes, separated by `" | "`.
    pub fn append_note(&mut self, note: &str) {
        let notes = &mut self.values[Category::AdditionalNotes.index()];
        if !notes.is_empty() {
            notes.push_str(" | ");
        }
        notes.push_str(note);
    }

    /// True when every category is empty.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    /// All categories with their text, in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> {
        Category::ALL
            .into_iter()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Categories that have text, in category order.
    pub fn filled(&self) -> impl Iterator<Item = (Category, &str)> {
        self.iter().filter(|(_, value)| !value.is_empty())
    }

    /// All values joined with a space, in category order.
    pub fn joined(&self) -> String {
        self.values.join(" ")
    }
}

impl Serialize for RequirementBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (category, value) in self.iter() {
            map.serialize_entry(category.label(), value)?;
        }
        map.end()
    }
}
