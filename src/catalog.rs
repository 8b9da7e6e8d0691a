// Garden catalog data store

use serde::Serialize;
use std::fmt;

/// Opaque key for a localized description string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DescriptionRef(pub &'static str);

/// Opaque key for an image asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageRef(pub &'static str);

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Display name, kept verbatim (the reference data ends every name with a space)
    pub name: String,
    pub description: DescriptionRef,
    pub image: ImageRef,
    pub selected: bool,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, description: DescriptionRef, image: ImageRef) -> Self {
        Self {
            name: name.into(),
            description,
            image,
            selected: false,
        }
    }

    /// Flip the selection flag and return the new value.
    pub fn toggle_selected(&mut self) -> bool {
        self.selected = !self.selected;
        self.selected
    }
}

const ITEM_DESCRIPTION: DescriptionRef = DescriptionRef("item_description");

// (name, image key) in display order
const GARDEN_ITEMS: &[(&str, &str)] = &[
    ("Desert chic ", "desert_chic"),
    ("Tiny terrariums ", "tiny_terrariums"),
    ("Jungle vibes ", "jungle_vibes"),
    ("Easy care ", "easy_care"),
    ("Statements ", "statements"),
    ("Monstrea ", "monstera"),
    ("Aglaonema ", "aglaonema"),
    ("Peace lily ", "peace_lily"),
    ("Fiddle leaf ", "fiddle_leaf"),
    ("Snake plant ", "snake_plant"),
    ("Pothos ", "pothos"),
];

/// Ordered, fixed-size collection of entries. Only the `selected` flags change
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The reference garden collection.
    pub fn garden() -> Self {
        let entries = GARDEN_ITEMS
            .iter()
            .map(|(name, image)| CatalogEntry::new(*name, ITEM_DESCRIPTION, ImageRef(image)))
            .collect();
        Self::new(entries)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Index of the first entry whose name matches exactly (whitespace included).
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    /// Flip one entry's flag, leaving every other entry untouched.
    /// Returns the new value, or `None` if `index` names no entry.
    pub fn toggle_selected(&mut self, index: usize) -> Option<bool> {
        let entry = self.entries.get_mut(index)?;
        let selected = entry.toggle_selected();
        tracing::debug!(name = %entry.name.trim_end(), selected, "toggled catalog entry");
        Some(selected)
    }

    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|e| e.selected).count()
    }

    pub fn selected_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.selected)
            .map(|e| e.name.as_str())
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::garden()
    }
}
