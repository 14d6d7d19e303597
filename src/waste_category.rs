use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cardboard,
    Plastic,
    Glass,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Cardboard, Category::Plastic, Category::Glass];

    /// Case-insensitive match against the known labels. Anything else is `None`.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(label))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cardboard => "cardboard",
            Category::Plastic => "plastic",
            Category::Glass => "glass",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Category::Cardboard => 'C',
            Category::Plastic => 'P',
            Category::Glass => 'G',
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category count of items that finished the whole timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub cardboard: u64,
    pub plastic: u64,
    pub glass: u64,
}

impl Counters {
    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Cardboard => self.cardboard,
            Category::Plastic => self.plastic,
            Category::Glass => self.glass,
        }
    }

    pub fn increment(&mut self, category: Category) {
        match category {
            Category::Cardboard => self.cardboard += 1,
            Category::Plastic => self.plastic += 1,
            Category::Glass => self.glass += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.cardboard + self.plastic + self.glass
    }
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cardboard={} plastic={} glass={} total={}",
            self.cardboard,
            self.plastic,
            self.glass,
            self.total()
        )
    }
}
