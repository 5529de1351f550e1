mod display;
mod itunes;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use itunes::*;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SearchResult {
    pub name: String,
    pub artist_name: String,
    pub artwork_url_small: String,
    pub artwork_url_large: String,
    pub store_url: String,
    pub kind: String,
    pub currency: String,
    pub price: f64,
    pub genre: String,
}

pub type SearchResults = Vec<SearchResult>;

/// Product filter applied on the server side through the `entity` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Music,
    Software,
    EBook,
}

impl Category {
    pub fn entity_name(&self) -> &'static str {
        match self {
            Category::All => "",
            Category::Music => "musicTrack",
            Category::Software => "software",
            Category::EBook => "ebook",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "all" => Ok(Category::All),
            "music" => Ok(Category::Music),
            "software" => Ok(Category::Software),
            "ebook" => Ok(Category::EBook),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

// Segment index of the category picker.
impl TryFrom<u8> for Category {
    type Error = UnknownCategory;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Category::All),
            1 => Ok(Category::Music),
            2 => Ok(Category::Software),
            3 => Ok(Category::EBook),
            _ => Err(UnknownCategory(index.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::All => "all",
            Category::Music => "music",
            Category::Software => "software",
            Category::EBook => "ebook",
        };

        write!(f, "{}", name)
    }
}
