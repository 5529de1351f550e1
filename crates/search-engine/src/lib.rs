mod search;
pub use search::*;

pub use store_catalog::{Category, SearchResult, SearchResults};

use std::ops::Deref;

// Generation
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Debug, Default)]
pub struct Generation(pub(crate) u64);

impl Generation {
    pub(crate) fn next(&self) -> Generation {
        Generation(self.0 + 1)
    }
}

impl Deref for Generation {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
