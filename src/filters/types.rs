use crate::models::{Category, Purpose};
use serde::{Deserialize, Serialize};

/// What the user is currently filtering listings by.
///
/// Empty selections mean "no constraint". Selections keep the order the user
/// picked them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Matched as a substring of the title or area name
    pub query: String,
    pub purposes: Vec<Purpose>,
    pub categories: Vec<Category>,
    pub governorates: Vec<String>,
    pub areas: Vec<String>,
    /// Minimum price (KWD). Not applied by `filter_listings`.
    pub min_price: Option<u64>,
    /// Maximum price (KWD). Not applied by `filter_listings`.
    pub max_price: Option<u64>,
    /// Minimum number of rooms. Not applied by `filter_listings`.
    pub min_rooms: Option<u32>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.purposes.is_empty()
            && self.categories.is_empty()
            && self.governorates.is_empty()
            && self.areas.is_empty()
            && !self.has_unenforced_bounds()
    }

    /// True when price or room bounds are set. Those bounds are carried but
    /// never narrow the result set, so callers should surface that.
    pub fn has_unenforced_bounds(&self) -> bool {
        self.min_price.is_some() || self.max_price.is_some() || self.min_rooms.is_some()
    }
}
