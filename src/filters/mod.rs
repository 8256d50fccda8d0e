pub mod types;

pub use types::FilterCriteria;

use crate::locations::LocationIndex;
use crate::models::{Category, Listing, Purpose};

/// Maximum number of area suggestions shown under the search box
pub const SUGGESTION_LIMIT: usize = 5;

/// Listings matching every constraint in `criteria`, in input order.
///
/// Within one selection any value may match; across selections all must.
/// Price and room bounds are not applied.
pub fn filter_listings<'a>(listings: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| matches(listing, criteria))
        .collect()
}

/// Whether a single listing passes the filter
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    let text = criteria.query.is_empty()
        || listing.title.contains(&criteria.query)
        || listing.area.contains(&criteria.query);

    text && selected(&criteria.purposes, &listing.purpose)
        && selected(&criteria.categories, &listing.category)
        && selected(&criteria.governorates, &listing.governorate)
        && selected(&criteria.areas, &listing.area)
}

fn selected<T: PartialEq>(selection: &[T], value: &T) -> bool {
    selection.is_empty() || selection.contains(value)
}

fn toggle<T: PartialEq>(selection: &mut Vec<T>, value: T) {
    if let Some(pos) = selection.iter().position(|v| *v == value) {
        selection.remove(pos);
    } else {
        selection.push(value);
    }
}

impl FilterCriteria {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn toggle_purpose(&mut self, purpose: Purpose) {
        toggle(&mut self.purposes, purpose);
    }

    pub fn toggle_category(&mut self, category: Category) {
        toggle(&mut self.categories, category);
    }

    /// Select or deselect a governorate.
    ///
    /// Deselecting also drops every selected area of that governorate.
    /// Selecting leaves the area selection alone.
    pub fn toggle_governorate(&mut self, index: &LocationIndex, governorate: &str) {
        if let Some(pos) = self.governorates.iter().position(|g| g == governorate) {
            self.governorates.remove(pos);
            let owned = index.areas_of(governorate);
            self.areas.retain(|area| !owned.contains(area));
        } else {
            self.governorates.push(governorate.to_string());
        }
    }

    pub fn toggle_area(&mut self, area: &str) {
        toggle(&mut self.areas, area.to_string());
    }

    /// Pick an area from the search suggestions: selects it along with its
    /// governorate and clears the query.
    pub fn select_suggested_area(&mut self, index: &LocationIndex, area: &str) {
        self.query.clear();

        if !self.areas.iter().any(|a| a == area) {
            self.areas.push(area.to_string());
        }

        if let Some(governorate) = index.governorate_of(area) {
            if !self.governorates.iter().any(|g| g == governorate) {
                self.governorates.push(governorate.to_string());
            }
        }
    }

    /// Suggestions for the current query, excluding areas already selected
    pub fn area_suggestions<'a>(&self, index: &'a LocationIndex) -> Vec<&'a str> {
        index.suggest_areas(&self.query, &self.areas, SUGGESTION_LIMIT)
    }

    /// Areas offered for selection: those of the selected governorates, or
    /// nothing until a governorate is picked.
    pub fn available_areas<'a>(&self, index: &'a LocationIndex) -> Vec<&'a str> {
        self.governorates
            .iter()
            .flat_map(|g| index.areas_of(g).iter().map(String::as_str))
            .collect()
    }

    /// Like `available_areas`, but falls back to every area when no
    /// governorate is selected.
    pub fn area_choices<'a>(&self, index: &'a LocationIndex) -> Vec<&'a str> {
        if self.governorates.is_empty() {
            index.all_areas().collect()
        } else {
            self.available_areas(index)
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
