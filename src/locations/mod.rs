pub mod kuwait;

use crate::models::Listing;
use anyhow::{bail, Result};
use std::collections::HashMap;

/// Governorate -> areas lookup, built once and never mutated.
///
/// Every area belongs to exactly one governorate. Iteration order follows the
/// order the entries were supplied in.
#[derive(Debug, Clone)]
pub struct LocationIndex {
    entries: Vec<(String, Vec<String>)>,
    /// area -> position in `entries`
    owner: HashMap<String, usize>,
}

impl LocationIndex {
    /// Build an index from ordered (governorate, areas) pairs
    pub fn from_entries<G, A, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (G, Vec<A>)>,
        G: Into<String>,
        A: Into<String>,
    {
        let mut index = Self {
            entries: Vec::new(),
            owner: HashMap::new(),
        };

        for (governorate, areas) in entries {
            let governorate = governorate.into();
            if index.entries.iter().any(|(g, _)| *g == governorate) {
                bail!("Governorate '{}' listed twice", governorate);
            }

            let position = index.entries.len();
            let mut owned = Vec::with_capacity(areas.len());
            for area in areas {
                let area = area.into();
                if let Some(&other) = index.owner.get(&area) {
                    let other_name = if other == position {
                        governorate.as_str()
                    } else {
                        index.entries[other].0.as_str()
                    };
                    bail!(
                        "Area '{}' listed under both '{}' and '{}'",
                        area,
                        other_name,
                        governorate
                    );
                }
                index.owner.insert(area.clone(), position);
                owned.push(area);
            }
            index.entries.push((governorate, owned));
        }

        Ok(index)
    }

    /// The built-in table of Kuwait's six governorates
    pub fn kuwait() -> Self {
        kuwait::index()
    }

    /// Governorate names in index order
    pub fn governorates(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(g, _)| g.as_str())
    }

    /// Areas of a governorate; empty if the governorate is unknown
    pub fn areas_of(&self, governorate: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(g, _)| g == governorate)
            .map(|(_, areas)| areas.as_slice())
            .unwrap_or(&[])
    }

    /// The governorate that contains `area`
    pub fn governorate_of(&self, area: &str) -> Option<&str> {
        self.owner
            .get(area)
            .map(|&position| self.entries[position].0.as_str())
    }

    pub fn contains_area(&self, area: &str) -> bool {
        self.owner.contains_key(area)
    }

    /// Every area, governorate order then area order
    pub fn all_areas(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, areas)| areas.iter().map(String::as_str))
    }

    /// Areas whose name contains `query`, skipping ones already in `exclude`.
    /// A blank query suggests nothing.
    pub fn suggest_areas<'a>(
        &'a self,
        query: &str,
        exclude: &[String],
        limit: usize,
    ) -> Vec<&'a str> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        self.all_areas()
            .filter(|area| area.contains(query) && !exclude.iter().any(|e| e == area))
            .take(limit)
            .collect()
    }

    /// Check that a listing's area sits under its governorate
    pub fn validate_listing(&self, listing: &Listing) -> Result<()> {
        match self.governorate_of(&listing.area) {
            Some(g) if g == listing.governorate => Ok(()),
            Some(g) => bail!(
                "Listing {}: area '{}' belongs to '{}', not '{}'",
                listing.id,
                listing.area,
                g,
                listing.governorate
            ),
            None => bail!("Listing {}: unknown area '{}'", listing.id, listing.area),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_kuwait_has_six_governorates() {
        let index = LocationIndex::kuwait();
        let governorates: Vec<_> = index.governorates().collect();
        assert_eq!(governorates.len(), 6);
        assert_eq!(governorates[0], "العاصمة");
        assert_eq!(governorates[1], "حولي");
    }

    #[test]
    fn test_areas_of() {
        let index = LocationIndex::kuwait();
        let areas = index.areas_of("حولي");
        assert_eq!(areas.first().map(String::as_str), Some("حولي"));
        assert!(areas.iter().any(|a| a == "السالمية"));
        assert!(areas.iter().any(|a| a == "الجابرية"));

        assert!(index.areas_of("دبي").is_empty());
    }

    #[test]
    fn test_governorate_of() {
        let index = LocationIndex::kuwait();
        assert_eq!(index.governorate_of("السالمية"), Some("حولي"));
        assert_eq!(index.governorate_of("صباح السالم"), Some("مبارك الكبير"));
        assert_eq!(index.governorate_of("الجهراء"), Some("الجهراء"));
        assert_eq!(index.governorate_of("not an area"), None);
    }

    #[test]
    fn test_every_area_round_trips_to_its_governorate() {
        let index = LocationIndex::kuwait();
        let mut count = 0;
        for area in index.all_areas() {
            let governorate = index.governorate_of(area).expect("area has a governorate");
            assert!(index.areas_of(governorate).iter().any(|a| a == area));
            count += 1;
        }
        assert_eq!(count, index.owner.len());
    }

    #[test]
    fn test_all_areas_order() {
        let index = LocationIndex::from_entries(vec![
            ("A", vec!["a1", "a2"]),
            ("B", vec!["b1"]),
        ])
        .unwrap();
        let areas: Vec<_> = index.all_areas().collect();
        assert_eq!(areas, vec!["a1", "a2", "b1"]);
    }

    #[test]
    fn test_rejects_area_under_two_governorates() {
        let result = LocationIndex::from_entries(vec![("A", vec!["x"]), ("B", vec!["x"])]);
        assert!(result.is_err());

        let result = LocationIndex::from_entries(vec![("A", vec!["x", "x"])]);
        assert!(result.is_err());

        let result = LocationIndex::from_entries(vec![("A", vec!["x"]), ("A", vec!["y"])]);
        assert!(result.is_err());
    }

    #[test]
    fn test_suggest_areas() {
        let index = LocationIndex::kuwait();

        assert!(index.suggest_areas("  ", &[], 5).is_empty());

        let suggestions = index.suggest_areas("السالم", &[], 5);
        assert!(suggestions.contains(&"صباح السالم"));
        assert!(suggestions.len() <= 5);

        let exclude = vec!["صباح السالم".to_string()];
        let suggestions = index.suggest_areas("صباح السالم", &exclude, 5);
        assert!(!suggestions.contains(&"صباح السالم"));
    }

    #[test]
    fn test_sample_listings_are_consistent() {
        let index = LocationIndex::kuwait();
        for listing in data::mock_listings() {
            index.validate_listing(&listing).unwrap();
        }

        let mut listing = data::mock_listings().remove(0);
        listing.governorate = "الجهراء".to_string();
        assert!(index.validate_listing(&listing).is_err());
    }
}
