use crate::auth::{resolve_user, AuthSuccess};
use crate::data;
use crate::filters::{filter_listings, FilterCriteria};
use crate::locations::LocationIndex;
use crate::models::{Category, Company, Listing, Purpose, User};
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Dashboard,
}

/// A state change requested by the UI
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetQuery(String),
    TogglePurpose(Purpose),
    ToggleCategory(Category),
    ToggleGovernorate(String),
    ToggleArea(String),
    SelectSuggestedArea(String),
    ReplaceFilters(FilterCriteria),
    ResetFilters,
    LoginSucceeded(AuthSuccess),
    Logout,
    OpenDashboard,
    GoHome,
    AddListing,
}

/// What the UI should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    /// The action needs a signed-in user; show the login dialog
    NeedsLogin,
    /// Show the new-listing form
    OpenAddListing,
}

/// Everything the UI renders from, owned in one place
#[derive(Debug, Clone)]
pub struct AppState {
    listings: Vec<Listing>,
    locations: LocationIndex,
    users: Vec<User>,
    company: Company,
    filters: FilterCriteria,
    user: Option<User>,
    view: View,
}

impl AppState {
    /// Build the state, rejecting listings whose area and governorate disagree
    pub fn new(
        listings: Vec<Listing>,
        locations: LocationIndex,
        users: Vec<User>,
        company: Company,
    ) -> Result<Self> {
        for listing in &listings {
            locations
                .validate_listing(listing)
                .context("Inconsistent listing data")?;
        }

        info!("Loaded {} listings", listings.len());

        Ok(Self {
            listings,
            locations,
            users,
            company,
            filters: FilterCriteria::default(),
            user: None,
            view: View::Home,
        })
    }

    /// State seeded with the built-in sample data
    pub fn with_mock_data() -> Result<Self> {
        Self::new(
            data::mock_listings(),
            LocationIndex::kuwait(),
            data::mock_users(),
            data::mock_company(),
        )
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn locations(&self) -> &LocationIndex {
        &self.locations
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Listings passing the current filters
    pub fn visible_listings(&self) -> Vec<&Listing> {
        let visible = filter_listings(&self.listings, &self.filters);
        debug!("{} of {} listings match", visible.len(), self.listings.len());
        visible
    }

    pub fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::SetQuery(query) => self.filters.set_query(query),
            Action::TogglePurpose(purpose) => self.filters.toggle_purpose(purpose),
            Action::ToggleCategory(category) => self.filters.toggle_category(category),
            Action::ToggleGovernorate(governorate) => {
                self.filters.toggle_governorate(&self.locations, &governorate)
            }
            Action::ToggleArea(area) => self.filters.toggle_area(&area),
            Action::SelectSuggestedArea(area) => {
                self.filters.select_suggested_area(&self.locations, &area)
            }
            Action::ReplaceFilters(filters) => {
                if filters.has_unenforced_bounds() {
                    warn!("Price and room bounds are not applied to results");
                }
                self.filters = filters;
            }
            Action::ResetFilters => self.filters.reset(),
            Action::LoginSucceeded(success) => {
                let user = resolve_user(&self.users, &success);
                info!("Signed in as {} ({})", user.name, user.id);
                self.user = Some(user);
            }
            Action::Logout => {
                self.user = None;
                self.view = View::Home;
            }
            Action::OpenDashboard => {
                if self.user.is_none() {
                    return Outcome::NeedsLogin;
                }
                self.view = View::Dashboard;
            }
            Action::GoHome => self.view = View::Home,
            Action::AddListing => {
                return if self.user.is_some() {
                    Outcome::OpenAddListing
                } else {
                    Outcome::NeedsLogin
                };
            }
        }
        Outcome::Updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::with_mock_data().unwrap()
    }

    fn login(state: &mut AppState, phone: &str) {
        state.apply(Action::LoginSucceeded(AuthSuccess {
            phone: phone.to_string(),
            name: None,
        }));
    }

    #[test]
    fn test_query_scenario() {
        let mut state = state();
        assert_eq!(state.visible_listings().len(), 3);

        state.apply(Action::SetQuery("السالمية".to_string()));
        let visible = state.visible_listings();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].area, "السالمية");
    }

    #[test]
    fn test_governorate_toggle_scenario() {
        let mut state = state();
        state.apply(Action::ToggleArea("السالمية".to_string()));
        state.apply(Action::ToggleArea("الجابرية".to_string()));
        state.apply(Action::ToggleGovernorate("حولي".to_string()));
        assert_eq!(state.visible_listings().len(), 2);

        state.apply(Action::ToggleGovernorate("حولي".to_string()));
        assert!(state.filters().areas.is_empty());
        assert!(state.filters().governorates.is_empty());
        assert_eq!(state.visible_listings().len(), 3);
    }

    #[test]
    fn test_suggestion_selects_governorate() {
        let mut state = state();
        state.apply(Action::SetQuery("صباح".to_string()));
        state.apply(Action::SelectSuggestedArea("صباح السالم".to_string()));
        assert_eq!(state.filters().governorates, vec!["مبارك الكبير".to_string()]);
        let visible = state.visible_listings();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }

    #[test]
    fn test_dashboard_requires_login() {
        let mut state = state();
        assert_eq!(state.apply(Action::OpenDashboard), Outcome::NeedsLogin);
        assert_eq!(state.view(), View::Home);
        assert_eq!(state.apply(Action::AddListing), Outcome::NeedsLogin);

        login(&mut state, "65814909");
        assert_eq!(state.user().map(|u| u.id.as_str()), Some("usr_admin"));
        assert_eq!(state.apply(Action::OpenDashboard), Outcome::Updated);
        assert_eq!(state.view(), View::Dashboard);
        assert_eq!(state.apply(Action::AddListing), Outcome::OpenAddListing);

        state.apply(Action::Logout);
        assert!(state.user().is_none());
        assert_eq!(state.view(), View::Home);
    }

    #[test]
    fn test_replace_and_reset_filters() {
        let mut state = state();
        state.apply(Action::ReplaceFilters(FilterCriteria {
            purposes: vec![Purpose::Sale],
            min_rooms: Some(10),
            ..Default::default()
        }));
        assert_eq!(state.visible_listings().len(), 1);

        state.apply(Action::ResetFilters);
        assert!(state.filters().is_empty());
    }

    #[test]
    fn test_rejects_inconsistent_listing() {
        let mut listings = data::mock_listings();
        listings[1].governorate = "حولي".to_string();
        let result = AppState::new(
            listings,
            LocationIndex::kuwait(),
            data::mock_users(),
            data::mock_company(),
        );
        assert!(result.is_err());
    }
}
