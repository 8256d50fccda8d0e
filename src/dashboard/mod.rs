//! Company dashboard views over the in-memory data

use crate::models::{Company, Listing, User};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    MyAds,
    Team,
}

impl DashboardTab {
    /// Tabs the user may open; the team tab is admin only
    pub fn available_for(user: &User) -> Vec<DashboardTab> {
        let mut tabs = vec![DashboardTab::Overview, DashboardTab::MyAds];
        if user.is_admin() {
            tabs.push(DashboardTab::Team);
        }
        tabs
    }
}

/// Admins see every listing, employees only their own
pub fn visible_listings<'a>(user: &User, listings: &'a [Listing]) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|l| user.is_admin() || l.posted_by == user.id)
        .collect()
}

/// Members of `company`
pub fn team<'a>(users: &'a [User], company: &Company) -> Vec<&'a User> {
    users.iter().filter(|u| u.company_id == company.id).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyStats {
    pub active_listings: usize,
    pub featured_listings: usize,
    pub total_credits: u32,
    pub used_credits: u32,
    pub remaining_credits: u32,
}

impl CompanyStats {
    /// Stats as seen by `user`: company credits for admins, personal ones
    /// otherwise.
    pub fn for_user(user: &User, company: &Company, listings: &[Listing]) -> Self {
        let visible = visible_listings(user, listings);
        let (total, used) = if user.is_admin() {
            (company.total_credits, company.used_credits)
        } else {
            (user.assigned_credits, user.used_credits)
        };

        Self {
            active_listings: visible.len(),
            featured_listings: visible.iter().filter(|l| l.featured).count(),
            total_credits: total,
            used_credits: used,
            remaining_credits: total.saturating_sub(used),
        }
    }
}

/// Relative age label: hours under a day, whole days after
pub fn format_time_ago(posted_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - posted_at).num_hours().max(0);
    if hours < 24 {
        format!("منذ {} س", hours)
    } else {
        format!("منذ {} يوم", hours / 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use chrono::Duration;

    #[test]
    fn test_visible_listings_by_role() {
        let users = data::mock_users();
        let listings = data::mock_listings();

        assert_eq!(visible_listings(&users[0], &listings).len(), 3);

        let own = visible_listings(&users[1], &listings);
        assert_eq!(own.len(), 1);
        assert_eq!(own[0].posted_by, "agent_1");
    }

    #[test]
    fn test_tabs() {
        let users = data::mock_users();
        assert_eq!(DashboardTab::available_for(&users[0]).len(), 3);
        assert!(!DashboardTab::available_for(&users[2]).contains(&DashboardTab::Team));
    }

    #[test]
    fn test_team() {
        let users = data::mock_users();
        let company = data::mock_company();
        assert_eq!(team(&users, &company).len(), 3);
    }

    #[test]
    fn test_stats() {
        let users = data::mock_users();
        let company = data::mock_company();
        let listings = data::mock_listings();

        let admin = CompanyStats::for_user(&users[0], &company, &listings);
        assert_eq!(admin.active_listings, 3);
        assert_eq!(admin.featured_listings, 1);
        assert_eq!(admin.remaining_credits, 850);

        let agent = CompanyStats::for_user(&users[2], &company, &listings);
        assert_eq!(agent.active_listings, 1);
        assert_eq!(agent.featured_listings, 0);
        assert_eq!(agent.remaining_credits, 38);
    }

    #[test]
    fn test_format_time_ago() {
        let now = Utc::now();
        assert_eq!(format_time_ago(now - Duration::minutes(30), now), "منذ 0 س");
        assert_eq!(format_time_ago(now - Duration::hours(5), now), "منذ 5 س");
        assert_eq!(format_time_ago(now - Duration::hours(49), now), "منذ 2 يوم");
    }
}
