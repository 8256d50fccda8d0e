use crate::auth::normalize_digits;
use crate::locations::LocationIndex;
use crate::models::{Category, Purpose, User};
use anyhow::{bail, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::info;

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const MAX_IMAGES: usize = 10;

/// Keep Arabic letters, Latin letters, digits, whitespace and `، , .`.
/// Everything else, emoji included, is dropped.
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter(|&c| {
            matches!(c,
                '\u{0600}'..='\u{06FF}'
                | '\u{0750}'..='\u{077F}'
                | '\u{08A0}'..='\u{08FF}'
                | '0'..='9'
                | 'a'..='z'
                | 'A'..='Z'
                | ',' | '.')
                || c.is_whitespace()
        })
        .collect()
}

fn truncate_chars(text: String, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text,
    }
}

/// Integer price from a free-text field: leading digits only, 0 otherwise
pub fn parse_price(raw: &str) -> u64 {
    let normalized = normalize_digits(raw);
    let digits: String = normalized
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// New listing form as the user fills it in
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft {
    title: String,
    description: String,
    pub category: Category,
    pub purpose: Purpose,
    governorate: String,
    area: String,
    pub price: String,
    pub phone: String,
    pub property_code: String,
    pub license_number: String,
    pub is_featured: bool,
    pub accepted_terms: bool,
    images: Vec<String>,
}

/// What the external collaborator receives on submit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSubmission {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub purpose: Purpose,
    pub governorate: String,
    pub area: String,
    pub price: u64,
    pub phone: String,
    pub property_code: String,
    pub license_number: String,
    pub is_featured: bool,
    pub accepted_terms: bool,
    pub images: Vec<String>,
}

impl ListingDraft {
    /// Empty form, contact number prefilled from the poster
    pub fn new(user: &User) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: Category::Apartment,
            purpose: Purpose::Rent,
            governorate: String::new(),
            area: String::new(),
            price: String::new(),
            phone: user.phone.clone(),
            property_code: String::new(),
            license_number: String::new(),
            is_featured: false,
            accepted_terms: false,
            images: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn governorate(&self) -> &str {
        &self.governorate
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn set_title(&mut self, value: &str) {
        self.title = truncate_chars(sanitize_text(value), TITLE_MAX_CHARS);
    }

    pub fn set_description(&mut self, value: &str) {
        self.description = truncate_chars(sanitize_text(value), DESCRIPTION_MAX_CHARS);
    }

    /// Changing governorate clears the chosen area
    pub fn set_governorate(&mut self, governorate: &str) {
        self.governorate = governorate.to_string();
        self.area.clear();
    }

    pub fn set_area(&mut self, area: &str) {
        self.area = area.to_string();
    }

    /// Attach images; rejected as a whole if the total would pass the cap
    pub fn add_images<I>(&mut self, images: I) -> Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        let new: Vec<String> = images.into_iter().collect();
        if self.images.len() + new.len() > MAX_IMAGES {
            bail!("At most {} images are allowed", MAX_IMAGES);
        }
        self.images.extend(new);
        Ok(())
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    pub fn can_submit(&self, locations: &LocationIndex) -> bool {
        self.title.chars().count() > 5
            && self.description.chars().count() > 10
            && !self.governorate.is_empty()
            && !self.area.is_empty()
            && locations.governorate_of(&self.area) == Some(self.governorate.as_str())
            && !self.phone.is_empty()
            && self.accepted_terms
    }

    /// Build the submission record, or fail if the form is incomplete
    pub fn build(&self, locations: &LocationIndex) -> Result<ListingSubmission> {
        if !self.can_submit(locations) {
            bail!("Listing form is incomplete");
        }

        Ok(ListingSubmission {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            purpose: self.purpose,
            governorate: self.governorate.clone(),
            area: self.area.clone(),
            price: parse_price(&self.price),
            phone: self.phone.clone(),
            property_code: self.property_code.clone(),
            license_number: self.license_number.clone(),
            is_featured: self.is_featured,
            accepted_terms: self.accepted_terms,
            images: self.images.clone(),
        })
    }

    /// Build the record and hand it to `sink`
    pub async fn submit<S: SubmissionSink + ?Sized>(
        &self,
        locations: &LocationIndex,
        sink: &S,
    ) -> Result<ListingSubmission> {
        let submission = self.build(locations)?;
        sink.receive(submission.clone()).await?;
        info!("Submitted listing '{}' to {}", submission.title, sink.sink_name());
        Ok(submission)
    }
}

/// Receiver of new listings, e.g. an API client
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn receive(&self, submission: ListingSubmission) -> Result<()>;

    fn sink_name(&self) -> &'static str;
}

/// Keeps submissions in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    received: Mutex<Vec<ListingSubmission>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn received(&self) -> Vec<ListingSubmission> {
        self.received.lock().await.clone()
    }
}

#[async_trait]
impl SubmissionSink for MemorySink {
    async fn receive(&self, submission: ListingSubmission) -> Result<()> {
        self.received.lock().await.push(submission);
        Ok(())
    }

    fn sink_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn filled_draft() -> ListingDraft {
        let user = &data::mock_users()[1];
        let mut draft = ListingDraft::new(user);
        draft.set_title("شقة للبيع في حولي تشطيب ديلوكس");
        draft.set_description("ثلاث غرف وصالة ومطبخ مجهز");
        draft.set_governorate("حولي");
        draft.set_area("السالمية");
        draft.accepted_terms = true;
        draft
    }

    #[test]
    fn test_sanitize_text() {
        assert_eq!(sanitize_text("شقة 🏠 جميلة، Nice!"), "شقة  جميلة، Nice");
        assert_eq!(sanitize_text("a.b,c"), "a.b,c");
    }

    #[test]
    fn test_title_and_description_are_capped() {
        let mut draft = filled_draft();
        draft.set_title(&"ب".repeat(150));
        assert_eq!(draft.title().chars().count(), TITLE_MAX_CHARS);

        draft.set_description(&"x".repeat(600));
        assert_eq!(draft.description().len(), DESCRIPTION_MAX_CHARS);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(""), 0);
        assert_eq!(parse_price("650"), 650);
        assert_eq!(parse_price(" 12abc"), 12);
        assert_eq!(parse_price("٩٠٠"), 900);
        assert_eq!(parse_price("-5"), 0);
    }

    #[test]
    fn test_image_cap() {
        let mut draft = filled_draft();
        draft
            .add_images((0..8).map(|i| format!("img_{}.jpg", i)))
            .unwrap();
        assert!(draft.add_images(vec!["a".to_string(), "b".to_string(), "c".to_string()]).is_err());
        assert_eq!(draft.images().len(), 8);

        draft.remove_image(0);
        draft.remove_image(42);
        assert_eq!(draft.images().len(), 7);
        assert_eq!(draft.images()[0], "img_1.jpg");
    }

    #[test]
    fn test_can_submit_requirements() {
        let locations = LocationIndex::kuwait();
        let draft = filled_draft();
        assert!(draft.can_submit(&locations));

        let mut short = draft.clone();
        short.set_title("شقة");
        assert!(!short.can_submit(&locations));

        let mut no_terms = draft.clone();
        no_terms.accepted_terms = false;
        assert!(!no_terms.can_submit(&locations));

        let mut moved = draft.clone();
        moved.set_governorate("الجهراء");
        assert!(moved.area().is_empty());
        assert!(!moved.can_submit(&locations));

        moved.set_area("السالمية");
        assert!(!moved.can_submit(&locations), "area must belong to governorate");

        let mut no_phone = draft;
        no_phone.phone.clear();
        assert!(!no_phone.can_submit(&locations));
    }

    #[tokio::test]
    async fn test_submit_delivers_record() {
        let locations = LocationIndex::kuwait();
        let sink = MemorySink::new();
        let mut draft = filled_draft();
        draft.price = "650".to_string();
        draft.add_images(vec!["a.jpg".to_string()]).unwrap();

        let submission = draft.submit(&locations, &sink).await.unwrap();
        assert_eq!(submission.price, 650);
        assert_eq!(submission.phone, "90001001");
        assert_eq!(submission.images, vec!["a.jpg".to_string()]);
        assert_eq!(sink.received().await, vec![submission]);
    }

    #[tokio::test]
    async fn test_incomplete_form_is_not_submitted() {
        let locations = LocationIndex::kuwait();
        let sink = MemorySink::new();
        let draft = ListingDraft::new(&data::mock_users()[0]);

        assert!(draft.submit(&locations, &sink).await.is_err());
        assert!(sink.received().await.is_empty());
    }
}
