use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of property being advertised
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "شقة")]
    Apartment,
    #[serde(rename = "فيلا")]
    Villa,
    #[serde(rename = "دور")]
    Floor,
    #[serde(rename = "بيت")]
    House,
    #[serde(rename = "أرض")]
    Land,
    #[serde(rename = "تجاري")]
    Commercial,
    #[serde(rename = "شاليه")]
    Chalet,
    #[serde(rename = "عمارة")]
    Building,
    #[serde(rename = "مزرعة")]
    Farm,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Apartment,
        Category::Villa,
        Category::Floor,
        Category::House,
        Category::Land,
        Category::Commercial,
        Category::Chalet,
        Category::Building,
        Category::Farm,
    ];

    /// Arabic label shown to users
    pub fn label(self) -> &'static str {
        match self {
            Category::Apartment => "شقة",
            Category::Villa => "فيلا",
            Category::Floor => "دور",
            Category::House => "بيت",
            Category::Land => "أرض",
            Category::Commercial => "تجاري",
            Category::Chalet => "شاليه",
            Category::Building => "عمارة",
            Category::Farm => "مزرعة",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a listing is offered for rent, sale or exchange
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Purpose {
    #[serde(rename = "للإيجار")]
    Rent,
    #[serde(rename = "للبيع")]
    Sale,
    #[serde(rename = "للبدل")]
    Exchange,
}

impl Purpose {
    pub const ALL: [Purpose; 3] = [Purpose::Rent, Purpose::Sale, Purpose::Exchange];

    pub fn label(self) -> &'static str {
        match self {
            Purpose::Rent => "للإيجار",
            Purpose::Sale => "للبيع",
            Purpose::Exchange => "للبدل",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Price in KWD, 0 means negotiable
    pub price: u64,
    pub area: String,
    pub governorate: String,
    /// Block/street details
    pub location: String,
    pub category: Category,
    pub purpose: Purpose,
    pub rooms: u32,
    pub bathrooms: u32,
    pub space_sqm: u32,
    pub images: Vec<String>,
    pub posted_at: DateTime<Utc>,
    pub whatsapp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub posted_by: String,
}

impl Listing {
    pub fn is_negotiable(&self) -> bool {
        self.price == 0
    }

    /// Price as displayed on listing cards
    pub fn price_label(&self) -> String {
        if self.is_negotiable() {
            "على السوم".to_string()
        } else {
            format!("{} د.ك", group_thousands(self.price))
        }
    }

    /// WhatsApp contact deep link for this listing
    pub fn whatsapp_link(&self) -> String {
        whatsapp_link(&self.whatsapp)
    }
}

/// Builds a `wa.me` deep link. The number is passed through as-is.
pub fn whatsapp_link(number: &str) -> String {
    format!("https://wa.me/{}", number)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    Employee,
}

/// A company member who can post listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub role: UserRole,
    pub company_id: String,
    pub assigned_credits: u32,
    pub used_credits: u32,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn remaining_credits(&self) -> u32 {
        self.assigned_credits.saturating_sub(self.used_credits)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub total_credits: u32,
    pub used_credits: u32,
    pub package_type: String,
}
