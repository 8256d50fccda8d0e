//! Static sample data loaded at startup

use crate::models::{Category, Company, Listing, Purpose, User, UserRole};
use chrono::{Duration, Utc};

pub const DEFAULT_COMPANY_ID: &str = "comp_otad";

/// Members of the sample company. `65814909` is the admin account.
pub fn mock_users() -> Vec<User> {
    vec![
        User {
            id: "usr_admin".to_string(),
            name: "أحمد الصالح".to_string(),
            phone: "65814909".to_string(),
            role: UserRole::Admin,
            company_id: DEFAULT_COMPANY_ID.to_string(),
            assigned_credits: 1000,
            used_credits: 150,
        },
        User {
            id: "agent_1".to_string(),
            name: "فهد العتيبي".to_string(),
            phone: "90001001".to_string(),
            role: UserRole::Employee,
            company_id: DEFAULT_COMPANY_ID.to_string(),
            assigned_credits: 100,
            used_credits: 45,
        },
        User {
            id: "agent_2".to_string(),
            name: "سارة الكندري".to_string(),
            phone: "90001002".to_string(),
            role: UserRole::Employee,
            company_id: DEFAULT_COMPANY_ID.to_string(),
            assigned_credits: 50,
            used_credits: 12,
        },
    ]
}

pub fn mock_company() -> Company {
    Company {
        id: DEFAULT_COMPANY_ID.to_string(),
        name: "أوتاد العقارية".to_string(),
        total_credits: 1000,
        used_credits: 150,
        package_type: "PREMIUM".to_string(),
    }
}

/// The three sample listings, newest first
pub fn mock_listings() -> Vec<Listing> {
    let now = Utc::now();

    vec![
        Listing {
            id: "1".to_string(),
            title: "شقة فاخرة للايجار في السالمية مطلة على البحر".to_string(),
            description: "شقة واسعة تتكون من 3 غرف نوم، صالة كبيرة، مطبخ مجهز بالكامل. تشطيب سوبر ديلوكس.".to_string(),
            price: 650,
            area: "السالمية".to_string(),
            governorate: "حولي".to_string(),
            location: "قطعة 5، شارع الخليج العربي".to_string(),
            category: Category::Apartment,
            purpose: Purpose::Rent,
            rooms: 3,
            bathrooms: 3,
            space_sqm: 180,
            images: vec!["https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?auto=format&fit=crop&q=80&w=800".to_string()],
            posted_at: now - Duration::minutes(30),
            whatsapp: "90001001".to_string(),
            company_name: Some("أوتاد العقارية".to_string()),
            featured: true,
            posted_by: "agent_1".to_string(),
        },
        Listing {
            id: "2".to_string(),
            title: "فيلا للبيع في صباح السالم زاوية".to_string(),
            description: "فيلا مودرن، 3 ادوار وسرداب، مصعد، حمام سباحة خاص. بنيان حديث 2023.".to_string(),
            price: 580_000,
            area: "صباح السالم".to_string(),
            governorate: "مبارك الكبير".to_string(),
            location: "قطعة 2، شارع 10".to_string(),
            category: Category::Villa,
            purpose: Purpose::Sale,
            rooms: 7,
            bathrooms: 8,
            space_sqm: 400,
            images: vec!["https://images.unsplash.com/photo-1613977257363-707ba9348227?auto=format&fit=crop&q=80&w=800".to_string()],
            posted_at: now - Duration::hours(2),
            whatsapp: "90001002".to_string(),
            company_name: Some("أوتاد العقارية".to_string()),
            featured: false,
            posted_by: "agent_2".to_string(),
        },
        Listing {
            id: "3".to_string(),
            title: "دور كامل للايجار في الجابرية".to_string(),
            description: "دور ثاني مع مصعد، 4 غرف ماستر، صالة واسعة جدا. موقع مميز.".to_string(),
            price: 900,
            area: "الجابرية".to_string(),
            governorate: "حولي".to_string(),
            location: "قطعة 8".to_string(),
            category: Category::Floor,
            purpose: Purpose::Rent,
            rooms: 4,
            bathrooms: 5,
            space_sqm: 320,
            images: vec!["https://images.unsplash.com/photo-1493809842364-78817add7ffb?auto=format&fit=crop&q=80&w=800".to_string()],
            posted_at: now - Duration::hours(24),
            whatsapp: "65814909".to_string(),
            company_name: Some("أوتاد العقارية".to_string()),
            featured: false,
            posted_by: "usr_admin".to_string(),
        },
    ]
}
