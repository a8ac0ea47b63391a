//! Seed Items
//!
//! Example catalogue used whenever the remote service is unreachable.

use chrono::{DateTime, NaiveDate, Utc};

use super::item::Item;

/// First identifier handed out when only the seed items exist
pub const SEED_NEXT_ID: u32 = 6;

const SEED: &[(u32, &str, &str, &str, f64, (i32, u32, u32))] = &[
    (1, "Laptop", "High-performance laptop for developers", "Electronics", 1299.99, (2023, 1, 15)),
    (2, "Smartphone", "Latest model with advanced camera", "Electronics", 899.99, (2023, 2, 20)),
    (3, "Desk Chair", "Ergonomic chair for home office", "Furniture", 249.99, (2023, 3, 10)),
    (4, "Coffee Maker", "Programmable coffee maker with built-in grinder", "Kitchen", 129.99, (2023, 4, 5)),
    (5, "Wireless Headphones", "Noise-cancelling wireless headphones", "Electronics", 199.99, (2023, 5, 12)),
];

fn midnight_utc((year, month, day): (i32, u32, u32)) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

/// Fresh copy of the five seed items (ids 1 to 5)
pub fn seed_items() -> Vec<Item> {
    SEED.iter()
        .map(|&(id, name, description, category, price, date)| Item {
            id,
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            price,
            created_at: midnight_utc(date),
        })
        .collect()
}
