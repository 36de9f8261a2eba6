//! Built-in restaurants and slice colors.

use crate::wheel::Entry;

/// Default restaurants in wheel order.
pub const DEFAULT_RESTAURANTS: &[(&str, &[&str])] = &[
    ("Chipotle", &["Sofritas burrito", "Sofritas bowl"]),
    (
        "Rosa's Pizza",
        &["Grandma slice", "Margherita slice", "Garlic knots"],
    ),
    ("Best Pizza", &["Grandma slice", "White slice", "Garlic knots"]),
    ("Halal Munchies", &["Mixed platter over rice", "Wings"]),
    ("Gunther’s", &["Grilled cheese", "Tomato soup"]),
    ("Subway", &["Tuna 12” sandwich"]),
    ("Salty Little Lady Luncheonette", &["Tuna crunch sandwich"]),
    ("La Casita Mexicana", &["Fish tacos", "Guac & chips"]),
    ("Pattanian Thai", &["Chicken Drunken Noodles"]),
    ("BK Jani", &["Jani Burger", "Lamb Chops", "Fries"]),
    (
        "Namkeen",
        &["Chicken sandwich", "Tikka melt", "Chicken Tender"],
    ),
    ("Blue Hour", &["Burger"]),
    ("Zatar", &["Mediterranean bowl"]),
    ("Peri Peri Flamin Grill", &["Half spicy chicken"]),
    ("Eat Real Halal", &["Mixed over rice gyro"]),
    (
        "Karachi Kabab Boiz",
        &["Behari kebab roll", "Malai chicken roll"],
    ),
    ("McDonald’s", &["Filet-O-Fish"]),
];

/// Slice fill colors, cycled by slice index.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#EF476F", // vivid pink
    "#FFD166", // bright gold
    "#06D6A0", // teal green
    "#118AB2", // sky blue
    "#073B4C", // deep navy
    "#FF6B6B", // coral red
    "#4ECDC4", // turquoise
    "#1A535C", // dark teal
];

/// Label color drawn on top of slices.
pub const SLICE_TEXT_COLOR: &str = "#FFFFFF";

/// The default restaurant set as owned entries.
pub fn default_entries() -> Vec<Entry> {
    DEFAULT_RESTAURANTS
        .iter()
        .map(|(name, items)| Entry {
            name: (*name).to_string(),
            items: items.iter().map(|item| (*item).to_string()).collect(),
        })
        .collect()
}

pub fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect()
}
