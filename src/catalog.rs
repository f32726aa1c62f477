// SPDX-License-Identifier: MPL-2.0
//! Compile-time content catalog for the showcase.
//!
//! Everything the screens display is defined here as constant data: the
//! gallery media catalog, the hero background rotation, the timeline,
//! today's specials, the restaurant spaces, and contact details. The data is
//! immutable and lives for the whole process; screens only ever read it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag for gallery media. Doubles as the gallery filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Indoor,
    Outdoor,
}

impl Category {
    /// All selectable categories, in display order.
    pub const ALL: [Category; 2] = [Category::Indoor, Category::Outdoor];
}

impl Default for Category {
    fn default() -> Self {
        Category::Indoor
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Indoor => write!(f, "Indoor"),
            Category::Outdoor => write!(f, "Outdoor"),
        }
    }
}

/// A single gallery entry. The item id is its index in [`GALLERY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaItem {
    /// Asset name resolvable by [`crate::assets::load_image`].
    pub source: &'static str,
    /// Accessible description, also shown as the caption.
    pub alt_text: &'static str,
    pub category: Category,
}

/// The gallery catalog. Insertion order is the display order within a
/// category.
pub const GALLERY: &[MediaItem] = &[
    MediaItem {
        source: "ambiance.png",
        alt_text: "Baba Chatore Ambiance",
        category: Category::Indoor,
    },
    MediaItem {
        source: "about.png",
        alt_text: "About Baba Chatore",
        category: Category::Indoor,
    },
    MediaItem {
        source: "chaat.png",
        alt_text: "Delicious Chaat",
        category: Category::Indoor,
    },
    MediaItem {
        source: "dosa.png",
        alt_text: "Crispy Dosa",
        category: Category::Indoor,
    },
    MediaItem {
        source: "juice.png",
        alt_text: "Fresh Juices",
        category: Category::Indoor,
    },
    MediaItem {
        source: "lucknow.png",
        alt_text: "Lucknow City",
        category: Category::Outdoor,
    },
    MediaItem {
        source: "pizza.png",
        alt_text: "Fusion Pizza",
        category: Category::Indoor,
    },
    MediaItem {
        source: "tunday-kebab.png",
        alt_text: "Famous Tunday Kebab",
        category: Category::Indoor,
    },
];

/// Background images rotated on the Home hero, in rotation order.
pub const HERO_BACKGROUNDS: &[&str] = &[
    "lucknow.png",
    "ambiance.png",
    "juice.png",
    "about.png",
    "tunday-kebab.png",
];

/// Seconds between hero background changes.
pub const HERO_ROTATION_SECS: u64 = 5;

/// A milestone on the About timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEvent {
    pub year: u16,
    pub event: &'static str,
}

pub const TIMELINE: &[TimelineEvent] = &[
    TimelineEvent {
        year: 1980,
        event: "Baba Chatore ki shuruaat",
    },
    TimelineEvent {
        year: 1990,
        event: "Pehla expansion: Hazratganj mein naya outlet",
    },
    TimelineEvent {
        year: 2000,
        event: "Lucknow Food Festival mein 'Best Kebab' award",
    },
    TimelineEvent {
        year: 2010,
        event: "Online delivery service ki shuruaat",
    },
    TimelineEvent {
        year: 2020,
        event: "40 saal pure, naye fusion menu ka launch",
    },
];

pub const SPECIALTIES: &[&str] = &[
    "Tunday Kebab",
    "Lucknowi Biryani",
    "Galawati Kebab",
    "Kakori Kebab",
    "Sheermal",
];

/// A dish on the "Today's Specials" section of the Home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Special {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub ingredients: &'static [&'static str],
}

pub const SPECIALS: &[Special] = &[
    Special {
        name: "Dosa",
        description: "Crispy South Indian crepe made from fermented rice and lentil batter.",
        image: "dosa.png",
        ingredients: &["Rice", "Lentils", "Fenugreek Seeds", "Salt"],
    },
    Special {
        name: "Chaat",
        description: "A savory snack originating from India, typically served as a hors d'oeuvre.",
        image: "chaat.png",
        ingredients: &[
            "Chickpeas",
            "Potatoes",
            "Onions",
            "Tamarind Chutney",
            "Yogurt",
        ],
    },
    Special {
        name: "Pizza",
        description: "Our signature pizza with a blend of Indian and Italian flavors.",
        image: "pizza.png",
        ingredients: &[
            "Naan Bread",
            "Tomato Sauce",
            "Mozzarella",
            "Tandoori Chicken",
            "Bell Peppers",
        ],
    },
];

/// A dining area shown on the About screen's spaces section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Space {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const SPACES: &[Space] = &[
    Space {
        name: "Main Dining Area",
        description: "Experience the warmth of our spacious main dining hall, adorned with traditional Lucknowi decor.",
        image: "main-dining.png",
    },
    Space {
        name: "Rooftop Terrace",
        description: "Enjoy your meal under the stars on our beautifully lit rooftop terrace.",
        image: "rooftop.png",
    },
    Space {
        name: "Private Dining Room",
        description: "Host intimate gatherings in our luxurious private dining room.",
        image: "private-room.png",
    },
    Space {
        name: "Bar Lounge",
        description: "Unwind in our stylish bar lounge, offering a wide selection of drinks and appetizers.",
        image: "bar-lounge.png",
    },
    Space {
        name: "Open Kitchen",
        description: "Watch our chefs in action at our state-of-the-art open kitchen.",
        image: "open-kitchen.png",
    },
];

// Contact and external links.
pub const RESTAURANT_NAME: &str = "Baba Chatore";
pub const TAGLINE: &str = "Lucknow's Renowned Cuisine";
pub const PHONE: &str = "+91 7838231467";
pub const EMAIL: &str = "info@babachatore.com";
pub const ADDRESS: &str = "AIROOMS Girls Hostel, Plot No-37/38, Hasemau Near, \
     Left Lane from Petrol Pump, 4, Amity University Rd, Uttar Pradesh 226010, India";

/// Lucknow coordinates used for the map links.
pub const MAP_LAT: f64 = 26.8467;
pub const MAP_LON: f64 = 80.9462;

/// External flipbook hosting the printed menu.
pub const MENU_FLIPBOOK_URL: &str = "https://online.anyflip.com/tdviq/yqig/index.html";

/// Builds the Google Maps directions URL for the restaurant address.
pub fn directions_url() -> String {
    let encoded: String = ADDRESS
        .chars()
        .map(|c| match c {
            ' ' => "+".to_string(),
            ',' => "%2C".to_string(),
            '/' => "%2F".to_string(),
            '-' | '.' | '_' | '~' => c.to_string(),
            c if c.is_ascii_alphanumeric() => c.to_string(),
            c => {
                let mut buf = [0u8; 4];
                c.encode_utf8(&mut buf)
                    .bytes()
                    .map(|b| format!("%{:02X}", b))
                    .collect()
            }
        })
        .collect();
    format!("https://www.google.com/maps/dir/?api=1&destination={encoded}")
}

/// Builds the OpenStreetMap URL centered on the restaurant.
pub fn map_url() -> String {
    format!("https://www.openstreetmap.org/?mlat={MAP_LAT}&mlon={MAP_LON}#map=15/{MAP_LAT}/{MAP_LON}")
}
