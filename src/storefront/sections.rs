//! Page sections and their fixed copy.

use serde::Serialize;
use std::fmt::Display;

/// The sections of the single page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectionId {
    Hero,
    Story,
    Gallery,
    Menu,
    Order,
    Cart,
    Contact,
    Footer,
}

impl SectionId {
    /// Page order.
    pub const ALL: [SectionId; 8] = [
        SectionId::Hero,
        SectionId::Story,
        SectionId::Gallery,
        SectionId::Menu,
        SectionId::Order,
        SectionId::Cart,
        SectionId::Contact,
        SectionId::Footer,
    ];

    /// Anchor id, e.g. `menu`.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Story => "story",
            SectionId::Gallery => "gallery",
            SectionId::Menu => "menu",
            SectionId::Order => "order",
            SectionId::Cart => "cart",
            SectionId::Contact => "contact",
            SectionId::Footer => "footer",
        }
    }

    /// Looks up a section by anchor. Case-insensitive, `#` prefix allowed.
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|section| section.anchor().eq_ignore_ascii_case(anchor))
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.anchor())
    }
}

/// Navigation bar entries: label and target.
pub const NAV_ENTRIES: [(&str, SectionId); 5] = [
    ("Story", SectionId::Story),
    ("Gallery", SectionId::Gallery),
    ("Menu", SectionId::Menu),
    ("Order", SectionId::Order),
    ("Place Your Order", SectionId::Contact),
];

pub const STORY_QUOTE: &str = "Baking happiness, one cookie at a time";

pub const STORY_CHAPTERS: [(&str, &str); 2] = [
    (
        "Our Beginning",
        "Cookie Menace started in our home kitchen with a simple mission: to create the most \
         delicious, homemade cookies that bring smiles to people's faces. Each cookie is crafted \
         with love, using only the finest ingredients and time-honored recipes.",
    ),
    (
        "Where We Are Today",
        "What began as a passion project has grown into a beloved local cookie boutique, serving \
         our community with freshly baked happiness. Our commitment to quality and taste remains \
         unchanged, as we continue to delight customers with every bite.",
    ),
];

pub const STORY_VALUES: [(&str, &str); 3] = [
    ("Quality", "Only the finest ingredients"),
    ("Love", "Baked with passion & care"),
    ("Fresh", "Made fresh to order"),
];

pub const STORY_SIGNOFF: &str = "Thank you for being part of our sweet journey!";

/// Gallery images: alt text and URL.
pub const GALLERY: [(&str, &str); 4] = [
    ("Chocolate Chip Cookies", "https://cookiemenace.s3.us-east-2.amazonaws.com/cookie1.jpeg"),
    ("Double Chocolate Cookies", "https://cookiemenace.s3.us-east-2.amazonaws.com/cookie2.jpeg"),
    ("Oatmeal Raisin Cookies", "https://cookiemenace.s3.us-east-2.amazonaws.com/cookie3.jpeg"),
    ("Sugar Cookies", "https://cookiemenace.s3.us-east-2.amazonaws.com/cookie2.jpeg"),
];

pub const ORDER_STEPS: [(&str, &str); 4] = [
    ("Select Your Cookies", "Choose from our delicious menu of freshly baked cookies"),
    ("Place Your Order", "DM us on Instagram with your selection and delivery details"),
    ("Confirm Order", "Receive order confirmation and payment instructions"),
    ("Enjoy!", "Your fresh cookies will be delivered at the scheduled time"),
];

pub const ADVANCE_BOOKING_NOTE: &str = "24 hours advance booking required";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(SectionId::from_anchor("#Menu"), Some(SectionId::Menu));
        assert_eq!(SectionId::from_anchor("faq"), None);
    }

    #[test]
    fn place_your_order_targets_contact() {
        let (label, target) = NAV_ENTRIES[NAV_ENTRIES.len() - 1];
        assert_eq!(label, "Place Your Order");
        assert_eq!(target, SectionId::Contact);
    }
}
