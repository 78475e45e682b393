//! Plain-text rendering of the storefront.
//!
//! Every renderer is a pure function of its inputs, so the page can be
//! rebuilt from a fresh cart snapshot after each action.

use super::sections::*;
use crate::config::StorefrontConfig;
use crate::model::{Cart, Catalog, CatalogItem};
use crate::order::{delivery_calendar, is_weekend, DeliveryEstimate};
use chrono::{Datelike, NaiveDateTime};
use std::fmt::Write;

/// Everything a full page render needs.
pub struct PageContext<'a> {
    pub config: &'a StorefrontConfig,
    pub catalog: &'a Catalog,
    pub cart: &'a Cart,
    pub now: NaiveDateTime,
}

fn heading(out: &mut String, section: SectionId, title: &str) {
    let _ = writeln!(out, "== {} {}", title, section);
}

pub fn render_navigation(config: &StorefrontConfig) -> String {
    let links: Vec<String> = NAV_ENTRIES
        .iter()
        .map(|(label, target)| format!("{} ({})", label, target))
        .collect();
    format!("{} | {}\n", config.business_name, links.join(" | "))
}

pub fn render_hero(config: &StorefrontConfig) -> String {
    let mut out = String::new();
    heading(&mut out, SectionId::Hero, &config.business_name);
    let _ = writeln!(out, "{}", config.tagline);
    let _ = writeln!(out, "[Order Now] ({})", SectionId::Menu);
    out
}

pub fn render_story() -> String {
    let mut out = String::new();
    heading(&mut out, SectionId::Story, "Our Story");
    let _ = writeln!(out, "\"{}\"", STORY_QUOTE);
    for (title, body) in STORY_CHAPTERS {
        let _ = writeln!(out, "\n{}\n{}", title, body);
    }
    out.push('\n');
    for (title, description) in STORY_VALUES {
        let _ = writeln!(out, "* {}: {}", title, description);
    }
    let _ = writeln!(out, "\n{}", STORY_SIGNOFF);
    out
}

pub fn render_gallery() -> String {
    let mut out = String::new();
    heading(&mut out, SectionId::Gallery, "Gallery");
    for (alt, src) in GALLERY {
        let _ = writeln!(out, "- {} <{}>", alt, src);
    }
    out
}

/// One menu entry; the button reads "Added to Cart" once the item is in.
pub fn render_menu_item(item: &CatalogItem, in_cart: bool) -> String {
    let button = if in_cart { "[✓ Added to Cart]" } else { "[+ Add to Cart]" };
    format!(
        "  {} {}\n    {}\n    {} ({})\n",
        item.name,
        item.price.display_compact(),
        item.description,
        button,
        item.id
    )
}

pub fn render_menu(catalog: &Catalog, cart: &Cart) -> String {
    let mut out = String::new();
    heading(&mut out, SectionId::Menu, "Menu");
    for category in catalog.categories() {
        let _ = writeln!(out, "\n{}", category.title);
        for item in &category.items {
            out.push_str(&render_menu_item(item, cart.is_in_cart(&item.id)));
        }
    }
    out
}

pub fn render_order(config: &StorefrontConfig, now: NaiveDateTime) -> String {
    let estimate = DeliveryEstimate::at(now, config.delivery_cutoff_hour);
    let mut out = String::new();
    heading(&mut out, SectionId::Order, "Order Your Fresh Baked Cookies");
    let _ = writeln!(out, "Delivery Information");
    let weekend = if is_weekend(estimate.date) { " (weekend)" } else { "" };
    let _ = writeln!(out, "{}{}", estimate.headline(), weekend);
    let _ = writeln!(out, "- {}", ADVANCE_BOOKING_NOTE);
    let _ = writeln!(out, "- Delivery in {} only", config.delivery_area);
    let _ = writeln!(out, "\nDelivery Calendar\n{}", delivery_calendar(estimate.date));
    let _ = writeln!(out, "How to Order");
    for (index, (title, description)) in ORDER_STEPS.iter().enumerate() {
        let _ = writeln!(out, "{}. {}: {}", index + 1, title, description);
    }
    out
}

pub fn render_cart(cart: &Cart) -> String {
    let mut out = String::new();
    heading(&mut out, SectionId::Cart, "My Cart");
    if cart.is_empty() {
        let _ = writeln!(out, "Your cart is empty");
        return out;
    }
    for line in cart.lines() {
        let _ = writeln!(
            out,
            "- {} ({}) [-] {} [+] {} [remove {}]",
            line.item.name,
            line.item.description,
            line.quantity,
            line.subtotal(),
            line.item.id
        );
    }
    let _ = writeln!(out, "Total {}", cart.total_amount());
    out
}

/// The floating cart badge. Hidden while the cart is empty.
pub fn render_cart_badge(cart: &Cart) -> Option<String> {
    match cart.total_items() {
        0 => None,
        n => Some(format!("[🛒 {}] {}", n, SectionId::Cart)),
    }
}

pub fn render_contact(config: &StorefrontConfig) -> String {
    let mut out = String::new();
    heading(&mut out, SectionId::Contact, "Place Your Order");
    let _ = writeln!(out, "Follow & Order on Instagram");
    let _ = writeln!(
        out,
        "DM us on Instagram to place your order and stay updated with our latest creations!"
    );
    let _ = writeln!(out, "[Copy Order Details]");
    let _ = writeln!(out, "{} <{}>", config.instagram_display(), config.dm_link);
    out
}

pub fn render_footer(config: &StorefrontConfig, now: NaiveDateTime) -> String {
    format!(
        "© {} {}. All rights reserved.\n",
        now.year(),
        config.business_name
    )
}

/// Renders one section.
pub fn render_section(section: SectionId, page: &PageContext<'_>) -> String {
    match section {
        SectionId::Hero => render_hero(page.config),
        SectionId::Story => render_story(),
        SectionId::Gallery => render_gallery(),
        SectionId::Menu => render_menu(page.catalog, page.cart),
        SectionId::Order => render_order(page.config, page.now),
        SectionId::Cart => render_cart(page.cart),
        SectionId::Contact => render_contact(page.config),
        SectionId::Footer => render_footer(page.config, page.now),
    }
}

/// The whole page: navigation, every section in order, then the badge.
pub fn render_page(page: &PageContext<'_>) -> String {
    let mut out = render_navigation(page.config);
    for section in SectionId::ALL {
        out.push('\n');
        out.push_str(&render_section(section, page));
    }
    if let Some(badge) = render_cart_badge(page.cart) {
        let _ = writeln!(out, "\n{}", badge);
    }
    out
}
