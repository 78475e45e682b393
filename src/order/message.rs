//! The order message a customer copies into the merchant's DMs.

use crate::model::CartLine;
use std::fmt::Write;

/// Name used in the greeting when no config overrides it.
pub const DEFAULT_GREETING_NAME: &str = "CookieMenace";

/// The message opener, addressed to `name`.
pub fn greeting(name: &str) -> String {
    format!("Hi {}! I would like to order the following item(s) from you:\n\n", name)
}

/// Formats the order request with the default greeting.
pub fn format_order_message(lines: &[CartLine]) -> String {
    format_order_message_with(DEFAULT_GREETING_NAME, lines)
}

/// Formats the order request addressed to `greeting_name`.
///
/// One numbered line per cart line, in cart order:
/// `1. Single Cookie - Our signature chocolate chip cookie x2 (₹89 each)`.
/// An empty cart yields the greeting alone.
pub fn format_order_message_with(greeting_name: &str, lines: &[CartLine]) -> String {
    let mut message = greeting(greeting_name);
    for (index, line) in lines.iter().enumerate() {
        // writing to a String cannot fail
        let _ = writeln!(
            message,
            "{}. {} - {} x{} ({} each)",
            index + 1,
            line.item.name,
            line.item.description,
            line.quantity,
            line.item.price.display_compact()
        );
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cart, CatalogItem, Currency, Money};

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        let cookie = CatalogItem::new(
            "chocochip-single",
            "Single Cookie",
            "Our signature chocolate chip cookie",
            Money::from_major(89, Currency::Inr),
        );
        cart.add_item(cookie.clone());
        cart.add_item(cookie);
        cart.add_item(CatalogItem::new(
            "brookie-single",
            "Single Brookie",
            "Brownie meets cookie in this delicious treat",
            Money::from_major(99, Currency::Inr),
        ));
        cart
    }

    #[test]
    fn lists_lines_in_cart_order() {
        let message = format_order_message(sample_cart().lines());
        assert_eq!(
            message,
            "Hi CookieMenace! I would like to order the following item(s) from you:\n\n\
             1. Single Cookie - Our signature chocolate chip cookie x2 (₹89 each)\n\
             2. Single Brookie - Brownie meets cookie in this delicious treat x1 (₹99 each)\n"
        );
    }

    #[test]
    fn empty_cart_is_greeting_only() {
        assert_eq!(
            format_order_message(&[]),
            "Hi CookieMenace! I would like to order the following item(s) from you:\n\n"
        );
    }

    #[test]
    fn formatting_is_repeatable() {
        let cart = sample_cart();
        assert_eq!(format_order_message(cart.lines()), format_order_message(cart.lines()));
    }

    #[test]
    fn greeting_name_is_configurable() {
        let message = format_order_message_with("Menace HQ", &[]);
        assert!(message.starts_with("Hi Menace HQ!"));
    }
}
