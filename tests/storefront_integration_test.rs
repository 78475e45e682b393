use async_trait::async_trait;
use chrono::NaiveDate;
use cookie_menace::clients::actor_client::ActorClient;
use cookie_menace::config::StorefrontConfig;
use cookie_menace::lifecycle::StorefrontSystem;
use cookie_menace::model::{CatalogError, Currency, ItemId, Money};
use cookie_menace::storefront::{
    Clipboard, ClipboardError, MemoryClipboard, NoticeKind, SectionId, ShopAction, ShopError, ShopOutcome,
    COPIED_NOTICE, EMPTY_CART_NOTICE,
};
use std::sync::Arc;

struct DeniedClipboard;

#[async_trait]
impl Clipboard for DeniedClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::PermissionDenied)
    }
}

fn id(s: &str) -> ItemId {
    ItemId::from(s)
}

/// Full session against the real cart actor: click, copy, shut down.
#[tokio::test]
async fn test_full_storefront_session() {
    let clipboard = MemoryClipboard::new();
    let system = StorefrontSystem::new(StorefrontConfig::default(), Arc::new(clipboard.clone()))
        .expect("Failed to start storefront");
    let shop = &system.storefront;

    // Add a cookie and a brookie from the menu
    let outcome = shop
        .dispatch(ShopAction::AddToCart(id("chocochip-single")))
        .await
        .expect("Failed to add cookie");
    assert_eq!(
        outcome,
        ShopOutcome::Added {
            id: id("chocochip-single"),
            quantity: 1
        }
    );
    shop.dispatch(ShopAction::AddToCart(id("brookie-single")))
        .await
        .expect("Failed to add brookie");

    // The menu button is inert once the item is in the cart
    let outcome = shop
        .dispatch(ShopAction::AddToCart(id("chocochip-single")))
        .await
        .unwrap();
    assert_eq!(outcome, ShopOutcome::AlreadyInCart(id("chocochip-single")));

    // The cart "+" button is how quantities grow
    let outcome = shop
        .dispatch(ShopAction::Increment(id("chocochip-single")))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        ShopOutcome::Quantity {
            id: id("chocochip-single"),
            quantity: Some(2)
        }
    );

    assert_eq!(shop.cart().total_items().await.unwrap(), 3);
    assert_eq!(
        shop.cart().total_amount().await.unwrap(),
        Money::from_major(277, Currency::Inr)
    );

    // Copy the order
    let outcome = shop.dispatch(ShopAction::CopyOrder).await.unwrap();
    match outcome {
        ShopOutcome::Notice(notice) => {
            assert_eq!(notice.kind, NoticeKind::Success);
            assert_eq!(notice.text, COPIED_NOTICE);
        }
        other => panic!("Expected a notice, got {:?}", other),
    }
    assert_eq!(
        clipboard.contents().as_deref(),
        Some(
            "Hi CookieMenace! I would like to order the following item(s) from you:\n\n\
             1. Single Cookie - Our signature chocolate chip cookie x2 (₹89 each)\n\
             2. Single Brookie - Brownie meets cookie in this delicious treat x1 (₹99 each)\n"
        )
    );

    // Shutdown hands back the cart as it was
    let final_cart = system.shutdown().await.expect("Shutdown failed");
    assert_eq!(final_cart.len(), 2);
    assert_eq!(final_cart.total_items(), 3);
}

/// Two overlapping menu clicks on the same item: exactly one adds it.
#[tokio::test]
async fn test_overlapping_add_clicks_add_once() {
    let system = StorefrontSystem::new(StorefrontConfig::default(), Arc::new(MemoryClipboard::new())).unwrap();
    let shop = &system.storefront;

    let (first, second) = tokio::join!(
        shop.dispatch(ShopAction::AddToCart(id("brookie-single"))),
        shop.dispatch(ShopAction::AddToCart(id("brookie-single")))
    );
    let outcomes = [first.unwrap(), second.unwrap()];

    let added = outcomes
        .iter()
        .filter(|o| matches!(o, ShopOutcome::Added { quantity: 1, .. }))
        .count();
    let inert = outcomes
        .iter()
        .filter(|o| matches!(o, ShopOutcome::AlreadyInCart(_)))
        .count();
    assert_eq!((added, inert), (1, 1), "outcomes: {:?}", outcomes);
    assert_eq!(shop.cart().total_items().await.unwrap(), 1);

    let final_cart = system.shutdown().await.unwrap();
    assert_eq!(final_cart.total_items(), 1);
}

#[tokio::test]
async fn test_decrement_to_zero_removes_line() {
    let system = StorefrontSystem::new(StorefrontConfig::default(), Arc::new(MemoryClipboard::new())).unwrap();
    let shop = &system.storefront;

    shop.dispatch(ShopAction::AddToCart(id("extra-chocochips")))
        .await
        .unwrap();
    let outcome = shop
        .dispatch(ShopAction::Decrement(id("extra-chocochips")))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        ShopOutcome::Quantity {
            id: id("extra-chocochips"),
            quantity: None
        }
    );
    assert!(!shop.cart().is_in_cart(id("extra-chocochips")).await.unwrap());

    // The menu button works again once the line is gone
    let outcome = shop
        .dispatch(ShopAction::AddToCart(id("extra-chocochips")))
        .await
        .unwrap();
    assert!(matches!(outcome, ShopOutcome::Added { quantity: 1, .. }));

    let final_cart = system.shutdown().await.unwrap();
    assert_eq!(final_cart.total_items(), 1);
}

#[tokio::test]
async fn test_remove_reports_whether_anything_was_removed() {
    let system = StorefrontSystem::new(StorefrontConfig::default(), Arc::new(MemoryClipboard::new())).unwrap();
    let shop = &system.storefront;

    shop.dispatch(ShopAction::AddToCart(id("nutella-single")))
        .await
        .unwrap();

    let first = shop
        .dispatch(ShopAction::Remove(id("nutella-single")))
        .await
        .unwrap();
    let second = shop
        .dispatch(ShopAction::Remove(id("nutella-single")))
        .await
        .unwrap();
    assert_eq!(
        first,
        ShopOutcome::Removed {
            id: id("nutella-single"),
            removed: true
        }
    );
    assert_eq!(
        second,
        ShopOutcome::Removed {
            id: id("nutella-single"),
            removed: false
        }
    );

    let final_cart = system.shutdown().await.unwrap();
    assert!(final_cart.is_empty());
}

#[tokio::test]
async fn test_copy_with_empty_cart_leaves_clipboard_alone() {
    let clipboard = MemoryClipboard::new();
    let system = StorefrontSystem::new(StorefrontConfig::default(), Arc::new(clipboard.clone())).unwrap();

    let notice = system.storefront.copy_order_details().await.unwrap();
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(notice.text, EMPTY_CART_NOTICE);
    assert_eq!(clipboard.contents(), None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_clipboard_failure_becomes_failure_notice() {
    let system = StorefrontSystem::new(StorefrontConfig::default(), Arc::new(DeniedClipboard)).unwrap();
    let shop = &system.storefront;

    shop.dispatch(ShopAction::AddToCart(id("brookie-party")))
        .await
        .unwrap();
    let notice = shop.copy_order_details().await.unwrap();

    assert_eq!(notice.kind, NoticeKind::Failure);
    assert!(notice.text.contains("permission denied"), "got: {}", notice.text);
    assert!(notice.text.contains("@cookie_menace"), "got: {}", notice.text);

    // The cart is untouched by the failed copy
    let final_cart = system.shutdown().await.unwrap();
    assert_eq!(final_cart.total_items(), 1);
}

#[tokio::test]
async fn test_unknown_item_is_rejected_before_reaching_cart() {
    let system = StorefrontSystem::new(StorefrontConfig::default(), Arc::new(MemoryClipboard::new())).unwrap();

    let result = system
        .storefront
        .dispatch(ShopAction::AddToCart(id("croissant")))
        .await;
    assert_eq!(
        result,
        Err(ShopError::Catalog(CatalogError::UnknownItem(id("croissant"))))
    );

    let final_cart = system.shutdown().await.unwrap();
    assert!(final_cart.is_empty());
}

#[tokio::test]
async fn test_scroll_to_known_and_unknown_anchors() {
    let system = StorefrontSystem::new(StorefrontConfig::default(), Arc::new(MemoryClipboard::new())).unwrap();
    let shop = &system.storefront;

    assert_eq!(
        shop.dispatch(ShopAction::ScrollTo("#menu".to_string()))
            .await
            .unwrap(),
        ShopOutcome::Scrolled(Some(SectionId::Menu))
    );
    assert_eq!(
        shop.dispatch(ShopAction::ScrollTo("#checkout".to_string()))
            .await
            .unwrap(),
        ShopOutcome::Scrolled(None)
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rendered_page_reflects_cart_and_delivery() {
    let system = StorefrontSystem::new(StorefrontConfig::default(), Arc::new(MemoryClipboard::new())).unwrap();
    let shop = &system.storefront;

    // Monday 19 October 2026, 19:30: past the 6 PM cutoff
    let now = NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(19, 30, 0)
        .unwrap();

    let empty_cart = shop.render_section(SectionId::Cart, now).await.unwrap();
    assert!(empty_cart.contains(EMPTY_CART_NOTICE));

    shop.dispatch(ShopAction::AddToCart(id("chocochip-single")))
        .await
        .unwrap();
    shop.dispatch(ShopAction::Increment(id("chocochip-single")))
        .await
        .unwrap();
    shop.dispatch(ShopAction::AddToCart(id("brookie-single")))
        .await
        .unwrap();

    let page = shop.render_page(now).await.unwrap();
    assert!(page.contains("Total ₹277.00"), "page:\n{}", page);
    assert!(page.contains("[✓ Added to Cart]"));
    assert!(page.contains("Wednesday, 21 October"));
    assert!(page.contains("[🛒 3]"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_snapshot_is_a_copy() {
    let system = StorefrontSystem::new(StorefrontConfig::default(), Arc::new(MemoryClipboard::new())).unwrap();
    let shop = &system.storefront;

    shop.dispatch(ShopAction::AddToCart(id("mini-chocochip-box")))
        .await
        .unwrap();
    let mut snapshot = shop.cart().snapshot().await.unwrap();
    snapshot.clear();

    assert_eq!(shop.cart().total_items().await.unwrap(), 1);
    system.shutdown().await.unwrap();
}
