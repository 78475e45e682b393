//! Demo session: add a few cookies, tweak quantities, copy the order.

use chrono::Local;
use cookie_menace::config::StorefrontConfig;
use cookie_menace::lifecycle::{setup_tracing, StorefrontSystem};
use cookie_menace::storefront::{MemoryClipboard, ShopAction, ShopOutcome};
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StorefrontConfig::from_env().map_err(|e| e.to_string())?;
    info!(business = %config.business_name, cutoff = config.delivery_cutoff_hour, "Starting storefront");

    let clipboard = MemoryClipboard::new();
    let system = StorefrontSystem::new(config, Arc::new(clipboard.clone())).map_err(|e| e.to_string())?;
    let shop = &system.storefront;

    let clicks = [
        ShopAction::ScrollTo("menu".to_string()),
        ShopAction::AddToCart("chocochip-single".into()),
        ShopAction::AddToCart("chocochip-single".into()),
        ShopAction::Increment("chocochip-single".into()),
        ShopAction::AddToCart("brookie-single".into()),
        ShopAction::AddToCart("extra-chocochips".into()),
        ShopAction::Decrement("extra-chocochips".into()),
        ShopAction::ScrollTo("cart".to_string()),
    ];

    let span = tracing::info_span!("shopping");
    async {
        for click in clicks {
            match shop.dispatch(click).await {
                Ok(outcome) => info!(?outcome, "Action handled"),
                Err(e) => error!(error = %e, "Action failed"),
            }
        }
    }
    .instrument(span)
    .await;

    let page = shop
        .render_page(Local::now().naive_local())
        .await
        .map_err(|e| e.to_string())?;
    println!("{}", page);

    match shop.dispatch(ShopAction::CopyOrder).await {
        Ok(ShopOutcome::Notice(notice)) => println!("\n>> {}", notice.text),
        Ok(other) => error!(?other, "Unexpected outcome"),
        Err(e) => error!(error = %e, "Copy failed"),
    }
    if let Some(text) = clipboard.contents() {
        println!("\n{}", text);
        println!("Paste it at {}", shop.config().dm_link);
    }

    system.shutdown().await?;
    Ok(())
}
