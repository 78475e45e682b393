//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`); the
//! cart actor tags its lines with `state_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup and shutdown of the cart actor
//! - **Cart Commands**: Every command at `debug`, state changes at `info`
//! - **Client Calls**: `#[instrument]` spans on [`CartClient`](crate::clients::CartClient) methods
//! - **Problems**: malformed catalog prices and clipboard failures at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show command payloads and replies
//! RUST_LOG=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started state_type="Cart"
//! INFO Storefront started items=11
//! INFO dispatch:add_item: Added to cart item_id=brookie-single quantity=1 lines=1
//! INFO copy_order_details: Order copied lines=1 total=₹99.00
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
