//! # Cookie Menace
//!
//! > **A headless storefront for a home bakery.**
//!
//! Customers browse the menu, fill a cart, and copy a ready-made order
//! message into the bakery's Instagram DMs. There is no checkout, payment or
//! persistence: the cart lives for one session and its only output is text.
//!
//! ## 🏗️ Design
//!
//! ### One owner for the cart
//! The cart is not a global. It lives inside a [`StateActor`](framework::StateActor)
//! task and everyone else holds a cloneable [`CartClient`](clients::CartClient).
//! Commands are applied one at a time, so each one is atomic for the caller.
//!
//! ### Prices are integers
//! Menu prices like `₹89` are parsed once, when the [`Catalog`](model::Catalog)
//! loads, into [`Money`](model::Money) (paise + currency). Totals are exact.
//!
//! ### Items have ids
//! Every [`CatalogItem`](model::CatalogItem) carries an explicit
//! [`ItemId`](model::ItemId). Three "Party Pack"s can share a name and still
//! be told apart.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - [`Money`](model::Money), [`Catalog`](model::Catalog), [`Cart`](model::Cart).
//!
//! ### 2. The Rules ([`order`])
//! - [`format_order_message`](order::format_order_message): cart → DM text.
//! - [`next_delivery_date`](order::next_delivery_date): local time → earliest delivery day.
//!
//! ### 3. The Engine ([`framework`], [`cart_actor`], [`clients`])
//! - Generic state actor, the cart's command set, and the typed cart client.
//!
//! ### 4. The Shell ([`storefront`])
//! - [`Storefront`](storefront::Storefront) handles clicks, copies the order,
//!   and renders the page as text.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! - [`StorefrontSystem`](lifecycle::StorefrontSystem) starts and stops everything;
//!   [`StorefrontConfig`](config::StorefrontConfig) holds the settings.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo session with info logs
//! RUST_LOG=info cargo run
//!
//! # Pretend it is late evening
//! COOKIE_MENACE_CUTOFF_HOUR=0 cargo run
//! ```

pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order;
pub mod storefront;
