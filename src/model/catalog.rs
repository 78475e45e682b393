//! The bakery menu.
//!
//! The catalog is compiled in as a table of [`RawCategory`] rows and parsed
//! once by [`Catalog::from_raw`]. After that it is read-only and shared as an
//! `Arc<Catalog>` (it is the context injected into the cart actor).

use crate::model::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use thiserror::Error;
use tracing::{debug, warn};

/// Type-safe identifier for catalog items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur while building or querying the catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// Two rows share one item id.
    #[error("Duplicate catalog item id: {0}")]
    DuplicateItem(ItemId),

    /// The requested item is not on the menu.
    #[error("Unknown catalog item: {0}")]
    UnknownItem(ItemId),
}

/// One orderable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: Money,
}

impl CatalogItem {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A titled group of items, e.g. "Brookies".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub items: Vec<CatalogItem>,
}

/// Unparsed catalog row as written in the menu table.
#[derive(Debug, Clone, Copy)]
pub struct RawItem {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

/// Unparsed catalog category.
#[derive(Debug, Clone, Copy)]
pub struct RawCategory {
    pub title: &'static str,
    pub items: &'static [RawItem],
}

/// The read-only product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    index: HashMap<ItemId, (usize, usize)>,
}

impl Catalog {
    /// Builds a catalog from raw rows, parsing every price once.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateItem`] when two rows share an id.
    ///
    /// # Notes
    /// A malformed price does not fail the load: the item is priced at zero
    /// and a warning is logged so the menu table can be fixed.
    pub fn from_raw(raw: &[RawCategory], currency: Currency) -> Result<Self, CatalogError> {
        let mut categories = Vec::with_capacity(raw.len());
        let mut index = HashMap::new();

        for (c, raw_category) in raw.iter().enumerate() {
            let mut items = Vec::with_capacity(raw_category.items.len());
            for (i, row) in raw_category.items.iter().enumerate() {
                let id = ItemId::from(row.id);
                if index.insert(id.clone(), (c, i)).is_some() {
                    return Err(CatalogError::DuplicateItem(id));
                }
                let price = Money::parse(row.price, currency).unwrap_or_else(|e| {
                    warn!(item_id = %id, error = %e, "Malformed catalog price, counting as zero");
                    Money::zero(currency)
                });
                items.push(CatalogItem::new(id, row.name, row.description, price));
            }
            categories.push(Category {
                title: raw_category.title.to_string(),
                items,
            });
        }

        debug!(categories = categories.len(), items = index.len(), "Catalog loaded");
        Ok(Self { categories, index })
    }

    /// The built-in Cookie Menace menu.
    pub fn bakery() -> Result<Self, CatalogError> {
        Self::from_raw(BAKERY_MENU, Currency::Inr)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.index
            .get(id)
            .map(|&(c, i)| &self.categories[c].items[i])
    }

    /// Like [`Catalog::get`] but with a typed error for unknown ids.
    pub fn require(&self, id: &ItemId) -> Result<&CatalogItem, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::UnknownItem(id.clone()))
    }
}

const fn item(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: &'static str,
) -> RawItem {
    RawItem {
        id,
        name,
        description,
        price,
    }
}

/// The bakery's menu table.
pub const BAKERY_MENU: &[RawCategory] = &[
    RawCategory {
        title: "Classic Chocochip Cookies",
        items: &[
            item("chocochip-single", "Single Cookie", "Our signature chocolate chip cookie", "₹89"),
            item("chocochip-double", "Double Delight", "Pack of 2 chocolate chip cookies", "₹169"),
            item("chocochip-party", "Party Pack", "Pack of 5 chocolate chip cookies", "₹429"),
        ],
    },
    RawCategory {
        title: "Brookies",
        items: &[
            item("brookie-single", "Single Brookie", "Brownie meets cookie in this delicious treat", "₹99"),
            item("brookie-double", "Double Brookie", "Pack of 2 brookies", "₹179"),
            item("brookie-party", "Party Pack", "Pack of 5 brookies", "₹479"),
        ],
    },
    RawCategory {
        title: "Nutella Cookies",
        items: &[
            item("nutella-single", "Single Cookie", "Cookie loaded with Nutella goodness", "₹109"),
            item("nutella-double", "Double Delight", "Pack of 2 Nutella cookies", "₹199"),
            item("nutella-party", "Party Pack", "Pack of 5 Nutella cookies", "₹529"),
        ],
    },
    RawCategory {
        title: "Specials",
        items: &[
            item("mini-chocochip-box", "Mini Chocochip Cookie Box", "Box of bite-sized chocolate chip cookies", "₹250"),
            item("extra-chocochips", "Extra Chocochips", "Add more chocolate chips to any cookie", "₹10"),
        ],
    },
];
