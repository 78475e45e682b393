//! User actions and what the shell reports back.

use super::sections::SectionId;
use crate::model::ItemId;

/// Something the customer clicked.
#[derive(Debug, Clone, PartialEq)]
pub enum ShopAction {
    /// Menu "Add to Cart" button. Inert once the item is in the cart.
    AddToCart(ItemId),
    /// Cart "+" button.
    Increment(ItemId),
    /// Cart "-" button. Removes the line at zero.
    Decrement(ItemId),
    /// Cart trash button.
    Remove(ItemId),
    /// "Copy Order Details" button.
    CopyOrder,
    /// Navigation link or anchor.
    ScrollTo(String),
}

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Failure,
}

/// A blocking acknowledgment shown to the customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Failure, text: text.into() }
    }
}

/// Result of one [`ShopAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum ShopOutcome {
    /// The item was added; quantity is now 1.
    Added { id: ItemId, quantity: u32 },
    /// The menu button was pressed for an item already in the cart.
    AlreadyInCart(ItemId),
    /// A quantity button was pressed; `None` means the line is gone.
    Quantity { id: ItemId, quantity: Option<u32> },
    /// The trash button was pressed.
    Removed { id: ItemId, removed: bool },
    /// The copy button was pressed.
    Notice(Notice),
    /// The page scrolled to a section, or stayed put for an unknown anchor.
    Scrolled(Option<SectionId>),
}
