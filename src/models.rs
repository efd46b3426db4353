//! Domain models
//!
//! Rust structs for everything the store persists: menu, featured pizza,
//! cart lines, customers, and orders. All models use serde so slot files
//! round-trip through JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A pizza on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// 0 means "not yet assigned"; upsert allocates the real id
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

/// The single highlighted "pizza of the day"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedPizza {
    pub recipe_name: String,
    pub description: String,
    pub ingredients: Vec<String>,
}

/// A menu item snapshot plus the requested quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub quantity: u32,
}

impl CartLine {
    /// Open a new line for a menu item, starting at quantity 1
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            image_url: item.image_url.clone(),
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// A phone-keyed contact associated with one or more orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub surname: String,
    pub phone: String,
}

/// Checkout form payload, before a customer id is resolved
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub surname: String,
    pub phone: String,
}

/// Progress of a placed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Preparing,
    Ready,
    Delivered,
}

impl OrderStatus {
    /// All statuses in lifecycle order, for admin selection lists
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
    ];
}

impl fmt::Display for OrderStatus {
    /// Storefront label, as shown to customers
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Preparing => "In preparazione",
            OrderStatus::Ready => "Pronto",
            OrderStatus::Delivered => "Consegnato",
        };
        f.write_str(label)
    }
}

/// A completed checkout; immutable except for the status field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub customer_id: u64,
    pub items: Vec<CartLine>,
    pub total: f64,
    pub placed_at: DateTime<Utc>,
    /// Orders written before the status field existed load as Preparing
    #[serde(default)]
    pub status: OrderStatus,
}

/// Pizzeria contact details and branding
///
/// An in-memory aggregate only: each field persists to its own slot, and a
/// settings save rewrites all five.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub contact_email: String,
    pub contact_whatsapp: String,
    pub about_image: String,
    pub logo: Option<String>,
    pub background: Option<String>,
}

/// Shared monotonic id generator
///
/// Ids are derived from the current unix-millisecond timestamp, matching the
/// ids already present in existing data, but strictly increase even when
/// several are taken within the same millisecond.
#[derive(Clone, Default)]
pub struct IdSource {
    last: Arc<AtomicU64>,
}

impl IdSource {
    pub fn new() -> Self {
        Self {
            last: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Next unique id: the current timestamp, bumped past any id already handed out
    pub fn next(&self) -> u64 {
        let now = Utc::now().timestamp_millis() as u64;
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(observed) => last = observed,
            }
        }
    }
}
