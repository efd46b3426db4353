//! Application state and bootstrap
//!
//! The root controller: one AppState owns the slot store, the shared
//! in-memory collections, and the id source. Every service receives an
//! AppState clone at construction; there are no module-level singletons.

use crate::config::{self, DEFAULT_ABOUT_IMAGE, DEFAULT_CONTACT_EMAIL, DEFAULT_WHATSAPP_NUMBER};
use crate::error::Result;
use crate::models::{CartLine, Customer, FeaturedPizza, IdSource, MenuItem, Order, Settings};
use crate::storage::{Slot, SlotStore};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Everything the application keeps in memory between operations
#[derive(Debug)]
pub struct AppData {
    pub menu: Vec<MenuItem>,
    pub featured: Option<FeaturedPizza>,
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,
    pub cart: Vec<CartLine>,
    pub settings: Settings,
}

/// Central application state shared by every service
#[derive(Clone)]
pub struct AppState {
    pub store: SlotStore,
    pub(crate) data: Arc<RwLock<AppData>>,
    pub(crate) ids: IdSource,
}

impl AppState {
    /// Load every slot from the data directory and build the shared state.
    ///
    /// The menu is the one slot seeded back to disk on first run; everything
    /// else starts from its in-memory default until something is saved.
    pub async fn bootstrap(data_dir: PathBuf) -> Result<Self> {
        let store = SlotStore::new(data_dir);
        store.initialize().await?;

        let menu = store.load_or_seed(Slot::Menu, config::seed_menu()).await;
        let featured: Option<FeaturedPizza> = store.load(Slot::Featured, None).await;
        let orders: Vec<Order> = store.load(Slot::Orders, Vec::new()).await;
        let customers: Vec<Customer> = store.load(Slot::Customers, Vec::new()).await;
        let cart: Vec<CartLine> = store.load(Slot::Cart, Vec::new()).await;

        let settings = Settings {
            contact_email: store
                .load(Slot::ContactEmail, DEFAULT_CONTACT_EMAIL.to_string())
                .await,
            contact_whatsapp: store
                .load(Slot::ContactWhatsapp, DEFAULT_WHATSAPP_NUMBER.to_string())
                .await,
            about_image: store
                .load(Slot::AboutImage, DEFAULT_ABOUT_IMAGE.to_string())
                .await,
            logo: store.load(Slot::Logo, None).await,
            background: store.load(Slot::Background, None).await,
        };

        tracing::info!(
            "State loaded: {} menu items, {} orders, {} customers",
            menu.len(),
            orders.len(),
            customers.len()
        );

        let data = AppData {
            menu,
            featured,
            orders,
            customers,
            cart,
            settings,
        };

        Ok(Self {
            store,
            data: Arc::new(RwLock::new(data)),
            ids: IdSource::new(),
        })
    }

    /// Write one slot from the caller's view of the data.
    ///
    /// Write failures are logged and swallowed: the in-memory value the
    /// caller just set stays visible for the session even when the disk
    /// copy is stale.
    pub(crate) async fn persist<T: Serialize>(&self, slot: Slot, value: &T) {
        if let Err(e) = self.store.save(slot, value).await {
            tracing::error!("Failed to persist slot {}: {}", slot.file_name(), e);
        }
    }

    // Cloned snapshots for callers and tests

    pub async fn menu(&self) -> Vec<MenuItem> {
        self.data.read().await.menu.clone()
    }

    pub async fn featured(&self) -> Option<FeaturedPizza> {
        self.data.read().await.featured.clone()
    }

    pub async fn orders(&self) -> Vec<Order> {
        self.data.read().await.orders.clone()
    }

    pub async fn customers(&self) -> Vec<Customer> {
        self.data.read().await.customers.clone()
    }

    pub async fn cart(&self) -> Vec<CartLine> {
        self.data.read().await.cart.clone()
    }

    pub async fn settings(&self) -> Settings {
        self.data.read().await.settings.clone()
    }
}
