//! Services module
//!
//! Business logic services operating on the shared application state.

pub mod cart;
pub mod catalog;
pub mod customers;
pub mod orders;
pub mod poller;
pub mod settings;

pub use cart::CartService;
pub use catalog::CatalogService;
pub use customers::CustomerService;
pub use orders::{OrderService, Receipt};
pub use poller::RefreshPoller;
pub use settings::SettingsService;
