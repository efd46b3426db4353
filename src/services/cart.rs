//! Cart service
//!
//! The storefront cart: merge-by-item adds, exact quantity updates, and the
//! running total. The cart is persisted after every mutation so a page
//! reload does not lose it; write failures degrade to in-memory state.

use crate::app::AppState;
use crate::models::{CartLine, MenuItem};
use crate::storage::Slot;

#[derive(Clone)]
pub struct CartService {
    state: AppState,
}

impl CartService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Add one of the given menu item, merging into an existing line.
    ///
    /// Line order is preserved; a new item appends at the end with
    /// quantity 1.
    pub async fn add(&self, item: &MenuItem) {
        let mut data = self.state.data.write().await;

        if let Some(line) = data.cart.iter_mut().find(|l| l.id == item.id) {
            line.quantity += 1;
            tracing::debug!("Cart: {} now x{}", line.name, line.quantity);
        } else {
            data.cart.push(CartLine::from_item(item));
            tracing::debug!("Cart: added {}", item.name);
        }

        self.state.persist(Slot::Cart, &data.cart).await;
    }

    /// Set a line's quantity exactly; 0 removes the line.
    ///
    /// An unknown id is a no-op.
    pub async fn set_quantity(&self, id: u64, quantity: u32) {
        let mut data = self.state.data.write().await;

        if quantity == 0 {
            data.cart.retain(|l| l.id != id);
            tracing::debug!("Cart: removed line {}", id);
        } else if let Some(line) = data.cart.iter_mut().find(|l| l.id == id) {
            line.quantity = quantity;
            tracing::debug!("Cart: {} set to x{}", line.name, quantity);
        }

        self.state.persist(Slot::Cart, &data.cart).await;
    }

    /// Empty the cart. Order placement does this once per placed order.
    pub async fn clear(&self) {
        let mut data = self.state.data.write().await;
        data.cart.clear();
        self.state.persist(Slot::Cart, &data.cart).await;
    }

    /// Sum of price times quantity over all lines; an empty cart totals 0.
    pub async fn total(&self) -> f64 {
        self.state
            .data
            .read()
            .await
            .cart
            .iter()
            .map(|line| line.line_total())
            .sum()
    }

    /// Total number of pizzas in the cart, for the header badge
    pub async fn item_count(&self) -> u32 {
        self.state
            .data
            .read()
            .await
            .cart
            .iter()
            .map(|line| line.quantity)
            .sum()
    }

    /// Snapshot of the current lines
    pub async fn lines(&self) -> Vec<CartLine> {
        self.state.cart().await
    }
}
