//! Order service
//!
//! Converts the cart plus a customer identity into a placed order, and
//! manages the status of existing orders.

use crate::app::AppState;
use crate::auth::AdminAuth;
use crate::error::{AppError, Result};
use crate::models::{Customer, CustomerDraft, Order, OrderStatus};
use crate::services::customers::CustomerService;
use crate::storage::Slot;
use chrono::Utc;

/// A placed order plus the customer it belongs to, for the confirmation view
#[derive(Debug, Clone)]
pub struct Receipt {
    pub order: Order,
    pub customer: Customer,
}

#[derive(Clone)]
pub struct OrderService {
    state: AppState,
    auth: AdminAuth,
}

impl OrderService {
    pub fn new(state: AppState, auth: AdminAuth) -> Self {
        Self { state, auth }
    }

    /// Place an order from the current cart.
    ///
    /// The whole placement runs under one lock: validate, resolve the
    /// customer, freeze the cart lines into the order, persist, then clear
    /// the cart. Nothing is mutated when validation fails.
    pub async fn place_order(&self, draft: &CustomerDraft) -> Result<Receipt> {
        let mut data = self.state.data.write().await;

        if data.cart.is_empty() {
            return Err(AppError::EmptyCart);
        }

        let (customer, created) =
            CustomerService::resolve_draft(&mut data, &self.state.ids, draft)?;
        if created {
            tracing::info!(
                "Registered customer {} ({} {})",
                customer.id,
                customer.name,
                customer.surname
            );
            self.state.persist(Slot::Customers, &data.customers).await;
        }

        let total = data.cart.iter().map(|line| line.line_total()).sum();
        let order = Order {
            id: self.state.ids.next(),
            customer_id: customer.id,
            items: data.cart.clone(),
            total,
            placed_at: Utc::now(),
            status: OrderStatus::Preparing,
        };

        tracing::info!(
            "Order {} placed by customer {}: {} lines, {:.2} EUR",
            order.id,
            customer.id,
            order.items.len(),
            order.total
        );

        data.orders.push(order.clone());
        self.state.persist(Slot::Orders, &data.orders).await;

        data.cart.clear();
        self.state.persist(Slot::Cart, &data.cart).await;

        Ok(Receipt { order, customer })
    }

    /// Change one order's status; every other field and order is untouched.
    ///
    /// Any status can be set from any other; the selection is not
    /// constrained to the forward direction. An unknown id is a no-op.
    pub async fn update_status(&self, order_id: u64, status: OrderStatus) -> Result<()> {
        self.auth.require_admin()?;

        let mut data = self.state.data.write().await;

        if let Some(order) = data.orders.iter_mut().find(|o| o.id == order_id) {
            tracing::info!("Order {} status: {} -> {}", order_id, order.status, status);
            order.status = status;
        } else {
            tracing::warn!("Order {} not found, status unchanged", order_id);
        }

        self.state.persist(Slot::Orders, &data.orders).await;
        Ok(())
    }

    /// Orders sorted newest first, as the admin archive lists them
    pub async fn orders_newest_first(&self) -> Vec<Order> {
        let mut orders = self.state.orders().await;
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        orders
    }
}
