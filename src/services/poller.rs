//! Refresh poller
//!
//! Reloads orders and customers from disk on a fixed interval while the
//! admin orders view is open, so orders placed by another running instance
//! appear without a restart.

use crate::app::AppState;
use crate::config::ORDER_POLL_INTERVAL;
use crate::models::{Customer, Order};
use crate::storage::Slot;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct RefreshPoller {
    state: AppState,
    task: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl RefreshPoller {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            task: Arc::new(Mutex::new(None)),
        }
    }

    /// Start polling. An already armed poller is replaced, not doubled.
    pub async fn arm(&self) {
        let mut task = self.task.lock().await;
        if let Some(old) = task.take() {
            old.abort();
        }

        let poller = self.clone();
        *task = Some(tokio::spawn(async move {
            tracing::info!("Order polling armed");

            let mut interval = tokio::time::interval(ORDER_POLL_INTERVAL);
            // The first tick completes immediately; consume it so reads
            // start one full interval after arming.
            interval.tick().await;

            loop {
                interval.tick().await;
                poller.refresh_now().await;
            }
        }));
    }

    /// Stop polling. Safe to call when nothing is armed.
    pub async fn disarm(&self) {
        let mut task = self.task.lock().await;
        if let Some(old) = task.take() {
            old.abort();
            tracing::info!("Order polling disarmed");
        }
    }

    pub async fn is_armed(&self) -> bool {
        self.task.lock().await.is_some()
    }

    /// One refresh pass: re-read the order and customer slots and replace
    /// the in-memory collections wholesale.
    ///
    /// The data lock is held across the reads. An order placed by this
    /// process serializes either before the read (so the file already
    /// holds it) or after the replace (so the replace cannot drop it);
    /// it never falls between the two.
    pub async fn refresh_now(&self) {
        let mut data = self.state.data.write().await;

        let orders: Vec<Order> = self.state.store.load(Slot::Orders, Vec::new()).await;
        let customers: Vec<Customer> = self.state.store.load(Slot::Customers, Vec::new()).await;

        tracing::debug!(
            "Refreshed from disk: {} orders, {} customers",
            orders.len(),
            customers.len()
        );
        data.orders = orders;
        data.customers = customers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AdminAuth;
    use crate::models::{CustomerDraft, OrderStatus};
    use crate::services::cart::CartService;
    use crate::services::orders::OrderService;
    use crate::storage::SlotStore;
    use chrono::Utc;
    use tempfile::TempDir;

    async fn create_test_poller() -> (RefreshPoller, AppState, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let state = AppState::bootstrap(temp_dir.path().to_path_buf())
            .await
            .unwrap();
        (RefreshPoller::new(state.clone()), state, temp_dir)
    }

    fn sample_order(id: u64) -> Order {
        Order {
            id,
            customer_id: 1,
            items: Vec::new(),
            total: 0.0,
            placed_at: Utc::now(),
            status: OrderStatus::Preparing,
        }
    }

    #[tokio::test]
    async fn test_refresh_picks_up_external_writes() {
        let (poller, state, temp_dir) = create_test_poller().await;
        assert!(state.orders().await.is_empty());

        // Another instance writes to the same data directory
        let other = SlotStore::new(temp_dir.path().to_path_buf());
        other
            .save(Slot::Orders, &vec![sample_order(42)])
            .await
            .unwrap();
        assert!(state.orders().await.is_empty());

        poller.refresh_now().await;

        let orders = state.orders().await;
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, 42);
    }

    #[tokio::test]
    async fn test_refresh_replaces_rather_than_merges() {
        let (poller, state, temp_dir) = create_test_poller().await;

        let other = SlotStore::new(temp_dir.path().to_path_buf());
        other
            .save(Slot::Orders, &vec![sample_order(1), sample_order(2)])
            .await
            .unwrap();
        poller.refresh_now().await;
        assert_eq!(state.orders().await.len(), 2);

        // The slot now holds a different set; refresh must not keep stale rows
        other
            .save(Slot::Orders, &vec![sample_order(3)])
            .await
            .unwrap();
        poller.refresh_now().await;

        let orders = state.orders().await;
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, 3);
    }

    #[tokio::test]
    async fn test_refresh_migrates_legacy_orders_without_status() {
        let (poller, state, temp_dir) = create_test_poller().await;

        let legacy = r#"[{
            "id": 1700000000000,
            "customer_id": 1700000000001,
            "items": [],
            "total": 12.5,
            "placed_at": "2024-01-15T12:00:00Z"
        }]"#;
        std::fs::write(temp_dir.path().join("orders.json"), legacy).unwrap();

        poller.refresh_now().await;

        let orders = state.orders().await;
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].status, OrderStatus::Preparing);
    }

    #[tokio::test]
    async fn test_refresh_concurrent_with_placement_never_loses_the_order() {
        let (poller, state, temp_dir) = create_test_poller().await;
        let orders = OrderService::new(state.clone(), AdminAuth::new(state.store.clone()));
        let cart = CartService::new(state.clone());
        let menu = state.menu().await;

        let bruno = CustomerDraft {
            name: "Bruno".to_string(),
            surname: "Bianchi".to_string(),
            phone: "3334445555".to_string(),
        };

        cart.add(&menu[1]).await;
        let baseline = orders.place_order(&bruno).await.unwrap().order.id;

        let mut placed = vec![baseline];
        for _ in 0..8 {
            cart.add(&menu[0]).await;
            let (receipt, _) = tokio::join!(orders.place_order(&bruno), poller.refresh_now());
            let id = receipt.unwrap().order.id;

            // Whichever side won the lock, the placement survives the pass
            assert!(state.orders().await.iter().any(|o| o.id == id));
            placed.push(id);
        }

        // Every placement also reached the slot file
        let other = SlotStore::new(temp_dir.path().to_path_buf());
        let on_disk: Vec<Order> = other.load(Slot::Orders, Vec::new()).await;
        assert_eq!(on_disk.len(), placed.len());
        for id in placed {
            assert!(on_disk.iter().any(|o| o.id == id));
        }
    }

    #[tokio::test]
    async fn test_arm_disarm_lifecycle() {
        let (poller, _state, _temp) = create_test_poller().await;
        assert!(!poller.is_armed().await);

        poller.arm().await;
        assert!(poller.is_armed().await);

        poller.disarm().await;
        assert!(!poller.is_armed().await);

        // Disarming twice is harmless
        poller.disarm().await;
        assert!(!poller.is_armed().await);
    }

    #[tokio::test]
    async fn test_rearm_replaces_existing_task() {
        let (poller, _state, _temp) = create_test_poller().await;

        poller.arm().await;
        poller.arm().await;
        assert!(poller.is_armed().await);

        // A single disarm stops everything the poller spawned
        poller.disarm().await;
        assert!(!poller.is_armed().await);
    }
}
