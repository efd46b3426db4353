//! Customer service
//!
//! The phone-keyed customer registry: checkout deduplication plus the admin
//! CRUD behind the customer tab.

use crate::app::{AppData, AppState};
use crate::auth::AdminAuth;
use crate::error::{AppError, Result};
use crate::models::{Customer, CustomerDraft, IdSource};
use crate::storage::Slot;

#[derive(Clone)]
pub struct CustomerService {
    state: AppState,
    auth: AdminAuth,
}

impl CustomerService {
    pub fn new(state: AppState, auth: AdminAuth) -> Self {
        Self { state, auth }
    }

    /// Resolve a draft against the registry held in `data`.
    ///
    /// The phone number is the natural key: a match reuses the existing
    /// customer, otherwise a new one is appended. Returns the customer and
    /// whether it was newly created; persisting is left to the caller, who
    /// already holds the write lock.
    pub(crate) fn resolve_draft(
        data: &mut AppData,
        ids: &IdSource,
        draft: &CustomerDraft,
    ) -> Result<(Customer, bool)> {
        if draft.name.trim().is_empty()
            || draft.surname.trim().is_empty()
            || draft.phone.trim().is_empty()
        {
            return Err(AppError::Validation(
                "Name, surname and phone are required".to_string(),
            ));
        }

        if let Some(existing) = data.customers.iter().find(|c| c.phone == draft.phone) {
            return Ok((existing.clone(), false));
        }

        let customer = Customer {
            id: ids.next(),
            name: draft.name.clone(),
            surname: draft.surname.clone(),
            phone: draft.phone.clone(),
        };
        data.customers.push(customer.clone());
        Ok((customer, true))
    }

    /// Find the customer matching the draft's phone, or register a new one.
    pub async fn find_or_create(&self, draft: &CustomerDraft) -> Result<Customer> {
        let mut data = self.state.data.write().await;
        let (customer, created) = Self::resolve_draft(&mut data, &self.state.ids, draft)?;

        if created {
            tracing::info!(
                "Registered customer {} ({} {})",
                customer.id,
                customer.name,
                customer.surname
            );
            self.state.persist(Slot::Customers, &data.customers).await;
        }

        Ok(customer)
    }

    /// Replace a customer's details; an unknown id changes nothing.
    pub async fn update(&self, customer: Customer) -> Result<()> {
        self.auth.require_admin()?;

        if customer.name.trim().is_empty()
            || customer.surname.trim().is_empty()
            || customer.phone.trim().is_empty()
        {
            return Err(AppError::Validation(
                "Name, surname and phone are required".to_string(),
            ));
        }

        let id = customer.id;
        let mut data = self.state.data.write().await;

        if let Some(existing) = data.customers.iter_mut().find(|c| c.id == id) {
            *existing = customer;
            tracing::info!("Updated customer {}", id);
        } else {
            tracing::warn!("Customer {} not found, nothing updated", id);
        }

        self.state.persist(Slot::Customers, &data.customers).await;
        Ok(())
    }

    /// Remove a customer.
    ///
    /// Past orders keep the stale customer id; readers treat it as
    /// "customer unknown".
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.auth.require_admin()?;

        let mut data = self.state.data.write().await;
        let before = data.customers.len();
        data.customers.retain(|c| c.id != id);
        if data.customers.len() < before {
            tracing::info!("Deleted customer {}", id);
        }

        self.state.persist(Slot::Customers, &data.customers).await;
        Ok(())
    }

    /// Look up a customer by id; None means "customer unknown", never an error.
    pub async fn find(&self, id: u64) -> Option<Customer> {
        self.state
            .data
            .read()
            .await
            .customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }
}
