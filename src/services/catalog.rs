//! Catalog service
//!
//! Admin-side CRUD over the menu and the featured "pizza of the day".

use crate::app::AppState;
use crate::auth::AdminAuth;
use crate::error::{AppError, Result};
use crate::models::{FeaturedPizza, MenuItem};
use crate::storage::Slot;

#[derive(Clone)]
pub struct CatalogService {
    state: AppState,
    auth: AdminAuth,
}

impl CatalogService {
    pub fn new(state: AppState, auth: AdminAuth) -> Self {
        Self { state, auth }
    }

    /// Create or replace a menu item.
    ///
    /// An id of 0 means "new": a fresh id is assigned and the item appends
    /// at the end. A non-zero id replaces the matching entry in place; when
    /// nothing matches, the menu is left unchanged.
    pub async fn upsert_item(&self, mut item: MenuItem) -> Result<MenuItem> {
        self.auth.require_admin()?;

        if item.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Menu item name is required".to_string(),
            ));
        }
        if item.price <= 0.0 {
            return Err(AppError::Validation(
                "Menu item price must be positive".to_string(),
            ));
        }
        if item.image_url.trim().is_empty() {
            return Err(AppError::Validation(
                "Menu item image is required".to_string(),
            ));
        }

        let mut data = self.state.data.write().await;

        if item.id == 0 {
            item.id = self.state.ids.next();
            tracing::info!("Adding menu item {} ({})", item.id, item.name);
            data.menu.push(item.clone());
        } else if let Some(existing) = data.menu.iter_mut().find(|m| m.id == item.id) {
            tracing::info!("Updating menu item {} ({})", item.id, item.name);
            *existing = item.clone();
        } else {
            tracing::warn!("Menu item {} not found, nothing updated", item.id);
        }

        self.state.persist(Slot::Menu, &data.menu).await;

        Ok(item)
    }

    /// Remove a menu item; an absent id is a no-op.
    pub async fn remove_item(&self, id: u64) -> Result<()> {
        self.auth.require_admin()?;

        let mut data = self.state.data.write().await;
        let before = data.menu.len();
        data.menu.retain(|m| m.id != id);
        if data.menu.len() < before {
            tracing::info!("Removed menu item {}", id);
        }
        self.state.persist(Slot::Menu, &data.menu).await;

        Ok(())
    }

    /// Replace the featured pizza; the previous one is discarded entirely.
    pub async fn set_featured(&self, featured: FeaturedPizza) -> Result<()> {
        self.auth.require_admin()?;

        if featured.recipe_name.trim().is_empty() || featured.description.trim().is_empty() {
            return Err(AppError::Validation(
                "Featured pizza needs a name and a description".to_string(),
            ));
        }
        if featured.ingredients.is_empty() {
            return Err(AppError::Validation(
                "Featured pizza needs at least one ingredient".to_string(),
            ));
        }

        let mut data = self.state.data.write().await;
        tracing::info!("Setting featured pizza: {}", featured.recipe_name);
        data.featured = Some(featured);
        self.state.persist(Slot::Featured, &data.featured).await;

        Ok(())
    }
}
