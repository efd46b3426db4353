//! Settings service
//!
//! Contact details and branding for the storefront. The aggregate lives in
//! memory; each field persists to its own slot, and a save rewrites all of
//! them.

use crate::app::AppState;
use crate::auth::AdminAuth;
use crate::error::{AppError, Result};
use crate::models::Settings;
use crate::storage::Slot;

#[derive(Clone)]
pub struct SettingsService {
    state: AppState,
    auth: AdminAuth,
}

impl SettingsService {
    pub fn new(state: AppState, auth: AdminAuth) -> Self {
        Self { state, auth }
    }

    /// Current settings snapshot
    pub async fn get(&self) -> Settings {
        self.state.settings().await
    }

    /// Replace the whole settings aggregate.
    ///
    /// The WhatsApp number must be digits only, country code included
    /// without "+" or "00", because it is spliced into wa.me links verbatim.
    pub async fn save(&self, settings: Settings) -> Result<()> {
        self.auth.require_admin()?;

        if settings.contact_email.trim().is_empty() {
            return Err(AppError::Validation(
                "Contact email cannot be empty".to_string(),
            ));
        }
        let whatsapp = settings.contact_whatsapp.trim();
        if whatsapp.is_empty() || !whatsapp.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::Validation(
                "WhatsApp number must contain digits only".to_string(),
            ));
        }
        if whatsapp.starts_with("00") {
            return Err(AppError::Validation(
                "WhatsApp number must start with the country code, not 00".to_string(),
            ));
        }
        if settings.about_image.trim().is_empty() {
            return Err(AppError::Validation(
                "About image URL cannot be empty".to_string(),
            ));
        }

        let mut data = self.state.data.write().await;
        data.settings = settings;

        self.state
            .persist(Slot::ContactEmail, &data.settings.contact_email)
            .await;
        self.state
            .persist(Slot::ContactWhatsapp, &data.settings.contact_whatsapp)
            .await;
        self.state
            .persist(Slot::AboutImage, &data.settings.about_image)
            .await;
        self.state.persist(Slot::Logo, &data.settings.logo).await;
        self.state
            .persist(Slot::Background, &data.settings.background)
            .await;

        tracing::info!("Settings saved");
        Ok(())
    }
}
