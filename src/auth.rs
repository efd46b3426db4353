//! Admin authentication
//!
//! Password hashing for the single admin credential, plus the session
//! authenticated flag that gates admin-only mutations.

use crate::config::MIN_ADMIN_PASSWORD_LEN;
use crate::error::{AppError, Result};
use crate::storage::{Slot, SlotStore};
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Hash a password with SHA-256, hex-encoded
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Check a password against a stored hex digest
pub fn verify_password(password: &str, digest: &str) -> bool {
    hash_password(password) == digest
}

/// Single-admin login service
///
/// The stored digest lives in its own slot; the authenticated flag is
/// session-only and resets on restart.
#[derive(Clone)]
pub struct AdminAuth {
    store: SlotStore,
    authenticated: Arc<AtomicBool>,
}

impl AdminAuth {
    pub fn new(store: SlotStore) -> Self {
        Self {
            store,
            authenticated: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether an admin password has ever been set
    pub async fn is_password_set(&self) -> bool {
        let digest: String = self.store.load(Slot::AdminPasswordHash, String::new()).await;
        !digest.is_empty()
    }

    /// First-run path: choose the admin password and log in.
    pub async fn setup(&self, password: &str, confirm: &str) -> Result<()> {
        if self.is_password_set().await {
            return Err(AppError::Validation(
                "Admin password is already set".to_string(),
            ));
        }
        if password.len() < MIN_ADMIN_PASSWORD_LEN {
            return Err(AppError::Validation(format!(
                "Password must be at least {} characters",
                MIN_ADMIN_PASSWORD_LEN
            )));
        }
        if password != confirm {
            return Err(AppError::Validation(
                "Passwords do not match".to_string(),
            ));
        }

        let digest = hash_password(password);
        self.store.save(Slot::AdminPasswordHash, &digest).await?;
        self.authenticated.store(true, Ordering::Relaxed);

        tracing::info!("Admin password set");
        Ok(())
    }

    /// Verify the password against the stored digest and open the session.
    pub async fn login(&self, password: &str) -> Result<()> {
        let digest: String = self.store.load(Slot::AdminPasswordHash, String::new()).await;
        if digest.is_empty() {
            return Err(AppError::Validation(
                "No admin password has been set".to_string(),
            ));
        }
        if !verify_password(password, &digest) {
            tracing::warn!("Admin login failed");
            return Err(AppError::Validation("Incorrect password".to_string()));
        }

        self.authenticated.store(true, Ordering::Relaxed);
        tracing::info!("Admin logged in");
        Ok(())
    }

    pub fn logout(&self) {
        self.authenticated.store(false, Ordering::Relaxed);
        tracing::info!("Admin logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::Relaxed)
    }

    /// Gate for admin-only mutations
    pub fn require_admin(&self) -> Result<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_auth() -> (AdminAuth, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = SlotStore::new(temp_dir.path().to_path_buf());
        store.initialize().await.unwrap();
        (AdminAuth::new(store), temp_dir)
    }

    #[test]
    fn test_hash_is_hex_sha256() {
        let digest = hash_password("segreto");

        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(verify_password("segreto", &digest));
        assert!(!verify_password("sbagliato", &digest));
    }

    #[tokio::test]
    async fn test_setup_rejects_short_password() {
        let (auth, _temp) = create_test_auth().await;

        let result = auth.setup("abc", "abc").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(!auth.is_password_set().await);
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_setup_rejects_mismatched_confirmation() {
        let (auth, _temp) = create_test_auth().await;

        let result = auth.setup("password1", "password2").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(!auth.is_password_set().await);
    }

    #[tokio::test]
    async fn test_setup_then_login_cycle() {
        let (auth, _temp) = create_test_auth().await;

        auth.setup("quattroformaggi", "quattroformaggi").await.unwrap();
        assert!(auth.is_password_set().await);
        assert!(auth.is_authenticated());

        auth.logout();
        assert!(!auth.is_authenticated());

        assert!(auth.login("sbagliata").await.is_err());
        assert!(!auth.is_authenticated());

        auth.login("quattroformaggi").await.unwrap();
        assert!(auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_setup_refuses_second_password() {
        let (auth, _temp) = create_test_auth().await;

        auth.setup("primapassword", "primapassword").await.unwrap();
        let result = auth.setup("secondapassword", "secondapassword").await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        // The first password is untouched
        auth.logout();
        assert!(auth.login("secondapassword").await.is_err());
        auth.login("primapassword").await.unwrap();
    }

    #[tokio::test]
    async fn test_login_without_password_set() {
        let (auth, _temp) = create_test_auth().await;

        let result = auth.login("whatever").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_require_admin_gating() {
        let (auth, _temp) = create_test_auth().await;

        assert!(matches!(auth.require_admin(), Err(AppError::Unauthorized)));

        auth.setup("margherita", "margherita").await.unwrap();
        assert!(auth.require_admin().is_ok());

        auth.logout();
        assert!(matches!(auth.require_admin(), Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_digest_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let store = SlotStore::new(temp_dir.path().to_path_buf());
        store.initialize().await.unwrap();

        {
            let auth = AdminAuth::new(store.clone());
            auth.setup("diavola123", "diavola123").await.unwrap();
        }

        // A fresh instance sees the stored digest but not the session flag
        let auth = AdminAuth::new(store);
        assert!(auth.is_password_set().await);
        assert!(!auth.is_authenticated());
        auth.login("diavola123").await.unwrap();
    }
}
