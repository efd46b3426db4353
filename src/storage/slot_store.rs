//! Named JSON slot storage
//!
//! Every piece of persistent state lives in its own slot: one JSON file per
//! slot under the data directory. A slot always holds one whole value; saves
//! replace the file atomically, never patch it.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Named slots the application persists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Menu,
    Featured,
    Orders,
    Customers,
    Cart,
    ContactEmail,
    ContactWhatsapp,
    AboutImage,
    Logo,
    Background,
    AdminPasswordHash,
}

impl Slot {
    /// File stem of this slot inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Slot::Menu => "menu",
            Slot::Featured => "featured",
            Slot::Orders => "orders",
            Slot::Customers => "customers",
            Slot::Cart => "cart",
            Slot::ContactEmail => "contact_email",
            Slot::ContactWhatsapp => "contact_whatsapp",
            Slot::AboutImage => "about_image",
            Slot::Logo => "logo",
            Slot::Background => "background",
            Slot::AdminPasswordHash => "admin_password_hash",
        }
    }
}

/// One JSON file per named slot
#[derive(Clone)]
pub struct SlotStore {
    root: PathBuf,
}

impl SlotStore {
    /// Create a store rooted at the given data directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Initialize the store (create the directory if needed)
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        tracing::info!("Slot store initialized at: {:?}", self.root);
        Ok(())
    }

    /// Load a slot, falling back to `default` when absent or unparsable.
    ///
    /// A missing file is the normal first-run case and stays silent; a file
    /// that exists but cannot be read or parsed is logged at warn level.
    /// Neither case propagates an error.
    pub async fn load<T: DeserializeOwned>(&self, slot: Slot, default: T) -> T {
        let path = self.slot_path(slot);

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return default,
            Err(e) => {
                tracing::warn!("Failed to read slot {}: {}", slot.file_name(), e);
                return default;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    "Slot {} holds unparsable JSON, using default: {}",
                    slot.file_name(),
                    e
                );
                default
            }
        }
    }

    /// Like `load`, but when the slot file is absent the default is written
    /// back so first-run state becomes durable. Corrupt files are left alone.
    pub async fn load_or_seed<T>(&self, slot: Slot, default: T) -> T
    where
        T: DeserializeOwned + Serialize,
    {
        if !self.slot_path(slot).exists() {
            tracing::info!("Slot {} not found, seeding default", slot.file_name());
            if let Err(e) = self.save(slot, &default).await {
                tracing::error!("Failed to seed slot {}: {}", slot.file_name(), e);
            }
            return default;
        }

        self.load(slot, default).await
    }

    /// Replace a slot's value on disk.
    ///
    /// The value is written to a temp file and renamed over the final path,
    /// so the slot never holds a half-written structure.
    pub async fn save<T: Serialize>(&self, slot: Slot, value: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(value)?;
        let path = self.slot_path(slot);

        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.sync_all().await?;

        fs::rename(temp_path, &path).await?;

        tracing::debug!("Saved slot {} ({} bytes)", slot.file_name(), content.len());

        Ok(())
    }

    /// Path of a slot's file inside the data directory
    fn slot_path(&self, slot: Slot) -> PathBuf {
        self.root.join(format!("{}.json", slot.file_name()))
    }

    /// Store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}
