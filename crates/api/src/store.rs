//! In-memory asset inventory.
//!
//! Readers take a snapshot under the read lock and compute outside it; every
//! mutation validates and applies under a single write lock so id assignment
//! cannot race.

use inventario_core::asset::{validate_asset, Asset, AssetUpdate, NewAsset};
use inventario_core::error::CoreError;
use inventario_core::inventory::next_asset_id;
use inventario_core::types::DbId;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct AssetStore {
    assets: RwLock<Vec<Asset>>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing inventory.
    pub fn with_assets(assets: Vec<Asset>) -> Self {
        Self {
            assets: RwLock::new(assets),
        }
    }

    /// Snapshot of every asset in insertion order.
    pub async fn list(&self) -> Vec<Asset> {
        self.assets.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.assets.read().await.len()
    }

    pub async fn get(&self, id: DbId) -> Option<Asset> {
        self.assets.read().await.iter().find(|a| a.id == id).cloned()
    }

    /// Validate and insert a new asset with the next free id.
    pub async fn create(&self, input: NewAsset) -> Result<Asset, CoreError> {
        validate_asset(&input)?;

        let mut assets = self.assets.write().await;
        let id = next_asset_id(assets.iter().map(|a| a.id));
        let asset = Asset::from_new(id, input);
        assets.push(asset.clone());
        Ok(asset)
    }

    /// Merge `update` into the asset, validate the result, and store it.
    ///
    /// Returns `Ok(None)` when no asset has this id.
    pub async fn update(&self, id: DbId, update: AssetUpdate) -> Result<Option<Asset>, CoreError> {
        let mut assets = self.assets.write().await;
        let Some(slot) = assets.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };

        let merged = update.merge_into(slot);
        validate_asset(&merged)?;
        *slot = Asset::from_new(id, merged);
        Ok(Some(slot.clone()))
    }

    /// Remove the asset. Returns `false` when no asset has this id.
    pub async fn delete(&self, id: DbId) -> bool {
        let mut assets = self.assets.write().await;
        let before = assets.len();
        assets.retain(|a| a.id != id);
        assets.len() != before
    }
}
