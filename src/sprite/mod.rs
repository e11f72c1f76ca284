//! Sprite store collaborator contract.
//!
//! The host rendering system owns the image sprite: a registry mapping an
//! image id to a decoded raster that symbol layers draw from. This module
//! defines the trait the lifecycle manager consumes, plus an in-memory
//! implementation usable headless and in tests.

use dashmap::DashMap;

use crate::raster::RasterImage;

/// Contract for the host map's image sprite.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the manager shares the store
/// across async tasks.
///
/// # Divergence
///
/// The sprite store may be cleared externally without the lifecycle manager
/// observing it. The manager's bookkeeping and the sprite contents are two
/// independently-owned pieces of state; `SvgManager::reload` reconciles
/// them.
pub trait SpriteStore: Send + Sync {
    /// Insert or replace the raster registered under `id`.
    fn register_image(&self, id: &str, raster: RasterImage);

    /// Remove `id` from the sprite. No-op if absent.
    fn unregister_image(&self, id: &str);

    /// Check whether `id` is currently present in the sprite.
    fn has_image(&self, id: &str) -> bool;

    /// Optional request-transform hook.
    ///
    /// When this returns a rewritten URL, the manager fetches the rewrite
    /// instead of the resolved source. Used for authenticated or proxied
    /// resource URLs. The default implementation performs no rewrite.
    fn transform_request(&self, _url: &str) -> Option<String> {
        None
    }
}

/// In-memory sprite store.
///
/// Holds decoded rasters in a `DashMap`. Suitable for headless rendering
/// hosts and as the sprite half of test environments.
#[derive(Default)]
pub struct MemorySpriteStore {
    images: DashMap<String, RasterImage>,
}

impl MemorySpriteStore {
    /// Create an empty sprite store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a copy of the raster registered under `id`.
    pub fn get(&self, id: &str) -> Option<RasterImage> {
        self.images.get(id).map(|r| r.clone())
    }

    /// Number of registered rasters.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the sprite holds no rasters.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Drop every registered raster.
    ///
    /// This models the host clearing its sprite outside the lifecycle
    /// manager (for example on a style change).
    pub fn clear(&self) {
        self.images.clear();
        tracing::debug!("Sprite store cleared");
    }
}

impl SpriteStore for MemorySpriteStore {
    fn register_image(&self, id: &str, raster: RasterImage) {
        tracing::debug!(
            id = %id,
            width = raster.width,
            height = raster.height,
            "Image registered in sprite"
        );
        self.images.insert(id.to_string(), raster);
    }

    fn unregister_image(&self, id: &str) {
        if self.images.remove(id).is_some() {
            tracing::debug!(id = %id, "Image removed from sprite");
        }
    }

    fn has_image(&self, id: &str) -> bool {
        self.images.contains_key(id)
    }
}
