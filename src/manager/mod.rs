//! SVG image lifecycle management.
//!
//! [`SvgManager`] owns the bookkeeping between caller-chosen image ids and
//! the sprite store of a host map: it resolves raw SVG markup, URLs, data
//! URIs, or styled templates into a source string, deduplicates by id,
//! fetches and rasterizes asynchronously, and registers the result with an
//! injected [`SpriteStore`].
//!
//! The sprite store can be cleared externally without this manager
//! noticing; the two states are reconciled lazily by [`SvgManager::reload`],
//! which re-registers missing images from cached bytes without touching the
//! network.
//!
//! # Concurrency
//!
//! The duplicate-id check runs synchronously, once, before the first await
//! in [`SvgManager::add`]. Two concurrent `add` calls for the same
//! never-seen id therefore race; callers are expected not to issue
//! concurrent adds for the same new id.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use dashmap::DashMap;
use serde::Serialize;
use thiserror::Error;

use crate::fetch::{is_data_uri, FetchError, HttpFetcher, SourceFetcher};
use crate::raster::{self, DecodeError};
use crate::sprite::SpriteStore;
use crate::template::{TemplateError, TemplateStore};

/// Image lifecycle error type
#[derive(Debug, Error)]
pub enum ImageError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Failed to fetch image source: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to load \"{id}\" image: {source}")]
    Decode { id: String, source: DecodeError },
}

/// Result type for image lifecycle operations
pub type ImageResult<T> = Result<T, ImageError>;

/// Configuration for the lifecycle manager
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    /// Maximum width an added image may have; larger rasters are downscaled.
    /// Zero disables the bound.
    pub max_width: u32,
    /// Maximum height an added image may have; larger rasters are downscaled.
    /// Zero disables the bound.
    pub max_height: u32,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            max_width: 100,
            max_height: 100,
        }
    }
}

/// One successfully registered image.
///
/// `source` is the resolved string handed to the fetch step; `bytes` is the
/// fetched encoded payload, cached so [`SvgManager::reload`] can re-decode
/// without a network fetch. `seq` preserves insertion order.
#[derive(Debug, Clone)]
struct ManagedImage {
    source: String,
    bytes: Vec<u8>,
    seq: usize,
}

/// Result of a reload operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReloadReport {
    /// Number of images re-registered with the sprite store
    pub reloaded: usize,
    /// Number of images already present and left untouched
    pub skipped: usize,
    /// Ids whose cached bytes failed to decode
    pub failed: Vec<String>,
}

/// Bookkeeping statistics
#[derive(Debug, Clone, Serialize)]
pub struct ManagerStats {
    /// Number of images the manager tracks
    pub tracked_images: usize,
    /// Tracked images currently missing from the sprite store
    pub sprite_missing: usize,
}

/// Manages the lifecycle of SVG-derived images for one sprite store.
pub struct SvgManager {
    sprite: Arc<dyn SpriteStore>,
    fetcher: Arc<dyn SourceFetcher>,
    templates: Arc<TemplateStore>,
    config: ManagerConfig,
    /// image id -> resolved source + cached bytes
    images: DashMap<String, ManagedImage>,
    next_seq: AtomicUsize,
}

impl SvgManager {
    /// Create a manager with the default HTTP fetcher and configuration.
    pub fn new(sprite: Arc<dyn SpriteStore>, templates: Arc<TemplateStore>) -> Self {
        Self::with_fetcher(sprite, templates, Arc::new(HttpFetcher::new()))
    }

    /// Create a manager with an explicit fetcher.
    pub fn with_fetcher(
        sprite: Arc<dyn SpriteStore>,
        templates: Arc<TemplateStore>,
        fetcher: Arc<dyn SourceFetcher>,
    ) -> Self {
        Self {
            sprite,
            fetcher,
            templates,
            config: ManagerConfig::default(),
            images: DashMap::new(),
            next_seq: AtomicUsize::new(0),
        }
    }

    /// Replace the manager configuration.
    pub fn with_config(mut self, config: ManagerConfig) -> Self {
        self.config = config;
        self
    }

    /// Add an image to the sprite store.
    ///
    /// `svg_or_url` may be inline SVG markup, a URL, or a data URI. Inline
    /// markup is encoded as a base64 SVG data URI before fetching. The
    /// decoded raster is downscaled to the configured bounds if it exceeds
    /// them (aspect ratio preserved, never upscaled).
    ///
    /// If `id` matches a previously added image the call succeeds
    /// immediately as a no-op and the new content is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::Fetch`] if the source cannot be fetched and
    /// [`ImageError::Decode`] if the bytes cannot be rasterized. Bookkeeping
    /// is left unchanged on failure.
    pub async fn add(&self, id: &str, svg_or_url: &str) -> ImageResult<()> {
        self.add_with_bounds(id, svg_or_url, self.config.max_width, self.config.max_height)
            .await
    }

    /// [`add`](Self::add) with explicit size bounds. A zero bound disables
    /// resizing on both axes.
    pub async fn add_with_bounds(
        &self,
        id: &str,
        svg_or_url: &str,
        max_width: u32,
        max_height: u32,
    ) -> ImageResult<()> {
        // Dedup is decided here, before any suspension point.
        if self.images.contains_key(id) {
            tracing::debug!(id = %id, "Image id already tracked, ignoring new content");
            return Ok(());
        }

        let source = resolve_source(svg_or_url);
        let request_url = self
            .sprite
            .transform_request(&source)
            .unwrap_or_else(|| source.clone());

        let bytes = self.fetcher.fetch(&request_url).await?;
        let raster = raster::decode(bytes.clone())
            .await
            .map_err(|source| ImageError::Decode {
                id: id.to_string(),
                source,
            })?;
        let raster = raster::fit_within(raster, max_width, max_height).map_err(|source| {
            ImageError::Decode {
                id: id.to_string(),
                source,
            }
        })?;

        self.sprite.register_image(id, raster);
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.images.insert(
            id.to_string(),
            ManagedImage { source, bytes, seq },
        );

        tracing::debug!(id = %id, "Image added to sprite");
        Ok(())
    }

    /// Create and add an image from a named template.
    ///
    /// Styles the template via [`TemplateStore::apply_style`] and delegates
    /// to [`add`](Self::add) with the configured size bounds.
    ///
    /// # Errors
    ///
    /// Propagates [`ImageError::Template`] for an unknown template name,
    /// plus any fetch or decode failure from `add`.
    pub async fn create_from_template(
        &self,
        id: &str,
        template_name: &str,
        color: Option<&str>,
        secondary_color: Option<&str>,
        scale: f64,
        text: &str,
    ) -> ImageResult<()> {
        let markup = self
            .templates
            .apply_style(template_name, text, color, secondary_color, scale)?;
        self.add(id, &markup).await
    }

    /// Remove an image from the sprite store and drop its bookkeeping.
    ///
    /// Never fails; unknown ids are a no-op on both sides.
    pub fn remove(&self, id: &str) {
        self.sprite.unregister_image(id);
        if self.images.remove(id).is_some() {
            tracing::debug!(id = %id, "Image removed");
        }
    }

    /// Remove every tracked image from the sprite store and empty the
    /// bookkeeping.
    pub fn clear(&self) {
        let count = self.images.len();
        for entry in self.images.iter() {
            self.sprite.unregister_image(entry.key());
        }
        self.images.clear();
        tracing::info!(count = count, "All managed images cleared");
    }

    /// Ids of all tracked images, in insertion order.
    pub fn image_ids(&self) -> Vec<String> {
        let mut ids: Vec<(usize, String)> = self
            .images
            .iter()
            .map(|entry| (entry.value().seq, entry.key().clone()))
            .collect();
        ids.sort_by_key(|(seq, _)| *seq);
        ids.into_iter().map(|(_, id)| id).collect()
    }

    /// Whether `id` is tracked by this manager.
    ///
    /// Reflects the manager's bookkeeping, not necessarily the live sprite
    /// store contents; see [`reload`](Self::reload).
    pub fn has_image(&self, id: &str) -> bool {
        self.images.contains_key(id)
    }

    /// Resolved source string recorded for `id`, if tracked.
    pub fn image_source(&self, id: &str) -> Option<String> {
        self.images.get(id).map(|entry| entry.source.clone())
    }

    /// Re-register tracked images the sprite store has lost.
    ///
    /// For every tracked id missing from the sprite store, the cached bytes
    /// are re-decoded and re-registered — no network fetch, and the size
    /// bounds are not reapplied. Ids still present are skipped. A decode
    /// failure is isolated to its id and does not abort the rest.
    pub async fn reload(&self) -> ReloadReport {
        let mut report = ReloadReport::default();

        let mut snapshot: Vec<(usize, String, Vec<u8>)> = self
            .images
            .iter()
            .map(|entry| {
                (
                    entry.value().seq,
                    entry.key().clone(),
                    entry.value().bytes.clone(),
                )
            })
            .collect();
        snapshot.sort_by_key(|(seq, _, _)| *seq);

        for (_, id, bytes) in snapshot {
            if self.sprite.has_image(&id) {
                report.skipped += 1;
                continue;
            }

            match raster::decode(bytes).await {
                Ok(raster) => {
                    self.sprite.register_image(&id, raster);
                    report.reloaded += 1;
                }
                Err(e) => {
                    tracing::warn!(id = %id, error = %e, "Failed to reload image");
                    report.failed.push(id);
                }
            }
        }

        tracing::info!(
            reloaded = report.reloaded,
            skipped = report.skipped,
            failed = report.failed.len(),
            "Sprite reload complete"
        );

        report
    }

    /// Bookkeeping statistics, including how far the sprite store has
    /// diverged.
    pub fn stats(&self) -> ManagerStats {
        let sprite_missing = self
            .images
            .iter()
            .filter(|entry| !self.sprite.has_image(entry.key()))
            .count();

        ManagerStats {
            tracked_images: self.images.len(),
            sprite_missing,
        }
    }
}

/// Resolve caller input into a fetchable source string.
///
/// Inline SVG markup (contains `<svg`, not already a data URI) becomes a
/// base64 SVG data URI; anything else passes through verbatim.
fn resolve_source(svg_or_url: &str) -> String {
    if !is_data_uri(svg_or_url) && svg_or_url.to_lowercase().contains("<svg") {
        format!("data:image/svg+xml;base64,{}", BASE64.encode(svg_or_url))
    } else {
        svg_or_url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_source_inline_svg() {
        let source = resolve_source("<svg xmlns=\"x\"/>");
        assert!(source.starts_with("data:image/svg+xml;base64,"));

        let payload = source.trim_start_matches("data:image/svg+xml;base64,");
        assert_eq!(BASE64.decode(payload).unwrap(), b"<svg xmlns=\"x\"/>");
    }

    #[test]
    fn test_resolve_source_case_insensitive_svg_tag() {
        assert!(resolve_source("<SVG/>").starts_with("data:"));
    }

    #[test]
    fn test_resolve_source_passthrough() {
        assert_eq!(
            resolve_source("https://example.com/icon.png"),
            "https://example.com/icon.png"
        );
        assert_eq!(
            resolve_source("data:image/svg+xml;base64,PHN2Zy8+"),
            "data:image/svg+xml;base64,PHN2Zy8+"
        );
    }
}
