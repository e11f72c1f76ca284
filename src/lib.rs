//! SVG template rendering and sprite image lifecycle management for
//! interactive maps.
//!
//! Two collaborating components:
//!
//! - [`TemplateStore`] — a named SVG template registry with a placeholder
//!   substitution engine (`{color}`, `{secondaryColor}`, `{scale}`,
//!   `{text}`, and `calc(N * {scale})` size expressions).
//! - [`SvgManager`] — resolves image sources, deduplicates by id, fetches
//!   and rasterizes asynchronously, and keeps an external [`SpriteStore`]
//!   in sync, including reconciliation after the host clears its sprite.
//!
//! ```ignore
//! let sprite = Arc::new(MemorySpriteStore::new());
//! let templates = create_template_store();
//! let manager = SvgManager::new(sprite.clone(), templates.clone());
//!
//! manager
//!     .create_from_template("warehouse", "marker", Some("#d83b01"), None, 1.0, "W")
//!     .await?;
//! ```

pub mod fetch;
pub mod manager;
pub mod raster;
pub mod sprite;
pub mod template;

pub use fetch::{FetchError, HttpFetcher, SourceFetcher};
pub use manager::{ImageError, ManagerConfig, ManagerStats, ReloadReport, SvgManager};
pub use raster::{DecodeError, RasterImage};
pub use sprite::{MemorySpriteStore, SpriteStore};
pub use template::{create_template_store, TemplateError, TemplateStore};
