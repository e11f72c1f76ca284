//! Cross-component integration tests
//!
//! These tests wire the template store, lifecycle manager, and an in-memory
//! sprite store together without touching the network: the counting fetcher
//! resolves data URIs locally and serves canned bytes for URLs.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use svg_sprite_manager::fetch::{decode_data_uri, is_data_uri, FetchError, SourceFetcher};
use svg_sprite_manager::raster::RasterImage;
use svg_sprite_manager::sprite::{MemorySpriteStore, SpriteStore};
use svg_sprite_manager::template::create_template_store;
use svg_sprite_manager::{ImageError, SvgManager};

/// Fetcher that resolves data URIs locally, serves canned URL responses,
/// and counts every call so tests can assert reload never refetches.
struct CountingFetcher {
    calls: AtomicUsize,
    responses: HashMap<String, Vec<u8>>,
}

impl CountingFetcher {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            responses: HashMap::new(),
        }
    }

    fn with_response(mut self, url: &str, bytes: Vec<u8>) -> Self {
        self.responses.insert(url.to_string(), bytes);
        self
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourceFetcher for CountingFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if is_data_uri(url) {
            return decode_data_uri(url);
        }

        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

struct TestEnvironment {
    sprite: Arc<MemorySpriteStore>,
    fetcher: Arc<CountingFetcher>,
    manager: SvgManager,
}

fn create_test_environment(fetcher: CountingFetcher) -> TestEnvironment {
    let sprite = Arc::new(MemorySpriteStore::new());
    let fetcher = Arc::new(fetcher);
    let manager = SvgManager::with_fetcher(
        sprite.clone(),
        create_template_store(),
        fetcher.clone(),
    );

    TestEnvironment {
        sprite,
        fetcher,
        manager,
    }
}

fn svg_fixture(width: u32, height: u32) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}"><rect width="{width}" height="{height}" fill="#1A73AA"/></svg>"##
    )
}

fn sprite_size(sprite: &MemorySpriteStore, id: &str) -> Option<(u32, u32)> {
    sprite.get(id).map(|r: RasterImage| (r.width, r.height))
}

#[tokio::test]
async fn test_add_registers_image_and_bookkeeping() {
    let env = create_test_environment(CountingFetcher::new());

    env.manager.add("icon", &svg_fixture(20, 30)).await.unwrap();

    assert!(env.manager.has_image("icon"));
    assert_eq!(env.manager.image_ids(), vec!["icon"]);
    assert_eq!(sprite_size(&env.sprite, "icon"), Some((20, 30)));
    assert!(env
        .manager
        .image_source("icon")
        .unwrap()
        .starts_with("data:image/svg+xml;base64,"));
}

#[tokio::test]
async fn test_duplicate_id_keeps_first_image() {
    let env = create_test_environment(CountingFetcher::new());

    env.manager.add("x", &svg_fixture(10, 10)).await.unwrap();
    env.manager.add("x", &svg_fixture(40, 40)).await.unwrap();

    // Second add is a silent no-op: the raster still derives from the first
    // source and no second fetch was issued.
    assert_eq!(sprite_size(&env.sprite, "x"), Some((10, 10)));
    assert_eq!(env.fetcher.call_count(), 1);
    assert_eq!(env.manager.image_ids(), vec!["x"]);
}

#[tokio::test]
async fn test_add_downscales_to_default_bounds() {
    let env = create_test_environment(CountingFetcher::new());

    env.manager.add("wide", &svg_fixture(200, 50)).await.unwrap();
    env.manager.add("small", &svg_fixture(50, 50)).await.unwrap();

    assert_eq!(sprite_size(&env.sprite, "wide"), Some((100, 25)));
    assert_eq!(sprite_size(&env.sprite, "small"), Some((50, 50)));
}

#[tokio::test]
async fn test_add_fetches_url_sources() {
    let png = {
        let img = image::RgbaImage::from_pixel(6, 4, image::Rgba([1, 2, 3, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();
        bytes
    };
    let env = create_test_environment(
        CountingFetcher::new().with_response("https://tiles.example/icon.png", png),
    );

    env.manager
        .add("remote", "https://tiles.example/icon.png")
        .await
        .unwrap();

    assert_eq!(sprite_size(&env.sprite, "remote"), Some((6, 4)));
    assert_eq!(
        env.manager.image_source("remote").as_deref(),
        Some("https://tiles.example/icon.png")
    );
}

#[tokio::test]
async fn test_fetch_failure_leaves_registry_untouched() {
    let env = create_test_environment(CountingFetcher::new());

    let err = env
        .manager
        .add("missing", "https://tiles.example/not-there.png")
        .await
        .unwrap_err();

    assert!(matches!(err, ImageError::Fetch(_)));
    assert!(!env.manager.has_image("missing"));
    assert!(env.sprite.is_empty());
}

#[tokio::test]
async fn test_decode_failure_leaves_registry_untouched() {
    let env = create_test_environment(
        CountingFetcher::new().with_response("https://tiles.example/garbage", vec![0, 1, 2, 3]),
    );

    let err = env
        .manager
        .add("bad", "https://tiles.example/garbage")
        .await
        .unwrap_err();

    assert!(matches!(err, ImageError::Decode { .. }));
    assert!(err.to_string().contains("\"bad\""));
    assert!(!env.manager.has_image("bad"));
    assert!(env.sprite.is_empty());
}

#[tokio::test]
async fn test_create_from_template() {
    let env = create_test_environment(CountingFetcher::new());

    env.manager
        .create_from_template("pin-1", "marker", Some("#d83b01"), None, 2.0, "A")
        .await
        .unwrap();

    // The marker template is 27x39 at scale 1; scale 2 doubles it and the
    // result fits within the default 100x100 bounds.
    assert_eq!(sprite_size(&env.sprite, "pin-1"), Some((54, 78)));
}

#[tokio::test]
async fn test_create_from_unknown_template() {
    let env = create_test_environment(CountingFetcher::new());

    let err = env
        .manager
        .create_from_template("x", "does-not-exist", None, None, 1.0, "")
        .await
        .unwrap_err();

    assert!(matches!(err, ImageError::Template(_)));
    assert!(!env.manager.has_image("x"));
}

#[tokio::test]
async fn test_remove_and_clear() {
    let env = create_test_environment(CountingFetcher::new());

    env.manager.add("a", &svg_fixture(8, 8)).await.unwrap();
    env.manager.add("b", &svg_fixture(8, 8)).await.unwrap();
    env.manager.add("c", &svg_fixture(8, 8)).await.unwrap();
    assert_eq!(env.manager.image_ids(), vec!["a", "b", "c"]);

    env.manager.remove("b");
    assert_eq!(env.manager.image_ids(), vec!["a", "c"]);
    assert!(!env.sprite.has_image("b"));

    // Removing an unknown id never fails.
    env.manager.remove("never-added");

    env.manager.clear();
    assert!(env.manager.image_ids().is_empty());
    assert!(!env.manager.has_image("a"));
    assert!(!env.manager.has_image("c"));
    assert!(env.sprite.is_empty());
}

#[tokio::test]
async fn test_reload_restores_externally_cleared_sprite() {
    let env = create_test_environment(CountingFetcher::new());

    env.manager.add("m", &svg_fixture(12, 12)).await.unwrap();
    env.manager.add("n", &svg_fixture(16, 16)).await.unwrap();
    let fetches_before = env.fetcher.call_count();

    // The host clears its sprite behind the manager's back.
    env.sprite.clear();
    assert!(env.manager.has_image("m"));
    assert!(!env.sprite.has_image("m"));

    let report = env.manager.reload().await;
    assert_eq!(report.reloaded, 2);
    assert_eq!(report.skipped, 0);
    assert!(report.failed.is_empty());
    assert_eq!(sprite_size(&env.sprite, "m"), Some((12, 12)));
    assert_eq!(sprite_size(&env.sprite, "n"), Some((16, 16)));

    // Reload decodes from cached bytes; no network fetch happened.
    assert_eq!(env.fetcher.call_count(), fetches_before);

    // A second reload finds everything in place and does nothing.
    let report = env.manager.reload().await;
    assert_eq!(report.reloaded, 0);
    assert_eq!(report.skipped, 2);
}

#[tokio::test]
async fn test_reload_skips_only_missing_ids() {
    let env = create_test_environment(CountingFetcher::new());

    env.manager.add("keep", &svg_fixture(8, 8)).await.unwrap();
    env.manager.add("lost", &svg_fixture(8, 8)).await.unwrap();

    env.sprite.unregister_image("lost");

    let report = env.manager.reload().await;
    assert_eq!(report.reloaded, 1);
    assert_eq!(report.skipped, 1);
    assert!(env.sprite.has_image("lost"));
}

#[tokio::test]
async fn test_stats_reflect_sprite_divergence() {
    let env = create_test_environment(CountingFetcher::new());

    env.manager.add("a", &svg_fixture(8, 8)).await.unwrap();
    env.manager.add("b", &svg_fixture(8, 8)).await.unwrap();

    let stats = env.manager.stats();
    assert_eq!(stats.tracked_images, 2);
    assert_eq!(stats.sprite_missing, 0);

    env.sprite.clear();
    let stats = env.manager.stats();
    assert_eq!(stats.sprite_missing, 2);

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["tracked_images"], 2);
    assert_eq!(json["sprite_missing"], 2);
}

/// Sprite store that rewrites one URL, exercising the request-transform hook.
struct RewritingSpriteStore {
    inner: MemorySpriteStore,
    from: String,
    to: String,
}

impl SpriteStore for RewritingSpriteStore {
    fn register_image(&self, id: &str, raster: RasterImage) {
        self.inner.register_image(id, raster);
    }

    fn unregister_image(&self, id: &str) {
        self.inner.unregister_image(id);
    }

    fn has_image(&self, id: &str) -> bool {
        self.inner.has_image(id)
    }

    fn transform_request(&self, url: &str) -> Option<String> {
        (url == self.from).then(|| self.to.clone())
    }
}

#[tokio::test]
async fn test_transform_request_hook_rewrites_fetch_url() {
    let sprite = Arc::new(RewritingSpriteStore {
        inner: MemorySpriteStore::new(),
        from: "https://tiles.example/icon.svg".to_string(),
        to: "https://cdn.example/signed/icon.svg".to_string(),
    });
    let fetcher = Arc::new(CountingFetcher::new().with_response(
        "https://cdn.example/signed/icon.svg",
        svg_fixture(10, 10).into_bytes(),
    ));
    let manager = SvgManager::with_fetcher(sprite.clone(), create_template_store(), fetcher);

    manager
        .add("signed", "https://tiles.example/icon.svg")
        .await
        .unwrap();

    assert!(sprite.has_image("signed"));
    // Bookkeeping records the resolved source, not the rewritten URL.
    assert_eq!(
        manager.image_source("signed").as_deref(),
        Some("https://tiles.example/icon.svg")
    );
}
