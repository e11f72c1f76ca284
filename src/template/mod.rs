//! SVG template system.
//!
//! This module provides:
//! - A named-template registry with case-insensitive lookup
//! - A built-in catalog of marker, pin, flag, shape, and fill-pattern templates
//! - A substitution engine for the `{color}`, `{secondaryColor}`, `{scale}`,
//!   and `{text}` placeholders
//!
//! Templates may embed size expressions of the form `calc(27 * {scale})`.
//! Some rendering targets cannot evaluate `calc()` inside inline SVG, so
//! [`TemplateStore::resolve`] rewrites every such expression into the literal
//! product before the bare `{scale}` token is substituted.
//!
//! # Example
//!
//! ```ignore
//! let store = TemplateStore::new();
//!
//! store.add_template("badge", r#"<svg width="calc(20 * {scale})"><rect fill="{color}"/></svg>"#, false);
//!
//! let markup = store.apply_style("badge", "", Some("#d83b01"), None, 2.0)?;
//! assert!(markup.contains(r#"width="40""#));
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

mod builtin;

/// Default primary color applied when a caller does not provide one.
pub const DEFAULT_COLOR: &str = "#1A73AA";

/// Default secondary color applied when a caller does not provide one.
pub const DEFAULT_SECONDARY_COLOR: &str = "white";

lazy_static! {
    static ref SCALE_EXPR: Regex =
        Regex::new(r"(?i)calc\(\s*([0-9.]+)\s*(?:px)?\s*\*\s*\{scale\}\s*\)")
            .expect("scale expression pattern");
}

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// A registered template: raw markup plus its registration sequence number.
///
/// The sequence number preserves registration order across the concurrent
/// map so [`TemplateStore::template_names`] can report built-ins first, in
/// catalog order, followed by custom templates in the order they were added.
#[derive(Debug, Clone)]
struct TemplateEntry {
    markup: String,
    seq: usize,
}

/// In-memory template registry and substitution engine.
///
/// Names are compared case-insensitively. Templates are never removed; an
/// existing entry can only be replaced wholesale via
/// [`add_template`](Self::add_template) with `override_existing == true`.
///
/// Construct one instance at the composition root and share it via `Arc`
/// with anything that resolves templates. There is deliberately no hidden
/// global registry, so tests can build isolated stores.
pub struct TemplateStore {
    templates: DashMap<String, TemplateEntry>,
    next_seq: AtomicUsize,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore {
    /// Create a new template store pre-loaded with the built-in catalog.
    pub fn new() -> Self {
        let store = Self::empty();
        for (name, markup) in builtin::BUILTIN_TEMPLATES {
            store.add_template(name, markup, false);
        }
        store
    }

    /// Create a template store with no built-in templates.
    pub fn empty() -> Self {
        Self {
            templates: DashMap::new(),
            next_seq: AtomicUsize::new(0),
        }
    }

    /// Register a template under the case-folded `name`.
    ///
    /// If a template with the same name already exists and
    /// `override_existing` is `false`, the call is a silent no-op and the
    /// existing markup is preserved. Replacing a template does not change
    /// its position in [`template_names`](Self::template_names).
    pub fn add_template(&self, name: &str, markup: &str, override_existing: bool) {
        let key = name.to_lowercase();

        match self.templates.entry(key.clone()) {
            Entry::Occupied(mut existing) => {
                if override_existing {
                    existing.get_mut().markup = markup.to_string();
                    tracing::debug!(template = %key, "Template replaced");
                }
            }
            Entry::Vacant(slot) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                slot.insert(TemplateEntry {
                    markup: markup.to_string(),
                    seq,
                });
                tracing::debug!(template = %key, seq = seq, "Template registered");
            }
        }
    }

    /// Resolve a template by name, rewriting scale expressions.
    ///
    /// `scale` is coerced to its absolute value; a zero or non-finite scale
    /// falls back to `1`. Every `calc(N * {scale})` occurrence is replaced
    /// with the literal product `N * scale` rendered as a plain decimal, and
    /// any remaining bare `{scale}` token is then replaced with the scale
    /// value itself.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] if no template is registered
    /// under the case-folded name.
    pub fn resolve(&self, name: &str, scale: f64) -> TemplateResult<String> {
        let scale = normalize_scale(scale);
        let key = name.to_lowercase();

        let entry = self
            .templates
            .get(&key)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?;

        let rewritten = SCALE_EXPR.replace_all(&entry.markup, |caps: &Captures| {
            match caps[1].parse::<f64>() {
                Ok(base) => format_decimal(base * scale),
                // Leave the expression untouched if the literal is malformed.
                Err(_) => caps[0].to_string(),
            }
        });

        Ok(rewritten.replace("{scale}", &format_decimal(scale)))
    }

    /// Fill in the placeholder values of a template.
    ///
    /// Resolves the template (rewriting scale expressions first), then
    /// globally substitutes `{color}`, `{secondaryColor}`, and `{text}`.
    /// Missing or empty colors fall back to [`DEFAULT_COLOR`] and
    /// [`DEFAULT_SECONDARY_COLOR`]; missing text becomes the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] for an unknown template name.
    pub fn apply_style(
        &self,
        name: &str,
        text: &str,
        color: Option<&str>,
        secondary_color: Option<&str>,
        scale: f64,
    ) -> TemplateResult<String> {
        let color = color.filter(|c| !c.is_empty()).unwrap_or(DEFAULT_COLOR);
        let secondary_color = secondary_color
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_SECONDARY_COLOR);

        let markup = self.resolve(name, scale)?;

        Ok(markup
            .replace("{color}", color)
            .replace("{secondaryColor}", secondary_color)
            .replace("{text}", text))
    }

    /// Names of all registered templates, in registration order.
    ///
    /// Built-ins come first in catalog order, followed by custom templates
    /// in the order they were added. Names are reported case-folded.
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<(usize, String)> = self
            .templates
            .iter()
            .map(|entry| (entry.value().seq, entry.key().clone()))
            .collect();
        names.sort_by_key(|(seq, _)| *seq);
        names.into_iter().map(|(_, name)| name).collect()
    }

    /// Check if a template is registered (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(&name.to_lowercase())
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the store has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Create an Arc-wrapped template store with the built-in catalog loaded.
pub fn create_template_store() -> Arc<TemplateStore> {
    Arc::new(TemplateStore::new())
}

fn normalize_scale(scale: f64) -> f64 {
    if scale == 0.0 || !scale.is_finite() {
        1.0
    } else {
        scale.abs()
    }
}

/// Render a number the way a stylesheet expects it: integral values without
/// a trailing fraction (`54`, not `54.0`).
fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
