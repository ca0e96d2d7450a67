//! Localization
//!
//! Fluent-based string lookup. Locale bundles are embedded in the binary
//! under `assets/i18n/<lang>/main.ftl`; `en` is the fallback locale.
//! Lookups never fail: an unknown key is returned verbatim so a missing
//! translation shows up in the UI instead of aborting a render pass.

use fluent::{FluentArgs, FluentBundle, FluentResource};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use once_cell::sync::Lazy;
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n"]
struct LocaleAssets;

const FALLBACK_LOCALE: &str = "en";

static FALLBACK: Lazy<LanguageIdentifier> =
    Lazy::new(|| FALLBACK_LOCALE.parse().unwrap_or_default());

/// Locales with an embedded bundle, sorted and deduplicated
static AVAILABLE_LOCALES: Lazy<Vec<LanguageIdentifier>> = Lazy::new(|| {
    let mut locales: Vec<LanguageIdentifier> = LocaleAssets::iter()
        .filter_map(|path| {
            path.split('/')
                .next()
                .and_then(|lang| lang.parse().ok())
        })
        .collect();
    locales.sort();
    locales.dedup();
    locales
});

/// Resolves UI strings for the active locale
pub struct LocaleManager {
    bundle: FluentBundle<FluentResource>,
    locale: LanguageIdentifier,
}

impl LocaleManager {
    /// Create a manager for the requested locale.
    ///
    /// The request is negotiated against the embedded bundles, so `"en-US"`
    /// resolves to `en` and an unavailable language falls back to `en`.
    pub fn new(requested: &str) -> Self {
        let requested_ids: Vec<LanguageIdentifier> =
            requested.parse().ok().into_iter().collect();
        let negotiated = negotiate_languages(
            &requested_ids,
            &AVAILABLE_LOCALES,
            Some(&*FALLBACK),
            NegotiationStrategy::Filtering,
        );
        let locale = negotiated
            .into_iter()
            .next()
            .cloned()
            .unwrap_or_else(|| FALLBACK.clone());

        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        // Keep formatted output plain text; the UI has no BiDi-aware shaping
        bundle.set_use_isolating(false);

        let path = format!("{}/main.ftl", locale);
        match LocaleAssets::get(&path) {
            Some(file) => {
                let source = String::from_utf8_lossy(&file.data).into_owned();
                let resource = match FluentResource::try_new(source) {
                    Ok(resource) => resource,
                    Err((resource, errors)) => {
                        tracing::warn!("locale bundle {} has {} syntax errors", path, errors.len());
                        resource
                    }
                };
                if bundle.add_resource(resource).is_err() {
                    tracing::warn!("locale bundle {} contains duplicate messages", path);
                }
            }
            None => tracing::warn!("missing locale bundle {}", path),
        }

        Self { bundle, locale }
    }

    /// Locales with an embedded bundle
    pub fn available_locales() -> &'static [LanguageIdentifier] {
        &AVAILABLE_LOCALES
    }

    /// Negotiated locale this manager resolves against
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Look up a translation
    pub fn t(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Look up a translation with formatting arguments
    pub fn t_args(&self, key: &str, args: &FluentArgs) -> String {
        self.format(key, Some(args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let message = match self.bundle.get_message(key) {
            Some(message) => message,
            None => {
                tracing::warn!("missing translation for {}", key);
                return key.to_string();
            }
        };
        let pattern = match message.value() {
            Some(pattern) => pattern,
            None => {
                tracing::warn!("translation {} has no value", key);
                return key.to_string();
            }
        };

        let mut errors = Vec::new();
        let formatted = self.bundle.format_pattern(pattern, args, &mut errors);
        for error in &errors {
            tracing::warn!("formatting {}: {}", key, error);
        }
        formatted.into_owned()
    }
}

impl Default for LocaleManager {
    fn default() -> Self {
        Self::new(FALLBACK_LOCALE)
    }
}
