//! Localized strings for the SlideChat UI.
//!
//! Fluent bundles are embedded from `i18n/<lang>/slidechat-ui.ftl` at compile
//! time. `en-US` is the fallback and the reference for message ids; every
//! other locale must define the same ids with the same placeholders.
//!
//! Call [`init`] once at launch, then look strings up with [`t!`](crate::t):
//! ```ignore
//! crate::i18n::init();
//! let label = crate::t!("chat-ask");
//! let prompt = crate::t!("confirm-delete-question", title = "Week 3");
//! ```
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Shorthand for `fl!` against the shared [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; also the FTL file stem in every locale folder.
const DOMAIN: &str = "slidechat-ui";

const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Loads bundles for the user's preferred languages. Safe to call repeatedly.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "localization loaded"),
            Err(err) => tracing::warn!(%err, "language selection failed; using fallback"),
        }
        // Messages are plain UI text; no bidi isolation marks around arguments.
        LOADER.set_use_isolating(false);
    });
}

/// Switches language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring invalid language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    LOADER.set_use_isolating(false);
    Ok(())
}

/// Language tags with an embedded bundle, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Tag of the language currently in front of the fallback chain.
pub fn current_language() -> String {
    LOADER.current_languages().first().map(ToString::to_string).unwrap_or_else(|| FALLBACK.to_string())
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "es-ES"));
    }

    #[test]
    fn invalid_tag_is_ignored() {
        init();
        assert!(set_language("not a tag").is_ok());
        assert!(!current_language().is_empty());
    }

    #[test]
    fn fallback_alerts_keep_their_exact_wording() {
        set_language("en-US").expect("fallback loads");
        assert_eq!(fl!(&*LOADER, "alert-empty-title"), "Question title can't be empty.");
        assert_eq!(fl!(&*LOADER, "alert-not-pdf"), "Please upload a PDF file");
        assert_eq!(fl!(&*LOADER, "instructor-failed"), "Add instructor failed!");
        assert_eq!(
            fl!(&*LOADER, "instructor-added", user = "ta1"),
            "Add instructor \"ta1\" successfully!"
        );
        assert_eq!(
            fl!(&*LOADER, "instructor-not-registered", user = "mallory"),
            "User \"mallory\" is not registered as an instructor in SlideChat server. \
             If you insist to add this user, please contact the admin of SlideChat server."
        );
    }

    #[test]
    fn placeholders_are_substituted() {
        set_language("en-US").expect("fallback loads");
        let s = fl!(&*LOADER, "slide-page-label", page = 4);
        assert!(s.contains('4'), "{s}");
    }
}
