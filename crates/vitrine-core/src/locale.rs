//! Bilingual (French/English) text switching.
//!
//! The active language lives in a [`LocaleController`] owned by the page
//! session. Changing it persists the choice and swaps every keyed string.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::PREFERRED_LANG_KEY;
use crate::preferences::{PreferenceError, PreferenceStore};
use crate::review::DataError;

const BUNDLED_STRINGS: &str = include_str!("../data/strings.json");

/// Supported page languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    /// Every supported locale, in button order.
    pub const ALL: [Locale; 2] = [Locale::Fr, Locale::En];

    /// Two-letter language code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// Document title for this language.
    #[must_use]
    pub fn page_title(self) -> &'static str {
        match self {
            Self::Fr => "Corbo Digital | La Construction Rencontre l'Innovation",
            Self::En => "Corbo Digital | Construction Meets Innovation",
        }
    }

    /// The other language.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Fr => Self::En,
            Self::En => Self::Fr,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Unrecognised language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale '{0}', expected 'fr' or 'en'")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" => Ok(Self::Fr),
            "en" => Ok(Self::En),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// Keyed strings per locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct StringTable {
    entries: BTreeMap<Locale, BTreeMap<String, String>>,
}

impl StringTable {
    /// Parse a `{ "fr": { key: text }, "en": { ... } }` document.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The strings shipped with the site.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_STRINGS).unwrap_or_default()
    }

    #[must_use]
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.entries.get(&locale)?.get(key).map(String::as_str)
    }

    /// Keys defined for `locale`, sorted.
    pub fn keys(&self, locale: Locale) -> impl Iterator<Item = &str> {
        self.entries
            .get(&locale)
            .into_iter()
            .flat_map(|m| m.keys().map(String::as_str))
    }
}

/// A piece of page text bound to a translation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSlot {
    pub key: String,
    pub text: String,
}

impl TextSlot {
    #[must_use]
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

/// Owns the active language for one page session.
pub struct LocaleController {
    table: StringTable,
    current: Locale,
    store: Box<dyn PreferenceStore>,
}

impl LocaleController {
    /// Start with the stored preference, or French when none is stored.
    pub fn new(table: StringTable, store: Box<dyn PreferenceStore>) -> Self {
        let current = store
            .get(PREFERRED_LANG_KEY)
            .and_then(|code| code.parse().ok())
            .unwrap_or_default();
        debug!(locale = %current, "Locale initialised");
        Self {
            table,
            current,
            store,
        }
    }

    #[must_use]
    pub fn current(&self) -> Locale {
        self.current
    }

    /// Switch to `locale`, persist it, and return the new page title.
    pub fn set_locale(&mut self, locale: Locale) -> Result<&'static str, PreferenceError> {
        self.current = locale;
        self.store.set(PREFERRED_LANG_KEY, locale.code())?;
        info!(locale = %locale, "Locale changed");
        Ok(locale.page_title())
    }

    /// Language-button handler: switches only when `locale` is not already active.
    pub fn select(&mut self, locale: Locale) -> Result<bool, PreferenceError> {
        if locale == self.current {
            return Ok(false);
        }
        self.set_locale(locale)?;
        Ok(true)
    }

    /// Flip to the other language.
    pub fn toggle(&mut self) -> Result<Locale, PreferenceError> {
        let next = self.current.other();
        self.set_locale(next)?;
        Ok(next)
    }

    /// Text for `key` in the active language. Empty translations count as
    /// missing, so callers keep their existing text.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.table
            .lookup(self.current, key)
            .filter(|text| !text.is_empty())
    }

    /// Text for `key`, or `fallback` when the key is missing.
    #[must_use]
    pub fn text_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.text(key).unwrap_or(fallback)
    }

    /// Rewrite every slot whose key has a translation; others keep their text.
    /// Returns how many slots changed.
    pub fn apply(&self, slots: &mut [TextSlot]) -> usize {
        let mut replaced = 0;
        for slot in slots.iter_mut() {
            if let Some(text) = self.text(&slot.key) {
                text.clone_into(&mut slot.text);
                replaced += 1;
            }
        }
        replaced
    }

    /// Whether the button for `locale` should show as active.
    #[must_use]
    pub fn is_active(&self, locale: Locale) -> bool {
        self.current == locale
    }

    #[must_use]
    pub fn page_title(&self) -> &'static str {
        self.current.page_title()
    }

    #[must_use]
    pub fn table(&self) -> &StringTable {
        &self.table
    }
}

impl fmt::Debug for LocaleController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleController")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryStore;

    fn controller_with(stored: Option<&str>) -> LocaleController {
        let mut store = MemoryStore::new();
        if let Some(code) = stored {
            store.set(PREFERRED_LANG_KEY, code).unwrap();
        }
        LocaleController::new(StringTable::bundled(), Box::new(store))
    }

    #[test]
    fn parse_codes() {
        assert_eq!("fr".parse::<Locale>(), Ok(Locale::Fr));
        assert_eq!(" EN ".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("de".parse::<Locale>(), Err(UnknownLocale("de".into())));
    }

    #[test]
    fn defaults_to_french() {
        assert_eq!(controller_with(None).current(), Locale::Fr);
    }

    #[test]
    fn honours_stored_preference() {
        assert_eq!(controller_with(Some("en")).current(), Locale::En);
    }

    #[test]
    fn garbage_preference_falls_back() {
        assert_eq!(controller_with(Some("klingon")).current(), Locale::Fr);
    }

    #[test]
    fn bundled_table_has_both_locales() {
        let table = StringTable::bundled();
        assert_eq!(table.lookup(Locale::Fr, "reviews.tag"), Some("Témoignages"));
        assert_eq!(table.lookup(Locale::En, "reviews.tag"), Some("Testimonials"));
        let fr: Vec<_> = table.keys(Locale::Fr).collect();
        let en: Vec<_> = table.keys(Locale::En).collect();
        assert_eq!(fr, en);
    }

    #[test]
    fn set_locale_returns_title() {
        let mut ctl = controller_with(None);
        let title = ctl.set_locale(Locale::En).unwrap();
        assert_eq!(title, "Corbo Digital | Construction Meets Innovation");
        assert_eq!(ctl.text("reviews.title"), Some("What Our Clients Say"));
        assert!(ctl.is_active(Locale::En));
        assert!(!ctl.is_active(Locale::Fr));
    }

    #[test]
    fn select_same_locale_is_noop() {
        let mut ctl = controller_with(None);
        assert!(!ctl.select(Locale::Fr).unwrap());
        assert!(ctl.select(Locale::En).unwrap());
        assert_eq!(ctl.toggle().unwrap(), Locale::Fr);
    }

    #[test]
    fn apply_keeps_untranslated_text() {
        let ctl = controller_with(Some("en"));
        let mut slots = vec![
            TextSlot::new("nav.home", "Accueil"),
            TextSlot::new("missing.key", "unchanged"),
        ];
        assert_eq!(ctl.apply(&mut slots), 1);
        assert_eq!(slots[0].text, "Home");
        assert_eq!(slots[1].text, "unchanged");
    }

    #[test]
    fn empty_translation_keeps_existing_text() {
        let table = StringTable::from_json(
            r#"{"fr": {"hero.cta": "", "nav.home": "Accueil"}, "en": {"hero.cta": "", "nav.home": "Home"}}"#,
        )
        .unwrap();
        let ctl = LocaleController::new(table, Box::new(MemoryStore::new()));
        let mut slots = vec![
            TextSlot::new("hero.cta", "Contactez-nous"),
            TextSlot::new("nav.home", "Maison"),
        ];
        assert_eq!(ctl.apply(&mut slots), 1);
        assert_eq!(slots[0].text, "Contactez-nous");
        assert_eq!(slots[1].text, "Accueil");
        assert_eq!(ctl.text("hero.cta"), None);
        assert_eq!(ctl.text_or("hero.cta", "fallback"), "fallback");
    }

    #[test]
    fn text_or_fallback() {
        let ctl = controller_with(None);
        assert_eq!(ctl.text_or("nope", "fallback"), "fallback");
        assert_eq!(ctl.page_title(), Locale::Fr.page_title());
    }
}
