//! Core data model for langsheet.
//!
//! The [`LanguageMap`] is the pivot structure both pipelines route through: an ordered
//! collection of languages, each holding its own key → value translations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Error;

/// Key → value translations of one language.
///
/// Values are scalars in flat form and may be nested objects in nested form. The map
/// keeps insertion order.
pub type Translations = Map<String, Value>;

/// All translations of a single language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locale {
    /// The language code, e.g. `en` or `zh-CN`.
    pub language: String,
    /// The translations for this language.
    pub translations: Translations,
}

impl Locale {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            translations: Translations::new(),
        }
    }

    pub fn with_translations(language: impl Into<String>, translations: Translations) -> Self {
        Self {
            language: language.into(),
            translations,
        }
    }
}

/// Language code → translations, in the order languages were first encountered.
///
/// Key sets may differ between languages: a key translated for `en` need not exist for
/// `fr`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageMap {
    locales: Vec<Locale>,
}

impl LanguageMap {
    /// Creates an empty language map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of languages in the map.
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Returns an iterator over all locales in encounter order.
    pub fn iter(&self) -> std::slice::Iter<'_, Locale> {
        self.locales.iter()
    }

    /// Language codes in encounter order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(|locale| locale.language.as_str())
    }

    /// Finds the translations of a language, if present.
    pub fn get(&self, language: &str) -> Option<&Translations> {
        self.locales
            .iter()
            .find(|locale| locale.language == language)
            .map(|locale| &locale.translations)
    }

    /// Returns the translations of a language, registering the language if it is new.
    pub fn translations_mut(&mut self, language: &str) -> &mut Translations {
        let index = match self
            .locales
            .iter()
            .position(|locale| locale.language == language)
        {
            Some(index) => index,
            None => {
                self.locales.push(Locale::new(language));
                self.locales.len() - 1
            }
        };
        &mut self.locales[index].translations
    }

    /// Sets `key` to `value` for `language`, replacing any previous value.
    pub fn insert(&mut self, language: &str, key: impl Into<String>, value: Value) {
        self.translations_mut(language).insert(key.into(), value);
    }

    /// Adds a whole locale. Translations of an already known language are merged in,
    /// with the incoming values winning.
    pub fn push(&mut self, locale: Locale) {
        let Locale {
            language,
            translations,
        } = locale;
        let target = self.translations_mut(&language);
        for (key, value) in translations {
            target.insert(key, value);
        }
    }

    /// Total number of key/value pairs across all languages.
    pub fn entry_count(&self) -> usize {
        self.locales
            .iter()
            .map(|locale| locale.translations.len())
            .sum()
    }

    /// Returns a new map with `f` applied to each language's translations.
    pub fn map_translations<F>(&self, mut f: F) -> LanguageMap
    where
        F: FnMut(&Translations) -> Translations,
    {
        LanguageMap {
            locales: self
                .locales
                .iter()
                .map(|locale| Locale::with_translations(&locale.language, f(&locale.translations)))
                .collect(),
        }
    }

    /// Converts the map into a single JSON object keyed by language code.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.locales
                .iter()
                .map(|locale| {
                    (
                        locale.language.clone(),
                        Value::Object(locale.translations.clone()),
                    )
                })
                .collect(),
        )
    }
}

impl IntoIterator for LanguageMap {
    type Item = Locale;
    type IntoIter = std::vec::IntoIter<Locale>;

    fn into_iter(self) -> Self::IntoIter {
        self.locales.into_iter()
    }
}

impl<'a> IntoIterator for &'a LanguageMap {
    type Item = &'a Locale;
    type IntoIter = std::slice::Iter<'a, Locale>;

    fn into_iter(self) -> Self::IntoIter {
        self.locales.iter()
    }
}

impl FromIterator<Locale> for LanguageMap {
    fn from_iter<I: IntoIterator<Item = Locale>>(iter: I) -> Self {
        let mut map = LanguageMap::new();
        for locale in iter {
            map.push(locale);
        }
        map
    }
}

/// Builds a language map from a JSON object shaped `{ "<lang>": { "<key>": <value> } }`.
impl TryFrom<Value> for LanguageMap {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(languages) = value else {
            return Err(Error::invalid_input(
                "language map must be an object keyed by language code",
            ));
        };

        languages
            .into_iter()
            .map(|(language, translations)| match translations {
                Value::Object(translations) => Ok(Locale::with_translations(language, translations)),
                other => Err(Error::invalid_input(format!(
                    "translations for `{}` must be an object, found {}",
                    language, other
                ))),
            })
            .collect()
    }
}
