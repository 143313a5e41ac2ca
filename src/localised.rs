//! Complete per-language text

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::lang::Language;

/// Text for every configured language, never partial.
///
/// The only constructor, [`LocalisedText::collect`], refuses input where any
/// language is missing or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalisedText {
    texts: Vec<(Language, String)>,
}

impl LocalisedText {
    /// Build from `(language, text)` pairs in output order.
    ///
    /// Returns `None` if any text is absent or empty, or a language repeats.
    pub fn collect<I>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = (Language, Option<String>)>,
    {
        let mut texts: Vec<(Language, String)> = Vec::with_capacity(Language::ALL.len());
        for (language, text) in pairs {
            let text = text.filter(|t| !t.is_empty())?;
            if texts.iter().any(|(l, _)| *l == language) {
                return None;
            }
            texts.push((language, text));
        }
        if texts.is_empty() {
            return None;
        }
        Some(Self { texts })
    }

    /// Text for `language`, if it is one of the configured languages
    pub fn get(&self, language: Language) -> Option<&str> {
        self.texts
            .iter()
            .find(|(l, _)| *l == language)
            .map(|(_, t)| t.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> {
        self.texts.iter().map(|(l, t)| (*l, t.as_str()))
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.texts.iter().map(|(l, _)| *l)
    }
}

impl Serialize for LocalisedText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.texts.len()))?;
        for (language, text) in &self.texts {
            map.serialize_entry(language.code(), text)?;
        }
        map.end()
    }
}
