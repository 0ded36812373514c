//! Static catalog of voice-acted languages.
//!
//! The order of [`LanguageCode::ALL`] is significant: every per-language
//! structure in the crate is laid out and iterated in this order.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Number of languages in the catalog.
pub const LANGUAGE_COUNT: usize = 9;

/// Short code for one spoken-language version of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LanguageCode {
    En,
    Ja,
    De,
    La,
    Es,
    It,
    Ca,
    Fr,
    Ru,
}

impl LanguageCode {
    /// All languages in catalog order.
    pub const ALL: [LanguageCode; LANGUAGE_COUNT] = [
        LanguageCode::En,
        LanguageCode::Ja,
        LanguageCode::De,
        LanguageCode::La,
        LanguageCode::Es,
        LanguageCode::It,
        LanguageCode::Ca,
        LanguageCode::Fr,
        LanguageCode::Ru,
    ];

    /// Position of this language in catalog order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short code shown in table headers.
    pub fn code(self) -> &'static str {
        match self {
            LanguageCode::En => "EN",
            LanguageCode::Ja => "JA",
            LanguageCode::De => "DE",
            LanguageCode::La => "LA",
            LanguageCode::Es => "ES",
            LanguageCode::It => "IT",
            LanguageCode::Ca => "CA",
            LanguageCode::Fr => "FR",
            LanguageCode::Ru => "RU",
        }
    }

    /// Human-readable language name.
    pub fn display_name(self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Ja => "Japanese",
            LanguageCode::De => "German",
            LanguageCode::La => "Spanish (Latin America)",
            LanguageCode::Es => "Spanish (Spain)",
            LanguageCode::It => "Italian",
            LanguageCode::Ca => "French (Canada)",
            LanguageCode::Fr => "French (France)",
            LanguageCode::Ru => "Russian",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code '{0}'")]
pub struct UnknownLanguage(pub String);

impl FromStr for LanguageCode {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// One value per language, stored and iterated in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangMap<T>([T; LANGUAGE_COUNT]);

impl<T> LangMap<T> {
    /// Build a map by calling `f` for every language in catalog order.
    pub fn from_fn(mut f: impl FnMut(LanguageCode) -> T) -> Self {
        Self(std::array::from_fn(|i| f(LanguageCode::ALL[i])))
    }

    pub fn iter(&self) -> impl Iterator<Item = (LanguageCode, &T)> + '_ {
        LanguageCode::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.iter()
    }

    /// Languages whose value satisfies `pred`, in catalog order.
    pub fn languages_where(&self, mut pred: impl FnMut(&T) -> bool) -> Vec<LanguageCode> {
        self.iter()
            .filter(|(_, v)| pred(v))
            .map(|(lang, _)| lang)
            .collect()
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> LangMap<U> {
        LangMap::from_fn(|lang| f(&self[lang]))
    }
}

impl<T: Clone> LangMap<T> {
    /// Every language mapped to the same value.
    pub fn filled(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T> Index<LanguageCode> for LangMap<T> {
    type Output = T;

    fn index(&self, lang: LanguageCode) -> &T {
        &self.0[lang.index()]
    }
}

impl<T> IndexMut<LanguageCode> for LangMap<T> {
    fn index_mut(&mut self, lang: LanguageCode) -> &mut T {
        &mut self.0[lang.index()]
    }
}

impl<T: Serialize> Serialize for LangMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(LANGUAGE_COUNT))?;
        for (lang, value) in self.iter() {
            map.serialize_entry(lang.code(), value)?;
        }
        map.end()
    }
}
