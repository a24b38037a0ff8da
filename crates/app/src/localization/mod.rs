//! Localization
//!
//! The domain only produces rule identifiers. A [`Localizer`] turns them into
//! text for display.

use std::{
    convert::Infallible,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use mockall::automock;
use serde::{Deserialize, Serialize};

mod messages;

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
    Spanish,
}

impl Language {
    /// Resolve a language from its name (`"French"`) or a culture code
    /// (`"fr"`, `"fr-FR"`).
    ///
    /// Anything unrecognised falls back to English.
    pub fn from_culture(value: &str) -> Self {
        let value = value.trim().to_ascii_lowercase();
        let primary = value.split(['-', '_']).next().unwrap_or_default();

        match primary {
            "fr" | "french" | "français" | "francais" => Self::French,
            "es" | "spanish" | "español" | "espanol" => Self::Spanish,
            _ => Self::English,
        }
    }
}

impl FromStr for Language {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_culture(s))
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::English => "English",
            Self::French => "French",
            Self::Spanish => "Spanish",
        })
    }
}

#[automock]
pub trait Localizer: Send + Sync {
    /// Text for a message key; unknown keys are returned unchanged.
    fn localize(&self, key: &str) -> String;
}

/// Localizer backed by the built-in message tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogLocalizer {
    language: Language,
}

impl CatalogLocalizer {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl Localizer for CatalogLocalizer {
    fn localize(&self, key: &str) -> String {
        messages::lookup(self.language, key).map_or_else(|| key.to_string(), str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{orders::validation::OrderRule, products::validation::ProductRule};

    use super::*;

    #[test]
    fn culture_names_and_codes_resolve() {
        assert_eq!(Language::from_culture("French"), Language::French);
        assert_eq!(Language::from_culture("fr-FR"), Language::French);
        assert_eq!(Language::from_culture("es"), Language::Spanish);
        assert_eq!(Language::from_culture("Spanish"), Language::Spanish);
        assert_eq!(Language::from_culture("en-GB"), Language::English);
        assert_eq!(Language::from_culture("klingon"), Language::English);
        assert_eq!(Language::from_culture(""), Language::English);
    }

    #[test]
    fn parsing_never_fails() {
        assert_eq!("es-MX".parse::<Language>(), Ok(Language::Spanish));
        assert_eq!("Deutsch".parse::<Language>(), Ok(Language::English));
        assert_eq!(
            Language::French.to_string().parse::<Language>(),
            Ok(Language::French)
        );
    }

    #[test]
    fn every_rule_has_a_message_in_every_language() {
        let keys = ProductRule::ALL
            .into_iter()
            .map(ProductRule::as_str)
            .chain(OrderRule::ALL.into_iter().map(OrderRule::as_str));

        for key in keys {
            for language in [Language::English, Language::French, Language::Spanish] {
                assert!(
                    messages::lookup(language, key).is_some(),
                    "missing {language} message for {key}"
                );
            }
        }
    }

    #[test]
    fn localizer_translates_known_keys() {
        let french = CatalogLocalizer::new(Language::French);

        assert_eq!(french.localize("MissingPrice"), "Veuillez saisir un prix");
    }

    #[test]
    fn unknown_keys_are_returned_unchanged() {
        let english = CatalogLocalizer::default();

        assert_eq!(english.localize("SomethingElse"), "SomethingElse");
    }
}
