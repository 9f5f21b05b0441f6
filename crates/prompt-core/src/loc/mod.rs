//! Localized string tables and language negotiation

mod en;
mod pirate;

/// Every user-facing string the engine prints on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringTable {
    pub default_name: &'static str,
    pub default_banner: &'static str,
    pub text_choice_not_char: &'static str,
    pub text_choice_not_lower: &'static str,
    pub no_help: &'static str,
    pub invalid_response: &'static str,
    pub bad_format: &'static str,
    pub not_an_integer: &'static str,
    pub range_error: &'static str,
    pub true_string: &'static str,
    pub false_string: &'static str,
    /// Suffix appended to messages that need acknowledgement
    pub acknowledge: &'static str,
}

/// A string table tagged with its language code
#[derive(Debug, Clone, Copy)]
pub struct LanguageSpec {
    pub lang: &'static str,
    pub strings: &'static StringTable,
}

/// Table used when nothing else matches
pub const DEFAULT_LANGUAGE: LanguageSpec = LanguageSpec {
    lang: "en-US",
    strings: &en::STRINGS,
};

/// All bundled languages
pub const LANGUAGES: &[LanguageSpec] = &[
    LanguageSpec {
        lang: "en-US",
        strings: &en::STRINGS,
    },
    LanguageSpec {
        lang: "pirate",
        strings: &pirate::STRINGS,
    },
];

fn base_language(lang: &str) -> &str {
    lang.split('-').next().unwrap_or(lang)
}

/// Pick the best language for `lang`.
///
/// Exact match first, then the same base language with any region, then
/// English, then the built-in default. Never fails.
pub fn find_language(lang: &str) -> LanguageSpec {
    LANGUAGES
        .iter()
        .find(|l| l.lang.eq_ignore_ascii_case(lang))
        .or_else(|| {
            let base = base_language(lang);
            LANGUAGES
                .iter()
                .find(|l| base_language(l.lang).eq_ignore_ascii_case(base))
        })
        .or_else(|| LANGUAGES.iter().find(|l| base_language(l.lang) == "en"))
        .copied()
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// String table for `lang`, see [`find_language`]
pub fn strings_for(lang: &str) -> &'static StringTable {
    find_language(lang).strings
}
