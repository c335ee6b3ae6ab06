//! # English Inflector
//!
//! Default [`Inflector`] used by the command line: suffix rules for regular
//! English nouns, plus small tables of irregular and uncountable words.
//! It is deliberately simple; callers needing a full rule engine can
//! supply their own implementation of the trait.

use pivotgen_core::Inflector;

/// Words with the same singular and plural form.
const UNCOUNTABLE: &[&str] = &[
    "audio",
    "data",
    "equipment",
    "feedback",
    "fish",
    "information",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "staff",
];

/// `(singular, plural)` pairs that no suffix rule covers.
const IRREGULAR: &[(&str, &str)] = &[
    ("calorie", "calories"),
    ("child", "children"),
    ("cookie", "cookies"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("movie", "movies"),
    ("ox", "oxen"),
    ("person", "people"),
    ("pie", "pies"),
    ("quiz", "quizzes"),
    ("rookie", "rookies"),
    ("tie", "ties"),
    ("tooth", "teeth"),
    ("woman", "women"),
    ("zombie", "zombies"),
];

/// Singular nouns ending in `-us`. Other `-us` words are treated as plurals
/// (`menus`), and other `-uses` words as plurals of `-use` (`houses`).
const LATIN_US: &[&str] = &[
    "alumnus",
    "apparatus",
    "bonus",
    "bus",
    "cactus",
    "campus",
    "census",
    "chorus",
    "circus",
    "corpus",
    "focus",
    "fungus",
    "genus",
    "nexus",
    "octopus",
    "omnibus",
    "prospectus",
    "radius",
    "status",
    "stimulus",
    "syllabus",
    "thesaurus",
    "virus",
    "walrus",
];

/// Plural endings whose singular keeps the trailing `e` (`caches`, `niches`).
const E_STEM_SUFFIXES: &[&str] = &["aches", "iches"];

/// Suffix-rule English inflector with irregular and uncountable tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflector;

impl EnglishInflector {
    /// Create a new inflector
    pub fn new() -> Self {
        Self
    }

    fn is_uncountable(word: &str) -> bool {
        UNCOUNTABLE.contains(&word)
    }

    /// Split a compound name so only its last segment is inflected
    /// (e.g. "blog_posts" → ("blog_", "posts")).
    fn split_last_segment(word: &str) -> (&str, &str) {
        match word.rfind('_') {
            Some(idx) => word.split_at(idx + 1),
            None => ("", word),
        }
    }

    fn singular_segment(word: &str) -> String {
        if word.is_empty() || Self::is_uncountable(word) {
            return word.to_string();
        }
        if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == word) {
            return (*singular).to_string();
        }
        if IRREGULAR.iter().any(|(singular, _)| *singular == word) {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("ies") {
            if !stem.is_empty() {
                return format!("{}y", stem);
            }
        }
        if LATIN_US.contains(&word) {
            return word.to_string();
        }
        if let Some(stem) = word.strip_suffix("es") {
            if LATIN_US.contains(&stem) {
                return stem.to_string();
            }
            if word.ends_with("uses") || E_STEM_SUFFIXES.iter().any(|s| word.ends_with(s)) {
                return format!("{}e", stem);
            }
        }
        for suffix in ["sses", "xes", "ches", "shes", "zzes"] {
            if word.ends_with(suffix) {
                return word[..word.len() - 2].to_string();
            }
        }
        if word.ends_with("ss") || word.ends_with("is") {
            return word.to_string();
        }
        match word.strip_suffix('s') {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => word.to_string(),
        }
    }

    fn plural_segment(word: &str) -> String {
        if word.is_empty() || Self::is_uncountable(word) {
            return word.to_string();
        }
        if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == word) {
            return (*plural).to_string();
        }
        if IRREGULAR.iter().any(|(_, plural)| *plural == word) {
            return word.to_string();
        }

        if word.ends_with('s')
            || word.ends_with('x')
            || word.ends_with('z')
            || word.ends_with("ch")
            || word.ends_with("sh")
        {
            format!("{}es", word)
        } else if word.ends_with('y')
            && !word.ends_with("ay")
            && !word.ends_with("ey")
            && !word.ends_with("oy")
            && !word.ends_with("uy")
        {
            format!("{}ies", &word[..word.len() - 1])
        } else {
            format!("{}s", word)
        }
    }
}

impl Inflector for EnglishInflector {
    fn singularize(&self, word: &str) -> String {
        let (prefix, last) = Self::split_last_segment(word);
        format!("{}{}", prefix, Self::singular_segment(last))
    }

    fn pluralize(&self, word: &str) -> String {
        let (prefix, last) = Self::split_last_segment(word);
        format!("{}{}", prefix, Self::plural_segment(last))
    }
}

// ============================================================================
// Tests
// ============================================================================
