//! Stopword lists keyed by ISO 639-1 language code.
//!
//! [`StopwordConfig::builtin`] bundles English, Spanish and Dutch lists.
//! Additional languages can be merged in from a JSON document of the shape
//! `{"en": ["the", "and", ...], ...}`.

use std::collections::{HashMap, HashSet};

use super::error::KeywordError;

/// Languages covered by [`StopwordConfig::builtin`].
pub const BUILTIN_LANGUAGES: &[&str] = &["en", "es", "nl"];

/// Mapping from language code to its lowercase stopword set.
///
/// Keys and words are trimmed and lowercased on insertion; empty words are
/// dropped and duplicates collapse into the set.
#[derive(Debug, Clone, Default)]
pub struct StopwordConfig {
    lists: HashMap<String, HashSet<String>>,
}

impl StopwordConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with the bundled language lists.
    pub fn builtin() -> Self {
        let mut config = Self::new();
        config.insert("en", ENGLISH.iter().copied());
        config.insert("es", SPANISH.iter().copied());
        config.insert("nl", DUTCH.iter().copied());
        config
    }

    /// Parses a `{"lang": ["word", ...]}` JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, KeywordError> {
        let raw: HashMap<String, Vec<String>> =
            serde_json::from_str(json).map_err(|e| KeywordError::InvalidStopwordDocument {
                message: e.to_string(),
            })?;

        let mut config = Self::new();
        for (language, words) in raw {
            config.insert(&language, words.iter().map(String::as_str));
        }

        Ok(config)
    }

    /// Adds (or extends) the stopword list for `language`.
    pub fn insert<'a, I>(&mut self, language: &str, words: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let language = language.trim().to_lowercase();

        let list = self.lists.entry(language).or_default();
        for word in words {
            let word = word.trim().to_lowercase();
            if !word.is_empty() {
                list.insert(word);
            }
        }
    }

    /// Returns `true` if `language` has a configured list.
    pub fn supports(&self, language: &str) -> bool {
        self.lists.contains_key(&language.trim().to_lowercase())
    }

    /// Returns the stopword set for `language`, if configured.
    pub fn words(&self, language: &str) -> Option<&HashSet<String>> {
        self.lists.get(&language.trim().to_lowercase())
    }

    /// Iterates over the configured language codes.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }
}

pub(super) fn english_set() -> HashSet<String> {
    ENGLISH.iter().map(|w| (*w).to_string()).collect()
}

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during", "each",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of",
    "off", "on", "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
    "yourself", "yourselves",
];

const SPANISH: &[&str] = &[
    "a", "al", "algo", "algunas", "algunos", "ante", "antes", "como", "con", "contra", "cual",
    "cuando", "de", "del", "desde", "donde", "durante", "e", "el", "ella", "ellas", "ellos", "en",
    "entre", "era", "es", "esa", "esas", "ese", "eso", "esos", "esta", "estas", "este", "esto",
    "estos", "fue", "ha", "hasta", "hay", "la", "las", "le", "les", "lo", "los", "mas", "me",
    "mi", "mucho", "muchos", "muy", "nada", "ni", "no", "nos", "nosotros", "o", "otra", "otras",
    "otro", "otros", "para", "pero", "poco", "por", "porque", "que", "quien", "quienes", "se",
    "sin", "sobre", "son", "su", "sus", "también", "tanto", "te", "tiene", "todo", "todos", "tu",
    "un", "una", "uno", "unos", "y", "ya", "yo",
];

const DUTCH: &[&str] = &[
    "aan", "al", "alles", "als", "altijd", "andere", "ben", "bij", "daar", "dan", "dat", "de",
    "der", "deze", "die", "dit", "doch", "doen", "door", "dus", "een", "eens", "en", "er", "ge",
    "geen", "geweest", "haar", "had", "heb", "hebben", "heeft", "hem", "het", "hier", "hij",
    "hoe", "hun", "iemand", "iets", "ik", "in", "is", "ja", "je", "kan", "kon", "kunnen", "maar",
    "me", "meer", "men", "met", "mij", "mijn", "moet", "na", "naar", "niet", "niets", "nog",
    "nu", "of", "om", "omdat", "onder", "ons", "ook", "op", "over", "reeds", "te", "tegen",
    "toch", "toen", "tot", "u", "uit", "uw", "van", "veel", "voor", "want", "waren", "was",
    "wat", "werd", "wezen", "wie", "wil", "worden", "wordt", "zal", "ze", "zelf", "zich", "zij",
    "zijn", "zo", "zonder", "zou",
];
