use std::fs;
use std::path::PathBuf;

use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use spdlog::debug;

pub const WORDS_PER_NAME: usize = 3;
pub const NAME_ATTEMPTS: usize = 3;

pub const DEFAULT_DICTIONARIES: [&str; 3] = [
    "/usr/share/dict/words",
    "/usr/dict/words",
    "/usr/share/dict/web2",
];

const BUILTIN_WORDS: [&str; 32] = [
    "amber", "anchor", "birch", "canyon", "cedar", "cinder", "comet", "coral",
    "delta", "ember", "falcon", "fern", "glacier", "harbor", "heron", "island",
    "juniper", "lantern", "maple", "meadow", "nebula", "orchid", "pebble", "quartz",
    "raven", "river", "saffron", "spruce", "thistle", "tundra", "willow", "zephyr",
];

lazy_static! {
    static ref CANDIDATE_WORD: Regex = Regex::new(r"^[a-z]{3,8}$").unwrap();
}

/// Lowercase ASCII letters only, 3 to 8 characters
pub fn is_candidate_word(word: &str) -> bool {
    CANDIDATE_WORD.is_match(word)
}

/// One link of the word list fallback chain.
/// `words` returns None when the source can't supply enough words.
pub trait WordSource {
    fn name(&self) -> String;
    fn words(&self) -> Option<Vec<String>>;
}

pub struct DictionaryFile {
    pub path: PathBuf,
}

impl DictionaryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for DictionaryFile {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn words(&self) -> Option<Vec<String>> {
        let content = fs::read_to_string(&self.path).ok()?;
        let mut words: Vec<String> = content.lines()
            .map(str::trim)
            .filter(|w| is_candidate_word(w))
            .map(str::to_string)
            .collect();
        words.sort();
        words.dedup();

        if words.len() < WORDS_PER_NAME {
            return None;
        }
        Some(words)
    }
}

pub struct BuiltinWords;

impl WordSource for BuiltinWords {
    fn name(&self) -> String {
        "built-in word list".to_string()
    }

    fn words(&self) -> Option<Vec<String>> {
        Some(BUILTIN_WORDS.iter().map(|w| w.to_string()).collect())
    }
}

/// Dictionary files in the given order, then the built-in list
pub fn default_sources(dictionaries: &[PathBuf]) -> Vec<Box<dyn WordSource>> {
    let mut sources: Vec<Box<dyn WordSource>> = dictionaries.iter()
        .map(|path| Box::new(DictionaryFile::new(path)) as Box<dyn WordSource>)
        .collect();
    sources.push(Box::new(BuiltinWords));
    sources
}

/// Words of the first source able to supply them
pub fn load_words(sources: &[Box<dyn WordSource>]) -> Vec<String> {
    for source in sources {
        if let Some(words) = source.words() {
            debug!("Using {} words from {}", words.len(), source.name());
            return words;
        }
        debug!("Word source {} unavailable", source.name());
    }

    BUILTIN_WORDS.iter().map(|w| w.to_string()).collect()
}

/// Picks three distinct words joined by `_`, trying again when the name is
/// taken. After `NAME_ATTEMPTS` collisions it falls back to the integer epoch.
pub fn generate_filename<R, F>(words: &[String], rng: &mut R, now: f64, exists: F) -> String
where
    R: Rng + ?Sized,
    F: Fn(&str) -> bool,
{
    for _ in 0..NAME_ATTEMPTS {
        let picked: Vec<&str> = words.choose_multiple(rng, WORDS_PER_NAME)
            .map(String::as_str)
            .collect();
        let file_name = format!("{}.txt", picked.join("_"));
        if !exists(&file_name) {
            return file_name;
        }
        debug!("{} already exists, picking again", file_name);
    }

    format!("{}.txt", now as i64)
}
