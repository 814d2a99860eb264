pub mod entry;

mod matcher;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use entry::Entry;

pub use matcher::{Matcher, Matches};

/// Word to entry index built once at startup.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: HashMap<String, Entry>,
}

impl Dictionary {
    /// Later entries replace earlier ones with the same word.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.word.clone(), entry))
            .collect();

        Self { entries }
    }

    /// Loads the dictionary, falling back to an empty one if the file can't be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                tracing::error!("failed to load {}: {e}", path.display());
                println!("Error loading dictionary: {e}");
                Self::default()
            }
        }
    }

    pub fn try_load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let start = std::time::Instant::now();

        let buffer = fs::read_to_string(path)?;
        let dictionary = Self::from_json(&buffer)?;

        tracing::info!(
            "loaded {} entries from {} in {:?}",
            dictionary.len(),
            path.display(),
            start.elapsed()
        );

        Ok(dictionary)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let values = match serde_json::from_str::<Value>(json)? {
            Value::Array(values) => values,
            _ => return Err(Error::NotAList),
        };

        let mut entries = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            let entry = serde_json::from_value::<Entry>(value)
                .map_err(|source| Error::InvalidEntry { index, source })?;
            entries.push(entry);
        }

        Ok(Self::from_entries(entries))
    }

    pub fn get(&self, word: &str) -> Option<&Entry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    fn words(&self) -> std::collections::BTreeSet<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}
