use regex::Regex;

use crate::error::Result;

use super::{entry::Entry, Dictionary};

/// Entries found in a text, in reading order.
#[derive(Debug, Default)]
pub struct Matches {
    pub cards: Vec<Entry>,
    pub tokens: usize,
}

impl Matches {
    pub fn unmatched(&self) -> usize {
        self.tokens - self.cards.len()
    }
}

pub struct Matcher {
    non_letters: Regex,
}

impl Matcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            non_letters: Regex::new(r"[^a-zA-Z]")?,
        })
    }

    /// Whitespace separated tokens with everything but ASCII letters removed.
    /// Tokens made only of other characters come out empty.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|token| self.non_letters.replace_all(token, "").into_owned())
            .collect()
    }

    /// `progress` is called with `(done, total)` after every token.
    pub fn find_matches<F>(&self, text: &str, dictionary: &Dictionary, mut progress: F) -> Matches
    where
        F: FnMut(usize, usize),
    {
        let tokens = self.tokenize(text);
        let total = tokens.len();

        let mut cards = Vec::new();
        for (i, token) in tokens.iter().enumerate() {
            if let Some(entry) = dictionary.get(token) {
                cards.push(entry.clone());
            }

            progress(i + 1, total);
        }

        tracing::info!("matched {} of {} tokens", cards.len(), total);

        Matches {
            cards,
            tokens: total,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_entries([
            Entry::new("run").with_translation("跑", "v."),
            Entry::new("fast").with_translation("快的", "adj."),
            Entry::new("dont"),
        ])
    }

    fn words(matches: &Matches) -> Vec<&str> {
        matches.cards.iter().map(|card| card.word.as_str()).collect()
    }

    #[test]
    fn tokenize_strips_non_letters() {
        let matcher = Matcher::new().unwrap();

        assert_eq!(
            matcher.tokenize("  I run,  fast!\n\t(well-known) don't 123 跑 "),
            vec!["I", "run", "fast", "wellknown", "dont", "", ""]
        );
    }

    #[test]
    fn run_scenario() {
        let matcher = Matcher::new().unwrap();
        let matches = matcher.find_matches("I run fast", &dictionary(), |_, _| {});

        assert_eq!(words(&matches), vec!["run", "fast"]);
        assert_eq!(matches.tokens, 3);
        assert_eq!(matches.unmatched(), 1);
    }

    #[test]
    fn single_known_word() {
        let matcher = Matcher::new().unwrap();
        let dictionary = Dictionary::from_entries([Entry::new("run").with_translation("跑", "v.")]);
        let matches = matcher.find_matches("I run fast", &dictionary, |_, _| {});

        assert_eq!(matches.cards.len(), 1);
        assert_eq!(matches.cards[0], Entry::new("run").with_translation("跑", "v."));
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let matcher = Matcher::new().unwrap();
        let matches = matcher.find_matches("fast run. Run run; don't stop", &dictionary(), |_, _| {});

        assert_eq!(words(&matches), vec!["fast", "run", "run", "dont"]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let matcher = Matcher::new().unwrap();
        let matches = matcher.find_matches("RUN Run Fast", &dictionary(), |_, _| {});

        assert!(matches.cards.is_empty());
        assert_eq!(matches.unmatched(), 3);
    }

    #[test]
    fn empty_text_matches_nothing() {
        let matcher = Matcher::new().unwrap();
        let mut calls = 0;
        let matches = matcher.find_matches(" \n ", &dictionary(), |_, _| calls += 1);

        assert!(matches.cards.is_empty());
        assert_eq!(matches.tokens, 0);
        assert_eq!(calls, 0);
    }

    #[test]
    fn progress_reported_per_token() {
        let matcher = Matcher::new().unwrap();
        let mut seen = Vec::new();
        matcher.find_matches("a run b", &dictionary(), |done, total| seen.push((done, total)));

        assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
    }
}
