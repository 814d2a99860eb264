use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    pub word: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(default)]
    pub phrases: Vec<Phrase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Translation {
    pub translation: String,
    /// Grammatical tag such as `v.` or `n.`
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Phrase {
    pub phrase: String,
    pub translation: String,
}

#[cfg(test)]
impl Entry {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_owned(),
            translations: Vec::new(),
            phrases: Vec::new(),
        }
    }

    pub fn with_translation(mut self, translation: &str, kind: &str) -> Self {
        self.translations.push(Translation {
            translation: translation.to_owned(),
            kind: kind.to_owned(),
        });
        self
    }

    pub fn with_phrase(mut self, phrase: &str, translation: &str) -> Self {
        self.phrases.push(Phrase {
            phrase: phrase.to_owned(),
            translation: translation.to_owned(),
        });
        self
    }
}
