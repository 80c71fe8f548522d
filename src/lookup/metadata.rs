use serde::Deserialize;

/// Pronunciation and definition data for one word, fetched per drill
/// presentation and never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordMetadata {
    pub word: String,
    pub phonetics: Vec<Phonetic>,
    pub meanings: Vec<Meaning>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Phonetic {
    pub audio: Option<String>,
    pub text: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Meaning {
    pub part_of_speech: Option<String>,
    pub definitions: Vec<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl WordMetadata {
    /// Placeholder returned whenever the lookup service is unreachable or
    /// has nothing for the word.
    pub fn empty(word: &str) -> Self {
        Self {
            word: word.to_string(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.phonetics.is_empty() && self.meanings.is_empty()
    }

    /// Joined phonetic display texts, e.g. `/həˈloʊ/, /hɛˈloʊ/`.
    pub fn phonetic_line(&self) -> String {
        let texts: Vec<&str> = self
            .phonetics
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        texts.join(", ")
    }
}

// Wire model of api.dictionaryapi.dev responses: an array of entries, each
// with phonetics and meanings. Every field is optional in practice.

#[derive(Deserialize)]
struct ApiEntry {
    #[serde(default)]
    phonetics: Vec<ApiPhonetic>,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Deserialize)]
struct ApiPhonetic {
    #[serde(default)]
    audio: String,
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ApiMeaning {
    #[serde(default, rename = "partOfSpeech")]
    part_of_speech: Option<String>,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

#[derive(Deserialize)]
struct ApiDefinition {
    #[serde(default)]
    definition: String,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Convert a raw response body into metadata for `word`. Only the first
/// entry is used. Definitions that contain the word itself (case-insensitive)
/// are dropped so the drill never spells out its own answer; synonym and
/// antonym lists are merged from the definition level first, then the
/// meaning level.
pub fn parse_body(word: &str, body: &str) -> Option<WordMetadata> {
    let entries: Vec<ApiEntry> = serde_json::from_str(body).ok()?;
    let entry = entries.into_iter().next()?;
    let needle = word.to_lowercase();

    let phonetics = entry
        .phonetics
        .into_iter()
        .map(|p| Phonetic {
            audio: non_empty(p.audio),
            text: non_empty(p.text),
        })
        .collect();

    let meanings = entry
        .meanings
        .into_iter()
        .map(|m| {
            let mut definitions = Vec::new();
            let mut synonyms = Vec::new();
            let mut antonyms = Vec::new();
            for d in m.definitions {
                if !d.definition.is_empty() && !d.definition.to_lowercase().contains(&needle) {
                    definitions.push(d.definition);
                }
                synonyms.extend(d.synonyms);
                antonyms.extend(d.antonyms);
            }
            synonyms.extend(m.synonyms);
            antonyms.extend(m.antonyms);
            Meaning {
                part_of_speech: m.part_of_speech,
                definitions,
                synonyms,
                antonyms,
            }
        })
        .collect();

    Some(WordMetadata {
        word: word.to_string(),
        phonetics,
        meanings,
    })
}
