// Copyright 2022 The rust-autonlp Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::common::error::AutoNlpError;
use crate::pipelines::common::Encode;
use crate::pipelines::similarity::vocab::{Vocabulary, WordVocab};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
/// # Language of the similarity dataset
/// Selects the field names of example records and the splitting unit of `CharTokenizer`.
pub enum Language {
    /// `query` / `title` / `label` fields, character-level tokens
    Chinese,
    /// `sentence1` / `sentence2` / `labels` fields, whitespace-separated tokens
    English,
}

impl Language {
    /// `"ch"` selects Chinese, any other flag English.
    pub fn from_flag(flag: &str) -> Language {
        if flag == "ch" {
            Language::Chinese
        } else {
            Language::English
        }
    }

    /// Names of the query, title and label fields.
    pub fn field_names(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            Language::Chinese => ("query", "title", "label"),
            Language::English => ("sentence1", "sentence2", "labels"),
        }
    }
}

impl From<&str> for Language {
    fn from(flag: &str) -> Self {
        Language::from_flag(flag)
    }
}

/// Index of `word`, or of `unk_word` when `word` is not in the table.
/// Returns `None` only when neither is present.
pub fn get_idx_from_word(
    word: &str,
    word_to_idx: &HashMap<String, i64>,
    unk_word: &str,
) -> Option<i64> {
    word_to_idx
        .get(word)
        .or_else(|| word_to_idx.get(unk_word))
        .copied()
}

/// # Character (Chinese) or word (other languages) tokenizer
///
/// # Example
///
/// ```
/// use rust_autonlp::pipelines::similarity::{CharTokenizer, Language, WordVocab};
/// let vocab = WordVocab::from_tokens(vec!["[UNK]", "你", "好"], "[UNK]")?;
/// let tokenizer = CharTokenizer::new(vocab, Language::Chinese)?;
/// assert_eq!(tokenizer.encode("你好吗"), vec![1, 2, 0]);
/// # Ok::<(), rust_autonlp::AutoNlpError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CharTokenizer<V: Vocabulary = WordVocab> {
    vocab: V,
    language: Language,
    unk_id: i64,
}

impl<V: Vocabulary> CharTokenizer<V> {
    /// Creates a tokenizer over `vocab`. Fails if the vocabulary does not hold its own unknown
    /// token.
    pub fn new(vocab: V, language: Language) -> Result<Self, AutoNlpError> {
        let unk_id = *vocab.token_to_idx().get(vocab.unk_token()).ok_or_else(|| {
            AutoNlpError::InvalidInput(format!(
                "unknown token `{}` missing from vocabulary",
                vocab.unk_token()
            ))
        })?;
        Ok(CharTokenizer {
            vocab,
            language,
            unk_id,
        })
    }

    pub fn vocab(&self) -> &V {
        &self.vocab
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Splits `sentence` into characters (Chinese) or whitespace-separated words and maps each
    /// of them to its index. Out-of-vocabulary tokens map to the unknown token index.
    pub fn encode(&self, sentence: &str) -> Vec<i64> {
        let word_to_idx = self.vocab.token_to_idx();
        let lookup = |word: &str| word_to_idx.get(word).copied().unwrap_or(self.unk_id);
        match self.language {
            Language::Chinese => {
                let mut buffer = [0u8; 4];
                sentence
                    .chars()
                    .map(|character| lookup(&*character.encode_utf8(&mut buffer)))
                    .collect()
            }
            Language::English => sentence.split_whitespace().map(lookup).collect(),
        }
    }

    /// Whitespace split, whatever the language.
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        sentence.split_whitespace().map(str::to_string).collect()
    }

    pub fn convert_tokens_to_string(&self, tokens: &[String]) -> String {
        tokens.join(" ")
    }

    /// Not implemented: always returns `AutoNlpError::Unsupported`. Use `encode` on the text
    /// instead.
    pub fn convert_tokens_to_ids(&self, _tokens: &[String]) -> Result<Vec<i64>, AutoNlpError> {
        Err(AutoNlpError::Unsupported(
            "CharTokenizer::convert_tokens_to_ids".to_string(),
        ))
    }
}

impl<V: Vocabulary> Encode for CharTokenizer<V> {
    fn encode(&self, text: &str) -> Vec<i64> {
        CharTokenizer::encode(self, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chinese_tokenizer() -> CharTokenizer {
        let vocab = WordVocab::from_tokens(vec!["[PAD]", "[UNK]", "今", "天", "气", " "], "[UNK]")
            .unwrap();
        CharTokenizer::new(vocab, Language::Chinese).unwrap()
    }

    #[test]
    fn chinese_encoding_round_trips_through_vocab() {
        let tokenizer = chinese_tokenizer();
        let ids = tokenizer.encode("今天 天气");
        assert_eq!(ids, vec![2, 3, 5, 3, 4]);
        assert_eq!(tokenizer.vocab().to_tokens(&ids).concat(), "今天 天气");
    }

    #[test]
    fn out_of_vocabulary_maps_to_unknown() {
        let tokenizer = chinese_tokenizer();
        assert_eq!(tokenizer.encode("明天"), vec![1, 3]);
        assert_eq!(tokenizer.encode(""), Vec::<i64>::new());
    }

    #[test]
    fn english_splits_on_whitespace() {
        let vocab = WordVocab::from_tokens(vec!["<unk>", "how", "are", "you"], "<unk>").unwrap();
        let tokenizer = CharTokenizer::new(vocab, Language::from_flag("en")).unwrap();
        assert_eq!(tokenizer.encode("  how are\tyou doing \n"), vec![1, 2, 3, 0]);
        assert_eq!(tokenizer.tokenize(" how  are "), vec!["how", "are"]);
        assert_eq!(
            tokenizer.convert_tokens_to_string(&["how".to_string(), "are".to_string()]),
            "how are"
        );
    }

    #[test]
    fn convert_tokens_to_ids_is_unsupported() {
        let tokenizer = chinese_tokenizer();
        assert!(matches!(
            tokenizer.convert_tokens_to_ids(&["今".to_string()]),
            Err(AutoNlpError::Unsupported(_))
        ));
    }

    #[test]
    fn word_lookup_falls_back_to_unknown() {
        let mut table = HashMap::new();
        table.insert("[UNK]".to_string(), 0);
        table.insert("word".to_string(), 7);
        assert_eq!(get_idx_from_word("word", &table, "[UNK]"), Some(7));
        assert_eq!(get_idx_from_word("other", &table, "[UNK]"), Some(0));
        assert_eq!(get_idx_from_word("other", &table, "<unk>"), None);
    }

    #[test]
    fn language_flag_selects_field_names() {
        assert_eq!(Language::from("ch").field_names().0, "query");
        assert_eq!(Language::from("zh").field_names().2, "labels");
    }
}
