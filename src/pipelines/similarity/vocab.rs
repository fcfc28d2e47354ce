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
use rust_tokenizers::vocab::{BaseVocab, Vocab};
use std::collections::HashMap;
use std::path::Path;

/// # Token to index table with a designated unknown token
pub trait Vocabulary {
    /// Mapping from token to index
    fn token_to_idx(&self) -> &HashMap<String, i64>;

    /// Token substituted for out-of-vocabulary words
    fn unk_token(&self) -> &str;
}

/// # Word-level vocabulary
/// Indices are positions in the token list the vocabulary was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct WordVocab {
    token_to_idx: HashMap<String, i64>,
    idx_to_token: Vec<String>,
    unk_token: String,
}

impl WordVocab {
    /// Builds a vocabulary from an ordered list of tokens.
    ///
    /// # Arguments
    ///
    /// * `tokens` - tokens, the index of each token being its position
    /// * `unk_token` - unknown token, must be part of `tokens`
    ///
    /// # Example
    ///
    /// ```
    /// use rust_autonlp::pipelines::similarity::{Vocabulary, WordVocab};
    /// let vocab = WordVocab::from_tokens(vec!["[PAD]", "[UNK]", "hello"], "[UNK]")?;
    /// assert_eq!(vocab.token_to_idx()["hello"], 2);
    /// # Ok::<(), rust_autonlp::AutoNlpError>(())
    /// ```
    pub fn from_tokens<I, S>(tokens: I, unk_token: &str) -> Result<Self, AutoNlpError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut token_to_idx = HashMap::new();
        let mut idx_to_token = Vec::new();
        for token in tokens {
            let token = token.into();
            if token_to_idx
                .insert(token.clone(), idx_to_token.len() as i64)
                .is_some()
            {
                return Err(AutoNlpError::InvalidInput(format!(
                    "duplicate token `{}` in vocabulary",
                    token
                )));
            }
            idx_to_token.push(token);
        }
        if !token_to_idx.contains_key(unk_token) {
            return Err(AutoNlpError::InvalidInput(format!(
                "unknown token `{}` missing from vocabulary",
                unk_token
            )));
        }
        Ok(WordVocab {
            token_to_idx,
            idx_to_token,
            unk_token: unk_token.to_string(),
        })
    }

    /// Reads a vocabulary file holding one token per line, the index of each token being its
    /// line number.
    pub fn from_file<P: AsRef<Path>>(path: P, unk_token: &str) -> Result<Self, AutoNlpError> {
        let path = path.as_ref();
        let path = path.to_str().ok_or_else(|| {
            AutoNlpError::InvalidInput(format!(
                "vocabulary path {} is not valid UTF-8",
                path.display()
            ))
        })?;
        let token_to_idx = BaseVocab::read_vocab_file(path)?;

        let mut idx_to_token = vec![String::new(); token_to_idx.len()];
        for (token, idx) in token_to_idx.iter() {
            // a repeated line leaves an index past the number of distinct tokens
            match idx_to_token.get_mut(*idx as usize) {
                Some(slot) => *slot = token.clone(),
                None => {
                    return Err(AutoNlpError::InvalidInput(format!(
                        "duplicate tokens in vocabulary file {}",
                        path
                    )))
                }
            }
        }
        WordVocab::from_tokens(idx_to_token, unk_token)
    }

    /// Token stored at index `id`
    pub fn id_to_token(&self, id: i64) -> Option<&str> {
        if id < 0 {
            return None;
        }
        self.idx_to_token.get(id as usize).map(String::as_str)
    }

    /// Maps a sequence of indices back to tokens; indices out of range map to the unknown token.
    pub fn to_tokens(&self, ids: &[i64]) -> Vec<String> {
        ids.iter()
            .map(|id| self.id_to_token(*id).unwrap_or(self.unk_token.as_str()).to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.idx_to_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idx_to_token.is_empty()
    }
}

impl Vocabulary for WordVocab {
    fn token_to_idx(&self) -> &HashMap<String, i64> {
        &self.token_to_idx
    }

    fn unk_token(&self) -> &str {
        &self.unk_token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn ids_follow_line_order() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("vocab.txt");
        let mut file = File::create(&path)?;
        write!(file, "[PAD]\r\n[UNK]\n你\n好\n")?;

        let vocab = WordVocab::from_file(&path, "[UNK]")?;
        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.token_to_idx()["你"], 2);
        assert_eq!(vocab.id_to_token(0), Some("[PAD]"));
        assert_eq!(vocab.to_tokens(&[3, 2, 42]), vec!["好", "你", "[UNK]"]);
        Ok(())
    }

    #[test]
    fn repeated_lines_are_rejected() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("vocab.txt");
        std::fs::write(&path, "[UNK]\na\nb\na\n")?;
        assert!(matches!(
            WordVocab::from_file(&path, "[UNK]"),
            Err(AutoNlpError::InvalidInput(_))
        ));
        Ok(())
    }

    #[test]
    fn unknown_token_must_be_present() {
        assert!(WordVocab::from_tokens(vec!["a", "b"], "[UNK]").is_err());
    }

    #[test]
    fn duplicate_tokens_are_rejected() {
        assert!(WordVocab::from_tokens(vec!["[UNK]", "a", "a"], "[UNK]").is_err());
    }
}
