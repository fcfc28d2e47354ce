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

//! # Common blocks for pipelines
//! Provides the tokenizer abstraction shared by the pipelines: an `Encode` capability turning a
//! text into token ids, and `TokenizerOption`, an enum holding any of the tokenizers a
//! `TokenizerClass` can be loaded as.
use crate::auto::mapping::TokenizerClass;
use crate::common::config::{get_bool, InitKwargs};
use crate::common::error::AutoNlpError;
use crate::auto::{pretrained_file, ResolutionSource};
use crate::resources::ResourceProvider;
use rust_tokenizers::tokenizer::{
    AlbertTokenizer, BertTokenizer, Gpt2Tokenizer, RobertaTokenizer, SentencePieceTokenizer,
    Tokenizer, TruncationStrategy, XLNetTokenizer,
};
use rust_tokenizers::TokenizedInput;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// # Text to token ids capability
/// Anything able to encode a text as a sequence of token ids can feed the preprocessing
/// pipelines.
pub trait Encode {
    /// Encodes `text` as token ids, without special tokens.
    fn encode(&self, text: &str) -> Vec<i64>;
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
/// # Identifies the tokenization algorithm of a tokenizer class
pub enum TokenizerType {
    /// WordPiece over a `vocab.txt` vocabulary
    WordPiece,
    /// ALBERT SentencePiece model
    Albert,
    /// XLNet SentencePiece model
    XLNet,
    /// Plain unigram SentencePiece model
    SentencePiece,
    /// GPT2 byte-level BPE (`vocab.json` and `merges.txt`)
    Gpt2,
    /// RoBERTa byte-level BPE (`vocab.json` and `merges.txt`)
    Roberta,
}

impl TokenizerType {
    /// Tokenization algorithm of a tokenizer class and the resource files it is loaded from.
    pub fn from_class(class: TokenizerClass) -> (TokenizerType, &'static [&'static str]) {
        match class {
            TokenizerClass::Albert => (TokenizerType::Albert, &["spiece.model"]),
            TokenizerClass::XLNet => (TokenizerType::XLNet, &["spiece.model"]),
            TokenizerClass::BigBird => {
                (TokenizerType::SentencePiece, &["sentencepiece_gpt2.model"])
            }
            TokenizerClass::UnifiedTransformer => (TokenizerType::SentencePiece, &["spm.model"]),
            TokenizerClass::Gpt => (TokenizerType::Gpt2, &["vocab.json", "merges.txt"]),
            TokenizerClass::Bart => (TokenizerType::Roberta, &["vocab.json", "merges.txt"]),
            TokenizerClass::Bert
            | TokenizerClass::ConvBert
            | TokenizerClass::DistilBert
            | TokenizerClass::Electra
            | TokenizerClass::Skep
            | TokenizerClass::ErnieCtm
            | TokenizerClass::ErnieDoc
            | TokenizerClass::ErnieGram
            | TokenizerClass::Ernie
            | TokenizerClass::MPNet
            | TokenizerClass::NeZha
            | TokenizerClass::Roberta
            | TokenizerClass::RoFormer
            | TokenizerClass::TinyBert
            | TokenizerClass::Unimo => (TokenizerType::WordPiece, &["vocab.txt"]),
        }
    }

    fn default_lower_case(class: TokenizerClass) -> bool {
        !matches!(
            class,
            TokenizerClass::Gpt
                | TokenizerClass::Bart
                | TokenizerClass::XLNet
                | TokenizerClass::UnifiedTransformer
        )
    }
}

/// # Abstraction that holds a particular tokenizer, can be of any of the supported algorithms
pub enum TokenizerOption {
    /// WordPiece tokenizer
    Bert(BertTokenizer),
    /// Albert Tokenizer
    Albert(AlbertTokenizer),
    /// XLNet Tokenizer
    XLNet(XLNetTokenizer),
    /// SentencePiece Tokenizer
    SentencePiece(SentencePieceTokenizer),
    /// GPT2 Tokenizer
    Gpt2(Gpt2Tokenizer),
    /// Roberta Tokenizer
    Roberta(RobertaTokenizer),
}

impl TokenizerOption {
    /// Interface method to load a tokenizer from resource files
    ///
    /// # Arguments
    ///
    /// * `tokenizer_type` - tokenization algorithm
    /// * `resource_paths` - resource files, in the order given by `TokenizerType::from_class`
    /// * `lower_case` - lowercase the input before tokenization
    /// * `strip_accents` - strip accents (WordPiece, Albert and XLNet only)
    /// * `add_prefix_space` - add a leading space to the input (Roberta only)
    pub fn from_file<P: AsRef<Path>>(
        tokenizer_type: TokenizerType,
        resource_paths: &[P],
        lower_case: bool,
        strip_accents: Option<bool>,
        add_prefix_space: Option<bool>,
    ) -> Result<Self, AutoNlpError> {
        let paths = resource_paths
            .iter()
            .map(|path| path_to_str(path.as_ref()))
            .collect::<Result<Vec<&str>, AutoNlpError>>()?;
        let expected = match tokenizer_type {
            TokenizerType::Gpt2 | TokenizerType::Roberta => 2,
            _ => 1,
        };
        if paths.len() != expected {
            return Err(AutoNlpError::InvalidConfigurationError(format!(
                "{:?} tokenizer expects {} resource file(s), got {}",
                tokenizer_type,
                expected,
                paths.len()
            )));
        }

        if let Some(value) = add_prefix_space {
            if tokenizer_type != TokenizerType::Roberta {
                return Err(AutoNlpError::InvalidConfigurationError(format!(
                    "Optional input `add_prefix_space` set to value {} but cannot be used by {:?}",
                    value, tokenizer_type
                )));
            }
        }
        if let Some(value) = strip_accents {
            if matches!(
                tokenizer_type,
                TokenizerType::SentencePiece | TokenizerType::Gpt2 | TokenizerType::Roberta
            ) {
                return Err(AutoNlpError::InvalidConfigurationError(format!(
                    "Optional input `strip_accents` set to value {} but cannot be used by {:?}",
                    value, tokenizer_type
                )));
            }
        }

        let tokenizer = match tokenizer_type {
            TokenizerType::WordPiece => TokenizerOption::Bert(BertTokenizer::from_file(
                paths[0],
                lower_case,
                strip_accents.unwrap_or(lower_case),
            )?),
            TokenizerType::Albert => TokenizerOption::Albert(AlbertTokenizer::from_file(
                paths[0],
                lower_case,
                strip_accents.unwrap_or(lower_case),
            )?),
            TokenizerType::XLNet => TokenizerOption::XLNet(XLNetTokenizer::from_file(
                paths[0],
                lower_case,
                strip_accents.unwrap_or(false),
            )?),
            TokenizerType::SentencePiece => TokenizerOption::SentencePiece(
                SentencePieceTokenizer::from_file(paths[0], lower_case)?,
            ),
            TokenizerType::Gpt2 => {
                TokenizerOption::Gpt2(Gpt2Tokenizer::from_file(paths[0], paths[1], lower_case)?)
            }
            TokenizerType::Roberta => TokenizerOption::Roberta(RobertaTokenizer::from_file(
                paths[0],
                paths[1],
                lower_case,
                add_prefix_space.unwrap_or(false),
            )?),
        };
        Ok(tokenizer)
    }

    /// Returns the tokenization algorithm
    pub fn tokenizer_type(&self) -> TokenizerType {
        match *self {
            Self::Bert(_) => TokenizerType::WordPiece,
            Self::Albert(_) => TokenizerType::Albert,
            Self::XLNet(_) => TokenizerType::XLNet,
            Self::SentencePiece(_) => TokenizerType::SentencePiece,
            Self::Gpt2(_) => TokenizerType::Gpt2,
            Self::Roberta(_) => TokenizerType::Roberta,
        }
    }

    /// Interface method to tokenization
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        match *self {
            Self::Bert(ref tokenizer) => tokenizer.tokenize(text),
            Self::Albert(ref tokenizer) => tokenizer.tokenize(text),
            Self::XLNet(ref tokenizer) => tokenizer.tokenize(text),
            Self::SentencePiece(ref tokenizer) => tokenizer.tokenize(text),
            Self::Gpt2(ref tokenizer) => tokenizer.tokenize(text),
            Self::Roberta(ref tokenizer) => tokenizer.tokenize(text),
        }
    }

    /// Interface method to convert tokens to ids
    pub fn convert_tokens_to_ids(&self, tokens: &[String]) -> Vec<i64> {
        match *self {
            Self::Bert(ref tokenizer) => tokenizer.convert_tokens_to_ids(tokens),
            Self::Albert(ref tokenizer) => tokenizer.convert_tokens_to_ids(tokens),
            Self::XLNet(ref tokenizer) => tokenizer.convert_tokens_to_ids(tokens),
            Self::SentencePiece(ref tokenizer) => tokenizer.convert_tokens_to_ids(tokens),
            Self::Gpt2(ref tokenizer) => tokenizer.convert_tokens_to_ids(tokens),
            Self::Roberta(ref tokenizer) => tokenizer.convert_tokens_to_ids(tokens),
        }
    }

    /// Interface method for (pair) encoding with special tokens
    pub fn encode_pair(
        &self,
        text_1: &str,
        text_2: Option<&str>,
        max_len: usize,
        truncation_strategy: &TruncationStrategy,
        stride: usize,
    ) -> TokenizedInput {
        match *self {
            Self::Bert(ref tokenizer) => {
                tokenizer.encode(text_1, text_2, max_len, truncation_strategy, stride)
            }
            Self::Albert(ref tokenizer) => {
                tokenizer.encode(text_1, text_2, max_len, truncation_strategy, stride)
            }
            Self::XLNet(ref tokenizer) => {
                tokenizer.encode(text_1, text_2, max_len, truncation_strategy, stride)
            }
            Self::SentencePiece(ref tokenizer) => {
                tokenizer.encode(text_1, text_2, max_len, truncation_strategy, stride)
            }
            Self::Gpt2(ref tokenizer) => {
                tokenizer.encode(text_1, text_2, max_len, truncation_strategy, stride)
            }
            Self::Roberta(ref tokenizer) => {
                tokenizer.encode(text_1, text_2, max_len, truncation_strategy, stride)
            }
        }
    }
}

impl Encode for TokenizerOption {
    fn encode(&self, text: &str) -> Vec<i64> {
        let tokens = self.tokenize(text);
        self.convert_tokens_to_ids(&tokens)
    }
}

/// # Tokenizer instantiated for a resolved tokenizer class
pub struct PretrainedTokenizer {
    /// Tokenizer class the files were loaded for
    pub class: TokenizerClass,
    /// Underlying tokenizer
    pub tokenizer: TokenizerOption,
}

impl PretrainedTokenizer {
    /// Loads the resource files of `class` for `pretrained_model_name_or_path`, located
    /// according to `source` (see `pretrained_file`). Reads `do_lower_case`, `strip_accents`
    /// and `add_prefix_space` from `init_kwargs`.
    pub fn new(
        class: TokenizerClass,
        pretrained_model_name_or_path: &str,
        source: &ResolutionSource,
        init_kwargs: &InitKwargs,
    ) -> Result<Self, AutoNlpError> {
        let (tokenizer_type, file_names) = TokenizerType::from_class(class);
        let resource_paths = file_names
            .iter()
            .map(|file_name| {
                pretrained_file(source, pretrained_model_name_or_path, file_name)?.get_local_path()
            })
            .collect::<Result<Vec<_>, AutoNlpError>>()?;

        let lower_case = get_bool(init_kwargs, "do_lower_case")?
            .unwrap_or_else(|| TokenizerType::default_lower_case(class));
        let tokenizer = TokenizerOption::from_file(
            tokenizer_type,
            &resource_paths,
            lower_case,
            get_bool(init_kwargs, "strip_accents")?,
            get_bool(init_kwargs, "add_prefix_space")?,
        )?;
        Ok(PretrainedTokenizer { class, tokenizer })
    }
}

impl Encode for PretrainedTokenizer {
    fn encode(&self, text: &str) -> Vec<i64> {
        self.tokenizer.encode(text)
    }
}

fn path_to_str(path: &Path) -> Result<&str, AutoNlpError> {
    path.to_str().ok_or_else(|| {
        AutoNlpError::InvalidConfigurationError(format!(
            "resource path {} is not valid UTF-8",
            path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auto::mapping::TOKENIZER_MAPPING_NAMES;
    use std::io::Write;

    fn write_vocab(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("vocab.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        for token in &["[PAD]", "[UNK]", "[CLS]", "[SEP]", "[MASK]", "hello", "world", "##s"] {
            writeln!(file, "{}", token).unwrap();
        }
        path
    }

    #[test]
    fn every_class_has_resource_files() {
        for (class, _) in TOKENIZER_MAPPING_NAMES {
            let (tokenizer_type, files) = TokenizerType::from_class(*class);
            let expected = match tokenizer_type {
                TokenizerType::Gpt2 | TokenizerType::Roberta => 2,
                _ => 1,
            };
            assert_eq!(files.len(), expected, "{}", class);
        }
    }

    #[test]
    fn wordpiece_encodes_without_special_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let vocab_path = write_vocab(dir.path());
        let tokenizer =
            TokenizerOption::from_file(TokenizerType::WordPiece, &[vocab_path], true, None, None)
                .unwrap();

        assert_eq!(tokenizer.tokenizer_type(), TokenizerType::WordPiece);
        assert_eq!(Encode::encode(&tokenizer, "Hello worlds"), vec![5, 6, 7]);
        assert_eq!(Encode::encode(&tokenizer, "unseen"), vec![1]);
    }

    #[test]
    fn incompatible_options_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let vocab_path = write_vocab(dir.path());
        let result = TokenizerOption::from_file(
            TokenizerType::WordPiece,
            &[vocab_path.clone()],
            true,
            None,
            Some(true),
        );
        assert!(matches!(
            result,
            Err(AutoNlpError::InvalidConfigurationError(_))
        ));

        let result =
            TokenizerOption::from_file(TokenizerType::Gpt2, &[vocab_path], false, None, None);
        assert!(matches!(
            result,
            Err(AutoNlpError::InvalidConfigurationError(_))
        ));
    }
}
