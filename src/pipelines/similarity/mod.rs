//! # Preprocessing for sentence-pair similarity networks
//!
//! Turns `(query, title)` text pairs into the id sequences and lengths consumed by a
//! SimNet-style similarity model. Any tokenizer implementing `Encode` can be used: the
//! `CharTokenizer` of this module (characters for Chinese, whitespace-separated words otherwise)
//! or a `PretrainedTokenizer` resolved by `AutoTokenizer`.
//!
//! Example records are JSON objects. The `Language` selects their field names:
//!
//! | Language | Query | Title | Label |
//! |---|---|---|---|
//! | `Chinese` | `query` | `title` | `label` |
//! | `English` | `sentence1` | `sentence2` | `labels` |
//!
//! ```no_run
//! use rust_autonlp::pipelines::similarity::{
//!     preprocess_prediction_data, CharTokenizer, Language, WordVocab,
//! };
//!
//! let vocab = WordVocab::from_file("simnet_vocab.txt", "[UNK]")?;
//! let tokenizer = CharTokenizer::new(vocab, Language::Chinese)?;
//! let features = preprocess_prediction_data(
//!     &[("世界上什么东西最小", "世界上什么东西最小？")],
//!     &tokenizer,
//! );
//! println!("{:?}", features[0].query_ids);
//! # Ok::<(), rust_autonlp::AutoNlpError>(())
//! ```

mod preprocessing;
mod tokenizer;
mod vocab;

pub use preprocessing::{
    convert_example, preprocess_data, preprocess_prediction_data, SimilarityFeatures,
};
pub use tokenizer::{get_idx_from_word, CharTokenizer, Language};
pub use vocab::{Vocabulary, WordVocab};
