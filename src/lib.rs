//! # Automatic model and tokenizer resolution for pretrained NLP checkpoints
//!
//! `rust-autonlp` maps a pretrained identifier to the model or tokenizer class able to load it,
//! and provides the preprocessing helpers of sentence-pair similarity tasks.
//!
//! - `auto`: the `Auto*` resolvers. An identifier is a built-in checkpoint name, a community
//!   checkpoint name (its sidecar file is downloaded to the cache, see `resources`), or a local
//!   directory holding a sidecar file.
//! - `pipelines::common`: tokenizer back-ends built on `rust_tokenizers`, loaded through
//!   `AutoTokenizer`.
//! - `pipelines::similarity`: `CharTokenizer`, `WordVocab` and the `convert_example` family.
//!
//! ```no_run
//! use rust_autonlp::auto::{AutoModelForSequenceClassification, AutoTokenizer, PretrainedModelConfig};
//! use rust_autonlp::pipelines::common::{Encode, PretrainedTokenizer};
//! use rust_autonlp::InitKwargs;
//!
//! let tokenizer: PretrainedTokenizer =
//!     AutoTokenizer::from_pretrained("bert-base-uncased", &InitKwargs::new())?;
//! let model: PretrainedModelConfig =
//!     AutoModelForSequenceClassification::from_pretrained("bert-base-uncased", &InitKwargs::new())?;
//! println!("{} -> {:?}", model.class, tokenizer.encode("Hello world"));
//! # Ok::<(), rust_autonlp::AutoNlpError>(())
//! ```
//!
//! ## Cache and community hub
//!
//! Remote files are downloaded with `cached-path` (enabled by the default `remote` feature) to
//! `$AUTONLP_CACHE`, or `.autonlp` under the platform cache directory when it is not set.
//! `AUTONLP_COMMUNITY_URL` overrides the community hub prefix.

pub mod auto;
mod common;
pub mod pipelines;

pub use common::error::AutoNlpError;
pub use common::{config, merge_kwargs, resources, Config, InitKwargs, SidecarConfig};
