//! # Automatic resolution of model and tokenizer classes
//!
//! The `Auto*` types select the concrete class to use for a pretrained identifier, which can be:
//! - the name of a built-in pretrained checkpoint (e.g. `bert-base-uncased`) or a registry key
//!   (e.g. `bert`),
//! - the name of a community-contributed checkpoint (e.g. `yingyibiao/bert-base-uncased-sst-2-finetuned`),
//!   whose sidecar configuration file is downloaded to the cache,
//! - a local directory holding a sidecar configuration file (`model_config.json` for models,
//!   `tokenizer_config.json` for tokenizers).
//!
//! A sidecar file names its class in an `init_class` field; every other field is forwarded as a
//! constructor keyword argument. Without `init_class`, the class is inferred from the first
//! registry pattern found in the lowercased identifier. This inference is brittle: with the
//! base model table, `my-distilbert` matches `bert` before `distilbert`. A warning is logged
//! whenever it is used.
//!
//! Loading with `from_pretrained` fetches the resource files from the same place: the local
//! directory, the community hub, or for built-in checkpoints the hosted files registered in
//! `BUILTIN_RESOURCE_FILES` (`AutoNlpError::Unsupported` for built-ins without one).
//!
//! Each model resolver searches the table of one task head:
//!
//! | Resolver | Head |
//! |---|---|
//! | `AutoModel` | `ModelHead::Base` |
//! | `AutoModelForPretraining` | `ModelHead::Pretraining` |
//! | `AutoModelWithLMHead` | `ModelHead::LMHead` |
//! | `AutoModelForMaskedLM` | `ModelHead::MaskedLM` |
//! | `AutoModelForSequenceClassification` | `ModelHead::SequenceClassification` |
//! | `AutoModelForQuestionAnswering` | `ModelHead::QuestionAnswering` |
//! | `AutoModelForTokenClassification` | `ModelHead::TokenClassification` |
//! | `AutoModelForMultipleChoice` | `ModelHead::MultipleChoice` |
//! | `AutoEncoder` | `ModelHead::Encoder` |
//! | `AutoDecoder` | `ModelHead::Decoder` |
//! | `AutoGenerator` | `ModelHead::Generator` |
//! | `AutoDiscriminator` | `ModelHead::Discriminator` |
//!
//! ```no_run
//! use rust_autonlp::auto::{AutoModelForTokenClassification, AutoTokenizer};
//!
//! let model = AutoModelForTokenClassification::resolve("junnyu/ckiplab-bert-base-chinese-ner")?;
//! let tokenizer = AutoTokenizer::resolve("ernie-1.0")?;
//! println!("{} / {}", model.class, tokenizer.class);
//! # Ok::<(), rust_autonlp::AutoNlpError>(())
//! ```

mod builtin;
mod family;
pub mod mapping;
mod modeling;
mod resolver;
mod tokenizer;

pub use builtin::{
    builtin_resource, BertModelResources, BertVocabResources, ErnieModelResources,
    ErnieVocabResources, RobertaModelResources, RobertaVocabResources, BUILTIN_RESOURCE_FILES,
};
pub use family::ModelFamily;
pub use mapping::{ModelClass, ModelHead, TokenizerClass};
pub use modeling::{
    AutoDecoder, AutoDiscriminator, AutoEncoder, AutoGenerator, AutoModel,
    AutoModelForMaskedLM, AutoModelForMultipleChoice, AutoModelForPretraining,
    AutoModelForQuestionAnswering, AutoModelForSequenceClassification,
    AutoModelForTokenClassification, AutoModelWithLMHead, PretrainedModelConfig,
    MODEL_WEIGHTS_FILE,
};
pub use resolver::{
    load, pretrained_file, resolve, ClassMapping, PretrainedLoadable, Resolution, ResolutionSource,
    TokenizerMapping, MODEL_CONFIG_FILE, TOKENIZER_CONFIG_FILE,
};
pub use tokenizer::AutoTokenizer;
