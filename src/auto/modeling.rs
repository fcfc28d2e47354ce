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

use crate::auto::mapping::{ModelClass, ModelHead};
use crate::auto::resolver::{
    self, pretrained_file, PretrainedLoadable, Resolution, ResolutionSource,
};
use crate::common::config::InitKwargs;
use crate::common::error::AutoNlpError;
use crate::resources::ResourceProvider;
use serde_json::Value;

/// Weights file expected next to `model_config.json`.
pub const MODEL_WEIGHTS_FILE: &str = "model_state.pdparams";

macro_rules! auto_model {
    ($(#[$doc:meta])* $name:ident => $head:expr) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $name {
            _private: (),
        }

        impl $name {
            /// Task head whose table this resolver searches.
            pub const HEAD: ModelHead = $head;

            /// Resolves the model class for a built-in identifier, a community identifier or
            /// a local directory, without instantiating it.
            pub fn resolve(
                pretrained_model_name_or_path: &str,
            ) -> Result<Resolution<ModelClass>, AutoNlpError> {
                resolver::resolve(&Self::HEAD, pretrained_model_name_or_path)
            }

            /// Resolves the model class and builds it through `M::from_pretrained`.
            /// `kwargs` override the keyword arguments of `model_config.json`.
            pub fn from_pretrained<M>(
                pretrained_model_name_or_path: &str,
                kwargs: &InitKwargs,
            ) -> Result<M, AutoNlpError>
            where
                M: PretrainedLoadable<Class = ModelClass>,
            {
                resolver::load(&Self::HEAD, pretrained_model_name_or_path, kwargs)
            }
        }
    };
}

auto_model!(
    /// # Resolver for base models
    ///
    /// Resolver types are not meant to be instantiated:
    ///
    /// ```compile_fail
    /// let resolver = rust_autonlp::auto::AutoModel { _private: () };
    /// ```
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_autonlp::auto::{AutoModel, PretrainedModelConfig};
    /// use rust_autonlp::InitKwargs;
    ///
    /// let model: PretrainedModelConfig =
    ///     AutoModel::from_pretrained("bert-base-uncased", &InitKwargs::new())?;
    /// assert_eq!(model.class.to_string(), "BertModel");
    /// # Ok::<(), rust_autonlp::AutoNlpError>(())
    /// ```
    AutoModel => ModelHead::Base
);
auto_model!(
    /// # Resolver for models with a pretraining head
    AutoModelForPretraining => ModelHead::Pretraining
);
auto_model!(
    /// # Resolver for models with a language modeling head
    AutoModelWithLMHead => ModelHead::LMHead
);
auto_model!(
    /// # Resolver for masked language models
    AutoModelForMaskedLM => ModelHead::MaskedLM
);
auto_model!(
    /// # Resolver for sequence classification models
    ///
    /// ```no_run
    /// use rust_autonlp::auto::{AutoModelForSequenceClassification, PretrainedModelConfig};
    /// use serde_json::json;
    ///
    /// let kwargs = json!({"num_classes": 2});
    /// let model: PretrainedModelConfig = AutoModelForSequenceClassification::from_pretrained(
    ///     "yingyibiao/bert-base-uncased-sst-2-finetuned",
    ///     kwargs.as_object().unwrap(),
    /// )?;
    /// # Ok::<(), rust_autonlp::AutoNlpError>(())
    /// ```
    AutoModelForSequenceClassification => ModelHead::SequenceClassification
);
auto_model!(
    /// # Resolver for extractive question answering models
    AutoModelForQuestionAnswering => ModelHead::QuestionAnswering
);
auto_model!(
    /// # Resolver for token classification models (e.g. NER)
    AutoModelForTokenClassification => ModelHead::TokenClassification
);
auto_model!(
    /// # Resolver for multiple choice models
    AutoModelForMultipleChoice => ModelHead::MultipleChoice
);
auto_model!(
    /// # Resolver for encoder stacks of encoder-decoder models
    AutoEncoder => ModelHead::Encoder
);
auto_model!(
    /// # Resolver for decoder stacks of encoder-decoder models
    AutoDecoder => ModelHead::Decoder
);
auto_model!(
    /// # Resolver for ELECTRA-style generators
    AutoGenerator => ModelHead::Generator
);
auto_model!(
    /// # Resolver for ELECTRA-style discriminators
    AutoDiscriminator => ModelHead::Discriminator
);

#[derive(Debug)]
/// # Everything needed to construct a resolved model
/// Holds the class, its keyword arguments and the location of its weights. Building the layers
/// and loading the weights is left to the deep-learning backend.
pub struct PretrainedModelConfig {
    /// Resolved model class
    pub class: ModelClass,
    /// Identifier the class was resolved from
    pub pretrained_model_name_or_path: String,
    /// Resolution path taken
    pub source: ResolutionSource,
    /// Constructor keyword arguments
    pub init_kwargs: InitKwargs,
    /// Weights file: in the local directory, hosted for built-in checkpoints, or published by the
    /// community. Remote weights are only downloaded on `get_local_path`.
    pub weights_resource: Box<dyn ResourceProvider>,
}

impl PretrainedModelConfig {
    /// Keyword argument `key`, if set.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.init_kwargs.get(key)
    }

    /// Number of output classes for classification heads (`num_classes`).
    pub fn num_classes(&self) -> Option<i64> {
        self.get("num_classes").and_then(Value::as_i64)
    }
}

impl PretrainedLoadable for PretrainedModelConfig {
    type Class = ModelClass;

    fn from_pretrained(
        class: ModelClass,
        pretrained_model_name_or_path: &str,
        source: &ResolutionSource,
        init_kwargs: InitKwargs,
    ) -> Result<Self, AutoNlpError> {
        let weights_resource =
            pretrained_file(source, pretrained_model_name_or_path, MODEL_WEIGHTS_FILE)?;
        Ok(PretrainedModelConfig {
            class,
            pretrained_model_name_or_path: pretrained_model_name_or_path.to_string(),
            source: source.clone(),
            init_kwargs,
            weights_resource,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auto::family::ModelFamily;

    #[test]
    fn wrappers_search_their_own_table() -> Result<(), AutoNlpError> {
        let resolution = AutoModelForPretraining::resolve("tinybert-4l-312d")?;
        assert_eq!(resolution.class.name(), "TinyBertForPretraining");
        assert_eq!(resolution.source, ResolutionSource::BuiltIn);

        let resolution = AutoModelForQuestionAnswering::resolve("ernie-gram-zh")?;
        assert_eq!(resolution.class.name(), "ErnieGramForQuestionAnswering");

        let resolution = AutoGenerator::resolve("electra-small")?;
        assert_eq!(resolution.class.name(), "ElectraGenerator");

        let resolution = AutoDecoder::resolve("bart-base")?;
        assert_eq!(resolution.class.name(), "BartDecoder");
        Ok(())
    }

    #[test]
    fn registry_keys_resolve_without_pattern_matching() -> Result<(), AutoNlpError> {
        for (family, name) in ModelHead::TokenClassification.mapping_names() {
            let resolution = AutoModelForTokenClassification::resolve(family.key())?;
            assert_eq!(resolution.class.name(), *name);
            assert!(!resolution.inferred_from_pattern);
        }
        Ok(())
    }

    #[test]
    fn classification_kwargs_are_exposed() {
        let mut init_kwargs = InitKwargs::new();
        init_kwargs.insert("num_classes".to_string(), Value::from(3));
        let config = PretrainedModelConfig {
            class: ModelClass::new(ModelFamily::Skep, ModelHead::SequenceClassification).unwrap(),
            pretrained_model_name_or_path: "skep_ernie_1.0_large_ch".to_string(),
            source: ResolutionSource::BuiltIn,
            init_kwargs,
            weights_resource: Box::new(crate::resources::LocalResource::from(
                std::path::PathBuf::from(MODEL_WEIGHTS_FILE),
            )),
        };
        assert_eq!(config.num_classes(), Some(3));
        assert_eq!(config.get("dropout"), None);
    }
}
