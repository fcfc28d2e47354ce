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

use crate::auto::mapping::TokenizerClass;
use crate::auto::resolver::{
    self, PretrainedLoadable, Resolution, ResolutionSource, TokenizerMapping,
};
use crate::common::config::InitKwargs;
use crate::common::error::AutoNlpError;
use crate::pipelines::common::PretrainedTokenizer;

/// # Resolver for tokenizers
///
/// Picks the tokenizer class from a built-in identifier, from the `init_class` of the
/// `tokenizer_config.json` found in a local directory or published by the community, or as a last
/// resort from a class pattern found in the identifier.
///
/// ```compile_fail
/// let resolver = rust_autonlp::auto::AutoTokenizer { _private: () };
/// ```
///
/// # Example
///
/// ```no_run
/// use rust_autonlp::auto::AutoTokenizer;
/// use rust_autonlp::pipelines::common::{Encode, PretrainedTokenizer};
/// use rust_autonlp::InitKwargs;
///
/// let tokenizer: PretrainedTokenizer =
///     AutoTokenizer::from_pretrained("./my_bert/", &InitKwargs::new())?;
/// let token_ids = tokenizer.encode("Welcome to use rust-autonlp!");
/// # Ok::<(), rust_autonlp::AutoNlpError>(())
/// ```
#[derive(Debug)]
pub struct AutoTokenizer {
    _private: (),
}

impl AutoTokenizer {
    /// Resolves the tokenizer class without loading any vocabulary.
    pub fn resolve(
        pretrained_model_name_or_path: &str,
    ) -> Result<Resolution<TokenizerClass>, AutoNlpError> {
        resolver::resolve(&TokenizerMapping, pretrained_model_name_or_path)
    }

    /// Resolves the tokenizer class and builds it through `T::from_pretrained`.
    /// `kwargs` override the keyword arguments of `tokenizer_config.json`.
    pub fn from_pretrained<T>(
        pretrained_model_name_or_path: &str,
        kwargs: &InitKwargs,
    ) -> Result<T, AutoNlpError>
    where
        T: PretrainedLoadable<Class = TokenizerClass>,
    {
        resolver::load(&TokenizerMapping, pretrained_model_name_or_path, kwargs)
    }
}

impl PretrainedLoadable for PretrainedTokenizer {
    type Class = TokenizerClass;

    fn from_pretrained(
        class: TokenizerClass,
        pretrained_model_name_or_path: &str,
        source: &ResolutionSource,
        init_kwargs: InitKwargs,
    ) -> Result<Self, AutoNlpError> {
        PretrainedTokenizer::new(class, pretrained_model_name_or_path, source, &init_kwargs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_map_through_their_family() -> Result<(), AutoNlpError> {
        let cases = [
            ("bert-base-uncased", TokenizerClass::Bert),
            ("rbt3", TokenizerClass::Roberta),
            ("plato-mini", TokenizerClass::UnifiedTransformer),
            ("gpt-cpm-large-cn", TokenizerClass::Gpt),
            ("skep_ernie_1.0_large_ch", TokenizerClass::Skep),
        ];
        for (name, expected) in cases.iter() {
            let resolution = AutoTokenizer::resolve(name)?;
            assert_eq!(resolution.class, *expected);
            assert_eq!(resolution.source, ResolutionSource::BuiltIn);
        }
        Ok(())
    }

    #[test]
    fn builtin_without_hosted_files_is_unsupported() {
        let result: Result<PretrainedTokenizer, _> =
            AutoTokenizer::from_pretrained("electra-small", &InitKwargs::new());
        assert!(matches!(result, Err(AutoNlpError::Unsupported(_))));
    }
}
