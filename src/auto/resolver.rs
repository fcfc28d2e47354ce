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

use crate::auto::builtin::builtin_resource;
use crate::auto::family::ModelFamily;
use crate::auto::mapping::{ModelClass, ModelHead, TokenizerClass};
use crate::common::config::{merge_kwargs, Config, InitKwargs, SidecarConfig};
use crate::common::error::AutoNlpError;
use crate::resources::{community_resource, pretrained_resource, LocalResource, ResourceProvider};
use log::{debug, error, warn};
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Sidecar file read when resolving a model class.
pub const MODEL_CONFIG_FILE: &str = "model_config.json";
/// Sidecar file read when resolving a tokenizer class.
pub const TOKENIZER_CONFIG_FILE: &str = "tokenizer_config.json";

/// # Name registry a resolver searches
/// Implemented by `ModelHead` (one table per task head) and `TokenizerMapping`.
pub trait ClassMapping {
    type Class: Copy + Display;

    /// Name of the sidecar configuration file.
    fn config_file(&self) -> &'static str;

    /// Exact match on a registry key or on a built-in pretrained identifier.
    fn builtin(&self, identifier: &str) -> Option<Self::Class>;

    /// Exact match on a class name, as found in the `init_class` field of a sidecar file.
    fn from_class_name(&self, init_class: &str) -> Option<Self::Class>;

    /// First registry entry whose pattern occurs in `lowercased`.
    fn from_pattern(&self, lowercased: &str) -> Option<Self::Class>;
}

impl ClassMapping for ModelHead {
    type Class = ModelClass;

    fn config_file(&self) -> &'static str {
        MODEL_CONFIG_FILE
    }

    fn builtin(&self, identifier: &str) -> Option<ModelClass> {
        ModelFamily::from_builtin(identifier).and_then(|family| self.class_for(family))
    }

    fn from_class_name(&self, init_class: &str) -> Option<ModelClass> {
        ModelClass::from_name(init_class, *self)
    }

    fn from_pattern(&self, lowercased: &str) -> Option<ModelClass> {
        self.class_matching(lowercased)
    }
}

/// # Tokenizer name registry
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenizerMapping;

impl ClassMapping for TokenizerMapping {
    type Class = TokenizerClass;

    fn config_file(&self) -> &'static str {
        TOKENIZER_CONFIG_FILE
    }

    fn builtin(&self, identifier: &str) -> Option<TokenizerClass> {
        ModelFamily::from_builtin(identifier).and_then(TokenizerClass::for_family)
    }

    fn from_class_name(&self, init_class: &str) -> Option<TokenizerClass> {
        TokenizerClass::from_name(init_class)
    }

    fn from_pattern(&self, lowercased: &str) -> Option<TokenizerClass> {
        TokenizerClass::matching(lowercased)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// # Where a class was resolved from
pub enum ResolutionSource {
    /// Registry key or built-in pretrained identifier
    BuiltIn,
    /// Local directory holding the sidecar file
    LocalDirectory(PathBuf),
    /// Community resource; holds the cached copy of the sidecar file
    Community(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
/// # Outcome of a successful resolution
pub struct Resolution<C> {
    /// Resolved class
    pub class: C,
    /// Resolution path taken
    pub source: ResolutionSource,
    /// `true` when the class was inferred by substring matching on the identifier
    pub inferred_from_pattern: bool,
    /// Constructor keyword arguments read from the sidecar file, `init_class` excluded
    pub init_kwargs: InitKwargs,
}

/// # Construction capability of a resolvable class
/// Implemented by the concrete types an auto resolver hands its result to. The resolver only
/// selects the class and gathers keyword arguments: loading resources is left to the
/// implementation.
pub trait PretrainedLoadable: Sized {
    type Class;

    /// Builds an instance of `class` for `pretrained_model_name_or_path`.
    ///
    /// # Arguments
    ///
    /// * `class` - resolved class to instantiate
    /// * `pretrained_model_name_or_path` - identifier that was resolved
    /// * `source` - resolution path taken, to locate resource files with `pretrained_file`
    /// * `init_kwargs` - sidecar keyword arguments overlaid with the caller's
    fn from_pretrained(
        class: Self::Class,
        pretrained_model_name_or_path: &str,
        source: &ResolutionSource,
        init_kwargs: InitKwargs,
    ) -> Result<Self, AutoNlpError>;
}

/// Resource holding `file_name` for an identifier resolved through `source`: the hosted file of
/// a built-in checkpoint, a file of the local directory, or the community copy.
pub fn pretrained_file(
    source: &ResolutionSource,
    pretrained_model_name_or_path: &str,
    file_name: &str,
) -> Result<Box<dyn ResourceProvider>, AutoNlpError> {
    match source {
        ResolutionSource::BuiltIn => builtin_resource(pretrained_model_name_or_path, file_name),
        ResolutionSource::LocalDirectory(directory) => {
            Ok(Box::new(LocalResource::from(directory.join(file_name))))
        }
        ResolutionSource::Community(_) => {
            community_resource(pretrained_model_name_or_path, file_name)
        }
    }
}

/// Resolves `pretrained_model_name_or_path` against `mapping`.
///
/// The identifier is tried, in order, as a registry key or built-in pretrained identifier, as a
/// local directory holding the sidecar file, and as a community identifier whose sidecar file is
/// downloaded to the cache. When the sidecar file has no `init_class`, the first registry pattern
/// found in the lowercased identifier is used; ties are broken by table order only.
pub fn resolve<M: ClassMapping>(
    mapping: &M,
    pretrained_model_name_or_path: &str,
) -> Result<Resolution<M::Class>, AutoNlpError> {
    if let Some(class) = mapping.builtin(pretrained_model_name_or_path) {
        debug!(
            "'{}' is a built-in identifier of {}",
            pretrained_model_name_or_path, class
        );
        return Ok(Resolution {
            class,
            source: ResolutionSource::BuiltIn,
            inferred_from_pattern: false,
            init_kwargs: InitKwargs::new(),
        });
    }

    let directory = Path::new(pretrained_model_name_or_path);
    let (config_file, source) = if directory.is_dir() {
        let config_file = directory.join(mapping.config_file());
        if !config_file.is_file() {
            error!(
                "no {} found in directory {}",
                mapping.config_file(),
                directory.display()
            );
            return Err(AutoNlpError::UnresolvedIdentifier(
                pretrained_model_name_or_path.to_string(),
            ));
        }
        (
            config_file,
            ResolutionSource::LocalDirectory(directory.to_path_buf()),
        )
    } else {
        let config_file = pretrained_resource(pretrained_model_name_or_path, mapping.config_file())
            .and_then(|resource| resource.get_local_path())
            .map_err(|err| {
                error!("{}", err);
                AutoNlpError::UnresolvedIdentifier(pretrained_model_name_or_path.to_string())
            })?;
        (config_file.clone(), ResolutionSource::Community(config_file))
    };

    let sidecar = SidecarConfig::from_file(&config_file)?;
    resolve_sidecar(mapping, pretrained_model_name_or_path, sidecar, source)
}

fn resolve_sidecar<M: ClassMapping>(
    mapping: &M,
    pretrained_model_name_or_path: &str,
    sidecar: SidecarConfig,
    source: ResolutionSource,
) -> Result<Resolution<M::Class>, AutoNlpError> {
    let SidecarConfig {
        init_class,
        init_kwargs,
    } = sidecar;

    if let Some(init_class) = init_class {
        let class = mapping.from_class_name(&init_class).ok_or_else(|| {
            AutoNlpError::InvalidConfigurationError(format!(
                "unknown init_class `{}` in {}",
                init_class,
                mapping.config_file()
            ))
        })?;
        return Ok(Resolution {
            class,
            source,
            inferred_from_pattern: false,
            init_kwargs,
        });
    }

    warn!("No init_class found, using pattern recognition to infer the class.");
    let lowercased = pretrained_model_name_or_path.to_lowercase();
    match mapping.from_pattern(&lowercased) {
        Some(class) => {
            warn!(
                "The 'pretrained_model_name_or_path' is {}, inferred {}.",
                lowercased, class
            );
            Ok(Resolution {
                class,
                source,
                inferred_from_pattern: true,
                init_kwargs,
            })
        }
        None => Err(AutoNlpError::UnresolvedIdentifier(
            pretrained_model_name_or_path.to_string(),
        )),
    }
}

/// Resolves the identifier, then builds the class through its `PretrainedLoadable`
/// implementation. `kwargs` take precedence over the sidecar keyword arguments.
pub fn load<M, T>(
    mapping: &M,
    pretrained_model_name_or_path: &str,
    kwargs: &InitKwargs,
) -> Result<T, AutoNlpError>
where
    M: ClassMapping,
    T: PretrainedLoadable<Class = M::Class>,
{
    let resolution = resolve(mapping, pretrained_model_name_or_path)?;
    let init_kwargs = merge_kwargs(&resolution.init_kwargs, kwargs);
    T::from_pretrained(
        resolution.class,
        pretrained_model_name_or_path,
        &resolution.source,
        init_kwargs,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sidecar(value: serde_json::Value) -> SidecarConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn explicit_class_skips_pattern_matching() {
        let resolution = resolve_sidecar(
            &ModelHead::SequenceClassification,
            "some/roberta-like/path",
            sidecar(json!({"init_class": "ErnieForSequenceClassification", "num_classes": 2})),
            ResolutionSource::BuiltIn,
        )
        .unwrap();

        assert_eq!(resolution.class.family(), ModelFamily::Ernie);
        assert!(!resolution.inferred_from_pattern);
        assert_eq!(resolution.init_kwargs["num_classes"], json!(2));
    }

    #[test]
    fn unknown_explicit_class_is_a_configuration_error() {
        let result = resolve_sidecar(
            &TokenizerMapping,
            "bert",
            sidecar(json!({"init_class": "NotATokenizer"})),
            ResolutionSource::BuiltIn,
        );
        assert!(matches!(
            result,
            Err(AutoNlpError::InvalidConfigurationError(_))
        ));
    }

    #[test]
    fn missing_class_and_pattern_is_unresolved() {
        let result = resolve_sidecar(
            &ModelHead::MultipleChoice,
            "Some-Unrelated-Model",
            sidecar(json!({})),
            ResolutionSource::BuiltIn,
        );
        match result {
            Err(AutoNlpError::UnresolvedIdentifier(identifier)) => {
                assert_eq!(identifier, "Some-Unrelated-Model")
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn resource_files_follow_the_resolution_source() -> Result<(), AutoNlpError> {
        let directory = PathBuf::from("some/checkpoint");
        let resource = pretrained_file(
            &ResolutionSource::LocalDirectory(directory.clone()),
            "some/checkpoint",
            "vocab.txt",
        )?;
        assert_eq!(resource.get_local_path()?, directory.join("vocab.txt"));

        let result = pretrained_file(&ResolutionSource::BuiltIn, "electra-small", "vocab.txt");
        assert!(matches!(result, Err(AutoNlpError::Unsupported(_))));
        Ok(())
    }

    #[cfg(feature = "remote")]
    #[test]
    fn builtin_files_do_not_use_the_community_layout() -> Result<(), AutoNlpError> {
        let resource = pretrained_file(&ResolutionSource::BuiltIn, "bert-base-uncased", "vocab.txt")?;
        let description = format!("{:?}", resource);
        assert!(description.contains("paddle-hapi/models/bert/bert-base-uncased-vocab.txt"));
        assert!(!description.contains("/community/"));

        let resource = pretrained_file(
            &ResolutionSource::Community(PathBuf::from("cached")),
            "someone/model",
            "vocab.txt",
        )?;
        assert!(format!("{:?}", resource).contains("/community/someone/model/vocab.txt"));
        Ok(())
    }

    #[test]
    fn builtin_name_requires_family_in_head_table() {
        assert!(ModelHead::Base.builtin("bert-base-uncased").is_some());
        assert!(ModelHead::MultipleChoice.builtin("bert-base-uncased").is_none());
        assert_eq!(
            TokenizerMapping.builtin("ernie-gen-base-en"),
            None,
            "ernie-gen has no registered tokenizer"
        );
    }
}
