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
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Keyword arguments forwarded to a class constructor.
pub type InitKwargs = Map<String, Value>;

/// # Utility to deserialize JSON config files
pub trait Config
where
    for<'de> Self: Deserialize<'de>,
{
    /// Loads a `Config` object from a JSON file. The format is expected to be aligned with the
    /// sidecar files shipped next to pretrained resources.
    ///
    /// # Arguments
    ///
    /// * `path` - `Path` to the configuration JSON file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_autonlp::{Config, SidecarConfig};
    /// use std::path::Path;
    ///
    /// let config_path = Path::new("path/to/tokenizer_config.json");
    /// let config = SidecarConfig::from_file(config_path)?;
    /// # Ok::<(), rust_autonlp::AutoNlpError>(())
    /// ```
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AutoNlpError> {
        let f = File::open(path)?;
        let br = BufReader::new(f);
        let config: Self = serde_json::from_reader(br)?;
        Ok(config)
    }
}

/// # Sidecar configuration file
/// Shared shape of `tokenizer_config.json` and `model_config.json`: an optional `init_class`
/// naming the concrete class, every other field being a constructor keyword argument.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SidecarConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init_class: Option<String>,
    #[serde(flatten)]
    pub init_kwargs: InitKwargs,
}

impl Config for SidecarConfig {}

/// Overlays `overrides` on top of `base`. Keys present in both take the value from `overrides`.
pub fn merge_kwargs(base: &InitKwargs, overrides: &InitKwargs) -> InitKwargs {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

pub(crate) fn get_bool(kwargs: &InitKwargs, key: &str) -> Result<Option<bool>, AutoNlpError> {
    match kwargs.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(other) => Err(AutoNlpError::InvalidConfigurationError(format!(
            "expected a boolean for `{}`, got {}",
            key, other
        ))),
    }
}
