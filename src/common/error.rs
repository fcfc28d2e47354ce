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

use rust_tokenizers::error::TokenizerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutoNlpError {
    #[error(
        "Can't load resources for '{0}'.\n\
         Please make sure that '{0}' is:\n\
         - a correct model-identifier of built-in pretrained models,\n\
         - or a correct model-identifier of community-contributed pretrained models,\n\
         - or the correct path to a directory containing relevant configuration files."
    )]
    UnresolvedIdentifier(String),

    #[error("Endpoint not available error: {0}")]
    FileDownloadError(String),

    #[error("IO error: {0}")]
    IOError(String),

    #[error("Tokenizer error: {0}")]
    TokenizerError(String),

    #[error("Invalid configuration error: {0}")]
    InvalidConfigurationError(String),

    #[error("Invalid input error: {0}")]
    InvalidInput(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

#[cfg(feature = "remote")]
impl From<cached_path::Error> for AutoNlpError {
    fn from(error: cached_path::Error) -> Self {
        AutoNlpError::FileDownloadError(error.to_string())
    }
}

impl From<std::io::Error> for AutoNlpError {
    fn from(error: std::io::Error) -> Self {
        AutoNlpError::IOError(error.to_string())
    }
}

impl From<serde_json::Error> for AutoNlpError {
    fn from(error: serde_json::Error) -> Self {
        AutoNlpError::InvalidConfigurationError(error.to_string())
    }
}

impl From<TokenizerError> for AutoNlpError {
    fn from(error: TokenizerError) -> Self {
        AutoNlpError::TokenizerError(error.to_string())
    }
}
