//! # Resource definitions for sidecar configurations, vocabularies and model weights
//!
//! Resolvers and tokenizers access their files through Resources. Two types of resources are
//! pre-defined:
//! - LocalResource: points to a local file
//! - RemoteResource: points to a remote file via a URL, downloaded to the cache on first access
//!
//! For both types of resources, the local location of the file can be retrieved using
//! `get_local_path`, allowing to reference the resource file location regardless if it is a remote
//! or local resource.

mod local;

use crate::common::error::AutoNlpError;
pub use local::LocalResource;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

/// Default location of community-contributed pretrained resources.
pub const COMMUNITY_MODEL_PREFIX: &str = "https://bj.bcebos.com/paddlenlp/models/community/";

/// # Resource Trait that can provide the location of the model, configuration or vocabulary resources
pub trait ResourceProvider: Debug + Send + Sync {
    /// Provides the local path for a resource.
    ///
    /// # Returns
    ///
    /// * `PathBuf` pointing to the resource file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_autonlp::resources::{LocalResource, ResourceProvider};
    /// use std::path::PathBuf;
    /// let config_resource = LocalResource {
    ///     local_path: PathBuf::from("path/to/tokenizer_config.json"),
    /// };
    /// let config_path = config_resource.get_local_path();
    /// ```
    fn get_local_path(&self) -> Result<PathBuf, AutoNlpError>;
}

/// Returns the prefix under which community resources are published. The `AUTONLP_COMMUNITY_URL`
/// environment variable takes precedence over `COMMUNITY_MODEL_PREFIX`.
pub fn community_model_prefix() -> String {
    let mut prefix = std::env::var("AUTONLP_COMMUNITY_URL")
        .unwrap_or_else(|_| COMMUNITY_MODEL_PREFIX.to_string());
    if !prefix.ends_with('/') {
        prefix.push('/');
    }
    prefix
}

/// Builds the URL of `file_name` for the community resource `identifier`.
///
/// # Example
///
/// ```no_run
/// use rust_autonlp::resources::community_url;
/// let url = community_url("yingyibiao/bert-base-uncased-sst-2-finetuned", "tokenizer_config.json");
/// ```
pub fn community_url(identifier: &str, file_name: &str) -> String {
    format!("{}{}/{}", community_model_prefix(), identifier, file_name)
}

/// Returns the resource holding `file_name` for a pretrained identifier: a local file when
/// `identifier` is a directory, the community remote file otherwise.
pub fn pretrained_resource(
    identifier: &str,
    file_name: &str,
) -> Result<Box<dyn ResourceProvider>, AutoNlpError> {
    let directory = Path::new(identifier);
    if directory.is_dir() {
        return Ok(Box::new(LocalResource::from(directory.join(file_name))));
    }
    community_resource(identifier, file_name)
}

/// Community copy of `file_name` for `identifier`, cached in a subdirectory named after it.
pub fn community_resource(
    identifier: &str,
    file_name: &str,
) -> Result<Box<dyn ResourceProvider>, AutoNlpError> {
    url_resource(&community_url(identifier, file_name), identifier)
}

/// Resource downloaded from `url` into `cache_subdir` of the cache root.
#[cfg(feature = "remote")]
pub fn url_resource(
    url: &str,
    cache_subdir: &str,
) -> Result<Box<dyn ResourceProvider>, AutoNlpError> {
    Ok(Box::new(RemoteResource::new(url, cache_subdir)))
}

#[cfg(not(feature = "remote"))]
pub fn url_resource(
    url: &str,
    _cache_subdir: &str,
) -> Result<Box<dyn ResourceProvider>, AutoNlpError> {
    Err(AutoNlpError::FileDownloadError(format!(
        "cannot fetch `{}`: the `remote` feature is disabled",
        url
    )))
}

#[cfg(feature = "remote")]
mod remote;
#[cfg(feature = "remote")]
pub use remote::{RemoteResource, CACHE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn community_url_joins_prefix_identifier_and_file() {
        let url = community_url("junnyu/ckiplab-bert-base-chinese-ner", "model_config.json");
        assert!(url.ends_with("/junnyu/ckiplab-bert-base-chinese-ner/model_config.json"));
        assert!(url.starts_with("http"));
    }

    #[test]
    fn directory_identifier_gives_local_resource() -> Result<(), AutoNlpError> {
        let dir = std::env::temp_dir();
        let resource = pretrained_resource(dir.to_str().unwrap(), "vocab.txt")?;
        assert_eq!(resource.get_local_path()?, dir.join("vocab.txt"));
        Ok(())
    }
}
