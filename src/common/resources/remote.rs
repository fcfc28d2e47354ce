use super::*;
use crate::common::error::AutoNlpError;
use cached_path::{Cache, Options, ProgressBar};
use dirs::cache_dir;
use lazy_static::lazy_static;
use std::path::PathBuf;

/// # Remote resource that will be downloaded and cached locally on demand
#[derive(PartialEq, Clone, Debug)]
pub struct RemoteResource {
    /// Remote path/url for the resource
    pub url: String,
    /// Local subdirectory of the cache root where this resource is saved
    pub cache_subdir: String,
}

impl RemoteResource {
    /// Creates a new RemoteResource from an URL and a custom local path. Note that this does not
    /// download the resource (only declares the remote and local locations)
    ///
    /// # Arguments
    ///
    /// * `url` - `&str` Location of the remote resource
    /// * `cache_subdir` - `&str` Local subdirectory of the cache root to save the resource to
    ///
    /// # Returns
    ///
    /// * `RemoteResource` RemoteResource object
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_autonlp::resources::RemoteResource;
    /// let config_resource = RemoteResource::new("http://config_json_location", "configs");
    /// ```
    pub fn new(url: &str, cache_subdir: &str) -> RemoteResource {
        RemoteResource {
            url: url.to_string(),
            cache_subdir: cache_subdir.to_string(),
        }
    }

    /// Creates a new RemoteResource from a `(cache subdirectory, url)` pair, as found in the
    /// built-in resource tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_autonlp::auto::BertVocabResources;
    /// use rust_autonlp::resources::RemoteResource;
    /// let vocab_resource = RemoteResource::from_pretrained(BertVocabResources::BERT_BASE_UNCASED);
    /// ```
    pub fn from_pretrained(name_url_tuple: (&str, &str)) -> RemoteResource {
        RemoteResource::new(name_url_tuple.1, name_url_tuple.0)
    }
}

impl ResourceProvider for RemoteResource {
    /// Gets the local path for a remote resource.
    ///
    /// The remote resource is downloaded and cached. Then the path
    /// to the local cache is returned. An existing cache entry is reused.
    fn get_local_path(&self) -> Result<PathBuf, AutoNlpError> {
        let cache = CACHE
            .as_ref()
            .map_err(|message| AutoNlpError::FileDownloadError(message.clone()))?;
        let cached_path =
            cache.cached_path_with_options(&self.url, &Options::default().subdir(&self.cache_subdir))?;
        Ok(cached_path)
    }
}

lazy_static! {
/// # Global cache directory
/// If the environment variable `AUTONLP_CACHE` is set, will save the cache files at that
/// location. Otherwise defaults to `$XDG_CACHE_HOME/.autonlp`, or corresponding user cache for
/// the current system.
    pub static ref CACHE: Result<Cache, String> = Cache::builder()
        .dir(_get_cache_directory())
        .progress_bar(Some(ProgressBar::Light))
        .build()
        .map_err(|error| error.to_string());
}

fn _get_cache_directory() -> PathBuf {
    match std::env::var("AUTONLP_CACHE") {
        Ok(value) => PathBuf::from(value),
        Err(_) => {
            let mut home = cache_dir().unwrap_or_else(std::env::temp_dir);
            home.push(".autonlp");
            home
        }
    }
}
