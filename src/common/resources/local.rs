use crate::common::error::AutoNlpError;
use crate::resources::ResourceProvider;
use std::path::PathBuf;

/// # Local resource
#[derive(PartialEq, Clone, Debug)]
pub struct LocalResource {
    /// Local path for the resource
    pub local_path: PathBuf,
}

impl ResourceProvider for LocalResource {
    /// Gets the path for a local resource.
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
    /// let vocab_resource = LocalResource {
    ///     local_path: PathBuf::from("path/to/vocab.txt"),
    /// };
    /// let vocab_path = vocab_resource.get_local_path();
    /// ```
    fn get_local_path(&self) -> Result<PathBuf, AutoNlpError> {
        Ok(self.local_path.clone())
    }
}

impl From<PathBuf> for LocalResource {
    fn from(local_path: PathBuf) -> Self {
        Self { local_path }
    }
}
