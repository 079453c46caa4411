use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::StoreError;

/// A local key-value store holding whole JSON blobs.
///
/// Writes replace the previous blob under the key; there is no merge and no
/// versioning. Implementations decide where the blobs live (memory, files,
/// a browser's local storage).
pub trait BlobStore {
    /// Read the blob stored under `key`, or `None` if the key is unset.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the blob stored under `key`.
    fn write(&mut self, key: &str, blob: &str) -> Result<(), StoreError>;

    /// Read and decode a JSON blob.
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        Self: Sized,
    {
        let Some(blob) = self.read(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&blob)
            .map(Some)
            .map_err(|source| StoreError::Json {
                key: key.to_string(),
                source,
            })
    }

    /// Encode a value as JSON and store it under `key`.
    fn write_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        let blob = serde_json::to_string(value).map_err(|source| StoreError::Json {
            key: key.to_string(),
            source,
        })?;
        self.write(key, &blob)
    }
}
