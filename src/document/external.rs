//! Reading a [`File`] from its JSON representation.
//!
//! The payload is decoded three times: once for the root fields (`id`,
//! `cashLetters`, `bundle`), once for the `fileHeader` object and once for the
//! `fileControl` object. The header and control objects are laid over default
//! records, so fields missing from the payload keep their defaults and fields
//! present in it win. A `null` field in an overlay counts as missing.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::errors::{DecodeStage, IclError, IclResult};
use crate::records::FileControl;

use super::bundle::Bundle;
use super::cash_letter::CashLetter;
use super::file::File;

/// Root level fields of the payload. `None` means the key was absent or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExternalRoot {
    pub id: Option<String>,
    #[serde(rename = "cashLetters")]
    pub cash_letters: Option<Vec<CashLetter>>,
    #[serde(rename = "bundle")]
    pub bundles: Option<Vec<Bundle>>,
}

#[derive(Debug, Deserialize)]
struct HeaderOverlay {
    #[serde(rename = "fileHeader")]
    header: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ControlOverlay {
    #[serde(rename = "fileControl")]
    control: Option<Value>,
}

/// Failure while importing a file. When decoding succeeded, `file` holds the
/// file as far as it was built and must not be trusted without checking `error`.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ImportError {
    pub error: IclError,
    pub file: Option<Box<File>>,
}

impl ImportError {
    fn decode(error: IclError) -> Self {
        Self { error, file: None }
    }

    fn built(error: IclError, file: File) -> Self {
        Self {
            error,
            file: Some(Box::new(file)),
        }
    }

    pub fn into_parts(self) -> (IclError, Option<File>) {
        (self.error, self.file.map(|file| *file))
    }
}

/// Combines the three decode passes into a file.
///
/// `header_overlay` is laid over a template [`FileHeader`] and
/// `control_overlay` over a fresh [`FileControl`]; a `null` or absent overlay
/// leaves the template untouched.
pub fn merge_external(
    root: ExternalRoot,
    header_overlay: Option<Value>,
    control_overlay: Option<Value>,
) -> IclResult<File> {
    let mut file = File::new();
    file.id = root.id.unwrap_or_default();
    file.cash_letters = root.cash_letters.unwrap_or_default();
    file.bundles = root.bundles.unwrap_or_default();

    file.header = overlay(&file.header, header_overlay).map_err(|source| IclError::Decode {
        stage: DecodeStage::Header,
        source,
    })?;
    file.control =
        overlay(&FileControl::new(), control_overlay).map_err(|source| IclError::Decode {
            stage: DecodeStage::Control,
            source,
        })?;
    Ok(file)
}

/// Decodes and tags a file without building or validating it.
pub fn decode_external(bytes: &[u8]) -> IclResult<File> {
    if bytes.is_empty() {
        return Err(IclError::NoData);
    }
    let root: ExternalRoot = decode(bytes, DecodeStage::Root)?;
    let header: HeaderOverlay = decode(bytes, DecodeStage::Header)?;
    let control: ControlOverlay = decode(bytes, DecodeStage::Control)?;

    let mut file = merge_external(root, header.header, control.control)?;
    file.tag_record_types();
    debug!(
        file_id = %file.id,
        cash_letters = file.cash_letters.len(),
        legacy_bundles = file.bundles.len(),
        "decoded file payload"
    );
    Ok(file)
}

fn decode<T: DeserializeOwned>(bytes: &[u8], stage: DecodeStage) -> IclResult<T> {
    serde_json::from_slice(bytes).map_err(|source| IclError::Decode { stage, source })
}

fn overlay<T>(seed: &T, patch: Option<Value>) -> serde_json::Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = serde_json::to_value(seed)?;
    match patch {
        None | Some(Value::Null) => {}
        Some(Value::Object(fields)) => {
            if let Some(target) = merged.as_object_mut() {
                target.extend(fields.into_iter().filter(|(_, value)| !value.is_null()));
            }
        }
        Some(other) => merged = other,
    }
    serde_json::from_value(merged)
}

impl File {
    /// Decodes, builds and validates a file from JSON.
    ///
    /// On a create or validate failure the partially built file is returned
    /// inside the [`ImportError`].
    pub fn from_json(bytes: &[u8]) -> Result<File, ImportError> {
        Self::from_json_with(bytes, &Config::default())
    }

    pub fn from_json_with(bytes: &[u8], config: &Config) -> Result<File, ImportError> {
        let mut file = decode_external(bytes).map_err(ImportError::decode)?;
        if let Err(error) = file.create() {
            return Err(ImportError::built(error, file));
        }
        if let Err(error) = file.validate_with(config.id_uniqueness) {
            return Err(ImportError::built(error, file));
        }
        Ok(file)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
