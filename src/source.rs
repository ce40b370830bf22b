//! Parameter sources backed by YAML data.
//!
//! A YAML source is a sequence of sequences, one inner sequence per tuple:
//!
//! ```yaml
//! - [0, 0]
//! - [1, 1]
//! - [2, 1]
//! ```
//!
//! Use these with [`NeedsSource::try_with`](crate::parameterizer::NeedsSource::try_with)
//! so a missing or malformed file aborts discovery instead of silently
//! producing zero cases.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::diagnostics::SourceError;

/// Parses tuples from YAML text.
pub fn yaml_str<P>(text: &str) -> Result<Vec<P>, SourceError>
where
    P: DeserializeOwned,
{
    Ok(serde_yaml::from_str(text)?)
}

/// Reads and parses tuples from a YAML file.
pub fn yaml_file<P>(path: impl AsRef<Path>) -> Result<Vec<P>, SourceError>
where
    P: DeserializeOwned,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.display().to_string(),
        source,
    })?;
    yaml_str(&text)
}
