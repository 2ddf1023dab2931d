//! Startup data for the in-memory stores.
//!
//! The built-in set ships with the binary (`seed/default.json`). A different
//! file with the same `{users, credentials}` shape can be supplied at
//! startup; a missing or malformed file is fatal.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;

use crate::domain::{Credential, User};

const BUILTIN: &str = include_str!("../../seed/default.json");

/// Errors raised while loading seed data.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The seed document is not valid JSON of the expected shape.
    #[error("invalid seed data in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Users and credentials preloaded into the stores.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub credentials: Vec<Credential>,
}

impl SeedData {
    /// The data compiled into the binary.
    ///
    /// # Examples
    /// ```
    /// use autofill_backend::outbound::seed::SeedData;
    ///
    /// let seed = SeedData::builtin().expect("built-in seed parses");
    /// assert_eq!(seed.users.len(), 2);
    /// assert_eq!(seed.credentials[0].id().as_ref(), "fdcd");
    /// ```
    pub fn builtin() -> Result<Self, SeedError> {
        Self::parse(BUILTIN, "built-in seed")
    }

    /// Read a seed document from `path`.
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let contents = read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, &path.display().to_string())
    }

    /// Load from `path` when given, otherwise fall back to [`Self::builtin`].
    pub fn resolve(path: Option<&Path>) -> Result<Self, SeedError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    fn parse(contents: &str, origin: &str) -> Result<Self, SeedError> {
        serde_json::from_str(contents).map_err(|source| SeedError::Parse {
            origin: origin.to_owned(),
            source,
        })
    }
}

fn read_to_string(path: &Path) -> io::Result<String> {
    let (parent, file_name) = parent_and_file_name(path)?;
    let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
    directory.read_to_string(Path::new(&file_name))
}

fn parent_and_file_name(path: &Path) -> io::Result<(&Path, OsString)> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "path must include a file name")
    })?;
    Ok((parent, file_name.to_os_string()))
}
