//! Language map: user-facing language identifiers, the classification code the
//! sources API reports for them, and the file suffixes scanned for each.

mod table;

pub use table::BUILTIN_LANGUAGES;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::error::{IoError, LanguageError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSpec {
    pub id: String,
    pub api_code: String,
    pub extensions: BTreeSet<String>,
}

impl LanguageSpec {
    pub fn new<I, S>(id: &str, api_code: &str, extensions: I) -> Result<Self, LanguageError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let id = id.to_lowercase();
        let extensions = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.as_ref().to_lowercase();
                if ext.len() > 1 && ext.starts_with('.') {
                    Ok(ext)
                } else {
                    Err(LanguageError::InvalidExtension {
                        id: id.clone(),
                        extension: ext,
                    })
                }
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            id,
            api_code: api_code.to_string(),
            extensions,
        })
    }
}

/// Entry of a user-supplied YAML language map.
#[derive(Debug, Deserialize)]
struct MapEntry {
    api_code: String,
    extensions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct MapFile {
    languages: BTreeMap<String, MapEntry>,
}

/// Immutable lookup from language identifier to [`LanguageSpec`].
#[derive(Debug, Clone)]
pub struct LanguageMap {
    specs: BTreeMap<String, LanguageSpec>,
}

impl LanguageMap {
    pub fn builtin() -> Self {
        let specs = BUILTIN_LANGUAGES
            .iter()
            .map(|(id, code, exts)| {
                let spec = LanguageSpec {
                    id: id.to_string(),
                    api_code: code.to_string(),
                    extensions: exts.iter().map(|e| e.to_string()).collect(),
                };
                (spec.id.clone(), spec)
            })
            .collect();
        Self { specs }
    }

    /// Builds the map used for a run: the built-in table, extended or
    /// overridden by the entries of `overrides` when given.
    pub fn load(overrides: Option<&Path>) -> Result<Self, crate::error::Error> {
        let mut map = Self::builtin();
        if let Some(path) = overrides {
            if !path.exists() {
                return Err(IoError::file_not_found(path).into());
            }
            let content = fs::read_to_string(path).map_err(|source| LanguageError::MapRead {
                path: path.to_path_buf(),
                source,
            })?;
            map.merge_yaml(&content, path)?;
        }
        Ok(map)
    }

    fn merge_yaml(&mut self, content: &str, path: &Path) -> Result<(), LanguageError> {
        let file: MapFile =
            serde_yaml::from_str(content).map_err(|source| LanguageError::MapParse {
                path: path.to_path_buf(),
                source,
            })?;

        for (id, entry) in file.languages {
            let spec = LanguageSpec::new(&id, &entry.api_code, &entry.extensions)?;
            tracing::debug!(language = %spec.id, code = %spec.api_code, "language map override");
            self.insert(spec);
        }
        Ok(())
    }

    pub fn insert(&mut self, spec: LanguageSpec) {
        self.specs.insert(spec.id.clone(), spec);
    }

    pub fn get(&self, id: &str) -> Option<&LanguageSpec> {
        self.specs.get(&id.to_lowercase())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageSpec> {
        self.specs.values()
    }

    /// Resolves every identifier, failing on the first one that is not in the map.
    pub fn select<S: AsRef<str>>(&self, ids: &[S]) -> Result<LanguageSelection, LanguageError> {
        if ids.is_empty() {
            return Err(LanguageError::Empty);
        }

        let specs = ids
            .iter()
            .map(|id| {
                self.get(id.as_ref())
                    .cloned()
                    .ok_or_else(|| LanguageError::unknown(id.as_ref(), self.ids()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LanguageSelection { specs })
    }
}

impl Default for LanguageMap {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The languages accepted for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSelection {
    specs: Vec<LanguageSpec>,
}

impl LanguageSelection {
    pub fn specs(&self) -> &[LanguageSpec] {
        &self.specs
    }

    pub fn accepts_code(&self, api_code: &str) -> bool {
        self.specs.iter().any(|spec| spec.api_code == api_code)
    }

    /// Union of the suffixes of every selected language.
    pub fn extensions(&self) -> BTreeSet<String> {
        self.specs
            .iter()
            .flat_map(|spec| spec.extensions.iter().cloned())
            .collect()
    }
}
