//! Response bodies of the sources API.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PackageList {
    pub packages: Vec<PackageName>,
}

#[derive(Debug, Deserialize)]
pub struct PackageName {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct VersionList {
    pub versions: Vec<VersionEntry>,
}

#[derive(Debug, Deserialize)]
pub struct VersionEntry {
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct PackageInfo {
    pub pkg_infos: PkgInfos,
}

#[derive(Debug, Deserialize)]
pub struct PkgInfos {
    /// `[language, lines]` pairs, largest first.
    pub sloc: Vec<(String, serde_json::Value)>,
}

impl VersionList {
    pub fn latest(&self) -> Option<&str> {
        self.versions.first().map(|v| v.version.as_str())
    }
}

impl PackageInfo {
    pub fn dominant_language(&self) -> Option<&str> {
        self.pkg_infos.sloc.first().map(|(lang, _)| lang.as_str())
    }
}
