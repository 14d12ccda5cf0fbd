use crate::languages::LanguageSelection;
use crate::metadata::PackageRecord;

/// Keeps packages whose dominant language is one of the selected languages.
pub struct LanguageFilter<'a> {
    selection: &'a LanguageSelection,
}

impl<'a> LanguageFilter<'a> {
    pub fn new(selection: &'a LanguageSelection) -> Self {
        Self { selection }
    }

    pub fn accepts(&self, dominant_language: &str) -> bool {
        self.selection.accepts_code(dominant_language)
    }

    pub fn retain(&self, records: Vec<PackageRecord>) -> Vec<PackageRecord> {
        records
            .into_iter()
            .filter(|r| self.accepts(&r.dominant_language))
            .collect()
    }
}
