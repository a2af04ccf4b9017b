//! Read-only organization directory loaded from a JSON file.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::language::Language;

/// One organization hosted at the service center, with its localized names
/// and service lists.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Organization {
    pub id: u32,
    pub name_or: String,
    pub name_am: String,
    pub name_en: String,
    #[serde(default)]
    pub services_or: Option<Vec<String>>,
    #[serde(default)]
    pub services_am: Option<Vec<String>>,
    #[serde(default)]
    pub services_en: Option<Vec<String>>,
}

impl Organization {
    pub fn name(&self, lang: Language) -> &str {
        match lang {
            Language::Oromo => &self.name_or,
            Language::Amharic => &self.name_am,
            Language::English => &self.name_en,
        }
    }

    /// Localized service list. A missing translation falls back to the
    /// Afaan Oromoo list; if that is also missing the list is empty.
    pub fn services(&self, lang: Language) -> &[String] {
        let localized = match lang {
            Language::Oromo => &self.services_or,
            Language::Amharic => &self.services_am,
            Language::English => &self.services_en,
        };
        localized
            .as_deref()
            .or(self.services_or.as_deref())
            .unwrap_or(&[])
    }

    fn name_contains(&self, needle_lower: &str) -> bool {
        Language::ALL
            .iter()
            .any(|&lang| self.name(lang).to_lowercase().contains(needle_lower))
    }
}

/// The full directory, in the order entries appear in the storage file.
/// That order is also the menu display order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Directory {
    #[serde(default)]
    pub organizations: Vec<Organization>,
}

impl Directory {
    pub fn find(&self, id: u32) -> Option<&Organization> {
        self.organizations.iter().find(|org| org.id == id)
    }

    /// Case-insensitive substring search against the name fields in all
    /// three languages, preserving directory order among matches.
    pub fn search(&self, term: &str) -> Vec<&Organization> {
        let needle = term.to_lowercase();
        self.organizations
            .iter()
            .filter(|org| org.name_contains(&needle))
            .collect()
    }
}

/// Reads the directory file fresh on every call. There is deliberately no
/// cache: an edit to the backing file is visible on the next interaction.
#[derive(Clone, Debug)]
pub struct DirectoryStore {
    path: PathBuf,
}

impl DirectoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load and parse the directory. Any read or parse failure degrades to
    /// an empty directory so the bot keeps answering ("no organizations")
    /// instead of crashing on bad data.
    pub fn load(&self) -> Directory {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read directory file, serving empty directory");
                return Directory::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(directory) => directory,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to parse directory file, serving empty directory");
                Directory::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(id: u32, name_en: &str) -> Organization {
        Organization {
            id,
            name_or: format!("{name_en} (or)"),
            name_am: format!("{name_en} (am)"),
            name_en: name_en.to_string(),
            services_or: None,
            services_am: None,
            services_en: None,
        }
    }

    #[test]
    fn test_find_by_id() {
        let directory = Directory {
            organizations: vec![org(1, "Kebele Office"), org(7, "Health Center")],
        };

        assert_eq!(directory.find(7).unwrap().name_en, "Health Center");
        assert!(directory.find(2).is_none());
    }

    #[test]
    fn test_services_fallback_to_oromo() {
        let mut organization = org(1, "Kebele Office");
        organization.services_or = Some(vec!["Waraqaa eenyummaa".to_string()]);

        // No English list, so the Oromo list is served.
        assert_eq!(
            organization.services(Language::English),
            ["Waraqaa eenyummaa".to_string()]
        );
    }

    #[test]
    fn test_services_empty_when_all_missing() {
        let organization = org(1, "Kebele Office");
        assert!(organization.services(Language::Amharic).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_across_languages() {
        let directory = Directory {
            organizations: vec![org(1, "Kebele Office"), org(2, "Health Center")],
        };

        assert_eq!(directory.search("KEBELE").len(), 1);
        // Matches the Oromo name field of the second entry.
        assert_eq!(directory.search("center (or)").len(), 1);
        assert!(directory.search("revenue").is_empty());
    }

    #[test]
    fn test_search_preserves_directory_order() {
        let directory = Directory {
            organizations: vec![org(3, "Office A"), org(1, "Office B"), org(2, "Office C")],
        };

        let ids: Vec<u32> = directory.search("office").iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
