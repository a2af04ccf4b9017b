use std::io::Write;

use anyhow::Result;
use tempfile::NamedTempFile;

use mesob_bot::directory::{Directory, DirectoryStore};
use mesob_bot::language::Language;

fn store_with(contents: &str) -> Result<(NamedTempFile, DirectoryStore)> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    let store = DirectoryStore::new(file.path());
    Ok((file, store))
}

/// Test loading a well-formed directory file
#[test]
fn test_load_directory_file() -> Result<()> {
    let (_file, store) = store_with(
        r#"{
            "organizations": [
                {"id": 1, "name_or": "Waajjira", "name_am": "ጽሕፈት ቤት", "name_en": "Kebele Office",
                 "services_en": ["ID card", "Birth certificate"]},
                {"id": 2, "name_or": "Buufata fayyaa", "name_am": "ጤና ጣቢያ", "name_en": "Health Center"}
            ]
        }"#,
    )?;

    let directory = store.load();
    assert_eq!(directory.organizations.len(), 2);
    assert_eq!(directory.organizations[0].name(Language::English), "Kebele Office");
    assert_eq!(
        directory.organizations[0].services(Language::English),
        ["ID card".to_string(), "Birth certificate".to_string()]
    );
    Ok(())
}

/// Missing storage file degrades to an empty directory, no error.
#[test]
fn test_missing_file_yields_empty_directory() {
    let store = DirectoryStore::new("/nonexistent/path/data.json");
    let directory = store.load();
    assert!(directory.organizations.is_empty());
}

/// Corrupt storage degrades to an empty directory, no error.
#[test]
fn test_corrupt_file_yields_empty_directory() -> Result<()> {
    let (_file, store) = store_with("{ not json at all")?;
    assert!(store.load().organizations.is_empty());

    let (_file, store) = store_with(r#"{"organizations": [{"id": "oops"}]}"#)?;
    assert!(store.load().organizations.is_empty());
    Ok(())
}

/// A directory without the organizations key parses as empty.
#[test]
fn test_organizations_key_defaults_to_empty() -> Result<()> {
    let (_file, store) = store_with("{}")?;
    assert!(store.load().organizations.is_empty());
    Ok(())
}

/// An edit to the backing file is visible on the next load.
#[test]
fn test_load_reads_fresh_on_every_call() -> Result<()> {
    let (file, store) = store_with(r#"{"organizations": []}"#)?;
    assert!(store.load().organizations.is_empty());

    std::fs::write(
        file.path(),
        r#"{"organizations": [{"id": 9, "name_or": "W", "name_am": "A", "name_en": "New Office"}]}"#,
    )?;

    let directory = store.load();
    assert_eq!(directory.organizations.len(), 1);
    assert_eq!(directory.find(9).unwrap().name_en, "New Office");
    Ok(())
}

/// The bundled sample directory must always parse.
#[test]
fn test_bundled_data_file_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data.json");
    let directory = DirectoryStore::new(path).load();
    assert!(!directory.organizations.is_empty());

    // Ids must be unique within the file.
    let mut ids: Vec<u32> = directory.organizations.iter().map(|o| o.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), directory.organizations.len());
}

/// Search matches any of the three name fields, case-insensitively.
#[test]
fn test_search_across_languages() {
    let directory: Directory = serde_json::from_str(
        r#"{
            "organizations": [
                {"id": 1, "name_or": "Waajjira Galiiwwanii", "name_am": "የገቢዎች ጽሕፈት ቤት", "name_en": "Revenue Office"},
                {"id": 2, "name_or": "Buufata Fayyaa", "name_am": "ጤና ጣቢያ", "name_en": "Health Center"}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(directory.search("revenue")[0].id, 1);
    assert_eq!(directory.search("GALII")[0].id, 1);
    assert_eq!(directory.search("ጤና")[0].id, 2);
    assert!(directory.search("immigration").is_empty());
    assert_eq!(directory.search("").len(), 2);
}
