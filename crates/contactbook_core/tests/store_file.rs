use contactbook_core::{Contact, ContactStore, CsvFileStore};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> (CsvFileStore, PathBuf) {
    let path = dir.path().join("contacts.csv");
    (CsvFileStore::new(&path), path)
}

fn contact(id: u32, name: &str, phone: &str, email: &str, address: &str) -> Contact {
    Contact {
        id,
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        address: address.to_string(),
    }
}

#[test]
fn missing_file_loads_as_empty_set() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_in(&dir);

    assert!(store.load().unwrap().is_empty());
    assert!(!path.exists());
}

#[test]
fn save_writes_one_plain_line_per_record() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_in(&dir);

    store
        .save(&[contact(1, "Alice", "555-1000", "a@x.com", "1 Main St")])
        .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "1,Alice,555-1000,a@x.com,1 Main St\n"
    );
}

#[test]
fn save_load_roundtrips_field_for_field() {
    let dir = TempDir::new().unwrap();
    let (store, _path) = store_in(&dir);

    let records = vec![
        contact(1, "Doe, Jane", "555-1000", "j@x.com", "1 Main St"),
        contact(2, "Bob \"The Builder\"", "555-2000", "", ""),
        contact(3, "Carol", "555-3000", "c@x.com", "1 Main St\nApt 2"),
    ];

    store.save(&records).unwrap();
    assert_eq!(store.load().unwrap(), records);
}

#[test]
fn save_overwrites_the_whole_file() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_in(&dir);

    store
        .save(&[
            contact(1, "Alice", "555-1000", "", ""),
            contact(2, "Bob", "555-2000", "", ""),
        ])
        .unwrap();
    store.save(&[contact(2, "Bob", "555-2000", "", "")]).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 2);
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 1);
}

#[test]
fn save_of_empty_set_truncates_the_file() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_in(&dir);

    store.save(&[contact(1, "Alice", "555-1000", "", "")]).unwrap();
    store.save(&[]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn corrupt_rows_are_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_in(&dir);

    fs::write(
        &path,
        "garbage line\n\
         1,Alice,555-1000,a@x.com,1 Main St\n\
         2,Bob,556\n\
         x,Carol,557,c@x.com,Elm\n\
         0,Zed,558,,\n\
         too,many,fields,in,this,row\n\
         3,Dana,559,,\n",
    )
    .unwrap();

    let loaded = store.load().unwrap();
    let ids: Vec<u32> = loaded.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(loaded[0].name, "Alice");
    assert_eq!(loaded[1].name, "Dana");
}

#[test]
fn loaded_field_text_is_kept_verbatim() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_in(&dir);

    fs::write(&path, "1, Alice ,555-1000,,\n").unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded[0].name, " Alice ");
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let dir = TempDir::new().unwrap();
    let (store, _path) = store_in(&dir);

    store.save(&[contact(1, "Alice", "555-1000", "", "")]).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("contacts.csv")]);
}
