use vaccine_core::db::open_db_in_memory;
use vaccine_core::{
    RepoError, SqliteVaccineIoOperations, SqliteVaccineTypeIoOperations, Vaccine,
    VaccineIoOperations, VaccineType, VaccineTypeBrowserManager, VaccineTypeIoOperations,
};

#[test]
fn create_and_find_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteVaccineTypeIoOperations::try_new(&conn).unwrap();

    let created = repo
        .new_vaccine_type(&VaccineType::new("A", "TypeDescriptionXXXX"))
        .unwrap();
    assert_eq!(created.code, "A");

    let loaded = repo.find_vaccine_type("A").unwrap().unwrap();
    assert_eq!(loaded.description, "TypeDescriptionXXXX");
    assert!(repo.is_code_present("A").unwrap());
}

#[test]
fn oversized_fields_are_integrity_violations() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteVaccineTypeIoOperations::try_new(&conn).unwrap();

    let long_code = repo
        .new_vaccine_type(&VaccineType::new("AB", "Type"))
        .unwrap_err();
    assert!(long_code.is_data_integrity(), "unexpected error: {long_code}");

    let long_description = repo
        .new_vaccine_type(&VaccineType::new("A", "x".repeat(51)))
        .unwrap_err();
    assert!(
        long_description.is_data_integrity(),
        "unexpected error: {long_description}"
    );

    assert!(repo.get_vaccine_types().unwrap().is_empty());
}

#[test]
fn duplicate_insert_and_missing_update_are_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteVaccineTypeIoOperations::try_new(&conn).unwrap();
    repo.new_vaccine_type(&VaccineType::new("A", "Original"))
        .unwrap();

    let err = repo
        .new_vaccine_type(&VaccineType::new("A", "Replacement"))
        .unwrap_err();
    assert!(matches!(err, RepoError::DuplicateKey(ref code) if code == "A"));
    assert_eq!(
        repo.find_vaccine_type("A").unwrap().unwrap().description,
        "Original"
    );

    let err = repo
        .update_vaccine_type(&VaccineType::new("B", "Missing"))
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(ref code) if code == "B"));
    assert!(!repo.is_code_present("B").unwrap());
}

#[test]
fn update_existing_type_changes_description() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteVaccineTypeIoOperations::try_new(&conn).unwrap();
    repo.new_vaccine_type(&VaccineType::new("A", "Original"))
        .unwrap();

    let updated = repo
        .update_vaccine_type(&VaccineType::new("A", "Renamed"))
        .unwrap();
    assert_eq!(updated.description, "Renamed");
}

#[test]
fn delete_referenced_type_is_integrity_violation() {
    let conn = open_db_in_memory().unwrap();
    let types = SqliteVaccineTypeIoOperations::try_new(&conn).unwrap();
    let vaccines = SqliteVaccineIoOperations::try_new(&conn).unwrap();

    let vaccine_type = types
        .new_vaccine_type(&VaccineType::new("A", "Childhood"))
        .unwrap();
    let vaccine = Vaccine::of_type("1", "Polio", &vaccine_type);
    vaccines.new_vaccine(&vaccine).unwrap();

    let err = types.delete_vaccine_type(&vaccine_type).unwrap_err();
    assert!(err.is_data_integrity(), "unexpected error: {err}");
    assert!(types.is_code_present("A").unwrap());

    vaccines.delete_vaccine(&vaccine).unwrap();
    assert!(types.delete_vaccine_type(&vaccine_type).unwrap());
    assert!(!types.is_code_present("A").unwrap());
}

#[test]
fn delete_missing_type_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteVaccineTypeIoOperations::try_new(&conn).unwrap();

    assert!(repo
        .delete_vaccine_type(&VaccineType::new("Q", "Nothing"))
        .unwrap());
}

#[test]
fn manager_lists_types_ordered_by_description() {
    let conn = open_db_in_memory().unwrap();
    let manager =
        VaccineTypeBrowserManager::new(SqliteVaccineTypeIoOperations::try_new(&conn).unwrap());

    for (code, description) in [("C", "Travel"), ("A", "Childhood"), ("B", "Adult")] {
        manager
            .new_vaccine_type(&VaccineType::new(code, description))
            .unwrap();
    }

    let codes: Vec<_> = manager
        .get_vaccine_types()
        .unwrap()
        .into_iter()
        .map(|item| item.code)
        .collect();
    assert_eq!(codes, vec!["B", "A", "C"]);
    assert!(manager.find_vaccine_type("Z").unwrap().is_none());
}
