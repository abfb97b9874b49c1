use vaccine_core::{Vaccine, VaccineDetail, VaccineType};

#[test]
fn of_type_copies_type_code() {
    let vaccine_type = VaccineType::new("A", "Childhood");
    let vaccine = Vaccine::of_type("1234567890", "Polio", &vaccine_type);

    assert_eq!(vaccine.code, "1234567890");
    assert_eq!(vaccine.description, "Polio");
    assert_eq!(vaccine.vaccine_type_code, "A");
}

#[test]
fn model_does_not_enforce_length_limits() {
    let vaccine = Vaccine::new("00000000001", "x".repeat(80), "AB");
    assert_eq!(vaccine.code.chars().count(), 11);
}

#[test]
fn vaccine_serialization_uses_expected_wire_fields() {
    let vaccine = Vaccine::new("1234567890", "Polio", "A");

    let json = serde_json::to_value(&vaccine).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "code": "1234567890",
            "description": "Polio",
            "vaccine_type_code": "A"
        })
    );

    let decoded: Vaccine = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, vaccine);
}

#[test]
fn detail_serializes_nested_type() {
    let vaccine_type = VaccineType::new("A", "Childhood");
    let detail = VaccineDetail {
        vaccine: Vaccine::of_type("1", "Polio", &vaccine_type),
        vaccine_type,
    };

    let json = serde_json::to_value(&detail).unwrap();
    assert_eq!(json["vaccine"]["code"], "1");
    assert_eq!(json["vaccine_type"]["description"], "Childhood");
}

#[test]
fn deserialize_rejects_missing_type_code() {
    let value = serde_json::json!({
        "code": "1",
        "description": "Polio"
    });

    let err = serde_json::from_value::<Vaccine>(value).unwrap_err();
    assert!(
        err.to_string().contains("vaccine_type_code"),
        "unexpected error: {err}"
    );
}
