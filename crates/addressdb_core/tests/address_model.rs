use addressdb_core::{AddressFields, AddressRecord};
use chrono::NaiveDate;
use uuid::Uuid;

fn base_fields() -> AddressFields {
    AddressFields {
        address_line1: "1 Main St".to_string(),
        address_line2: None,
        city: "Springfield".to_string(),
        state_province: "Oregon".to_string(),
        country_region: "United States".to_string(),
        postal_code: "97477".to_string(),
    }
}

fn record_with(fields: AddressFields) -> AddressRecord {
    AddressRecord {
        id: 17,
        fields,
        row_guid: Uuid::parse_str("00000000-0000-4000-8000-000000000001").unwrap(),
        modified_date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
    }
}

#[test]
fn from_record_discards_identity_and_audit_data() {
    let record = record_with(base_fields());
    assert_eq!(AddressFields::from_record(&record), base_fields());
}

#[test]
fn would_update_is_false_for_equal_fields() {
    let record = record_with(base_fields());
    assert!(!base_fields().would_update(&record));
}

#[test]
fn would_update_detects_a_difference_in_each_field() {
    let record = record_with(base_fields());

    let variants: Vec<AddressFields> = vec![
        AddressFields {
            address_line1: "2 Main St".to_string(),
            ..base_fields()
        },
        AddressFields {
            address_line2: Some("Apt 9".to_string()),
            ..base_fields()
        },
        AddressFields {
            city: "Shelbyville".to_string(),
            ..base_fields()
        },
        AddressFields {
            state_province: "Washington".to_string(),
            ..base_fields()
        },
        AddressFields {
            country_region: "Canada".to_string(),
            ..base_fields()
        },
        AddressFields {
            postal_code: "97478".to_string(),
            ..base_fields()
        },
    ];

    for proposed in variants {
        assert!(
            proposed.would_update(&record),
            "expected a detected change for {proposed:?}"
        );
    }
}

#[test]
fn would_update_distinguishes_empty_line2_from_absent() {
    let mut with_empty = base_fields();
    with_empty.address_line2 = Some(String::new());
    let record = record_with(base_fields());

    assert!(with_empty.would_update(&record));
}

#[test]
fn record_serializes_with_flattened_fields() {
    let record = record_with(base_fields());
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["id"], 17);
    assert_eq!(json["address_line1"], "1 Main St");
    assert_eq!(json["address_line2"], serde_json::Value::Null);
    assert_eq!(json["postal_code"], "97477");
    assert_eq!(json["modified_date"], "2024-03-09");
    assert_eq!(json["row_guid"], "00000000-0000-4000-8000-000000000001");
}

#[test]
fn record_roundtrips_through_serde() {
    let record = record_with(base_fields());
    let json = serde_json::to_string(&record).unwrap();
    let back: AddressRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
