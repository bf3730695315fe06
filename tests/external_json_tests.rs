mod common;

use common::{grid_file, VALID_HEADER_JSON};
use image_cash_letter::config::Config;
use image_cash_letter::document::{decode_external, File, IdUniqueness};
use image_cash_letter::records::{FileControl, FileHeader, RecordType};
use image_cash_letter::{DecodeStage, IclError};

fn payload(body: &str) -> Vec<u8> {
    format!(r#"{{"id":"f1","fileHeader":{VALID_HEADER_JSON},{body}}}"#).into_bytes()
}

#[test]
fn single_check_file_builds_from_json() {
    let bytes = payload(
        r#""cashLetters":[{"cashLetterHeader":{"cashLetterID":"CL1","collectionTypeIndicator":"01"},
            "bundles":[{"checkDetails":[{"itemAmount":1000}]}]}]"#,
    );
    let file = File::from_json(&bytes).expect("file from json");

    assert_eq!(file.id, "f1");
    assert_eq!(file.control.cash_letter_count, 1);
    assert_eq!(file.control.file_total_amount, 1000);
    assert_eq!(file.control.total_item_count, 1);
    assert_eq!(file.control.total_record_count, 7);
    assert_eq!(
        file.cash_letters[0].bundles[0].checks[0].record_type,
        Some(RecordType::CheckDetail)
    );
}

#[test]
fn absent_header_and_control_decode_to_defaults() {
    let bytes = br#"{"cashLetters":[{"cashLetterHeader":{"cashLetterID":"CL1"}}]}"#;
    let file = decode_external(bytes).unwrap();
    assert_eq!(file.header, FileHeader::new());
    assert_eq!(file.control, FileControl::new());
    assert_eq!(file.cash_letters.len(), 1);
    assert!(file.id.is_empty());
}

#[test]
fn explicit_control_is_recomputed_by_create() {
    let bytes = payload(
        r#""cashLetters":[{"cashLetterHeader":{"cashLetterID":"CL1"},
            "bundles":[{"checkDetails":[{"itemAmount":5},{"itemAmount":6}]}]}],
          "fileControl":{"totalRecordCount":999,"fileTotalAmount":1}"#,
    );

    let decoded = decode_external(&bytes).unwrap();
    assert_eq!(decoded.control.total_record_count, 999);

    let file = File::from_json(&bytes).unwrap();
    assert_eq!(file.control.total_record_count, 8);
    assert_eq!(file.control.file_total_amount, 11);
}

#[test]
fn missing_header_returns_partial_file_with_error() {
    let bytes = br#"{"id":"f2","cashLetters":[{"cashLetterHeader":{"cashLetterID":"CL1"}}]}"#;
    let (error, file) = File::from_json(bytes).unwrap_err().into_parts();

    assert!(matches!(
        error,
        IclError::Record {
            record_type: RecordType::FileHeader,
            ..
        }
    ));
    let file = file.expect("partial file");
    assert_eq!(file.id, "f2");
    assert_eq!(file.control, FileControl::new());
}

#[test]
fn validate_failure_keeps_built_control() {
    let bytes = payload(
        r#""cashLetters":[{"cashLetterHeader":{"cashLetterID":"A"}},
                          {"cashLetterHeader":{"cashLetterID":"A"}}]"#,
    );
    let err = File::from_json(&bytes).unwrap_err();
    assert_eq!(err.to_string(), "CashLetterID A is not unique");
    let file = err.file.expect("partial file");
    assert_eq!(file.control.cash_letter_count, 2);
}

#[test]
fn configured_global_uniqueness_applies_on_import() {
    let bytes = payload(
        r#""cashLetters":[{"cashLetterHeader":{"cashLetterID":"A"}},
                          {"cashLetterHeader":{"cashLetterID":"B"}},
                          {"cashLetterHeader":{"cashLetterID":"A"}}]"#,
    );
    assert!(File::from_json(&bytes).is_ok());

    let config = Config {
        id_uniqueness: IdUniqueness::Global,
    };
    assert!(File::from_json_with(&bytes, &config).is_err());
}

#[test]
fn decode_failures_carry_no_file() {
    let err = File::from_json(b"").unwrap_err();
    assert!(matches!(err.error, IclError::NoData));
    assert!(err.file.is_none());

    let err = File::from_json(br#"{"cashLetters":{"oops":true}}"#).unwrap_err();
    assert!(matches!(
        err.error,
        IclError::Decode {
            stage: DecodeStage::Root,
            ..
        }
    ));
    assert!(err.to_string().starts_with("problem reading file: "));
}

#[test]
fn written_json_reads_back_to_same_totals() {
    let mut file = grid_file(2, 2, 2, 250);
    file.id = "roundtrip".into();
    file.create().unwrap();

    let json = file.to_json().unwrap();
    let restored = File::from_json(json.as_bytes()).unwrap();

    assert_eq!(restored.control, file.control);
    assert_eq!(restored.cash_letters, file.cash_letters);
}

#[test]
fn unknown_fields_are_ignored() {
    let bytes = payload(
        r#""routingNumberSummary":[{"x":1}],
           "cashLetters":[{"cashLetterHeader":{"cashLetterID":"CL1"},"extra":"ignored"}]"#,
    );
    assert!(File::from_json(&bytes).is_ok());
}

#[test]
fn null_collections_and_fields_decode_as_empty() {
    let bytes = br#"{
        "id": "f1",
        "fileHeader": {
            "standardLevel": "35",
            "immediateDestination": "231380104",
            "immediateOrigin": "121042882",
            "immediateOriginName": null,
            "fileCreationDate": "2024-06-14T00:00:00Z"
        },
        "cashLetters": [{
            "cashLetterHeader": {"recordType": "", "cashLetterID": "CL1"},
            "bundles": [{
                "bundleHeader": null,
                "checkDetails": [{
                    "itemAmount": 250,
                    "checkDetailAddendumA": null,
                    "imageViewDetail": null
                }],
                "returnDetails": null
            }],
            "creditItems": null
        }],
        "bundle": null,
        "fileControl": null
    }"#;
    let file = File::from_json(bytes).expect("file from json");

    assert_eq!(file.header.test_file_indicator, "T");
    assert_eq!(file.control.file_total_amount, 250);
    assert_eq!(file.control.total_record_count, 7);
    let cash_letter = &file.cash_letters[0];
    assert!(cash_letter.credit_items.is_empty());
    assert_eq!(
        cash_letter.header.record_type,
        Some(RecordType::CashLetterHeader)
    );
    assert!(cash_letter.bundles[0].checks[0].addendum_a.is_empty());
}
