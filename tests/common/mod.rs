#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use image_cash_letter::document::{Bundle, CashLetter, File};
use image_cash_letter::records::{BundleHeader, CheckDetail, FileHeader};

/// A file header that passes field validation.
pub fn valid_header() -> FileHeader {
    let mut header = FileHeader::new();
    header.immediate_destination = "231380104".into();
    header.immediate_origin = "121042882".into();
    header.immediate_destination_name = "Citadel".into();
    header.immediate_origin_name = "Wells Fargo".into();
    header.file_creation_date = Utc.with_ymd_and_hms(2024, 6, 14, 0, 0, 0).single();
    header
}

pub fn bundle_with_checks(amounts: &[i64]) -> Bundle {
    let mut bundle = Bundle::new(BundleHeader::new());
    for amount in amounts {
        bundle.add_check_detail(CheckDetail::new(*amount));
    }
    bundle
}

/// A file of `cash_letters` cash letters, each holding `bundles` bundles of `checks` checks.
pub fn grid_file(cash_letters: usize, bundles: usize, checks: usize, amount: i64) -> File {
    let mut file = File::new();
    file.set_header(valid_header());
    for cl in 0..cash_letters {
        let mut cash_letter = CashLetter::new(format!("CL{cl}"));
        for _ in 0..bundles {
            cash_letter.add_bundle(bundle_with_checks(&vec![amount; checks]));
        }
        file.add_cash_letter(cash_letter);
    }
    file
}

pub const VALID_HEADER_JSON: &str = r#"{
    "standardLevel": "35",
    "testFileIndicator": "T",
    "immediateDestination": "231380104",
    "immediateOrigin": "121042882",
    "fileCreationDate": "2024-06-14T00:00:00Z",
    "resendIndicator": "N",
    "immediateDestinationName": "Citadel",
    "immediateOriginName": "Wells Fargo"
}"#;
