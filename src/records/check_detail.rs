//! Forward presentment check detail (type 25) and its addenda (types 26-28).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::IclResult;
use crate::utils::json::null_as_default;

use super::image_view::{ImageViewAnalysis, ImageViewData, ImageViewDetail};
use super::record_type::impl_record;
use super::validators::{self, check_record_type};
use super::{Record, RecordType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckDetail {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::record_type::lenient"
    )]
    pub record_type: Option<RecordType>,
    pub auxiliary_on_us: String,
    pub external_processing_code: String,
    pub payor_bank_routing_number: String,
    pub payor_bank_check_digit: String,
    pub on_us: String,
    /// Amount in cents.
    pub item_amount: i64,
    #[serde(rename = "eceInstitutionItemSequenceNumber")]
    pub ece_institution_item_sequence_number: String,
    pub documentation_type_indicator: String,
    pub return_acceptance_indicator: String,
    #[serde(rename = "micrValidIndicator")]
    pub micr_valid_indicator: u8,
    #[serde(rename = "bofdIndicator")]
    pub bofd_indicator: String,
    pub addendum_count: usize,
    pub correction_indicator: u8,
    pub archive_type_indicator: String,
    #[serde(rename = "checkDetailAddendumA", deserialize_with = "null_as_default")]
    pub addendum_a: Vec<CheckDetailAddendumA>,
    #[serde(rename = "checkDetailAddendumB", deserialize_with = "null_as_default")]
    pub addendum_b: Vec<CheckDetailAddendumB>,
    #[serde(rename = "checkDetailAddendumC", deserialize_with = "null_as_default")]
    pub addendum_c: Vec<CheckDetailAddendumC>,
    #[serde(deserialize_with = "null_as_default")]
    pub image_view_detail: Vec<ImageViewDetail>,
    #[serde(deserialize_with = "null_as_default")]
    pub image_view_data: Vec<ImageViewData>,
    #[serde(deserialize_with = "null_as_default")]
    pub image_view_analysis: Vec<ImageViewAnalysis>,
}

impl_record!(CheckDetail, CheckDetail);

impl Default for CheckDetail {
    fn default() -> Self {
        Self {
            record_type: Some(RecordType::CheckDetail),
            auxiliary_on_us: String::new(),
            external_processing_code: String::new(),
            payor_bank_routing_number: String::new(),
            payor_bank_check_digit: String::new(),
            on_us: String::new(),
            item_amount: 0,
            ece_institution_item_sequence_number: String::new(),
            documentation_type_indicator: String::new(),
            return_acceptance_indicator: String::new(),
            micr_valid_indicator: 0,
            bofd_indicator: String::new(),
            addendum_count: 0,
            correction_indicator: 0,
            archive_type_indicator: String::new(),
            addendum_a: Vec::new(),
            addendum_b: Vec::new(),
            addendum_c: Vec::new(),
            image_view_detail: Vec::new(),
            image_view_data: Vec::new(),
            image_view_analysis: Vec::new(),
        }
    }
}

impl CheckDetail {
    pub fn new(item_amount: i64) -> Self {
        Self {
            item_amount,
            ..Self::default()
        }
    }

    /// Number of records this item contributes beyond itself: addenda and image views.
    pub fn attached_record_count(&self) -> usize {
        self.addendum_a.len()
            + self.addendum_b.len()
            + self.addendum_c.len()
            + self.image_view_detail.len()
            + self.image_view_data.len()
            + self.image_view_analysis.len()
    }

    /// Validates the detail and every addendum and image view it owns.
    pub fn validate(&self) -> IclResult<()> {
        const KIND: RecordType = RecordType::CheckDetail;
        check_record_type(self)?;
        validators::numeric(KIND, "PayorBankRoutingNumber", &self.payor_bank_routing_number)?;
        validators::numeric(KIND, "PayorBankCheckDigit", &self.payor_bank_check_digit)?;
        validators::item_amount(KIND, self.item_amount)?;
        validators::numeric(
            KIND,
            "ECEInstitutionItemSequenceNumber",
            &self.ece_institution_item_sequence_number,
        )?;
        validators::one_of(
            KIND,
            "ReturnAcceptanceIndicator",
            &self.return_acceptance_indicator,
            &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "A", "B", "C", "D", "E", "F"],
        )?;
        validators::one_of(
            KIND,
            "MICRValidIndicator",
            &self.micr_valid_indicator.to_string(),
            &["0", "1", "2", "3", "4"],
        )?;
        validators::one_of(KIND, "BOFDIndicator", &self.bofd_indicator, &["Y", "N", "U"])?;
        validators::one_of(
            KIND,
            "ArchiveTypeIndicator",
            &self.archive_type_indicator,
            &["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"],
        )?;

        self.addendum_a.iter().try_for_each(CheckDetailAddendumA::validate)?;
        self.addendum_b.iter().try_for_each(CheckDetailAddendumB::validate)?;
        self.addendum_c.iter().try_for_each(CheckDetailAddendumC::validate)?;
        self.image_view_detail.iter().try_for_each(ImageViewDetail::validate)?;
        self.image_view_data.iter().try_for_each(ImageViewData::validate)?;
        self.image_view_analysis.iter().try_for_each(ImageViewAnalysis::validate)?;
        Ok(())
    }

    pub fn set_record_types(&mut self) {
        self.set_record_type();
        self.addendum_a.iter_mut().for_each(Record::set_record_type);
        self.addendum_b.iter_mut().for_each(Record::set_record_type);
        self.addendum_c.iter_mut().for_each(Record::set_record_type);
        self.image_view_detail.iter_mut().for_each(Record::set_record_type);
        self.image_view_data.iter_mut().for_each(Record::set_record_type);
        self.image_view_analysis.iter_mut().for_each(Record::set_record_type);
    }
}

/// Bank of first deposit endorsement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckDetailAddendumA {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::record_type::lenient"
    )]
    pub record_type: Option<RecordType>,
    pub record_number: usize,
    pub return_location_routing_number: String,
    #[serde(rename = "bofdEndorsementDate")]
    pub bofd_endorsement_date: Option<DateTime<Utc>>,
    #[serde(rename = "bofdItemSequenceNumber")]
    pub bofd_item_sequence_number: String,
    #[serde(rename = "bofdAccountNumber")]
    pub bofd_account_number: String,
    #[serde(rename = "bofdBranchCode")]
    pub bofd_branch_code: String,
    pub payee_name: String,
    pub truncation_indicator: String,
    #[serde(rename = "bofdConversionIndicator")]
    pub bofd_conversion_indicator: String,
    #[serde(rename = "bofdCorrectionIndicator")]
    pub bofd_correction_indicator: u8,
    pub user_field: String,
}

impl_record!(CheckDetailAddendumA, CheckDetailAddendumA);

impl Default for CheckDetailAddendumA {
    fn default() -> Self {
        Self {
            record_type: Some(RecordType::CheckDetailAddendumA),
            record_number: 0,
            return_location_routing_number: String::new(),
            bofd_endorsement_date: None,
            bofd_item_sequence_number: String::new(),
            bofd_account_number: String::new(),
            bofd_branch_code: String::new(),
            payee_name: String::new(),
            truncation_indicator: String::new(),
            bofd_conversion_indicator: String::new(),
            bofd_correction_indicator: 0,
            user_field: String::new(),
        }
    }
}

impl CheckDetailAddendumA {
    pub fn validate(&self) -> IclResult<()> {
        const KIND: RecordType = RecordType::CheckDetailAddendumA;
        check_record_type(self)?;
        validators::routing_number(
            KIND,
            "ReturnLocationRoutingNumber",
            &self.return_location_routing_number,
        )?;
        validators::numeric(KIND, "BOFDItemSequenceNumber", &self.bofd_item_sequence_number)?;
        validators::alphanumeric(KIND, "PayeeName", &self.payee_name)?;
        validators::one_of(KIND, "TruncationIndicator", &self.truncation_indicator, &["Y", "N"])?;
        Ok(())
    }
}

/// Image archive reference for the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckDetailAddendumB {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::record_type::lenient"
    )]
    pub record_type: Option<RecordType>,
    pub image_reference_key_indicator: u8,
    pub microfilm_archive_sequence_number: String,
    pub length_image_reference_key: String,
    pub image_reference_key: String,
    pub description: String,
    pub user_field: String,
}

impl_record!(CheckDetailAddendumB, CheckDetailAddendumB);

impl Default for CheckDetailAddendumB {
    fn default() -> Self {
        Self {
            record_type: Some(RecordType::CheckDetailAddendumB),
            image_reference_key_indicator: 0,
            microfilm_archive_sequence_number: String::new(),
            length_image_reference_key: String::new(),
            image_reference_key: String::new(),
            description: String::new(),
            user_field: String::new(),
        }
    }
}

impl CheckDetailAddendumB {
    pub fn validate(&self) -> IclResult<()> {
        const KIND: RecordType = RecordType::CheckDetailAddendumB;
        check_record_type(self)?;
        validators::one_of(
            KIND,
            "ImageReferenceKeyIndicator",
            &self.image_reference_key_indicator.to_string(),
            &["0", "1"],
        )?;
        validators::numeric(
            KIND,
            "LengthImageReferenceKey",
            &self.length_image_reference_key,
        )?;
        Ok(())
    }
}

/// Subsequent endorsement by a collecting bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckDetailAddendumC {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::record_type::lenient"
    )]
    pub record_type: Option<RecordType>,
    pub record_number: usize,
    pub endorsing_bank_routing_number: String,
    #[serde(rename = "bofdEndorsementBusinessDate")]
    pub bofd_endorsement_business_date: Option<DateTime<Utc>>,
    pub endorsing_bank_item_sequence_number: String,
    pub truncation_indicator: String,
    pub endorsing_bank_conversion_indicator: String,
    pub endorsing_bank_correction_indicator: u8,
    pub return_reason: String,
    pub user_field: String,
    pub endorsing_bank_identifier: u8,
}

impl_record!(CheckDetailAddendumC, CheckDetailAddendumC);

impl Default for CheckDetailAddendumC {
    fn default() -> Self {
        Self {
            record_type: Some(RecordType::CheckDetailAddendumC),
            record_number: 0,
            endorsing_bank_routing_number: String::new(),
            bofd_endorsement_business_date: None,
            endorsing_bank_item_sequence_number: String::new(),
            truncation_indicator: String::new(),
            endorsing_bank_conversion_indicator: String::new(),
            endorsing_bank_correction_indicator: 0,
            return_reason: String::new(),
            user_field: String::new(),
            endorsing_bank_identifier: 0,
        }
    }
}

impl CheckDetailAddendumC {
    pub fn validate(&self) -> IclResult<()> {
        const KIND: RecordType = RecordType::CheckDetailAddendumC;
        check_record_type(self)?;
        validators::routing_number(
            KIND,
            "EndorsingBankRoutingNumber",
            &self.endorsing_bank_routing_number,
        )?;
        validators::numeric(
            KIND,
            "EndorsingBankItemSequenceNumber",
            &self.endorsing_bank_item_sequence_number,
        )?;
        validators::one_of(KIND, "TruncationIndicator", &self.truncation_indicator, &["Y", "N"])?;
        validators::alphanumeric(KIND, "ReturnReason", &self.return_reason)?;
        Ok(())
    }
}
