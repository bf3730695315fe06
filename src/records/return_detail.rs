//! Return detail (type 31) and its addenda (types 32-35).

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
pub struct ReturnDetail {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::record_type::lenient"
    )]
    pub record_type: Option<RecordType>,
    pub payor_bank_routing_number: String,
    pub payor_bank_check_digit: String,
    pub on_us: String,
    /// Amount in cents.
    pub item_amount: i64,
    pub return_reason: String,
    pub addendum_count: usize,
    pub documentation_type_indicator: String,
    pub forward_bundle_date: Option<DateTime<Utc>>,
    #[serde(rename = "eceInstitutionItemSequenceNumber")]
    pub ece_institution_item_sequence_number: String,
    pub external_processing_code: String,
    pub return_notification_indicator: String,
    pub archive_type_indicator: String,
    #[serde(rename = "returnDetailAddendumA", deserialize_with = "null_as_default")]
    pub addendum_a: Vec<ReturnDetailAddendumA>,
    #[serde(rename = "returnDetailAddendumB", deserialize_with = "null_as_default")]
    pub addendum_b: Vec<ReturnDetailAddendumB>,
    #[serde(rename = "returnDetailAddendumC", deserialize_with = "null_as_default")]
    pub addendum_c: Vec<ReturnDetailAddendumC>,
    #[serde(rename = "returnDetailAddendumD", deserialize_with = "null_as_default")]
    pub addendum_d: Vec<ReturnDetailAddendumD>,
    #[serde(deserialize_with = "null_as_default")]
    pub image_view_detail: Vec<ImageViewDetail>,
    #[serde(deserialize_with = "null_as_default")]
    pub image_view_data: Vec<ImageViewData>,
    #[serde(deserialize_with = "null_as_default")]
    pub image_view_analysis: Vec<ImageViewAnalysis>,
}

impl_record!(ReturnDetail, ReturnDetail);

impl Default for ReturnDetail {
    fn default() -> Self {
        Self {
            record_type: Some(RecordType::ReturnDetail),
            payor_bank_routing_number: String::new(),
            payor_bank_check_digit: String::new(),
            on_us: String::new(),
            item_amount: 0,
            return_reason: String::new(),
            addendum_count: 0,
            documentation_type_indicator: String::new(),
            forward_bundle_date: None,
            ece_institution_item_sequence_number: String::new(),
            external_processing_code: String::new(),
            return_notification_indicator: String::new(),
            archive_type_indicator: String::new(),
            addendum_a: Vec::new(),
            addendum_b: Vec::new(),
            addendum_c: Vec::new(),
            addendum_d: Vec::new(),
            image_view_detail: Vec::new(),
            image_view_data: Vec::new(),
            image_view_analysis: Vec::new(),
        }
    }
}

impl ReturnDetail {
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
            + self.addendum_d.len()
            + self.image_view_detail.len()
            + self.image_view_data.len()
            + self.image_view_analysis.len()
    }

    pub fn validate(&self) -> IclResult<()> {
        const KIND: RecordType = RecordType::ReturnDetail;
        check_record_type(self)?;
        validators::numeric(KIND, "PayorBankRoutingNumber", &self.payor_bank_routing_number)?;
        validators::numeric(KIND, "PayorBankCheckDigit", &self.payor_bank_check_digit)?;
        validators::item_amount(KIND, self.item_amount)?;
        validators::alphanumeric(KIND, "ReturnReason", &self.return_reason)?;
        validators::numeric(
            KIND,
            "ECEInstitutionItemSequenceNumber",
            &self.ece_institution_item_sequence_number,
        )?;
        validators::one_of(
            KIND,
            "ReturnNotificationIndicator",
            &self.return_notification_indicator,
            &["1", "2"],
        )?;

        self.addendum_a.iter().try_for_each(ReturnDetailAddendumA::validate)?;
        self.addendum_b.iter().try_for_each(ReturnDetailAddendumB::validate)?;
        self.addendum_c.iter().try_for_each(ReturnDetailAddendumC::validate)?;
        self.addendum_d.iter().try_for_each(ReturnDetailAddendumD::validate)?;
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
        self.addendum_d.iter_mut().for_each(Record::set_record_type);
        self.image_view_detail.iter_mut().for_each(Record::set_record_type);
        self.image_view_data.iter_mut().for_each(Record::set_record_type);
        self.image_view_analysis.iter_mut().for_each(Record::set_record_type);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReturnDetailAddendumA {
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
    pub user_field: String,
}

impl_record!(ReturnDetailAddendumA, ReturnDetailAddendumA);

impl Default for ReturnDetailAddendumA {
    fn default() -> Self {
        Self {
            record_type: Some(RecordType::ReturnDetailAddendumA),
            record_number: 0,
            return_location_routing_number: String::new(),
            bofd_endorsement_date: None,
            bofd_item_sequence_number: String::new(),
            bofd_account_number: String::new(),
            bofd_branch_code: String::new(),
            payee_name: String::new(),
            truncation_indicator: String::new(),
            user_field: String::new(),
        }
    }
}

impl ReturnDetailAddendumA {
    pub fn validate(&self) -> IclResult<()> {
        const KIND: RecordType = RecordType::ReturnDetailAddendumA;
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

/// Payor bank identification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReturnDetailAddendumB {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::record_type::lenient"
    )]
    pub record_type: Option<RecordType>,
    pub payor_bank_name: String,
    pub auxiliary_on_us: String,
    pub payor_bank_sequence_number: String,
    pub payor_bank_business_date: Option<DateTime<Utc>>,
    pub payor_account_name: String,
}

impl_record!(ReturnDetailAddendumB, ReturnDetailAddendumB);

impl Default for ReturnDetailAddendumB {
    fn default() -> Self {
        Self {
            record_type: Some(RecordType::ReturnDetailAddendumB),
            payor_bank_name: String::new(),
            auxiliary_on_us: String::new(),
            payor_bank_sequence_number: String::new(),
            payor_bank_business_date: None,
            payor_account_name: String::new(),
        }
    }
}

impl ReturnDetailAddendumB {
    pub fn validate(&self) -> IclResult<()> {
        const KIND: RecordType = RecordType::ReturnDetailAddendumB;
        check_record_type(self)?;
        validators::alphanumeric(KIND, "PayorBankName", &self.payor_bank_name)?;
        validators::numeric(
            KIND,
            "PayorBankSequenceNumber",
            &self.payor_bank_sequence_number,
        )?;
        validators::alphanumeric(KIND, "PayorAccountName", &self.payor_account_name)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReturnDetailAddendumC {
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

impl_record!(ReturnDetailAddendumC, ReturnDetailAddendumC);

impl Default for ReturnDetailAddendumC {
    fn default() -> Self {
        Self {
            record_type: Some(RecordType::ReturnDetailAddendumC),
            image_reference_key_indicator: 0,
            microfilm_archive_sequence_number: String::new(),
            length_image_reference_key: String::new(),
            image_reference_key: String::new(),
            description: String::new(),
            user_field: String::new(),
        }
    }
}

impl ReturnDetailAddendumC {
    pub fn validate(&self) -> IclResult<()> {
        const KIND: RecordType = RecordType::ReturnDetailAddendumC;
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

/// Endorsement by a bank handling the return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReturnDetailAddendumD {
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
    pub return_reason: String,
    pub user_field: String,
    pub endorsing_bank_identifier: u8,
}

impl_record!(ReturnDetailAddendumD, ReturnDetailAddendumD);

impl Default for ReturnDetailAddendumD {
    fn default() -> Self {
        Self {
            record_type: Some(RecordType::ReturnDetailAddendumD),
            record_number: 0,
            endorsing_bank_routing_number: String::new(),
            bofd_endorsement_business_date: None,
            endorsing_bank_item_sequence_number: String::new(),
            truncation_indicator: String::new(),
            return_reason: String::new(),
            user_field: String::new(),
            endorsing_bank_identifier: 0,
        }
    }
}

impl ReturnDetailAddendumD {
    pub fn validate(&self) -> IclResult<()> {
        const KIND: RecordType = RecordType::ReturnDetailAddendumD;
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
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attached_records_count_all_four_addenda() {
        let mut ret = ReturnDetail::new(250);
        ret.addendum_a.push(ReturnDetailAddendumA::default());
        ret.addendum_b.push(ReturnDetailAddendumB::default());
        ret.addendum_c.push(ReturnDetailAddendumC::default());
        ret.addendum_d.push(ReturnDetailAddendumD::default());
        ret.image_view_analysis.push(ImageViewAnalysis::default());
        assert_eq!(ret.attached_record_count(), 5);
        assert!(ret.validate().is_ok());
    }

    #[test]
    fn negative_amount_is_rejected() {
        let err = ReturnDetail::new(-1).validate().unwrap_err();
        let field = err.field_error().expect("field error");
        assert_eq!(field.field_name, "ItemAmount");
        assert_eq!(field.value, "-1");
    }
}
