use serde::{Deserialize, Serialize};

use crate::errors::IclResult;

use super::record_type::impl_record;
use super::validators::{self, check_record_type};
use super::RecordType;

const KIND: RecordType = RecordType::FileControl;

/// Totals over every record in the file. Derived by `File::create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileControl {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::record_type::lenient"
    )]
    pub record_type: Option<RecordType>,
    pub cash_letter_count: usize,
    pub total_record_count: usize,
    pub total_item_count: usize,
    pub file_total_amount: i64,
    pub immediate_origin_contact_name: String,
    pub immediate_origin_contact_phone_number: String,
    pub credit_total_indicator: u8,
}

impl_record!(FileControl, FileControl);

impl Default for FileControl {
    fn default() -> Self {
        Self::new()
    }
}

impl FileControl {
    pub fn new() -> Self {
        Self {
            record_type: Some(KIND),
            cash_letter_count: 0,
            total_record_count: 0,
            total_item_count: 0,
            file_total_amount: 0,
            immediate_origin_contact_name: String::new(),
            immediate_origin_contact_phone_number: String::new(),
            credit_total_indicator: 0,
        }
    }

    pub fn validate(&self) -> IclResult<()> {
        check_record_type(self)?;
        validators::non_negative(KIND, "FileTotalAmount", self.file_total_amount)?;
        validators::alphanumeric(
            KIND,
            "ImmediateOriginContactName",
            &self.immediate_origin_contact_name,
        )?;
        validators::numeric(
            KIND,
            "ImmediateOriginContactPhoneNumber",
            &self.immediate_origin_contact_phone_number,
        )?;
        validators::one_of(
            KIND,
            "CreditTotalIndicator",
            &self.credit_total_indicator.to_string(),
            &["0", "1"],
        )?;
        Ok(())
    }
}
