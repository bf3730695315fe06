use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::IclResult;

use super::record_type::impl_record;
use super::validators::{self, check_record_type};
use super::RecordType;

const KIND: RecordType = RecordType::CashLetterControl;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CashLetterControl {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::record_type::lenient"
    )]
    pub record_type: Option<RecordType>,
    pub cash_letter_bundle_count: usize,
    pub cash_letter_items_count: usize,
    pub cash_letter_total_amount: i64,
    pub cash_letter_images_count: usize,
    #[serde(rename = "eceInstitutionName")]
    pub ece_institution_name: String,
    pub settlement_date: Option<DateTime<Utc>>,
    pub credit_total_indicator: u8,
}

impl_record!(CashLetterControl, CashLetterControl);

impl Default for CashLetterControl {
    fn default() -> Self {
        Self::new()
    }
}

impl CashLetterControl {
    pub fn new() -> Self {
        Self {
            record_type: Some(KIND),
            cash_letter_bundle_count: 0,
            cash_letter_items_count: 0,
            cash_letter_total_amount: 0,
            cash_letter_images_count: 0,
            ece_institution_name: String::new(),
            settlement_date: None,
            credit_total_indicator: 0,
        }
    }

    pub fn validate(&self) -> IclResult<()> {
        check_record_type(self)?;
        validators::non_negative(KIND, "CashLetterTotalAmount", self.cash_letter_total_amount)?;
        validators::alphanumeric(KIND, "ECEInstitutionName", &self.ece_institution_name)?;
        validators::one_of(
            KIND,
            "CreditTotalIndicator",
            &self.credit_total_indicator.to_string(),
            &["0", "1"],
        )?;
        Ok(())
    }
}
