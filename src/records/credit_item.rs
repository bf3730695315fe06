use serde::{Deserialize, Serialize};

use crate::errors::IclResult;

use super::record_type::impl_record;
use super::validators::{self, check_record_type};
use super::RecordType;

const KIND: RecordType = RecordType::CreditItem;

/// A non-check credit presented within a cash letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreditItem {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::record_type::lenient"
    )]
    pub record_type: Option<RecordType>,
    pub auxiliary_on_us: String,
    pub external_processing_code: String,
    pub posting_bank_routing_number: String,
    pub on_us: String,
    /// Amount in cents.
    pub item_amount: i64,
    pub credit_item_sequence_number: String,
    pub documentation_type_indicator: String,
    pub account_type_code: String,
    pub source_work_code: String,
    pub user_field: String,
}

impl_record!(CreditItem, CreditItem);

impl Default for CreditItem {
    fn default() -> Self {
        Self {
            record_type: Some(KIND),
            auxiliary_on_us: String::new(),
            external_processing_code: String::new(),
            posting_bank_routing_number: String::new(),
            on_us: String::new(),
            item_amount: 0,
            credit_item_sequence_number: String::new(),
            documentation_type_indicator: String::new(),
            account_type_code: String::new(),
            source_work_code: String::new(),
            user_field: String::new(),
        }
    }
}

impl CreditItem {
    pub fn new(item_amount: i64) -> Self {
        Self {
            item_amount,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> IclResult<()> {
        check_record_type(self)?;
        validators::routing_number(
            KIND,
            "PostingBankRoutingNumber",
            &self.posting_bank_routing_number,
        )?;
        validators::item_amount(KIND, self.item_amount)?;
        validators::numeric(
            KIND,
            "CreditItemSequenceNumber",
            &self.credit_item_sequence_number,
        )?;
        validators::one_of(
            KIND,
            "AccountTypeCode",
            &self.account_type_code,
            &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "Z"],
        )?;
        Ok(())
    }
}
