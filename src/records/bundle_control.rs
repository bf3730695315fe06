use serde::{Deserialize, Serialize};

use crate::errors::IclResult;

use super::record_type::impl_record;
use super::validators::{self, check_record_type};
use super::RecordType;

const KIND: RecordType = RecordType::BundleControl;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BundleControl {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::record_type::lenient"
    )]
    pub record_type: Option<RecordType>,
    pub bundle_items_count: usize,
    pub bundle_total_amount: i64,
    #[serde(rename = "micrValidTotalAmount")]
    pub micr_valid_total_amount: i64,
    pub bundle_images_count: usize,
    pub user_field: String,
    pub credit_total_indicator: u8,
}

impl_record!(BundleControl, BundleControl);

impl Default for BundleControl {
    fn default() -> Self {
        Self::new()
    }
}

impl BundleControl {
    pub fn new() -> Self {
        Self {
            record_type: Some(KIND),
            bundle_items_count: 0,
            bundle_total_amount: 0,
            micr_valid_total_amount: 0,
            bundle_images_count: 0,
            user_field: String::new(),
            credit_total_indicator: 0,
        }
    }

    pub fn validate(&self) -> IclResult<()> {
        check_record_type(self)?;
        validators::non_negative(KIND, "BundleTotalAmount", self.bundle_total_amount)?;
        validators::non_negative(KIND, "MICRValidTotalAmount", self.micr_valid_total_amount)?;
        validators::one_of(
            KIND,
            "CreditTotalIndicator",
            &self.credit_total_indicator.to_string(),
            &["0", "1"],
        )?;
        Ok(())
    }
}
