use serde::{Deserialize, Serialize};

use crate::errors::IclResult;
use crate::records::validators::checked_total;
use crate::records::{CashLetterControl, CashLetterHeader, CreditItem, Record, RecordType};
use crate::utils::json::null_as_default;

use super::bundle::Bundle;

/// Bundles and credit items presented together under one cash letter control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashLetter {
    pub id: String,
    #[serde(rename = "cashLetterHeader", deserialize_with = "null_as_default")]
    pub header: CashLetterHeader,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub bundles: Vec<Bundle>,
    #[serde(
        rename = "creditItems",
        alias = "creditItem",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub credit_items: Vec<CreditItem>,
    #[serde(rename = "cashLetterControl", deserialize_with = "null_as_default")]
    pub control: CashLetterControl,
}

impl CashLetter {
    pub fn new(cash_letter_id: impl Into<String>) -> Self {
        let mut header = CashLetterHeader::new();
        header.cash_letter_id = cash_letter_id.into();
        Self::with_header(header)
    }

    pub fn with_header(header: CashLetterHeader) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    pub fn cash_letter_id(&self) -> &str {
        &self.header.cash_letter_id
    }

    pub fn add_bundle(&mut self, bundle: Bundle) -> &[Bundle] {
        self.bundles.push(bundle);
        &self.bundles
    }

    pub fn add_credit_item(&mut self, credit: CreditItem) -> &[CreditItem] {
        self.credit_items.push(credit);
        &self.credit_items
    }

    /// Validates the cash letter's own records. Bundles are validated on their own.
    pub fn validate(&self) -> IclResult<()> {
        self.header.validate()?;
        self.control.validate()?;
        self.credit_items.iter().try_for_each(CreditItem::validate)?;
        Ok(())
    }

    /// Derives every bundle control and then the cash letter control.
    ///
    /// Nothing is written unless the cash letter and all of its bundles validate.
    pub fn create(&mut self) -> IclResult<()> {
        self.validate()?;
        let bundle_controls = self
            .bundles
            .iter()
            .map(Bundle::derive_control)
            .collect::<IclResult<Vec<_>>>()?;

        let cash_letter_total_amount = checked_total(
            RecordType::CashLetterControl,
            "CashLetterTotalAmount",
            bundle_controls.iter().map(|c| c.bundle_total_amount),
        )?;

        let credits = self.credit_items.len();
        let control = CashLetterControl {
            cash_letter_bundle_count: self.bundles.len(),
            cash_letter_items_count: bundle_controls
                .iter()
                .map(|c| c.bundle_items_count)
                .sum::<usize>()
                + credits,
            cash_letter_total_amount,
            cash_letter_images_count: bundle_controls.iter().map(|c| c.bundle_images_count).sum(),
            ece_institution_name: self.control.ece_institution_name.clone(),
            settlement_date: self.control.settlement_date,
            credit_total_indicator: u8::from(credits > 0),
            ..CashLetterControl::new()
        };

        for (bundle, derived) in self.bundles.iter_mut().zip(bundle_controls) {
            bundle.control = derived;
        }
        self.control = control;
        Ok(())
    }

    pub fn set_record_types(&mut self) {
        self.header.set_record_type();
        self.bundles.iter_mut().for_each(Bundle::set_record_types);
        self.credit_items.iter_mut().for_each(Record::set_record_type);
        self.control.set_record_type();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{BundleHeader, CheckDetail};

    fn bundle_with(amounts: &[i64]) -> Bundle {
        let mut bundle = Bundle::new(BundleHeader::new());
        for amount in amounts {
            bundle.add_check_detail(CheckDetail::new(*amount));
        }
        bundle
    }

    #[test]
    fn create_rolls_up_bundle_controls() {
        let mut cash_letter = CashLetter::new("CL1");
        cash_letter.add_bundle(bundle_with(&[100, 200]));
        cash_letter.add_bundle(bundle_with(&[300]));
        cash_letter.add_credit_item(CreditItem::new(600));

        cash_letter.create().unwrap();

        assert_eq!(cash_letter.control.cash_letter_bundle_count, 2);
        assert_eq!(cash_letter.control.cash_letter_items_count, 4);
        assert_eq!(cash_letter.control.cash_letter_total_amount, 600);
        assert_eq!(cash_letter.control.credit_total_indicator, 1);
        assert_eq!(cash_letter.bundles[0].control.bundle_total_amount, 300);
    }

    #[test]
    fn create_requires_cash_letter_id() {
        let mut cash_letter = CashLetter::new("");
        let err = cash_letter.create().unwrap_err();
        assert_eq!(
            err.field_error().map(|e| e.field_name.as_str()),
            Some("CashLetterID")
        );
    }

    #[test]
    fn null_credit_items_decode_as_empty() {
        let cash_letter: CashLetter = serde_json::from_str(
            r#"{"cashLetterHeader":{"cashLetterID":"CL1"},"bundles":null,"creditItems":null}"#,
        )
        .unwrap();
        assert_eq!(cash_letter.cash_letter_id(), "CL1");
        assert!(cash_letter.bundles.is_empty());
        assert!(cash_letter.credit_items.is_empty());
        assert_eq!(cash_letter.control, CashLetterControl::new());
    }

    #[test]
    fn oversized_item_amount_is_rejected() {
        let mut cash_letter = CashLetter::new("CL1");
        cash_letter.add_bundle(bundle_with(&[i64::MAX, i64::MAX]));
        let err = cash_letter.create().unwrap_err();
        assert_eq!(
            err.field_error().map(|e| e.field_name.as_str()),
            Some("ItemAmount")
        );
        assert_eq!(cash_letter.control, CashLetterControl::new());
    }

    #[test]
    fn invalid_bundle_leaves_all_controls_untouched() {
        let mut cash_letter = CashLetter::new("CL1");
        cash_letter.add_bundle(bundle_with(&[100]));
        cash_letter.add_bundle(bundle_with(&[-1]));

        assert!(cash_letter.create().is_err());
        assert_eq!(cash_letter.bundles[0].control, Default::default());
        assert_eq!(cash_letter.control, CashLetterControl::new());
    }
}
