use serde::{Deserialize, Serialize};

use crate::errors::IclResult;
use crate::utils::json::null_as_default;
use crate::records::validators::checked_total;
use crate::records::{BundleControl, BundleHeader, CheckDetail, Record, RecordType, ReturnDetail};

/// A group of check or return items sharing one bundle control total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bundle {
    pub id: String,
    #[serde(rename = "bundleHeader", deserialize_with = "null_as_default")]
    pub header: BundleHeader,
    #[serde(
        rename = "checkDetails",
        alias = "checks",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub checks: Vec<CheckDetail>,
    #[serde(
        rename = "returnDetails",
        alias = "returns",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub returns: Vec<ReturnDetail>,
    #[serde(rename = "bundleControl", deserialize_with = "null_as_default")]
    pub control: BundleControl,
}

impl Bundle {
    pub fn new(header: BundleHeader) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    pub fn add_check_detail(&mut self, check: CheckDetail) -> &[CheckDetail] {
        self.checks.push(check);
        &self.checks
    }

    pub fn add_return_detail(&mut self, ret: ReturnDetail) -> &[ReturnDetail] {
        self.returns.push(ret);
        &self.returns
    }

    /// Validates the bundle records and every item it contains.
    pub fn validate(&self) -> IclResult<()> {
        self.header.validate()?;
        self.control.validate()?;
        self.checks.iter().try_for_each(CheckDetail::validate)?;
        self.returns.iter().try_for_each(ReturnDetail::validate)?;
        Ok(())
    }

    /// Records counted toward the file item total: every detail plus its addenda and views.
    pub fn item_record_count(&self) -> usize {
        let checks: usize = self
            .checks
            .iter()
            .map(|check| 1 + check.attached_record_count())
            .sum();
        let returns: usize = self
            .returns
            .iter()
            .map(|ret| 1 + ret.attached_record_count())
            .sum();
        checks + returns
    }

    /// Sum of every check and return amount; fails rather than overflowing.
    pub fn total_amount(&self) -> IclResult<i64> {
        let checks = self.checks.iter().map(|check| check.item_amount);
        let returns = self.returns.iter().map(|ret| ret.item_amount);
        checked_total(
            RecordType::BundleControl,
            "BundleTotalAmount",
            checks.chain(returns),
        )
    }

    /// Validates the bundle and computes its control record without storing it.
    pub fn derive_control(&self) -> IclResult<BundleControl> {
        self.validate()?;
        let micr_valid_total_amount = checked_total(
            RecordType::BundleControl,
            "MICRValidTotalAmount",
            self.checks
                .iter()
                .filter(|check| check.micr_valid_indicator == 1)
                .map(|check| check.item_amount),
        )?;
        let bundle_images_count = self
            .checks
            .iter()
            .map(|check| check.image_view_detail.len())
            .chain(self.returns.iter().map(|ret| ret.image_view_detail.len()))
            .sum();

        Ok(BundleControl {
            bundle_items_count: self.checks.len() + self.returns.len(),
            bundle_total_amount: self.total_amount()?,
            micr_valid_total_amount,
            bundle_images_count,
            ..BundleControl::new()
        })
    }

    /// Replaces the bundle control with totals derived from the current items.
    pub fn create(&mut self) -> IclResult<()> {
        self.control = self.derive_control()?;
        Ok(())
    }

    pub fn set_record_types(&mut self) {
        self.header.set_record_type();
        self.checks.iter_mut().for_each(CheckDetail::set_record_types);
        self.returns.iter_mut().for_each(ReturnDetail::set_record_types);
        self.control.set_record_type();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{CheckDetailAddendumA, ImageViewDetail, ReturnDetailAddendumD};

    fn sample_bundle() -> Bundle {
        let mut bundle = Bundle::new(BundleHeader::new());
        let mut check = CheckDetail::new(1_500);
        check.micr_valid_indicator = 1;
        check.addendum_a.push(CheckDetailAddendumA::default());
        check.image_view_detail.push(ImageViewDetail::default());
        bundle.add_check_detail(check);
        bundle.add_check_detail(CheckDetail::new(500));
        let mut ret = ReturnDetail::new(250);
        ret.addendum_d.push(ReturnDetailAddendumD::default());
        bundle.add_return_detail(ret);
        bundle
    }

    #[test]
    fn create_derives_bundle_control() {
        let mut bundle = sample_bundle();
        bundle.create().unwrap();
        assert_eq!(bundle.control.bundle_items_count, 3);
        assert_eq!(bundle.control.bundle_total_amount, 2_250);
        assert_eq!(bundle.control.micr_valid_total_amount, 1_500);
        assert_eq!(bundle.control.bundle_images_count, 1);
    }

    #[test]
    fn item_record_count_includes_attachments() {
        assert_eq!(sample_bundle().item_record_count(), 6);
    }

    #[test]
    fn failed_create_keeps_previous_control() {
        let mut bundle = sample_bundle();
        bundle.create().unwrap();
        let before = bundle.control.clone();
        bundle.add_check_detail(CheckDetail::new(-10));
        assert!(bundle.create().is_err());
        assert_eq!(bundle.control, before);
    }

    #[test]
    fn total_amount_fails_instead_of_wrapping() {
        let mut bundle = Bundle::new(BundleHeader::new());
        bundle.add_check_detail(CheckDetail::new(i64::MAX));
        bundle.add_return_detail(ReturnDetail::new(1));
        let err = bundle.total_amount().unwrap_err();
        assert_eq!(
            err.field_error().map(|e| e.field_name.as_str()),
            Some("BundleTotalAmount")
        );
    }

    #[test]
    fn accepts_null_collections() {
        let bundle: Bundle = serde_json::from_str(
            r#"{"bundleHeader":null,"checkDetails":null,"returnDetails":null,"bundleControl":null}"#,
        )
        .unwrap();
        assert!(bundle.checks.is_empty());
        assert!(bundle.returns.is_empty());
        assert_eq!(bundle.header, BundleHeader::new());
    }

    #[test]
    fn accepts_legacy_collection_names() {
        let bundle: Bundle =
            serde_json::from_str(r#"{"checks":[{"itemAmount":10}],"returns":[{"itemAmount":5}]}"#)
                .unwrap();
        assert_eq!(bundle.checks.len(), 1);
        assert_eq!(bundle.returns.len(), 1);
    }
}
