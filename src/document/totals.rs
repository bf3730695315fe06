//! File control derivation as a fold over the cash letter tree.

use crate::errors::IclResult;
use crate::records::validators::checked_total;
use crate::records::{FileControl, RecordType};

use super::bundle::Bundle;
use super::cash_letter::CashLetter;

/// Header and control lines of the file itself.
const FILE_RECORDS: usize = 2;
/// Header and control lines of each cash letter or bundle.
const CONTAINER_RECORDS: usize = 2;

/// Counts and amounts accumulated while walking a file's cash letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileTotals {
    pub cash_letter_count: usize,
    pub cash_letter_record_count: usize,
    pub bundle_record_count: usize,
    pub total_item_count: usize,
    pub total_amount: i64,
    pub credit_indicator: u8,
}

impl FileTotals {
    /// Validates every cash letter and bundle in order and sums them up.
    ///
    /// The first validation failure is returned as-is.
    pub fn tally(cash_letters: &[CashLetter]) -> IclResult<Self> {
        let start = Self {
            cash_letter_count: cash_letters.len(),
            ..Self::default()
        };
        cash_letters.iter().try_fold(start, Self::with_cash_letter)
    }

    fn with_cash_letter(self, cash_letter: &CashLetter) -> IclResult<Self> {
        cash_letter.validate()?;

        // credit items count once for the cash letter and once more for the file
        let credits = cash_letter.credit_items.len();
        let (credit_items, credit_indicator) = if credits > 0 {
            (credits * 2, 1)
        } else {
            (0, self.credit_indicator)
        };

        let totals = Self {
            cash_letter_record_count: self.cash_letter_record_count + CONTAINER_RECORDS,
            total_item_count: self.total_item_count + credit_items,
            credit_indicator,
            ..self
        };
        cash_letter.bundles.iter().try_fold(totals, Self::with_bundle)
    }

    fn with_bundle(self, bundle: &Bundle) -> IclResult<Self> {
        bundle.validate()?;
        let total_amount = checked_total(
            RecordType::FileControl,
            "FileTotalAmount",
            [self.total_amount, bundle.total_amount()?],
        )?;
        Ok(Self {
            bundle_record_count: self.bundle_record_count + CONTAINER_RECORDS,
            total_item_count: self.total_item_count + bundle.item_record_count(),
            total_amount,
            ..self
        })
    }

    pub fn total_record_count(&self) -> usize {
        FILE_RECORDS + self.cash_letter_record_count + self.bundle_record_count + self.total_item_count
    }

    /// A fresh control record. Contact fields are left blank.
    pub fn to_control(&self) -> FileControl {
        FileControl {
            cash_letter_count: self.cash_letter_count,
            total_record_count: self.total_record_count(),
            total_item_count: self.total_item_count,
            file_total_amount: self.total_amount,
            credit_total_indicator: self.credit_indicator,
            ..FileControl::new()
        }
    }
}
