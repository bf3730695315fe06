use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{FieldError, IclResult};
use crate::records::{FileControl, FileHeader, Record};
use crate::utils::json::null_as_default;

use super::bundle::Bundle;
use super::cash_letter::CashLetter;
use super::totals::FileTotals;
use super::validation::{self, IdUniqueness};

const MSG_NO_CASH_LETTERS: &str = "must have CashLetters to be built";

/// An image cash letter file: a header, its cash letters and a derived control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    /// Client defined reference for this file.
    #[serde(default)]
    pub id: String,
    #[serde(rename = "fileHeader", default, deserialize_with = "null_as_default")]
    pub header: FileHeader,
    #[serde(
        rename = "cashLetters",
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub cash_letters: Vec<CashLetter>,
    /// Bundles outside any cash letter, kept for older payloads.
    #[serde(
        rename = "bundle",
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub bundles: Vec<Bundle>,
    #[serde(rename = "fileControl", default, deserialize_with = "null_as_default")]
    pub control: FileControl,
}

impl File {
    /// An empty file with template header and control records.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_header(&mut self, header: FileHeader) -> &mut Self {
        self.header = header;
        self
    }

    pub fn add_cash_letter(&mut self, cash_letter: CashLetter) -> &[CashLetter] {
        self.cash_letters.push(cash_letter);
        &self.cash_letters
    }

    pub fn add_bundle(&mut self, bundle: Bundle) -> &[Bundle] {
        self.bundles.push(bundle);
        &self.bundles
    }

    /// Validates the tree and replaces the file control with totals derived from it.
    ///
    /// Errors from the header, cash letters and bundles are returned unchanged,
    /// and the existing control record is kept when any of them fails.
    pub fn create(&mut self) -> IclResult<()> {
        self.header.validate()?;
        if self.cash_letters.is_empty() {
            return Err(FieldError::new(
                "CashLetters",
                self.cash_letters.len(),
                MSG_NO_CASH_LETTERS,
            )
            .into());
        }

        let totals = FileTotals::tally(&self.cash_letters)?;
        self.control = totals.to_control();
        debug!(
            file_id = %self.id,
            cash_letters = self.control.cash_letter_count,
            total_records = self.control.total_record_count,
            total_items = self.control.total_item_count,
            total_amount = self.control.file_total_amount,
            "derived file control"
        );
        Ok(())
    }

    /// Runs the cross-entity checks with adjacent-only CashLetterID comparison.
    pub fn validate(&self) -> IclResult<()> {
        self.validate_with(IdUniqueness::Adjacent)
    }

    pub fn validate_with(&self, uniqueness: IdUniqueness) -> IclResult<()> {
        self.cash_letter_id_unique_with(uniqueness)?;
        debug!(file_id = %self.id, ?uniqueness, "file validated");
        Ok(())
    }

    /// Rejects a CashLetterID equal to the one right before it.
    pub fn cash_letter_id_unique(&self) -> IclResult<()> {
        self.cash_letter_id_unique_with(IdUniqueness::Adjacent)
    }

    pub fn cash_letter_id_unique_with(&self, uniqueness: IdUniqueness) -> IclResult<()> {
        validation::cash_letter_id_unique(&self.cash_letters, uniqueness)
    }

    /// Stamps every record in the tree with its record type code.
    pub fn tag_record_types(&mut self) {
        self.header.set_record_type();
        self.cash_letters
            .iter_mut()
            .for_each(CashLetter::set_record_types);
        self.bundles.iter_mut().for_each(Bundle::set_record_types);
        self.control.set_record_type();
    }
}
