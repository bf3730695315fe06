//! Cross-entity checks that no single record can perform on its own.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{FieldError, IclError, IclResult};

use super::cash_letter::CashLetter;

/// How strictly CashLetterIDs must differ within a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdUniqueness {
    /// Only neighbouring cash letters are compared; `[A, B, A]` passes. The
    /// first CashLetterID is compared against a blank one, so a leading blank
    /// ID fails.
    #[default]
    Adjacent,
    /// No CashLetterID may repeat anywhere in the file.
    Global,
}

/// Checks CashLetterIDs according to `mode`. An empty sequence is a nil file.
pub fn cash_letter_id_unique(cash_letters: &[CashLetter], mode: IdUniqueness) -> IclResult<()> {
    if cash_letters.is_empty() {
        return Err(IclError::NilFile);
    }
    let duplicate = match mode {
        IdUniqueness::Adjacent => {
            // the first ID is compared against a blank one
            let mut previous = "";
            cash_letters
                .iter()
                .map(CashLetter::cash_letter_id)
                .find(|id| {
                    let repeated = *id == previous;
                    previous = *id;
                    repeated
                })
        }
        IdUniqueness::Global => {
            let mut seen = HashSet::new();
            cash_letters
                .iter()
                .map(CashLetter::cash_letter_id)
                .find(|id| !seen.insert(*id))
        }
    };
    match duplicate {
        Some(id) => Err(FieldError::new("CashLetterID", id, format!("{id} is not unique")).into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(ids: &[&str]) -> Vec<CashLetter> {
        ids.iter().map(|id| CashLetter::new(*id)).collect()
    }

    #[test]
    fn adjacent_mode_only_catches_neighbours() {
        let err = cash_letter_id_unique(&letters(&["A", "A", "B"]), IdUniqueness::Adjacent)
            .unwrap_err();
        assert_eq!(err.to_string(), "CashLetterID A is not unique");
        assert!(cash_letter_id_unique(&letters(&["A", "B", "A"]), IdUniqueness::Adjacent).is_ok());
    }

    #[test]
    fn global_mode_catches_any_repeat() {
        let err =
            cash_letter_id_unique(&letters(&["A", "B", "A"]), IdUniqueness::Global).unwrap_err();
        match err {
            IclError::Field(field) => {
                assert_eq!(field.field_name, "CashLetterID");
                assert_eq!(field.value, "A");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_sequence_is_nil_file() {
        for mode in [IdUniqueness::Adjacent, IdUniqueness::Global] {
            assert!(matches!(
                cash_letter_id_unique(&[], mode),
                Err(IclError::NilFile)
            ));
        }
    }

    #[test]
    fn leading_blank_id_is_rejected() {
        for ids in [&[""][..], &["", "B"][..]] {
            let err = cash_letter_id_unique(&letters(ids), IdUniqueness::Adjacent).unwrap_err();
            assert_eq!(err.to_string(), "CashLetterID  is not unique");
        }
        assert!(cash_letter_id_unique(&letters(&["B", ""]), IdUniqueness::Adjacent).is_ok());
        assert!(cash_letter_id_unique(&letters(&[""]), IdUniqueness::Global).is_ok());
    }
}
