//! Field-level format checks shared by the record validators.

use crate::errors::{IclError, IclResult};

use super::{Record, RecordType};

pub(crate) const MSG_NUMERIC: &str = "has non-numeric characters";
pub(crate) const MSG_ALPHANUMERIC: &str = "has non-alphanumeric characters";
pub(crate) const MSG_REQUIRED: &str = "is a mandatory field and has a default value";
pub(crate) const MSG_NEGATIVE: &str = "must not be negative";
pub(crate) const MSG_AMOUNT_RANGE: &str = "exceeds the ten digit amount field";
pub(crate) const MSG_OVERFLOW: &str = "exceeds the largest representable total";

/// Largest amount, in cents, that fits the ten digit item amount field.
pub(crate) const MAX_ITEM_AMOUNT: i64 = 9_999_999_999;

/// Fails unless the record has been tagged with its own record type.
pub(crate) fn check_record_type<R: Record>(record: &R) -> IclResult<()> {
    match record.record_type() {
        Some(kind) if kind == R::RECORD_TYPE => Ok(()),
        other => Err(IclError::record(
            R::RECORD_TYPE,
            "recordType",
            other.map(RecordType::code).unwrap_or_default(),
            format!("received expecting {}", R::RECORD_TYPE.code()),
        )),
    }
}

pub(crate) fn numeric(kind: RecordType, field: &str, value: &str) -> IclResult<()> {
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(IclError::record(kind, field, value, MSG_NUMERIC))
    }
}

pub(crate) fn alphanumeric(kind: RecordType, field: &str, value: &str) -> IclResult<()> {
    if value.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
        Ok(())
    } else {
        Err(IclError::record(kind, field, value, MSG_ALPHANUMERIC))
    }
}

pub(crate) fn required(kind: RecordType, field: &str, value: &str) -> IclResult<()> {
    if value.trim().is_empty() {
        Err(IclError::record(kind, field, value, MSG_REQUIRED))
    } else {
        Ok(())
    }
}

pub(crate) fn non_negative(kind: RecordType, field: &str, value: i64) -> IclResult<()> {
    if value < 0 {
        Err(IclError::record(kind, field, value, MSG_NEGATIVE))
    } else {
        Ok(())
    }
}

/// Checks that an item amount is within `0..=MAX_ITEM_AMOUNT`.
pub(crate) fn item_amount(kind: RecordType, value: i64) -> IclResult<()> {
    non_negative(kind, "ItemAmount", value)?;
    if value > MAX_ITEM_AMOUNT {
        return Err(IclError::record(kind, "ItemAmount", value, MSG_AMOUNT_RANGE));
    }
    Ok(())
}

/// Sums amounts into a control total, failing instead of wrapping past `i64::MAX`.
pub(crate) fn checked_total<I>(kind: RecordType, field: &str, amounts: I) -> IclResult<i64>
where
    I: IntoIterator<Item = i64>,
{
    amounts.into_iter().try_fold(0_i64, |total, amount| {
        total
            .checked_add(amount)
            .ok_or_else(|| IclError::record(kind, field, total, MSG_OVERFLOW))
    })
}

/// Checks that a populated routing number is exactly nine digits.
pub(crate) fn routing_number(kind: RecordType, field: &str, value: &str) -> IclResult<()> {
    if value.is_empty() {
        return Ok(());
    }
    numeric(kind, field, value)?;
    if value.len() != 9 {
        return Err(IclError::record(
            kind,
            field,
            value,
            format!("must be 9 digits and found {}", value.len()),
        ));
    }
    Ok(())
}

/// Checks that `value` is empty or one of `allowed`.
pub(crate) fn one_of(kind: RecordType, field: &str, value: &str, allowed: &[&str]) -> IclResult<()> {
    if value.is_empty() || allowed.contains(&value) {
        Ok(())
    } else {
        Err(IclError::record(kind, field, value, "is invalid"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routing_number_requires_nine_digits() {
        let kind = RecordType::CheckDetail;
        assert!(routing_number(kind, "PayorBankRoutingNumber", "").is_ok());
        assert!(routing_number(kind, "PayorBankRoutingNumber", "12345678").is_err());
        assert!(routing_number(kind, "PayorBankRoutingNumber", "12345678A").is_err());
        assert!(routing_number(kind, "PayorBankRoutingNumber", "123456789").is_ok());
    }

    #[test]
    fn item_amount_is_capped_at_ten_digits() {
        let kind = RecordType::CheckDetail;
        assert!(item_amount(kind, MAX_ITEM_AMOUNT).is_ok());
        let err = item_amount(kind, MAX_ITEM_AMOUNT + 1).unwrap_err();
        assert_eq!(err.field_error().map(|e| e.message.as_str()), Some(MSG_AMOUNT_RANGE));
        assert!(item_amount(kind, -1).is_err());
    }

    #[test]
    fn checked_total_reports_overflow() {
        let kind = RecordType::BundleControl;
        assert_eq!(checked_total(kind, "BundleTotalAmount", [1, 2, 3]).unwrap(), 6);
        let err = checked_total(kind, "BundleTotalAmount", [i64::MAX, 1]).unwrap_err();
        let field = err.field_error().unwrap();
        assert_eq!(field.field_name, "BundleTotalAmount");
        assert_eq!(field.message, MSG_OVERFLOW);
    }

    #[test]
    fn alphanumeric_allows_spaces() {
        assert!(alphanumeric(RecordType::BundleHeader, "BundleID", "B 1").is_ok());
        assert!(alphanumeric(RecordType::BundleHeader, "BundleID", "B-1").is_err());
    }
}
