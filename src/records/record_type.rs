use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Two-character record type codes of the X9.100-187 image exchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    FileHeader,
    CashLetterHeader,
    BundleHeader,
    CheckDetail,
    CheckDetailAddendumA,
    CheckDetailAddendumB,
    CheckDetailAddendumC,
    ReturnDetail,
    ReturnDetailAddendumA,
    ReturnDetailAddendumB,
    ReturnDetailAddendumC,
    ReturnDetailAddendumD,
    ImageViewDetail,
    ImageViewData,
    ImageViewAnalysis,
    CreditItem,
    BundleControl,
    RoutingNumberSummary,
    CashLetterControl,
    FileControl,
}

const CODES: [(RecordType, &str); 20] = [
    (RecordType::FileHeader, "01"),
    (RecordType::CashLetterHeader, "10"),
    (RecordType::BundleHeader, "20"),
    (RecordType::CheckDetail, "25"),
    (RecordType::CheckDetailAddendumA, "26"),
    (RecordType::CheckDetailAddendumB, "27"),
    (RecordType::CheckDetailAddendumC, "28"),
    (RecordType::ReturnDetail, "31"),
    (RecordType::ReturnDetailAddendumA, "32"),
    (RecordType::ReturnDetailAddendumB, "33"),
    (RecordType::ReturnDetailAddendumC, "34"),
    (RecordType::ReturnDetailAddendumD, "35"),
    (RecordType::ImageViewDetail, "50"),
    (RecordType::ImageViewData, "52"),
    (RecordType::ImageViewAnalysis, "54"),
    (RecordType::CreditItem, "62"),
    (RecordType::BundleControl, "70"),
    (RecordType::RoutingNumberSummary, "85"),
    (RecordType::CashLetterControl, "90"),
    (RecordType::FileControl, "99"),
];

impl RecordType {
    pub fn code(self) -> &'static str {
        CODES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, code)| *code)
            .unwrap_or_default()
    }

    pub fn from_code(code: &str) -> Option<Self> {
        CODES
            .iter()
            .find(|(_, candidate)| *candidate == code)
            .map(|(kind, _)| *kind)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for RecordType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        RecordType::from_code(&code)
            .ok_or_else(|| de::Error::custom(format!("{code} is an unknown record type")))
    }
}

/// Decodes a `recordType` field, treating blank or unknown codes as untagged.
///
/// Tagging stamps the correct code afterwards, so a stale value in a payload
/// does not fail the decode.
pub(crate) fn lenient<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<RecordType>, D::Error> {
    let code = Option::<String>::deserialize(deserializer)?;
    Ok(code.as_deref().and_then(RecordType::from_code))
}

/// A leaf record that carries its own record type code.
pub trait Record {
    const RECORD_TYPE: RecordType;

    fn record_type(&self) -> Option<RecordType>;

    fn record_type_mut(&mut self) -> &mut Option<RecordType>;

    /// Stamps the fixed record type; repeated calls are no-ops.
    fn set_record_type(&mut self) {
        *self.record_type_mut() = Some(Self::RECORD_TYPE);
    }
}

/// Implements [`Record`] for a struct with a `record_type: Option<RecordType>` field.
macro_rules! impl_record {
    ($ty:ty, $kind:ident) => {
        impl $crate::records::Record for $ty {
            const RECORD_TYPE: $crate::records::RecordType = $crate::records::RecordType::$kind;

            fn record_type(&self) -> Option<$crate::records::RecordType> {
                self.record_type
            }

            fn record_type_mut(&mut self) -> &mut Option<$crate::records::RecordType> {
                &mut self.record_type
            }
        }
    };
}

pub(crate) use impl_record;
