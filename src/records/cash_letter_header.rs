use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::IclResult;

use super::record_type::impl_record;
use super::validators::{self, check_record_type};
use super::RecordType;

const KIND: RecordType = RecordType::CashLetterHeader;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CashLetterHeader {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::record_type::lenient"
    )]
    pub record_type: Option<RecordType>,
    pub collection_type_indicator: String,
    pub destination_routing_number: String,
    #[serde(rename = "eceInstitutionRoutingNumber")]
    pub ece_institution_routing_number: String,
    pub cash_letter_business_date: Option<DateTime<Utc>>,
    pub cash_letter_creation_date: Option<DateTime<Utc>>,
    pub record_type_indicator: String,
    pub documentation_type_indicator: String,
    #[serde(rename = "cashLetterID")]
    pub cash_letter_id: String,
    pub originator_contact_name: String,
    pub originator_contact_phone_number: String,
    pub fed_work_type: String,
    pub returns_indicator: String,
    pub user_field: String,
}

impl_record!(CashLetterHeader, CashLetterHeader);

impl Default for CashLetterHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl CashLetterHeader {
    pub fn new() -> Self {
        Self {
            record_type: Some(KIND),
            collection_type_indicator: String::new(),
            destination_routing_number: String::new(),
            ece_institution_routing_number: String::new(),
            cash_letter_business_date: None,
            cash_letter_creation_date: None,
            record_type_indicator: String::new(),
            documentation_type_indicator: String::new(),
            cash_letter_id: String::new(),
            originator_contact_name: String::new(),
            originator_contact_phone_number: String::new(),
            fed_work_type: String::new(),
            returns_indicator: String::new(),
            user_field: String::new(),
        }
    }

    pub fn validate(&self) -> IclResult<()> {
        check_record_type(self)?;
        validators::required(KIND, "CashLetterID", &self.cash_letter_id)?;
        validators::alphanumeric(KIND, "CashLetterID", &self.cash_letter_id)?;
        validators::one_of(
            KIND,
            "CollectionTypeIndicator",
            &self.collection_type_indicator,
            &["00", "01", "02", "03", "04", "05", "06", "20"],
        )?;
        validators::routing_number(
            KIND,
            "DestinationRoutingNumber",
            &self.destination_routing_number,
        )?;
        validators::routing_number(
            KIND,
            "ECEInstitutionRoutingNumber",
            &self.ece_institution_routing_number,
        )?;
        validators::one_of(
            KIND,
            "RecordTypeIndicator",
            &self.record_type_indicator,
            &["N", "E", "I", "F"],
        )?;
        validators::alphanumeric(KIND, "OriginatorContactName", &self.originator_contact_name)?;
        validators::numeric(
            KIND,
            "OriginatorContactPhoneNumber",
            &self.originator_contact_phone_number,
        )?;
        Ok(())
    }
}
