use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::IclResult;

use super::record_type::impl_record;
use super::validators::{self, check_record_type};
use super::RecordType;

const KIND: RecordType = RecordType::BundleHeader;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BundleHeader {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::record_type::lenient"
    )]
    pub record_type: Option<RecordType>,
    pub collection_type_indicator: String,
    pub destination_routing_number: String,
    #[serde(rename = "eceInstitutionRoutingNumber")]
    pub ece_institution_routing_number: String,
    pub bundle_business_date: Option<DateTime<Utc>>,
    pub bundle_creation_date: Option<DateTime<Utc>>,
    #[serde(rename = "bundleID")]
    pub bundle_id: String,
    pub bundle_sequence_number: String,
    pub cycle_number: String,
    pub user_field: String,
}

impl_record!(BundleHeader, BundleHeader);

impl Default for BundleHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl BundleHeader {
    pub fn new() -> Self {
        Self {
            record_type: Some(KIND),
            collection_type_indicator: String::new(),
            destination_routing_number: String::new(),
            ece_institution_routing_number: String::new(),
            bundle_business_date: None,
            bundle_creation_date: None,
            bundle_id: String::new(),
            bundle_sequence_number: String::new(),
            cycle_number: String::new(),
            user_field: String::new(),
        }
    }

    pub fn validate(&self) -> IclResult<()> {
        check_record_type(self)?;
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
        validators::alphanumeric(KIND, "BundleID", &self.bundle_id)?;
        validators::numeric(KIND, "BundleSequenceNumber", &self.bundle_sequence_number)?;
        validators::alphanumeric(KIND, "CycleNumber", &self.cycle_number)?;
        Ok(())
    }
}
