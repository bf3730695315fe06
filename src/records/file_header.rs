use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{IclError, IclResult};

use super::record_type::impl_record;
use super::validators::{self, check_record_type};
use super::RecordType;

const KIND: RecordType = RecordType::FileHeader;

/// Identifies the exchange, sender and receiver of an image cash letter file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileHeader {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::record_type::lenient"
    )]
    pub record_type: Option<RecordType>,
    pub standard_level: String,
    pub test_file_indicator: String,
    pub immediate_destination: String,
    pub immediate_origin: String,
    pub file_creation_date: Option<DateTime<Utc>>,
    pub file_creation_time: Option<DateTime<Utc>>,
    pub resend_indicator: String,
    pub immediate_destination_name: String,
    pub immediate_origin_name: String,
    #[serde(rename = "fileIDModifier")]
    pub file_id_modifier: String,
    pub country_code: String,
    pub user_field: String,
    pub companion_document_indicator: String,
}

impl_record!(FileHeader, FileHeader);

impl Default for FileHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileHeader {
    /// A header template for a production DSTU X9.37 file.
    pub fn new() -> Self {
        Self {
            record_type: Some(KIND),
            standard_level: "35".into(),
            test_file_indicator: "T".into(),
            immediate_destination: String::new(),
            immediate_origin: String::new(),
            file_creation_date: None,
            file_creation_time: None,
            resend_indicator: "N".into(),
            immediate_destination_name: String::new(),
            immediate_origin_name: String::new(),
            file_id_modifier: String::new(),
            country_code: String::new(),
            user_field: String::new(),
            companion_document_indicator: String::new(),
        }
    }

    pub fn validate(&self) -> IclResult<()> {
        check_record_type(self)?;
        validators::required(KIND, "StandardLevel", &self.standard_level)?;
        validators::one_of(
            KIND,
            "StandardLevel",
            &self.standard_level,
            &["03", "30", "35"],
        )?;
        validators::required(KIND, "TestFileIndicator", &self.test_file_indicator)?;
        validators::one_of(KIND, "TestFileIndicator", &self.test_file_indicator, &["T", "P"])?;
        validators::required(KIND, "ImmediateDestination", &self.immediate_destination)?;
        validators::routing_number(KIND, "ImmediateDestination", &self.immediate_destination)?;
        validators::required(KIND, "ImmediateOrigin", &self.immediate_origin)?;
        validators::routing_number(KIND, "ImmediateOrigin", &self.immediate_origin)?;
        if self.file_creation_date.is_none() {
            return Err(IclError::record(
                KIND,
                "FileCreationDate",
                "",
                validators::MSG_REQUIRED,
            ));
        }
        validators::one_of(KIND, "ResendIndicator", &self.resend_indicator, &["Y", "N"])?;
        validators::alphanumeric(
            KIND,
            "ImmediateDestinationName",
            &self.immediate_destination_name,
        )?;
        validators::alphanumeric(KIND, "ImmediateOriginName", &self.immediate_origin_name)?;
        validators::alphanumeric(KIND, "FileIDModifier", &self.file_id_modifier)?;
        validators::alphanumeric(KIND, "CountryCode", &self.country_code)?;
        Ok(())
    }
}
