//! Image view records (types 50, 52 and 54) attached to check and return details.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{IclError, IclResult};

use super::record_type::impl_record;
use super::validators::{self, check_record_type};
use super::RecordType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageViewDetail {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::record_type::lenient"
    )]
    pub record_type: Option<RecordType>,
    pub image_indicator: u8,
    pub image_creator_routing_number: String,
    pub image_creator_date: Option<DateTime<Utc>>,
    pub image_view_format_indicator: String,
    pub image_view_compression_algorithm: String,
    pub image_view_data_size: String,
    pub view_side_indicator: u8,
    pub view_descriptor: String,
    pub digital_signature_indicator: u8,
}

impl_record!(ImageViewDetail, ImageViewDetail);

impl Default for ImageViewDetail {
    fn default() -> Self {
        Self {
            record_type: Some(RecordType::ImageViewDetail),
            image_indicator: 0,
            image_creator_routing_number: String::new(),
            image_creator_date: None,
            image_view_format_indicator: String::new(),
            image_view_compression_algorithm: String::new(),
            image_view_data_size: String::new(),
            view_side_indicator: 0,
            view_descriptor: String::new(),
            digital_signature_indicator: 0,
        }
    }
}

impl ImageViewDetail {
    pub fn validate(&self) -> IclResult<()> {
        const KIND: RecordType = RecordType::ImageViewDetail;
        check_record_type(self)?;
        indicator(KIND, "ImageIndicator", self.image_indicator, 2)?;
        validators::routing_number(
            KIND,
            "ImageCreatorRoutingNumber",
            &self.image_creator_routing_number,
        )?;
        indicator(KIND, "ViewSideIndicator", self.view_side_indicator, 1)?;
        indicator(
            KIND,
            "DigitalSignatureIndicator",
            self.digital_signature_indicator,
            1,
        )?;
        validators::numeric(KIND, "ImageViewDataSize", &self.image_view_data_size)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageViewData {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::record_type::lenient"
    )]
    pub record_type: Option<RecordType>,
    #[serde(rename = "eceInstitutionRoutingNumber")]
    pub ece_institution_routing_number: String,
    pub bundle_business_date: Option<DateTime<Utc>>,
    pub cycle_number: String,
    #[serde(rename = "eceInstitutionItemSequenceNumber")]
    pub ece_institution_item_sequence_number: String,
    pub clipping_origin: u8,
    pub length_image_reference_key: String,
    pub image_reference_key: String,
    pub length_image_data: String,
    pub image_data: Vec<u8>,
}

impl_record!(ImageViewData, ImageViewData);

impl Default for ImageViewData {
    fn default() -> Self {
        Self {
            record_type: Some(RecordType::ImageViewData),
            ece_institution_routing_number: String::new(),
            bundle_business_date: None,
            cycle_number: String::new(),
            ece_institution_item_sequence_number: String::new(),
            clipping_origin: 0,
            length_image_reference_key: String::new(),
            image_reference_key: String::new(),
            length_image_data: String::new(),
            image_data: Vec::new(),
        }
    }
}

impl ImageViewData {
    pub fn validate(&self) -> IclResult<()> {
        const KIND: RecordType = RecordType::ImageViewData;
        check_record_type(self)?;
        validators::routing_number(
            KIND,
            "ECEInstitutionRoutingNumber",
            &self.ece_institution_routing_number,
        )?;
        validators::alphanumeric(KIND, "CycleNumber", &self.cycle_number)?;
        indicator(KIND, "ClippingOrigin", self.clipping_origin, 4)?;
        validators::numeric(
            KIND,
            "LengthImageReferenceKey",
            &self.length_image_reference_key,
        )?;
        validators::numeric(KIND, "LengthImageData", &self.length_image_data)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageViewAnalysis {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::record_type::lenient"
    )]
    pub record_type: Option<RecordType>,
    pub global_image_quality: u8,
    pub global_image_usability: u8,
    pub imaging_bank_specific_test: u8,
    pub partial_image: u8,
    pub excessive_image_skew: u8,
    pub piggyback_image: u8,
    pub too_light_or_too_dark: u8,
    pub streaks_and_or_bands: u8,
    pub below_minimum_image_size: u8,
    pub exceeds_maximum_image_size: u8,
}

impl_record!(ImageViewAnalysis, ImageViewAnalysis);

impl Default for ImageViewAnalysis {
    fn default() -> Self {
        Self {
            record_type: Some(RecordType::ImageViewAnalysis),
            global_image_quality: 0,
            global_image_usability: 0,
            imaging_bank_specific_test: 0,
            partial_image: 0,
            excessive_image_skew: 0,
            piggyback_image: 0,
            too_light_or_too_dark: 0,
            streaks_and_or_bands: 0,
            below_minimum_image_size: 0,
            exceeds_maximum_image_size: 0,
        }
    }
}

impl ImageViewAnalysis {
    pub fn validate(&self) -> IclResult<()> {
        const KIND: RecordType = RecordType::ImageViewAnalysis;
        check_record_type(self)?;
        let tests = [
            ("GlobalImageQuality", self.global_image_quality),
            ("GlobalImageUsability", self.global_image_usability),
            ("ImagingBankSpecificTest", self.imaging_bank_specific_test),
            ("PartialImage", self.partial_image),
            ("ExcessiveImageSkew", self.excessive_image_skew),
            ("PiggybackImage", self.piggyback_image),
            ("TooLightOrTooDark", self.too_light_or_too_dark),
            ("StreaksAndOrBands", self.streaks_and_or_bands),
            ("BelowMinimumImageSize", self.below_minimum_image_size),
            ("ExceedsMaximumImageSize", self.exceeds_maximum_image_size),
        ];
        for (field, value) in tests {
            indicator(KIND, field, value, 2)?;
        }
        Ok(())
    }
}

fn indicator(kind: RecordType, field: &str, value: u8, max: u8) -> IclResult<()> {
    if value > max {
        return Err(IclError::record(kind, field, value, "is invalid"));
    }
    Ok(())
}
