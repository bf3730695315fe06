//! Leaf records of the image cash letter format. Each record validates only its
//! own fields; the document module composes them.

pub mod bundle_control;
pub mod bundle_header;
pub mod cash_letter_control;
pub mod cash_letter_header;
pub mod check_detail;
pub mod credit_item;
pub mod file_control;
pub mod file_header;
pub mod image_view;
pub mod record_type;
pub mod return_detail;
pub(crate) mod validators;

pub use bundle_control::BundleControl;
pub use bundle_header::BundleHeader;
pub use cash_letter_control::CashLetterControl;
pub use cash_letter_header::CashLetterHeader;
pub use check_detail::{
    CheckDetail, CheckDetailAddendumA, CheckDetailAddendumB, CheckDetailAddendumC,
};
pub use credit_item::CreditItem;
pub use file_control::FileControl;
pub use file_header::FileHeader;
pub use image_view::{ImageViewAnalysis, ImageViewData, ImageViewDetail};
pub use record_type::{Record, RecordType};
pub use return_detail::{
    ReturnDetail, ReturnDetailAddendumA, ReturnDetailAddendumB, ReturnDetailAddendumC,
    ReturnDetailAddendumD,
};
