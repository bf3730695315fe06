#![doc(test(attr(deny(warnings))))]

//! Image Cash Letter offers the document model of an X9.37 style check image
//! exchange file: records grouped into bundles, bundles into cash letters and
//! cash letters into a file, with control totals derived from the tree.
//!
//! ```
//! use image_cash_letter::document::{Bundle, CashLetter, File};
//! use image_cash_letter::records::{BundleHeader, CheckDetail};
//!
//! let mut bundle = Bundle::new(BundleHeader::new());
//! bundle.add_check_detail(CheckDetail::new(1_000));
//! let mut cash_letter = CashLetter::new("CL1");
//! cash_letter.add_bundle(bundle);
//!
//! let mut file = File::new();
//! file.add_cash_letter(cash_letter);
//! assert_eq!(file.cash_letters.len(), 1);
//! ```

pub mod config;
pub mod document;
pub mod errors;
pub mod records;
pub mod utils;

pub use config::{Config, ConfigManager};
pub use document::{Bundle, CashLetter, File, IdUniqueness, ImportError};
pub use errors::{ConfigError, DecodeStage, FieldError, IclError, IclResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Image cash letter tracing initialized.");
    });
}
