//! The file → cash letter → bundle hierarchy, control derivation and
//! cross-entity validation.

pub mod bundle;
pub mod cash_letter;
pub mod external;
pub mod file;
pub mod totals;
pub mod validation;

pub use bundle::Bundle;
pub use cash_letter::CashLetter;
pub use external::{decode_external, merge_external, ExternalRoot, ImportError};
pub use file::File;
pub use totals::FileTotals;
pub use validation::{cash_letter_id_unique, IdUniqueness};
