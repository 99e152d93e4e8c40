pub mod cell;
pub mod contact_set;
pub mod phone;

pub use cell::CellValue;
pub use contact_set::{ContactSet, OutputOrder};
pub use phone::{
    is_header_label, normalize_phone, normalize_phone_text, CanonicalPhone, Rejection,
    COUNTRY_PREFIX, MIN_DIGITS,
};
