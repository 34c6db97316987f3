pub mod errors;
pub(crate) mod helper_constants;
mod helper_functions;
pub mod loose;
pub mod phone_number;
pub(crate) mod phone_regexps;

pub use helper_functions::normalize;
pub use phone_number::{CodeValue, PhoneNumber};
