//! Email communication module

pub mod email_address;
pub mod errors;
pub mod mailer;
