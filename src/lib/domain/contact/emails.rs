//! Contact email templates

pub mod notification;
