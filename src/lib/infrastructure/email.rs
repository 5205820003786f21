//! Email infrastructure

pub mod smtp;
