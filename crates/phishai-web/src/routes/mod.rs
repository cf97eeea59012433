//! Route handlers.

pub mod health;
pub mod phish;
pub mod sms;
