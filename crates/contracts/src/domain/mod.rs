//! Entities managed from the dashboard.

pub mod common;
pub mod currency;
pub mod customer;
pub mod supplier;
pub mod vendor;
pub mod vessel;
