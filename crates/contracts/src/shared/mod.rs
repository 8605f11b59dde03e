pub mod error;
pub mod list;
pub mod mutation;
pub mod notification;
pub mod record;
pub mod record_store;
