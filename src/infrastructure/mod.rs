//! Infrastructure layer - services, stores and adapters

pub mod account;
pub mod logging;
pub mod mail;
pub mod registration;
pub mod session;
pub mod store;
pub mod team;
pub mod token;
