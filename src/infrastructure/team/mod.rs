//! Team formation services

mod registry;

pub use registry::TeamRegistry;
