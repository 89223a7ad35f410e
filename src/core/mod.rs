pub mod binning;
pub mod calendar;
pub mod metrics;
pub mod permissions;
pub mod sessions;
