pub mod config;
pub mod locale;
pub mod platform;
pub mod storage;
