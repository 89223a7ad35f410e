pub mod access;
pub mod add;
pub mod calendar;
pub mod comment;
pub mod config;
pub mod db;
pub mod del;
pub mod init;
pub mod log;
pub mod remind;
pub mod report;
pub mod status;
