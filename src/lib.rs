// src/lib.rs

//! fightstats Library
//!
//! Scrapes the UFC rankings page, fetches every ranked athlete's profile and
//! flattens each profile into a string-keyed record ready for export.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
