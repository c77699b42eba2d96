//! Data layer for the DataPrep spreadsheet editor.
//!
//! Everything here is plain Rust with no DOM access so it can be shared by the
//! Yew frontend and exercised by native tests:
//!
//! - [`decode`] turns uploaded bytes into a row-major sheet.
//! - [`import`] normalizes that sheet into identity-keyed columns and rows.
//! - [`store`] holds the session and applies the user's edits.
//! - [`preview`] windows the visible columns for the table view.
//! - [`export`] re-keys rows by header text and serializes CSV or JSON.

pub mod config;
pub mod decode;
pub mod error;
pub mod export;
pub mod import;
pub mod model;
pub mod preview;
pub mod store;
