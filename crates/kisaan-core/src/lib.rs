//! # kisaan-core
//!
//! Core types for the Kisaan Academy client.
//!
//! This crate provides the foundational types shared across all Kisaan crates:
//! - Entity structs decoded from the remote farmer API (courses, prices, alerts, wiki)
//! - Session and presentation enums (language, severity, calculator tools)
//! - Id de-duplication for collections the API may return with repeats
//! - Localized text tables for Urdu and English
//! - The four agricultural calculators (pure functions, no I/O)
//! - Cross-cutting error types

pub mod calculators;
pub mod dedup;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod i18n;
