//! Regulations, fines and warnings.
//!
//! - [`entities::RegulationSection`] / [`entities::RegulationItem`] - the data model
//! - [`catalog::regulations`] - the built-in, read-only table
//! - [`filter::filter_sections`] - case-insensitive substring search

pub mod catalog;
pub mod entities;
pub mod filter;
