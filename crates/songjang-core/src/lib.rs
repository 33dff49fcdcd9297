//! Core library for turning pasted order text into shipment records.
//!
//! This crate provides:
//! - A heuristic parser for free-form Korean order text (phones, recipient,
//!   address, postal code, product, quantity, shipping term)
//! - The fixed-schema `OrderRecord` handed to spreadsheet/export collaborators
//! - Dispatch-note renderers for the courier and sheet layouts
//! - JSON configuration for extending keyword lists and render aliases

pub mod error;
pub mod models;
pub mod order;
pub mod render;

pub use error::{Result, SongjangError};
pub use models::config::{ExtractionConfig, ProductAlias, RenderConfig, SongjangConfig};
pub use models::order::{OrderRecord, ShippingTerm};
pub use order::{split_blocks, BlockMode, ExtractionResult, OrderParser, OrderTextParser};
