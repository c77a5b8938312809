//! Character inventory of HTML documents, e.g. to drive font subsetting.
//!
//! The inventory is the sorted set of distinct chars from a fixed [base alphabet](BASE_ALPHABET)
//! and the text of input documents after removing `<script>` / `<style>` blocks, tags
//! and whitespace. See [`run()`] for the entire pipeline.

#![doc(html_root_url = "https://docs.rs/char-inventory/0.1.0")]

mod config;
mod errors;
mod inventory;
mod pipeline;
mod source;
mod strip;

pub use crate::{
    config::{InventoryConfig, BASE_ALPHABET, DEFAULT_INPUTS, DEFAULT_OUTPUT},
    errors::{Error, ErrorKind},
    inventory::CharInventory,
    pipeline::{collect, run, InventoryReport, SourceOutcome, SourceReport},
    source::decode_permissive,
    strip::strip_markup,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
