//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split on blank lines
//!    into trimmed block strings
//!
//! 2. **Classification** (`classify`): each block gets exactly one
//!    `BlockType`, decided by a fixed precedence list
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: block-specific types with owned markers (Heading, CodeFence, BlockQuote, lists)
//! - **`segment`**: `segment()` blank-line splitter
//! - **`classify`**: `classify()` precedence rules
//!
//! ## Key Invariants
//!
//! - Classification never fails: anything unrecognised is a paragraph
//! - Fenced code blocks are raw zones: no inline parsing inside

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::classify;
pub use segment::segment;
pub use types::BlockType;
