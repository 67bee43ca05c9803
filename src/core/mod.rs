//! Core conversion building blocks: the word tables, the three-digit group
//! renderer, the scale assembler and digit grouping for display. These are
//! consumed by the high-level `api` module.
pub mod digits;
pub mod group;
pub mod lexicon;
pub mod params;
pub mod scale;
