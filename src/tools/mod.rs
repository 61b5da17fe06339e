//! The tools module provides helper functions for the huffcode library.
//!
//! The tools are:
//! - cli: Command line interface for the huffcode binary.
//! - freq_count: Frequency tables, counted from symbols, bytes or text.
//!
pub mod cli;
pub mod freq_count;
