//! Report renderers for scan results.
//!
//! - [`terminal`] — colored table of problem entries with a summary; respects `--quiet`.
//!
//! JSON output is the [`Report`](crate::models::Report) serialized directly.

pub mod terminal;
