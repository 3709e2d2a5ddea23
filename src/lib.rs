//! Patternbook: a terminal catalog of design patterns.
//!
//! - [`core`]: catalog engine, tab state, reducer, configuration
//! - [`patterns`]: the built-in pages
//! - [`tui`]: ratatui front end

pub mod core;
pub mod patterns;
pub mod tui;

#[cfg(test)]
pub mod test_support;
