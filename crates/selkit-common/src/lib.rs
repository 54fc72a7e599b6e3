//! Common utilities for selkit.
//!
//! - **Warning System** - colored terminal output for non-fatal hints

pub mod warning;
