// SPDX-License-Identifier: MIT

//! Shared helper utilities reused by UI and business logic.

pub mod contrast;

/// Pick a readable text color for a hex background.
pub use contrast::foreground_for;
/// Parse `#rrggbb` strings into channel triples.
pub use contrast::parse_hex_color;
