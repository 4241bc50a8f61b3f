// SPDX-License-Identifier: MIT

//! Reusable egui components structured for MVU-style updates.

pub mod assets;
pub mod browse;
pub mod list_field;
