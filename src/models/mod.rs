// SPDX-License-Identifier: MIT

//! Domain layer: pure data types shared between UI, logic, and networking.

pub mod asset;
pub mod list_field;
