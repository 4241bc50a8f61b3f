// SPDX-License-Identifier: MIT

//! Pure business logic shared between UI and command workers.

pub mod form;
