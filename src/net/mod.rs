// SPDX-License-Identifier: MIT

//! HTTP collaborators: site configuration, CSRF handling, and the blocking
//! client used by command workers.

pub mod csrf;
pub mod resolver;
pub mod site;

pub use resolver::SiteClient;
pub use site::{SiteConfig, SortTab};
