//! Source composition for [`LauncherConfig`](crate::config::LauncherConfig).

pub(crate) mod policy;
pub mod service;
