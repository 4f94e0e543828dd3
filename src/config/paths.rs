//! Filesystem locations used by the launcher.

pub mod xdg_root;
