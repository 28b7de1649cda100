//! Filesystem helpers.

pub mod atomic;
