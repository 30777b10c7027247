//! Builtin providers shipped with the core.
pub mod io;
