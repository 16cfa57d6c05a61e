//! Command handlers for matpath
pub mod route;
