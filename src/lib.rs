//! Signup form (name / email / password) with a pure reducer, pluggable
//! validation and a terminal front end.

pub mod cli;
pub mod config;
pub mod form;
pub mod logging;
pub mod script;
pub mod ui;
