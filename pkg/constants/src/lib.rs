//! Centralized constants for the ELB resolver.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod annotations;
pub mod loadbalancer;
pub mod paths;
