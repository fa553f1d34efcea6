//! storefront-core
//!
//! Domain types, configuration and collaborator traits shared by the
//! catalog search engine and its front ends.

#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod traits;
pub mod types;
