//! forgepush builds a container image from a CI checkout and
//! publishes it to the GitHub Package Registry.
//!
//! The image reference is resolved from a layered set of explicit
//! inputs and ambient CI context (see [`reference`]), then a linear
//! pipeline of external operations runs it to completion (see
//! [`commands::build`]).

pub mod build_args;
pub mod commands;
pub mod reference;
