//! bladegen CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod scaffold;
pub mod stubs;

pub use scaffold::{
    DerivedNames, GeneratedView, NameHelpers, ScaffoldConfig, ViewGenerator, ViewKind,
    ViewRequest, WriteOutcome,
};
