//! View scaffolding: name derivation and stub generation

pub mod generator;
pub mod helpers;

pub use generator::{
    DerivedNames, GeneratedView, ScaffoldConfig, ViewGenerator, ViewKind, ViewRequest,
    WriteOutcome,
};
pub use helpers::NameHelpers;
