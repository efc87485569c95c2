//! CLI command implementations

pub mod make_view;

pub use make_view::{KindFlags, MakeViewCommand};
