// SPDX-License-Identifier: MPL-2.0
//! The decision tree workbench: data entry, build orchestration, tree
//! viewport and build log.

mod canvas;
pub mod component;
pub mod example;
pub mod shortcuts;
mod view;

pub use component::{BuildId, Effect, Message, State};
pub use shortcuts::Shortcut;
pub use view::{view, ViewEnv};
