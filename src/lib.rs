// SPDX-License-Identifier: MPL-2.0
//! `dtb_client` is a desktop client for a remote decision tree builder,
//! built with the Iced GUI framework.
//!
//! Users enter attribute names and comma-separated training rows, preview
//! them as a table, send them to the build server and inspect the returned
//! tree image with pan and zoom. Every step is recorded in a build log.

pub mod app;
pub mod build;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod storage;
pub mod ui;

#[cfg(test)]
mod test_utils;
