#![doc(test(attr(deny(warnings))))]

//! Travel Settlement offers the expense store, category classifier, and the
//! capture/import/submission flows behind the travel settlement shell.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Travel settlement tracing initialized.");
    });
}
