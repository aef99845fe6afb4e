#![doc(test(attr(deny(warnings))))]

//! Flow YNAB surfaces a user's YNAB budgets as selectable launcher results
//! and remembers the active budget across invocations.

pub mod api;
pub mod errors;
pub mod plugin;
pub mod remedy;
pub mod resolve;
pub mod state;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Flow YNAB tracing initialized.");
    });
}
