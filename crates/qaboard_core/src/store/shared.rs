//! Process-wide store instance.
//!
//! # Invariants
//! - The first call to [`get_instance`] builds the store; later calls return
//!   the same instance and drop their seed.
//! - All access goes through one `Mutex`, so calls are serialized.
//!
//! Prefer constructing [`Application`] directly and passing it down from
//! the bootstrap code; this module exists for callers that need a global.

use crate::model::seed::SeedData;
use crate::store::application::Application;
use log::debug;
use once_cell::sync::OnceCell;
use std::sync::Mutex;

static APPLICATION: OnceCell<Mutex<Application>> = OnceCell::new();

/// Returns the process-wide store, building it from `seed` on first use.
pub fn get_instance(seed: SeedData) -> &'static Mutex<Application> {
    if let Some(existing) = APPLICATION.get() {
        debug!("event=store_get module=store status=ok source=existing");
        return existing;
    }
    APPLICATION.get_or_init(|| Mutex::new(Application::new(seed)))
}

/// Returns the process-wide store if it has been built.
pub fn try_instance() -> Option<&'static Mutex<Application>> {
    APPLICATION.get()
}
