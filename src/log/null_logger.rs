//! Backend used when the `logging` feature is off: nothing is ever written,
//! but the public configuration API keeps working.

use crate::log::LogConfiguration;

impl LogConfiguration {
    pub(in crate::log) fn set_config(&mut self) {
        // No logger installed; only the level filter is tracked.
        log::set_max_level(self.global_log_level);
    }
}
