//! Core service bindings: entropy, timers, scheduler bookkeeping.

use super::module_hooks;

module_hooks! {
    RANDOM / random => auto_init_random if feature = "auto-init-random";
    XTIMER / xtimer => xtimer_init if feature = "auto-init-xtimer";
    SCHEDSTATISTICS / schedstatistics => init_schedstatistics if feature = "schedstatistics";
    EVENT_THREAD / event_thread => auto_init_event_thread if feature = "event-thread";
    MCI / mci => mci_initialize if feature = "mci";
    PROFILING / profiling => profiling_init if feature = "profiling";
}
