//! Statically known bindings to the module init entry points.
//!
//! Each optional module exposes a single zero-argument entry point that its
//! own crate defines with `#[unsafe(no_mangle)]`; linking resolves the
//! binding, nothing is looked up at run time. Enabling a module feature
//! without linking a crate that provides the entry point is a link-time
//! configuration error, which is exactly where such a mistake belongs.
//!
//! `module_hooks!` declares, per module:
//! - the hook the slot table binds: a thin call through the extern entry
//!   point when the predicate holds, an empty function otherwise (so a
//!   disabled module is compiled down to nothing and no symbol is pulled
//!   in);
//! - an upper-case `bool` const with the resolved predicate, which the
//!   slot table uses as the slot's enabled flag;
//! - under `cfg(test)`, a stub definition of the entry point itself, so
//!   the unit-test binary can stand in for the collaborating modules.

macro_rules! module_hooks {
    ($( $(#[$attr:meta])* $enabled:ident / $hook:ident => $entry:ident if $pred:meta;)+) => {
        $(
            $(#[$attr])*
            #[cfg($pred)]
            pub(crate) fn $hook() {
                unsafe extern "Rust" {
                    safe fn $entry();
                }
                $entry();
            }

            $(#[$attr])*
            #[cfg(not($pred))]
            pub(crate) fn $hook() {}

            #[cfg($pred)]
            pub(crate) const $enabled: bool = true;
            #[cfg(not($pred))]
            pub(crate) const $enabled: bool = false;
        )+

        #[cfg(test)]
        mod entry_stubs {
            $(
                #[cfg($pred)]
                #[unsafe(no_mangle)]
                fn $entry() {}
            )+
        }
    };
}

pub(crate) use module_hooks;

pub(crate) mod core_services;
pub(crate) mod late_sync;
pub(crate) mod net;
pub(crate) mod netdev;
pub(crate) mod saul;
pub(crate) mod security;
pub(crate) mod storage;
