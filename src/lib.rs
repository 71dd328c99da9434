//! Workspace placeholder crate.
//!
//! This crate exposes the feature flags that map to the individual workspace
//! crates (`core-interop`, `native-modules`). Host applications can depend on
//! `interop-workspace` and enable `desktop-shims` to get the interop facade
//! and the module wrappers wired to the desktop bridges in one step.

#[cfg(feature = "desktop-shims")]
pub use core_interop as interop;
#[cfg(feature = "desktop-shims")]
pub use native_modules as modules;
