//! Process-wide façade slot for host glue that cannot thread a handle
//! through its call sites (platform module registries, WebView callbacks).

use once_cell::sync::OnceCell;
use tracing::info;

use crate::error::{InteropError, Result};
use crate::InteropFacade;

static SHARED: OnceCell<InteropFacade> = OnceCell::new();

/// Stores `facade` as the process-wide instance.
///
/// Only the first call succeeds; later calls return
/// [`InteropError::AlreadyInstalled`] and leave the installed façade in place.
/// Hosts that may race on startup should use [`shared_or_init`] instead so
/// only one façade is ever built.
pub fn install(facade: InteropFacade) -> Result<()> {
    SHARED
        .set(facade)
        .map_err(|_| InteropError::AlreadyInstalled)?;
    info!("Shared interop facade installed");
    Ok(())
}

/// Returns the installed façade, building it with `init` if the slot is
/// empty.
///
/// Concurrent callers block until the first `init` finishes, so `init` runs
/// at most once per successful install. If `init` fails the slot stays empty
/// and the error is returned to that caller.
///
/// ```no_run
/// use core_interop::{bootstrap, shared_or_init};
/// use core_runtime::config::CoreConfig;
///
/// # fn main() -> core_interop::Result<()> {
/// let config = CoreConfig::builder().build()?;
/// let facade = shared_or_init(|| bootstrap(&config))?;
/// facade.log_info("ready")?;
/// # Ok(())
/// # }
/// ```
pub fn shared_or_init<F>(init: F) -> Result<InteropFacade>
where
    F: FnOnce() -> Result<InteropFacade>,
{
    SHARED
        .get_or_try_init(|| {
            let facade = init()?;
            info!("Shared interop facade initialized");
            Ok(facade)
        })
        .cloned()
}

/// Returns a handle to the installed façade.
pub fn shared() -> Result<InteropFacade> {
    SHARED.get().cloned().ok_or_else(|| {
        InteropError::unavailable(
            "InteropFacade",
            "no shared facade has been installed; call install() during startup",
        )
    })
}

pub fn is_installed() -> bool {
    SHARED.get().is_some()
}
