//! The process-wide slot. Kept in its own test binary so no other test
//! observes the installed facade.

use bridge_traits::StaticDeviceEnvironment;
use core_interop::{bootstrap, install, is_installed, shared, InteropError};
use core_runtime::config::CoreConfig;
use std::sync::Arc;

fn facade() -> core_interop::InteropFacade {
    let config = CoreConfig::builder()
        .device_environment(Arc::new(
            StaticDeviceEnvironment::new().with_model("Simulator"),
        ))
        .build()
        .expect("config");
    bootstrap(&config).expect("bootstrap")
}

#[test]
fn shared_slot_lifecycle() {
    assert!(!is_installed());
    match shared() {
        Err(InteropError::Unavailable { capability, .. }) => {
            assert_eq!(capability, "InteropFacade")
        }
        other => panic!("expected Unavailable before install, got {other:?}"),
    }

    let first = facade();
    first.set_item("installed-by", "first").unwrap();
    install(first).unwrap();
    assert!(is_installed());

    let second = facade();
    assert!(matches!(
        install(second),
        Err(InteropError::AlreadyInstalled)
    ));

    // The first facade stays in place.
    let handle = shared().unwrap();
    assert_eq!(
        handle.get_item("installed-by").unwrap().as_deref(),
        Some("first")
    );

    handle.increment_log_count().unwrap();
    assert_eq!(shared().unwrap().get_log_count().unwrap(), 1);
}
