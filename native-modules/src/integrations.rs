//! `WebViewIntegrations` module
//!
//! Lets web content inside the WebView reach native modules the way
//! analytics and attribution SDKs do: read the logger count, run a
//! calculation, read the device model, and track named events.

use core_interop::InteropFacade;
use tracing::debug;

use crate::calculator::{CalculatorModule, CalculatorSpec};
use crate::error::Result;
use crate::{ModuleName, NativeModule};

pub trait IntegrationsSpec: NativeModule {
    fn get_logger_count(&self) -> Result<u64>;
    /// Runs `a + b` through the calculator module, which logs it.
    fn perform_calculation(&self, a: f64, b: f64) -> Result<f64>;
    fn get_device_model(&self) -> Result<String>;
    /// Logs `"WebView event: <name>"`.
    fn log_event(&self, event_name: &str) -> Result<()>;
    /// Device descriptor as a JSON object string.
    fn describe_device(&self) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct IntegrationsModule {
    interop: InteropFacade,
    calculator: CalculatorModule,
}

impl IntegrationsModule {
    pub fn new(interop: InteropFacade) -> Self {
        Self {
            calculator: CalculatorModule::new(interop.clone()),
            interop,
        }
    }
}

impl NativeModule for IntegrationsModule {
    fn name(&self) -> ModuleName {
        ModuleName::WebViewIntegrations
    }
}

impl IntegrationsSpec for IntegrationsModule {
    fn get_logger_count(&self) -> Result<u64> {
        Ok(self.interop.get_log_count()?)
    }

    fn perform_calculation(&self, a: f64, b: f64) -> Result<f64> {
        debug!(a, b, "WebViewIntegrations -> TurboCalculator");
        self.calculator.add(a, b)
    }

    fn get_device_model(&self) -> Result<String> {
        Ok(self.interop.get_device_model()?)
    }

    fn log_event(&self, event_name: &str) -> Result<()> {
        self.interop
            .log_info(&format!("WebView event: {event_name}"))?;
        Ok(())
    }

    fn describe_device(&self) -> Result<String> {
        let descriptor = self.interop.device_descriptor()?;
        Ok(serde_json::to_string(&descriptor)?)
    }
}
