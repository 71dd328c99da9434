//! `TurboCalculator` module

use core_interop::InteropFacade;
use tracing::debug;

use crate::error::Result;
use crate::{ModuleName, NativeModule};

pub trait CalculatorSpec: NativeModule {
    /// Sum of `a` and `b`. Logs the calculation through the logger module.
    fn add(&self, a: f64, b: f64) -> Result<f64>;
    fn subtract(&self, a: f64, b: f64) -> Result<f64>;
    fn multiply(&self, a: f64, b: f64) -> Result<f64>;
    /// Quotient, or `0.0` when `b` is zero.
    fn divide(&self, a: f64, b: f64) -> Result<f64>;
}

#[derive(Debug, Clone)]
pub struct CalculatorModule {
    interop: InteropFacade,
}

impl CalculatorModule {
    pub fn new(interop: InteropFacade) -> Self {
        Self { interop }
    }
}

impl NativeModule for CalculatorModule {
    fn name(&self) -> ModuleName {
        ModuleName::TurboCalculator
    }
}

impl CalculatorSpec for CalculatorModule {
    fn add(&self, a: f64, b: f64) -> Result<f64> {
        let result = self.interop.add(a, b)?;
        self.interop
            .log_info(&format!("{}: {a} + {b} = {result}", self.name()))?;
        debug!(a, b, result, "TurboCalculator -> ExpoLogger");
        Ok(result)
    }

    fn subtract(&self, a: f64, b: f64) -> Result<f64> {
        Ok(self.interop.subtract(a, b)?)
    }

    fn multiply(&self, a: f64, b: f64) -> Result<f64> {
        Ok(self.interop.multiply(a, b)?)
    }

    fn divide(&self, a: f64, b: f64) -> Result<f64> {
        Ok(self.interop.divide(a, b)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::{LogEmitter, Severity};
    use core_calculator::CalculatorService;
    use core_interop::{capability, InteropDependencies};
    use core_logger::LogStore;
    use mockall::mock;
    use mockall::predicate::eq;
    use std::sync::Arc;

    mock! {
        pub Emitter {}

        impl LogEmitter for Emitter {
            fn emit(&self, severity: Severity, text: &str);
        }
    }

    fn module_with(logger: Option<LogStore>) -> CalculatorModule {
        let mut deps =
            InteropDependencies::new().with_calculator(Arc::new(CalculatorService::new()));
        if let Some(logger) = logger {
            deps = deps.with_logger(Arc::new(logger));
        }
        CalculatorModule::new(InteropFacade::new(deps))
    }

    #[test]
    fn test_add_logs_once() {
        let mut emitter = MockEmitter::new();
        emitter
            .expect_emit()
            .with(eq(Severity::Info), eq("TurboCalculator: 10 + 5 = 15"))
            .times(1)
            .return_const(());

        let module = module_with(Some(LogStore::new(Arc::new(emitter))));
        assert_eq!(module.add(10.0, 5.0).unwrap(), 15.0);
    }

    #[test]
    fn test_add_formats_fractions() {
        let mut emitter = MockEmitter::new();
        emitter
            .expect_emit()
            .with(eq(Severity::Info), eq("TurboCalculator: 1.5 + 2.25 = 3.75"))
            .times(1)
            .return_const(());

        let module = module_with(Some(LogStore::new(Arc::new(emitter))));
        assert_eq!(module.add(1.5, 2.25).unwrap(), 3.75);
    }

    #[test]
    fn test_other_operations_do_not_log() {
        let mut emitter = MockEmitter::new();
        emitter.expect_emit().times(0);

        let module = module_with(Some(LogStore::new(Arc::new(emitter))));
        assert_eq!(module.subtract(10.0, 5.0).unwrap(), 5.0);
        assert_eq!(module.multiply(10.0, 5.0).unwrap(), 50.0);
        assert_eq!(module.divide(10.0, 5.0).unwrap(), 2.0);
        assert_eq!(module.divide(10.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_add_without_logger_is_unavailable() {
        let module = module_with(None);

        match module.add(2.0, 3.0) {
            Err(crate::ModuleError::Unavailable { capability: name, .. }) => {
                assert_eq!(name, capability::LOGGER)
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
        assert_eq!(module.multiply(2.0, 3.0).unwrap(), 6.0);
    }
}
