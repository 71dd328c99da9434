//! `ExpoLogger` module

use core_interop::InteropFacade;

use crate::error::Result;
use crate::{ModuleName, NativeModule};

pub trait LoggerSpec: NativeModule {
    fn log_info(&self, message: &str) -> Result<()>;
    fn log_warning(&self, message: &str) -> Result<()>;
    fn log_error(&self, message: &str) -> Result<()>;
    fn get_log_count(&self) -> Result<u64>;
    fn reset_log_count(&self) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct LoggerModule {
    interop: InteropFacade,
}

impl LoggerModule {
    pub fn new(interop: InteropFacade) -> Self {
        Self { interop }
    }
}

impl NativeModule for LoggerModule {
    fn name(&self) -> ModuleName {
        ModuleName::ExpoLogger
    }
}

impl LoggerSpec for LoggerModule {
    fn log_info(&self, message: &str) -> Result<()> {
        Ok(self.interop.log_info(message)?)
    }

    fn log_warning(&self, message: &str) -> Result<()> {
        Ok(self.interop.log_warning(message)?)
    }

    fn log_error(&self, message: &str) -> Result<()> {
        Ok(self.interop.log_error(message)?)
    }

    fn get_log_count(&self) -> Result<u64> {
        Ok(self.interop.get_log_count()?)
    }

    fn reset_log_count(&self) -> Result<()> {
        Ok(self.interop.reset_log_count()?)
    }
}
