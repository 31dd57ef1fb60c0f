//! Node.js process bridge

use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use chrono::NaiveDate;
use pancanga_core::{
    AstroSystem, CalendarEngine, ConversionResult, EngineError, Settings, TryQuery,
};
use tracing::{debug, trace};

use crate::wire::{Request, Response, WireResult};

/// Script run with `node -e` for every conversion
pub const BRIDGE_SCRIPT: &str = include_str!("bridge.js");

/// Exit status of the script when `require('kollavarsham')` fails
pub const MISSING_LIBRARY_EXIT: i32 = 3;

/// How to reach Node.js and the kollavarsham module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Node executable, looked up on `PATH` when relative
    pub node: PathBuf,

    /// Exported as `NODE_PATH` so `require` finds the module outside a project
    pub module_dir: Option<PathBuf>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            node: PathBuf::from("node"),
            module_dir: None,
        }
    }
}

/// [`CalendarEngine`] running each conversion in a fresh Node.js process.
///
/// Settings are kept here and sent along with every request, so the child
/// holds no state between calls.
#[derive(Debug, Clone)]
pub struct KollavarshamBridge {
    config: BridgeConfig,
    settings: Settings,
}

impl KollavarshamBridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self::with_settings(config, Settings::default())
    }

    pub fn with_settings(config: BridgeConfig, settings: Settings) -> Self {
        Self { config, settings }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    fn call(&self, request: &Request<'_>) -> Result<ConversionResult, EngineError> {
        let body = serde_json::to_vec(request)
            .map_err(|e| EngineError::malformed(format!("cannot encode request: {e}")))?;
        let node = self.config.node.display().to_string();

        let mut command = Command::new(&self.config.node);
        command
            .arg("-e")
            .arg(BRIDGE_SCRIPT)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.config.module_dir {
            command.env("NODE_PATH", dir);
        }

        debug!(%node, op = request.op(), "spawning calendar engine");
        let mut child = command
            .spawn()
            .map_err(|e| EngineError::unavailable(format!("cannot run '{node}': {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A child that exits without reading is diagnosed from its status
            match stdin.write_all(&body) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
                Err(e) => {
                    return Err(EngineError::failed(format!(
                        "cannot write request to '{node}': {e}"
                    )));
                }
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| EngineError::failed(format!("cannot wait for '{node}': {e}")))?;
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(match output.status.code() {
                Some(MISSING_LIBRARY_EXIT) => EngineError::unavailable(stderr),
                _ => EngineError::failed(format!(
                    "'{node}' exited with {}: {stderr}",
                    output.status
                )),
            });
        }
        if !stderr.is_empty() {
            debug!(%stderr, "calendar engine wrote to stderr");
        }
        trace!(stdout = %String::from_utf8_lossy(&output.stdout), "calendar engine response");

        let response: Response = serde_json::from_slice(&output.stdout)
            .map_err(|e| EngineError::malformed(e.to_string()))?;
        response.into_result().and_then(WireResult::into_conversion)
    }
}

impl CalendarEngine for KollavarshamBridge {
    fn from_gregorian_date(&mut self, date: NaiveDate) -> Result<ConversionResult, EngineError> {
        self.call(&Request::FromGregorianDate {
            settings: &self.settings,
            date: date.into(),
        })
    }

    fn to_gregorian_date_from_saka(
        &mut self,
        query: &TryQuery,
    ) -> Result<ConversionResult, EngineError> {
        self.call(&Request::ToGregorianDateFromSaka {
            settings: &self.settings,
            query,
        })
    }

    fn settings(&self) -> Result<Settings, EngineError> {
        Ok(self.settings)
    }

    fn set_latitude(&mut self, latitude: f64) -> Result<(), EngineError> {
        self.settings.latitude = latitude;
        Ok(())
    }

    fn set_longitude(&mut self, longitude: f64) -> Result<(), EngineError> {
        self.settings.longitude = longitude;
        Ok(())
    }

    fn set_system(&mut self, system: AstroSystem) -> Result<(), EngineError> {
        self.settings.system = system;
        Ok(())
    }
}
