//! One module per command group. Each handler takes the shared [`Context`],
//! runs its API calls and prints through `crate::render`.

pub mod auth;
pub mod dashboard;
pub mod portfolio;
pub mod transactions;

use pea_client::{ClientConfig, PeaApi};
use serde::Serialize;

use crate::CliError;

/// Everything a command needs: the typed API, the resolved config and the
/// output mode.
#[derive(Debug, Clone)]
pub struct Context {
    pub api: PeaApi,
    pub config: ClientConfig,
    pub json: bool,
}

impl Context {
    /// Print `value` as pretty JSON in `--json` mode, otherwise the text
    /// produced by `text`.
    ///
    /// # Errors
    ///
    /// Fails when `value` cannot be serialized.
    pub fn emit<T: Serialize + ?Sized>(&self, value: &T, text: impl FnOnce(&T) -> String) -> Result<(), CliError> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text(value));
        }
        Ok(())
    }
}
