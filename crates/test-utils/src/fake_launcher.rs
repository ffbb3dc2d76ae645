use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use runherd::errors::Result;
use runherd::exec::{CommandLauncher, LaunchOutput};

/// What a [`FakeLauncher`] should produce for one launch: a captured result,
/// or a launch *error* (the "launcher unavailable" case).
pub type ScriptedResult = std::result::Result<LaunchOutput, String>;

/// A fake launcher that:
/// - records every launch in dispatch order
/// - replays scripted results per command string, in order
/// - falls back to a default result once a command's script is exhausted
///   (or for commands with no script at all).
pub struct FakeLauncher {
    scripts: Mutex<HashMap<String, VecDeque<ScriptedResult>>>,
    launches: Mutex<Vec<String>>,
    default: ScriptedResult,
}

impl FakeLauncher {
    /// A launcher where every unscripted command exits 0 with empty output.
    pub fn new() -> Self {
        Self::with_default(Ok(LaunchOutput {
            exit_code: 0,
            stdout: Vec::new(),
            stderr: Vec::new(),
        }))
    }

    /// A launcher with a custom fallback result for unscripted launches.
    pub fn with_default(default: ScriptedResult) -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            launches: Mutex::new(Vec::new()),
            default,
        }
    }

    /// Queue results for `command`; each launch consumes the next one.
    pub fn script(&self, command: &str, results: impl IntoIterator<Item = ScriptedResult>) {
        let mut scripts = self.scripts.lock().unwrap();
        scripts
            .entry(command.to_string())
            .or_default()
            .extend(results);
    }

    /// Every command string launched so far, in dispatch order.
    pub fn launches(&self) -> Vec<String> {
        self.launches.lock().unwrap().clone()
    }

    /// How many times `command` has been launched.
    pub fn launch_count(&self, command: &str) -> usize {
        self.launches
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == command)
            .count()
    }
}

impl Default for FakeLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLauncher for FakeLauncher {
    fn launch(
        &self,
        command: String,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchOutput>> + Send + '_>> {
        Box::pin(async move {
            self.launches.lock().unwrap().push(command.clone());

            let scripted = {
                let mut scripts = self.scripts.lock().unwrap();
                scripts
                    .get_mut(&command)
                    .and_then(|queue| queue.pop_front())
            };

            match scripted.unwrap_or_else(|| self.default.clone()) {
                Ok(output) => Ok(output),
                Err(message) => Err(anyhow::anyhow!("{message}").into()),
            }
        })
    }
}
