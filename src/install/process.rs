//! External command execution

use std::fmt;
use std::process::Stdio;

#[cfg(test)]
use mockall::automock;
use tracing::debug;

/// A program invocation: executable, arguments and extra environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, name: &str, value: &str) -> Self {
        self.env.push((name.to_string(), value.to_string()));
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Trait for running external programs
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs the command to completion
    ///
    /// # Returns
    /// * `Ok(Some(code))` - The exit code
    /// * `Ok(None)` - The process was terminated by a signal
    /// * `Err(io::Error)` - The process could not be started
    async fn run(&self, command: &CommandSpec) -> std::io::Result<Option<i32>>;
}

/// Runs commands with tokio, sharing this process's stdout and stderr
#[derive(Debug, Default)]
pub struct TokioCommandRunner;

#[async_trait::async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, command: &CommandSpec) -> std::io::Result<Option<i32>> {
        debug!("Running {}", command);

        let status = tokio::process::Command::new(&command.program)
            .args(&command.args)
            .envs(command.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        Ok(status.code())
    }
}
