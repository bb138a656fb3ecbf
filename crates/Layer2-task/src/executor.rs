//! Execution Engine - 검증된 명령 배치의 순차 실행
//!
//! Two strategies, chosen by platform family:
//! - Batch-script mode (Windows): one generated .bat with fail-fast
//!   errorlevel checks, executed as a single child process
//! - Sequential mode (Unix-like): independent `sh -c` processes with
//!   continue/stop prompting after each failure
//!
//! Commands run strictly in list order; there is no concurrency and no
//! per-command timeout (a hung command blocks the pipeline).

use crate::confirm::Confirmation;
use clio_core::{Command, CommandBatch};
use clio_foundation::{Error, PlatformFamily, Result};
use std::io::Write;
use std::process::Stdio;

/// Per-command execution outcome, consumed within one engine run
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub command: String,
    /// None when the process never launched or was killed by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    /// False only when the process could not be launched at all
    pub launched: bool,
    /// Whether the run proceeded past this command
    pub continued: bool,
}

impl ExecutionResult {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs a validated command batch against the host shell
pub struct ExecutionEngine {
    platform: PlatformFamily,
    confirmation: Box<dyn Confirmation>,
}

impl ExecutionEngine {
    pub fn new(confirmation: Box<dyn Confirmation>) -> Self {
        Self {
            platform: PlatformFamily::detect(),
            confirmation,
        }
    }

    /// 실행 모드를 명시적으로 지정 (테스트용)
    pub fn with_platform(mut self, platform: PlatformFamily) -> Self {
        self.platform = platform;
        self
    }

    /// Execute the batch. Batches with an error or no commands are a no-op
    /// that reports why.
    pub fn execute(&self, batch: &CommandBatch) -> Result<()> {
        if let Some(error) = &batch.error {
            println!("Error: {error}");
            return Ok(());
        }

        if batch.commands.is_empty() {
            println!("No commands to execute.");
            return Ok(());
        }

        // Informational only - the yes/no gate before execution belongs to
        // the caller
        if batch.any_confirm_required() {
            println!("\nNote: Some commands carry risk and require confirmation.");
        }

        match self.platform {
            PlatformFamily::Windows => self.run_batch_script(&batch.commands),
            PlatformFamily::Linux => {
                self.run_sequential(&batch.commands);
                Ok(())
            }
        }
    }

    /// Batch-script mode: one temporary .bat, fail-fast, guaranteed cleanup
    fn run_batch_script(&self, commands: &[Command]) -> Result<()> {
        let script = render_batch_script(commands);

        // NamedTempFile deletes the script on drop, on every exit path
        let mut file = tempfile::Builder::new()
            .prefix("clio-")
            .suffix(".bat")
            .tempfile()?;
        file.write_all(script.as_bytes())?;
        file.flush()?;

        tracing::debug!(path = %file.path().display(), "running batch script");

        let status = std::process::Command::new("cmd")
            .arg("/C")
            .arg(file.path())
            .status()?;

        if status.success() {
            println!("Commands execution completed.");
        } else {
            println!(
                "Commands execution halted with error code {}.",
                status.code().unwrap_or(-1)
            );
        }

        Ok(())
    }

    /// Sequential mode: independent child processes with per-failure
    /// continue/stop prompting
    fn run_sequential(&self, commands: &[Command]) -> Vec<ExecutionResult> {
        let mut results = Vec::with_capacity(commands.len());

        for command in commands {
            println!("\nExecuting: {}", command.command);

            let output = std::process::Command::new("sh")
                .arg("-c")
                .arg(&command.command)
                .stdin(Stdio::null())
                .output();

            let mut result = match output {
                Ok(output) => ExecutionResult {
                    command: command.command.clone(),
                    exit_code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                    launched: true,
                    continued: true,
                },
                Err(e) => {
                    // Failure to launch counts as failure for continuation
                    tracing::warn!(command = %command.command, "failed to launch: {e}");
                    ExecutionResult {
                        command: command.command.clone(),
                        exit_code: None,
                        stdout: String::new(),
                        stderr: e.to_string(),
                        launched: false,
                        continued: true,
                    }
                }
            };

            if !result.stdout.is_empty() {
                println!("{}", result.stdout);
            }

            if result.succeeded() {
                println!("Command executed successfully.");
            } else {
                match result.exit_code {
                    Some(code) => {
                        tracing::warn!(
                            "{}",
                            Error::Execution {
                                command: result.command.clone(),
                                code,
                            }
                        );
                        println!("Command failed with error code {code}");
                    }
                    // Launched but no exit code means the child was killed
                    // by a signal
                    None if result.launched => println!("Command terminated by signal."),
                    None => println!("Error executing command: {}", result.stderr),
                }
                if result.exit_code.is_some() && !result.stderr.is_empty() {
                    println!("Error details: {}", result.stderr);
                }

                if !self
                    .confirmation
                    .confirm("Continue with remaining commands?")
                {
                    println!("Execution stopped.");
                    result.continued = false;
                    results.push(result);
                    break;
                }
            }

            results.push(result);
        }

        results
    }
}

/// Render the fail-fast batch script. Pure function - unit tested without
/// touching cmd.exe.
pub fn render_batch_script(commands: &[Command]) -> String {
    let mut lines = vec!["@echo off".to_string()];

    for command in commands {
        lines.push(format!("echo Executing: {}", command.command));
        lines.push(command.command.clone());
        lines.push("if %errorlevel% neq 0 (".to_string());
        lines.push("  echo Command failed with error %errorlevel%".to_string());
        lines.push("  exit /b %errorlevel%".to_string());
        lines.push(")".to_string());
    }

    lines.join("\r\n")
}
