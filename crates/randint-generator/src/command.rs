//! Command parsing for `do_command`.
//!
//! Commands arrive as a JSON map with a `command` key naming the operation
//! and any arguments alongside it:
//!
//! ```json
//! {"command": "get_config"}
//! {"command": "reseed", "seed": 7}
//! {"command": "generate_batch", "size": 10}
//! ```

use randint_core::value_to_int;
use serde_json::{Map, Value};

/// Largest batch a single `generate_batch` call may request.
pub const MAX_BATCH_SIZE: usize = 100_000;

/// Error type for command dispatch.
///
/// Command errors never alter generator state.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Missing or malformed command argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Command name is not one of the supported commands
    #[error("Command '{0}' is not implemented")]
    UnsupportedCommand(String),
}

/// A parsed, validated command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Report the current configuration
    GetConfig,
    /// Replace the generator with one seeded from `seed`
    Reseed { seed: u64 },
    /// Draw `size` samples
    GenerateBatch { size: usize },
}

impl Command {
    /// Names of all supported commands.
    pub const NAMES: [&'static str; 3] = ["get_config", "reseed", "generate_batch"];

    /// Parse a command map.
    pub fn parse(command: &Map<String, Value>) -> Result<Self, CommandError> {
        let name = match command.get("command") {
            Some(Value::String(name)) => name.as_str(),
            Some(other) => {
                return Err(CommandError::InvalidArgument(format!(
                    "'command' must be a string, got {other}"
                )))
            }
            None => {
                return Err(CommandError::InvalidArgument(
                    "Missing 'command' field in do_command".to_string(),
                ))
            }
        };

        match name {
            "get_config" => Ok(Command::GetConfig),
            "reseed" => {
                let seed = required_int(command, "reseed", "seed")?;
                let seed = u64::try_from(seed).map_err(|_| {
                    CommandError::InvalidArgument(format!(
                        "seed must be a non-negative 64-bit integer, got {seed}"
                    ))
                })?;
                Ok(Command::Reseed { seed })
            }
            "generate_batch" => {
                let size = required_int(command, "generate_batch", "size")?;
                if size < 1 || size > MAX_BATCH_SIZE as i128 {
                    return Err(batch_size_error(size));
                }
                let size = usize::try_from(size).map_err(|_| batch_size_error(size))?;
                Ok(Command::GenerateBatch { size })
            }
            other => Err(CommandError::UnsupportedCommand(other.to_string())),
        }
    }

    /// The wire name of this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::GetConfig => "get_config",
            Command::Reseed { .. } => "reseed",
            Command::GenerateBatch { .. } => "generate_batch",
        }
    }
}

pub(crate) fn batch_size_error(size: impl std::fmt::Display) -> CommandError {
    CommandError::InvalidArgument(format!(
        "batch size must be between 1 and {MAX_BATCH_SIZE}, got {size}"
    ))
}

fn required_int(
    command: &Map<String, Value>,
    command_name: &str,
    field: &str,
) -> Result<i128, CommandError> {
    match command.get(field) {
        None | Some(Value::Null) => Err(CommandError::InvalidArgument(format!(
            "{command_name} command requires '{field}' parameter"
        ))),
        Some(value) => value_to_int(value).ok_or_else(|| {
            CommandError::InvalidArgument(format!("{field} must be an integer, got {value}"))
        }),
    }
}
