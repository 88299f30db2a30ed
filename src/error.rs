use thiserror::Error;

/// Static wiring and configuration mistakes.
///
/// Everything that can go wrong while the user is actually dragging is
/// clamped instead; these are the only failures surfaced to the host.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("a scrollable content element is already attached; only one is supported")]
    ContentAlreadyAttached,
    #[error("invalid {name}: {value}")]
    InvalidDimension { name: &'static str, value: f32 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
