use thiserror::Error;

/// Problems with the trigger configuration supplied by the user.
///
/// The `Display` output of each variant is the exact diagnostic line the
/// tool prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Input Error: Trigger configuration is incorrect length")]
    Length { len: usize },
    #[error("Input Error: Trigger configuration contains invalid character")]
    Character { position: usize, found: char },
    #[error("Input Error: No trigger configuration provided")]
    MissingArgument,
}
