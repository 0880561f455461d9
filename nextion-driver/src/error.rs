//! Driver error type

use nextion_protocol::CommandError;

/// Errors returned by [`Nextion`](crate::Nextion) operations
///
/// `E` is the transport's error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The instruction could not be composed; nothing was sent
    Command(CommandError),
    /// The transport reported a failure
    Transport(E),
}

impl<E> From<CommandError> for Error<E> {
    fn from(e: CommandError) -> Self {
        Error::Command(e)
    }
}
