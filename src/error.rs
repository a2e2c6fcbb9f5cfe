//! Error types for the pixel driver

use core::fmt;

/// Driver error, `E` is the pulse generator's error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Configuration rejected before touching hardware
    InvalidConfig(&'static str),
    /// Channel configuration failed
    Configure(E),
    /// Channel could not be claimed (in use, bad pin, ...)
    Install(E),
    /// Translator registration failed
    Translator(E),
    /// Channel could not be released
    Uninstall(E),
    /// Hardware refused the frame
    Transmit(E),
    /// Driver has already been released
    Released,
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(reason) => write!(f, "Invalid configuration: {}", reason),
            Error::Configure(e) => write!(f, "Channel configuration failed: {:?}", e),
            Error::Install(e) => write!(f, "Channel install failed: {:?}", e),
            Error::Translator(e) => write!(f, "Translator registration failed: {:?}", e),
            Error::Uninstall(e) => write!(f, "Channel uninstall failed: {:?}", e),
            Error::Transmit(e) => write!(f, "Transmit failed: {:?}", e),
            Error::Released => write!(f, "Driver released"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

pub type Result<T, E> = core::result::Result<T, Error<E>>;
