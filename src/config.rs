//! Client launch configuration.
//!
//! A `Client` describes one client process to be spawned under the
//! compositor: the command line handed to the engine's launcher and
//! whether the process runs privileged. The value is immutable; the
//! compositor reads it once per launch call and never stores it.

/// Launch request for a single client process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    command: Vec<u8>,
    run_as_root: bool,
}

impl Client {
    /// Build a launch request from a command-line string.
    pub fn new(command: impl Into<String>, run_as_root: bool) -> Self {
        Self {
            command: command.into().into_bytes(),
            run_as_root,
        }
    }

    /// Build a launch request from raw command bytes.
    ///
    /// Command lines are forwarded to the engine as bytes; they are not
    /// required to be valid UTF-8.
    pub fn from_bytes(command: Vec<u8>, run_as_root: bool) -> Self {
        Self {
            command,
            run_as_root,
        }
    }

    /// The command line as the byte sequence handed to the engine.
    pub fn command(&self) -> &[u8] {
        &self.command
    }

    /// Lossy UTF-8 view of the command line, for logging.
    pub fn command_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.command)
    }

    /// Whether the client process runs privileged.
    pub fn run_as_root(&self) -> bool {
        self.run_as_root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_string() {
        let client = Client::new("/bin/shell", false);
        assert_eq!(client.command(), b"/bin/shell");
        assert!(!client.run_as_root());
    }

    #[test]
    fn test_client_from_bytes() {
        let client = Client::from_bytes(vec![0x2f, 0x62, 0x69, 0x6e, 0xff], true);
        assert_eq!(client.command().len(), 5);
        assert!(client.run_as_root());
        // Lossy view replaces the invalid byte rather than failing
        assert!(client.command_lossy().starts_with("/bin"));
    }
}
