use arboard::Clipboard;
use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to open clipboard")]
    ClipboardInit(#[source] arboard::Error),

    #[error("failed to write clipboard")]
    ClipboardAccess(#[source] arboard::Error),

    #[error("failed to hand clipboard over to a background owner")]
    Handover(#[source] std::io::Error),
}

/// Replaces the contents of a clipboard with text.
pub trait ClipboardSink {
    fn copy_to_clipboard(&self, text: &str) -> Result<(), Error>;
}

/// The OS clipboard, opened fresh for every write.
///
/// On Linux the selection only lives as long as its owner, so after the write
/// succeeds a detached copy of this executable takes ownership and serves the
/// text until another program replaces it. See [`owner`].
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy_to_clipboard(&self, text: &str) -> Result<(), Error> {
        let mut clipboard = Clipboard::new().map_err(Error::ClipboardInit)?;
        clipboard.set_text(text).map_err(Error::ClipboardAccess)?;
        debug!("wrote {} bytes to clipboard", text.len());

        #[cfg(target_os = "linux")]
        owner::spawn(text).map_err(Error::Handover)?;

        Ok(())
    }
}

#[cfg(target_os = "linux")]
pub mod owner {
    //! Background process that keeps the clipboard selection alive after
    //! `webclip` exits. It is this same executable, started with
    //! [`OWNER_ENV`] set and the text on stdin.

    use super::Error;
    use arboard::{Clipboard, SetExtLinux};
    use log::debug;
    use std::io::{self, Write};
    use std::os::unix::process::CommandExt;
    use std::process::{Command, Stdio};

    pub const OWNER_ENV: &str = "WEBCLIP_CLIPBOARD_OWNER";

    /// True when this process was started to own the clipboard.
    pub fn requested() -> bool {
        std::env::var_os(OWNER_ENV).is_some()
    }

    pub(crate) fn command() -> io::Result<Command> {
        let mut command = Command::new(std::env::current_exe()?);
        command
            .env(OWNER_ENV, "1")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .process_group(0);
        Ok(command)
    }

    pub(crate) fn spawn(text: &str) -> io::Result<()> {
        let mut child = command()?.spawn()?;
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::other("owner stdin not captured"))?;
        stdin.write_all(text.as_bytes())?;
        debug!("clipboard handed over to pid {}", child.id());
        Ok(())
    }

    /// Reads the text from stdin, takes the selection and blocks until some
    /// other program replaces it.
    pub fn serve() -> Result<(), Error> {
        let text = io::read_to_string(io::stdin()).map_err(Error::Handover)?;
        let mut clipboard = Clipboard::new().map_err(Error::ClipboardInit)?;
        clipboard
            .set()
            .wait()
            .text(text)
            .map_err(Error::ClipboardAccess)
    }

}
