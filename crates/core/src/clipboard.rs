use crate::error::ClipboardError;

/// Synchronous clipboard access
///
/// Reads may legitimately race with the user's own copy actions; that is
/// expected behavior for a manual relay.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Current clipboard text (empty when the clipboard holds no text)
    fn read(&mut self) -> Result<String, ClipboardError>;
}

/// OS clipboard backed by arboard
///
/// The handle is opened on first use and kept for the life of the process:
/// on X11 the copied text only survives while its owner is alive.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.handle.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.handle = Some(clipboard);
        }

        self.handle
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard handle missing".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }

    fn read(&mut self) -> Result<String, ClipboardError> {
        match self.handle()?.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(ClipboardError::Read(e.to_string())),
        }
    }
}

/// In-process clipboard
///
/// Used when no OS clipboard is wanted (`--no-clipboard`) and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: String,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self { contents: contents.into() }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Simulate the user copying text in another application
    pub fn set_contents(&mut self, contents: impl Into<String>) {
        self.contents = contents.into();
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = text.to_string();
        Ok(())
    }

    fn read(&mut self) -> Result<String, ClipboardError> {
        Ok(self.contents.clone())
    }
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write(text)
    }

    fn read(&mut self) -> Result<String, ClipboardError> {
        (**self).read()
    }
}
