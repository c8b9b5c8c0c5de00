pub mod clipboard;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod ledger;
pub mod logging;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, ContentLogging, LoggingSettings, ModelDescriptor, PrivacySettings, Settings};
pub use controller::{Controller, Outcome, Surface, word_count};
pub use error::{ClipboardError, Error, ExportError, Result};
pub use ledger::{Direction, Ledger, Seq, TurnRecord};
pub use logging::{LogFormat, LoggingConfig, init_logging, sanitize_path};
