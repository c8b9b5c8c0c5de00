pub mod composer;
pub mod dialog;
pub mod header;
pub mod log_view;
pub mod model_bar;
pub mod status_bar;

pub use composer::Composer;
pub use dialog::Dialog;
pub use header::Header;
pub use log_view::LogView;
pub use model_bar::ModelBar;
pub use status_bar::{KeyHints, StatusBar};
