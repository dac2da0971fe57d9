mod browser;
mod error;
mod figure;
mod page;

pub use browser::open_with_web_browser;
pub use error::RenderError;
pub use figure::Figure;
pub use page::write_report;
