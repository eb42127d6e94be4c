//! Custom widgets

pub mod header;
pub mod nav_overlay;
pub mod page;
pub mod rain;

pub use header::MainHeader;
pub use nav_overlay::NavOverlay;
pub use page::PageView;
pub use rain::RainBackdrop;
