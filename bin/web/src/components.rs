//! Shared presentational components.

pub mod loader;
pub mod non_member;
pub mod tabs;
pub mod toaster;

pub use loader::Loader;
pub use non_member::NonMemberInfo;
pub use tabs::{CustomTabs, ExchangeFilterTabs};
pub use toaster::Toaster;
