//! Notification containers: toast dialogs and the global loading overlay.

mod global_loader;
mod toast_center;

pub use global_loader::GlobalLoader;
pub use toast_center::ToastCenter;
