use std::sync::Mutex;

use lv_core::notice::Toast;

/// Holds the toast currently on screen.
///
/// Opening a toast while one is visible replaces it; the dialog shows one
/// message at a time.
#[derive(Debug, Default)]
pub struct ToastCenter {
    current: Mutex<Option<Toast>>,
}

impl ToastCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, toast: Toast) {
        *self.current.lock().unwrap() = Some(toast);
    }

    pub fn dismiss(&self) {
        *self.current.lock().unwrap() = None;
    }

    pub fn current(&self) -> Option<Toast> {
        self.current.lock().unwrap().clone()
    }

    pub fn is_open(&self) -> bool {
        self.current.lock().unwrap().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lv_core::notice::ToastKind;

    #[test]
    fn open_replaces_the_visible_toast() {
        let center = ToastCenter::new();
        center.open(Toast::success("Account created").with_title("Welcome"));
        center.open(Toast::error("Something went wrong"));

        let current = center.current().unwrap();
        assert_eq!(current.kind, ToastKind::Error);
        assert_eq!(current.message, "Something went wrong");
        assert_eq!(current.title, None);
    }

    #[test]
    fn dismiss_clears() {
        let center = ToastCenter::new();
        center.open(Toast::alert("Heads up"));
        assert!(center.is_open());

        center.dismiss();
        assert!(!center.is_open());
        assert_eq!(center.current(), None);
    }
}
