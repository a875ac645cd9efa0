//! User-facing notices (toast dialogs).

use serde::{Deserialize, Serialize};

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Alert,
}

impl ToastKind {
    /// Icon name the UI renders for this kind.
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "check",
            ToastKind::Error => "alert-circle",
            ToastKind::Alert => "alert",
        }
    }
}

/// One toast dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub kind: ToastKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    pub fn alert(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Alert, message)
    }

    fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: None,
            message: message.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_to_icon() {
        assert_eq!(ToastKind::Success.icon(), "check");
        assert_eq!(ToastKind::Error.icon(), "alert-circle");
        assert_eq!(ToastKind::Alert.icon(), "alert");
    }
}
