//! Inline success/error banners shown above forms and tables.

/// Banner tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "banner banner--success",
            Self::Error => "banner banner--error",
        }
    }
}

/// One message shown to the user after a request completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: BannerKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: BannerKind::Error, message: message.into() }
    }

    /// Error banner for a failed request.
    #[must_use]
    pub fn from_api(err: &crate::net::error::ApiError) -> Self {
        Self::error(err.user_message())
    }
}
