//! One-shot notices.
//!
//! A notice set by a write handler travels to the next rendered page in a
//! short-lived cookie and is cleared as soon as that page goes out, so it
//! shows exactly once. The payload is form-encoded (the same codec
//! actix-web uses for request bodies), which keeps it cookie-safe without
//! extra escaping.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse};
use maud::Markup;
use serde::{Deserialize, Serialize};

use quill_core::error::DomainError;

const NOTICE_COOKIE: &str = "quill_notice";

/// Notice severity, used by the banner styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Error,
    Info,
}

impl Level {
    /// CSS class suffix for the banner.
    pub fn css_class(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
            Level::Info => "info",
        }
    }
}

/// A transient user-facing message shown on the next rendered page only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }
}

/// User-facing rendering of a rejected write.
impl From<DomainError> for Notice {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::Duplicate(msg) => Notice::error(msg),
            other => Notice::error(other.to_string()),
        }
    }
}

/// Redirect (303 See Other) carrying a one-shot notice.
pub fn see_other(location: &str, notice: impl Into<Notice>) -> HttpResponse {
    let notice = notice.into();
    let payload = serde_urlencoded::to_string(&notice).unwrap_or_default();
    let cookie = Cookie::build(NOTICE_COOKIE, payload)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .cookie(cookie)
        .finish()
}

/// Render a page, consuming any pending notice.
///
/// The notice (if one is pending) is handed to the view closure and a
/// removal cookie rides on the response so it never renders twice.
pub fn render_page<F>(req: &HttpRequest, build: F) -> HttpResponse
where
    F: FnOnce(Option<Notice>) -> Markup,
{
    let notice = take(req);
    let clear = notice.is_some();
    let markup = build(notice);

    let mut response = HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(markup.into_string());

    if clear {
        let mut removal = Cookie::new(NOTICE_COOKIE, "");
        removal.set_path("/");
        if let Err(e) = response.add_removal_cookie(&removal) {
            tracing::warn!("Failed to clear notice cookie: {}", e);
        }
    }

    response
}

/// Read the pending notice from the request, if any.
fn take(req: &HttpRequest) -> Option<Notice> {
    let cookie = req.cookie(NOTICE_COOKIE)?;
    serde_urlencoded::from_str(cookie.value()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_round_trips_through_form_encoding() {
        let notice = Notice::success("Created user alice & bob");
        let encoded = serde_urlencoded::to_string(&notice).unwrap();
        // No characters a cookie value cannot carry
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains(';'));

        let decoded: Notice = serde_urlencoded::from_str(&encoded).unwrap();
        assert_eq!(decoded, notice);
    }

    #[test]
    fn validation_error_becomes_error_notice() {
        let notice = Notice::from(DomainError::Validation("Username is required".into()));
        assert_eq!(notice.level, Level::Error);
        assert_eq!(notice.message, "Username is required");
    }

    #[test]
    fn see_other_sets_location_and_cookie() {
        let response = see_other("/users", Notice::info("hi"));
        assert_eq!(response.status(), actix_web::http::StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/users"
        );
        let set_cookie = response.headers().get(header::SET_COOKIE).unwrap();
        assert!(set_cookie.to_str().unwrap().starts_with(NOTICE_COOKIE));
    }
}
