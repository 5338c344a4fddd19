//! Role lookup from the session token and role-gated navigation.
//!
//! Tokens are issued and verified by the backend. The client only reads
//! the `role` claim to decide which menu entries are usable; it never
//! checks signatures.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Manager,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationError {
    #[error("권한이 없습니다.")]
    Forbidden,
}

/// Source of the current session's role (`getRoleFromToken`).
pub trait TokenSource: Send + Sync {
    fn role(&self) -> Option<Role>;

    /// Id of the signed-in member, when the token carries one.
    fn member_id(&self) -> Option<i64> {
        None
    }
}

#[derive(Debug, Deserialize)]
struct Claims {
    role: Option<Role>,
    #[serde(default)]
    id: Option<i64>,
}

/// A JWT held by the client. Only the payload segment is decoded.
#[derive(Debug, Clone, Default)]
pub struct JwtToken {
    raw: Option<String>,
}

impl JwtToken {
    pub fn new(raw: Option<String>) -> Self {
        Self {
            raw: raw.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    fn claims(&self) -> Option<Claims> {
        let payload = self.raw.as_deref()?.split('.').nth(1)?;
        // Some issuers keep the padding; the decoder here does not accept it.
        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

impl TokenSource for JwtToken {
    fn role(&self) -> Option<Role> {
        self.claims()?.role
    }

    fn member_id(&self) -> Option<i64> {
        self.claims()?.id
    }
}

/// Menu destinations of the web app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Announcements,
    Faq,
    SpecialtyDrinks,
    ReportList,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Announcements => "/announcement",
            Route::Faq => "/faq",
            Route::SpecialtyDrinks => "/specialty-drink",
            Route::ReportList => "/report",
        }
    }

    pub fn required_role(self) -> Option<Role> {
        match self {
            Route::ReportList => Some(Role::Manager),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('/') {
            "announcement" | "announcements" => Ok(Route::Announcements),
            "faq" => Ok(Route::Faq),
            "specialty-drink" | "drinks" => Ok(Route::SpecialtyDrinks),
            "report" | "reports" => Ok(Route::ReportList),
            other => Err(format!("unknown route: {}", other)),
        }
    }
}

pub fn authorize(route: Route, tokens: &dyn TokenSource) -> Result<(), AuthorizationError> {
    match route.required_role() {
        None => Ok(()),
        Some(required) => match tokens.role() {
            Some(role) if role == required => Ok(()),
            Some(_) => Err(AuthorizationError::Forbidden),
            None => {
                tracing::debug!("no role in token for {}", route);
                Err(AuthorizationError::Forbidden)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> JwtToken {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        JwtToken::new(Some(format!("{}.{}.signature", header, body)))
    }

    #[test]
    fn test_role_from_token() {
        assert_eq!(token_with(r#"{"sub":"1","role":"MANAGER"}"#).role(), Some(Role::Manager));
        assert_eq!(token_with(r#"{"sub":"1","role":"USER"}"#).role(), Some(Role::User));
    }

    #[test]
    fn test_member_id_from_token() {
        assert_eq!(token_with(r#"{"id":42,"role":"USER"}"#).member_id(), Some(42));
        assert_eq!(token_with(r#"{"role":"USER"}"#).member_id(), None);
        assert_eq!(JwtToken::default().member_id(), None);
    }

    #[test]
    fn test_malformed_tokens_have_no_role() {
        assert_eq!(token_with(r#"{"sub":"1"}"#).role(), None);
        assert_eq!(JwtToken::new(Some("garbage".into())).role(), None);
        assert_eq!(JwtToken::new(Some("a.!!!.c".into())).role(), None);
        assert_eq!(JwtToken::new(Some("   ".into())).raw(), None);
        assert_eq!(JwtToken::default().role(), None);
    }

    #[test]
    fn test_report_list_requires_manager() {
        let manager = token_with(r#"{"role":"MANAGER"}"#);
        let user = token_with(r#"{"role":"USER"}"#);

        assert_eq!(authorize(Route::ReportList, &manager), Ok(()));
        assert_eq!(
            authorize(Route::ReportList, &user),
            Err(AuthorizationError::Forbidden)
        );
        assert_eq!(
            authorize(Route::ReportList, &JwtToken::default()),
            Err(AuthorizationError::Forbidden)
        );
        assert_eq!(authorize(Route::Faq, &JwtToken::default()), Ok(()));
    }

    #[test]
    fn test_route_parsing() {
        assert_eq!("/report".parse::<Route>(), Ok(Route::ReportList));
        assert_eq!("drinks".parse::<Route>(), Ok(Route::SpecialtyDrinks));
        assert!("admin".parse::<Route>().is_err());
    }
}
