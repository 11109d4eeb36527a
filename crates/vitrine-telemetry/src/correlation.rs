//! Per-unit-of-work correlation tokens.
//!
//! A unit of work (typically: handling one inbound request) carries one
//! correlation token. The token is stored in a `tokio` task-local cell, so
//! any code running inside the unit of work can read it without the token
//! being passed as an explicit argument, and two concurrently executing
//! units of work can never observe each other's token. The cell is discarded
//! when the scope exits, so a reused worker never leaks a token into the
//! next unit of work.
//!
//! A process-wide mutable variable is deliberately not used here: it would
//! be shared between interleaved units of work and break isolation.
//!
//! # Usage
//!
//! ```
//! use vitrine_telemetry::correlation;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! correlation::scope(async {
//!     let token = correlation::begin_unit_of_work(None);
//!     assert_eq!(correlation::current_token(), token.as_str());
//! })
//! .await;
//! # }
//! ```

use std::cell::RefCell;
use std::future::Future;
use uuid::Uuid;

/// The inbound header a caller may supply a correlation token in. The
/// adopted token must be echoed back to the caller on the same header.
pub const CORRELATION_HEADER: &str = "x-request-id";

tokio::task_local! {
    /// One cell per unit of work. The outer `Option` distinguishes "scope
    /// entered, no token begun yet" from "token active".
    static ACTIVE_TOKEN: RefCell<Option<CorrelationToken>>;
}

/// An opaque correlation token tying together all log records of one unit
/// of work.
///
/// Generated tokens are UUID v7 values rendered in simple (dashless) form,
/// a 128-bit identifier as text. Adopted tokens are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationToken(String);

impl CorrelationToken {
    /// Generates a new globally unique token.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    /// Adopts a caller-supplied token verbatim.
    #[must_use]
    pub fn adopt(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the token, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CorrelationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Runs an async unit of work inside a fresh correlation scope.
///
/// The scope installs an empty token cell for the duration of `fut`. Code
/// inside the future can call [`begin_unit_of_work`] and [`current_token`];
/// when the future completes the cell is dropped with it.
pub async fn scope<F>(fut: F) -> F::Output
where
    F: Future,
{
    ACTIVE_TOKEN.scope(RefCell::new(None), fut).await
}

/// Runs a synchronous unit of work inside a fresh correlation scope.
///
/// This is the thread-per-request counterpart of [`scope`], for callers
/// that dispatch each unit of work to a dedicated worker thread.
pub fn sync_scope<F, T>(f: F) -> T
where
    F: FnOnce() -> T,
{
    ACTIVE_TOKEN.sync_scope(RefCell::new(None), f)
}

/// Starts (or restarts) the current unit of work's correlation token.
///
/// If `supplied` is a non-empty string (typically taken from the
/// [`CORRELATION_HEADER`] of an inbound request) it is adopted verbatim.
/// Otherwise a fresh token is generated. The adopted token becomes the
/// active token for the surrounding scope and is returned so the caller can
/// echo it back outbound.
///
/// # Caveats
///
/// Calling this more than once in the same unit of work replaces the active
/// token; the last write wins. Calling it outside any [`scope`] /
/// [`sync_scope`] still returns a token, but there is nowhere to store it,
/// so [`current_token`] will keep reporting an empty string.
pub fn begin_unit_of_work(supplied: Option<&str>) -> CorrelationToken {
    let token = match supplied {
        Some(s) if !s.is_empty() => CorrelationToken::adopt(s),
        _ => CorrelationToken::generate(),
    };

    let _ = ACTIVE_TOKEN.try_with(|cell| {
        *cell.borrow_mut() = Some(token.clone());
    });

    token
}

/// Returns the active token for the calling unit of work.
///
/// Returns an empty string when no token has been begun in this scope, or
/// when the caller is not running inside a correlation scope at all.
#[must_use]
pub fn current_token() -> String {
    ACTIVE_TOKEN
        .try_with(|cell| {
            cell.borrow()
                .as_ref()
                .map(|token| token.as_str().to_string())
                .unwrap_or_default()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_tokens_are_unique() {
        let a = CorrelationToken::generate();
        let b = CorrelationToken::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32, "simple-form UUID is 32 hex chars");
    }

    #[test]
    fn test_adopt_keeps_token_verbatim() {
        let token = CorrelationToken::adopt("abc-123");
        assert_eq!(token.as_str(), "abc-123");
        assert_eq!(token.to_string(), "abc-123");
    }

    #[test]
    fn test_current_token_empty_outside_scope() {
        assert_eq!(current_token(), "");
    }

    #[test]
    fn test_begin_outside_scope_returns_token_without_storing() {
        let token = begin_unit_of_work(None);
        assert!(!token.as_str().is_empty());
        assert_eq!(current_token(), "");
    }

    #[test]
    fn test_sync_scope_adoption() {
        sync_scope(|| {
            let token = begin_unit_of_work(Some("abc-123"));
            assert_eq!(token.as_str(), "abc-123");
            assert_eq!(current_token(), "abc-123");
        });
        assert_eq!(current_token(), "", "token must not leak past the scope");
    }

    #[test]
    fn test_inbound_header_value_is_adopted() {
        let headers =
            std::collections::HashMap::from([(CORRELATION_HEADER, "req-7")]);
        sync_scope(|| {
            let token = begin_unit_of_work(headers.get(CORRELATION_HEADER).copied());
            assert_eq!(token.as_str(), "req-7");
            assert_eq!(current_token(), "req-7");
        });
    }

    #[test]
    fn test_empty_supplied_token_generates() {
        sync_scope(|| {
            let token = begin_unit_of_work(Some(""));
            assert_eq!(token.as_str().len(), 32);
            assert_eq!(current_token(), token.as_str());
        });
    }

    #[test]
    fn test_last_write_wins_within_scope() {
        sync_scope(|| {
            begin_unit_of_work(Some("first"));
            begin_unit_of_work(Some("second"));
            assert_eq!(current_token(), "second");
        });
    }

    #[tokio::test]
    async fn test_async_scope_isolated_per_task() {
        let (a, b) = tokio::join!(
            scope(async {
                let token = begin_unit_of_work(None);
                tokio::task::yield_now().await;
                assert_eq!(current_token(), token.as_str());
                token.into_string()
            }),
            scope(async {
                let token = begin_unit_of_work(None);
                tokio::task::yield_now().await;
                assert_eq!(current_token(), token.as_str());
                token.into_string()
            }),
        );
        assert_ne!(a, b);
    }
}
