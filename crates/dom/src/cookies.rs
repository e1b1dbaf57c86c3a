//! The page cookie store.
//!
//! Cookies are written and read through the wire format so round-trips
//! stay honest: `write` parses `name=value; path=/; expires=...` text and
//! `header` renders the live records back as `name=value` pairs joined by
//! `"; "`, the same string an HTTP server would receive.

use chrono::{DateTime, NaiveDateTime, Utc};
use log::debug;

/// Expiry timestamp format used in cookie text (a GMT date string).
pub const COOKIE_EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

struct CookieRecord {
    name: String,
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

/// Ordered cookie records; a rewrite of an existing name moves it to the
/// back, so the rendered header lists the freshest duplicate last.
#[derive(Default)]
pub struct CookieJar {
    records: Vec<CookieRecord>,
}

impl CookieJar {
    /// Apply one wire-format cookie assignment.
    pub(crate) fn write(&mut self, raw: &str, now: DateTime<Utc>) {
        let mut segments = raw.split(';').map(str::trim);
        let Some((name, value)) = segments.next().and_then(|pair| pair.split_once('=')) else {
            debug!("ignoring malformed cookie text: {raw:?}");
            return;
        };
        let name = name.trim();
        if name.is_empty() {
            debug!("ignoring cookie with empty name: {raw:?}");
            return;
        }

        let mut expires_at = None;
        for segment in segments {
            if let Some((attr, attr_value)) = segment.split_once('=')
                && attr.trim().eq_ignore_ascii_case("expires")
            {
                expires_at = NaiveDateTime::parse_from_str(attr_value.trim(), COOKIE_EXPIRES_FORMAT)
                    .ok()
                    .map(|naive| naive.and_utc());
            }
        }

        self.records.retain(|record| record.name != name);
        // An already-elapsed expiry is a deletion.
        if expires_at.is_some_and(|deadline| deadline <= now) {
            return;
        }
        self.records.push(CookieRecord {
            name: name.into(),
            value: value.into(),
            expires_at,
        });
    }

    /// Render live records as `name=value` pairs joined by `"; "`.
    pub(crate) fn header(&self, now: DateTime<Utc>) -> String {
        self.records
            .iter()
            .filter(|record| {
                record
                    .expires_at
                    .is_none_or(|deadline| deadline > now)
            })
            .map(|record| format!("{}={}", record.name, record.value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
