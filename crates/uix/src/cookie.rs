//! Cookie accessors over the document's cookie store.

use dom::{COOKIE_EXPIRES_FORMAT, Document};

/// Expiry applied by [`set_cookie`], in days.
pub const DEFAULT_EXPIRE_DAYS: i64 = 30;

/// Write a root-path cookie with the default 30-day expiry.
pub fn set_cookie(doc: &mut Document, key: &str, value: &str) {
    set_cookie_for(doc, key, value, DEFAULT_EXPIRE_DAYS);
}

/// Write a root-path cookie expiring `expire_days` from now. The value
/// is percent-encoded; the expiry is a GMT date string, so the stored
/// text round-trips through standard cookie header syntax.
pub fn set_cookie_for(doc: &mut Document, key: &str, value: &str, expire_days: i64) {
    let expires = (doc.now_utc() + chrono::Duration::days(expire_days))
        .format(COOKIE_EXPIRES_FORMAT);
    let encoded = urlencoding::encode(value);
    doc.write_cookie(&format!("{key}={encoded}; path=/; expires={expires}"));
}

/// Read a cookie back, percent-decoded.
///
/// The cookie header is re-parsed on every read: entries split on
/// `"; "`, each on its first `=`, scanned from the end of the list so
/// the last-declared duplicate of a key wins.
pub fn get_cookie(doc: &Document, key: &str) -> Option<String> {
    let header = doc.cookie_header();
    for entry in header.split("; ").collect::<Vec<_>>().into_iter().rev() {
        if let Some((name, raw)) = entry.split_once('=')
            && name == key
        {
            return urlencoding::decode(raw).ok().map(std::borrow::Cow::into_owned);
        }
    }
    None
}
