//! # Camel-Case Normalization
//!
//! The portal's service layer generates its JSON-WS parameter names from Java-style
//! accessors and inconsistently keeps all-uppercase acronyms (`URL`, `PK`, `SSL`)
//! where the wire protocol expects a single-capital camel form (`Url`, `Pk`, `Ssl`).
//! This module rewrites identifiers into the form the wire accepts.
//!
//! ## How it works
//!
//! 1. **Exact-match table**: identifiers observed in the wild whose mangling does not
//!    follow one uniform rule are resolved through [`ACRONYM_TABLE`] first. The table
//!    is data, not algorithm, precisely so new oddballs can be added without touching
//!    the general rule.
//! 2. **General rule**: every maximal run of two or more consecutive ASCII uppercase
//!    letters is rewritten depending on what follows it:
//!    - end of the identifier: keep the first letter, lowercase the rest
//!      (`feedURL -> feedUrl`);
//!    - a lowercase letter after a run of three or more: the run's last letter opens
//!      the next word and is kept, the letters before it are folded
//!      (`friendlyURLMap -> friendlyUrlMap`, `inputStreamOVPs -> inputStreamOvPs`);
//!    - anything else (a two-letter run before a lowercase letter, or a digit):
//!      left as written.
//!
//! Both layers are idempotent: feeding an already-normalized identifier back in
//! returns it unchanged.

/// Known identifier manglings observed against live portals.
///
/// Checked before the general rule so that the crate stays bit-compatible with the
/// portal's expectations even where the generated names do not follow a single
/// derivable pattern. Every `to` entry must itself normalize to `to`.
pub const ACRONYM_TABLE: &[(&str, &str)] = &[
    ("articleURL", "articleUrl"),
    ("attachmentURLPrefix", "attachmentUrlPrefix"),
    ("classPK", "classPk"),
    ("contentURL", "contentUrl"),
    ("directDownloadURL", "directDownloadUrl"),
    ("displayDateGT", "displayDateGt"),
    ("displayDateLT", "displayDateLt"),
    ("downloadPageURL", "downloadPageUrl"),
    ("entryURL", "entryUrl"),
    ("feedURL", "feedUrl"),
    ("friendlyURL", "friendlyUrl"),
    ("friendlyURLMap", "friendlyUrlMap"),
    ("homeURL", "homeUrl"),
    ("inUseSSL", "inUseSsl"),
    ("inputStreamOVPs", "inputStreamOvPs"),
    ("largeImageURL", "largeImageUrl"),
    ("mediumImageURL", "mediumImageUrl"),
    ("newClassPK", "newClassPk"),
    ("outUseSSL", "outUseSsl"),
    ("overrideClassPK", "overrideClassPk"),
    ("pageURL", "pageUrl"),
    ("permissionClassPK", "permissionClassPk"),
    ("smallImageURL", "smallImageUrl"),
    ("testDirectDownloadURL", "testDirectDownloadUrl"),
];

/// Rewrites an identifier into the acronym casing the wire protocol expects.
///
/// The leading character is never altered; identifiers without an uppercase run of
/// length two or more are returned unchanged.
///
/// # Examples
///
/// ```
/// use jsonws_core::camelcase::normalize;
///
/// assert_eq!(normalize("classPK"), "classPk");
/// assert_eq!(normalize("friendlyURLMap"), "friendlyUrlMap");
/// assert_eq!(normalize("somethingUrl"), "somethingUrl");
/// ```
pub fn normalize(name: &str) -> String {
    if let Some((_, to)) = ACRONYM_TABLE.iter().find(|(from, _)| *from == name) {
        return (*to).to_string();
    }

    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());
    let mut i = 0;

    while i < chars.len() {
        let is_run_start = chars[i].is_ascii_uppercase()
            && i + 1 < chars.len()
            && chars[i + 1].is_ascii_uppercase();

        if !is_run_start {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let mut j = i;
        while j < chars.len() && chars[j].is_ascii_uppercase() {
            j += 1;
        }
        let run = &chars[i..j];

        if j == chars.len() {
            // Run closes the identifier: fold everything after its first letter.
            out.push(run[0]);
            out.extend(run[1..].iter().map(char::to_ascii_lowercase));
        } else if run.len() >= 3 && chars[j].is_ascii_lowercase() {
            // The run's last letter starts the next word; fold the acronym before it.
            out.push(run[0]);
            out.extend(run[1..run.len() - 1].iter().map(char::to_ascii_lowercase));
            out.push(run[run.len() - 1]);
        } else {
            // Two-letter run before a lowercase letter, or a run broken by a
            // non-letter: the generated names keep these as written.
            out.extend(run);
        }
        i = j;
    }

    out
}

/// Normalizes only the first segment of a dot-separated parameter path.
///
/// Trailing segments denote field names on an already-typed remote object and must
/// reach the wire unmodified.
///
/// # Examples
///
/// ```
/// use jsonws_core::camelcase::normalize_parameter;
///
/// assert_eq!(normalize_parameter("fullURL.fullURL"), "fullUrl.fullURL");
/// ```
pub fn normalize_parameter(path: &str) -> String {
    match path.split_once('.') {
        Some((head, tail)) => format!("{}.{}", normalize(head), tail),
        None => normalize(path),
    }
}
