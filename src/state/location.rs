//! Address-bar model
//!
//! `Location` splits a URL reference into path, query string and fragment,
//! and builds the URLs the controller pushes. `QueryString` keeps parameters
//! in order with URLSearchParams-style decoding and `set` semantics.

use serde::Serialize;
use std::borrow::Cow;

/// Ordered query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    /// Parse a query string, with or without the leading `?`
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);

        let pairs = raw
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (key, value) = part.split_once('=').unwrap_or((part, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();

        Self { pairs }
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key` to `value`: the first occurrence is replaced in place and
    /// later duplicates are dropped; an absent key is appended.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut found = false;
        self.pairs.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if found {
                return false;
            }
            found = true;
            *v = value.to_string();
            true
        });

        if !found {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for QueryString {
    /// Form-urlencoded serialization, without the leading `?`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", encode_component(key), encode_component(value))?;
        }
        Ok(())
    }
}

/// `+` means space; invalid percent-escapes are kept as written
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

fn encode_component(raw: &str) -> Cow<'_, str> {
    let encoded = urlencoding::encode(raw);
    if encoded.contains("%20") {
        Cow::Owned(encoded.replace("%20", "+"))
    } else {
        encoded
    }
}

/// The part of a URL the view state depends on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Path, e.g. `/visual-almalaurea-laureati-informatica-2024/`
    pub path: String,
    pub query: QueryString,
    /// Fragment without the `#`; `None` when the URL has no `#`
    pub fragment: Option<String>,
}

impl Location {
    /// Parse a URL reference of the form `path?query#fragment`.
    ///
    /// Any piece may be missing. A scheme and authority, if present, are
    /// dropped so full URLs can be passed as well.
    pub fn parse(url: &str) -> Self {
        let url = strip_origin(url);

        let (rest, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (url, None),
        };

        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, QueryString::parse(query)),
            None => (rest, QueryString::default()),
        };

        Self {
            path: path.to_string(),
            query,
            fragment,
        }
    }

    /// Build from the browser's `location.pathname`, `.search` and `.hash`
    ///
    /// `hash` is empty both for "no fragment" and for a bare `#`, which the
    /// view state treats the same way.
    pub fn from_parts(pathname: &str, search: &str, hash: &str) -> Self {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        Self {
            path: pathname.to_string(),
            query: QueryString::parse(search),
            fragment: (!fragment.is_empty()).then(|| fragment.to_string()),
        }
    }

    /// Same path and query, new fragment
    pub fn with_fragment(&self, fragment: &str) -> Self {
        Self {
            path: self.path.clone(),
            query: self.query.clone(),
            fragment: Some(fragment.to_string()),
        }
    }

    /// Same path and fragment, `key` set to `value` in the query
    pub fn with_query_param(&self, key: &str, value: &str) -> Self {
        let mut query = self.query.clone();
        query.set(key, value);
        Self {
            path: self.path.clone(),
            query,
            fragment: self.fragment.clone(),
        }
    }

    /// `?query` as the browser would report it in `location.search`
    pub fn search(&self) -> String {
        if self.query.is_empty() {
            String::new()
        } else {
            format!("?{}", self.query)
        }
    }

    /// `#fragment` as the browser would report it in `location.hash`
    pub fn hash(&self) -> String {
        match self.fragment.as_deref() {
            Some(fragment) if !fragment.is_empty() => format!("#{}", fragment),
            _ => String::new(),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.path, self.search(), self.hash())
    }
}

fn strip_origin(url: &str) -> &str {
    match url.find("://") {
        Some(scheme_end) => {
            let after_scheme = &url[scheme_end + 3..];
            match after_scheme.find(|c: char| matches!(c, '/' | '?' | '#')) {
                Some(idx) => &after_scheme[idx..],
                None => "",
            }
        }
        None => url,
    }
}
