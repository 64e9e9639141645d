//! Modal Router
//!
//! The open modal lives in the address bar as `?modal=income|expense`.
//! The router only reads and rewrites that query; whoever calls it resyncs
//! the UI from [`ModalRouter::current`] afterwards.

use log::{debug, warn};

use crate::models::Kind;

/// Which entry form, if any, is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Income,
    Expense,
}

impl Modal {
    pub fn kind(self) -> Option<Kind> {
        match self {
            Modal::Closed => None,
            Modal::Income => Some(Kind::Income),
            Modal::Expense => Some(Kind::Expense),
        }
    }

    pub fn is_open(self) -> bool {
        self != Modal::Closed
    }

    /// Map a raw query string (with or without the leading `?`) to a modal.
    ///
    /// Anything other than the two known values, including a missing or
    /// unparseable query, is `Closed`.
    pub fn from_query(query: &str, param: &str) -> Self {
        let pairs = parse_pairs(query);
        let value = pairs.iter().find(|(key, _)| key == param).map(|(_, value)| value.as_str());
        match value.and_then(Kind::parse) {
            Some(kind) => kind.into(),
            None => Modal::Closed,
        }
    }
}

impl From<Kind> for Modal {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Income => Modal::Income,
            Kind::Expense => Modal::Expense,
        }
    }
}

/// Host address bar
pub trait Address {
    /// Current query string, without the leading `?`
    fn query(&self) -> String;
    /// Show a new query without reloading the page. An empty query clears it.
    fn navigate(&self, query: &str);
}

pub struct ModalRouter<A> {
    address: A,
    param: String,
}

impl<A: Address> ModalRouter<A> {
    pub fn new(address: A, param: impl Into<String>) -> Self {
        Self {
            address,
            param: param.into(),
        }
    }

    pub fn current(&self) -> Modal {
        Modal::from_query(&self.address.query(), &self.param)
    }

    pub fn open(&self, kind: Kind) {
        let query = with_param(&self.address.query(), &self.param, Some(kind.as_str()));
        debug!("[Router] Opening {} modal", kind.as_str());
        self.address.navigate(&query);
    }

    pub fn close(&self) {
        let query = with_param(&self.address.query(), &self.param, None);
        debug!("[Router] Closing modal");
        self.address.navigate(&query);
    }
}

fn parse_pairs(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
        Ok(pairs) => pairs,
        Err(e) => {
            warn!("[Router] Ignoring malformed query {:?}: {}", query, e);
            Vec::new()
        }
    }
}

/// Splice `param=value` into `query`, or drop it when `value` is `None`.
/// Every other pair is kept byte-for-byte and in order.
fn with_param(query: &str, param: &str, value: Option<&str>) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut segments: Vec<String> = query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter(|segment| segment_key(segment).as_deref() != Some(param))
        .map(str::to_string)
        .collect();
    if let Some(value) = value {
        match serde_urlencoded::to_string(vec![(param, value)]) {
            Ok(pair) => segments.push(pair),
            Err(e) => warn!("[Router] Could not encode {}={:?}: {}", param, value, e),
        }
    }
    segments.join("&")
}

/// Decoded key of one `key=value` segment
fn segment_key(segment: &str) -> Option<String> {
    serde_urlencoded::from_str::<Vec<(String, String)>>(segment)
        .ok()?
        .into_iter()
        .next()
        .map(|(key, _)| key)
}
