//! Query-string codec for [`FilterState`].
//!
//! Keys are `search`, `consultationType`, `specialties` (comma joined) and `sortBy`.
//! A dimension at its default value is left out of the query entirely.
//! Any other parameter in the query is passed through untouched.

use crate::{
    doctor::{ConsultationType, SortBy},
    filter_state::FilterState,
};

pub const KEY_SEARCH: &str = "search";
pub const KEY_CONSULTATION_TYPE: &str = "consultationType";
pub const KEY_SPECIALTIES: &str = "specialties";
pub const KEY_SORT_BY: &str = "sortBy";

const SPECIALTY_SEPARATOR: char = ',';

pub fn is_filter_key(key: &str) -> bool {
    matches!(key, KEY_SEARCH | KEY_CONSULTATION_TYPE | KEY_SPECIALTIES | KEY_SORT_BY)
}

/// Ordered key/value pairs for the non-default dimensions of `state`.
pub fn encode_query_pairs(state: &FilterState) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if !state.search_query.is_empty() {
        pairs.push((KEY_SEARCH, state.search_query.clone()));
    }
    if let Some(ct) = state.consultation_type {
        pairs.push((KEY_CONSULTATION_TYPE, ct.as_str().to_string()));
    }
    if !state.specialties.is_empty() {
        pairs.push((KEY_SPECIALTIES, state.specialties.join(",")));
    }
    if let Some(sort_by) = state.sort_by {
        pairs.push((KEY_SORT_BY, sort_by.as_str().to_string()));
    }
    pairs
}

/// Builds a state from query pairs. Missing keys and unknown literals give defaults;
/// when a key repeats, the first value is used.
pub fn decode_query_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> FilterState
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut search = None;
    let mut consultation_type = None;
    let mut specialties = None;
    let mut sort_by = None;
    for (key, value) in pairs {
        let value = value.as_ref();
        let slot = match key.as_ref() {
            KEY_SEARCH => &mut search,
            KEY_CONSULTATION_TYPE => &mut consultation_type,
            KEY_SPECIALTIES => &mut specialties,
            KEY_SORT_BY => &mut sort_by,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.to_string());
        }
    }

    FilterState {
        search_query: search.unwrap_or_default(),
        consultation_type: consultation_type.as_deref().and_then(decode_consultation_type),
        specialties: specialties.as_deref().map(split_specialties).unwrap_or_default(),
        sort_by: sort_by.as_deref().and_then(decode_sort_by),
    }
}

fn decode_consultation_type(value: &str) -> Option<ConsultationType> {
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(ct) => Some(ct),
        Err(e) => {
            tracing::warn!("ignoring {KEY_CONSULTATION_TYPE} query parameter: {e}");
            None
        }
    }
}

fn decode_sort_by(value: &str) -> Option<SortBy> {
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(s) => Some(s),
        Err(e) => {
            tracing::warn!("ignoring {KEY_SORT_BY} query parameter: {e}");
            None
        }
    }
}

fn split_specialties(value: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in value.split(SPECIALTY_SEPARATOR).filter(|s| !s.is_empty()) {
        if !out.iter().any(|s| s == name) {
            out.push(name.to_string());
        }
    }
    out
}

/// Form-urlencoded query string, without the leading `?`. Empty for the default state.
pub fn encode_query_string(state: &FilterState) -> String {
    encode_query_parts(state, &[])
}

/// Filter parameters first, then the `passthrough` pairs in their original order.
pub fn encode_query_parts(state: &FilterState, passthrough: &[(String, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in encode_query_pairs(state) {
        serializer.append_pair(key, &value);
    }
    for (key, value) in passthrough {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Accepts the query string with or without its leading `?`.
pub fn decode_query_string(query: &str) -> FilterState {
    decode_query_parts(query).0
}

/// The filter state plus every pair whose key is not a filter key.
pub fn decode_query_parts(query: &str) -> (FilterState, Vec<(String, String)>) {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs = form_urlencoded::parse(query.as_bytes());
    let passthrough = pairs
        .clone()
        .filter(|(key, _)| !is_filter_key(key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    (decode_query_pairs(pairs), passthrough)
}
