//! Route query segment carrying the listing filters.

use std::fmt::Display;

use common::{
    filter_query::{decode_query_parts, encode_query_parts},
    filter_state::FilterState,
};


// The router needs Display to write the query and From<&str> to read it back
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterQuery {
    pub state: FilterState,
    /// Query pairs that are not filters, kept in their original order.
    pub passthrough: Vec<(String, String)>,
}

impl From<FilterState> for FilterQuery {
    fn from(state: FilterState) -> Self {
        FilterQuery { state, passthrough: Vec::new() }
    }
}

impl Display for FilterQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", encode_query_parts(&self.state, &self.passthrough))
    }
}

impl From<&str> for FilterQuery {
    fn from(query: &str) -> Self {
        let (state, passthrough) = decode_query_parts(query);
        FilterQuery { state, passthrough }
    }
}
