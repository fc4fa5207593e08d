//! Owns the current [`FilterState`] and the fetched source list, and keeps the
//! derived view and the URL query string in step with every mutation.
//! Query parameters that are not filters survive every mutation except [`FilterStore::clear_all`].

use crate::{
    doctor::{ConsultationType, Doctor, SortBy},
    filter_pipeline::{filter_and_sort, search_suggestions, specialty_checklist},
    filter_query::encode_query_parts,
    filter_state::{is_valid_specialty_name, FilterState},
    listing_const::{SPECIALTY_CATALOGUE, SUGGESTION_LIMIT},
};

/// Destination for the encoded query string, normally the browser location.
pub trait QuerySink {
    /// `query` has no leading `?` and is empty when every dimension is at its default.
    fn write_query(&mut self, query: &str);
}

#[derive(Debug)]
pub struct FilterStore<S: QuerySink> {
    source: Option<Vec<Doctor>>,
    state: FilterState,
    passthrough: Vec<(String, String)>,
    view: Vec<Doctor>,
    sink: S,
}

impl<S: QuerySink> FilterStore<S> {
    /// `initial` is expected to come from the current URL, so nothing is written back.
    pub fn new(initial: FilterState, sink: S) -> Self {
        Self {
            source: None,
            state: initial,
            passthrough: Vec::new(),
            view: Vec::new(),
            sink,
        }
    }

    /// Non-filter query pairs to keep when the query string is rewritten.
    pub fn with_passthrough(mut self, passthrough: Vec<(String, String)>) -> Self {
        self.passthrough = passthrough;
        self
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Empty until the source list is loaded.
    pub fn view(&self) -> &[Doctor] {
        &self.view
    }

    pub fn source(&self) -> &[Doctor] {
        self.source.as_deref().unwrap_or_default()
    }

    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    pub fn passthrough(&self) -> &[(String, String)] {
        &self.passthrough
    }

    /// Stores the fetched list. The list is immutable once set; later calls are ignored.
    pub fn set_source(&mut self, doctors: Vec<Doctor>) {
        if self.source.is_some() {
            tracing::warn!("source list already loaded, ignoring {} new doctors", doctors.len());
            return;
        }
        tracing::info!("source list loaded: {} doctors", doctors.len());
        self.source = Some(doctors);
        self.recompute();
    }

    /// Adopts a query read back from the URL (history navigation). Does not write the URL.
    pub fn restore(&mut self, state: FilterState, passthrough: Vec<(String, String)>) {
        self.passthrough = passthrough;
        if state == self.state {
            return;
        }
        self.state = state;
        self.recompute();
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.state.search_query {
            return;
        }
        self.state.search_query = text;
        self.commit();
    }

    pub fn set_consultation_type(&mut self, consultation_type: Option<ConsultationType>) {
        if consultation_type == self.state.consultation_type {
            return;
        }
        self.state.consultation_type = consultation_type;
        self.commit();
    }

    pub fn toggle_specialty(&mut self, name: &str, selected: bool) {
        if !is_valid_specialty_name(name) {
            tracing::warn!("rejecting specialty name {name:?}: cannot be stored in the query string");
            return;
        }
        let present = self.state.has_specialty(name);
        match (selected, present) {
            (true, false) => self.state.specialties.push(name.to_string()),
            (false, true) => self.state.specialties.retain(|s| s != name),
            _ => return,
        }
        self.commit();
    }

    pub fn set_sort_by(&mut self, sort_by: Option<SortBy>) {
        if sort_by == self.state.sort_by {
            return;
        }
        self.state.sort_by = sort_by;
        self.commit();
    }

    /// Resets every dimension and empties the query string, even if already clear.
    pub fn clear_all(&mut self) {
        self.state = FilterState::default();
        self.passthrough.clear();
        self.commit();
    }

    pub fn suggestions(&self) -> Vec<String> {
        search_suggestions(self.source(), &self.state.search_query, SUGGESTION_LIMIT)
    }

    pub fn specialty_checklist(&self) -> Vec<String> {
        specialty_checklist(&SPECIALTY_CATALOGUE, self.source())
    }

    fn commit(&mut self) {
        let query = encode_query_parts(&self.state, &self.passthrough);
        self.sink.write_query(&query);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.view = match &self.source {
            Some(source) => filter_and_sort(source, &self.state),
            None => Vec::new(),
        };
    }
}


#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::BTreeSet, rc::Rc};

    use super::*;
    use crate::{
        doctor::parse_digits,
        filter_query::{decode_query_parts, decode_query_string},
    };

    /// Stands in for the browser location; clones share the same string.
    #[derive(Debug, Clone, Default)]
    struct SharedLocation {
        query: Rc<RefCell<String>>,
        writes: Rc<RefCell<usize>>,
    }

    impl SharedLocation {
        fn read(&self) -> String {
            self.query.borrow().clone()
        }

        fn writes(&self) -> usize {
            *self.writes.borrow()
        }
    }

    impl QuerySink for SharedLocation {
        fn write_query(&mut self, query: &str) {
            *self.query.borrow_mut() = query.to_string();
            *self.writes.borrow_mut() += 1;
        }
    }

    fn doctor(id: &str, name: &str, specialties: &[&str], fee: &str, ct: ConsultationType) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: name.to_string(),
            name_initials: None,
            photo: None,
            introduction: None,
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            experience: 0,
            experience_label: String::new(),
            fee: parse_digits(fee),
            fee_label: fee.to_string(),
            consultation_types: BTreeSet::from([ct]),
            languages: Vec::new(),
            clinic: None,
        }
    }

    fn sample() -> Vec<Doctor> {
        vec![
            doctor("1", "Dr. Ayesha Khan", &["Dentist", "ENT"], "₹500", ConsultationType::InClinic),
            doctor("2", "Dr. Bob", &["Cardiologist"], "₹300", ConsultationType::VideoConsult),
            doctor("3", "Dr. Carol", &["ENT"], "₹400", ConsultationType::InClinic),
        ]
    }

    fn loaded_store() -> (FilterStore<SharedLocation>, SharedLocation) {
        let location = SharedLocation::default();
        let mut store = FilterStore::new(FilterState::default(), location.clone());
        store.set_source(sample());
        (store, location)
    }

    fn view_ids<S: QuerySink>(store: &FilterStore<S>) -> Vec<&str> {
        store.view().iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn view_is_empty_until_loaded() {
        let location = SharedLocation::default();
        let mut store = FilterStore::new(FilterState::default(), location.clone());
        assert!(!store.is_loaded());
        assert!(store.view().is_empty());
        store.set_search_query("bob");
        assert!(store.view().is_empty());
        store.set_source(sample());
        assert_eq!(view_ids(&store), vec!["2"]);
    }

    #[test]
    fn initial_state_from_url_is_applied_without_writing() {
        let location = SharedLocation::default();
        let initial = decode_query_string("?specialties=ENT&sortBy=fees");
        let mut store = FilterStore::new(initial, location.clone());
        store.set_source(sample());
        assert_eq!(view_ids(&store), vec!["3", "1"]);
        assert_eq!(location.writes(), 0);
    }

    #[test]
    fn every_mutation_is_visible_to_a_second_reader() {
        let (mut store, location) = loaded_store();

        store.set_search_query("dr");
        assert_eq!(decode_query_string(&location.read()), *store.state());
        store.set_consultation_type(Some(ConsultationType::InClinic));
        assert_eq!(decode_query_string(&location.read()), *store.state());
        store.toggle_specialty("ENT", true);
        assert_eq!(decode_query_string(&location.read()), *store.state());
        store.set_sort_by(Some(SortBy::Fees));
        assert_eq!(decode_query_string(&location.read()), *store.state());

        assert_eq!(
            location.read(),
            "search=dr&consultationType=In+Clinic&specialties=ENT&sortBy=fees"
        );
        assert_eq!(view_ids(&store), vec!["3", "1"]);
    }

    #[test]
    fn toggling_specialties_keeps_selection_order() {
        let (mut store, location) = loaded_store();
        store.toggle_specialty("Cardiologist", true);
        store.toggle_specialty("ENT", true);
        assert_eq!(location.read(), "specialties=Cardiologist%2CENT");
        assert_eq!(view_ids(&store), vec!["1", "2", "3"]);

        store.toggle_specialty("Cardiologist", false);
        assert_eq!(location.read(), "specialties=ENT");
        assert_eq!(view_ids(&store), vec!["1", "3"]);

        store.toggle_specialty("ENT", false);
        assert_eq!(location.read(), "");
        assert_eq!(view_ids(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn redundant_toggles_do_not_duplicate() {
        let (mut store, location) = loaded_store();
        store.toggle_specialty("ENT", true);
        store.toggle_specialty("ENT", true);
        store.toggle_specialty("Dentist", false);
        assert_eq!(store.state().specialties, vec!["ENT".to_string()]);
        assert_eq!(location.writes(), 1);
    }

    #[test]
    fn unstorable_specialty_names_are_rejected() {
        let (mut store, location) = loaded_store();
        store.toggle_specialty("Dietitian,Nutritionist", true);
        store.toggle_specialty("", true);
        assert!(store.state().specialties.is_empty());
        assert_eq!(location.writes(), 0);
    }

    #[test]
    fn clear_all_is_idempotent() {
        let (mut store, location) = loaded_store();
        store.set_search_query("ayesha");
        store.set_sort_by(Some(SortBy::Experience));
        store.toggle_specialty("ENT", true);

        store.clear_all();
        let once_state = store.state().clone();
        let once_query = location.read();
        let once_view = store.view().to_vec();

        store.clear_all();
        assert_eq!(store.state(), &once_state);
        assert_eq!(location.read(), once_query);
        assert_eq!(store.view(), once_view.as_slice());
        assert_eq!(store.state(), &FilterState::default());
        assert_eq!(location.read(), "");
        assert_eq!(view_ids(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn clearing_the_radio_selections() {
        let (mut store, location) = loaded_store();
        store.set_consultation_type(Some(ConsultationType::VideoConsult));
        assert_eq!(view_ids(&store), vec!["2"]);
        store.set_consultation_type(None);
        store.set_sort_by(Some(SortBy::Fees));
        store.set_sort_by(None);
        assert_eq!(location.read(), "");
        assert_eq!(view_ids(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn no_match_is_an_empty_view() {
        let (mut store, _location) = loaded_store();
        store.set_search_query("nobody");
        assert!(store.view().is_empty());
    }

    #[test]
    fn restore_does_not_write_the_url() {
        let (mut store, location) = loaded_store();
        store.set_search_query("carol");
        assert_eq!(location.writes(), 1);
        store.restore(FilterState::default(), Vec::new());
        assert_eq!(location.writes(), 1);
        assert_eq!(view_ids(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn other_query_parameters_survive_filter_changes() {
        let location = SharedLocation::default();
        let (initial, passthrough) = decode_query_parts("utm_source=mail&specialties=ENT");
        let mut store = FilterStore::new(initial, location.clone()).with_passthrough(passthrough);
        store.set_source(sample());

        store.set_sort_by(Some(SortBy::Fees));
        assert_eq!(location.read(), "specialties=ENT&sortBy=fees&utm_source=mail");
        assert_eq!(decode_query_string(&location.read()), *store.state());
        store.toggle_specialty("ENT", false);
        assert_eq!(location.read(), "sortBy=fees&utm_source=mail");

        store.clear_all();
        assert_eq!(location.read(), "");
        assert!(store.passthrough().is_empty());
    }

    #[test]
    fn restore_replaces_the_passthrough() {
        let (mut store, location) = loaded_store();
        let (state, passthrough) = decode_query_parts("ref=home&search=bob");
        store.restore(state, passthrough);
        assert_eq!(view_ids(&store), vec!["2"]);
        assert_eq!(location.writes(), 0);

        store.set_search_query("carol");
        assert_eq!(location.read(), "search=carol&ref=home");
    }

    #[test]
    fn source_is_set_once() {
        let (mut store, _location) = loaded_store();
        store.set_source(Vec::new());
        assert_eq!(store.source().len(), 3);
    }

    #[test]
    fn suggestions_follow_the_search_query() {
        let (mut store, _location) = loaded_store();
        store.set_search_query("BO");
        assert_eq!(store.suggestions(), vec!["Dr. Bob"]);
    }

    #[test]
    fn checklist_starts_with_the_catalogue() {
        let (store, _location) = loaded_store();
        let checklist = store.specialty_checklist();
        assert_eq!(checklist.len(), SPECIALTY_CATALOGUE.len());
        assert_eq!(checklist[0], "Dentist");
    }
}
