// src/search/session.rs

use super::filter::{matching_indices, FilterCriteria};
use super::query::{search_href, PageParams};
use super::results::{ResultWindow, PAGE_SIZE};
use super::selection::Selection;
use crate::catalog::Catalog;
use crate::domain::PropertyRecord;
use crate::map::{MapView, MarkerRenderer};

/// One visitor's view of the search page.
///
/// Holds the injected catalog, the current criteria, and the filtered result
/// memoized against those criteria. Setting identical criteria again does not
/// refilter; changing them refilters and resets the result window.
#[derive(Debug)]
pub struct SearchSession {
    catalog: Catalog,
    criteria: FilterCriteria,
    matches: Vec<usize>,
    window: ResultWindow,
    selection: Selection,
    recomputes: usize,
}

impl SearchSession {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_criteria(catalog, FilterCriteria::default())
    }

    /// Starts at `criteria` with a single filter pass.
    pub fn with_criteria(catalog: Catalog, criteria: FilterCriteria) -> Self {
        let mut session = Self {
            catalog,
            criteria,
            matches: Vec::new(),
            window: ResultWindow::default(),
            selection: Selection::new(),
            recomputes: 0,
        };
        session.recompute();
        session
    }

    /// Rebuilds a session from the search page's query string: criteria,
    /// then the window size and selection carried alongside them.
    pub fn from_query(catalog: Catalog, query: &str) -> Self {
        let page = PageParams::from_query(query);

        let mut session = Self::with_criteria(catalog, FilterCriteria::from_query(query));
        if let Some(shown) = page.shown {
            session.window = ResultWindow::with_shown(shown);
        }
        if let Some(id) = page.selected {
            session.select(&id);
        }
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn window(&self) -> ResultWindow {
        self.window
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// How many times the filter actually ran.
    pub fn recompute_count(&self) -> usize {
        self.recomputes
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria == self.criteria {
            return;
        }
        self.criteria = criteria;
        self.window.reset();
        self.recompute();
    }

    /// Back to default criteria: the full, unfiltered collection.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.set_criteria(FilterCriteria::default());
    }

    fn recompute(&mut self) {
        self.matches = matching_indices(self.catalog.records(), &self.criteria);
        self.recomputes += 1;
    }

    pub fn result_count(&self) -> usize {
        self.matches.len()
    }

    pub fn results(&self) -> Vec<&PropertyRecord> {
        let records = self.catalog.records();
        self.matches.iter().map(|&i| &records[i]).collect()
    }

    /// The cards currently on screen.
    pub fn visible_results(&self) -> Vec<&PropertyRecord> {
        let mut results = self.results();
        results.truncate(self.window.visible(results.len()));
        results
    }

    pub fn has_more(&self) -> bool {
        self.window.has_more(self.result_count())
    }

    pub fn load_more(&mut self) {
        self.window.load_more(self.result_count());
    }

    /// Selects a record by id. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) -> bool {
        if self.catalog.get(id).is_some() {
            self.selection.select(id);
            true
        } else {
            false
        }
    }

    /// Places the current results on `view` and opens the selected popup.
    pub fn render_map<V: MapView + ?Sized>(&self, view: &mut V) -> usize {
        let placed = MarkerRenderer::render(view, &self.results());
        MarkerRenderer::focus(view, &self.selection);
        placed
    }

    /// Window size worth putting in a link; the first page is implied.
    fn shown_param(&self) -> Option<usize> {
        Some(self.window.shown()).filter(|&n| n != PAGE_SIZE)
    }

    /// Link to the current criteria and window, without a selection.
    pub fn state_href(&self) -> String {
        search_href(&self.criteria, self.shown_param(), None)
    }

    /// Link to everything this session shows, selection included. The search
    /// route redirects any other spelling of the same state here.
    pub fn canonical_href(&self) -> String {
        let selected = self.selection.get();
        search_href(&self.criteria, self.shown_param(), selected.as_deref())
    }

    /// Link that keeps the current page state and selects `id`.
    pub fn select_href(&self, id: &str) -> String {
        search_href(&self.criteria, self.shown_param(), Some(id))
    }

    /// Link that shows one more page of results.
    pub fn load_more_href(&self) -> String {
        let mut next = self.window;
        next.load_more(self.result_count());
        let selected = self.selection.get();
        search_href(&self.criteria, Some(next.shown()), selected.as_deref())
    }
}
