//! Core type definitions for the application

use super::display::DisplayRecord;

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Search,
    Filter,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Filter,
            ActiveSection::Filter => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Filter => ActiveSection::Search,
            ActiveSection::Results => ActiveSection::Filter,
        }
    }
}

/// Type filter applied to search results (all | movie | series)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Movie,
    Series,
}

impl TypeFilter {
    pub fn next(self) -> Self {
        match self {
            TypeFilter::All => TypeFilter::Movie,
            TypeFilter::Movie => TypeFilter::Series,
            TypeFilter::Series => TypeFilter::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            TypeFilter::All => TypeFilter::Series,
            TypeFilter::Movie => TypeFilter::All,
            TypeFilter::Series => TypeFilter::Movie,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Movie => "movie",
            TypeFilter::Series => "series",
        }
    }
}

/// UI state for the application
#[derive(Clone)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub search_query: String,
    pub type_filter: TypeFilter,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Search,
            search_query: String::new(),
            type_filter: TypeFilter::All,
            show_help_popup: false,
        }
    }
}

/// Detail overlay state. The record is retained on close; the overlay
/// only toggles visibility between opens.
#[derive(Clone, Debug, Default)]
pub struct DetailState {
    pub visible: bool,
    pub record: Option<DisplayRecord>,
}
