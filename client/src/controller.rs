use crate::results::RenderItem;
use leptos::prelude::*;

/// What the shared output region currently shows: nothing yet, a status or
/// error line, or a grid of thumbnails.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutput {
    Idle,
    Message(String),
    Results(Vec<RenderItem>),
}

/// Shared handle both search flows publish into.
///
/// Each trigger takes a token via [`begin`](Self::begin); publishing is
/// conditional on the token still being the newest one, so a superseded
/// flow's late response is dropped instead of overwriting the current one.
#[derive(Debug, Clone, Copy)]
pub struct SearchController {
    output: RwSignal<SearchOutput>,
    generation: StoredValue<u64>,
}

impl SearchController {
    pub fn new() -> Self {
        Self {
            output: RwSignal::new(SearchOutput::Idle),
            generation: StoredValue::new(0),
        }
    }

    pub fn output(&self) -> RwSignal<SearchOutput> {
        self.output
    }

    /// Starts a new flow, invalidating every token handed out before.
    pub fn begin(&self) -> u64 {
        let token = self.generation.get_value() + 1;
        self.generation.set_value(token);
        token
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.generation.get_value() == token
    }

    /// Writes into the output region unless `token` has been superseded.
    pub fn publish(&self, token: u64, output: SearchOutput) {
        if self.is_current(token) {
            self.output.set(output);
        }
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}
