use marquee_core::controller::UiEvents;

/// Intents produced by key and mouse handling, forwarded to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Submit the search box contents (may be blank; the controller warns).
    SubmitSearch(String),
    /// Open the detail panel for this identifier.
    SelectResult(String),
    /// Close the detail panel.
    CloseViewer,
}

impl UiAction {
    pub fn dispatch<E: UiEvents>(self, events: &mut E) {
        match self {
            UiAction::SubmitSearch(term) => events.on_submit_search(&term),
            UiAction::SelectResult(id) => events.on_select_result(&id),
            UiAction::CloseViewer => events.on_close_viewer(),
        }
    }
}
