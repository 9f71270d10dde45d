use crate::models::ApiResponse;

/// What the panel is showing for the current fetch cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Request in flight
    #[default]
    Loading,
    /// Cycle failed; `message` is shown verbatim
    Error { message: String },
    /// Cycle succeeded
    Success { data: ApiResponse },
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Short name used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::Error { .. } => "error",
            ViewState::Success { .. } => "success",
        }
    }
}
