//! Typed user actions and the pure reducer over [`QueryState`].
//!
//! The reducer never performs I/O. It returns the next state plus an
//! [`Effect`] which the controller executes.
//!
//! Narrowing the result set (filter or search) starts again from the first
//! page; a tab change keeps the offset.

use thiserror::Error;

use super::columns::ColumnKey;
use super::customer::CustomerId;
use super::query::{QueryState, Tab};
use crate::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomersAction {
    TabChanged(Tab),
    FilterChanged { key: ColumnKey, value: String },
    SearchChanged { text: String },
    PageChanged { skip: u64 },
    ClearRequested,
    DeleteRequested { id: CustomerId },
    DeleteConfirmed { id: CustomerId },
    DeleteDeclined,
    RowActivated { id: CustomerId },
    Refresh,
    NoticeDismissed,
}

/// Side effect requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch with the state the reduction produced.
    Fetch,
    /// Ask the confirmer whether `id` should be deleted.
    ConfirmDelete(CustomerId),
    Delete(CustomerId),
    /// Drop a pending delete confirmation.
    CancelDelete,
    Navigate(String),
    DismissNotice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub next: QueryState,
    pub effect: Effect,
}

impl Reduction {
    fn unchanged(state: &QueryState, effect: Effect) -> Self {
        Self {
            next: state.clone(),
            effect,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReduceError {
    #[error("Column `{0}` has no filter")]
    NotFilterable(ColumnKey),
}

/// Computes the next query state and the effect for `action`.
pub fn reduce(state: &QueryState, action: &CustomersAction) -> Result<Reduction, ReduceError> {
    let reduction = match action {
        CustomersAction::TabChanged(tab) => Reduction {
            next: QueryState {
                tab: Some(*tab),
                ..state.clone()
            },
            effect: Effect::Fetch,
        },
        CustomersAction::FilterChanged { key, value } => {
            if !key.is_filterable() {
                return Err(ReduceError::NotFilterable(*key));
            }
            let mut next = state.clone();
            next.filter.insert(*key, value.clone());
            next.skip = None;
            Reduction {
                next,
                effect: Effect::Fetch,
            }
        }
        CustomersAction::SearchChanged { text } => Reduction {
            next: QueryState {
                search_text: text.clone(),
                skip: None,
                ..state.clone()
            },
            effect: Effect::Fetch,
        },
        CustomersAction::PageChanged { skip } => Reduction {
            next: QueryState {
                skip: Some(*skip),
                ..state.clone()
            },
            effect: Effect::Fetch,
        },
        CustomersAction::ClearRequested => Reduction {
            next: QueryState::default(),
            effect: Effect::Fetch,
        },
        CustomersAction::Refresh => Reduction::unchanged(state, Effect::Fetch),
        CustomersAction::DeleteRequested { id } => {
            Reduction::unchanged(state, Effect::ConfirmDelete(*id))
        }
        CustomersAction::DeleteConfirmed { id } => Reduction::unchanged(state, Effect::Delete(*id)),
        CustomersAction::DeleteDeclined => Reduction::unchanged(state, Effect::CancelDelete),
        CustomersAction::RowActivated { id } => Reduction::unchanged(
            state,
            Effect::Navigate(Route::CustomerDetail(*id).path()),
        ),
        CustomersAction::NoticeDismissed => Reduction::unchanged(state, Effect::DismissNotice),
    };
    Ok(reduction)
}
