//! In-memory collaborators for tests.
//!
//! Enabled for this crate's own tests and, through the `test-utils` feature,
//! for downstream UI tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::customers::{
    ApiError, ApiResult, Confirmation, Confirmer, CustomerId, CustomerRow, CustomersApi,
    Navigator, QueryPayload, ResultSnapshot,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A customer row with first/last name and city set.
pub fn customer(id: &str, first: &str, last: &str, city: &str) -> CustomerRow {
    let mut row = CustomerRow::new(id);
    row.first_name = Some(first.to_owned());
    row.last_name = Some(last.to_owned());
    row.city = Some(city.to_owned());
    row.email = Some(format!("{}@example.com", first.to_lowercase()));
    row
}

#[derive(Debug, Default)]
struct FakeState {
    rows: Vec<CustomerRow>,
    searches: Vec<QueryPayload>,
    deletes: Vec<CustomerId>,
    search_delays: VecDeque<Duration>,
    fail_next_search: bool,
    fail_next_delete: bool,
    limit_cap: Option<u64>,
}

/// Customers backend kept in memory.
///
/// Searches match `search` against names and email and each filter entry
/// against its column, case-insensitively. Every call is recorded.
#[derive(Debug, Clone, Default)]
pub struct FakeCustomersApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeCustomersApi {
    pub fn new(rows: Vec<CustomerRow>) -> Self {
        let api = Self::default();
        lock(&api.state).rows = rows;
        api
    }

    /// Delays for the next searches, in call order.
    pub fn delay_searches(&self, delays: impl IntoIterator<Item = Duration>) {
        lock(&self.state).search_delays.extend(delays);
    }

    /// Serves at most `max` rows per page, whatever limit was requested,
    /// and reports the capped limit back.
    pub fn cap_limit(&self, max: u64) {
        lock(&self.state).limit_cap = Some(max);
    }

    pub fn fail_next_search(&self) {
        lock(&self.state).fail_next_search = true;
    }

    pub fn fail_next_delete(&self) {
        lock(&self.state).fail_next_delete = true;
    }

    pub fn searches(&self) -> Vec<QueryPayload> {
        lock(&self.state).searches.clone()
    }

    pub fn deletes(&self) -> Vec<CustomerId> {
        lock(&self.state).deletes.clone()
    }

    pub fn rows(&self) -> Vec<CustomerRow> {
        lock(&self.state).rows.clone()
    }
}

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|value| value.to_lowercase().contains(&needle.to_lowercase()))
}

fn matches(row: &CustomerRow, payload: &QueryPayload) -> bool {
    let search_hit = payload.search.is_empty()
        || contains_ci(Some(&row.display_name()), &payload.search)
        || contains_ci(row.email.as_deref(), &payload.search);
    search_hit
        && payload
            .filter
            .iter()
            .all(|(key, value)| contains_ci(row.value(*key), value))
}

#[async_trait]
impl CustomersApi for FakeCustomersApi {
    async fn search(&self, payload: QueryPayload) -> ApiResult<ResultSnapshot> {
        let delay = {
            let mut state = lock(&self.state);
            state.searches.push(payload.clone());
            state.search_delays.pop_front()
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = lock(&self.state);
        if std::mem::take(&mut state.fail_next_search) {
            return Err(ApiError::Status {
                status: 500,
                body: "search unavailable".to_owned(),
            });
        }

        let matching: Vec<_> = state
            .rows
            .iter()
            .filter(|row| matches(row, &payload))
            .cloned()
            .collect();
        let count = matching.len() as u64;
        let limit = state
            .limit_cap
            .map_or(payload.limit, |cap| payload.limit.min(cap));
        let data: Vec<_> = matching
            .into_iter()
            .skip(usize::try_from(payload.skip).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect();

        Ok(ResultSnapshot {
            size: data.len() as u64,
            data,
            count,
            limit,
            skip: payload.skip,
        })
    }

    async fn delete(&self, id: CustomerId) -> ApiResult<()> {
        let mut state = lock(&self.state);
        state.deletes.push(id);
        if std::mem::take(&mut state.fail_next_delete) {
            return Err(ApiError::Status {
                status: 409,
                body: "customer has open orders".to_owned(),
            });
        }
        state.rows.retain(|row| row.id != id);
        Ok(())
    }
}

/// Answers prompts from a script, then with a fallback answer.
#[derive(Debug, Clone)]
pub struct ScriptedConfirmer {
    answers: Arc<Mutex<VecDeque<Confirmation>>>,
    fallback: Confirmation,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConfirmer {
    pub fn always(answer: Confirmation) -> Self {
        Self {
            answers: Arc::default(),
            fallback: answer,
            prompts: Arc::default(),
        }
    }

    pub fn script(answers: impl IntoIterator<Item = Confirmation>, fallback: Confirmation) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.into_iter().collect())),
            ..Self::always(fallback)
        }
    }

    /// Prompts seen so far. Shared with clones.
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&mut self, prompt: &str) -> Confirmation {
        lock(&self.prompts).push(prompt.to_owned());
        lock(&self.answers).pop_front().unwrap_or(self.fallback)
    }
}

/// Records every navigation. Clones share the record.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        lock(&self.paths).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, path: &str) {
        lock(&self.paths).push(path.to_owned());
    }
}
