//! View-state holder for the customers table.
//!
//! Owns the [`QueryState`] and the latest [`ResultSnapshot`]. Actions go
//! through [`reduce`]; effects run here. Network work is spawned on the task
//! runtime and comes back as [`ControllerMessage`]s, applied by
//! [`CustomersController::poll`] on the UI thread.

use std::fmt;
use std::sync::Arc;

use backoffice_states::{LatestOnly, TaskId, TaskRuntime, Waker};

use super::action::{CustomersAction, Effect, reduce};
use super::api::{ApiResult, CustomersApi};
use super::collaborators::{Confirmation, Confirmer, DeferredConfirmer, Navigator};
use super::customer::{CustomerId, ResultSnapshot};
use super::notice::Notice;
use super::pagination::{PageInfo, skip_for_page, total_pages};
use super::query::{QueryState, build_query};
use crate::session::Session;

pub const NOT_AUTHORIZED: &str = "Not authorized.";

/// Task kind for customer searches.
pub struct SearchCustomers;

pub enum ControllerMessage {
    /// `None` when the fetch was cancelled by a newer one.
    FetchFinished {
        id: TaskId,
        result: Option<ApiResult<ResultSnapshot>>,
    },
    DeleteFinished {
        id: CustomerId,
        result: ApiResult<()>,
    },
}

pub struct CustomersController {
    query: QueryState,
    snapshot: Option<ResultSnapshot>,
    notice: Option<Notice>,
    pending_delete: Option<CustomerId>,
    session: Session,
    page_size: u64,
    api: Arc<dyn CustomersApi>,
    confirmer: Box<dyn Confirmer>,
    navigator: Box<dyn Navigator>,
    runtime: TaskRuntime<ControllerMessage>,
    fetches: LatestOnly<SearchCustomers>,
}

impl fmt::Debug for CustomersController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomersController")
            .field("query", &self.query)
            .field("rows", &self.snapshot.as_ref().map(|s| s.data.len()))
            .field("notice", &self.notice)
            .field("pending_delete", &self.pending_delete)
            .field("page_size", &self.page_size)
            .field("runtime", &self.runtime)
            .finish_non_exhaustive()
    }
}

impl CustomersController {
    /// Creates a controller that confirms deletes through a modal.
    ///
    /// Nothing is fetched until the first action, usually [`CustomersAction::Refresh`].
    pub fn new(
        api: Arc<dyn CustomersApi>,
        navigator: Box<dyn Navigator>,
        runtime: TaskRuntime<ControllerMessage>,
        session: Session,
        page_size: u64,
    ) -> Self {
        Self {
            query: QueryState::default(),
            snapshot: None,
            notice: None,
            pending_delete: None,
            session,
            page_size,
            api,
            confirmer: Box::new(DeferredConfirmer),
            navigator,
            runtime,
            fetches: LatestOnly::new(),
        }
    }

    pub fn with_confirmer(mut self, confirmer: Box<dyn Confirmer>) -> Self {
        self.confirmer = confirmer;
        self
    }

    /// Called whenever a task result is ready, e.g. to request a repaint.
    pub fn set_waker(&mut self, waker: Waker) {
        self.runtime.set_waker(waker);
    }

    pub fn dispatch(&mut self, action: CustomersAction) {
        let reduction = match reduce(&self.query, &action) {
            Ok(reduction) => reduction,
            Err(err) => {
                log::warn!("Ignoring {action:?}: {err}");
                return;
            }
        };
        self.query = reduction.next;
        self.run(reduction.effect);
    }

    /// Applies every task result that is ready. Call once per frame.
    pub fn poll(&mut self) {
        for message in self.runtime.drain() {
            self.apply(message);
        }
    }

    /// Applies task results until no task is outstanding, including the ones
    /// spawned while settling.
    pub async fn settle(&mut self) {
        while let Some(message) = self.runtime.next().await {
            self.apply(message);
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// `None` until the first fetch was accepted.
    pub fn snapshot(&self) -> Option<&ResultSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.is_none()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetches.in_flight()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Customer awaiting an answer from the confirmation modal.
    pub fn pending_delete(&self) -> Option<CustomerId> {
        self.pending_delete
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn can_delete(&self) -> bool {
        self.session.can_manage_customers()
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Position of the shown page, as reported by the last accepted result.
    ///
    /// The server may cap `limit` below the requested page size, so its
    /// `skip`/`limit` win over the query. Before the first result the query
    /// and the configured page size are used.
    pub fn page_info(&self) -> PageInfo {
        match &self.snapshot {
            Some(snapshot) => PageInfo::new(
                snapshot.skip,
                self.effective_limit(snapshot),
                snapshot.count,
            ),
            None => PageInfo::new(self.query.skip.unwrap_or(0), self.page_size, 0),
        }
    }

    fn effective_limit(&self, snapshot: &ResultSnapshot) -> u64 {
        if snapshot.limit > 0 {
            snapshot.limit
        } else {
            self.page_size
        }
    }

    /// Prompt shown when asking to delete `id`.
    pub fn delete_prompt(&self, id: CustomerId) -> String {
        let name = self
            .snapshot
            .as_ref()
            .and_then(|snapshot| snapshot.row(id))
            .map(|row| row.display_name())
            .filter(|name| !name.is_empty());
        match name {
            Some(name) => format!("Delete customer {name}?"),
            None => format!("Delete customer {id}?"),
        }
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::Fetch => self.fetch(),
            Effect::ConfirmDelete(id) => self.confirm_delete(id),
            Effect::Delete(id) => self.confirm_pending(id),
            Effect::CancelDelete => {
                if let Some(id) = self.pending_delete.take() {
                    log::debug!("Delete of customer {id} declined");
                }
            }
            Effect::Navigate(path) => self.navigator.navigate(&path),
            Effect::DismissNotice => self.notice = None,
        }
    }

    fn fetch(&mut self) {
        let payload = build_query(&self.query, self.page_size);
        let task = self.fetches.begin();
        let id = task.id();
        log::debug!("Fetching customers, generation {}", id.generation());

        let api = Arc::clone(&self.api);
        self.runtime.spawn_cancellable(
            &task,
            async move { api.search(payload).await },
            move |result| ControllerMessage::FetchFinished { id, result },
        );
    }

    fn authorize(&mut self, id: CustomerId) -> bool {
        if self.session.can_manage_customers() {
            return true;
        }
        log::warn!("Rejected delete of customer {id}: session lacks capability");
        self.pending_delete = None;
        self.notice = Some(Notice::error(NOT_AUTHORIZED));
        false
    }

    fn confirm_delete(&mut self, id: CustomerId) {
        if !self.authorize(id) {
            return;
        }
        let prompt = self.delete_prompt(id);
        match self.confirmer.confirm(&prompt) {
            Confirmation::Accepted => self.delete(id),
            Confirmation::Declined => log::debug!("Delete of customer {id} declined"),
            Confirmation::Pending => self.pending_delete = Some(id),
        }
    }

    /// Answer from the modal: only the customer it was opened for is deleted.
    fn confirm_pending(&mut self, id: CustomerId) {
        if !self.authorize(id) {
            return;
        }
        if self.pending_delete != Some(id) {
            log::warn!(
                "Ignoring delete confirmation for customer {id}: pending is {:?}",
                self.pending_delete
            );
            return;
        }
        self.delete(id);
    }

    fn delete(&mut self, id: CustomerId) {
        if !self.authorize(id) {
            return;
        }
        self.pending_delete = None;
        log::info!("Deleting customer {id}");

        let api = Arc::clone(&self.api);
        self.runtime.spawn(async move {
            let result = api.delete(id).await;
            ControllerMessage::DeleteFinished { id, result }
        });
    }

    /// The offset lies past the end of the result set, e.g. after a tab
    /// change or deleting the last row of the last page.
    fn return_to_last_page(&mut self, count: u64, limit: u64) {
        let skip = skip_for_page(total_pages(count, limit), limit);
        log::debug!("Offset past {count} customers, moving to skip {skip}");
        self.query.skip = (skip > 0).then_some(skip);
        self.fetch();
    }

    fn apply(&mut self, message: ControllerMessage) {
        match message {
            ControllerMessage::FetchFinished { id, result: None } => {
                log::trace!("Fetch generation {} cancelled", id.generation());
            }
            ControllerMessage::FetchFinished {
                id,
                result: Some(result),
            } => {
                if !self.fetches.accept(id) {
                    return;
                }
                match result {
                    Ok(snapshot) => {
                        log::debug!(
                            "Loaded {} of {} customers",
                            snapshot.data.len(),
                            snapshot.count
                        );
                        let overshoot = snapshot.skip > 0 && snapshot.skip >= snapshot.count;
                        let limit = self.effective_limit(&snapshot);
                        let count = snapshot.count;
                        self.snapshot = Some(snapshot);
                        if overshoot {
                            self.return_to_last_page(count, limit);
                        }
                    }
                    Err(err) => {
                        log::warn!("Failed to load customers: {err}");
                        self.notice = Some(Notice::error(format!("Could not load customers: {err}")));
                    }
                }
            }
            ControllerMessage::DeleteFinished { id, result: Ok(()) } => {
                log::info!("Deleted customer {id}");
                self.notice = Some(Notice::info("Customer deleted."));
                self.fetch();
            }
            ControllerMessage::DeleteFinished {
                id,
                result: Err(err),
            } => {
                log::warn!("Failed to delete customer {id}: {err}");
                self.notice = Some(Notice::error(format!("Could not delete customer: {err}")));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::customers::{ColumnKey, NoticeKind, Tab};
    use crate::session::MANAGES_CUSTOMERS;
    use crate::testing::{FakeCustomersApi, RecordingNavigator, ScriptedConfirmer, customer};

    fn rows() -> Vec<crate::customers::CustomerRow> {
        vec![
            customer("c-1", "Ada", "Lovelace", "London"),
            customer("c-2", "John", "Smith", "Leeds"),
            customer("c-3", "Jane", "Smith", "York"),
        ]
    }

    struct Fixture {
        api: FakeCustomersApi,
        navigator: RecordingNavigator,
        controller: CustomersController,
    }

    /// `count` customers named Jones, except for a single Smith at `smith_at`.
    fn numbered(count: usize, smith_at: usize) -> Vec<crate::customers::CustomerRow> {
        (0..count)
            .map(|i| {
                let last = if i == smith_at { "Smith" } else { "Jones" };
                customer(&format!("n-{i}"), "Pat", last, "Oslo")
            })
            .collect()
    }

    fn fixture(session: Session, confirmer: ScriptedConfirmer) -> Fixture {
        fixture_with(rows(), 10, session, confirmer)
    }

    fn fixture_with(
        rows: Vec<crate::customers::CustomerRow>,
        page_size: u64,
        session: Session,
        confirmer: ScriptedConfirmer,
    ) -> Fixture {
        let api = FakeCustomersApi::new(rows);
        let navigator = RecordingNavigator::default();
        let runtime = TaskRuntime::current().expect("inside tokio");
        let controller = CustomersController::new(
            Arc::new(api.clone()),
            Box::new(navigator.clone()),
            runtime,
            session,
            page_size,
        )
        .with_confirmer(Box::new(confirmer));
        Fixture {
            api,
            navigator,
            controller,
        }
    }

    fn manager() -> Session {
        Session::new([MANAGES_CUSTOMERS])
    }

    #[tokio::test]
    async fn initial_mount_fetches_active_customers() {
        let mut f = fixture(Session::default(), ScriptedConfirmer::always(Confirmation::Declined));
        assert!(f.controller.is_loading());

        f.controller.dispatch(CustomersAction::Refresh);
        f.controller.settle().await;

        let searches = f.api.searches();
        assert_eq!(searches.len(), 1);
        assert_eq!(searches[0].status, Tab::Active);
        assert!(searches[0].filter.is_empty());
        assert_eq!(searches[0].search, "");
        assert_eq!(searches[0].limit, 10);
        assert!(!f.controller.is_loading());
        assert_eq!(f.controller.snapshot().map(|s| s.data.len()), Some(3));
        assert_eq!(f.controller.page_info().current, 1);
    }

    #[tokio::test]
    async fn filter_then_clear_issues_expected_payloads() {
        let mut f = fixture(Session::default(), ScriptedConfirmer::always(Confirmation::Declined));

        f.controller.dispatch(CustomersAction::FilterChanged {
            key: ColumnKey::LastName,
            value: "Smith".to_owned(),
        });
        f.controller.settle().await;
        assert_eq!(f.controller.snapshot().map(|s| s.count), Some(2));

        f.controller.dispatch(CustomersAction::ClearRequested);
        f.controller.settle().await;

        let searches = f.api.searches();
        assert_eq!(searches.len(), 2);
        assert_eq!(
            searches[0].filter.get(&ColumnKey::LastName).map(String::as_str),
            Some("Smith")
        );
        assert_eq!(searches[1], build_query(&QueryState::default(), 10));
        assert!(f.controller.query().is_zero());
        assert_eq!(f.controller.snapshot().map(|s| s.count), Some(3));
    }

    #[tokio::test]
    async fn non_filterable_column_issues_no_fetch() {
        let mut f = fixture(Session::default(), ScriptedConfirmer::always(Confirmation::Declined));

        f.controller.dispatch(CustomersAction::FilterChanged {
            key: ColumnKey::Updated,
            value: "2024".to_owned(),
        });
        f.controller.settle().await;

        assert!(f.api.searches().is_empty());
        assert!(f.controller.query().filter.is_empty());
    }

    #[tokio::test]
    async fn confirmed_delete_refetches_once_with_same_query() {
        let mut f = fixture(manager(), ScriptedConfirmer::always(Confirmation::Accepted));
        f.controller.dispatch(CustomersAction::SearchChanged {
            text: "smith".to_owned(),
        });
        f.controller.settle().await;
        let before = f.controller.query().clone();

        f.controller.dispatch(CustomersAction::DeleteRequested {
            id: CustomerId::new("c-2"),
        });
        f.controller.settle().await;

        assert_eq!(f.api.deletes(), vec![CustomerId::new("c-2")]);
        let searches = f.api.searches();
        assert_eq!(searches.len(), 2);
        assert_eq!(searches[0], searches[1]);
        assert_eq!(f.controller.query(), &before);
        assert_eq!(f.controller.snapshot().map(|s| s.count), Some(1));
        assert_eq!(
            f.controller.notice().map(|n| n.kind),
            Some(NoticeKind::Info)
        );
    }

    #[tokio::test]
    async fn confirmation_prompt_names_the_customer() {
        let confirmer = ScriptedConfirmer::always(Confirmation::Declined);
        let mut f = fixture(manager(), confirmer.clone());
        f.controller.dispatch(CustomersAction::Refresh);
        f.controller.settle().await;

        f.controller.dispatch(CustomersAction::DeleteRequested {
            id: CustomerId::new("c-1"),
        });

        assert_eq!(confirmer.prompts(), vec!["Delete customer Ada Lovelace?".to_owned()]);
    }

    #[tokio::test]
    async fn declined_delete_is_a_no_op() {
        let mut f = fixture(manager(), ScriptedConfirmer::always(Confirmation::Declined));
        f.controller.dispatch(CustomersAction::Refresh);
        f.controller.settle().await;

        f.controller.dispatch(CustomersAction::DeleteRequested {
            id: CustomerId::new("c-1"),
        });
        f.controller.settle().await;

        assert!(f.api.deletes().is_empty());
        assert_eq!(f.api.searches().len(), 1);
        assert!(f.controller.notice().is_none());
    }

    #[tokio::test]
    async fn pending_confirmation_waits_for_modal_answer() {
        let mut f = fixture(manager(), ScriptedConfirmer::always(Confirmation::Pending));
        let id = CustomerId::new("c-3");

        f.controller.dispatch(CustomersAction::DeleteRequested { id });
        assert_eq!(f.controller.pending_delete(), Some(id));

        f.controller.dispatch(CustomersAction::DeleteDeclined);
        assert_eq!(f.controller.pending_delete(), None);

        f.controller.dispatch(CustomersAction::DeleteRequested { id });
        f.controller.dispatch(CustomersAction::DeleteConfirmed { id });
        f.controller.settle().await;

        assert_eq!(f.controller.pending_delete(), None);
        assert_eq!(f.api.deletes(), vec![id]);
        assert_eq!(f.api.searches().len(), 1);
    }

    #[tokio::test]
    async fn unauthorized_delete_raises_notice() {
        let confirmer = ScriptedConfirmer::always(Confirmation::Accepted);
        let mut f = fixture(Session::default(), confirmer.clone());

        f.controller.dispatch(CustomersAction::DeleteRequested {
            id: CustomerId::new("c-1"),
        });
        f.controller.dispatch(CustomersAction::DeleteConfirmed {
            id: CustomerId::new("c-1"),
        });
        f.controller.settle().await;

        assert!(confirmer.prompts().is_empty());
        assert!(f.api.deletes().is_empty());
        let notice = f.controller.notice().expect("notice raised");
        assert!(notice.is_error());
        assert_eq!(notice.message, NOT_AUTHORIZED);

        f.controller.dispatch(CustomersAction::NoticeDismissed);
        assert!(f.controller.notice().is_none());
    }

    #[tokio::test]
    async fn failed_delete_does_not_refetch() {
        let mut f = fixture(manager(), ScriptedConfirmer::always(Confirmation::Accepted));
        f.api.fail_next_delete();

        f.controller.dispatch(CustomersAction::DeleteRequested {
            id: CustomerId::new("c-1"),
        });
        f.controller.settle().await;

        assert_eq!(f.api.deletes().len(), 1);
        assert!(f.api.searches().is_empty());
        assert!(f.controller.notice().is_some_and(Notice::is_error));
        assert_eq!(f.api.rows().len(), 3);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_snapshot() {
        let mut f = fixture(Session::default(), ScriptedConfirmer::always(Confirmation::Declined));
        f.controller.dispatch(CustomersAction::Refresh);
        f.controller.settle().await;

        f.api.fail_next_search();
        f.controller.dispatch(CustomersAction::TabChanged(Tab::Inactive));
        f.controller.settle().await;

        assert_eq!(f.controller.snapshot().map(|s| s.data.len()), Some(3));
        assert!(f.controller.notice().is_some_and(Notice::is_error));
        assert_eq!(f.controller.query().tab, Some(Tab::Inactive));
    }

    #[tokio::test(start_paused = true)]
    async fn latest_fetch_wins_over_slower_earlier_one() {
        let mut f = fixture(Session::default(), ScriptedConfirmer::always(Confirmation::Declined));
        f.api
            .delay_searches([Duration::from_secs(5), Duration::from_millis(10)]);

        f.controller.dispatch(CustomersAction::SearchChanged {
            text: "ada".to_owned(),
        });
        tokio::task::yield_now().await;
        f.controller.dispatch(CustomersAction::SearchChanged {
            text: "smith".to_owned(),
        });
        f.controller.settle().await;

        assert_eq!(f.api.searches().len(), 2);
        assert!(!f.controller.is_fetching());
        let snapshot = f.controller.snapshot().expect("latest result applied");
        assert_eq!(snapshot.count, 2);
        assert!(snapshot.row(CustomerId::new("c-1")).is_none());
    }

    #[tokio::test]
    async fn row_activation_navigates_to_detail() {
        let mut f = fixture(manager(), ScriptedConfirmer::always(Confirmation::Accepted));

        f.controller.dispatch(CustomersAction::RowActivated {
            id: CustomerId::new("c-2"),
        });
        f.controller.settle().await;

        assert_eq!(f.navigator.paths(), vec!["customers/c-2".to_owned()]);
        assert!(f.api.searches().is_empty());
        assert!(f.controller.query().is_zero());
    }

    #[tokio::test]
    async fn page_change_moves_current_page() {
        let mut f = fixture_with(
            numbered(30, 0),
            10,
            Session::default(),
            ScriptedConfirmer::always(Confirmation::Declined),
        );

        f.controller.dispatch(CustomersAction::PageChanged { skip: 20 });
        f.controller.settle().await;

        assert_eq!(f.api.searches()[0].skip, 20);
        assert_eq!(f.controller.page_info().current, 3);
    }

    #[tokio::test]
    async fn page_info_follows_limit_returned_by_server() {
        let mut f = fixture_with(
            numbered(200, 0),
            100,
            Session::default(),
            ScriptedConfirmer::always(Confirmation::Declined),
        );
        f.api.cap_limit(20);

        f.controller.dispatch(CustomersAction::PageChanged { skip: 40 });
        f.controller.settle().await;

        assert_eq!(f.api.searches()[0].limit, 100);
        let info = f.controller.page_info();
        assert_eq!(info.limit, 20);
        assert_eq!(info.current, 3, "skip 40 at 20 per page is page 3");
        assert_eq!(info.total, 10);
        assert_eq!(info.skip_for(4), 60);
    }

    #[tokio::test]
    async fn page_info_before_first_result_uses_query() {
        let f = fixture(Session::default(), ScriptedConfirmer::always(Confirmation::Declined));

        let info = f.controller.page_info();

        assert_eq!(info.current, 1);
        assert_eq!(info.limit, 10);
        assert_eq!(info.total, 1);
    }

    #[tokio::test]
    async fn filter_after_paging_starts_from_first_page() {
        let mut f = fixture_with(
            numbered(26, 7),
            10,
            Session::default(),
            ScriptedConfirmer::always(Confirmation::Declined),
        );
        f.controller.dispatch(CustomersAction::PageChanged { skip: 20 });
        f.controller.settle().await;
        assert_eq!(f.controller.snapshot().map(|s| s.data.len()), Some(6));

        f.controller.dispatch(CustomersAction::FilterChanged {
            key: ColumnKey::LastName,
            value: "Smith".to_owned(),
        });
        f.controller.settle().await;

        let searches = f.api.searches();
        assert_eq!(searches.len(), 2);
        assert_eq!(searches[1].skip, 0);
        assert_eq!(f.controller.snapshot().map(|s| s.data.len()), Some(1));
        let info = f.controller.page_info();
        assert_eq!((info.current, info.total), (1, 1));
    }

    #[tokio::test]
    async fn deleting_only_row_of_last_page_moves_back_a_page() {
        let mut f = fixture_with(
            numbered(11, 0),
            10,
            manager(),
            ScriptedConfirmer::always(Confirmation::Accepted),
        );
        f.controller.dispatch(CustomersAction::PageChanged { skip: 10 });
        f.controller.settle().await;
        assert_eq!(f.controller.snapshot().map(|s| s.data.len()), Some(1));

        f.controller.dispatch(CustomersAction::DeleteRequested {
            id: CustomerId::new("n-10"),
        });
        f.controller.settle().await;

        let skips: Vec<_> = f.api.searches().iter().map(|search| search.skip).collect();
        assert_eq!(skips, vec![10, 10, 0]);
        assert_eq!(f.controller.query().skip, None);
        assert_eq!(f.controller.snapshot().map(|s| s.data.len()), Some(10));
        assert_eq!(f.controller.page_info().current, 1);
    }

    #[tokio::test]
    async fn confirmation_for_another_customer_is_ignored() {
        let mut f = fixture(manager(), ScriptedConfirmer::always(Confirmation::Pending));
        let pending = CustomerId::new("c-1");

        f.controller.dispatch(CustomersAction::DeleteRequested { id: pending });
        f.controller.dispatch(CustomersAction::DeleteConfirmed {
            id: CustomerId::new("c-2"),
        });
        f.controller.settle().await;

        assert!(f.api.deletes().is_empty());
        assert_eq!(f.controller.pending_delete(), Some(pending));

        f.controller.dispatch(CustomersAction::DeleteConfirmed { id: pending });
        f.controller.settle().await;

        assert_eq!(f.api.deletes(), vec![pending]);
    }

    #[tokio::test]
    async fn confirmation_without_request_is_ignored() {
        let mut f = fixture(manager(), ScriptedConfirmer::always(Confirmation::Pending));

        f.controller.dispatch(CustomersAction::DeleteConfirmed {
            id: CustomerId::new("c-3"),
        });
        f.controller.settle().await;

        assert!(f.api.deletes().is_empty());
        assert!(f.api.searches().is_empty());
    }
}
