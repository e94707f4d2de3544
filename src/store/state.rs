use crate::api::Resource;

/// Lifecycle of the most recent action on a store.
///
/// `Success` and `Error` last until the next action starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreStatus {
  /// No action has run yet
  #[default]
  Idle,
  /// At least one action is in flight
  Loading,
  /// The last action to settle succeeded
  Success,
  /// The last action to settle failed; see `ResourceState::error`
  Error,
}

/// Parameters that produced a list page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F> {
  pub page: u32,
  pub size: u32,
  pub filters: F,
}

/// Everything a UI reads from a store.
#[derive(Debug, Clone)]
pub struct ResourceState<R: Resource> {
  pub items: Vec<R>,
  pub current: Option<R>,
  pub page: u32,
  pub page_size: u32,
  pub total_elements: u64,
  pub total_pages: u32,
  pub filters: R::Filter,
  pub status: StoreStatus,
  pub error: Option<String>,

  /// Query whose result is in `items`
  pub(crate) loaded_list: Option<ListQuery<R::Filter>>,
  /// Latest list query issued; older responses are discarded
  pub(crate) requested_list: Option<ListQuery<R::Filter>>,
  /// Latest detail id issued
  pub(crate) requested_id: Option<i64>,
  pending: usize,
}

impl<R: Resource> ResourceState<R> {
  pub fn new(page_size: u32) -> Self {
    Self {
      items: Vec::new(),
      current: None,
      page: 0,
      page_size,
      total_elements: 0,
      total_pages: 0,
      filters: R::Filter::default(),
      status: StoreStatus::Idle,
      error: None,
      loaded_list: None,
      requested_list: None,
      requested_id: None,
      pending: 0,
    }
  }

  pub fn is_loading(&self) -> bool {
    self.pending > 0
  }

  pub fn current_id(&self) -> Option<i64> {
    self.current.as_ref().map(|c| c.id())
  }

  /// The query a refresh should repeat: the latest one issued, or the
  /// parameters currently shown.
  pub fn list_query(&self) -> ListQuery<R::Filter> {
    self.requested_list.clone().unwrap_or_else(|| ListQuery {
      page: self.page,
      size: self.page_size,
      filters: self.filters.clone(),
    })
  }

  pub(crate) fn begin(&mut self) {
    self.pending += 1;
    self.status = StoreStatus::Loading;
    self.error = None;
  }

  pub(crate) fn succeed(&mut self) {
    self.pending = self.pending.saturating_sub(1);
    self.error = None;
    self.status = self.settled_status(StoreStatus::Success);
  }

  pub(crate) fn fail(&mut self, message: String) {
    self.pending = self.pending.saturating_sub(1);
    self.error = Some(message);
    self.status = self.settled_status(StoreStatus::Error);
  }

  /// Mark `query` as the latest list request when it is already the one
  /// shown. In-flight responses for other queries are then dropped and any
  /// error from them is cleared. Returns whether anything changed.
  pub(crate) fn keep_loaded(&mut self, query: ListQuery<R::Filter>) -> bool {
    let retargeted = self.requested_list.as_ref() != Some(&query);
    self.requested_list = Some(query);
    let had_error = self.error.take().is_some();
    let status = self.settled_status(StoreStatus::Success);
    let status_changed = self.status != status;
    self.status = status;
    retargeted || had_error || status_changed
  }

  /// Settle an action whose result was dropped, leaving data and error alone.
  pub(crate) fn discard(&mut self) {
    self.pending = self.pending.saturating_sub(1);
    let settled = if self.error.is_some() {
      StoreStatus::Error
    } else {
      StoreStatus::Success
    };
    self.status = self.settled_status(settled);
  }

  fn settled_status(&self, settled: StoreStatus) -> StoreStatus {
    if self.pending > 0 {
      StoreStatus::Loading
    } else {
      settled
    }
  }
}
