//! Paginated resource stores.
//!
//! A [`ResourceStore`] owns the list/detail state for one entity type and is
//! the only writer of that state. Reads go through the shared
//! [`RequestCache`], so concurrent identical requests from different views
//! collapse into one network call; mutations go straight to the API and then
//! invalidate the cache keys they could have made stale.
//!
//! # Example
//!
//! ```ignore
//! let store = ResourceStore::<City>::new(api, cache, 10).with_loading(loading);
//!
//! store.fetch_list(0, 10, CityFilter::default()).await;
//! let state = store.state();
//! if let Some(err) = &state.error {
//!     show_error(err);
//! }
//! ```

mod state;
#[cfg(test)]
pub(crate) mod testing;

pub use state::{ListQuery, ResourceState, StoreStatus};

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::api::{Resource, ResourceApi};
use crate::cache::{ExecuteOptions, RequestCache};
use crate::error::ApiError;
use crate::loading::{LoadingGuard, LoadingManager};

/// State container and actions for one entity type.
pub struct ResourceStore<R: Resource> {
  api: Arc<dyn ResourceApi<R>>,
  cache: RequestCache,
  loading: Option<LoadingManager>,
  state: watch::Sender<ResourceState<R>>,
}

impl<R: Resource> ResourceStore<R> {
  pub fn new(api: Arc<dyn ResourceApi<R>>, cache: RequestCache, page_size: u32) -> Self {
    let (state, _) = watch::channel(ResourceState::new(page_size));
    Self {
      api,
      cache,
      loading: None,
      state,
    }
  }

  /// Report busy flags under `<name>.list`, `<name>.detail` and `<name>.mutation`.
  pub fn with_loading(mut self, loading: LoadingManager) -> Self {
    self.loading = Some(loading);
    self
  }

  /// Snapshot of the current state.
  pub fn state(&self) -> ResourceState<R> {
    self.state.borrow().clone()
  }

  /// Receiver that is notified after every state change.
  pub fn subscribe(&self) -> watch::Receiver<ResourceState<R>> {
    self.state.subscribe()
  }

  pub fn loading_key(operation: &str) -> String {
    format!("{}.{}", R::NAME, operation)
  }

  fn modify(&self, f: impl FnOnce(&mut ResourceState<R>)) {
    self.state.send_modify(f);
  }

  fn track(&self, operation: &str) -> Option<LoadingGuard> {
    self
      .loading
      .as_ref()
      .map(|loading| loading.track(&Self::loading_key(operation)))
  }

  /// Load a page of the list.
  ///
  /// Does nothing if the store already shows exactly this page, size and
  /// filter combination. Failures are recorded in `error`, never returned.
  pub async fn fetch_list(&self, page: u32, size: u32, filters: R::Filter) {
    self
      .load_list(
        ListQuery {
          page,
          size,
          filters,
        },
        false,
      )
      .await;
  }

  /// Refetch the current list query, bypassing cache and short-circuit.
  pub async fn refresh_list(&self) {
    let query = self.state.borrow().list_query();
    self.load_list(query, true).await;
  }

  /// Apply new filters and go back to the first page.
  pub async fn set_filters(&self, filters: R::Filter) {
    let size = self.state.borrow().list_query().size;
    self.fetch_list(0, size, filters).await;
  }

  /// Move to another page of the current filter.
  pub async fn set_page(&self, page: u32) {
    let ListQuery { size, filters, .. } = self.state.borrow().list_query();
    self.fetch_list(page, size, filters).await;
  }

  async fn load_list(&self, query: ListQuery<R::Filter>, force: bool) {
    let unchanged = self.state.borrow().loaded_list.as_ref() == Some(&query);
    if unchanged && !force {
      debug!(resource = R::NAME, page = query.page, "list already loaded");
      self.state.send_if_modified(|s| s.keep_loaded(query));
      return;
    }

    self.modify(|s| {
      s.begin();
      s.requested_list = Some(query.clone());
    });
    let _busy = self.track("list");

    let key = R::list_cache_key(query.page, query.size, &query.filters);
    let api = Arc::clone(&self.api);
    let request = query.clone();
    let result = self
      .cache
      .execute(&key, ExecuteOptions::new().force_refresh(force), move || async move {
        api.list(request.page, request.size, &request.filters).await
      })
      .await;

    self.modify(|s| {
      if s.requested_list.as_ref() != Some(&query) {
        debug!(resource = R::NAME, page = query.page, "discarding superseded list response");
        s.discard();
        return;
      }

      match result {
        Ok(page) => {
          s.items = page.content;
          s.total_elements = page.total_elements;
          s.total_pages = page.total_pages;
          s.page = query.page;
          s.page_size = query.size;
          s.filters = query.filters.clone();
          s.loaded_list = Some(query);
          s.succeed();
        }
        Err(e) => {
          warn!(resource = R::NAME, error = %e, "failed to load list");
          s.fail(e.to_string());
        }
      }
    });
  }

  /// Load one entity into `current`.
  ///
  /// Does nothing if `current` already holds this id. While a different
  /// entity loads, `current` is `None`.
  pub async fn fetch_one(&self, id: i64) {
    self.load_one(id, false).await;
  }

  /// Reload one entity even if it is already `current`.
  pub async fn fetch_one_forced(&self, id: i64) {
    self.load_one(id, true).await;
  }

  async fn load_one(&self, id: i64, force: bool) {
    let holds_id = self.state.borrow().current_id() == Some(id);
    if holds_id && !force {
      debug!(resource = R::NAME, id, "entity already loaded");
      return;
    }

    self.modify(|s| {
      s.begin();
      s.requested_id = Some(id);
      if s.current_id() != Some(id) {
        s.current = None;
      }
    });
    let _busy = self.track("detail");

    let api = Arc::clone(&self.api);
    let result = self
      .cache
      .execute(
        &R::detail_cache_key(id),
        ExecuteOptions::new().force_refresh(force),
        move || async move { api.get(id).await },
      )
      .await;

    self.modify(|s| {
      if s.requested_id != Some(id) {
        debug!(resource = R::NAME, id, "discarding superseded detail response");
        s.discard();
        return;
      }

      match result {
        Ok(entity) => {
          s.current = Some(entity);
          s.succeed();
        }
        Err(e) => {
          warn!(resource = R::NAME, id, error = %e, "failed to load entity");
          s.fail(e.to_string());
        }
      }
    });
  }

  /// Create an entity, then reload the current list page.
  pub async fn create(&self, payload: R::Payload) -> Result<R, ApiError> {
    self.modify(ResourceState::begin);
    let _busy = self.track("mutation");

    let created = match self.api.create(&payload).await {
      Ok(created) => created,
      Err(e) => return Err(self.mutation_failed("create", e)),
    };

    self.cache.clear_cache(&[R::LIST_KEY]);
    self.modify(ResourceState::succeed);
    self.refresh_list().await;

    Ok(created)
  }

  /// Update an entity, then bring `current` and the list back in line with the backend.
  ///
  /// Returns the updated entity when the backend echoes it.
  pub async fn update(&self, id: i64, payload: R::Payload) -> Result<Option<R>, ApiError> {
    self.modify(ResourceState::begin);
    let _busy = self.track("mutation");

    let echoed = match self.api.update(id, &payload).await {
      Ok(echoed) => echoed,
      Err(e) => return Err(self.mutation_failed("update", e)),
    };

    self.cache.clear_cache(&[R::DETAIL_KEY, R::LIST_KEY]);

    let mut current_matches = false;
    self.modify(|s| {
      current_matches = s.current_id() == Some(id);
      if let Some(entity) = &echoed {
        if current_matches {
          s.current = Some(entity.clone());
        }
        if let Some(item) = s.items.iter_mut().find(|item| item.id() == id) {
          *item = entity.clone();
        }
      }
      s.succeed();
    });

    if echoed.is_none() && current_matches {
      self.load_one(id, true).await;
    }
    self.refresh_list().await;

    Ok(echoed)
  }

  /// Delete an entity and drop it from the loaded page without refetching.
  ///
  /// `total_elements` is left as is until the next list load.
  pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
    self.modify(ResourceState::begin);
    let _busy = self.track("mutation");

    if let Err(e) = self.api.delete(id).await {
      return Err(self.mutation_failed("delete", e));
    }

    self.cache.clear_cache(&[R::DETAIL_KEY, R::LIST_KEY]);
    self.modify(|s| {
      s.items.retain(|item| item.id() != id);
      if s.current_id() == Some(id) {
        s.current = None;
      }
      if s.requested_id == Some(id) {
        s.requested_id = None;
      }
      // The next fetch_list must hit the backend again
      s.loaded_list = None;
      s.succeed();
    });

    Ok(())
  }

  fn mutation_failed(&self, action: &str, error: ApiError) -> ApiError {
    warn!(resource = R::NAME, action, error = %error, "mutation failed");
    let message = error.to_string();
    self.modify(|s| s.fail(message));
    error
  }

  /// Forget the loaded entity.
  pub fn clear_current(&self) {
    self.modify(|s| {
      s.current = None;
      s.requested_id = None;
    });
  }

  /// Return to the initial empty state, keeping the page size.
  pub fn reset(&self) {
    self.modify(|s| {
      let page_size = s.page_size;
      *s = ResourceState::new(page_size);
    });
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::{City, CityFilter, CityRequest, SportClub, SportClubFilter, SportClubRequest};
  use crate::loading::GLOBAL_KEY;
  use std::sync::Mutex;
  use std::time::Duration;
  use testing::MockApi;

  fn city(id: i64, name: &str) -> City {
    City {
      id,
      name: name.to_string(),
      region: None,
      latitude: None,
      longitude: None,
    }
  }

  fn city_request(name: &str) -> CityRequest {
    CityRequest {
      name: name.to_string(),
      region: Some("Updated".to_string()),
      latitude: None,
      longitude: None,
    }
  }

  fn apply_city(id: i64, req: &CityRequest) -> City {
    City {
      id,
      name: req.name.clone(),
      region: req.region.clone(),
      latitude: req.latitude,
      longitude: req.longitude,
    }
  }

  fn club(id: i64, name: &str) -> SportClub {
    SportClub {
      id,
      name: name.to_string(),
      description: None,
      address: None,
      phone: None,
      city_id: None,
      sport_type_ids: Vec::new(),
      latitude: None,
      longitude: None,
      active: true,
    }
  }

  fn apply_club(id: i64, req: &SportClubRequest) -> SportClub {
    SportClub {
      name: req.name.clone(),
      active: req.active,
      ..club(id, "")
    }
  }

  fn cities(n: i64) -> Vec<City> {
    (1..=n).map(|id| city(id, &format!("City {}", id))).collect()
  }

  fn city_store(api: &Arc<MockApi<City>>, cache: RequestCache) -> ResourceStore<City> {
    ResourceStore::new(Arc::clone(api) as Arc<dyn ResourceApi<City>>, cache, 10)
  }

  #[tokio::test(start_paused = true)]
  async fn test_fetch_list_populates_state() {
    let api = Arc::new(MockApi::new(vec![club(1, "A"), club(2, "B")], apply_club));
    let store = ResourceStore::new(
      Arc::clone(&api) as Arc<dyn ResourceApi<SportClub>>,
      RequestCache::new(),
      10,
    );
    let filters = SportClubFilter {
      active: Some(true),
      ..Default::default()
    };

    store.fetch_list(0, 10, filters.clone()).await;

    let state = store.state();
    assert_eq!(state.items, vec![club(1, "A"), club(2, "B")]);
    assert_eq!(state.total_elements, 2);
    assert_eq!(state.total_pages, 1);
    assert_eq!(state.page, 0);
    assert_eq!(state.filters, filters);
    assert_eq!(state.status, StoreStatus::Success);
    assert_eq!(api.last_filter.lock().unwrap().clone(), Some(filters));
  }

  #[tokio::test(start_paused = true)]
  async fn test_identical_fetch_list_is_skipped() {
    let api = Arc::new(MockApi::new(cities(3), apply_city));
    let store = city_store(&api, RequestCache::new());

    store.fetch_list(0, 10, CityFilter::default()).await;
    store.fetch_list(0, 10, CityFilter::default()).await;

    assert_eq!(api.list_calls(), 1);
  }

  #[tokio::test(start_paused = true)]
  async fn test_concurrent_identical_fetches_share_one_call() {
    let api = Arc::new(MockApi::new(cities(3), apply_city));
    let store = city_store(&api, RequestCache::new());

    tokio::join!(
      store.fetch_list(0, 10, CityFilter::default()),
      store.fetch_list(0, 10, CityFilter::default()),
      store.fetch_list(0, 10, CityFilter::default()),
    );

    assert_eq!(api.list_calls(), 1);
    assert_eq!(store.state().items.len(), 3);
    assert!(!store.state().is_loading());
  }

  #[tokio::test(start_paused = true)]
  async fn test_second_store_reads_shared_cache() {
    let api = Arc::new(MockApi::new(cities(3), apply_city));
    let cache = RequestCache::new();
    let first = city_store(&api, cache.clone());
    let second = city_store(&api, cache);

    first.fetch_list(0, 10, CityFilter::default()).await;
    second.fetch_list(0, 10, CityFilter::default()).await;

    assert_eq!(api.list_calls(), 1);
    assert_eq!(second.state().items.len(), 3);
  }

  #[tokio::test(start_paused = true)]
  async fn test_filter_change_always_fetches() {
    let api = Arc::new(MockApi::new(cities(3), apply_city));
    let store = city_store(&api, RequestCache::new());

    store.fetch_list(0, 10, CityFilter::default()).await;
    store
      .fetch_list(
        0,
        10,
        CityFilter {
          name: Some("Almaty".to_string()),
          ..Default::default()
        },
      )
      .await;

    assert_eq!(api.list_calls(), 2);
    assert_eq!(store.state().filters.name.as_deref(), Some("Almaty"));
  }

  #[tokio::test(start_paused = true)]
  async fn test_set_filters_resets_to_first_page() {
    let api = Arc::new(MockApi::new(cities(25), apply_city));
    let store = city_store(&api, RequestCache::new());

    store.fetch_list(2, 10, CityFilter::default()).await;
    assert_eq!(store.state().items.len(), 5);

    store
      .set_filters(CityFilter {
        region: Some("North".to_string()),
        ..Default::default()
      })
      .await;

    let state = store.state();
    assert_eq!(state.page, 0);
    assert_eq!(state.page_size, 10);
    assert_eq!(state.filters.region.as_deref(), Some("North"));
  }

  #[tokio::test(start_paused = true)]
  async fn test_superseded_list_response_is_discarded() {
    let api = Arc::new(MockApi::new(cities(30), apply_city));
    api.delay_page(0, Duration::from_millis(100));
    api.delay_page(1, Duration::from_millis(10));
    let store = city_store(&api, RequestCache::new());

    tokio::join!(
      store.fetch_list(0, 10, CityFilter::default()),
      store.fetch_list(1, 10, CityFilter::default()),
    );

    let state = store.state();
    assert_eq!(state.page, 1);
    assert_eq!(state.items.first().map(|c| c.id), Some(11));
    assert_eq!(state.status, StoreStatus::Success);
  }

  #[tokio::test(start_paused = true)]
  async fn test_returning_to_loaded_page_drops_slower_response() {
    let api = Arc::new(MockApi::new(cities(30), apply_city));
    let store = city_store(&api, RequestCache::new());
    store.fetch_list(0, 10, CityFilter::default()).await;

    api.delay_page(1, Duration::from_millis(100));
    tokio::join!(store.fetch_list(1, 10, CityFilter::default()), async {
      tokio::time::sleep(Duration::from_millis(10)).await;
      store.fetch_list(0, 10, CityFilter::default()).await;
      assert_eq!(store.state().status, StoreStatus::Loading);
    });

    let state = store.state();
    assert_eq!(api.list_calls(), 2);
    assert_eq!(state.page, 0);
    assert_eq!(state.items.first().map(|c| c.id), Some(1));
    assert_eq!(state.status, StoreStatus::Success);
  }

  #[tokio::test(start_paused = true)]
  async fn test_returning_to_loaded_page_clears_error() {
    let api = Arc::new(MockApi::new(cities(30), apply_city));
    let store = city_store(&api, RequestCache::new());
    store.fetch_list(0, 10, CityFilter::default()).await;

    api.fail_next(ApiError::Network("timed out".to_string()));
    store.fetch_list(1, 10, CityFilter::default()).await;
    assert_eq!(store.state().status, StoreStatus::Error);

    store.fetch_list(0, 10, CityFilter::default()).await;

    let state = store.state();
    assert_eq!(api.list_calls(), 2);
    assert_eq!(state.page, 0);
    assert_eq!(state.error, None);
    assert_eq!(state.status, StoreStatus::Success);
    assert_eq!(state.list_query().page, 0);
  }

  #[tokio::test(start_paused = true)]
  async fn test_list_failure_keeps_previous_items() {
    let api = Arc::new(MockApi::new(cities(3), apply_city));
    let store = city_store(&api, RequestCache::new());
    store.fetch_list(0, 10, CityFilter::default()).await;

    api.fail_next(ApiError::Network("connection reset".to_string()));
    store.refresh_list().await;

    let state = store.state();
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.status, StoreStatus::Error);
    assert_eq!(state.error.as_deref(), Some("Network error: connection reset"));

    // retrying clears the error
    store.refresh_list().await;
    assert_eq!(store.state().error, None);
  }

  #[tokio::test(start_paused = true)]
  async fn test_fetch_one_skips_same_id() {
    let api = Arc::new(MockApi::new(cities(3), apply_city));
    let store = city_store(&api, RequestCache::new());

    store.fetch_one(2).await;
    store.fetch_one(2).await;

    assert_eq!(api.get_calls(), 1);
    assert_eq!(store.state().current, Some(city(2, "City 2")));
  }

  #[tokio::test(start_paused = true)]
  async fn test_fetch_one_clears_current_while_loading_other_id() {
    let api = Arc::new(MockApi::new(cities(3), apply_city));
    let store = city_store(&api, RequestCache::new());
    store.fetch_one(1).await;

    api.delay_get(Duration::from_millis(50));
    let observed = Mutex::new(None);
    tokio::join!(store.fetch_one(2), async {
      tokio::time::sleep(Duration::from_millis(10)).await;
      *observed.lock().unwrap() = Some(store.state().current.clone());
    });

    assert_eq!(observed.into_inner().unwrap(), Some(None));
    assert_eq!(store.state().current_id(), Some(2));
  }

  #[tokio::test(start_paused = true)]
  async fn test_fetch_one_not_found_sets_error() {
    let api = Arc::new(MockApi::new(cities(1), apply_city));
    let store = city_store(&api, RequestCache::new());

    store.fetch_one(9).await;

    let state = store.state();
    assert_eq!(state.current, None);
    assert_eq!(
      state.error.as_deref(),
      Some("Request failed (404): cities 9 not found")
    );
  }

  #[tokio::test(start_paused = true)]
  async fn test_create_refetches_current_page() {
    let api = Arc::new(MockApi::new(cities(15), apply_city));
    let store = city_store(&api, RequestCache::new());
    store.fetch_list(1, 10, CityFilter::default()).await;

    let created = store.create(city_request("Shymkent")).await.unwrap();

    let state = store.state();
    assert_eq!(created.id, 16);
    assert_eq!(api.list_calls(), 2);
    assert_eq!(state.page, 1);
    assert_eq!(state.total_elements, 16);
    assert_eq!(state.items.last().map(|c| c.id), Some(16));
  }

  #[tokio::test(start_paused = true)]
  async fn test_update_without_echo_refetches_current() {
    let api = Arc::new(MockApi::new(cities(5), apply_city).without_echo());
    let store = city_store(&api, RequestCache::new());
    store.fetch_list(0, 10, CityFilter::default()).await;
    store.fetch_one(5).await;

    let echoed = store.update(5, city_request("Taraz")).await.unwrap();

    let state = store.state();
    assert_eq!(echoed, None);
    assert_eq!(api.get_calls(), 2);
    assert_eq!(state.current.as_ref().map(|c| c.name.as_str()), Some("Taraz"));
    let listed = state.items.iter().find(|c| c.id == 5).unwrap();
    assert_eq!(listed.name, "Taraz");
    assert_eq!(listed.region.as_deref(), Some("Updated"));
  }

  #[tokio::test(start_paused = true)]
  async fn test_update_with_echo_sets_current_directly() {
    let api = Arc::new(MockApi::new(cities(5), apply_city));
    let store = city_store(&api, RequestCache::new());
    store.fetch_list(0, 10, CityFilter::default()).await;
    store.fetch_one(5).await;

    let echoed = store.update(5, city_request("Taraz")).await.unwrap();

    let state = store.state();
    assert_eq!(echoed.map(|c| c.name), Some("Taraz".to_string()));
    assert_eq!(api.get_calls(), 1);
    assert_eq!(state.current.map(|c| c.name), Some("Taraz".to_string()));
    assert_eq!(api.list_calls(), 2);
  }

  #[tokio::test(start_paused = true)]
  async fn test_update_invalidates_detail_cache() {
    let api = Arc::new(MockApi::new(cities(3), apply_city));
    let cache = RequestCache::new();
    let store = city_store(&api, cache.clone());
    store.fetch_one(3).await;
    store.clear_current();

    store.update(3, city_request("Aktobe")).await.unwrap();
    assert!(cache.get_cached::<City>("fetchCity_3").is_none());

    store.fetch_one(3).await;
    assert_eq!(api.get_calls(), 2);
    assert_eq!(store.state().current.map(|c| c.name), Some("Aktobe".to_string()));
  }

  #[tokio::test(start_paused = true)]
  async fn test_delete_removes_item_locally() {
    let api = Arc::new(MockApi::new(vec![club(1, "A"), club(2, "B")], apply_club));
    let store = ResourceStore::new(
      Arc::clone(&api) as Arc<dyn ResourceApi<SportClub>>,
      RequestCache::new(),
      10,
    );
    let filters = SportClubFilter {
      active: Some(true),
      ..Default::default()
    };
    store.fetch_list(0, 10, filters).await;
    store.fetch_one(1).await;

    store.delete(1).await.unwrap();

    let state = store.state();
    assert_eq!(state.items, vec![club(2, "B")]);
    assert_eq!(state.current, None);
    assert_eq!(state.total_elements, 2);
    assert_eq!(api.list_calls(), 1);
  }

  #[tokio::test(start_paused = true)]
  async fn test_mutation_failure_is_returned_and_recorded() {
    let api = Arc::new(MockApi::new(cities(2), apply_city));
    let store = city_store(&api, RequestCache::new());
    store.fetch_list(0, 10, CityFilter::default()).await;

    api.fail_next(ApiError::Status {
      status: 409,
      message: "City already exists".to_string(),
    });
    let err = store.delete(1).await.unwrap_err();

    let state = store.state();
    assert_eq!(api.mutation_calls(), 1);
    assert_eq!(err.status(), Some(409));
    assert_eq!(state.items.len(), 2);
    assert_eq!(
      state.error.as_deref(),
      Some("Request failed (409): City already exists")
    );
    assert_eq!(state.status, StoreStatus::Error);
  }

  #[tokio::test(start_paused = true)]
  async fn test_loading_flags_follow_actions() {
    let api = Arc::new(MockApi::new(cities(2), apply_city));
    let loading = LoadingManager::new();
    let store = city_store(&api, RequestCache::new()).with_loading(loading.clone());

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = loading.subscribe(GLOBAL_KEY, move |active| sink.lock().unwrap().push(active));

    store.fetch_list(0, 10, CityFilter::default()).await;

    assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    assert!(!loading.is_loading(&ResourceStore::<City>::loading_key("list")));
  }

  #[tokio::test(start_paused = true)]
  async fn test_subscribers_see_state_changes() {
    let api = Arc::new(MockApi::new(cities(2), apply_city));
    let store = city_store(&api, RequestCache::new());
    let mut rx = store.subscribe();

    store.fetch_list(0, 10, CityFilter::default()).await;

    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().items.len(), 2);
  }

  #[tokio::test(start_paused = true)]
  async fn test_reset_keeps_page_size() {
    let api = Arc::new(MockApi::new(cities(2), apply_city));
    let store = ResourceStore::new(
      Arc::clone(&api) as Arc<dyn ResourceApi<City>>,
      RequestCache::new(),
      25,
    );
    store.fetch_list(0, 25, CityFilter::default()).await;

    store.reset();

    let state = store.state();
    assert!(state.items.is_empty());
    assert_eq!(state.page_size, 25);
    assert_eq!(state.status, StoreStatus::Idle);
  }
}
