//! In-memory `ResourceApi` for store tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::api::{Page, Resource, ResourceApi};
use crate::error::ApiError;

/// Builds the stored entity for an id from a create/update payload.
pub type Apply<R> = fn(i64, &<R as Resource>::Payload) -> R;

pub struct MockApi<R: Resource> {
  items: Mutex<Vec<R>>,
  apply: Apply<R>,
  /// Whether `update` answers with the updated entity
  echo_updates: bool,
  fail_next: Mutex<Option<ApiError>>,
  list_delays: Mutex<HashMap<u32, Duration>>,
  get_delay: Mutex<Duration>,
  pub last_filter: Mutex<Option<R::Filter>>,
  list_calls: AtomicUsize,
  get_calls: AtomicUsize,
  mutation_calls: AtomicUsize,
}

impl<R: Resource> MockApi<R> {
  pub fn new(items: Vec<R>, apply: Apply<R>) -> Self {
    Self {
      items: Mutex::new(items),
      apply,
      echo_updates: true,
      fail_next: Mutex::new(None),
      list_delays: Mutex::new(HashMap::new()),
      get_delay: Mutex::new(Duration::from_millis(1)),
      last_filter: Mutex::new(None),
      list_calls: AtomicUsize::new(0),
      get_calls: AtomicUsize::new(0),
      mutation_calls: AtomicUsize::new(0),
    }
  }

  pub fn without_echo(mut self) -> Self {
    self.echo_updates = false;
    self
  }

  pub fn fail_next(&self, error: ApiError) {
    *self.fail_next.lock().unwrap() = Some(error);
  }

  pub fn delay_page(&self, page: u32, delay: Duration) {
    self.list_delays.lock().unwrap().insert(page, delay);
  }

  pub fn delay_get(&self, delay: Duration) {
    *self.get_delay.lock().unwrap() = delay;
  }

  pub fn list_calls(&self) -> usize {
    self.list_calls.load(Ordering::SeqCst)
  }

  pub fn get_calls(&self) -> usize {
    self.get_calls.load(Ordering::SeqCst)
  }

  pub fn mutation_calls(&self) -> usize {
    self.mutation_calls.load(Ordering::SeqCst)
  }

  fn take_failure(&self) -> Result<(), ApiError> {
    match self.fail_next.lock().unwrap().take() {
      Some(err) => Err(err),
      None => Ok(()),
    }
  }
}

#[async_trait]
impl<R: Resource> ResourceApi<R> for MockApi<R> {
  async fn list(&self, page: u32, size: u32, filter: &R::Filter) -> Result<Page<R>, ApiError> {
    self.list_calls.fetch_add(1, Ordering::SeqCst);
    *self.last_filter.lock().unwrap() = Some(filter.clone());

    let delay = self
      .list_delays
      .lock()
      .unwrap()
      .get(&page)
      .copied()
      .unwrap_or(Duration::from_millis(1));
    tokio::time::sleep(delay).await;
    self.take_failure()?;

    let items = self.items.lock().unwrap().clone();
    let total = items.len() as u64;
    let content = items
      .chunks(size.max(1) as usize)
      .nth(page as usize)
      .map(<[R]>::to_vec)
      .unwrap_or_default();
    Ok(Page::from_items(content, page, size, total))
  }

  async fn get(&self, id: i64) -> Result<R, ApiError> {
    self.get_calls.fetch_add(1, Ordering::SeqCst);
    let delay = *self.get_delay.lock().unwrap();
    tokio::time::sleep(delay).await;
    self.take_failure()?;

    self
      .items
      .lock()
      .unwrap()
      .iter()
      .find(|i| i.id() == id)
      .cloned()
      .ok_or_else(|| ApiError::Status {
        status: 404,
        message: format!("{} {} not found", R::NAME, id),
      })
  }

  async fn create(&self, payload: &R::Payload) -> Result<R, ApiError> {
    self.mutation_calls.fetch_add(1, Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(1)).await;
    self.take_failure()?;

    let mut items = self.items.lock().unwrap();
    let id = items.iter().map(|i| i.id()).max().unwrap_or(0) + 1;
    let created = (self.apply)(id, payload);
    items.push(created.clone());
    Ok(created)
  }

  async fn update(&self, id: i64, payload: &R::Payload) -> Result<Option<R>, ApiError> {
    self.mutation_calls.fetch_add(1, Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(1)).await;
    self.take_failure()?;

    let updated = (self.apply)(id, payload);
    let mut items = self.items.lock().unwrap();
    let slot = items
      .iter_mut()
      .find(|i| i.id() == id)
      .ok_or_else(|| ApiError::Status {
        status: 404,
        message: "not found".to_string(),
      })?;
    *slot = updated.clone();

    Ok(self.echo_updates.then_some(updated))
  }

  async fn delete(&self, id: i64) -> Result<(), ApiError> {
    self.mutation_calls.fetch_add(1, Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(1)).await;
    self.take_failure()?;

    self.items.lock().unwrap().retain(|i| i.id() != id);
    Ok(())
  }
}
