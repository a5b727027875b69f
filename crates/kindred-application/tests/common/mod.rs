#![allow(dead_code)]

use async_trait::async_trait;
use kindred_core::error::{KindredError, Result};
use kindred_core::notification::{Notification, NotificationKind, NotificationSink};
use kindred_core::record::{Fields, Record, RecordId, RecordKind, RecordService};
use kindred_infrastructure::InMemoryRecordService;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Semaphore;

/// Collects notifications for assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn all(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }

    pub fn messages(&self, kind: NotificationKind) -> Vec<String> {
        self.all()
            .into_iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message)
            .collect()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

/// In-memory record service with injectable write failures and an optional
/// gate that holds updates until released.
#[derive(Debug)]
pub struct FlakyRecordService {
    inner: InMemoryRecordService,
    fail_writes: AtomicBool,
    fail_after_updates: Mutex<Option<usize>>,
    updates: AtomicUsize,
    waiting: AtomicUsize,
    gate: Option<Semaphore>,
}

impl FlakyRecordService {
    pub fn new() -> Self {
        Self {
            inner: InMemoryRecordService::new(),
            fail_writes: AtomicBool::new(false),
            fail_after_updates: Mutex::new(None),
            updates: AtomicUsize::new(0),
            waiting: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Updates wait for a permit from [`release_one`](Self::release_one).
    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::new()
        }
    }

    pub fn release_one(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    /// Number of updates currently held at the gate.
    pub fn waiting_updates(&self) -> usize {
        self.waiting.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_writes.store(failing, Ordering::SeqCst);
    }

    /// Lets `n` more updates succeed, then fails every following one.
    pub fn fail_after(&self, n: usize) {
        let done = self.updates.load(Ordering::SeqCst);
        *self.fail_after_updates.lock().unwrap() = Some(done + n);
    }

    pub fn clear_failures(&self) {
        self.set_failing(false);
        *self.fail_after_updates.lock().unwrap() = None;
    }

    /// Number of successful updates so far.
    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    fn should_fail(&self) -> bool {
        if self.fail_writes.load(Ordering::SeqCst) {
            return true;
        }
        match *self.fail_after_updates.lock().unwrap() {
            Some(limit) => self.updates.load(Ordering::SeqCst) >= limit,
            None => false,
        }
    }
}

#[async_trait]
impl RecordService for FlakyRecordService {
    async fn get_all(&self, kind: RecordKind) -> Result<Vec<Record>> {
        self.inner.get_all(kind).await
    }

    async fn get_by_id(&self, kind: RecordKind, id: RecordId) -> Result<Record> {
        self.inner.get_by_id(kind, id).await
    }

    async fn create(&self, kind: RecordKind, fields: Fields) -> Result<Record> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(KindredError::write("record store unavailable"));
        }
        self.inner.create(kind, fields).await
    }

    async fn update(&self, kind: RecordKind, id: RecordId, fields: Fields) -> Result<Record> {
        if let Some(gate) = &self.gate {
            self.waiting.fetch_add(1, Ordering::SeqCst);
            gate.acquire().await.unwrap().forget();
            self.waiting.fetch_sub(1, Ordering::SeqCst);
        }
        if self.should_fail() {
            return Err(KindredError::write("record store unavailable"));
        }
        let record = self.inner.update(kind, id, fields).await?;
        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(record)
    }

    async fn delete(&self, kind: RecordKind, id: RecordId) -> Result<bool> {
        self.inner.delete(kind, id).await
    }
}

/// Record service whose every call fails as if the backend were down.
pub struct UnreachableRecordService;

#[async_trait]
impl RecordService for UnreachableRecordService {
    async fn get_all(&self, _kind: RecordKind) -> Result<Vec<Record>> {
        Err(KindredError::io("connection refused"))
    }

    async fn get_by_id(&self, _kind: RecordKind, _id: RecordId) -> Result<Record> {
        Err(KindredError::io("connection refused"))
    }

    async fn create(&self, _kind: RecordKind, _fields: Fields) -> Result<Record> {
        Err(KindredError::io("connection refused"))
    }

    async fn update(&self, _kind: RecordKind, _id: RecordId, _fields: Fields) -> Result<Record> {
        Err(KindredError::io("connection refused"))
    }

    async fn delete(&self, _kind: RecordKind, _id: RecordId) -> Result<bool> {
        Err(KindredError::io("connection refused"))
    }
}
