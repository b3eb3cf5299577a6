//! Save collaborator abstraction.
//!
//! A `SaveHandler` receives the payload of a `saved` transition. The navigator
//! owns its handler the way a page owns its `onSave` callback, and stays free of
//! any persistence or logging concern itself.
//!
//! `LoggingSaveHandler` is the stand-in used by every page: nothing is stored,
//! the payload is emitted as a log event and the save always succeeds.

use std::fmt;
use std::marker::PhantomData;

use crate::error::DashboardError;

/// Trait implemented by pluggable save collaborators.
///
/// `save` is invoked exactly once per `saved` transition, synchronously, before
/// the navigator returns to the list view. An `Err` keeps the navigator in its
/// form state.
pub trait SaveHandler {
    type Payload;

    fn save(&mut self, payload: Self::Payload) -> Result<(), DashboardError>;
}

/// Logs the payload at info level and accepts it.
pub struct LoggingSaveHandler<P> {
    entity: &'static str,
    _payload: PhantomData<fn(P)>,
}

impl<P> LoggingSaveHandler<P> {
    pub fn new(entity: &'static str) -> Self {
        LoggingSaveHandler {
            entity,
            _payload: PhantomData,
        }
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }
}

impl<P> Clone for LoggingSaveHandler<P> {
    fn clone(&self) -> Self {
        LoggingSaveHandler::new(self.entity)
    }
}

impl<P> fmt::Debug for LoggingSaveHandler<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingSaveHandler").field("entity", &self.entity).finish()
    }
}

impl<P: fmt::Debug> SaveHandler for LoggingSaveHandler<P> {
    type Payload = P;

    fn save(&mut self, payload: P) -> Result<(), DashboardError> {
        tracing::info!(entity = self.entity, ?payload, "saving");
        Ok(())
    }
}

/// Adapts a closure into a `SaveHandler`.
pub struct SaveFn<P, F> {
    f: F,
    _payload: PhantomData<fn(P)>,
}

impl<P, F> SaveFn<P, F>
where
    F: FnMut(P) -> Result<(), DashboardError>,
{
    pub fn new(f: F) -> Self {
        SaveFn { f, _payload: PhantomData }
    }
}

impl<P, F> fmt::Debug for SaveFn<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SaveFn")
    }
}

impl<P, F> SaveHandler for SaveFn<P, F>
where
    F: FnMut(P) -> Result<(), DashboardError>,
{
    type Payload = P;

    fn save(&mut self, payload: P) -> Result<(), DashboardError> {
        (self.f)(payload)
    }
}

/// Keeps every accepted payload; can be told to reject the next one.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone)]
pub struct RecordingSaveHandler<P> {
    pub saved: Vec<P>,
    pub calls: usize,
    fail_next: Option<String>,
}

#[cfg(any(test, feature = "test-utils"))]
impl<P> Default for RecordingSaveHandler<P> {
    fn default() -> Self {
        RecordingSaveHandler {
            saved: Vec::new(),
            calls: 0,
            fail_next: None,
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl<P> RecordingSaveHandler<P> {
    pub fn fail_next(&mut self, reason: impl Into<String>) {
        self.fail_next = Some(reason.into());
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl<P> SaveHandler for RecordingSaveHandler<P> {
    type Payload = P;

    fn save(&mut self, payload: P) -> Result<(), DashboardError> {
        self.calls += 1;
        if let Some(reason) = self.fail_next.take() {
            return Err(DashboardError::Save(reason));
        }
        self.saved.push(payload);
        Ok(())
    }
}
