// File: crates/hindsight-core/src/gallery.rs
// Summary: Mounting and lifecycle of all chart instances on a page.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::error::SetupError;
use crate::instance::ChartInstance;
use crate::question::Question;
use crate::resize::ResizeDebouncer;
use crate::types::HEIGHT;

/// One container the embedding page discovered: its identifier, measured
/// width/height, and whether the companion result region is present.
#[derive(Clone, Debug)]
pub struct Slot {
    pub key: String,
    pub width: i32,
    pub height: i32,
    pub has_result_panel: bool,
}

impl Slot {
    pub fn new(key: impl Into<String>, width: i32) -> Self {
        Self {
            key: key.into(),
            width,
            height: HEIGHT,
            has_result_panel: true,
        }
    }

    pub fn with_height(mut self, height: i32) -> Self {
        self.height = height;
        self
    }

    pub fn without_result_panel(mut self) -> Self {
        self.has_result_panel = false;
        self
    }
}

/// All chart instances of a page, keyed by their container identifier,
/// plus the shared resize debounce.
pub struct Gallery {
    instances: BTreeMap<String, ChartInstance>,
    debounce: ResizeDebouncer,
}

impl Gallery {
    /// Build one instance per discovered slot. A slot without a configured
    /// question or without its result panel is a setup error.
    pub fn mount(questions: &BTreeMap<String, Question>, slots: &[Slot]) -> Result<Self, SetupError> {
        let mut instances = BTreeMap::new();
        for slot in slots {
            let question = questions
                .get(&slot.key)
                .ok_or_else(|| SetupError::UnknownQuestion { key: slot.key.clone() })?;
            if !slot.has_result_panel {
                return Err(SetupError::MissingResultPanel { key: slot.key.clone() });
            }
            let instance =
                ChartInstance::new(slot.key.clone(), question.clone(), slot.width, slot.height)
                    .map_err(|source| SetupError::Config { key: slot.key.clone(), source })?;
            instances.insert(slot.key.clone(), instance);
        }
        Ok(Self {
            instances,
            debounce: ResizeDebouncer::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.instances.keys().map(String::as_str)
    }

    pub fn instances(&self) -> impl Iterator<Item = &ChartInstance> {
        self.instances.values()
    }

    pub fn instance(&self, key: &str) -> Option<&ChartInstance> {
        self.instances.get(key)
    }

    pub fn instance_mut(&mut self, key: &str) -> Option<&mut ChartInstance> {
        self.instances.get_mut(key)
    }

    /// The global refresh action: tear down and rebuild every instance
    /// from its question and fresh slot measurements.
    pub fn reset_all(&mut self, slots: &[Slot]) -> Result<(), SetupError> {
        for slot in slots {
            let Some(instance) = self.instances.get_mut(&slot.key) else {
                return Err(SetupError::UnknownQuestion { key: slot.key.clone() });
            };
            instance
                .rebuild(slot.width, slot.height)
                .map_err(|source| SetupError::Config { key: slot.key.clone(), source })?;
        }
        Ok(())
    }

    /// Record a viewport resize at `now`; bursts coalesce.
    pub fn notify_resize(&mut self, now: Instant) {
        self.debounce.notify(now);
    }

    /// Once the resize burst has gone quiet, rebuild everything. Returns
    /// whether a rebuild ran.
    pub fn poll_resize(&mut self, now: Instant, slots: &[Slot]) -> Result<bool, SetupError> {
        if !self.debounce.due(now) {
            return Ok(false);
        }
        self.reset_all(slots)?;
        Ok(true)
    }

    pub fn resize_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Advance every in-flight reveal transition by `dt`.
    pub fn advance_all(&mut self, dt: Duration) {
        for instance in self.instances.values_mut() {
            let _ = instance.advance(dt);
        }
    }
}
