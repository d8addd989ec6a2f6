// Copyright 2026 the Ratestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered, generational observer registry.
//!
//! ## Overview
//!
//! A [`Registry`] owns boxed subscribers and hands out small, copyable
//! [`ObserverId`] handles. Removal is by handle; a stale handle never aliases
//! a later subscriber because the slot generation must match.
//!
//! Notification order is the registration order, and stays stable across
//! removals of other subscribers. This replaces the usual "nullable mutable
//! listener list" with an explicit structure the rest of the workspace can
//! rely on.

use alloc::boxed::Box;
use alloc::vec::Vec;

/// Identifier for a registered observer.
///
/// A slot index plus a generation counter, in the same mold as a generational
/// node id: slots are reused after removal, and reuse bumps the generation so
/// old handles go stale instead of aliasing.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ObserverId(pub(crate) u32, pub(crate) u32);

impl ObserverId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// An ordered set of boxed subscribers.
///
/// `T` is typically a trait object (`Registry<dyn SomeObserver>`). The
/// registry guarantees that [`Registry::for_each`] visits live subscribers in
/// registration order.
pub struct Registry<T: ?Sized> {
    slots: Vec<Option<Box<T>>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    order: Vec<ObserverId>,
}

impl<T: ?Sized> core::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.order.len())
            .field("slots", &self.slots.len())
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Registry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Number of live subscribers.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no subscriber is registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Register a subscriber and return its handle.
    ///
    /// The new subscriber is notified after all currently registered ones.
    pub fn add(&mut self, observer: Box<T>) -> ObserverId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(observer);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ObserverId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(observer));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ObserverId uses 32-bit indices by design."
            )]
            ((self.slots.len() - 1) as u32, generation)
        };
        let id = ObserverId::new(idx, generation);
        self.order.push(id);
        id
    }

    /// Remove a subscriber by handle. Returns whether it was live.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
        self.order.retain(|o| *o != id);
        true
    }

    /// Returns true if `id` refers to a live subscriber.
    pub fn is_alive(&self, id: ObserverId) -> bool {
        self.generations.get(id.idx()).copied() == Some(id.1)
            && self.slots.get(id.idx()).is_some_and(|s| s.is_some())
    }

    /// Visit every live subscriber, in registration order.
    pub fn for_each(&mut self, mut f: impl FnMut(&mut T)) {
        for id in &self.order {
            if let Some(observer) = self.slots[id.idx()].as_mut() {
                f(observer);
            }
        }
    }
}
