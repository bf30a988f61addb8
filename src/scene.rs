//! Scene store: shapes keyed by unique name, a selection set and change streams.
//!
//! Draw order is insertion order; hit-testing walks it back to front so the
//! most recently added shape wins. Every mutation delivers its events to all
//! current subscribers before returning.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::errors::SceneError;
use crate::log::debug;
use crate::shapes::Shape;
use crate::types::Point;

/// Structural change to the set of shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneChange {
    Added(String),
    Removed(String),
    /// Geometry or color of a shape changed through [`Scene::update`].
    Updated(String),
    /// Every shape was removed at once.
    Reset,
}

/// Change to the selection set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(String),
    Unselected(String),
    /// The whole selection was dropped at once.
    Cleared,
}

type Subscriber<E> = Rc<dyn Fn(&E)>;

struct Observers<E> {
    subscribers: Rc<RefCell<Vec<Subscriber<E>>>>,
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self {
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<E> Observers<E> {
    fn subscribe(&self, subscriber: Subscriber<E>) -> Subscription<E> {
        self.subscribers.borrow_mut().push(Rc::clone(&subscriber));
        Subscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    fn notify(&self, event: E) {
        // Snapshot so a callback may subscribe or drop a subscription.
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)(&event);
        }
    }
}

/// Keeps a callback registered; dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription<E> {
    subscriber: Subscriber<E>,
    subscribers: Rc<RefCell<Vec<Subscriber<E>>>>,
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

/// The live shapes of one editing session.
#[derive(Default)]
pub struct Scene {
    shapes: HashMap<String, Shape>,
    /// Names in draw order
    order: Vec<String>,
    /// Names in selection order, no duplicates
    selection: Vec<String>,
    changes: Observers<SceneChange>,
    selection_changes: Observers<SelectionChange>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------

    pub fn subscribe(&self, callback: impl Fn(&SceneChange) + 'static) -> Subscription<SceneChange> {
        self.changes.subscribe(Rc::new(callback))
    }

    pub fn subscribe_selection(
        &self,
        callback: impl Fn(&SelectionChange) + 'static,
    ) -> Subscription<SelectionChange> {
        self.selection_changes.subscribe(Rc::new(callback))
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    pub fn get(&self, name: &str) -> Option<&Shape> {
        self.shapes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.shapes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Shapes in draw order, bottom first.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.order.iter().filter_map(|name| self.shapes.get(name))
    }

    /// Shape names sorted alphabetically.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.order.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Topmost shape whose hit-test accepts `point`.
    pub fn find(&self, point: Point, epsilon: f64) -> Option<&Shape> {
        self.order
            .iter()
            .rev()
            .filter_map(|name| self.shapes.get(name))
            .find(|shape| shape.hit_test(point, epsilon))
    }

    // ------------------------------------------------------------------
    // Structural mutation
    // ------------------------------------------------------------------

    pub fn add(&mut self, mut shape: Shape) -> Result<(), SceneError> {
        if self.shapes.contains_key(shape.name()) {
            return Err(SceneError::DuplicateName {
                name: shape.name().to_string(),
            });
        }
        let name = shape.name().to_string();
        debug!(name = %name, "add shape");
        shape.set_selected(false);
        self.order.push(name.clone());
        self.shapes.insert(name.clone(), shape);
        self.changes.notify(SceneChange::Added(name));
        Ok(())
    }

    /// Remove a shape and drop it from the selection. Absent names are ignored.
    pub fn remove(&mut self, name: &str) -> Option<Shape> {
        let mut shape = self.shapes.remove(name)?;
        debug!(name, "remove shape");
        self.order.retain(|n| n != name);
        if shape.is_selected() {
            shape.set_selected(false);
            self.selection.retain(|n| n != name);
            self.selection_changes
                .notify(SelectionChange::Unselected(name.to_string()));
        }
        self.changes.notify(SceneChange::Removed(name.to_string()));
        Some(shape)
    }

    pub fn remove_many<I, S>(&mut self, names: I) -> Vec<Shape>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| self.remove(name.as_ref()))
            .collect()
    }

    pub fn remove_selected(&mut self) -> Vec<Shape> {
        let names = self.selection.clone();
        self.remove_many(names)
    }

    /// Remove every shape, emitting a single [`SceneChange::Reset`].
    pub fn clear_all(&mut self) {
        debug!(count = self.order.len(), "clear scene");
        let had_selection = !self.selection.is_empty();
        self.shapes.clear();
        self.order.clear();
        self.selection.clear();
        if had_selection {
            self.selection_changes.notify(SelectionChange::Cleared);
        }
        self.changes.notify(SceneChange::Reset);
    }

    /// Apply `f` to the named shape and announce it as updated.
    ///
    /// The name and selection flag are owned by the scene and survive `f`
    /// even if it replaces the whole shape.
    pub fn update<R>(&mut self, name: &str, f: impl FnOnce(&mut Shape) -> R) -> Option<R> {
        let shape = self.shapes.get_mut(name)?;
        let selected = shape.is_selected();
        let out = f(shape);
        shape.set_name(name);
        shape.set_selected(selected);
        self.changes.notify(SceneChange::Updated(name.to_string()));
        Some(out)
    }

    /// Apply `f` to every selected shape in selection order.
    pub fn update_selected(&mut self, mut f: impl FnMut(&mut Shape)) -> usize {
        let names = self.selection.clone();
        names
            .iter()
            .filter(|name| self.update(name, &mut f).is_some())
            .count()
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    fn mark(&mut self, name: &str, selected: bool) {
        if let Some(shape) = self.shapes.get_mut(name) {
            shape.set_selected(selected);
        }
        let event = if selected {
            self.selection.push(name.to_string());
            SelectionChange::Selected(name.to_string())
        } else {
            self.selection.retain(|n| n != name);
            SelectionChange::Unselected(name.to_string())
        };
        self.selection_changes.notify(event);
    }

    /// Select `name`. Without `multi_select` the previous selection is
    /// replaced; with it, membership of `name` is toggled.
    ///
    /// Returns `false` when no such shape exists.
    pub fn select(&mut self, name: &str, multi_select: bool) -> bool {
        if !self.shapes.contains_key(name) {
            return false;
        }
        let already = self.is_selected(name);
        if multi_select {
            self.mark(name, !already);
            return true;
        }
        let others: Vec<String> = self.selection.iter().filter(|n| *n != name).cloned().collect();
        for other in others {
            self.mark(&other, false);
        }
        if !already {
            self.mark(name, true);
        }
        true
    }

    /// Select the topmost shape under `point`. When nothing is hit and
    /// `multi_select` is off, the selection is cleared.
    pub fn select_at(&mut self, point: Point, epsilon: f64, multi_select: bool) -> Option<String> {
        let hit = self.find(point, epsilon).map(|shape| shape.name().to_string());
        match &hit {
            Some(name) => {
                self.select(name, multi_select);
            }
            None if !multi_select => self.clear_selection(),
            None => {}
        }
        hit
    }

    pub fn unselect(&mut self, name: &str) {
        if self.is_selected(name) {
            self.mark(name, false);
        }
    }

    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        for name in std::mem::take(&mut self.selection) {
            if let Some(shape) = self.shapes.get_mut(&name) {
                shape.set_selected(false);
            }
        }
        self.selection_changes.notify(SelectionChange::Cleared);
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.iter().any(|n| n == name)
    }

    /// Snapshot of the selected shapes in selection order.
    pub fn selected(&self) -> Vec<&Shape> {
        self.selection
            .iter()
            .filter_map(|name| self.shapes.get(name))
            .collect()
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("order", &self.order)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
