//! Ordered collection that refuses two members with the same domain identity.
//!
//! `UniqueList` is the backbone of every entity list in the address book. It
//! keeps insertion order, replaces in place, and hands out [`ListView`]s: live,
//! read-only windows onto the same storage that observers can subscribe to.
//!
//! The storage is shared through `Rc<RefCell<..>>`, so lists and views are
//! single-threaded by construction. Only the owning `UniqueList` can mutate
//! (mutators take `&mut self`); observers receive the change synchronously,
//! after the mutation is complete and the storage borrow has been released.

use core::cmp::Ordering;
use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::entity::{Entity, Identity};
use crate::error::{DomainError, DomainResult};

/// A change notification fired to subscribed observers.
#[derive(Debug, Clone, PartialEq)]
pub enum ListChange<T> {
    Added { index: usize, item: T },
    Replaced { index: usize, old: T, new: T },
    Removed { index: usize, item: T },
    /// Whole contents swapped by `set_all`.
    Reset { len: usize },
    /// Same members, new order.
    Reordered,
}

type Observer<T> = Box<dyn Fn(&ListChange<T>)>;

struct Shared<T> {
    items: RefCell<Vec<T>>,
    observers: RefCell<Vec<Observer<T>>>,
}

impl<T> Shared<T> {
    fn with_items(items: Vec<T>) -> Rc<Self> {
        Rc::new(Self {
            items: RefCell::new(items),
            observers: RefCell::new(Vec::new()),
        })
    }

    fn notify(&self, change: ListChange<T>) {
        // An observer subscribing from inside a notification is rejected by
        // `subscribe`, so this borrow cannot be contended.
        if let Ok(observers) = self.observers.try_borrow() {
            for observer in observers.iter() {
                observer(&change);
            }
        }
    }

    fn subscribe(&self, observer: Observer<T>) -> DomainResult<()> {
        let mut observers = self
            .observers
            .try_borrow_mut()
            .map_err(|_| DomainError::unsupported("subscribing while a change is being delivered"))?;
        observers.push(observer);
        Ok(())
    }
}

/// Ordered list of entities with unique domain identity.
pub struct UniqueList<T> {
    shared: Rc<Shared<T>>,
}

impl<T> UniqueList<T>
where
    T: Identity + Clone,
{
    pub fn new() -> Self {
        Self {
            shared: Shared::with_items(Vec::new()),
        }
    }

    /// Identity-based membership test.
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Index of the first member sharing `item`'s identity.
    pub fn position(&self, item: &T) -> Option<usize> {
        self.shared.items.borrow().iter().position(|e| e.is_same(item))
    }

    /// Appends `item`.
    pub fn add(&mut self, item: T) -> DomainResult<()> {
        if self.contains(&item) {
            return Err(DomainError::duplicate(T::KIND));
        }

        let index = {
            let mut items = self.shared.items.borrow_mut();
            items.push(item.clone());
            items.len() - 1
        };

        debug!(kind = T::KIND, index, "entity added");
        self.shared.notify(ListChange::Added { index, item });
        Ok(())
    }

    /// Replaces the member matching `target` with `edited`, in place.
    ///
    /// `edited` may keep `target`'s identity; it must not take the identity of
    /// any other member.
    pub fn set_one(&mut self, target: &T, edited: T) -> DomainResult<()> {
        let index = self
            .position(target)
            .ok_or(DomainError::not_found(T::KIND))?;

        let old = {
            let mut items = self.shared.items.borrow_mut();
            let clash = items
                .iter()
                .enumerate()
                .any(|(i, e)| i != index && e.is_same(&edited));
            if clash {
                return Err(DomainError::duplicate(T::KIND));
            }
            core::mem::replace(&mut items[index], edited.clone())
        };

        debug!(kind = T::KIND, index, "entity replaced");
        self.shared.notify(ListChange::Replaced {
            index,
            old,
            new: edited,
        });
        Ok(())
    }

    /// Removes the member matching `item` and returns it.
    pub fn remove(&mut self, item: &T) -> DomainResult<T> {
        let index = self
            .position(item)
            .ok_or(DomainError::not_found(T::KIND))?;

        let removed = self.shared.items.borrow_mut().remove(index);

        debug!(kind = T::KIND, index, "entity removed");
        self.shared.notify(ListChange::Removed {
            index,
            item: removed.clone(),
        });
        Ok(removed)
    }

    /// Replaces the whole contents. Nothing changes if `items` holds two
    /// members with the same identity.
    pub fn set_all(&mut self, items: Vec<T>) -> DomainResult<()> {
        if !are_unique(&items) {
            return Err(DomainError::duplicate(T::KIND));
        }

        let len = items.len();
        *self.shared.items.borrow_mut() = items;

        debug!(kind = T::KIND, len, "list contents replaced");
        self.shared.notify(ListChange::Reset { len });
        Ok(())
    }

    /// Replaces the whole contents with a copy of `other`'s.
    pub fn set_all_from(&mut self, other: &UniqueList<T>) -> DomainResult<()> {
        self.set_all(other.to_vec())
    }

    /// Stable sort of the members.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.shared.items.borrow_mut().sort_by(compare);
        debug!(kind = T::KIND, "list reordered");
        self.shared.notify(ListChange::Reordered);
    }

    /// Live, unmodifiable view onto this list.
    pub fn as_view(&self) -> ListView<T> {
        ListView {
            shared: Rc::clone(&self.shared),
        }
    }

    pub fn subscribe<F>(&self, observer: F) -> DomainResult<()>
    where
        F: Fn(&ListChange<T>) + 'static,
    {
        self.shared.subscribe(Box::new(observer))
    }

    pub fn len(&self) -> usize {
        self.shared.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.shared.items.borrow().get(index).cloned()
    }

    /// First member satisfying `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.shared.items.borrow().iter().find(|e| predicate(e)).cloned()
    }

    /// Snapshot of the current members.
    pub fn to_vec(&self) -> Vec<T> {
        self.shared.items.borrow().clone()
    }

    /// Runs `f` against the current members without cloning them.
    pub fn with_items<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.shared.items.borrow())
    }
}

impl<T> UniqueList<T>
where
    T: Identity + Entity + Clone,
{
    /// Resolves a weak reference. `None` is a normal outcome for ids whose
    /// entity has been removed.
    pub fn get_by_id(&self, id: &T::Id) -> Option<T> {
        self.find(|e| e.id() == id)
    }
}

fn are_unique<T: Identity>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, a)| items[i + 1..].iter().all(|b| !a.is_same(b)))
}

impl<T> Default for UniqueList<T>
where
    T: Identity + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: the clone gets its own storage and no observers.
impl<T: Clone> Clone for UniqueList<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Shared::with_items(self.shared.items.borrow().clone()),
        }
    }
}

impl<T: PartialEq> PartialEq for UniqueList<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.shared.items.borrow() == *other.shared.items.borrow()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for UniqueList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.shared.items.borrow().iter()).finish()
    }
}

/// Read-only window onto a [`UniqueList`].
///
/// Reflects every later mutation of the list it came from. The mutating
/// methods exist only to reject the call with `UnsupportedOperation`.
pub struct ListView<T> {
    shared: Rc<Shared<T>>,
}

impl<T: Clone> ListView<T> {
    pub fn len(&self) -> usize {
        self.shared.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.shared.items.borrow().get(index).cloned()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.shared.items.borrow().clone()
    }

    pub fn with_items<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.shared.items.borrow())
    }

    /// Registers a synchronous change observer.
    ///
    /// Fails with `UnsupportedOperation` when called from inside another
    /// observer.
    pub fn subscribe<F>(&self, observer: F) -> DomainResult<()>
    where
        F: Fn(&ListChange<T>) + 'static,
    {
        self.shared.subscribe(Box::new(observer))
    }

    pub fn push(&self, _item: T) -> DomainResult<()> {
        Err(read_only())
    }

    pub fn remove(&self, _index: usize) -> DomainResult<T> {
        Err(read_only())
    }

    pub fn clear(&self) -> DomainResult<()> {
        Err(read_only())
    }
}

fn read_only() -> DomainError {
    DomainError::unsupported("list view is read-only")
}

impl<T> Clone for ListView<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for ListView<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.shared.items.borrow().iter()).finish()
    }
}
