use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn()>;

struct Shared<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

/// A value with synchronous change notification.
///
/// Cloning an `Observable` yields another handle to the same value, the way a
/// client handle shares one service. Listeners run after every [`update`],
/// once the value borrow has been released, so they are free to read this
/// or any other observable.
///
/// [`update`]: Observable::update
pub struct Observable<T> {
    shared: Rc<Shared<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T: 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            shared: Rc::new(Shared {
                value: RefCell::new(value),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.shared.value.borrow())
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(T::clone)
    }

    /// Mutate the value, then notify every listener.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.shared.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        let listener: Listener = Rc::new(listener);
        self.shared.listeners.borrow_mut().push((id, listener));

        let weak: Weak<Shared<T>> = Rc::downgrade(&self.shared);
        let cancel: Box<dyn FnOnce()> = Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
            }
        });
        Subscription {
            cancel: Some(cancel),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.shared.listeners.borrow().len()
    }

    fn notify(&self) {
        // Snapshot so listeners can (un)subscribe while being notified.
        let listeners: Vec<Listener> = self
            .shared
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

/// Registration guard returned by [`Observable::subscribe`].
///
/// The listener stays registered for as long as the guard lives.
#[must_use = "dropping a Subscription unregisters the listener immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
