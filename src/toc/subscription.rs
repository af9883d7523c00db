use std::cell::{Cell, Ref, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, trace};

use crate::toc::highlighter::{MeasurementProvider, TocHighlighter};
use crate::toc::navigation::Scroller;
use crate::utils::error::Result;

/// Callback invoked on every scroll event
pub type ScrollListener = Rc<dyn Fn()>;

/// Handle identifying one registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A source of scroll events, such as the window of a page
pub trait ScrollSource {
    fn add_listener(&self, listener: ScrollListener) -> ListenerId;
    fn remove_listener(&self, id: ListenerId) -> bool;
}

/// In-process scroll event source for a single-threaded event loop
#[derive(Default)]
pub struct ScrollEventBus {
    listeners: RefCell<Vec<(ListenerId, ScrollListener)>>,
    next_id: Cell<u64>,
}

impl ScrollEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for as long as the returned guard lives
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> ScrollSubscription<'_> {
        ScrollSubscription::new(self, Rc::new(listener))
    }

    /// Deliver one scroll event to every listener registered right now
    ///
    /// Listeners may subscribe or unsubscribe while being notified; the
    /// change applies from the next event.
    pub fn dispatch(&self) {
        let snapshot: Vec<ScrollListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in snapshot {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ScrollSource for ScrollEventBus {
    fn add_listener(&self, listener: ScrollListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }
}

/// Scoped registration of a scroll listener, removed on drop
pub struct ScrollSubscription<'s> {
    source: &'s dyn ScrollSource,
    id: ListenerId,
}

impl<'s> ScrollSubscription<'s> {
    pub fn new(source: &'s dyn ScrollSource, listener: ScrollListener) -> Self {
        let id = source.add_listener(listener);
        trace!("Scroll listener {:?} registered", id);
        Self { source, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ScrollSubscription<'_> {
    fn drop(&mut self) {
        if self.source.remove_listener(self.id) {
            trace!("Scroll listener {:?} released", self.id);
        }
    }
}

/// A highlighter attached to a scroll source for its mounted lifetime
pub struct MountedToc<'s, P> {
    highlighter: Rc<RefCell<TocHighlighter<P>>>,
    subscription: Option<ScrollSubscription<'s>>,
}

impl<'s, P: MeasurementProvider + 'static> MountedToc<'s, P> {
    /// Run the initial check and start following scroll events
    ///
    /// An empty table of contents renders nothing and listens to nothing.
    pub fn mount(highlighter: TocHighlighter<P>, source: &'s dyn ScrollSource) -> Self {
        let highlighter = Rc::new(RefCell::new(highlighter));

        if highlighter.borrow().is_empty() {
            debug!("Table of contents is empty, not subscribing to scroll events");
            return Self {
                highlighter,
                subscription: None,
            };
        }

        highlighter.borrow_mut().refresh();

        let weak: Weak<RefCell<TocHighlighter<P>>> = Rc::downgrade(&highlighter);
        let listener: ScrollListener = Rc::new(move || {
            let Some(highlighter) = weak.upgrade() else {
                return;
            };
            // A scroll triggered from inside a highlighter call is picked up
            // by the next event
            match highlighter.try_borrow_mut() {
                Ok(mut highlighter) => {
                    highlighter.refresh();
                }
                Err(_) => trace!("Highlighter busy, skipping scroll event"),
            };
        });

        Self {
            highlighter,
            subscription: Some(ScrollSubscription::new(source, listener)),
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn active_id(&self) -> Option<String> {
        self.highlighter.borrow().active_id().map(str::to_string)
    }

    pub fn highlighter(&self) -> Ref<'_, TocHighlighter<P>> {
        self.highlighter.borrow()
    }

    pub fn scroll_to_heading(
        &self,
        id: &str,
        scroller: &mut dyn Scroller,
        on_done: Option<&mut dyn FnMut()>,
    ) -> Result<()> {
        self.highlighter
            .borrow_mut()
            .scroll_to_heading(id, scroller, on_done)
    }

    /// Stop following scroll events
    pub fn unmount(self) {}
}
