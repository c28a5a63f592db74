//! Application controller.
//!
//! # Responsibility
//! - Orchestrate startup: construct the list, wire view-facing
//!   subscriptions, route filters, trigger the initial load.
//! - Carry the user-input commit semantics (Enter/blur) so the whole kernel
//!   is testable without any view.
//!
//! # Invariants
//! - Startup order is strict: list construction, then subscriptions, then
//!   `load()`.
//! - The filter channel is owned here and passed explicitly to the router;
//!   there is no global event state.

use crate::list::todo_list::{ListEvent, TodoList};
use crate::model::todo::{Todo, TodoId};
use crate::projection::counts::Counts;
use crate::projection::filter::Filter;
use crate::repo::todo_repo::{RepoResult, TodoRepository};
use crate::router::{FilterChannel, FilterRouter, SharedFilterChannel};
use log::info;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Session-level controller binding the aggregate, the router, and the
/// derived display state consumed by the view layer.
pub struct App<R: TodoRepository> {
    list: TodoList<R>,
    channel: SharedFilterChannel,
    router: FilterRouter,
    filter: Rc<Cell<Filter>>,
    dirty: Rc<Cell<bool>>,
    started: bool,
}

impl<R: TodoRepository> App<R> {
    /// Constructs the controller and its list; nothing is loaded yet.
    pub fn new(repo: R) -> Self {
        let channel: SharedFilterChannel = Rc::new(RefCell::new(FilterChannel::new()));
        let router = FilterRouter::new(Rc::clone(&channel));
        Self {
            list: TodoList::new(repo),
            channel,
            router,
            filter: Rc::new(Cell::new(Filter::All)),
            dirty: Rc::new(Cell::new(false)),
            started: false,
        }
    }

    /// Runs the startup sequence.
    ///
    /// Wires the render-dirty subscription (standing in for the bound
    /// views) and the display-filter subscription before loading, so the
    /// initial population is observed like any other mutation.
    pub fn start(&mut self) -> RepoResult<()> {
        if self.started {
            return Ok(());
        }
        self.started = true;

        let dirty = Rc::clone(&self.dirty);
        self.list.subscribe(move |_event: &ListEvent| dirty.set(true));

        let filter = Rc::clone(&self.filter);
        let dirty = Rc::clone(&self.dirty);
        self.channel.borrow_mut().subscribe(move |next: &Filter| {
            filter.set(*next);
            dirty.set(true);
        });

        self.list.load()?;
        info!(
            "event=app_start module=app status=ok todos={}",
            self.list.len()
        );
        Ok(())
    }

    /// Commits the new-item input field.
    ///
    /// Trims first; a blank commit is a true no-op with no persistence call
    /// and no notification. Returns the id of the created todo, if any.
    pub fn commit_new(&mut self, input: &str) -> Option<TodoId> {
        let title = input.trim();
        if title.is_empty() {
            return None;
        }
        self.list.add(title)
    }

    /// Commits an in-progress edit of one item.
    ///
    /// An exactly-empty commit deletes the item; a whitespace-only commit is
    /// a no-op; anything else replaces the title as given.
    pub fn commit_edit(&mut self, id: TodoId, input: &str) {
        if input.is_empty() {
            self.list.destroy(id);
            return;
        }
        self.list.set_title(id, input);
    }

    /// Flips one item's completion flag.
    pub fn toggle(&mut self, id: TodoId) {
        self.list.toggle(id);
    }

    /// Destroys one item.
    pub fn destroy(&mut self, id: TodoId) {
        self.list.destroy(id);
    }

    /// Applies the bulk toggle control: every item gets `completed`.
    pub fn toggle_all(&mut self, completed: bool) {
        self.list.toggle_all(completed);
    }

    /// Destroys every completed item.
    pub fn clear_completed(&mut self) {
        self.list.clear_completed();
    }

    /// Routes one fragment change through the filter router.
    pub fn navigate(&mut self, fragment: &str) -> Filter {
        self.router.navigate(fragment)
    }

    /// The filter currently applied by the view layer.
    pub fn filter(&self) -> Filter {
        self.filter.get()
    }

    /// The display subset for the current filter.
    pub fn visible(&self) -> Vec<&Todo> {
        self.list.visible(self.filter.get())
    }

    /// Footer counts, recomputed from current aggregate state.
    pub fn counts(&self) -> Counts {
        Counts::of(self.list.todos())
    }

    /// Footer is visible iff the list is non-empty; re-evaluated on every
    /// mutation because each one marks the controller dirty.
    pub fn footer_visible(&self) -> bool {
        !self.list.is_empty()
    }

    /// Reports and clears the pending re-render flag set by notifications.
    pub fn take_dirty(&mut self) -> bool {
        self.dirty.replace(false)
    }

    /// Read access to the aggregate for the view layer.
    pub fn list(&self) -> &TodoList<R> {
        &self.list
    }
}
