//! TodoList aggregate over a persistence adapter.
//!
//! # Responsibility
//! - Maintain the ordered, id-unique in-memory set of todos.
//! - Apply entity mutations, commit each one to the adapter, and notify
//!   subscribers.
//!
//! # Invariants
//! - Members stay sorted ascending by `created`; equal timestamps keep
//!   insertion order.
//! - In-memory changes are visible immediately; the synchronous write is
//!   best-effort and is never rolled back on failure.
//! - Every applied mutation emits exactly one event per affected member.

use crate::model::todo::{NewTodo, Todo, TodoId};
use crate::observe::{Notifier, SubscriptionId};
use crate::projection::filter::Filter;
use crate::repo::todo_repo::{RepoResult, TodoRepository};
use log::warn;

/// Change notification emitted by the aggregate.
///
/// Any event doubles as the generic "aggregate mutated" signal; `Changed` is
/// additionally scoped to one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    /// Initial population from storage finished.
    Loaded,
    /// A new member was inserted.
    Added(TodoId),
    /// A member was destroyed.
    Removed(TodoId),
    /// A member's fields changed.
    Changed(TodoId),
}

/// The ordered collection of all todos in the session.
///
/// Owns its members: views hold only references and mutate exclusively
/// through these operations, so change notification always fires.
pub struct TodoList<R: TodoRepository> {
    repo: R,
    todos: Vec<Todo>,
    notifier: Notifier<ListEvent>,
}

impl<R: TodoRepository> TodoList<R> {
    /// Creates an empty list bound to a persistence adapter.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            todos: Vec::new(),
            notifier: Notifier::new(),
        }
    }

    /// Populates the list from storage, replacing any previous members.
    ///
    /// Rows arrive ordered from the adapter; called once at startup.
    pub fn load(&mut self) -> RepoResult<()> {
        self.todos = self.repo.list_todos()?;
        self.notifier.emit(&ListEvent::Loaded);
        Ok(())
    }

    /// Creates and persists a new todo, keeping the set sorted.
    ///
    /// Precondition: `title` is already trimmed and non-blank (the commit
    /// path guards before calling). Returns the assigned id, or `None` when
    /// the adapter could not assign one.
    pub fn add(&mut self, title: &str) -> Option<TodoId> {
        let draft = NewTodo::new(title);
        let todo = match self.repo.create_todo(&draft) {
            Ok(todo) => todo,
            Err(err) => {
                // Without an adapter-assigned id the record cannot join the
                // id-unique set.
                warn!("event=todo_create module=list status=error error={err}");
                return None;
            }
        };

        let id = todo.id;
        // Insert after all members with the same timestamp: insertion order
        // is the tie-break.
        let at = self
            .todos
            .partition_point(|existing| existing.created <= todo.created);
        self.todos.insert(at, todo);
        self.notifier.emit(&ListEvent::Added(id));
        Some(id)
    }

    /// Flips one member's completion flag and commits it.
    pub fn toggle(&mut self, id: TodoId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.todos[index].toggle();
        self.commit(index);
        self.notifier.emit(&ListEvent::Changed(id));
    }

    /// Applies a title edit and commits it.
    ///
    /// Whitespace-only input is a no-op: no write, no notification.
    pub fn set_title(&mut self, id: TodoId, text: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        if !self.todos[index].set_title(text) {
            return;
        }
        self.commit(index);
        self.notifier.emit(&ListEvent::Changed(id));
    }

    /// Removes one member from the set and from storage. Irreversible.
    pub fn destroy(&mut self, id: TodoId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.todos.remove(index);
        if let Err(err) = self.repo.delete_todo(id) {
            warn!("event=todo_delete module=list status=error id={id} error={err}");
        }
        self.notifier.emit(&ListEvent::Removed(id));
    }

    /// Sets every member's completion flag to `completed`.
    ///
    /// Each member is committed independently, matching the per-item
    /// persistence of the bulk toggle control.
    pub fn toggle_all(&mut self, completed: bool) {
        for index in 0..self.todos.len() {
            self.todos[index].completed = completed;
            self.commit(index);
            let id = self.todos[index].id;
            self.notifier.emit(&ListEvent::Changed(id));
        }
    }

    /// Destroys every completed member.
    pub fn clear_completed(&mut self) {
        let completed: Vec<TodoId> = self
            .get_completed()
            .into_iter()
            .map(|todo| todo.id)
            .collect();
        for id in completed {
            self.destroy(id);
        }
    }

    /// Members that are not completed, in list order.
    pub fn get_active(&self) -> Vec<&Todo> {
        self.todos.iter().filter(|todo| !todo.is_completed()).collect()
    }

    /// Members that are completed, in list order.
    pub fn get_completed(&self) -> Vec<&Todo> {
        self.todos.iter().filter(|todo| todo.is_completed()).collect()
    }

    /// The display subset for a filter. Never mutates members.
    pub fn visible(&self, filter: Filter) -> Vec<&Todo> {
        self.todos.iter().filter(|todo| filter.matches(todo)).collect()
    }

    /// All members in list order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Looks up one member by id.
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Registers a subscriber for every aggregate notification.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&ListEvent) + 'static) -> SubscriptionId {
        self.notifier.subscribe(subscriber)
    }

    /// Removes a subscriber registered with [`TodoList::subscribe`].
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn index_of(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }

    fn commit(&mut self, index: usize) {
        let todo = &self.todos[index];
        if let Err(err) = self.repo.update_todo(todo) {
            warn!(
                "event=todo_update module=list status=error id={} error={err}",
                todo.id
            );
        }
    }
}
