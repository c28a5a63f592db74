//! Terminal rendering of the five view targets.
//!
//! # Responsibility
//! - Turn controller state into the header, item, list, footer, and
//!   application-shell lines printed after each command.
//!
//! # Invariants
//! - Rendering reads state only; every mutation goes through the
//!   controller.
//! - Item rows always show their full-list position, so addressing stays
//!   stable across filters.

use ticklist_core::{App, Counts, Filter, Todo, TodoRepository};

const FILTERS: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

/// Application shell line; the root carries the active filter class.
pub fn render_shell(filter: Filter) -> String {
    format!("todos [{}]", filter.shell_class())
}

/// Header line: the new-item affordance.
pub fn render_header() -> &'static str {
    "What needs to be done? (ticklist add <title>)"
}

/// One todo row: checkbox, position handle, title.
pub fn render_item(position: usize, todo: &Todo) -> String {
    let mark = if todo.is_completed() { 'x' } else { ' ' };
    format!("[{mark}] {position:>3}  {}", todo.title)
}

/// Container of visible rows.
pub fn render_list(items: &[(usize, &Todo)]) -> String {
    let mut out = String::new();
    for (position, todo) in items {
        out.push_str(&render_item(*position, todo));
        out.push('\n');
    }
    out
}

/// Footer: count label, filter links, clear-completed affordance.
///
/// The clear-completed part disappears entirely when its label is empty.
pub fn render_footer(counts: Counts, filter: Filter) -> String {
    let filters = FILTERS
        .iter()
        .map(|candidate| {
            if *candidate == filter {
                format!("[{}]", candidate.as_str())
            } else {
                candidate.as_str().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mut line = format!("{} {} left  {filters}", counts.active, counts.items_label());
    let clear = counts.clear_completed_label();
    if !clear.is_empty() {
        line.push_str("  clear-completed ");
        line.push_str(&clear);
    }
    line
}

/// Full re-render of the application state.
///
/// The list container is hidden when the collection is empty; the footer is
/// hidden whenever the controller says so.
pub fn render_app<R: TodoRepository>(app: &App<R>) -> String {
    let mut out = String::new();
    out.push_str(&render_shell(app.filter()));
    out.push('\n');
    out.push_str(render_header());
    out.push('\n');

    let todos = app.list().todos();
    if !todos.is_empty() {
        let items: Vec<(usize, &Todo)> = todos
            .iter()
            .enumerate()
            .filter(|(_, todo)| app.filter().matches(todo))
            .map(|(index, todo)| (index + 1, todo))
            .collect();
        out.push_str(&render_list(&items));
    }

    if app.footer_visible() {
        out.push_str(&render_footer(app.counts(), app.filter()));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render_footer, render_item, render_shell};
    use ticklist_core::{Counts, Filter, Todo};
    use uuid::Uuid;

    fn todo(title: &str, completed: bool) -> Todo {
        Todo {
            id: Uuid::new_v4(),
            title: title.to_string(),
            completed,
            created: 1,
        }
    }

    #[test]
    fn shell_line_reflects_the_active_filter() {
        assert_eq!(render_shell(Filter::Active), "todos [filter-active]");
    }

    #[test]
    fn item_row_marks_completed_todos() {
        assert!(render_item(1, &todo("done", true)).starts_with("[x]"));
        assert!(render_item(2, &todo("open", false)).starts_with("[ ]"));
    }

    #[test]
    fn footer_uses_singular_label_for_one_active_item() {
        let line = render_footer(
            Counts {
                active: 1,
                completed: 0,
            },
            Filter::All,
        );
        assert!(line.starts_with("1 item left"));
        assert!(!line.contains("clear-completed"));
    }

    #[test]
    fn footer_shows_clear_count_when_completed_items_exist() {
        let line = render_footer(
            Counts {
                active: 0,
                completed: 2,
            },
            Filter::Completed,
        );
        assert!(line.starts_with("0 items left"));
        assert!(line.contains("clear-completed (2)"));
        assert!(line.contains("[completed]"));
    }
}
