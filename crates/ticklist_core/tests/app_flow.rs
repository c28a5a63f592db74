use ticklist_core::db::open_db_in_memory;
use ticklist_core::{App, Filter, NewTodo, SqliteTodoRepository, TodoRepository};

fn started_app(conn: &rusqlite::Connection) -> App<SqliteTodoRepository<'_>> {
    let mut app = App::new(SqliteTodoRepository::try_new(conn).unwrap());
    app.start().unwrap();
    app
}

#[test]
fn startup_loads_persisted_todos_and_marks_a_render() {
    let conn = open_db_in_memory().unwrap();
    {
        let repo = SqliteTodoRepository::try_new(&conn).unwrap();
        repo.create_todo(&NewTodo::new("from last session")).unwrap();
    }

    let mut app = started_app(&conn);
    assert!(app.take_dirty());
    assert_eq!(app.list().len(), 1);
    assert!(app.footer_visible());
}

#[test]
fn footer_hidden_for_an_empty_list() {
    let conn = open_db_in_memory().unwrap();
    let mut app = started_app(&conn);
    app.take_dirty();

    assert!(!app.footer_visible());

    let id = app.commit_new("now visible").unwrap();
    assert!(app.footer_visible());

    app.destroy(id);
    assert!(!app.footer_visible());
}

#[test]
fn commit_new_trims_the_title() {
    let conn = open_db_in_memory().unwrap();
    let mut app = started_app(&conn);

    let id = app.commit_new("  Buy milk  ").unwrap();
    assert_eq!(app.list().get(id).unwrap().title, "Buy milk");
}

#[test]
fn blank_commit_is_a_true_no_op() {
    let conn = open_db_in_memory().unwrap();
    let mut app = started_app(&conn);
    app.take_dirty();

    assert!(app.commit_new("   ").is_none());
    assert!(app.commit_new("").is_none());

    // No member, no persistence call, no notification.
    assert!(app.list().is_empty());
    assert!(!app.take_dirty());
    let reader = SqliteTodoRepository::try_new(&conn).unwrap();
    assert!(reader.list_todos().unwrap().is_empty());
}

#[test]
fn empty_edit_commit_deletes_the_item() {
    let conn = open_db_in_memory().unwrap();
    let mut app = started_app(&conn);
    let id = app.commit_new("delete me via edit").unwrap();

    app.commit_edit(id, "");

    assert!(app.list().is_empty());
    let reader = SqliteTodoRepository::try_new(&conn).unwrap();
    assert!(reader.get_todo(id).unwrap().is_none());
}

#[test]
fn whitespace_edit_commit_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let mut app = started_app(&conn);
    let id = app.commit_new("stable").unwrap();
    app.take_dirty();

    app.commit_edit(id, "   ");

    assert_eq!(app.list().get(id).unwrap().title, "stable");
    assert!(!app.take_dirty());
}

#[test]
fn edit_commit_replaces_the_title() {
    let conn = open_db_in_memory().unwrap();
    let mut app = started_app(&conn);
    let id = app.commit_new("typo").unwrap();

    app.commit_edit(id, "fixed");

    assert_eq!(app.list().get(id).unwrap().title, "fixed");
    let reader = SqliteTodoRepository::try_new(&conn).unwrap();
    assert_eq!(reader.get_todo(id).unwrap().unwrap().title, "fixed");
}

#[test]
fn toggle_all_state_is_derived_from_the_active_subset() {
    let conn = open_db_in_memory().unwrap();
    let mut app = started_app(&conn);
    let a = app.commit_new("A").unwrap();
    let b = app.commit_new("B").unwrap();
    let c = app.commit_new("C").unwrap();
    app.toggle(a);
    app.toggle(b);

    // [A:complete, B:complete, C:active] -> control unchecked.
    assert!(!app.counts().all_completed());

    app.toggle(c);
    assert!(app.counts().all_completed());
}

#[test]
fn toggle_all_applies_one_value_to_every_item() {
    let conn = open_db_in_memory().unwrap();
    let mut app = started_app(&conn);
    app.commit_new("x").unwrap();
    let done = app.commit_new("y").unwrap();
    app.toggle(done);

    app.toggle_all(true);
    assert_eq!(app.counts().active, 0);
    assert_eq!(app.counts().completed, 2);

    app.toggle_all(false);
    assert_eq!(app.counts().active, 2);
    assert_eq!(app.counts().completed, 0);
}

#[test]
fn clear_completed_leaves_active_items() {
    let conn = open_db_in_memory().unwrap();
    let mut app = started_app(&conn);
    app.commit_new("keep").unwrap();
    let done = app.commit_new("done").unwrap();
    app.toggle(done);

    app.clear_completed();

    assert_eq!(app.list().len(), 1);
    assert_eq!(app.counts().completed, 0);
}

#[test]
fn navigation_changes_display_state_only() {
    let conn = open_db_in_memory().unwrap();
    let mut app = started_app(&conn);
    app.commit_new("open").unwrap();
    let done = app.commit_new("done").unwrap();
    app.toggle(done);

    app.navigate("active");
    assert_eq!(app.filter(), Filter::Active);
    assert_eq!(app.filter().shell_class(), "filter-active");
    let visible: Vec<&str> = app
        .visible()
        .iter()
        .map(|todo| todo.title.as_str())
        .collect();
    assert_eq!(visible, vec!["open"]);

    // Filtering never mutates domain data.
    assert_eq!(app.list().len(), 2);
    assert_eq!(app.counts().completed, 1);
}

#[test]
fn empty_and_unknown_fragments_behave_as_all() {
    let conn = open_db_in_memory().unwrap();
    let mut app = started_app(&conn);
    app.commit_new("one").unwrap();
    let done = app.commit_new("two").unwrap();
    app.toggle(done);

    app.navigate("");
    assert_eq!(app.filter(), Filter::All);
    assert_eq!(app.visible().len(), 2);

    app.navigate("archived");
    assert_eq!(app.filter(), Filter::All);
    assert_eq!(app.filter().shell_class(), "filter-all");
}

#[test]
fn footer_counts_follow_mutations() {
    let conn = open_db_in_memory().unwrap();
    let mut app = started_app(&conn);
    let only = app.commit_new("only one").unwrap();

    let counts = app.counts();
    assert_eq!(counts.active, 1);
    assert_eq!(counts.items_label(), "item");
    assert_eq!(counts.clear_completed_label(), "");

    app.toggle(only);
    app.commit_new("second").unwrap();
    app.commit_new("third").unwrap();
    let second_done = app.commit_new("fourth").unwrap();
    app.toggle(second_done);

    let counts = app.counts();
    assert_eq!(counts.active, 2);
    assert_eq!(counts.total(), 4);
    assert_eq!(counts.items_label(), "items");
    assert_eq!(counts.clear_completed_label(), "(2)");
}

#[test]
fn start_is_idempotent_for_the_session() {
    let conn = open_db_in_memory().unwrap();
    let mut app = started_app(&conn);
    app.commit_new("kept once").unwrap();

    app.start().unwrap();
    assert_eq!(app.list().len(), 1);
}
