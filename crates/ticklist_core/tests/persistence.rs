use serde_json::Value;
use tempfile::TempDir;
use ticklist_core::{JsonTodoRepository, Todo, TodoRepository};

fn store_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("todos.json")
}

#[test]
fn roundtrip_survives_a_fresh_repository_instance() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = store_path(&dir);

    let mut done_todo = Todo::create(3, "already finished");
    done_todo.complete();
    let todos = vec![Todo::create(1, "first"), done_todo, Todo::create(7, "last")];

    let repo = JsonTodoRepository::open(&path).expect("open");
    repo.save_all(&todos).expect("save");

    let reopened = JsonTodoRepository::open(&path).expect("reopen");
    let loaded = reopened.load_all().expect("load");
    assert_eq!(loaded, todos);
}

#[test]
fn corrupt_file_loads_as_empty_collection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = store_path(&dir);
    let repo = JsonTodoRepository::open(&path).expect("open");

    std::fs::write(&path, "this is not json at all {{{").expect("write garbage");
    assert!(repo.load_all().expect("load should not fail").is_empty());

    std::fs::write(&path, r#"{"id": 1}"#).expect("write non-array json");
    assert!(repo.load_all().expect("load should not fail").is_empty());
}

#[test]
fn file_deleted_after_open_loads_as_empty_collection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = store_path(&dir);
    let repo = JsonTodoRepository::open(&path).expect("open");

    std::fs::remove_file(&path).expect("delete store file");
    assert!(repo.load_all().expect("load should not fail").is_empty());
}

#[test]
fn add_recovers_ids_from_one_after_corruption() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = store_path(&dir);
    let repo = JsonTodoRepository::open(&path).expect("open");

    repo.add("will be lost").expect("add");
    std::fs::write(&path, "garbage").expect("corrupt store");

    // The corrupt content is discarded; the next add starts over at id 1.
    let todo = repo.add("fresh start").expect("add");
    assert_eq!(todo.id, 1);
    assert_eq!(repo.load_all().expect("load").len(), 1);
}

#[test]
fn pretty_printing_is_not_load_significant() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = store_path(&dir);
    let repo = JsonTodoRepository::open(&path).expect("open");

    let compact =
        r#"[{"id":5,"title":"hand written","done":true,"created_at":"2024-01-01T09:00:00"}]"#;
    std::fs::write(&path, compact).expect("write compact form");

    let todos = repo.load_all().expect("load");
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, 5);
    assert_eq!(todos[0].title, "hand written");
    assert!(todos[0].done);
    assert_eq!(todos[0].created_at, "2024-01-01T09:00:00");
}

#[test]
fn persisted_records_carry_exactly_four_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = store_path(&dir);
    let repo = JsonTodoRepository::open(&path).expect("open");

    repo.add("check the wire shape").expect("add");

    let raw = std::fs::read_to_string(&path).expect("read store file");
    let value: Value = serde_json::from_str(&raw).expect("store file should be valid JSON");
    let records = value.as_array().expect("top level should be an array");
    assert_eq!(records.len(), 1);

    let record = records[0].as_object().expect("record should be an object");
    assert_eq!(record.len(), 4);
    assert!(record["id"].is_u64());
    assert!(record["title"].is_string());
    assert!(record["done"].is_boolean());
    assert!(record["created_at"].is_string());
}

#[test]
fn save_order_is_preserved_verbatim() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = store_path(&dir);
    let repo = JsonTodoRepository::open(&path).expect("open");

    // Out-of-order ids stay in the order they were given, not sorted.
    let todos = vec![Todo::create(9, "ninth"), Todo::create(2, "second")];
    repo.save_all(&todos).expect("save");

    let loaded = repo.load_all().expect("load");
    let ids: Vec<u64> = loaded.iter().map(|todo| todo.id).collect();
    assert_eq!(ids, vec![9, 2]);
}
