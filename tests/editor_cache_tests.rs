//! Integration Tests for the Editor Cache
//!
//! Drives the public API the way an editor host does: look an editor up by
//! note path, build it on a miss, store it, and let the cache tear down the
//! ones that fall out.

use std::sync::{Arc, Mutex};

use editor_cache::{
    editor_cache, BoundedLruCache, CacheConfig, CacheError, Destroy, DestroyOnRelease,
    EditorCache, SharedCache, DEFAULT_CAPACITY,
};

// == Helper Functions ==

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

type DestroyLog = Arc<Mutex<Vec<String>>>;

#[derive(Debug, Clone)]
struct Editor {
    path: String,
    font_size: u32,
    destroyed: DestroyLog,
}

impl Editor {
    fn open(path: &str, destroyed: &DestroyLog) -> Self {
        Self {
            path: path.to_string(),
            font_size: 12,
            destroyed: destroyed.clone(),
        }
    }
}

impl Destroy for Editor {
    fn destroy(self) {
        self.destroyed.lock().unwrap().push(self.path);
    }
}

fn destroyed(log: &DestroyLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Returns the cached editor for `path`, building and storing one on a miss.
fn open_note<'a>(
    cache: &'a mut EditorCache<Editor>,
    path: &str,
    log: &DestroyLog,
) -> &'a Editor {
    let key = path.to_string();
    if cache.get(&key).is_none() {
        cache.put(key.clone(), Editor::open(path, log));
    }
    cache.peek(&key).unwrap()
}

// == Construction Tests ==

#[test]
fn test_default_capacity_is_five() {
    init_tracing();
    let cache: EditorCache<Editor> = editor_cache(&CacheConfig::default()).unwrap();
    assert_eq!(cache.capacity(), DEFAULT_CAPACITY);
    assert_eq!(cache.capacity(), 5);
}

#[test]
fn test_zero_capacity_is_rejected() {
    let result = editor_cache::<Editor>(&CacheConfig::with_capacity(0));
    assert!(matches!(result, Err(CacheError::InvalidCapacity(0))));
}

// == Note Switching Tests ==

#[test]
fn test_switching_notes_keeps_a_slot_for_the_next_note() {
    init_tracing();
    let log = DestroyLog::default();
    let mut cache = editor_cache(&CacheConfig::default()).unwrap();

    for i in 0..7 {
        open_note(&mut cache, &format!("notes/{}.txt", i), &log);
    }

    // The miss on each new note occupies a slot until the editor is stored.
    assert_eq!(cache.len(), 4);
    assert_eq!(
        destroyed(&log),
        vec!["notes/0.txt", "notes/1.txt", "notes/2.txt"]
    );

    let open: Vec<&String> = cache.keys().collect();
    assert_eq!(
        open,
        vec!["notes/3.txt", "notes/4.txt", "notes/5.txt", "notes/6.txt"]
    );
}

#[test]
fn test_switching_notes_hits_only_keeps_five_editors_alive() {
    let log = DestroyLog::default();
    let config = CacheConfig {
        touch_on_miss: false,
        ..CacheConfig::default()
    };
    let mut cache = editor_cache(&config).unwrap();

    for i in 0..7 {
        open_note(&mut cache, &format!("notes/{}.txt", i), &log);
    }

    assert_eq!(cache.len(), 5);
    assert_eq!(destroyed(&log), vec!["notes/0.txt", "notes/1.txt"]);

    let open: Vec<&String> = cache.keys().collect();
    assert_eq!(
        open,
        vec!["notes/2.txt", "notes/3.txt", "notes/4.txt", "notes/5.txt", "notes/6.txt"]
    );
}

#[test]
fn test_revisiting_a_note_reuses_its_editor() {
    init_tracing();
    let log = DestroyLog::default();
    let config = CacheConfig {
        capacity: 2,
        touch_on_miss: false,
        ..CacheConfig::default()
    };
    let mut cache = editor_cache(&config).unwrap();

    open_note(&mut cache, "a.txt", &log);
    open_note(&mut cache, "b.txt", &log);
    open_note(&mut cache, "a.txt", &log);
    open_note(&mut cache, "c.txt", &log);

    assert_eq!(destroyed(&log), vec!["b.txt"]);
    assert!(cache.contains(&"a.txt".to_string()));
    assert!(cache.contains(&"c.txt".to_string()));
    assert_eq!(cache.stats().hits, 1);
}

#[test]
fn test_closing_a_note_destroys_its_editor_once() {
    let log = DestroyLog::default();
    let mut cache = editor_cache(&CacheConfig::default()).unwrap();

    open_note(&mut cache, "scratch.txt", &log);
    cache.release(&"scratch.txt".to_string());
    cache.release(&"scratch.txt".to_string());

    assert_eq!(destroyed(&log), vec!["scratch.txt"]);
    assert!(cache.is_empty());
}

#[test]
fn test_settings_change_reaches_every_open_editor() {
    let log = DestroyLog::default();
    let mut cache = editor_cache(&CacheConfig::with_capacity(3)).unwrap();

    for path in ["a.txt", "b.txt", "c.txt", "d.txt"] {
        open_note(&mut cache, path, &log);
    }

    let mut sizes = Vec::new();
    cache.for_each(|editor| sizes.push((editor.path.clone(), editor.font_size)));
    assert_eq!(
        sizes,
        vec![("c.txt".to_string(), 12), ("d.txt".to_string(), 12)]
    );
}

#[test]
fn test_replacing_an_editor_destroys_the_old_one() {
    let log = DestroyLog::default();
    let mut cache = editor_cache(&CacheConfig::default()).unwrap();

    cache.put("a.txt".to_string(), Editor::open("a.txt", &log));
    let mut reloaded = Editor::open("a.txt", &log);
    reloaded.font_size = 16;
    cache.put("a.txt".to_string(), reloaded);

    assert_eq!(destroyed(&log), vec!["a.txt"]);
    assert_eq!(cache.get(&"a.txt".to_string()).map(|e| e.font_size), Some(16));
}

#[test]
fn test_dropping_the_cache_destroys_remaining_editors() {
    let log = DestroyLog::default();
    {
        let mut cache = editor_cache(&CacheConfig::default()).unwrap();
        open_note(&mut cache, "a.txt", &log);
        open_note(&mut cache, "b.txt", &log);
    }
    assert_eq!(destroyed(&log), vec!["a.txt", "b.txt"]);
}

#[test]
fn test_closure_release_operation() {
    let released = Arc::new(Mutex::new(Vec::new()));
    let sink = released.clone();
    let mut cache = BoundedLruCache::new(1, move |v: u32| sink.lock().unwrap().push(v)).unwrap();

    cache.put("a", 1);
    cache.put("b", 2);

    assert_eq!(*released.lock().unwrap(), vec![1]);
    assert_eq!(cache.get(&"b"), Some(&2));
}

// == Shared Handle Tests ==

#[tokio::test]
async fn test_shared_editor_cache() {
    init_tracing();
    let log = DestroyLog::default();
    let cache = SharedCache::from_config(&CacheConfig::with_capacity(2), DestroyOnRelease).unwrap();

    for path in ["a.txt", "b.txt", "c.txt"] {
        cache.put(path.to_string(), Editor::open(path, &log)).await;
    }

    let editor = cache.get(&"b.txt".to_string()).await;
    assert_eq!(editor.map(|e| e.path), Some("b.txt".to_string()));
    assert_eq!(destroyed(&log), vec!["a.txt"]);

    assert_eq!(cache.release_all().await, 2);
    assert_eq!(destroyed(&log), vec!["a.txt", "c.txt", "b.txt"]);
}
