use news_pipeline::{Article, ArticleStore, Category, InsertOutcome};
use tempfile::TempDir;
use tracing::info;

async fn test_store() -> (ArticleStore, TempDir) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let store = ArticleStore::connect(&db_path).await.unwrap();
    (store, temp_dir)
}

fn article(title: &str, source: &str, category: Option<Category>) -> Article {
    Article {
        title: title.to_string(),
        description: String::new(),
        link: format!("https://example.com/{}", title.replace(' ', "-")),
        published_date: "Mon, 01 Jan 2024 08:00:00 GMT".to_string(),
        source: source.to_string(),
        category,
    }
}

#[tokio::test]
async fn storing_the_same_article_twice_yields_one_row() {
    let (store, _dir) = test_store().await;

    let a = article("Budget vote delayed", "https://feeds.example.com/politics", Some(Category::Others));

    let first = store.insert(&a).await.unwrap();
    assert_eq!(first, InsertOutcome::Inserted);

    let second = store.insert(&a).await.unwrap();
    assert_eq!(second, InsertOutcome::DuplicateSkipped);

    assert_eq!(store.count().await.unwrap(), 1);
    info!("Duplicate insert left exactly one row");
}

#[tokio::test]
async fn same_title_from_different_sources_persists_as_separate_rows() {
    let (store, _dir) = test_store().await;

    let from_a = article("Markets rally", "https://feeds.example.com/a", Some(Category::Others));
    let from_b = article("Markets rally", "https://feeds.example.com/b", Some(Category::Others));

    assert_eq!(store.insert(&from_a).await.unwrap(), InsertOutcome::Inserted);
    assert_eq!(store.insert(&from_b).await.unwrap(), InsertOutcome::Inserted);
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn a_duplicate_never_aborts_the_batch() {
    let (store, _dir) = test_store().await;

    let existing = article("Old news", "https://feeds.example.com/news", Some(Category::Others));
    store.insert(&existing).await.unwrap();

    let batch = vec![
        existing.clone(),
        article("Fresh news", "https://feeds.example.com/news", Some(Category::Others)),
    ];

    let summary = store.store_all(&batch).await.unwrap();
    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.duplicates, 1);
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn unclassified_rows_round_trip_through_named_fields() {
    let (store, _dir) = test_store().await;

    let mut pending = article("Mystery story", "https://feeds.example.com/news", None);
    pending.description = "details to follow".to_string();
    store.insert(&pending).await.unwrap();

    let classified = article("Known story", "https://feeds.example.com/news", Some(Category::Others));
    store.insert(&classified).await.unwrap();

    let unclassified = store.find_unclassified().await.unwrap();
    assert_eq!(unclassified.len(), 1);
    assert_eq!(unclassified[0], pending);
}

#[tokio::test]
async fn update_category_on_a_missing_key_is_a_no_op() {
    let (store, _dir) = test_store().await;

    store
        .update_category("no such title", "https://feeds.example.com/none", Category::Others)
        .await
        .unwrap();

    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn get_returns_the_stored_record_by_natural_key() {
    let (store, _dir) = test_store().await;

    let a = article("Flood warning issued", "https://feeds.example.com/weather", Some(Category::NaturalDisaster));
    store.insert(&a).await.unwrap();

    let found = store
        .get("Flood warning issued", "https://feeds.example.com/weather")
        .await
        .unwrap();
    assert_eq!(found, Some(a));

    let missing = store
        .get("Flood warning issued", "https://feeds.example.com/other")
        .await
        .unwrap();
    assert_eq!(missing, None);
}

#[tokio::test]
async fn category_labels_round_trip_through_the_store() {
    let (store, _dir) = test_store().await;

    for category in [
        Category::Unrest,
        Category::Uplifting,
        Category::NaturalDisaster,
        Category::Others,
    ] {
        let a = article(category.as_str(), "https://feeds.example.com/labels", Some(category));
        store.insert(&a).await.unwrap();

        let found = store
            .get(category.as_str(), "https://feeds.example.com/labels")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.category, Some(category));
    }
}
