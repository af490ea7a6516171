use crate::types::{Article, Category, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::path::Path;
use tracing::{debug, info};

/// Schema is applied once at construction, never during writes.
/// The UNIQUE(title, source) constraint is the sole deduplication mechanism.
const MIGRATIONS: &[&str] = &[r#"
    CREATE TABLE IF NOT EXISTS articles (
        title TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        link TEXT NOT NULL DEFAULT '',
        source TEXT NOT NULL,
        published_date TEXT NOT NULL DEFAULT '',
        category TEXT,
        UNIQUE(title, source)
    )
    "#];

/// Outcome of a single insert attempt. Duplicates are an expected,
/// non-fatal condition; hard store failures surface as `Err` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    DuplicateSkipped,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StoreSummary {
    pub inserted: usize,
    pub duplicates: usize,
}

/// Article persistence over SQLite, keyed by the natural (title, source)
/// pair. Clones share the underlying connection pool.
#[derive(Clone)]
pub struct ArticleStore {
    pool: SqlitePool,
}

impl ArticleStore {
    /// Open (creating if missing) the database at `path` and apply the
    /// schema. Failure here is fatal for the run and propagates.
    pub async fn connect(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        for (i, migration) in MIGRATIONS.iter().enumerate() {
            sqlx::query(migration).execute(&pool).await?;
            debug!("Applied migration {}", i);
        }

        Ok(Self { pool })
    }

    /// Insert one article, treating a (title, source) collision as a skip.
    pub async fn insert(&self, article: &Article) -> Result<InsertOutcome> {
        let result = sqlx::query(
            r#"
            INSERT INTO articles (title, description, link, source, published_date, category)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT (title, source) DO NOTHING
            "#,
        )
        .bind(&article.title)
        .bind(&article.description)
        .bind(&article.link)
        .bind(&article.source)
        .bind(&article.published_date)
        .bind(article.category.map(|c| c.as_str()))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            info!(
                "Duplicate article found: {} from {}",
                article.title, article.source
            );
            Ok(InsertOutcome::DuplicateSkipped)
        } else {
            Ok(InsertOutcome::Inserted)
        }
    }

    /// Store a batch. Each insert is independently durable and duplicates
    /// never abort the batch, so re-running after a crash is safe.
    pub async fn store_all(&self, articles: &[Article]) -> Result<StoreSummary> {
        let mut summary = StoreSummary::default();

        for article in articles {
            match self.insert(article).await? {
                InsertOutcome::Inserted => summary.inserted += 1,
                InsertOutcome::DuplicateSkipped => summary.duplicates += 1,
            }
        }

        info!(
            "Stored {} new articles, skipped {} duplicates",
            summary.inserted, summary.duplicates
        );
        Ok(summary)
    }

    /// All rows whose category was never set.
    pub async fn find_unclassified(&self) -> Result<Vec<Article>> {
        let rows = sqlx::query(
            r#"
            SELECT title, description, link, source, published_date, category
            FROM articles
            WHERE category IS NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(article_from_row).collect()
    }

    /// Overwrite the category of the row keyed by (title, source).
    /// Matching zero rows is a no-op, not an error.
    pub async fn update_category(
        &self,
        title: &str,
        source: &str,
        category: Category,
    ) -> Result<()> {
        let result = sqlx::query(
            "UPDATE articles SET category = ? WHERE title = ? AND source = ?",
        )
        .bind(category.as_str())
        .bind(title)
        .bind(source)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            debug!("No row matched ({}, {}) for category update", title, source);
        }

        Ok(())
    }

    /// Look up one article by its natural key.
    pub async fn get(&self, title: &str, source: &str) -> Result<Option<Article>> {
        let row = sqlx::query(
            r#"
            SELECT title, description, link, source, published_date, category
            FROM articles
            WHERE title = ? AND source = ?
            "#,
        )
        .bind(title)
        .bind(source)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(article_from_row).transpose()
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Map a row into the typed record by column name. Rows are never read
/// positionally.
fn article_from_row(row: &SqliteRow) -> Result<Article> {
    let category: Option<String> = row.try_get("category")?;

    Ok(Article {
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        link: row.try_get("link")?,
        source: row.try_get("source")?,
        published_date: row.try_get("published_date")?,
        category: category.as_deref().and_then(Category::parse),
    })
}
