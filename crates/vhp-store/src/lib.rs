//! SQLite persistence for listing records.

use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use tracing::{debug, info};
use vhp_core::{Currency, ExperienceBand, ListingRecord, SalaryKind};

pub const CRATE_NAME: &str = "vhp-store";

const CREATE_TABLE: &str = "
CREATE TABLE IF NOT EXISTS listings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    external_id TEXT NOT NULL UNIQUE,
    title TEXT,
    salary_text TEXT,
    salary_kind TEXT NOT NULL,
    salary_min INTEGER,
    salary_max INTEGER,
    salary_currency TEXT,
    url TEXT NOT NULL,
    city TEXT,
    experience TEXT,
    fresh INTEGER NOT NULL DEFAULT 0,
    company_name TEXT,
    company_url TEXT,
    company_address TEXT,
    description TEXT,
    employment_type TEXT,
    key_skills TEXT NOT NULL DEFAULT '[]',
    search_tags TEXT NOT NULL DEFAULT '[]',
    captured_at TEXT NOT NULL,
    is_actual INTEGER NOT NULL DEFAULT 0,
    is_archived INTEGER NOT NULL DEFAULT 0,
    is_scraped INTEGER NOT NULL DEFAULT 0,
    responded INTEGER NOT NULL DEFAULT 0
)";

const CREATE_STATUS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_listings_status ON listings (is_actual, is_archived)";

/// Pool-backed store handle; cheap to clone and share across tasks.
#[derive(Debug, Clone)]
pub struct ListingStore {
    pool: SqlitePool,
}

/// Flat row shape; JSON-coded columns are decoded on the way out.
#[derive(Debug, FromRow)]
struct ListingRow {
    external_id: String,
    title: Option<String>,
    salary_text: Option<String>,
    salary_kind: String,
    salary_min: Option<i64>,
    salary_max: Option<i64>,
    salary_currency: Option<String>,
    url: String,
    city: Option<String>,
    experience: Option<String>,
    fresh: bool,
    company_name: Option<String>,
    company_url: Option<String>,
    company_address: Option<String>,
    description: Option<String>,
    employment_type: Option<String>,
    key_skills: String,
    search_tags: String,
    captured_at: DateTime<Utc>,
    is_actual: bool,
    is_archived: bool,
    is_scraped: bool,
    responded: bool,
}

impl TryFrom<ListingRow> for ListingRecord {
    type Error = anyhow::Error;

    fn try_from(row: ListingRow) -> Result<Self> {
        let salary_kind = SalaryKind::parse(&row.salary_kind)
            .with_context(|| format!("unknown salary kind '{}'", row.salary_kind))?;
        let salary_currency = row
            .salary_currency
            .as_deref()
            .map(|code| {
                Currency::from_code(code).with_context(|| format!("unknown currency '{code}'"))
            })
            .transpose()?;
        let experience = row
            .experience
            .as_deref()
            .map(|json| {
                serde_json::from_str::<ExperienceBand>(json).context("decoding experience column")
            })
            .transpose()?;

        Ok(ListingRecord {
            external_id: row.external_id,
            title: row.title,
            salary_text: row.salary_text,
            salary_kind,
            salary_min: row.salary_min,
            salary_max: row.salary_max,
            salary_currency,
            url: row.url,
            city: row.city,
            experience,
            fresh: row.fresh,
            company_name: row.company_name,
            company_url: row.company_url,
            company_address: row.company_address,
            description: row.description,
            employment_type: row.employment_type,
            key_skills: serde_json::from_str(&row.key_skills)
                .context("decoding key_skills column")?,
            search_tags: serde_json::from_str(&row.search_tags)
                .context("decoding search_tags column")?,
            captured_at: row.captured_at,
            is_actual: row.is_actual,
            is_archived: row.is_archived,
            is_scraped: row.is_scraped,
            responded: row.responded,
        })
    }
}

impl ListingStore {
    /// Open the database (created on first use) and bootstrap the schema.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("parsing database url {database_url}"))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| format!("opening {database_url}"))?;

        sqlx::query(CREATE_TABLE)
            .execute(&pool)
            .await
            .context("creating listings table")?;
        sqlx::query(CREATE_STATUS_INDEX)
            .execute(&pool)
            .await
            .context("creating status index")?;

        Ok(Self { pool })
    }

    /// Connectivity probe, run once before any work is queued.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("pinging the store")?;
        Ok(())
    }

    pub async fn find_by_external_id(&self, external_id: &str) -> Result<Option<ListingRecord>> {
        let row: Option<ListingRow> =
            sqlx::query_as("SELECT * FROM listings WHERE external_id = ?")
                .bind(external_id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("looking up listing {external_id}"))?;
        row.map(ListingRecord::try_from).transpose()
    }

    /// Insert a fully built record. External id uniqueness is enforced by
    /// the schema, so racing duplicates surface as errors instead of twins.
    pub async fn insert(&self, record: &ListingRecord) -> Result<()> {
        sqlx::query(
            "INSERT INTO listings (external_id, title, salary_text, salary_kind, salary_min, \
             salary_max, salary_currency, url, city, experience, fresh, company_name, \
             company_url, company_address, description, employment_type, key_skills, \
             search_tags, captured_at, is_actual, is_archived, is_scraped, responded) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.external_id)
        .bind(&record.title)
        .bind(&record.salary_text)
        .bind(record.salary_kind.as_str())
        .bind(record.salary_min)
        .bind(record.salary_max)
        .bind(record.salary_currency.map(|currency| currency.code()))
        .bind(&record.url)
        .bind(&record.city)
        .bind(encode_band(record.experience)?)
        .bind(record.fresh)
        .bind(&record.company_name)
        .bind(&record.company_url)
        .bind(&record.company_address)
        .bind(&record.description)
        .bind(&record.employment_type)
        .bind(serde_json::to_string(&record.key_skills).context("encoding key_skills")?)
        .bind(serde_json::to_string(&record.search_tags).context("encoding search_tags")?)
        .bind(record.captured_at)
        .bind(record.is_actual)
        .bind(record.is_archived)
        .bind(record.is_scraped)
        .bind(record.responded)
        .execute(&self.pool)
        .await
        .with_context(|| format!("inserting listing {}", record.external_id))?;

        info!(external_id = %record.external_id, "listing stored");
        Ok(())
    }

    pub async fn update_search_tags(&self, external_id: &str, tags: &[String]) -> Result<()> {
        sqlx::query("UPDATE listings SET search_tags = ? WHERE external_id = ?")
            .bind(serde_json::to_string(tags).context("encoding search_tags")?)
            .bind(external_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("updating tags for {external_id}"))?;
        Ok(())
    }

    pub async fn set_actual(&self, external_id: &str, value: bool) -> Result<()> {
        sqlx::query("UPDATE listings SET is_actual = ? WHERE external_id = ?")
            .bind(value)
            .bind(external_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("updating is_actual for {external_id}"))?;
        debug!(external_id, value, "is_actual updated");
        Ok(())
    }

    pub async fn set_archived(&self, external_id: &str, value: bool) -> Result<()> {
        sqlx::query("UPDATE listings SET is_archived = ? WHERE external_id = ?")
            .bind(value)
            .bind(external_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("updating is_archived for {external_id}"))?;
        debug!(external_id, value, "is_archived updated");
        Ok(())
    }

    /// Run-start reset: every stored record must re-earn `is_actual` by
    /// showing up in a search or surviving the sweep.
    pub async fn mark_all_stale(&self) -> Result<u64> {
        let result = sqlx::query("UPDATE listings SET is_actual = 0")
            .execute(&self.pool)
            .await
            .context("resetting is_actual")?;
        info!(rows = result.rows_affected(), "is_actual reset for all listings");
        Ok(result.rows_affected())
    }

    /// Records the crawl did not confirm and the sweep has not yet archived.
    pub async fn find_unconfirmed(&self) -> Result<Vec<ListingRecord>> {
        let rows: Vec<ListingRow> =
            sqlx::query_as("SELECT * FROM listings WHERE is_actual = 0 AND is_archived = 0")
                .fetch_all(&self.pool)
                .await
                .context("selecting unconfirmed listings")?;
        rows.into_iter().map(ListingRecord::try_from).collect()
    }
}

fn encode_band(band: Option<ExperienceBand>) -> Result<Option<String>> {
    band.map(|band| serde_json::to_string(&band).context("encoding experience band"))
        .transpose()
}
