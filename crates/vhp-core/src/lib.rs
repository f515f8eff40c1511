//! Core domain types for the vacancy harvest pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const CRATE_NAME: &str = "vhp-core";

/// How a raw salary string is shaped, decided before any numbers are pulled
/// out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryKind {
    /// Nothing to parse: missing text, empty text, or "по договорённости".
    NoNumbers,
    /// Two bounds separated by an en dash.
    Range,
    /// A single number used for both bounds.
    Fixed,
    /// Lower bound only ("от ...").
    MinOnly,
    /// Upper bound only ("до ...").
    MaxOnly,
}

impl SalaryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryKind::NoNumbers => "no_numbers",
            SalaryKind::Range => "range",
            SalaryKind::Fixed => "fixed",
            SalaryKind::MinOnly => "min_only",
            SalaryKind::MaxOnly => "max_only",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "no_numbers" => Some(SalaryKind::NoNumbers),
            "range" => Some(SalaryKind::Range),
            "fixed" => Some(SalaryKind::Fixed),
            "min_only" => Some(SalaryKind::MinOnly),
            "max_only" => Some(SalaryKind::MaxOnly),
            _ => None,
        }
    }
}

/// Currency a salary is quoted in, detected from its glyph on the listing
/// card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Rub,
    Usd,
    Eur,
    Kzt,
    Azn,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Kzt => "KZT",
            Currency::Azn => "AZN",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RUB" => Some(Currency::Rub),
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "KZT" => Some(Currency::Kzt),
            "AZN" => Some(Currency::Azn),
            _ => None,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Currency::Rub => '₽',
            Currency::Usd => '$',
            Currency::Eur => '€',
            Currency::Kzt => '₸',
            Currency::Azn => '₼',
        }
    }
}

/// Required work experience in years.
///
/// `Single(0)` is the "no experience" marker; `Between(1, 3)` reads "from 1
/// to 3 years". Serialized as a one- or two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<u32>", try_from = "Vec<u32>")]
pub enum ExperienceBand {
    Single(u32),
    Between(u32, u32),
}

impl From<ExperienceBand> for Vec<u32> {
    fn from(band: ExperienceBand) -> Self {
        match band {
            ExperienceBand::Single(years) => vec![years],
            ExperienceBand::Between(low, high) => vec![low, high],
        }
    }
}

impl TryFrom<Vec<u32>> for ExperienceBand {
    type Error = String;

    fn try_from(values: Vec<u32>) -> Result<Self, Self::Error> {
        match values.as_slice() {
            [years] => Ok(ExperienceBand::Single(*years)),
            [low, high] => Ok(ExperienceBand::Between(*low, *high)),
            other => Err(format!(
                "experience band needs one or two values, got {}",
                other.len()
            )),
        }
    }
}

/// Minimal record parsed out of one search-results fragment. The external id
/// is the join key for everything downstream; the URL is derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingDraft {
    pub external_id: String,
    pub title: Option<String>,
    pub salary_text: Option<String>,
    pub salary_kind: SalaryKind,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_currency: Option<Currency>,
    pub url: String,
    pub city: Option<String>,
    pub experience: Option<ExperienceBand>,
    pub fresh: bool,
    pub company_name: Option<String>,
    pub company_url: Option<String>,
    /// Lowercased search line that discovered this fragment.
    pub search_tag: String,
    pub captured_at: DateTime<Utc>,
}

/// Enrichment fields parsed out of one detail page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailFields {
    pub description: Option<String>,
    /// Always a list; a present-but-empty skill block stays an empty list.
    pub key_skills: Vec<String>,
    pub company_address: Option<String>,
    pub employment_type: Option<String>,
}

/// One stored job posting.
///
/// `is_actual` and `is_archived` may both be false (not yet confirmed either
/// way) but are never both true once reconciled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRecord {
    pub external_id: String,
    pub title: Option<String>,
    pub salary_text: Option<String>,
    pub salary_kind: SalaryKind,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_currency: Option<Currency>,
    pub url: String,
    pub city: Option<String>,
    pub experience: Option<ExperienceBand>,
    pub fresh: bool,
    pub company_name: Option<String>,
    pub company_url: Option<String>,
    pub company_address: Option<String>,
    pub description: Option<String>,
    pub employment_type: Option<String>,
    pub key_skills: Vec<String>,
    /// Provenance: every search tag that has discovered this listing.
    /// Ordered for storage, set semantics on merge, only grows.
    pub search_tags: Vec<String>,
    pub captured_at: DateTime<Utc>,
    pub is_actual: bool,
    pub is_archived: bool,
    pub is_scraped: bool,
    pub responded: bool,
}

impl ListingRecord {
    /// Promote a draft to a stored record using fields from its detail page.
    pub fn from_draft(draft: ListingDraft, detail: DetailFields) -> Self {
        Self {
            external_id: draft.external_id,
            title: draft.title,
            salary_text: draft.salary_text,
            salary_kind: draft.salary_kind,
            salary_min: draft.salary_min,
            salary_max: draft.salary_max,
            salary_currency: draft.salary_currency,
            url: draft.url,
            city: draft.city,
            experience: draft.experience,
            fresh: draft.fresh,
            company_name: draft.company_name,
            company_url: draft.company_url,
            company_address: detail.company_address,
            description: detail.description,
            employment_type: detail.employment_type,
            key_skills: detail.key_skills,
            search_tags: vec![draft.search_tag],
            captured_at: draft.captured_at,
            is_actual: true,
            is_archived: false,
            is_scraped: true,
            responded: false,
        }
    }

    /// Add a search tag to the provenance set. Returns true when the tag was
    /// actually new.
    pub fn merge_search_tag(&mut self, tag: &str) -> bool {
        if self.search_tags.iter().any(|known| known == tag) {
            return false;
        }
        self.search_tags.push(tag.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_band_serializes_as_array() {
        let single = serde_json::to_string(&ExperienceBand::Single(0)).expect("single");
        assert_eq!(single, "[0]");
        let between = serde_json::to_string(&ExperienceBand::Between(1, 3)).expect("between");
        assert_eq!(between, "[1,3]");
    }

    #[test]
    fn experience_band_rejects_odd_shapes() {
        assert!(serde_json::from_str::<ExperienceBand>("[1,2,3]").is_err());
        assert!(serde_json::from_str::<ExperienceBand>("[]").is_err());
        assert_eq!(
            serde_json::from_str::<ExperienceBand>("[5]").expect("one value"),
            ExperienceBand::Single(5)
        );
    }

    #[test]
    fn merging_tags_keeps_set_semantics() {
        let draft = ListingDraft {
            external_id: "91".to_string(),
            title: None,
            salary_text: None,
            salary_kind: SalaryKind::NoNumbers,
            salary_min: None,
            salary_max: None,
            salary_currency: None,
            url: "https://hh.ru/vacancy/91".to_string(),
            city: None,
            experience: None,
            fresh: false,
            company_name: None,
            company_url: None,
            search_tag: "python".to_string(),
            captured_at: chrono::Utc::now(),
        };
        let mut record = ListingRecord::from_draft(draft, DetailFields::default());

        assert!(!record.merge_search_tag("python"));
        assert!(record.merge_search_tag("rust"));
        assert!(!record.merge_search_tag("rust"));
        assert_eq!(record.search_tags, vec!["python", "rust"]);
    }

    #[test]
    fn promoted_drafts_start_actual_and_scraped() {
        let draft = ListingDraft {
            external_id: "7".to_string(),
            title: Some("Backend developer".to_string()),
            salary_text: None,
            salary_kind: SalaryKind::NoNumbers,
            salary_min: None,
            salary_max: None,
            salary_currency: None,
            url: "https://hh.ru/vacancy/7".to_string(),
            city: None,
            experience: None,
            fresh: true,
            company_name: None,
            company_url: None,
            search_tag: "go".to_string(),
            captured_at: chrono::Utc::now(),
        };
        let record = ListingRecord::from_draft(draft, DetailFields::default());

        assert!(record.is_actual);
        assert!(record.is_scraped);
        assert!(!record.is_archived);
        assert!(!record.responded);
    }
}
