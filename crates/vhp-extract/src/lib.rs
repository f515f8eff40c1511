//! hh.ru markup extraction and text normalization.

use std::collections::HashMap;

use anyhow::Context;
use chrono::Utc;
use scraper::{ElementRef, Html, Selector};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;
use vhp_core::{Currency, DetailFields, ExperienceBand, ListingDraft, SalaryKind};

pub const CRATE_NAME: &str = "vhp-extract";

pub const SITE_BASE_URL: &str = "https://hh.ru/";
pub const VACANCY_BASE_URL: &str = "https://hh.ru/vacancy/";
pub const RATES_ENDPOINT: &str = "https://api.freecurrencyapi.com/v1/latest";

const ITEM: &str = "div.serp-item";
const TITLE: &str = "span.serp-item__title";
const SALARY: &str = "span[data-qa='vacancy-serp__vacancy-compensation']";
const RESPONSE_LINK: &str = "a[data-qa='vacancy-serp__vacancy_response']";
const CITY: &str = "div[data-qa='vacancy-serp__vacancy-address']";
const EXPERIENCE: &str = "div[data-qa='vacancy-serp__vacancy-work-experience']";
const FRESH_BADGE: &str = "span[data-qa='vacancy-label-be-first']";
const EMPLOYER: &str = "a[data-qa='vacancy-serp__vacancy-employer']";
const PAGER_PAGES: &str = "div[data-qa='pager-block'] a[data-qa='pager-page']";
const DESCRIPTION: &str = "div[data-qa='vacancy-description']";
const SKILL_TAG: &str = "span[data-qa='bloko-tag__text']";
const RAW_ADDRESS: &str = "span[data-qa='vacancy-view-raw-address']";
const LOCATION_FALLBACK: &str = "p[data-qa='vacancy-view-location']";
const EMPLOYMENT_MODE: &str = "p[data-qa='vacancy-view-employment-mode']";
const ARCHIVE_HEADING: &str = "div.vacancy-section > h2";

const FRESH_PHRASE: &str = "откликнитесь среди первых";
const NO_EXPERIENCE_PHRASE: &str = "без опыта";
const AGREEMENT_PHRASE: &str = "по договорённости";
const NET_OF_TAX_PHRASE: &str = "на руки";
const ARCHIVE_PHRASE: &str = "архив";
const EN_DASH: char = '–';

/// First page of a tag search, shaped the way the site's own search line
/// submits it.
pub fn search_entry_url(tag: &str) -> String {
    format!(
        "https://hh.ru/search/vacancy?text={tag}&salary=&ored_clusters=true\
         &hhtmFrom=vacancy_search_list&hhtmFromLabel=vacancy_search_line"
    )
}

/// Enumerated result pages. Page zero is fetched again through this shape;
/// the duplicate is reconciled away downstream.
pub fn search_page_url(tag: &str, page: u32) -> String {
    format!("https://hh.ru/search/vacancy?text={tag}&area=1&page={page}")
}

/// Currency code to rate relative to RUB, fetched once per run.
#[derive(Debug, Clone)]
pub struct ExchangeRateTable {
    rates: HashMap<String, f64>,
}

impl ExchangeRateTable {
    pub fn new(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    data: HashMap<String, f64>,
}

/// One outbound call per run. A failure here aborts the run: without rates
/// every converted salary would be wrong.
pub async fn fetch_rates(api_key: &str) -> anyhow::Result<ExchangeRateTable> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(20))
        .build()
        .context("building rates client")?;
    let response = client
        .get(RATES_ENDPOINT)
        .query(&[
            ("apikey", api_key),
            ("base_currency", "RUB"),
            ("currencies", "RUB,USD,EUR"),
        ])
        .send()
        .await
        .context("requesting exchange rates")?
        .error_for_status()
        .context("exchange rate provider rejected the request")?;
    let parsed: RatesResponse = response.json().await.context("decoding exchange rates")?;
    Ok(ExchangeRateTable::new(parsed.data))
}

/// Parse every listing fragment on one search results page. Fragments
/// without an external id are dropped outright.
pub fn parse_listing_page(
    html: &str,
    search_tag: &str,
    rates: &ExchangeRateTable,
) -> Vec<ListingDraft> {
    let document = Html::parse_document(html);
    let Ok(item_selector) = Selector::parse(ITEM) else {
        return Vec::new();
    };

    document
        .select(&item_selector)
        .filter_map(|fragment| parse_listing_fragment(&fragment, search_tag, rates))
        .collect()
}

fn parse_listing_fragment(
    fragment: &ElementRef<'_>,
    search_tag: &str,
    rates: &ExchangeRateTable,
) -> Option<ListingDraft> {
    let Some(external_id) = response_link_id(fragment) else {
        warn!(tag = search_tag, "listing fragment without a vacancy id, dropping");
        return None;
    };

    let title = select_first_text(fragment, TITLE);
    if title.is_none() {
        warn!(%external_id, "no title found");
    }

    let salary_text = select_first_text(fragment, SALARY);
    if salary_text.is_none() {
        debug!(%external_id, "no salary on the listing card");
    }
    let salary_kind = classify_salary(salary_text.as_deref());
    // A missing salary still gets the base currency; a present salary whose
    // glyph we cannot place gets none at all.
    let salary_currency = match salary_text.as_deref() {
        None => Some(Currency::Rub),
        Some(text) => {
            let detected = detect_currency(text);
            if detected.is_none() {
                warn!(%external_id, salary = text, "cannot detect salary currency");
            }
            detected
        }
    };
    let (salary_min, salary_max) =
        parse_salary_bounds(salary_text.as_deref(), salary_kind, salary_currency);
    let (salary_min, salary_max) = convert_bounds(salary_min, salary_max, salary_currency, rates);

    let city = select_first_text(fragment, CITY);
    if city.is_none() {
        warn!(%external_id, "no city found");
    }

    let experience = match select_first_text(fragment, EXPERIENCE) {
        Some(text) => parse_experience(&text),
        None => {
            warn!(%external_id, "no experience block found");
            None
        }
    };

    let fresh = select_first_text(fragment, FRESH_BADGE)
        .map(|text| text.to_lowercase().contains(FRESH_PHRASE))
        .unwrap_or(false);

    let company_name = select_first_text(fragment, EMPLOYER);
    if company_name.is_none() {
        warn!(%external_id, "no employer link found");
    }
    let company_url =
        select_first_attr(fragment, EMPLOYER, "href").and_then(|href| absolute_url(&href));

    Some(ListingDraft {
        url: format!("{VACANCY_BASE_URL}{external_id}"),
        external_id,
        title,
        salary_text,
        salary_kind,
        salary_min,
        salary_max,
        salary_currency,
        city,
        experience,
        fresh,
        company_name,
        company_url,
        search_tag: search_tag.to_lowercase(),
        captured_at: Utc::now(),
    })
}

/// The stable vacancy id, carried in the response link's query string.
fn response_link_id(fragment: &ElementRef<'_>) -> Option<String> {
    let href = select_first_attr(fragment, RESPONSE_LINK, "href")?;
    let absolute = Url::parse(SITE_BASE_URL).ok()?.join(&href).ok()?;
    absolute
        .query_pairs()
        .find(|(key, _)| key == "vacancyId")
        .map(|(_, value)| value.into_owned())
}

/// Page count from the pager control; anything unusable means one page.
pub fn parse_pagination(html: &str) -> u32 {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let pages = select_all_texts(&root, PAGER_PAGES);
    match pages.last().map(|text| text.parse::<u32>()) {
        Some(Ok(count)) => count,
        Some(Err(_)) => {
            warn!("last pager link is not a number, assuming a single page");
            1
        }
        None => {
            warn!("no pagination control found, assuming a single page");
            1
        }
    }
}

/// Enrichment fields from a vacancy detail page. Absent fields stay absent;
/// the skills list is always a list.
pub fn parse_detail_fields(html: &str) -> DetailFields {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let description = select_first_text(&root, DESCRIPTION);
    if description.is_none() {
        debug!("no description found");
    }
    let company_address = select_first_text(&root, RAW_ADDRESS)
        .or_else(|| select_first_text(&root, LOCATION_FALLBACK));
    if company_address.is_none() {
        debug!("no company address found");
    }

    DetailFields {
        description,
        key_skills: select_all_texts(&root, SKILL_TAG),
        company_address,
        employment_type: select_first_text(&root, EMPLOYMENT_MODE),
    }
}

/// The sweep's archive probe: an "архив" section heading on the page.
pub fn detail_is_archived(html: &str) -> bool {
    let document = Html::parse_document(html);
    let root = document.root_element();
    select_first_text(&root, ARCHIVE_HEADING)
        .map(|text| text.to_lowercase().contains(ARCHIVE_PHRASE))
        .unwrap_or(false)
}

/// Lexical salary classification. Branch order matters: the agreement phrase
/// contains "до", so equality is checked before any substring.
pub fn classify_salary(text: Option<&str>) -> SalaryKind {
    let Some(text) = text else {
        return SalaryKind::NoNumbers;
    };
    let lowered = text.to_lowercase();
    if lowered == AGREEMENT_PHRASE {
        SalaryKind::NoNumbers
    } else if text.contains(EN_DASH) {
        SalaryKind::Range
    } else if text.is_empty() {
        SalaryKind::NoNumbers
    } else if lowered.contains("от") {
        SalaryKind::MinOnly
    } else if lowered.contains("до") {
        SalaryKind::MaxOnly
    } else {
        SalaryKind::Fixed
    }
}

/// Currency from its glyph. `None` on non-empty text is a detection failure
/// the caller logs; the bounds then stay unparsed.
pub fn detect_currency(text: &str) -> Option<Currency> {
    [
        Currency::Rub,
        Currency::Usd,
        Currency::Eur,
        Currency::Kzt,
        Currency::Azn,
    ]
    .into_iter()
    .find(|currency| text.contains(currency.glyph()))
}

/// Pull the numeric bounds out of a classified salary string. A bound that
/// fails to parse becomes null, never a panic.
pub fn parse_salary_bounds(
    text: Option<&str>,
    kind: SalaryKind,
    currency: Option<Currency>,
) -> (Option<i64>, Option<i64>) {
    if kind == SalaryKind::NoNumbers {
        return (None, None);
    }
    let (Some(text), Some(currency)) = (text, currency) else {
        return (None, None);
    };
    let cleaned = text.replace(currency.glyph(), "");

    match kind {
        SalaryKind::NoNumbers => (None, None),
        SalaryKind::Range => {
            let Some((low, high)) = cleaned.split_once(EN_DASH) else {
                warn!(salary = text, "range salary without an en dash");
                return (None, None);
            };
            (parse_bound(low, &[]), parse_bound(high, &[]))
        }
        SalaryKind::Fixed => {
            let value = parse_bound(&cleaned, &[]);
            (value, value)
        }
        SalaryKind::MinOnly => (parse_bound(&cleaned, &["от"]), None),
        SalaryKind::MaxOnly => (None, parse_bound(&cleaned, &["до"])),
    }
}

fn parse_bound(text: &str, kind_words: &[&str]) -> Option<i64> {
    let mut cleaned = text.to_lowercase().replace(NET_OF_TAX_PHRASE, "");
    for word in kind_words {
        cleaned = cleaned.replace(word, "");
    }
    cleaned.retain(|ch| !ch.is_whitespace());
    match cleaned.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(fragment = text, "salary bound is not an integer");
            None
        }
    }
}

/// Normalize bounds into RUB. KZT and AZN keep long-standing pinned divisors
/// because the fetched table never carries those codes; an unknown rate
/// leaves the bounds unconverted.
pub fn convert_bounds(
    min: Option<i64>,
    max: Option<i64>,
    currency: Option<Currency>,
    rates: &ExchangeRateTable,
) -> (Option<i64>, Option<i64>) {
    let Some(currency) = currency else {
        return (min, max);
    };

    let divisor = match currency {
        Currency::Kzt => 5.1,
        Currency::Azn => 0.019,
        other => match rates.get(other.code()) {
            Some(rate) => rate,
            None => {
                warn!(
                    currency = other.code(),
                    "no exchange rate fetched, leaving bounds unconverted"
                );
                return (min, max);
            }
        },
    };

    (convert_one(min, divisor), convert_one(max, divisor))
}

fn convert_one(bound: Option<i64>, divisor: f64) -> Option<i64> {
    bound.map(|value| (value as f64 / divisor).round() as i64)
}

/// Experience text to band: the no-experience phrase short-circuits to zero
/// years, otherwise every embedded integer is read in document order.
pub fn parse_experience(text: &str) -> Option<ExperienceBand> {
    let lowered = text.to_lowercase();
    if lowered.contains(NO_EXPERIENCE_PHRASE) {
        return Some(ExperienceBand::Single(0));
    }

    let numbers = extract_integers(text);
    match numbers.as_slice() {
        [years] => Some(ExperienceBand::Single(*years)),
        [low, high] => Some(ExperienceBand::Between(*low, *high)),
        _ => {
            warn!(experience = text, "experience text did not parse into a band");
            None
        }
    }
}

/// Digit runs in order of appearance.
fn extract_integers(text: &str) -> Vec<u32> {
    let mut numbers = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            current.push(ch);
        } else if !current.is_empty() {
            if let Ok(value) = current.parse::<u32>() {
                numbers.push(value);
            }
            current.clear();
        }
    }
    if !current.is_empty() {
        if let Ok(value) = current.parse::<u32>() {
            numbers.push(value);
        }
    }
    numbers
}

fn absolute_url(href: &str) -> Option<String> {
    let base = Url::parse(SITE_BASE_URL).ok()?;
    match base.join(href) {
        Ok(url) => Some(url.to_string()),
        Err(_) => {
            warn!(href, "link does not join onto the site base");
            None
        }
    }
}

/// Text of the first match, with non-breaking spaces flattened so downstream
/// keyword and number scans see plain spaces.
fn select_first_text(fragment: &ElementRef<'_>, selector: &str) -> Option<String> {
    let parsed = Selector::parse(selector).ok()?;
    fragment
        .select(&parsed)
        .next()
        .map(|element| normalize_text(&element.text().collect::<String>()))
}

fn select_first_attr(fragment: &ElementRef<'_>, selector: &str, attr: &str) -> Option<String> {
    let parsed = Selector::parse(selector).ok()?;
    fragment
        .select(&parsed)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(str::to_string)
}

fn select_all_texts(fragment: &ElementRef<'_>, selector: &str) -> Vec<String> {
    let Ok(parsed) = Selector::parse(selector) else {
        return Vec::new();
    };
    fragment
        .select(&parsed)
        .map(|element| normalize_text(&element.text().collect::<String>()))
        .collect()
}

fn normalize_text(raw: &str) -> String {
    raw.replace('\u{a0}', " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rub_only() -> ExchangeRateTable {
        ExchangeRateTable::new(HashMap::from([("RUB".to_string(), 1.0)]))
    }

    fn with_usd() -> ExchangeRateTable {
        ExchangeRateTable::new(HashMap::from([
            ("RUB".to_string(), 1.0),
            ("USD".to_string(), 0.011),
        ]))
    }

    #[test]
    fn classification_order_is_stable() {
        assert_eq!(classify_salary(None), SalaryKind::NoNumbers);
        assert_eq!(classify_salary(Some("")), SalaryKind::NoNumbers);
        assert_eq!(classify_salary(Some("По договорённости")), SalaryKind::NoNumbers);
        assert_eq!(
            classify_salary(Some("180 000 – 250 000 ₽")),
            SalaryKind::Range
        );
        assert_eq!(classify_salary(Some("от 3000 $")), SalaryKind::MinOnly);
        assert_eq!(classify_salary(Some("До 90 000 ₽")), SalaryKind::MaxOnly);
        assert_eq!(classify_salary(Some("100 000 ₽ на руки")), SalaryKind::Fixed);
    }

    #[test]
    fn no_numbers_salaries_have_null_bounds() {
        for text in [None, Some(""), Some("По договорённости")] {
            let kind = classify_salary(text);
            assert_eq!(kind, SalaryKind::NoNumbers);

            let currency = text.and_then(detect_currency);
            let (min, max) = parse_salary_bounds(text, kind, currency);
            let (min, max) = convert_bounds(min, max, currency, &rub_only());
            assert_eq!(min, None);
            assert_eq!(max, None);
        }
    }

    #[test]
    fn range_salary_parses_both_bounds() {
        let text = Some("180 000 – 250 000 ₽");
        let kind = classify_salary(text);
        let currency = detect_currency(text.unwrap());
        assert_eq!(currency, Some(Currency::Rub));

        let (min, max) = parse_salary_bounds(text, kind, currency);
        let (min, max) = convert_bounds(min, max, currency, &rub_only());
        assert_eq!(min, Some(180_000));
        assert_eq!(max, Some(250_000));
    }

    #[test]
    fn min_only_dollar_salary_converts_to_rub() {
        let text = Some("от 3000 $");
        let kind = classify_salary(text);
        let currency = detect_currency(text.unwrap());
        assert_eq!(currency, Some(Currency::Usd));

        let (min, max) = parse_salary_bounds(text, kind, currency);
        let (min, max) = convert_bounds(min, max, currency, &with_usd());
        assert_eq!(min, Some(272_727));
        assert_eq!(max, None);
    }

    #[test]
    fn fixed_salary_uses_one_number_for_both_bounds() {
        let text = Some("100 000 ₽ на руки");
        let kind = classify_salary(text);
        let currency = detect_currency(text.unwrap());

        let (min, max) = parse_salary_bounds(text, kind, currency);
        assert_eq!(min, Some(100_000));
        assert_eq!(max, Some(100_000));
    }

    #[test]
    fn pinned_divisors_hold_for_kzt_and_azn() {
        // The rate table never carries these codes, so the divisors are
        // fixed constants. Changing them silently rescales stored salaries.
        let (min, _) = convert_bounds(Some(510_000), None, Some(Currency::Kzt), &rub_only());
        assert_eq!(min, Some(100_000));

        let (_, max) = convert_bounds(None, Some(1_900), Some(Currency::Azn), &rub_only());
        assert_eq!(max, Some(100_000));
    }

    #[test]
    fn base_currency_conversion_is_identity() {
        let (min, max) = convert_bounds(
            Some(100_000),
            Some(150_000),
            Some(Currency::Rub),
            &rub_only(),
        );
        assert_eq!(min, Some(100_000));
        assert_eq!(max, Some(150_000));
    }

    #[test]
    fn missing_rate_leaves_bounds_unconverted() {
        let (min, max) = convert_bounds(Some(900), Some(1000), Some(Currency::Eur), &rub_only());
        assert_eq!(min, Some(900));
        assert_eq!(max, Some(1000));
    }

    #[test]
    fn undetected_currency_keeps_kind_but_drops_bounds() {
        let text = Some("1000 руб.");
        let kind = classify_salary(text);
        assert_eq!(kind, SalaryKind::Fixed);

        let currency = detect_currency(text.unwrap());
        assert_eq!(currency, None);

        let (min, max) = parse_salary_bounds(text, kind, currency);
        assert_eq!(min, None);
        assert_eq!(max, None);
    }

    #[test]
    fn garbled_bound_becomes_null_not_panic() {
        let (min, max) = parse_salary_bounds(
            Some("от TBD ₽"),
            SalaryKind::MinOnly,
            Some(Currency::Rub),
        );
        assert_eq!(min, None);
        assert_eq!(max, None);
    }

    #[test]
    fn experience_bands_cover_all_shapes() {
        assert_eq!(parse_experience("Без опыта"), Some(ExperienceBand::Single(0)));
        assert_eq!(
            parse_experience("От 1 года до 3 лет"),
            Some(ExperienceBand::Between(1, 3))
        );
        assert_eq!(parse_experience("Более 6 лет"), Some(ExperienceBand::Single(6)));
        assert_eq!(parse_experience("стаж 1 2 3"), None);
        assert_eq!(parse_experience("не указан"), None);
    }

    const SEARCH_PAGE: &str = r#"
    <html><body>
      <div class="serp-item">
        <span class="serp-item__title">Rust разработчик</span>
        <span data-qa="vacancy-serp__vacancy-compensation">180&#160;000 – 250&#160;000 ₽</span>
        <div data-qa="vacancy-serp__vacancy-address">Москва</div>
        <div data-qa="vacancy-serp__vacancy-work-experience">От 1 года до 3 лет</div>
        <span data-qa="vacancy-label-be-first">Откликнитесь среди первых</span>
        <a data-qa="vacancy-serp__vacancy-employer" href="/employer/9000?from=serp">Crab Systems</a>
        <a data-qa="vacancy-serp__vacancy_response" href="/applicant/vacancy_response?vacancyId=77001234">Откликнуться</a>
      </div>
      <div class="serp-item">
        <span class="serp-item__title">Broken card without a response link</span>
      </div>
      <div data-qa="pager-block">
        <a data-qa="pager-page">1</a>
        <a data-qa="pager-page">2</a>
        <a data-qa="pager-page">5</a>
      </div>
    </body></html>
    "#;

    #[test]
    fn search_page_yields_one_draft_per_usable_card() {
        let drafts = parse_listing_page(SEARCH_PAGE, "Rust", &rub_only());
        assert_eq!(drafts.len(), 1);

        let draft = &drafts[0];
        assert_eq!(draft.external_id, "77001234");
        assert_eq!(draft.url, "https://hh.ru/vacancy/77001234");
        assert_eq!(draft.title.as_deref(), Some("Rust разработчик"));
        assert_eq!(draft.salary_kind, SalaryKind::Range);
        assert_eq!(draft.salary_min, Some(180_000));
        assert_eq!(draft.salary_max, Some(250_000));
        assert_eq!(draft.salary_currency, Some(Currency::Rub));
        assert_eq!(draft.city.as_deref(), Some("Москва"));
        assert_eq!(draft.experience, Some(ExperienceBand::Between(1, 3)));
        assert!(draft.fresh);
        assert_eq!(draft.company_name.as_deref(), Some("Crab Systems"));
        assert_eq!(
            draft.company_url.as_deref(),
            Some("https://hh.ru/employer/9000?from=serp")
        );
        assert_eq!(draft.search_tag, "rust");
    }

    #[test]
    fn pagination_reads_the_last_pager_link() {
        assert_eq!(parse_pagination(SEARCH_PAGE), 5);
        assert_eq!(parse_pagination("<html><body>no pager here</body></html>"), 1);
    }

    const DETAIL_PAGE: &str = r#"
    <html><body>
      <div data-qa="vacancy-description">Пишем сервисы на Rust и немного на Python.</div>
      <span data-qa="bloko-tag__text">Rust</span>
      <span data-qa="bloko-tag__text">PostgreSQL</span>
      <p data-qa="vacancy-view-location">Москва, Ленинградский проспект</p>
      <p data-qa="vacancy-view-employment-mode">Полная занятость, полный день</p>
    </body></html>
    "#;

    #[test]
    fn detail_page_fields_are_extracted_with_address_fallback() {
        let detail = parse_detail_fields(DETAIL_PAGE);

        assert_eq!(
            detail.description.as_deref(),
            Some("Пишем сервисы на Rust и немного на Python.")
        );
        assert_eq!(detail.key_skills, vec!["Rust", "PostgreSQL"]);
        // No raw address on this page, so the location block stands in.
        assert_eq!(
            detail.company_address.as_deref(),
            Some("Москва, Ленинградский проспект")
        );
        assert_eq!(
            detail.employment_type.as_deref(),
            Some("Полная занятость, полный день")
        );
    }

    #[test]
    fn detail_page_without_skills_yields_empty_list() {
        let detail = parse_detail_fields("<html><body><p>bare</p></body></html>");
        assert!(detail.key_skills.is_empty());
        assert!(detail.description.is_none());
    }

    #[test]
    fn archive_heading_is_recognized() {
        let archived = r#"<div class="vacancy-section"><h2>Вакансия в архиве</h2></div>"#;
        assert!(detail_is_archived(archived));

        let live = r#"<div class="vacancy-section"><h2>Похожие вакансии</h2></div>"#;
        assert!(!detail_is_archived(live));
        assert!(!detail_is_archived("<html><body></body></html>"));
    }

    #[test]
    fn url_shapes_match_the_site() {
        assert_eq!(
            search_page_url("python", 3),
            "https://hh.ru/search/vacancy?text=python&area=1&page=3"
        );
        assert!(search_entry_url("python").contains("hhtmFromLabel=vacancy_search_line"));
    }
}
