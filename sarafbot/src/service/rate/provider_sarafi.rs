use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::service::rate::{currency, RateEntry, RateProvider, RateSnapshot};

pub const DEFAULT_URL: &str = "https://sarafi.af/en/exchange-rates/sarai-shahzada";

const USER_AGENT: &str = "Mozilla/5.0";

pub struct Provider {
    client: reqwest::Client,
    url: String,
}

impl Provider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    async fn get_rates(&self) -> Result<RateSnapshot> {
        let body = self.client.get(&self.url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send().await?
            .text().await?;

        parse_rates(&body)
    }
}

#[async_trait]
impl RateProvider for Provider {
    async fn fetch(&self) -> Option<RateSnapshot> {
        match self.get_rates().await {
            Ok(rates) if rates.is_empty() => {
                warn!("no recognized currencies on {}", self.url);
                None
            }
            Ok(rates) => {
                debug!("fetched {} rates", rates.len());
                Some(rates)
            }
            Err(err) => {
                warn!("{err}");
                None
            }
        }
    }
}

/// Extracts `name | buy | sell` rows from the first table of the page.
pub fn parse_rates(html: &str) -> Result<RateSnapshot> {
    let doc = Html::parse_document(html);
    let table = doc.select(&selector("table")?).next()
        .ok_or_else(|| Error::Source("table not found".into()))?;

    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;
    let mut rates = RateSnapshot::new();

    for row in table.select(&row_selector).skip(1) {
        let cells: Vec<String> = row.select(&cell_selector)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();

        if cells.len() < 3 {
            continue;
        }

        let Some(code) = currency::code_for(&cells[0]) else {
            continue;
        };

        rates.insert(code.to_string(), RateEntry::new(cells[1].clone(), cells[2].clone()));
    }

    Ok(rates)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|err| Error::Source(format!("unable to create selector '{css}': {err}")))
}
