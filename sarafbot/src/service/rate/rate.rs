use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Buy/sell quote exactly as the source displays it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RateEntry {
    pub buy: String,
    pub sell: String,
}

impl RateEntry {
    pub fn new(buy: impl Into<String>, sell: impl Into<String>) -> Self {
        Self {
            buy: buy.into(),
            sell: sell.into(),
        }
    }
}

/// Currency code to quote. Keys iterate in ascending order.
pub type RateSnapshot = BTreeMap<String, RateEntry>;

/// Entries of `current` that are new or differ textually from `previous`.
/// Keys missing from `current` are not reported.
pub fn compare(previous: &RateSnapshot, current: &RateSnapshot) -> RateSnapshot {
    current
        .iter()
        .filter(|&(code, entry)| previous.get(code) != Some(entry))
        .map(|(code, entry)| (code.clone(), entry.clone()))
        .collect()
}

/// Codes present in `previous` but gone from `current`.
pub fn removed(previous: &RateSnapshot, current: &RateSnapshot) -> Vec<String> {
    previous
        .keys()
        .filter(|&code| !current.contains_key(code))
        .cloned()
        .collect()
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Current snapshot, or `None` when the listing could not be read.
    async fn fetch(&self) -> Option<RateSnapshot>;
}

#[cfg(test)]
mod test {
    use super::*;

    fn snapshot(items: &[(&str, &str, &str)]) -> RateSnapshot {
        items
            .iter()
            .map(|&(code, buy, sell)| (code.to_string(), RateEntry::new(buy, sell)))
            .collect()
    }

    #[test]
    fn compare_with_itself_is_empty() {
        let a = snapshot(&[("USD", "70", "71"), ("EUR", "80", "81")]);
        assert!(compare(&a, &a).is_empty());
    }

    #[test]
    fn compare_against_empty_returns_everything() {
        let b = snapshot(&[("USD", "70", "71"), ("EUR", "80", "81")]);
        assert_eq!(compare(&RateSnapshot::new(), &b), b);
    }

    #[test]
    fn compare_reports_only_changed_sell() {
        let previous = snapshot(&[("USD", "70", "71")]);
        let current = snapshot(&[("USD", "70", "72")]);

        assert_eq!(compare(&previous, &current), snapshot(&[("USD", "70", "72")]));
    }

    #[test]
    fn compare_is_textual() {
        let previous = snapshot(&[("USD", "70", "71")]);
        let current = snapshot(&[("USD", "70.00", "71")]);

        assert_eq!(compare(&previous, &current).len(), 1);
    }

    #[test]
    fn compare_ignores_removed_keys() {
        let previous = snapshot(&[("USD", "70", "71"), ("EUR", "80", "81")]);
        let current = snapshot(&[("USD", "70", "71")]);

        assert!(compare(&previous, &current).is_empty());
        assert_eq!(removed(&previous, &current), vec!["EUR".to_string()]);
    }

    #[test]
    fn compare_keys_come_from_current_and_differ() {
        let previous = snapshot(&[("USD", "70", "71"), ("EUR", "80", "81"), ("GBP", "90", "91")]);
        let current = snapshot(&[("USD", "70", "71"), ("EUR", "80", "82"), ("AED", "19", "20")]);

        let changed = compare(&previous, &current);
        assert_eq!(changed.keys().collect::<Vec<_>>(), vec!["AED", "EUR"]);
        for (code, entry) in &changed {
            assert_eq!(current.get(code), Some(entry));
            assert_ne!(previous.get(code), Some(entry));
        }
    }

    #[test]
    fn entry_serializes_as_buy_sell_object() {
        let json = serde_json::to_string(&snapshot(&[("USD", "70", "71")])).unwrap();
        assert_eq!(json, r#"{"USD":{"buy":"70","sell":"71"}}"#);
    }
}
