//! Query-string parameter assembly for GET endpoints.
//!
//! Array parameters encode as repeated keys (`campaign_ids=1&campaign_ids=2`),
//! which is the form the Performance API expects.

/// Ordered set of query-string pairs.
///
/// Feed the result to `RequestBuilder::query` via [`Query::pairs`]; reqwest
/// handles percent-encoding.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one key/value pair.
    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a pair only when a value is present.
    pub fn push_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// Append one pair per element, producing repeated keys.
    pub fn push_all<I, T>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        for value in values {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_insertion_order() {
        let query = Query::new().push("b", 2).push("a", 1);
        assert_eq!(
            query.pairs(),
            &[("b".to_string(), "2".to_string()), ("a".to_string(), "1".to_string())]
        );
    }

    #[test]
    fn push_opt_skips_absent_values() {
        let query = Query::new()
            .push_opt("state", Some("RUNNING"))
            .push_opt("adv_object_type", None::<&str>);

        assert_eq!(query.pairs(), &[("state".to_string(), "RUNNING".to_string())]);
    }

    #[test]
    fn push_all_repeats_the_key() {
        let query = Query::new().push_all("campaign_ids", [1u64, 2, 3]);
        assert_eq!(
            query.pairs(),
            &[
                ("campaign_ids".to_string(), "1".to_string()),
                ("campaign_ids".to_string(), "2".to_string()),
                ("campaign_ids".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn empty_query() {
        assert!(Query::new().is_empty());
        assert!(!Query::new().push("k", "v").is_empty());
    }
}
