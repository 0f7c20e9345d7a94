//! Query-string decoding
//!
//! Decodes the raw `?a=b&c=d` part of a request into command arguments.
//! Repeated keys are preserved in order (`cards=AS&cards=KH`).

use url::form_urlencoded;

use crate::error::{DeckError, Result};
use crate::registry::DeckId;

/// Decoded query parameters, in request order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode a raw query string (without the leading `?`)
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs = raw
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();
        Self { pairs }
    }

    /// First value for `key`
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in order
    pub fn all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }
}

/// Decode create arguments: `(cards, shuffled)`
///
/// `shuffled` is true only when its first value is `true` (any case).
pub fn parse_create_query(params: &QueryParams) -> (Vec<String>, bool) {
    let shuffled = params
        .first("shuffled")
        .is_some_and(|v| v.eq_ignore_ascii_case("true"));
    (params.all("cards"), shuffled)
}

/// Parse a path segment as a deck identifier
pub fn parse_deck_id(raw: &str) -> Result<DeckId> {
    raw.parse()
}

/// Parse the `count` query value: must be present, numeric and positive
pub fn parse_count(raw: Option<&str>) -> Result<i64> {
    let raw = raw.ok_or(DeckError::MissingCount)?;
    let count: i64 = raw
        .parse()
        .map_err(|_| DeckError::InvalidCount(format!("{raw:?} is not a number")))?;

    if count <= 0 {
        return Err(DeckError::InvalidCount(format!("{count} is not positive")));
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_cards_keep_order() {
        let params = QueryParams::parse(Some("cards=AS&shuffled=false&cards=KH&cards=10c"));
        let (cards, shuffled) = parse_create_query(&params);
        assert_eq!(cards, vec!["AS", "KH", "10c"]);
        assert!(!shuffled);
    }

    #[test]
    fn test_shuffled_flag() {
        let parse = |q: &str| parse_create_query(&QueryParams::parse(Some(q))).1;
        assert!(parse("shuffled=true"));
        assert!(parse("shuffled=TRUE"));
        assert!(!parse("shuffled=1"));
        assert!(!parse("shuffled=yes"));
        assert!(!parse("shuffled=false&shuffled=true"));
        assert!(!parse(""));
    }

    #[test]
    fn test_no_query() {
        let (cards, shuffled) = parse_create_query(&QueryParams::parse(None));
        assert!(cards.is_empty());
        assert!(!shuffled);
    }

    #[test]
    fn test_percent_decoding() {
        let params = QueryParams::parse(Some("cards=%41S"));
        assert_eq!(params.all("cards"), vec!["AS"]);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(Some("10")).unwrap(), 10);
        assert!(matches!(parse_count(None), Err(DeckError::MissingCount)));
        assert!(matches!(parse_count(Some("ten")), Err(DeckError::InvalidCount(_))));
        assert!(matches!(parse_count(Some("")), Err(DeckError::InvalidCount(_))));
        assert!(matches!(parse_count(Some("0")), Err(DeckError::InvalidCount(_))));
        assert!(matches!(parse_count(Some("-3")), Err(DeckError::InvalidCount(_))));
    }

    #[test]
    fn test_parse_deck_id() {
        let id = DeckId::new();
        assert_eq!(parse_deck_id(&id.to_string()).unwrap(), id);
        assert!(matches!(parse_deck_id("nope"), Err(DeckError::InvalidDeckId(_))));
    }
}
