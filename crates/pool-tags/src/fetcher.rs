use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::error::Error;
use crate::types::PoolPair;

/// Maximum pairs requested per page. A page of exactly this size signals
/// that more data may exist.
pub const PAGE_SIZE: usize = 1000;

/// Pairs created after the cursor timestamp, ascending. Ascending order is
/// load-bearing: the last element of each page becomes the next cursor.
const PAIRS_QUERY: &str = r#"
query Pairs($lastTimestamp: BigInt!) {
  pairs(
    first: 1000
    orderBy: timestamp
    orderDirection: asc
    where: { timestamp_gt: $lastTimestamp }
  ) {
    id
    timestamp
    token0 { id name symbol }
    token1 { id name symbol }
  }
}
"#;

/// Source of raw pool pair pages (subgraph gateway, or a scripted source
/// in tests).
#[async_trait]
pub trait PairSource: Send + Sync {
    /// Fetch one page of pairs with `timestamp > last_timestamp`.
    async fn fetch_page(&self, last_timestamp: u64) -> Result<Vec<PoolPair>, Error>;
}

/// GraphQL client for one chain's pair subgraph.
pub struct SubgraphFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl SubgraphFetcher {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Use a caller-provided client (connection reuse across sweeps).
    pub fn with_client(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl PairSource for SubgraphFetcher {
    async fn fetch_page(&self, last_timestamp: u64) -> Result<Vec<PoolPair>, Error> {
        let body = json!({
            "query": PAIRS_QUERY,
            "variables": { "lastTimestamp": last_timestamp },
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Unexpected(format!("transport failure: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::Unexpected(format!("failed reading response body: {e}")))?;
        let pairs = decode_page(&text)?;
        tracing::debug!(cursor = last_timestamp, pairs = pairs.len(), "fetched pairs page");
        Ok(pairs)
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<PairsData>,
    #[serde(default)]
    errors: Option<Vec<QueryError>>,
}

#[derive(Deserialize)]
struct PairsData {
    #[serde(default)]
    pairs: Option<Vec<PoolPair>>,
}

#[derive(Deserialize)]
struct QueryError {
    message: String,
}

/// Decode a GraphQL response body into a page of pairs.
///
/// A non-empty `errors` list wins over any `data`: every message is logged
/// and a single aggregate failure is raised. A missing `data.pairs` is
/// `MissingData`; an empty `pairs` array is a valid empty page.
fn decode_page(body: &str) -> Result<Vec<PoolPair>, Error> {
    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|e| Error::Unexpected(format!("undecodable subgraph response: {e}")))?;

    if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
        for error in &errors {
            tracing::error!(message = %error.message, "subgraph query error");
        }
        let joined = errors
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(Error::GraphQl(joined));
    }

    envelope
        .data
        .and_then(|data| data.pairs)
        .ok_or(Error::MissingData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_page_with_pairs() {
        let body = r#"{
            "data": {
                "pairs": [
                    {
                        "id": "0xpool",
                        "timestamp": "1700000000",
                        "token0": { "id": "0x1", "name": "Wrapped Ether", "symbol": "WETH" },
                        "token1": { "id": "0x2", "name": "USD Coin", "symbol": "USDC" }
                    }
                ]
            }
        }"#;
        let pairs = decode_page(body).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].id, "0xpool");
        assert_eq!(pairs[0].timestamp, 1700000000);
    }

    #[test]
    fn test_decode_empty_page_is_ok() {
        let pairs = decode_page(r#"{ "data": { "pairs": [] } }"#).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_decode_errors_aggregated() {
        let body = r#"{
            "errors": [
                { "message": "rate limited" },
                { "message": "bad query" }
            ]
        }"#;
        let err = decode_page(body).unwrap_err();
        match err {
            Error::GraphQl(joined) => {
                assert!(joined.contains("rate limited"));
                assert!(joined.contains("bad query"));
            }
            other => panic!("expected GraphQl, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_null_data_is_missing() {
        let err = decode_page(r#"{ "data": null }"#).unwrap_err();
        assert!(matches!(err, Error::MissingData));
    }

    #[test]
    fn test_decode_null_pairs_is_missing() {
        let err = decode_page(r#"{ "data": { "pairs": null } }"#).unwrap_err();
        assert!(matches!(err, Error::MissingData));
    }

    #[test]
    fn test_decode_garbage_is_unexpected() {
        let err = decode_page("not json at all").unwrap_err();
        assert!(matches!(err, Error::Unexpected(_)));
    }
}
