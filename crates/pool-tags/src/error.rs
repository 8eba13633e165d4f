use thiserror::Error;

/// Unified error type for the pool tag generator.
///
/// One variant per failure kind; callers pattern-match on the variant
/// instead of probing error payloads.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported chain id {chain_id}; supported chain ids: {supported}")]
    UnsupportedChain { chain_id: String, supported: String },

    #[error("subgraph request failed with HTTP status {status}")]
    Http { status: u16 },

    #[error("subgraph query errors: {0}")]
    GraphQl(String),

    #[error("subgraph response carried no pairs data")]
    MissingData,

    #[error("unexpected failure while fetching pools: {0}")]
    Unexpected(String),
}
