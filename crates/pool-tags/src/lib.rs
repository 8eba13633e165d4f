pub mod error;
pub mod fetcher;
pub mod pager;
pub mod registry;
pub mod transform;
pub mod types;
pub mod validate;

use error::Error;

// Re-exports for convenience
pub use fetcher::{PairSource, SubgraphFetcher};
pub use registry::ChainEndpoint;
pub use types::{ContractTag, PoolPair, Token};

/// Fetch every liquidity pool on a chain and describe each as a contract tag.
///
/// This is the main entry point. It resolves the chain's gateway endpoint,
/// sweeps the pair subgraph page by page, and returns one tag per pair whose
/// token metadata passed validation. Any fetch failure aborts the sweep and
/// discards partial results.
pub async fn fetch_pool_tags(chain_id: &str, api_key: &str) -> Result<Vec<ContractTag>, Error> {
    let endpoint = registry::resolve_endpoint(chain_id, api_key)?;
    let fetcher = SubgraphFetcher::new(endpoint.url);
    collect_tags(endpoint.chain_id, &fetcher).await
}

/// Drain a pair source to completion, transforming each page as it arrives.
pub async fn collect_tags<S: PairSource + ?Sized>(
    chain_id: u64,
    source: &S,
) -> Result<Vec<ContractTag>, Error> {
    let mut pager = pager::Pager::new(source);
    let mut tags = Vec::new();
    while let Some(page) = pager.next_page().await? {
        let valid = validate::filter_valid(page);
        tags.extend(transform::to_tags(chain_id, &valid));
    }
    Ok(tags)
}
