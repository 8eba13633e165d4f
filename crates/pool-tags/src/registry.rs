use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::Error;

/// Placeholder substring in gateway URL templates, replaced by the
/// percent-encoded API key at resolution time.
const API_KEY_PLACEHOLDER: &str = "[api-key]";

/// RFC 3986 unreserved characters pass through; everything else is escaped.
const API_KEY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Chain id → gateway URL template for the SushiSwap pair subgraph on
/// each supported network. Loaded once, never mutated.
const GATEWAYS: &[(u64, &str)] = &[
    (
        1,
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/id/GyZ9MgVQkTWuXGMSd3LXESvpevE8S8aD3uktJh7kbVmc",
    ),
    (
        324,
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/id/6ok5cwMsoXZ6NB8DZhNipsA5nNw3BfDJDq5F4tuPkruJ",
    ),
    (
        1101,
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/id/8NiXkxLRT3R22vpwLB4DXttpEf3X1LrKhe4T1tQ3jjbP",
    ),
    (
        8453,
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/id/7pXNLCc12pRM3bBPUAP9ZoEvkgUCjaBe9QC3DV9L2qzE",
    ),
    (
        42161,
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/id/8yBXBTMfdhsoE5QCf7KnoPmQb7QAWtRzESfYjiCjGEM9",
    ),
    (
        59144,
        "https://gateway.thegraph.com/api/[api-key]/subgraphs/id/G1Q6dviDfMm6hVLvCqbfeB19kLmvs7qrnBvXeFndjhaU",
    ),
];

/// A concrete gateway endpoint for one chain.
#[derive(Debug, Clone)]
pub struct ChainEndpoint {
    pub chain_id: u64,
    pub url: String,
}

/// Resolve the gateway URL for a chain identifier.
///
/// The identifier must be numeric and present in the registry; anything
/// else fails fast with `UnsupportedChain` before any network call. The
/// API key is percent-encoded before substitution.
pub fn resolve_endpoint(chain_id: &str, api_key: &str) -> Result<ChainEndpoint, Error> {
    let id: u64 = chain_id
        .trim()
        .parse()
        .map_err(|_| unsupported(chain_id))?;
    let template = GATEWAYS
        .iter()
        .find(|(chain, _)| *chain == id)
        .map(|(_, template)| *template)
        .ok_or_else(|| unsupported(chain_id))?;

    let encoded_key = utf8_percent_encode(api_key, API_KEY_ESCAPE).to_string();
    Ok(ChainEndpoint {
        chain_id: id,
        url: template.replace(API_KEY_PLACEHOLDER, &encoded_key),
    })
}

fn unsupported(chain_id: &str) -> Error {
    let supported = GATEWAYS
        .iter()
        .map(|(chain, _)| chain.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Error::UnsupportedChain {
        chain_id: chain_id.to_string(),
        supported,
    }
}
