use serde::{Deserialize, Deserializer, Serialize};

/// Token metadata as indexed by the subgraph. Name and symbol are
/// untrusted text and must pass validation before display.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub id: String,
    pub name: String,
    pub symbol: String,
}

/// One liquidity pool between two tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolPair {
    pub id: String,
    #[serde(deserialize_with = "timestamp_from_repr")]
    pub timestamp: u64,
    pub token0: Token,
    pub token1: Token,
}

// The gateway serializes subgraph BigInt fields as JSON strings; accept
// both the string and plain-number forms.
fn timestamp_from_repr<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(u64),
        Text(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Number(n) => Ok(n),
        Repr::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// Output annotation record for one pool contract address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractTag {
    #[serde(rename = "Contract Address")]
    pub contract_address: String,
    #[serde(rename = "Public Name Tag")]
    pub public_name_tag: String,
    #[serde(rename = "Project Name")]
    pub project_name: String,
    #[serde(rename = "UI/Website Link")]
    pub ui_website_link: String,
    #[serde(rename = "Public Note")]
    pub public_note: String,
}
