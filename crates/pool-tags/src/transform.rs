use crate::types::{ContractTag, PoolPair};

pub const PROJECT_NAME: &str = "SushiSwap";
pub const PROJECT_WEBSITE: &str = "https://www.sushi.com/pool";

/// Display budget for the symbol pairing, ellipsis included.
const MAX_SYMBOLS_LEN: usize = 45;
const ELLIPSIS: &str = "...";

/// `symbol0/symbol1`, truncated to 45 characters total with a trailing
/// ellipsis when longer. Counted in chars so multibyte symbols cannot be
/// split mid code point.
pub fn symbol_display(symbol0: &str, symbol1: &str) -> String {
    let joined = format!("{symbol0}/{symbol1}");
    if joined.chars().count() <= MAX_SYMBOLS_LEN {
        return joined;
    }
    let mut truncated: String = joined
        .chars()
        .take(MAX_SYMBOLS_LEN - ELLIPSIS.len())
        .collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Build the contract tag for one validated pair.
///
/// The note interpolates the full, untruncated names and symbols; only the
/// name tag uses the truncated symbol display.
pub fn to_tag(chain_id: u64, pair: &PoolPair) -> ContractTag {
    let symbols = symbol_display(&pair.token0.symbol, &pair.token1.symbol);
    ContractTag {
        contract_address: format!("eip155:{chain_id}:{}", pair.id),
        public_name_tag: format!("{symbols} Pool"),
        project_name: PROJECT_NAME.to_string(),
        ui_website_link: PROJECT_WEBSITE.to_string(),
        public_note: format!(
            "Liquidity pool contract on {PROJECT_NAME} for the pair {} ({}) / {} ({}).",
            pair.token0.name, pair.token0.symbol, pair.token1.name, pair.token1.symbol,
        ),
    }
}

/// One tag per valid pair, order preserved.
pub fn to_tags(chain_id: u64, pairs: &[PoolPair]) -> Vec<ContractTag> {
    pairs.iter().map(|pair| to_tag(chain_id, pair)).collect()
}
