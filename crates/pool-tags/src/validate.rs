use crate::types::PoolPair;

/// A token field that failed validation, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub pair_id: String,
    pub token: &'static str,
    pub field: &'static str,
    pub value: String,
}

/// Whether a token name or symbol is safe to embed in generated notes.
///
/// Rejects empty or whitespace-only values, and anything containing `<`:
/// a lone `<` can open a markup tag once the value is interpolated.
pub fn is_valid_text(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && !trimmed.contains('<')
}

/// Every invalid name/symbol field of the pair, in token0-first order.
pub fn rejections_for(pair: &PoolPair) -> Vec<Rejection> {
    let mut rejections = Vec::new();
    for (token, slot) in [(&pair.token0, "token0"), (&pair.token1, "token1")] {
        for (field, value) in [("name", &token.name), ("symbol", &token.symbol)] {
            if !is_valid_text(value) {
                rejections.push(Rejection {
                    pair_id: pair.id.clone(),
                    token: slot,
                    field,
                    value: value.clone(),
                });
            }
        }
    }
    rejections
}

/// Drop pairs whose token metadata fails validation.
///
/// Rejections are logged, never raised; a dropped pair does not affect the
/// success of the overall sweep.
pub fn filter_valid(pairs: Vec<PoolPair>) -> Vec<PoolPair> {
    pairs
        .into_iter()
        .filter(|pair| {
            let rejections = rejections_for(pair);
            for rejection in &rejections {
                tracing::warn!(
                    pair = %rejection.pair_id,
                    token = rejection.token,
                    field = rejection.field,
                    value = %rejection.value,
                    "dropping pair with invalid token text"
                );
            }
            rejections.is_empty()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Token;

    fn pair_with_symbols(symbol0: &str, symbol1: &str) -> PoolPair {
        PoolPair {
            id: "0xpool".to_string(),
            timestamp: 1,
            token0: Token {
                id: "0x1".to_string(),
                name: "Wrapped Ether".to_string(),
                symbol: symbol0.to_string(),
            },
            token1: Token {
                id: "0x2".to_string(),
                name: "USD Coin".to_string(),
                symbol: symbol1.to_string(),
            },
        }
    }

    #[test]
    fn test_is_valid_text() {
        assert!(is_valid_text("USD Coin"));
        assert!(!is_valid_text(""));
        assert!(!is_valid_text("  "));
        assert!(!is_valid_text("<script>"));
        assert!(!is_valid_text("A<B"));
        assert!(is_valid_text(" WETH "));
    }

    #[test]
    fn test_one_bad_field_drops_whole_pair() {
        let pairs = vec![
            pair_with_symbols("WETH", "USDC"),
            pair_with_symbols("WETH", "<img>"),
            pair_with_symbols("", "USDC"),
        ];
        let valid = filter_valid(pairs);
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].token0.symbol, "WETH");
        assert_eq!(valid[0].token1.symbol, "USDC");
    }

    #[test]
    fn test_rejections_name_the_offending_field() {
        let pair = pair_with_symbols("WETH", "<img>");
        let rejections = rejections_for(&pair);
        assert_eq!(rejections.len(), 1);
        assert_eq!(rejections[0].pair_id, "0xpool");
        assert_eq!(rejections[0].token, "token1");
        assert_eq!(rejections[0].field, "symbol");
        assert_eq!(rejections[0].value, "<img>");
    }

    #[test]
    fn test_multiple_rejections_recorded() {
        let mut pair = pair_with_symbols("", "USDC");
        pair.token1.name = "<b>USD</b> Coin".to_string();
        let rejections = rejections_for(&pair);
        assert_eq!(rejections.len(), 2);
        assert_eq!(rejections[0].token, "token0");
        assert_eq!(rejections[0].field, "symbol");
        assert_eq!(rejections[1].token, "token1");
        assert_eq!(rejections[1].field, "name");
    }
}
