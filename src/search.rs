use alloy::primitives::{Address, B256};

use crate::route::Route;

/// Shape of a raw search string, used to route a submission without results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Address (0x + 40 hex chars)
    Address(String),
    /// 32-byte hash: transaction, block, blob or user operation
    Hash(String),
    /// Block number (decimal)
    BlockNumber(u64),
    /// Free text: names, symbols, tags
    Text(String),
}

impl SearchQuery {
    /// Classify a search string
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();

        if let Some(hex_part) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            match hex_part.len() {
                40 if trimmed.parse::<Address>().is_ok() => {
                    return Self::Address(trimmed.to_lowercase())
                }
                64 if trimmed.parse::<B256>().is_ok() => return Self::Hash(trimmed.to_lowercase()),
                _ => {}
            }
        } else if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(num) = trimmed.parse::<u64>() {
                return Self::BlockNumber(num);
            }
        }

        Self::Text(trimmed.to_string())
    }

    /// Page this query identifies without a lookup. A bare hash is ambiguous
    /// between transactions, blocks, blobs and user operations.
    pub fn direct_route(&self) -> Option<Route> {
        match self {
            Self::Address(addr) => Some(Route::Address(addr.clone())),
            Self::BlockNumber(num) => Some(Route::Block(*num)),
            Self::Hash(_) | Self::Text(_) => None,
        }
    }
}
