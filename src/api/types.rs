use serde::{Deserialize, Serialize};

use crate::categorize::CategoryKey;
use crate::route::Route;

// ============================================================================
// Quick search items
// ============================================================================

/// One entry of the quick search response, discriminated by its `type` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchResultItem {
    Token(TokenItem),
    Contract(AddressItem),
    Address(AddressItem),
    Label(AddressItem),
    Block(BlockItem),
    Transaction(TxItem),
    Blob(BlobItem),
    UserOperation(UserOpItem),
    App(AppItem),
    /// Any kind this client does not know about yet
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenItem {
    #[serde(alias = "address_hash")]
    pub address: String,
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub exchange_rate: Option<String>,
    #[serde(default)]
    pub is_smart_contract_verified: Option<bool>,
}

/// Shared shape of contract, address and label hits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressItem {
    #[serde(alias = "address_hash")]
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_smart_contract_verified: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    #[default]
    Block,
    Reorg,
    Uncle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockItem {
    pub block_number: u64,
    pub block_hash: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub block_type: BlockType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxItem {
    pub tx_hash: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlobItem {
    pub blob_hash: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserOpItem {
    pub user_operation_hash: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub logo: Option<String>,
    pub url: String,
    #[serde(default)]
    pub short_description: Option<String>,
}

impl SearchResultItem {
    /// Category this item is listed under, `None` for unknown kinds
    pub fn category(&self) -> Option<CategoryKey> {
        match self {
            Self::Token(_) => Some(CategoryKey::Tokens),
            Self::Contract(_) | Self::Address(_) => Some(CategoryKey::Addresses),
            Self::Block(_) => Some(CategoryKey::Blocks),
            Self::Transaction(_) => Some(CategoryKey::Transactions),
            Self::Blob(_) => Some(CategoryKey::Blobs),
            Self::UserOperation(_) => Some(CategoryKey::UserOperations),
            Self::Label(_) => Some(CategoryKey::Labels),
            Self::App(_) => Some(CategoryKey::Apps),
            Self::Unknown => None,
        }
    }

    /// Primary text for a suggestion row
    pub fn display_name(&self) -> String {
        match self {
            Self::Token(token) => match &token.symbol {
                Some(symbol) => format!("{} ({symbol})", token.name),
                None => token.name.clone(),
            },
            Self::Contract(item) | Self::Address(item) | Self::Label(item) => {
                item.name.clone().unwrap_or_else(|| item.address.clone())
            }
            Self::Block(block) => match block.block_type {
                BlockType::Block => format!("Block #{}", block.block_number),
                BlockType::Reorg => format!("Block #{} (reorg)", block.block_number),
                BlockType::Uncle => format!("Block #{} (uncle)", block.block_number),
            },
            Self::Transaction(tx) => tx.tx_hash.clone(),
            Self::Blob(blob) => blob.blob_hash.clone(),
            Self::UserOperation(op) => op.user_operation_hash.clone(),
            Self::App(app) => app.title.clone(),
            Self::Unknown => String::new(),
        }
    }

    /// Secondary identifying text (hash or address), if any
    pub fn secondary(&self) -> Option<&str> {
        match self {
            Self::Token(token) => Some(&token.address),
            Self::Contract(item) | Self::Address(item) | Self::Label(item) => {
                item.name.as_ref().map(|_| item.address.as_str())
            }
            Self::Block(block) => Some(&block.block_hash),
            Self::App(app) => app.short_description.as_deref(),
            _ => None,
        }
    }

    pub fn icon_url(&self) -> Option<&str> {
        match self {
            Self::Token(token) => token.icon_url.as_deref(),
            Self::App(app) => app.logo.as_deref(),
            _ => None,
        }
    }

    /// Explorer page for this item
    pub fn route(&self) -> Option<Route> {
        match self {
            Self::Token(token) => Some(Route::Token(token.address.clone())),
            Self::Contract(item) | Self::Address(item) | Self::Label(item) => {
                Some(Route::Address(item.address.clone()))
            }
            Self::Block(block) => match block.block_type {
                // Reorged and uncle blocks are only reachable by hash
                BlockType::Block => Some(Route::Block(block.block_number)),
                BlockType::Reorg | BlockType::Uncle => {
                    Some(Route::BlockHash(block.block_hash.clone()))
                }
            },
            Self::Transaction(tx) => Some(Route::Transaction(tx.tx_hash.clone())),
            Self::Blob(blob) => Some(Route::Blob(blob.blob_hash.clone())),
            Self::UserOperation(op) => Some(Route::UserOperation(op.user_operation_hash.clone())),
            Self::App(app) => Some(Route::App(app.id.clone())),
            Self::Unknown => None,
        }
    }
}

// ============================================================================
// App directory
// ============================================================================

/// Entry of the marketplace app directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceApp {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub logo: Option<String>,
    pub url: String,
    #[serde(default)]
    pub short_description: Option<String>,
}

impl MarketplaceApp {
    pub fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

impl From<&MarketplaceApp> for SearchResultItem {
    fn from(app: &MarketplaceApp) -> Self {
        Self::App(AppItem {
            id: app.id.clone(),
            title: app.title.clone(),
            logo: app.logo.clone(),
            url: app.url.clone(),
            short_description: app.short_description.clone(),
        })
    }
}
