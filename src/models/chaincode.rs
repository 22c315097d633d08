use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{
    METHOD_BANKRUPT, METHOD_INIT_GAME, METHOD_PAY, METHOD_QUERY_ALL_PROPERTIES,
    METHOD_QUERY_ALL_WALLETS, METHOD_QUERY_PROPERTY, METHOD_QUERY_PROPERTY_HISTORY,
    METHOD_QUERY_WALLET, METHOD_QUERY_WALLET_HISTORY, METHOD_TRANSFER_PROPERTY,
    RETURN_CODE_SUCCESS,
};

// ==================== FORMS ====================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvocationForm {
    pub channel: String,
    pub chaincode: String,
    #[serde(rename = "chaincodeVer")]
    pub chaincode_ver: String,
    pub method: String,
    pub player: String,
    pub player2: String,
    pub property: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryForm {
    pub channel: String,
    pub chaincode: String,
    #[serde(rename = "chaincodeVer")]
    pub chaincode_ver: String,
    pub method: String,
    pub player: String,
    pub property: String,
}

// ==================== METHODS ====================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationMethod {
    TransferProperty,
    Pay,
    Bankrupt,
    InitGame,
    Other(String),
}

impl InvocationMethod {
    pub fn parse(raw: &str) -> Self {
        match raw {
            METHOD_TRANSFER_PROPERTY => Self::TransferProperty,
            METHOD_PAY => Self::Pay,
            METHOD_BANKRUPT => Self::Bankrupt,
            METHOD_INIT_GAME => Self::InitGame,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::TransferProperty => METHOD_TRANSFER_PROPERTY,
            Self::Pay => METHOD_PAY,
            Self::Bankrupt => METHOD_BANKRUPT,
            Self::InitGame => METHOD_INIT_GAME,
            Self::Other(raw) => raw,
        }
    }

    /// Positional chaincode arguments for this method, taken verbatim from the form.
    pub fn args(&self, form: &InvocationForm) -> Vec<String> {
        match self {
            Self::TransferProperty => vec![
                form.property.clone(),
                form.player.clone(),
                form.player2.clone(),
                form.value.clone(),
            ],
            Self::Pay => vec![form.player.clone(), form.player2.clone(), form.value.clone()],
            Self::Bankrupt => vec![form.player.clone()],
            Self::InitGame | Self::Other(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMethod {
    QueryWallet,
    QueryWalletHistory,
    QueryProperty,
    QueryPropertyHistory,
    QueryAllWallets,
    QueryAllProperties,
    Other(String),
}

impl QueryMethod {
    pub fn parse(raw: &str) -> Self {
        match raw {
            METHOD_QUERY_WALLET => Self::QueryWallet,
            METHOD_QUERY_WALLET_HISTORY => Self::QueryWalletHistory,
            METHOD_QUERY_PROPERTY => Self::QueryProperty,
            METHOD_QUERY_PROPERTY_HISTORY => Self::QueryPropertyHistory,
            METHOD_QUERY_ALL_WALLETS => Self::QueryAllWallets,
            METHOD_QUERY_ALL_PROPERTIES => Self::QueryAllProperties,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::QueryWallet => METHOD_QUERY_WALLET,
            Self::QueryWalletHistory => METHOD_QUERY_WALLET_HISTORY,
            Self::QueryProperty => METHOD_QUERY_PROPERTY,
            Self::QueryPropertyHistory => METHOD_QUERY_PROPERTY_HISTORY,
            Self::QueryAllWallets => METHOD_QUERY_ALL_WALLETS,
            Self::QueryAllProperties => METHOD_QUERY_ALL_PROPERTIES,
            Self::Other(raw) => raw,
        }
    }

    pub fn args(&self, form: &QueryForm) -> Vec<String> {
        match self {
            Self::QueryWallet | Self::QueryWalletHistory => vec![form.player.clone()],
            Self::QueryProperty | Self::QueryPropertyHistory => vec![form.property.clone()],
            Self::QueryAllWallets | Self::QueryAllProperties | Self::Other(_) => Vec::new(),
        }
    }
}

// ==================== WIRE ====================
/// Envelope posted to the chaincode backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeRequest {
    pub channel: String,
    pub chaincode: String,
    #[serde(rename = "chaincodeVer")]
    pub chaincode_ver: String,
    pub method: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendResponse {
    #[serde(rename = "returnCode", default)]
    pub return_code: String,
    #[serde(rename = "transactionID", default)]
    pub transaction_id: Option<String>,
    /// Usually a JSON document encoded as a string.
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub info: Option<String>,
}

impl BackendResponse {
    pub fn is_success(&self) -> bool {
        self.return_code == RETURN_CODE_SUCCESS
    }
}

// ==================== VIEWS ====================
#[derive(Debug, Clone, Serialize)]
pub struct InvocationView {
    pub channel: String,
    pub chaincode: String,
    #[serde(rename = "chaincodeVer")]
    pub chaincode_ver: String,
    pub method: String,
    pub player: String,
    pub player2: String,
    pub property: String,
    pub value: String,
    pub message: Option<String>,
    pub methods: &'static [&'static str],
    pub players: &'static [&'static str],
    pub properties: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryView {
    pub channel: String,
    pub chaincode: String,
    #[serde(rename = "chaincodeVer")]
    pub chaincode_ver: String,
    pub method: String,
    pub player: String,
    pub property: String,
    pub transactions: Vec<Value>,
    pub message: Option<String>,
    pub methods: &'static [&'static str],
    pub players: &'static [&'static str],
    pub properties: &'static [&'static str],
}
