/// Application constants

pub const API_VERSION: &str = "v1";

// Backend reply discriminator
pub const RETURN_CODE_SUCCESS: &str = "Success";

// Invocation methods
pub const METHOD_TRANSFER_PROPERTY: &str = "transferProperty";
pub const METHOD_PAY: &str = "pay";
pub const METHOD_BANKRUPT: &str = "bankrupt";
pub const METHOD_INIT_GAME: &str = "initGame";

// Query methods
pub const METHOD_QUERY_WALLET: &str = "queryWallet";
pub const METHOD_QUERY_WALLET_HISTORY: &str = "queryWalletHistory";
pub const METHOD_QUERY_PROPERTY: &str = "queryProperty";
pub const METHOD_QUERY_PROPERTY_HISTORY: &str = "queryPropertyHistory";
pub const METHOD_QUERY_ALL_WALLETS: &str = "queryAllWallets";
pub const METHOD_QUERY_ALL_PROPERTIES: &str = "queryAllProperties";

/// Methods offered by the invocation form, in display order.
pub const INVOCATION_METHODS: &[&str] = &[
    METHOD_TRANSFER_PROPERTY,
    METHOD_PAY,
    METHOD_BANKRUPT,
    METHOD_INIT_GAME,
];

/// Methods offered by the query form, in display order.
pub const QUERY_METHODS: &[&str] = &[
    METHOD_QUERY_WALLET,
    METHOD_QUERY_WALLET_HISTORY,
    METHOD_QUERY_PROPERTY,
    METHOD_QUERY_PROPERTY_HISTORY,
    METHOD_QUERY_ALL_WALLETS,
    METHOD_QUERY_ALL_PROPERTIES,
];

// Wallets created when a game starts
pub const PLAYERS: &[&str] = &[
    "Player 1", "Player 2", "Player 3", "Player 4", "Player 5", "Player 6", "Bank",
];

// Property titles created when a game starts
pub const PROPERTIES: &[&str] = &[
    "Ipanema",
    "Leblon",
    "Copacabana",
    "Avenida Brigadeiro Faria Lima",
    "Avenida Presidente Juscelino Kubistcheck",
    "Avenida Engenheiro Luis Carlos Berrini",
    "Avenida Atlantica",
    "Avenida Vieira Souto",
    "Niteroi",
    "Avenida Paulista",
    "Rua 25 de Marco",
    "Avenida Sao Joao",
    "Praca da Se",
    "Avenida Sumare",
    "Avenida Cidade Jardim",
    "Pacaembu",
    "Ibirapuera",
    "Barra da Tijuca",
    "Jardim Botanico",
    "Lagoa Rodrigo de Freitas",
    "Avenida Morumbi",
    "Rua Oscar Freire",
];
