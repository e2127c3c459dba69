//! Chain identifiers accepted in `chainId`.
//!
//! Numeric chains are sent as their decimal id, the rest by short name.

// Full query
pub const BTC: &str = "0";
pub const ETH: &str = "1";
pub const OPTIMISM: &str = "10";
pub const BSC: &str = "56";
pub const TRON: &str = "79";
pub const POLYGON: &str = "137";
pub const HSK: &str = "177";
pub const LTC: &str = "227";
pub const ZKSYNC: &str = "324";
pub const IOTEX: &str = "4689";
pub const KAIA: &str = "8217";
pub const ARBITRUM: &str = "42161";
pub const AVALANCHE: &str = "43114";
pub const APTOS: &str = "aptos";
pub const SOLANA: &str = "solana";
pub const TON: &str = "ton";
pub const XRP: &str = "xrp";

// Basic query
pub const BASE: &str = "8453";
pub const LINEA: &str = "59144";
pub const SCROLL: &str = "534352";
pub const MERLIN: &str = "4200";
pub const NEO: &str = "888";
pub const ZKLINK: &str = "810180";
pub const RONIN: &str = "2020";
pub const BERACHAIN: &str = "80084";
pub const MONAD: &str = "monad";
pub const ASTAR: &str = "592";
pub const TAIKO: &str = "167000";
pub const BITLAYER: &str = "200901";
pub const SUI: &str = "sui";
pub const SEI: &str = "1329";
pub const KCC: &str = "321";
pub const SONIC: &str = "146";
pub const CONFLUX_ESPACE: &str = "1030";

/// Chains with full KYT support.
pub const FULL_QUERY: &[&str] = &[
    BTC, ETH, OPTIMISM, BSC, TRON, POLYGON, HSK, LTC, ZKSYNC, IOTEX, KAIA, ARBITRUM, AVALANCHE,
    APTOS, SOLANA, TON, XRP,
];

/// Chains limited to basic queries.
pub const BASIC_QUERY: &[&str] = &[
    BASE, LINEA, SCROLL, MERLIN, NEO, ZKLINK, RONIN, BERACHAIN, MONAD, ASTAR, TAIKO, BITLAYER, SUI,
    SEI, KCC, SONIC, CONFLUX_ESPACE,
];

/// Resolve a lowercase chain name (`eth`, `bsc`, `arbitrum`, ...) to its id.
/// Anything else is returned as-is so raw ids pass straight through.
pub fn resolve(name_or_id: &str) -> &str {
    match name_or_id.to_ascii_lowercase().as_str() {
        "btc" | "bitcoin" => BTC,
        "eth" | "ethereum" => ETH,
        "optimism" | "op" => OPTIMISM,
        "bsc" | "bnb" => BSC,
        "tron" | "trx" => TRON,
        "polygon" | "matic" => POLYGON,
        "hsk" => HSK,
        "ltc" | "litecoin" => LTC,
        "zksync" => ZKSYNC,
        "iotex" => IOTEX,
        "kaia" => KAIA,
        "arbitrum" | "arb" => ARBITRUM,
        "avalanche" | "avax" => AVALANCHE,
        "base" => BASE,
        "linea" => LINEA,
        "scroll" => SCROLL,
        "merlin" => MERLIN,
        "neo" => NEO,
        "zklink" => ZKLINK,
        "ronin" => RONIN,
        "berachain" => BERACHAIN,
        "astar" => ASTAR,
        "taiko" => TAIKO,
        "bitlayer" => BITLAYER,
        "sei" => SEI,
        "kcc" => KCC,
        "sonic" => SONIC,
        "conflux" | "cfx" => CONFLUX_ESPACE,
        _ => name_or_id,
    }
}
