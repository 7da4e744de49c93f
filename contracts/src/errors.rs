//! Protocol error definitions.

use odra::prelude::*;

/// DSC engine errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DscError {
    // Amount / account errors (1xx)
    NeedsMoreThanZero = 100,
    InsufficientCollateral = 101,
    InsufficientDebt = 102,

    // Collateral registry errors (2xx)
    TokenAddressesAndPriceFeedAddressesMustBeSameLength = 200,
    NoCollateralConfigured = 201,
    DuplicateCollateralToken = 202,
    TokenNotAllowed = 203,
    UnsupportedAssetDecimals = 204,
    DscNotConfigured = 205,

    // Solvency errors (3xx)
    BreaksHealthFactor = 300,

    // Oracle errors (4xx)
    InvalidPrice = 400,
    UnsupportedFeedDecimals = 401,

    // Token errors (5xx)
    TransferFailed = 500,
    MintFailed = 501,
    BurnAmountExceedsBalance = 502,
    InsufficientTokenBalance = 503,
    InsufficientAllowance = 504,

    // Access errors (6xx)
    NotOwner = 600,
    Reentrancy = 601,

    // Arithmetic errors (7xx)
    MathOverflow = 700,
}

impl DscError {
    pub const fn message(&self) -> &'static str {
        match self {
            DscError::NeedsMoreThanZero => "Amount must be more than zero",
            DscError::InsufficientCollateral => "Redeem amount exceeds deposited collateral",
            DscError::InsufficientDebt => "Burn amount exceeds minted DSC",

            DscError::TokenAddressesAndPriceFeedAddressesMustBeSameLength => {
                "Token addresses and price feed addresses must be the same length"
            }
            DscError::NoCollateralConfigured => "At least one collateral token is required",
            DscError::DuplicateCollateralToken => "Collateral token listed more than once",
            DscError::TokenNotAllowed => "Token is not an approved collateral",
            DscError::UnsupportedAssetDecimals => "Collateral token decimals out of range",
            DscError::DscNotConfigured => "DSC token address is not set",

            DscError::BreaksHealthFactor => "Operation breaks the health factor",

            DscError::InvalidPrice => "Price feed returned a non-positive price",
            DscError::UnsupportedFeedDecimals => "Price feed decimals exceed common precision",

            DscError::TransferFailed => "Token transfer failed",
            DscError::MintFailed => "DSC mint failed",
            DscError::BurnAmountExceedsBalance => "Burn amount exceeds balance",
            DscError::InsufficientTokenBalance => "Insufficient token balance",
            DscError::InsufficientAllowance => "Insufficient allowance",

            DscError::NotOwner => "Caller is not the owner",
            DscError::Reentrancy => "Reentrant call",

            DscError::MathOverflow => "Arithmetic overflow",
        }
    }
}

impl core::fmt::Display for DscError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<DscError> for OdraError {
    fn from(error: DscError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
