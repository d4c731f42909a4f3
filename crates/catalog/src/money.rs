//! Money representation: `Currency` value object + `Price` entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, PriceId, ValueObject};

/// Currency as an embedded value: a short label ("USD") and a display symbol.
///
/// Immutable once constructed; compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    label: String,
    symbol: String,
}

impl Currency {
    /// Label is 1..=3 characters, symbol is exactly one character.
    pub fn new(label: impl Into<String>, symbol: impl Into<String>) -> DomainResult<Self> {
        let label = label.into();
        let symbol = symbol.into();

        if label.is_empty() || label.chars().count() > 3 {
            return Err(DomainError::invalid_input(format!(
                "currency label must be 1-3 characters, got '{label}'"
            )));
        }
        if symbol.chars().count() != 1 {
            return Err(DomainError::invalid_input(format!(
                "currency symbol must be a single character, got '{symbol}'"
            )));
        }

        Ok(Self { label, symbol })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl ValueObject for Currency {}

/// Price owned by exactly one product.
///
/// `amount` is stored as given (zero is representable); whether a product is
/// *orderable* at this price is a separate question answered by
/// [`Price::is_orderable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    id: PriceId,
    amount: Decimal,
    currency: Currency,
}

impl Price {
    pub fn new(id: PriceId, amount: Decimal, currency: Currency) -> Self {
        Self {
            id,
            amount,
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// A product can only be ordered when its price amount is strictly positive.
    pub fn is_orderable(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

impl Entity for Price {
    type Id = PriceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
