/// The cost structure and admissible price interval of a pricing decision.
///
/// Profit at price p is (p − unit_cost)·q(p) − fixed_cost, and the chosen
/// price must lie within `[price_min, price_max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CostContextDto", rename_all = "camelCase")
)]
pub struct CostContext {
    unit_cost: f64,
    fixed_cost: f64,
    price_min: f64,
    price_max: f64,
}

impl CostContext {
    /// Creates a new cost context with validation
    pub fn new(
        unit_cost: f64,
        fixed_cost: f64,
        price_min: f64,
        price_max: f64,
    ) -> Result<Self, CostContextError> {
        Self::try_from(CostContextDto {
            unit_cost,
            fixed_cost,
            price_min,
            price_max,
        })
    }

    /// The variable cost incurred per unit sold
    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    /// The cost incurred regardless of the quantity sold
    pub fn fixed_cost(&self) -> f64 {
        self.fixed_cost
    }

    /// Return the admissible price interval (min and max prices)
    pub fn interval(&self) -> (f64, f64) {
        (self.price_min, self.price_max)
    }

    /// Projects a price onto the admissible interval
    pub fn clamp(&self, price: f64) -> f64 {
        price.clamp(self.price_min, self.price_max)
    }
}

/// A DTO to ensure that we always validate when we deserialize from an untrusted source
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(inline))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug)]
pub struct CostContextDto {
    /// The (finite, non-negative) unit cost
    pub unit_cost: f64,
    /// The (finite) fixed cost
    pub fixed_cost: f64,
    /// The (finite) lower price bound
    pub price_min: f64,
    /// The (finite) upper price bound, no less than `price_min`
    pub price_max: f64,
}

impl TryFrom<CostContextDto> for CostContext {
    type Error = CostContextError;

    fn try_from(value: CostContextDto) -> Result<Self, Self::Error> {
        let CostContextDto {
            unit_cost,
            fixed_cost,
            price_min,
            price_max,
        } = value;

        // Note the negation: a NaN bound fails the comparison and is rejected here as well
        if !(price_min.is_finite() && price_max.is_finite() && price_min <= price_max) {
            return Err(CostContextError::InvalidInterval {
                min: price_min,
                max: price_max,
            });
        }
        if !(unit_cost.is_finite() && fixed_cost.is_finite() && unit_cost >= 0.0) {
            return Err(CostContextError::InvalidCost {
                unit_cost,
                fixed_cost,
            });
        }

        Ok(Self {
            unit_cost,
            fixed_cost,
            price_min,
            price_max,
        })
    }
}

/// Errors that can occur when creating or validating a CostContext
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CostContextError {
    /// Error when the price interval is empty or unbounded
    #[error("invalid interval: require finite pMin <= pMax, got [{min}, {max}]")]
    InvalidInterval {
        /// The requested lower bound
        min: f64,
        /// The requested upper bound
        max: f64,
    },
    /// Error when a cost is not finite, or the unit cost is negative
    #[error(
        "invalid cost: require finite c >= 0 and finite F, got c={unit_cost}, F={fixed_cost}"
    )]
    InvalidCost {
        /// The requested unit cost
        unit_cost: f64,
        /// The requested fixed cost
        fixed_cost: f64,
    },
}
