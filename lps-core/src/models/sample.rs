/// A single observation of the quantity sold at a given price.
///
/// Both coordinates are finite and non-negative. Samples are the input to
/// demand fitting and are only ever created transiently, per fit request.
///
/// When deserialized, a sample may be given either as an object
/// (`{"price": 10.0, "quantity": 100.0}`) or as a `[price, quantity]` pair.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SampleDto")
)]
pub struct Sample {
    /// The observed price
    price: f64,
    /// The quantity sold at that price
    quantity: f64,
}

impl Sample {
    /// Creates a new sample, validating both coordinates
    pub fn new(price: f64, quantity: f64) -> Result<Self, SampleError> {
        Self::try_from(SampleDto { price, quantity })
    }

    /// The observed price
    pub fn price(&self) -> f64 {
        self.price
    }

    /// The quantity sold at the observed price
    pub fn quantity(&self) -> f64 {
        self.quantity
    }
}

// Both accepted shapes are documented, not just the one we serialize to
#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Sample {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> std::borrow::Cow<'static, str> {
        "Sample".into()
    }

    fn json_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "description": "An observed (price, quantity) pair, both finite and non-negative",
            "oneOf": [
                {
                    "type": "object",
                    "properties": {
                        "price": { "type": "number", "minimum": 0.0 },
                        "quantity": { "type": "number", "minimum": 0.0 },
                    },
                    "required": ["price", "quantity"],
                },
                {
                    "type": "array",
                    "prefixItems": [
                        { "type": "number", "minimum": 0.0, "title": "price" },
                        { "type": "number", "minimum": 0.0, "title": "quantity" },
                    ],
                    "minItems": 2,
                    "maxItems": 2,
                },
            ],
        })
    }
}

/// A DTO to ensure that we always validate when we deserialize from an untrusted source
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SampleDto {
    /// The (finite, non-negative) price
    pub price: f64,
    /// The (finite, non-negative) quantity
    pub quantity: f64,
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SampleDto {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Record {
            price: f64,
            quantity: f64,
        }

        serde_untagged::UntaggedEnumVisitor::new()
            .expecting("a {price, quantity} object or a [price, quantity] pair")
            .seq(|seq| {
                seq.deserialize::<(f64, f64)>()
                    .map(|(price, quantity)| SampleDto { price, quantity })
            })
            .map(|map| {
                map.deserialize::<Record>()
                    .map(|Record { price, quantity }| SampleDto { price, quantity })
            })
            .deserialize(deserializer)
    }
}

impl TryFrom<SampleDto> for Sample {
    type Error = SampleError;

    fn try_from(value: SampleDto) -> Result<Self, Self::Error> {
        let SampleDto { price, quantity } = value;

        if price.is_nan() || quantity.is_nan() {
            return Err(SampleError::NaN);
        }
        if price.is_infinite() || quantity.is_infinite() {
            return Err(SampleError::Infinite);
        }
        if price < 0.0 || quantity < 0.0 {
            return Err(SampleError::Negative { price, quantity });
        }

        Ok(Self { price, quantity })
    }
}

impl From<Sample> for SampleDto {
    fn from(value: Sample) -> Self {
        Self {
            price: value.price,
            quantity: value.quantity,
        }
    }
}

/// Errors that can occur when creating or validating a Sample
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SampleError {
    /// Error when any coordinate value is NaN
    #[error("NaN value encountered")]
    NaN,
    /// Error when any coordinate value is infinite
    #[error("prices and quantities cannot be infinite")]
    Infinite,
    /// Error when a coordinate is negative
    #[error("prices and quantities must be non-negative, got ({price}, {quantity})")]
    Negative {
        /// The offending price
        price: f64,
        /// The offending quantity
        quantity: f64,
    },
}
