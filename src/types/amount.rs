use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stored amounts are JSON numbers; any decimal with at most this many significant digits survives
/// the trip through a double unchanged.
pub const MAX_SIGNIFICANT_DIGITS: u32 = 15;

/// A strictly positive transaction magnitude.
///
/// The sign of a transaction lives in its type, never in the amount. Values are normalized on
/// construction so the display form carries no trailing fractional zeros (`12.50` shows as
/// `12.5`), which is the string that searches match against.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive(value));
        }

        Ok(Amount(value.normalize()))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    fn significant_digits(&self) -> u32 {
        let mut mantissa = self.0.mantissa().unsigned_abs();

        while mantissa != 0 && mantissa % 10 == 0 {
            mantissa /= 10;
        }

        mantissa.checked_ilog10().map_or(0, |digits| digits + 1)
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::Empty);
        }

        let decimal = Decimal::from_str(value).map_err(|error| {
            AmountError::InvalidFormat(format!("Value [{value}] is not a number: {error}"))
        })?;

        let amount = Amount::new(decimal)?;

        if amount.significant_digits() > MAX_SIGNIFICANT_DIGITS {
            return Err(AmountError::TooPrecise(amount.0));
        }

        Ok(amount)
    }
}

//NOTE: The stored blob keeps amounts as plain JSON numbers, so whole values go out as integers and
//      everything else as the shortest float that parses back to the same decimal string.
impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.fract().is_zero() {
            if let Some(whole) = self.0.to_u64() {
                return serializer.serialize_u64(whole);
            }
        }

        let value: f64 = self.0.to_string().parse().map_err(ser::Error::custom)?;
        serializer.serialize_f64(value)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;

        if !value.is_finite() {
            return Err(de::Error::custom("Amount error: Value is not a finite number"));
        }

        //NOTE: The shortest display form of a double parses back to the same double, so blobs written
        //      elsewhere with more digits than user input allows are still read as-is.
        let decimal = Decimal::from_str(&value.to_string()).map_err(de::Error::custom)?;

        Amount::new(decimal).map_err(de::Error::custom)
    }
}
