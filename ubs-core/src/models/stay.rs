use super::DateTime;

/// The occupied period of a booking: a check-in instant, a number of nights,
/// and the checkout instant derived from the two.
///
/// The checkout date is never supplied from outside. It is computed by
/// [`Stay::new`] and recomputed by [`Stay::extend`], and since the repository
/// ports only accept a `Stay` on write, every stored booking satisfies
/// `checkout_date == check_in_date + number_of_nights` days.
///
/// The nights occupied form the half-open interval
/// `[check_in_date, checkout_date)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawStay", into = "RawStay")
)]
pub struct Stay {
    check_in_date: DateTime,
    number_of_nights: u32,
    checkout_date: DateTime,
}

impl Stay {
    /// Derive a stay from its check-in date and number of nights.
    pub fn new(check_in_date: DateTime, number_of_nights: u32) -> Result<Self, StayError> {
        if number_of_nights == 0 {
            return Err(StayError::NoNights);
        }

        let checkout_date = check_in_date
            .checked_add_days(i64::from(number_of_nights))
            .ok_or(StayError::TooManyNights)?;

        Ok(Self {
            check_in_date,
            number_of_nights,
            checkout_date,
        })
    }

    /// The same stay, lengthened by `nights`, with its checkout rederived.
    pub fn extend(&self, nights: u32) -> Result<Self, StayError> {
        if nights == 0 {
            return Err(StayError::NoNights);
        }
        let total = self
            .number_of_nights
            .checked_add(nights)
            .ok_or(StayError::TooManyNights)?;
        Self::new(self.check_in_date, total)
    }

    /// The first occupied night
    pub fn check_in_date(&self) -> DateTime {
        self.check_in_date
    }

    /// The number of occupied nights
    pub fn number_of_nights(&self) -> u32 {
        self.number_of_nights
    }

    /// The exclusive end of the stay
    pub fn checkout_date(&self) -> DateTime {
        self.checkout_date
    }
}

/// The ways a stay may be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StayError {
    /// A stay must last at least one night
    #[error("a stay must last at least one night")]
    NoNights,
    /// The checkout date would fall outside the supported range of dates
    #[error("too many nights")]
    TooManyNights,
}

// The wire format of a stay. A checkout date in incoming data is ignored: it
// is always rederived from the check-in date and the number of nights.

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
struct RawStay {
    check_in_date: DateTime,
    number_of_nights: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    checkout_date: Option<DateTime>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawStay> for Stay {
    type Error = StayError;

    fn try_from(value: RawStay) -> Result<Self, Self::Error> {
        Self::new(value.check_in_date, value.number_of_nights)
    }
}

#[cfg(feature = "serde")]
impl From<Stay> for RawStay {
    fn from(value: Stay) -> Self {
        Self {
            check_in_date: value.check_in_date,
            number_of_nights: value.number_of_nights,
            checkout_date: Some(value.checkout_date),
        }
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Stay {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> std::borrow::Cow<'static, str> {
        "Stay".into()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        RawStay::json_schema(generator)
    }
}
