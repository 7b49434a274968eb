pub mod rules;

use crate::{
    models::{Booking, BookingQuery, LowerBound, NewBooking},
    ports::BookingRepository,
};
use tracing::{Level, event};

/// Why a candidate booking or extension was turned down.
///
/// These are ordinary business outcomes rather than faults; the display form
/// of each variant is the human-readable reason reported to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The guest already has a booking for this unit
    #[error("The given guest name cannot book the same unit multiple times")]
    SameUnit,
    /// The guest already has a booking for some unit
    #[error("The same guest cannot be in multiple units at the same time")]
    MultipleUnits,
    /// The requested check-in falls within an existing booking for the unit
    #[error("For the given check-in date, the unit is already occupied")]
    UnitOccupied,
    /// The extended checkout falls within another booking for the unit
    #[error("For the updated checkout date, the unit is already occupied")]
    CheckoutOccupied,
}

/// The verdict of the availability engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The candidate may be committed
    Accept,
    /// The candidate must not be committed, for the given reason
    Reject(Rejection),
}

impl Decision {
    /// Reject with `rejection` if `conflict` holds, accept otherwise.
    pub fn reject_if(conflict: bool, rejection: Rejection) -> Self {
        if conflict {
            Self::Reject(rejection)
        } else {
            Self::Accept
        }
    }

    /// Short-circuit: evaluate `next` only if this decision is an accept.
    pub fn and_then(self, next: impl FnOnce() -> Decision) -> Self {
        match self {
            Self::Accept => next(),
            rejected => rejected,
        }
    }

    /// Turn a rejection into an `Err`.
    pub fn into_result(self) -> Result<(), Rejection> {
        match self {
            Self::Accept => Ok(()),
            Self::Reject(rejection) => Err(rejection),
        }
    }
}

/// Decide whether `candidate` may be created, given the stored bookings.
///
/// The verdict is always that of [`rules::can_create`]. Each rule only needs
/// the rows of one narrow query, so the queries are issued and awaited in rule
/// order, and the composite is evaluated over the rows gathered so far after
/// each one. A rule that is fully decided by the rows already seen rejects
/// before the next query is issued. Nothing is written.
pub async fn can_create<R: BookingRepository>(
    db: &R,
    candidate: &NewBooking,
) -> Result<Decision, R::Error> {
    let check_in = candidate.stay.check_in_date();
    let queries = [
        BookingQuery {
            guest_name: Some(candidate.guest_name.clone()),
            unit_id: Some(candidate.unit_id.clone()),
            ..Default::default()
        },
        BookingQuery {
            guest_name: Some(candidate.guest_name.clone()),
            ..Default::default()
        },
        BookingQuery {
            unit_id: Some(candidate.unit_id.clone()),
            check_in_until: Some(check_in),
            checkout_from: Some(LowerBound::Inclusive(check_in)),
            ..Default::default()
        },
    ];

    let mut seen = Vec::new();
    for query in queries {
        seen.extend(db.query_bookings(query).await?);
        if let rejected @ Decision::Reject(_) = rules::can_create(candidate, &seen) {
            return Ok(logged(rejected));
        }
    }
    Ok(Decision::Accept)
}

/// Decide whether the booking `exclude_id` may take on the stay of
/// `candidate`, given the other stored bookings.
///
/// `candidate` is expected to carry the extended stay already. Nothing is
/// written.
pub async fn can_extend<R: BookingRepository>(
    db: &R,
    candidate: &Booking<R::BookingId>,
    exclude_id: &R::BookingId,
) -> Result<Decision, R::Error> {
    let checkout = candidate.stay.checkout_date();
    let occupying = db
        .query_bookings(BookingQuery {
            unit_id: Some(candidate.unit_id.clone()),
            check_in_until: Some(checkout),
            checkout_from: Some(LowerBound::Exclusive(checkout)),
            exclude_id: Some(exclude_id.clone()),
            ..Default::default()
        })
        .await?;
    Ok(logged(rules::can_extend(candidate, exclude_id, &occupying)))
}

fn logged(decision: Decision) -> Decision {
    if let Decision::Reject(rejection) = decision {
        event!(Level::DEBUG, ?rejection, "availability check rejected");
    }
    decision
}
