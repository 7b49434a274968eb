//! The availability rules as pure functions over snapshots of bookings.
//!
//! Each rule inspects a candidate against a slice of existing bookings and
//! accepts or rejects it. A rule only looks at the bookings that are relevant
//! to it, so passing a superset (up to every stored booking) never changes the
//! decision. This is what lets the orchestration in [`super`] hand each rule
//! exactly the rows a narrower query returned.

use super::{Decision, Rejection};
use crate::models::{Booking, NewBooking};

/// A guest cannot book the same unit more than once, whatever the dates.
pub fn same_guest_same_unit<Id>(candidate: &NewBooking, existing: &[Booking<Id>]) -> Decision {
    let conflict = existing
        .iter()
        .any(|b| b.guest_name == candidate.guest_name && b.unit_id == candidate.unit_id);
    Decision::reject_if(conflict, Rejection::SameUnit)
}

/// A guest cannot hold bookings in more than one unit.
///
/// This is not scoped by dates: any existing booking for the guest blocks a
/// new one.
pub fn same_guest_any_unit<Id>(candidate: &NewBooking, existing: &[Booking<Id>]) -> Decision {
    let conflict = existing
        .iter()
        .any(|b| b.guest_name == candidate.guest_name);
    Decision::reject_if(conflict, Rejection::MultipleUnits)
}

/// The candidate's check-in instant cannot fall inside an existing booking for
/// the same unit.
///
/// Only the check-in instant is compared, against the closed range
/// `[check_in_date, checkout_date]` of each existing booking.
pub fn unit_free_at_check_in<Id>(candidate: &NewBooking, existing: &[Booking<Id>]) -> Decision {
    let check_in = candidate.stay.check_in_date();
    let conflict = existing.iter().any(|b| {
        b.unit_id == candidate.unit_id
            && b.stay.check_in_date() <= check_in
            && check_in <= b.stay.checkout_date()
    });
    Decision::reject_if(conflict, Rejection::UnitOccupied)
}

/// Decide whether a new booking may be created.
///
/// The rules are evaluated in a fixed order and the first failure is
/// reported, so a guest rebooking the same unit always hears about that
/// rather than about the unit being occupied.
pub fn can_create<Id>(candidate: &NewBooking, existing: &[Booking<Id>]) -> Decision {
    same_guest_same_unit(candidate, existing)
        .and_then(|| same_guest_any_unit(candidate, existing))
        .and_then(|| unit_free_at_check_in(candidate, existing))
}

/// Decide whether a booking may take on the (already extended) stay of
/// `candidate`.
///
/// The new checkout instant cannot fall inside any other booking for the same
/// unit, i.e. `check_in_date <= checkout < other_checkout`. The guest rules are
/// not consulted again, as an extension only moves the checkout date of a
/// booking that was already accepted.
pub fn can_extend<Id: PartialEq>(
    candidate: &Booking<Id>,
    exclude_id: &Id,
    existing: &[Booking<Id>],
) -> Decision {
    let checkout = candidate.stay.checkout_date();
    let conflict = existing.iter().any(|b| {
        &b.id != exclude_id
            && b.unit_id == candidate.unit_id
            && b.stay.check_in_date() <= checkout
            && checkout < b.stay.checkout_date()
    });
    Decision::reject_if(conflict, Rejection::CheckoutOccupied)
}
