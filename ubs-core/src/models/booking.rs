use super::Stay;

/// A stored booking of one unit by one guest.
///
/// The identifier type is chosen by the repository implementation. Apart from
/// the stay, which is replaced wholesale when a booking is extended, a
/// booking never changes once created.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Booking<BookingId> {
    /// Assigned by the repository on creation
    pub id: BookingId,
    /// The name of the guest; not unique across bookings
    pub guest_name: String,
    /// The rental unit being booked
    #[cfg_attr(feature = "serde", serde(rename = "unitID"))]
    pub unit_id: String,
    /// When the guest arrives, for how long, and when they leave
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub stay: Stay,
}

/// A booking that has not been written yet: the candidate of a create request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct NewBooking {
    /// The name of the guest
    pub guest_name: String,
    /// The rental unit being booked
    #[cfg_attr(feature = "serde", serde(rename = "unitID"))]
    pub unit_id: String,
    /// The requested stay
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub stay: Stay,
}

impl NewBooking {
    /// Attach the repository-assigned identifier.
    pub fn with_id<BookingId>(self, id: BookingId) -> Booking<BookingId> {
        Booking {
            id,
            guest_name: self.guest_name,
            unit_id: self.unit_id,
            stay: self.stay,
        }
    }
}

impl<BookingId> Booking<BookingId> {
    /// The same booking with a different stay.
    pub fn with_stay(self, stay: Stay) -> Self {
        Self { stay, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let booking = NewBooking {
            guest_name: "GuestA".to_string(),
            unit_id: "1".to_string(),
            stay: Stay::new("2024-03-01".parse().unwrap(), 5).unwrap(),
        }
        .with_id(7i64);

        assert_eq!(
            serde_json::to_value(&booking).unwrap(),
            serde_json::json!({
                "id": 7,
                "guestName": "GuestA",
                "unitID": "1",
                "checkInDate": "2024-03-01T00:00:00Z",
                "numberOfNights": 5,
                "checkoutDate": "2024-03-06T00:00:00Z",
            })
        );
    }
}
