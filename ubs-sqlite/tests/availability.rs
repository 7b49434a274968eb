mod common;

use common::{TestApp, booking};
use rstest::rstest;
use ubs_core::{
    engine::{self, Rejection, rules},
    models::{BookingQuery, DateTime, MILLIS_PER_DAY},
    ports::{Application, BookingRepository},
    service::{self, ExtendFailure},
};
use ubs_sqlite::types::BookingId;

#[tokio::test]
async fn test_checkout_is_derived_on_create_and_extend() -> anyhow::Result<()> {
    let app = TestApp::open().await?;
    let db = app.database();

    let created = service::create_booking(db, booking("GuestA", "1", "2024-03-01", 5))
        .await?
        .expect("booking should be accepted");
    assert_eq!(
        created.stay.checkout_date().unix_millis() - created.stay.check_in_date().unix_millis(),
        5 * MILLIS_PER_DAY
    );

    let extended = service::extend_booking(db, created.id, 3)
        .await?
        .expect("extension should be accepted");
    assert_eq!(extended.stay.number_of_nights(), 8);
    assert_eq!(extended.stay.check_in_date(), created.stay.check_in_date());
    assert_eq!(
        extended.stay.checkout_date(),
        created.stay.check_in_date().add_days(8)
    );
    assert_eq!(db.get_booking(created.id).await?, Some(extended));
    Ok(())
}

#[rstest]
#[case("1969-12-31T23:59:59.9995Z")]
#[case("2024-03-01T00:00:00.0005Z")]
#[tokio::test]
async fn test_sub_millisecond_check_in_is_stored_as_approved(
    #[case] check_in: &str,
) -> anyhow::Result<()> {
    let app = TestApp::open().await?;
    let db = app.database();

    let candidate = booking("GuestA", "1", check_in, 1);
    let created = service::create_booking(db, candidate.clone())
        .await?
        .expect("booking should be accepted");
    assert_eq!(created.stay, candidate.stay);
    assert_eq!(db.get_booking(created.id).await?, Some(created));
    Ok(())
}

#[tokio::test]
async fn test_same_guest_same_unit() -> anyhow::Result<()> {
    let app = TestApp::open().await?;
    let db = app.database();

    service::create_booking(db, booking("GuestA", "1", "2024-03-01", 5))
        .await?
        .expect("first booking should be accepted");

    // Dates do not matter for this rule
    let outcome = service::create_booking(db, booking("GuestA", "1", "2025-01-01", 1)).await?;
    assert_eq!(outcome, Err(Rejection::SameUnit));
    Ok(())
}

#[tokio::test]
async fn test_same_guest_other_unit() -> anyhow::Result<()> {
    let app = TestApp::open().await?;
    let db = app.database();

    service::create_booking(db, booking("GuestA", "1", "2024-03-01", 5))
        .await?
        .expect("first booking should be accepted");

    let outcome = service::create_booking(db, booking("GuestA", "2", "2025-01-01", 1)).await?;
    assert_eq!(outcome, Err(Rejection::MultipleUnits));
    Ok(())
}

#[rstest]
#[case("2024-02-20", None)]
#[case("2024-02-29T23:59:59Z", None)]
#[case("2024-03-01", Some(Rejection::UnitOccupied))]
#[case("2024-03-02", Some(Rejection::UnitOccupied))]
#[case("2024-03-06", Some(Rejection::UnitOccupied))]
#[case("2024-03-06T00:00:00.001Z", None)]
#[case("2024-04-01", None)]
#[tokio::test]
async fn test_unit_occupied_at_check_in(
    #[case] check_in: &str,
    #[case] expected: Option<Rejection>,
) -> anyhow::Result<()> {
    let app = TestApp::open().await?;
    let db = app.database();

    service::create_booking(db, booking("GuestA", "1", "2024-03-01", 5))
        .await?
        .expect("first booking should be accepted");

    let outcome = service::create_booking(db, booking("GuestB", "1", check_in, 2)).await?;
    assert_eq!(outcome.err(), expected);
    Ok(())
}

#[rstest]
#[case("GuestA", "1", "2024-03-02")]
#[case("GuestA", "3", "2024-03-02")]
#[case("GuestC", "1", "2024-03-06")]
#[case("GuestC", "1", "2024-03-11")]
#[case("GuestC", "2", "2024-03-02")]
#[case("GuestC", "3", "2024-03-02")]
#[tokio::test]
async fn test_narrow_queries_agree_with_full_snapshot(
    #[case] guest_name: &str,
    #[case] unit_id: &str,
    #[case] check_in: &str,
) -> anyhow::Result<()> {
    let app = TestApp::open().await?;
    let db = app.database();

    for (guest, unit, date) in [("GuestA", "1", "2024-03-01"), ("GuestB", "2", "2024-03-01")] {
        service::create_booking(db, booking(guest, unit, date, 5))
            .await?
            .expect("seed booking should be accepted");
    }

    let candidate = booking(guest_name, unit_id, check_in, 2);
    let everything = db.query_bookings(BookingQuery::default()).await?;
    assert_eq!(
        engine::can_create(db, &candidate).await?,
        rules::can_create(&candidate, &everything)
    );
    Ok(())
}

#[tokio::test]
async fn test_rejected_create_writes_nothing() -> anyhow::Result<()> {
    let app = TestApp::open().await?;
    let db = app.database();

    service::create_booking(db, booking("GuestA", "1", "2024-03-01", 5))
        .await?
        .expect("first booking should be accepted");
    let before = db.query_bookings(BookingQuery::default()).await?;

    let outcome = service::create_booking(db, booking("GuestB", "1", "2024-03-02", 1)).await?;
    assert!(outcome.is_err());

    let after = db.query_bookings(BookingQuery::default()).await?;
    assert_eq!(before, after);
    Ok(())
}

#[rstest]
#[case(2, None)]
#[case(4, None)]
#[case(5, Some(Rejection::CheckoutOccupied))]
#[case(7, Some(Rejection::CheckoutOccupied))]
#[case(10, None)]
#[tokio::test]
async fn test_extend_into_next_booking(
    #[case] nights: u32,
    #[case] expected: Option<Rejection>,
) -> anyhow::Result<()> {
    let app = TestApp::open().await?;
    let db = app.database();

    let a = service::create_booking(db, booking("GuestA", "1", "2024-03-01", 5))
        .await?
        .expect("first booking should be accepted");
    service::create_booking(db, booking("GuestB", "1", "2024-03-11", 5))
        .await?
        .expect("second booking should be accepted");

    let outcome = service::extend_booking(db, a.id, nights).await?;
    match expected {
        None => {
            let extended = outcome.expect("extension should be accepted");
            assert_eq!(extended.stay.number_of_nights(), 5 + nights);
        }
        Some(rejection) => {
            assert_eq!(outcome, Err(ExtendFailure::Rejected(rejection)));
            // and the stored booking is untouched
            assert_eq!(db.get_booking(a.id).await?, Some(a));
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_extend_ignores_own_booking() -> anyhow::Result<()> {
    let app = TestApp::open().await?;
    let db = app.database();

    let a = service::create_booking(db, booking("GuestA", "1", "2024-03-01", 5))
        .await?
        .expect("booking should be accepted");

    let extended = service::extend_booking(db, a.id, 1)
        .await?
        .expect("extension should be accepted");
    assert_eq!(
        extended.stay.checkout_date(),
        "2024-03-07".parse::<DateTime>()?
    );
    Ok(())
}

#[tokio::test]
async fn test_extend_missing_booking() -> anyhow::Result<()> {
    let app = TestApp::open().await?;
    let db = app.database();

    let outcome = service::extend_booking(db, BookingId(7), 2).await?;
    assert_eq!(outcome, Err(ExtendFailure::NotFound));
    Ok(())
}
