mod common;

use common::{TestApp, booking};
use ubs_core::{
    models::{BookingQuery, DateTime, LowerBound, MILLIS_PER_DAY},
    ports::{Application, BookingRepository},
};
use ubs_sqlite::types::BookingId;

#[tokio::test]
async fn test_create_and_get() -> anyhow::Result<()> {
    let app = TestApp::open().await?;
    let db = app.database();

    let created = db
        .create_booking(booking("GuestA", "1", "2024-03-01", 5))
        .await?;
    assert_eq!(created.guest_name, "GuestA");
    assert_eq!(created.unit_id, "1");
    assert_eq!(created.stay.number_of_nights(), 5);
    assert_eq!(created.stay.checkout_date(), "2024-03-06".parse::<DateTime>()?);

    let fetched = db.get_booking(created.id).await?;
    assert_eq!(fetched, Some(created));

    assert_eq!(db.get_booking(BookingId(9999)).await?, None);
    Ok(())
}

#[tokio::test]
async fn test_stored_checkout_column_is_derived() -> anyhow::Result<()> {
    let app = TestApp::open().await?;
    let db = app.database();

    let created = db
        .create_booking(booking("GuestA", "1", "2024-03-01T15:00:00Z", 3))
        .await?;
    let extended = created.stay.extend(4)?;
    db.update_stay(created.id, extended).await?;

    let (check_in, nights, checkout): (i64, i64, i64) = sqlx::query_as(
        "select check_in_date, number_of_nights, checkout_date from booking where id = $1",
    )
    .bind(created.id)
    .fetch_one(&db.reader)
    .await?;
    assert_eq!(nights, 7);
    assert_eq!(checkout, check_in + nights * MILLIS_PER_DAY);
    Ok(())
}

#[tokio::test]
async fn test_inconsistent_rows_are_refused() -> anyhow::Result<()> {
    let app = TestApp::open().await?;
    let db = app.database();

    let result = sqlx::query(
        "insert into booking (guest_name, unit_id, check_in_date, number_of_nights, checkout_date) values ('GuestA', '1', 0, 2, 0)",
    )
    .execute(&db.writer)
    .await;
    assert!(result.is_err());

    let result = sqlx::query(
        "insert into booking (guest_name, unit_id, check_in_date, number_of_nights, checkout_date) values ('GuestA', '1', 0, 0, 0)",
    )
    .execute(&db.writer)
    .await;
    assert!(result.is_err());
    Ok(())
}

#[tokio::test]
async fn test_guest_and_unit_are_unique() -> anyhow::Result<()> {
    let app = TestApp::open().await?;
    let db = app.database();

    db.create_booking(booking("GuestA", "1", "2024-03-01", 1))
        .await?;
    let duplicate = db
        .create_booking(booking("GuestA", "1", "2024-06-01", 1))
        .await;
    assert!(duplicate.is_err());
    Ok(())
}

#[tokio::test]
async fn test_update_missing_booking() -> anyhow::Result<()> {
    let app = TestApp::open().await?;
    let db = app.database();

    let stay = booking("GuestA", "1", "2024-03-01", 1).stay;
    assert_eq!(db.update_stay(BookingId(42), stay).await?, None);
    Ok(())
}

#[tokio::test]
async fn test_query_predicates() -> anyhow::Result<()> {
    let app = TestApp::open().await?;
    let db = app.database();

    // unit 1: [03-01, 03-06), unit 1: [03-10, 03-12), unit 2: [03-01, 03-03)
    let a = db
        .create_booking(booking("GuestA", "1", "2024-03-01", 5))
        .await?;
    let b = db
        .create_booking(booking("GuestB", "1", "2024-03-10", 2))
        .await?;
    let c = db
        .create_booking(booking("GuestC", "2", "2024-03-01", 2))
        .await?;

    let everything = db.query_bookings(BookingQuery::default()).await?;
    assert_eq!(everything, vec![a.clone(), b.clone(), c.clone()]);

    let by_guest = db
        .query_bookings(BookingQuery {
            guest_name: Some("GuestB".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_guest, vec![b.clone()]);

    let by_unit = db
        .query_bookings(BookingQuery {
            unit_id: Some("1".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_unit, vec![a.clone(), b.clone()]);

    let at = "2024-03-06".parse::<DateTime>()?;
    let inclusive = db
        .query_bookings(BookingQuery {
            unit_id: Some("1".to_string()),
            check_in_until: Some(at),
            checkout_from: Some(LowerBound::Inclusive(at)),
            ..Default::default()
        })
        .await?;
    assert_eq!(inclusive, vec![a.clone()]);

    let exclusive = db
        .query_bookings(BookingQuery {
            unit_id: Some("1".to_string()),
            check_in_until: Some(at),
            checkout_from: Some(LowerBound::Exclusive(at)),
            ..Default::default()
        })
        .await?;
    assert!(exclusive.is_empty());

    let others = db
        .query_bookings(BookingQuery {
            unit_id: Some("1".to_string()),
            exclude_id: Some(a.id),
            ..Default::default()
        })
        .await?;
    assert_eq!(others, vec![b]);
    Ok(())
}

#[tokio::test]
async fn test_clear_bookings() -> anyhow::Result<()> {
    let app = TestApp::open().await?;
    let db = app.database();

    db.create_booking(booking("GuestA", "1", "2024-03-01", 5))
        .await?;
    db.create_booking(booking("GuestB", "2", "2024-03-01", 5))
        .await?;

    assert_eq!(db.clear_bookings().await?, 2);
    assert!(db.query_bookings(BookingQuery::default()).await?.is_empty());
    assert_eq!(db.clear_bookings().await?, 0);
    Ok(())
}
