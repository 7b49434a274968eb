use crate::{
    Db,
    types::{BOOKING_COLUMNS, BookingRow, StayColumns},
};
use sqlx::{QueryBuilder, Sqlite};
use ubs_core::{
    models::{Booking, BookingQuery, LowerBound, NewBooking, Stay},
    ports::BookingRepository,
};

impl BookingRepository for Db {
    async fn create_booking(
        &self,
        booking: NewBooking,
    ) -> Result<Booking<Self::BookingId>, Self::Error> {
        let stay = StayColumns::from(booking.stay);
        let row = sqlx::query_as::<_, BookingRow>(&format!(
            r#"
            insert into
                booking (guest_name, unit_id, check_in_date, number_of_nights, checkout_date)
            values
                ($1, $2, $3, $4, $5)
            returning
                {BOOKING_COLUMNS}
            "#
        ))
        .bind(booking.guest_name)
        .bind(booking.unit_id)
        .bind(stay.check_in_date)
        .bind(stay.number_of_nights)
        .bind(stay.checkout_date)
        .fetch_one(&self.writer)
        .await?;

        row.try_into()
    }

    async fn update_stay(
        &self,
        booking_id: Self::BookingId,
        stay: Stay,
    ) -> Result<Option<Booking<Self::BookingId>>, Self::Error> {
        let stay = StayColumns::from(stay);
        let row = sqlx::query_as::<_, BookingRow>(&format!(
            r#"
            update
                booking
            set
                check_in_date = $1,
                number_of_nights = $2,
                checkout_date = $3
            where
                id = $4
            returning
                {BOOKING_COLUMNS}
            "#
        ))
        .bind(stay.check_in_date)
        .bind(stay.number_of_nights)
        .bind(stay.checkout_date)
        .bind(booking_id)
        .fetch_optional(&self.writer)
        .await?;

        row.map(Booking::try_from).transpose()
    }

    async fn get_booking(
        &self,
        booking_id: Self::BookingId,
    ) -> Result<Option<Booking<Self::BookingId>>, Self::Error> {
        let row = sqlx::query_as::<_, BookingRow>(&format!(
            "select {BOOKING_COLUMNS} from booking where id = $1"
        ))
        .bind(booking_id)
        .fetch_optional(&self.reader)
        .await?;

        row.map(Booking::try_from).transpose()
    }

    async fn query_bookings(
        &self,
        query: BookingQuery<Self::BookingId>,
    ) -> Result<Vec<Booking<Self::BookingId>>, Self::Error> {
        // Every predicate is optional, so start from one that always holds
        let mut query_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("select {BOOKING_COLUMNS} from booking where 1 = 1"));

        if let Some(guest_name) = query.guest_name {
            query_builder.push(" and guest_name = ").push_bind(guest_name);
        }
        if let Some(unit_id) = query.unit_id {
            query_builder.push(" and unit_id = ").push_bind(unit_id);
        }
        if let Some(until) = query.check_in_until {
            query_builder
                .push(" and check_in_date <= ")
                .push_bind(until.unix_millis());
        }
        match query.checkout_from {
            Some(LowerBound::Inclusive(from)) => {
                query_builder
                    .push(" and checkout_date >= ")
                    .push_bind(from.unix_millis());
            }
            Some(LowerBound::Exclusive(from)) => {
                query_builder
                    .push(" and checkout_date > ")
                    .push_bind(from.unix_millis());
            }
            None => {}
        }
        if let Some(exclude_id) = query.exclude_id {
            query_builder.push(" and id != ").push_bind(exclude_id);
        }
        query_builder.push(" order by id");

        query_builder
            .build_query_as::<BookingRow>()
            .fetch_all(&self.reader)
            .await?
            .into_iter()
            .map(Booking::try_from)
            .collect()
    }

    async fn clear_bookings(&self) -> Result<u64, Self::Error> {
        let result = sqlx::query("delete from booking")
            .execute(&self.writer)
            .await?;
        Ok(result.rows_affected())
    }
}
