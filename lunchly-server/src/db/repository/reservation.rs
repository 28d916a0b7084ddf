//! Reservation Repository

use super::{RepoError, RepoResult};
use shared::models::{RecordKey, Reservation};
use sqlx::SqlitePool;

/// All reservations of one customer, ordered by start time then id
pub async fn find_for_customer(pool: &SqlitePool, customer_id: i64) -> RepoResult<Vec<Reservation>> {
    let rows = sqlx::query_as::<_, Reservation>(
        r#"
        SELECT id, customer_id, start_at, num_guests, notes
        FROM reservations
        WHERE customer_id = ?1
        ORDER BY start_at ASC, id ASC
        "#,
    )
    .bind(customer_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Insert a new reservation (capturing its id) or update a stored one
pub async fn save(pool: &SqlitePool, reservation: &mut Reservation) -> RepoResult<()> {
    if reservation.num_guests <= 0 {
        return Err(RepoError::Validation(format!(
            "Number of guests must be positive, got {}",
            reservation.num_guests
        )));
    }

    match reservation.id {
        RecordKey::New => {
            let result = sqlx::query(
                "INSERT INTO reservations (customer_id, start_at, num_guests, notes) VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(reservation.customer_id)
            .bind(reservation.start_at)
            .bind(reservation.num_guests)
            .bind(&reservation.notes)
            .execute(pool)
            .await?;
            reservation.id = RecordKey::Persisted(result.last_insert_rowid());
        }
        RecordKey::Persisted(id) => {
            let rows = sqlx::query(
                "UPDATE reservations SET customer_id = ?1, start_at = ?2, num_guests = ?3, notes = ?4 WHERE id = ?5",
            )
            .bind(reservation.customer_id)
            .bind(reservation.start_at)
            .bind(reservation.num_guests)
            .bind(&reservation.notes)
            .bind(id)
            .execute(pool)
            .await?;
            if rows.rows_affected() == 0 {
                return Err(RepoError::NotFound(format!("Reservation {id} not found")));
            }
        }
    }
    Ok(())
}
