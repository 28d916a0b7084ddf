//! Customer Repository

use super::{RepoError, RepoResult, reservation};
use shared::models::{Customer, RecordKey, Reservation};
use sqlx::SqlitePool;

const CUSTOMER_SELECT: &str = "SELECT id, first_name, last_name, phone, notes FROM customers";

const NAME_ORDER: &str = "ORDER BY last_name, first_name, id";

/// How many customers the top list shows
pub const TOP_CUSTOMERS_LIMIT: i64 = 10;

/// Every customer, ordered by last name then first name
pub async fn all(pool: &SqlitePool) -> RepoResult<Vec<Customer>> {
    let sql = format!("{CUSTOMER_SELECT} {NAME_ORDER}");
    let rows = sqlx::query_as::<_, Customer>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Customers with the most reservations, busiest first
///
/// Customers without reservations are not listed. Equal counts fall back to
/// id order so the list is stable.
pub async fn top_customers(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<Customer>> {
    let rows = sqlx::query_as::<_, Customer>(
        r#"
        SELECT c.id, c.first_name, c.last_name, c.phone, c.notes
        FROM customers c
        JOIN reservations r ON r.customer_id = c.id
        GROUP BY c.id
        ORDER BY COUNT(r.id) DESC, c.id ASC
        LIMIT ?1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Case-insensitive substring match on "first last"
///
/// A missing or empty term lists everyone. Matching happens in Rust rather
/// than in SQL: SQLite's `lower` only folds ASCII, and `%` / `_` in the term
/// must match literally.
pub async fn search(pool: &SqlitePool, term: Option<&str>) -> RepoResult<Vec<Customer>> {
    let everyone = all(pool).await?;
    let Some(term) = term.filter(|t| !t.is_empty()) else {
        return Ok(everyone);
    };

    let needle = term.to_lowercase();
    Ok(everyone
        .into_iter()
        .filter(|c| {
            format!("{} {}", c.first_name, c.last_name)
                .to_lowercase()
                .contains(&needle)
        })
        .collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Customer>> {
    let sql = format!("{CUSTOMER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Customer>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Exactly one customer, or `NotFound`
pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<Customer> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Customer {id} not found")))
}

/// Reservations of this customer, earliest first
pub async fn reservations(pool: &SqlitePool, customer: &Customer) -> RepoResult<Vec<Reservation>> {
    match customer.id {
        RecordKey::New => Ok(Vec::new()),
        RecordKey::Persisted(id) => reservation::find_for_customer(pool, id).await,
    }
}

/// Insert a new customer (capturing its id) or update a stored one
pub async fn save(pool: &SqlitePool, customer: &mut Customer) -> RepoResult<()> {
    match customer.id {
        RecordKey::New => {
            let result = sqlx::query(
                "INSERT INTO customers (first_name, last_name, phone, notes) VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(&customer.first_name)
            .bind(&customer.last_name)
            .bind(&customer.phone)
            .bind(&customer.notes)
            .execute(pool)
            .await?;
            customer.id = RecordKey::Persisted(result.last_insert_rowid());
        }
        RecordKey::Persisted(id) => {
            let rows = sqlx::query(
                "UPDATE customers SET first_name = ?1, last_name = ?2, phone = ?3, notes = ?4 WHERE id = ?5",
            )
            .bind(&customer.first_name)
            .bind(&customer.last_name)
            .bind(&customer.phone)
            .bind(&customer.notes)
            .bind(id)
            .execute(pool)
            .await?;
            if rows.rows_affected() == 0 {
                return Err(RepoError::NotFound(format!("Customer {id} not found")));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    async fn insert(pool: &SqlitePool, first: &str, last: &str) -> Customer {
        let mut c = Customer::new(first, last, None, None);
        save(pool, &mut c).await.unwrap();
        c
    }

    async fn book(pool: &SqlitePool, customer: &Customer, times: i64) {
        let id = customer.id.id().unwrap();
        for i in 0..times {
            let mut r = Reservation::new(id, 1_700_000_000_000 + i, 2, None);
            reservation::save(pool, &mut r).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_save_new_assigns_id_and_round_trips() {
        let pool = test_pool().await;
        let mut c = Customer::new(
            "Ana",
            "Lee",
            Some("555-1000".into()),
            Some("".into()),
        );
        save(&pool, &mut c).await.unwrap();

        let id = c.id.id().expect("id assigned");
        let loaded = get(&pool, id).await.unwrap();
        assert_eq!(loaded, c);
    }

    #[tokio::test]
    async fn test_save_new_never_reuses_ids() {
        let pool = test_pool().await;
        let a = insert(&pool, "Ana", "Lee").await;
        let b = insert(&pool, "Bo", "Kim").await;
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_save_existing_updates_in_place() {
        let pool = test_pool().await;
        let mut ana = insert(&pool, "Ana", "Lee").await;
        let bo = insert(&pool, "Bo", "Kim").await;
        let id = ana.id;

        ana.first_name = "Anna".into();
        ana.phone = Some("555-2000".into());
        ana.notes = Some("prefers patio".into());
        save(&pool, &mut ana).await.unwrap();

        assert_eq!(ana.id, id);
        let loaded = get(&pool, id.id().unwrap()).await.unwrap();
        assert_eq!(loaded.first_name, "Anna");
        assert_eq!(loaded.phone.as_deref(), Some("555-2000"));
        assert_eq!(loaded.notes.as_deref(), Some("prefers patio"));

        // the other row is untouched
        assert_eq!(get(&pool, bo.id.id().unwrap()).await.unwrap(), bo);
    }

    #[tokio::test]
    async fn test_save_vanished_id_is_not_found() {
        let pool = test_pool().await;
        let mut ghost = Customer::new("No", "Body", None, None);
        ghost.id = RecordKey::Persisted(999);
        let err = save(&pool, &mut ghost).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let pool = test_pool().await;
        let err = get(&pool, 12345).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(msg) if msg == "Customer 12345 not found"));
    }

    #[tokio::test]
    async fn test_all_orders_by_last_then_first_name() {
        let pool = test_pool().await;
        insert(&pool, "Zed", "Adams").await;
        insert(&pool, "Ana", "Lee").await;
        insert(&pool, "Al", "Adams").await;

        let names: Vec<String> = all(&pool)
            .await
            .unwrap()
            .iter()
            .map(Customer::full_name)
            .collect();
        assert_eq!(names, vec!["Al Adams", "Zed Adams", "Ana Lee"]);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_on_full_name() {
        let pool = test_pool().await;
        insert(&pool, "Ana", "Lee").await;
        insert(&pool, "Bo", "Kim").await;
        insert(&pool, "Leena", "Park").await;

        let hits = search(&pool, Some("LEE")).await.unwrap();
        let names: Vec<String> = hits.iter().map(Customer::full_name).collect();
        assert_eq!(names, vec!["Ana Lee", "Leena Park"]);

        // spans the first/last name boundary
        let hits = search(&pool, Some("a l")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].full_name(), "Ana Lee");
    }

    #[tokio::test]
    async fn test_search_without_term_equals_all() {
        let pool = test_pool().await;
        insert(&pool, "Ana", "Lee").await;
        insert(&pool, "Bo", "Kim").await;

        let everyone = all(&pool).await.unwrap();
        assert_eq!(search(&pool, None).await.unwrap(), everyone);
        assert_eq!(search(&pool, Some("")).await.unwrap(), everyone);
    }

    #[tokio::test]
    async fn test_search_no_match_is_empty() {
        let pool = test_pool().await;
        insert(&pool, "Ana", "Lee").await;
        assert!(search(&pool, Some("zzzznotfound")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_case() {
        let pool = test_pool().await;
        insert(&pool, "Émile", "Zola").await;
        insert(&pool, "Jürgen", "Österberg").await;
        insert(&pool, "Ana", "Lee").await;

        let hits = search(&pool, Some("émile")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].full_name(), "Émile Zola");

        let hits = search(&pool, Some("ÖSTER")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Jürgen");
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let pool = test_pool().await;
        insert(&pool, "Ana", "Lee").await;
        assert!(search(&pool, Some("%")).await.unwrap().is_empty());
        assert!(search(&pool, Some("_")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_top_customers_orders_by_reservation_count() {
        let pool = test_pool().await;
        let ana = insert(&pool, "Ana", "Lee").await;
        let bo = insert(&pool, "Bo", "Kim").await;
        let cy = insert(&pool, "Cy", "Ng").await;
        let _nobody = insert(&pool, "No", "Shows").await;
        book(&pool, &ana, 1).await;
        book(&pool, &bo, 3).await;
        book(&pool, &cy, 1).await;

        let top = top_customers(&pool, TOP_CUSTOMERS_LIMIT).await.unwrap();
        let ids: Vec<RecordKey> = top.iter().map(|c| c.id).collect();
        // Bo first, then the tie broken by id
        assert_eq!(ids, vec![bo.id, ana.id, cy.id]);
    }

    #[tokio::test]
    async fn test_top_customers_respects_limit() {
        let pool = test_pool().await;
        for i in 0..12 {
            let c = insert(&pool, &format!("Guest{i}"), "Regular").await;
            book(&pool, &c, 1).await;
        }
        let top = top_customers(&pool, TOP_CUSTOMERS_LIMIT).await.unwrap();
        assert_eq!(top.len(), 10);
    }

    #[tokio::test]
    async fn test_reservations_of_new_customer_is_empty() {
        let pool = test_pool().await;
        let c = Customer::new("Ana", "Lee", None, None);
        assert!(reservations(&pool, &c).await.unwrap().is_empty());
    }
}
