//! Customer API Handlers

use axum::{
    Form,
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use serde_json::json;

use super::form::{CustomerForm, ReservationForm};
use crate::core::ServerState;
use crate::db::repository::customer::{self, TOP_CUSTOMERS_LIMIT};
use crate::db::repository::{RepoError, reservation};
use crate::utils::validation::parse_id;
use crate::utils::{AppError, AppResult};
use crate::view::View;
use shared::models::Customer;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub term: Option<String>,
}

/// GET / - 所有顾客
pub async fn list(State(state): State<ServerState>) -> AppResult<Html<String>> {
    let customers = customer::all(&state.pool).await?;
    state.render(View::CustomerList, json!({ "customers": customers }))
}

/// GET /top-10 - 预订次数最多的顾客
pub async fn top(State(state): State<ServerState>) -> AppResult<Html<String>> {
    let customers = customer::top_customers(&state.pool, TOP_CUSTOMERS_LIMIT).await?;
    state.render(
        View::CustomerList,
        json!({
            "customers": customers,
            "top": true,
            "title": "Top 10 Customers",
        }),
    )
}

/// GET /search/?term=xxx - 按姓名搜索
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Html<String>> {
    let term = query.term.unwrap_or_default();
    let customers = customer::search(&state.pool, Some(term.as_str())).await?;

    let context = if customers.is_empty() {
        json!({ "err": { "message": format!("No results found for '{term}'") } })
    } else {
        json!({ "customers": customers })
    };
    state.render(View::CustomerList, context)
}

/// GET /add/ - 新建顾客表单
pub async fn new_form(State(state): State<ServerState>) -> AppResult<Html<String>> {
    state.render(View::CustomerNewForm, json!({}))
}

/// POST /add/ - 新建顾客
pub async fn create(
    State(state): State<ServerState>,
    Form(form): Form<CustomerForm>,
) -> AppResult<Redirect> {
    let mut new_customer = form.into_new_customer()?;
    customer::save(&state.pool, &mut new_customer).await?;

    let id = new_customer
        .id
        .id()
        .ok_or_else(|| AppError::internal("Customer saved without an id"))?;
    tracing::info!(customer_id = id, name = %new_customer.full_name(), "Customer created");

    Ok(Redirect::to(&format!("/{id}/")))
}

/// GET /{id}/ - 顾客详情（含预订）
pub async fn detail(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_id(&raw_id)?;
    let found = load_customer(&state, id).await?;
    let reservations = customer::reservations(&state.pool, &found).await?;

    state.render(
        View::CustomerDetail,
        json!({
            "fullName": found.full_name(),
            "customer": found,
            "reservations": reservations,
        }),
    )
}

/// GET /{id}/edit/ - 编辑表单
pub async fn edit_form(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_id(&raw_id)?;
    let found = load_customer(&state, id).await?;

    state.render(
        View::CustomerEditForm,
        json!({
            "fullName": found.full_name(),
            "customer": found,
        }),
    )
}

/// POST /{id}/edit/ - 更新顾客
pub async fn update(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
    Form(form): Form<CustomerForm>,
) -> AppResult<Redirect> {
    let id = parse_id(&raw_id)?;
    let mut found = load_customer(&state, id).await?;

    form.apply_to(&mut found)?;
    customer::save(&state.pool, &mut found).await?;
    tracing::info!(customer_id = id, "Customer updated");

    Ok(Redirect::to(&format!("/{id}/")))
}

/// POST /{id}/add-reservation/ - 新建预订
pub async fn add_reservation(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
    Form(form): Form<ReservationForm>,
) -> AppResult<Redirect> {
    let id = parse_id(&raw_id)?;
    // 404 before any form error for an unknown customer
    load_customer(&state, id).await?;

    let mut new_reservation = form.into_reservation(id)?;
    reservation::save(&state.pool, &mut new_reservation).await?;
    tracing::info!(
        customer_id = id,
        reservation_id = ?new_reservation.id.id(),
        num_guests = new_reservation.num_guests,
        "Reservation added"
    );

    Ok(Redirect::to(&format!("/{id}/")))
}

/// `customer::get`, with a missing row reported as an unknown customer
async fn load_customer(state: &ServerState, id: i64) -> AppResult<Customer> {
    customer::get(&state.pool, id).await.map_err(|e| match e {
        RepoError::NotFound(_) => AppError::customer_not_found(id),
        other => other.into(),
    })
}
