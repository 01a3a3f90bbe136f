use crate::error::AppError;
use crate::models::UserOrdersQuery;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};
use types::book::BookSnapshot;
use types::order::UserOrder;

/// `GET /api/orders` — the ranked, depth-bounded book snapshot for the
/// configured symbol.
pub async fn get_orders(State(state): State<AppState>) -> Result<Json<BookSnapshot>, AppError> {
    let snapshot = book_reader::snapshot(state.store.as_ref(), &state.config.symbol).await?;
    Ok(Json(snapshot))
}

/// `GET /api/userOrders?userId=<id>` — the user's open orders, hydrated
/// from the order-id index.
pub async fn get_user_orders(
    State(state): State<AppState>,
    Query(query): Query<UserOrdersQuery>,
) -> Result<Json<Vec<UserOrder>>, AppError> {
    let user_id = query
        .user_id
        .ok_or_else(|| AppError::BadRequest("userId query parameter is required".to_string()))?;

    let orders = book_reader::user_orders(state.store.as_ref(), &state.config.symbol, &user_id)
        .await?;
    Ok(Json(orders))
}
