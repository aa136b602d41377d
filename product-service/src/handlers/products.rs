//! Product resource handlers.
//!
//! Every handler follows the same protocol: run the endpoint's declared
//! rules through the gate, parse the now well-formed input, look up the
//! record when an id is involved (404 before any mutation), act, and shape
//! the envelope.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::error::Error;
use crate::models::{AvailabilityUpdate, NewProduct, UpdateProduct};
use crate::repository::ProductRepository;
use crate::responses::{Created, Data, FieldError, Location};
use crate::state::AppState;
use crate::validation::{gate, Check, RawInput, Rule};

const NOT_FOUND_MSG: &str = "Producto no encontrado";
const DELETED_MSG: &str = "Producto eliminado";

fn id_rules() -> Vec<Rule> {
    vec![
        Rule::param("id", Check::Integer, "ID no valido"),
        Rule::param("id", Check::Positive, "ID no valido"),
    ]
}

fn create_rules() -> Vec<Rule> {
    vec![
        Rule::body("name", Check::Text, "El nombre debe ser un texto"),
        Rule::body("name", Check::NotEmpty, "El nombre es obligatorio"),
        Rule::body("price", Check::Numeric, "El precio debe ser un valor numérico"),
        Rule::body("price", Check::NotEmpty, "El precio es obligatorio"),
        Rule::body("price", Check::Positive, "El precio no es valido"),
    ]
}

fn replace_rules() -> Vec<Rule> {
    let mut rules = id_rules();
    rules.extend([
        Rule::body("name", Check::Text, "El nombre debe ser un texto"),
        Rule::body("name", Check::NotEmpty, "El nombre es obligatorio"),
        Rule::body("price", Check::Numeric, "El precio debe ser un valor número"),
        Rule::body("price", Check::NotEmpty, "El precio es obligatorio"),
        Rule::body("price", Check::Positive, "El precio no es valido"),
        Rule::body(
            "availability",
            Check::Boolean,
            "Valor para disponibildiad no válido",
        ),
    ]);
    rules
}

fn toggle_rules() -> Vec<Rule> {
    let mut rules = id_rules();
    rules.push(Rule::body(
        "availability",
        Check::optional(Check::Boolean),
        "Valor para disponibildiad no válido",
    ));
    rules
}

/// GET /products
pub async fn list_products<R: ProductRepository>(
    State(state): State<AppState<R>>,
) -> Result<Response, Error> {
    let products = state.repository().find_all().await?;
    Ok(Data::new(products).into_response())
}

/// GET /product/{id}
pub async fn get_product<R: ProductRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Response, Error> {
    let input = RawInput::new().with_param("id", id);
    gate(&id_rules(), &input)?;
    let id = parse_id(&input)?;

    let Some(product) = state.repository().find_by_id(id).await? else {
        return Err(not_found(id));
    };

    Ok(Data::new(product).into_response())
}

/// POST /product
pub async fn create_product<R: ProductRepository>(
    State(state): State<AppState<R>>,
    body: Option<Json<Value>>,
) -> Result<Response, Error> {
    let input = RawInput::new().with_body(body.map(|Json(v)| v));
    gate(&create_rules(), &input)?;

    let data = NewProduct {
        name: require_text(&input, "name")?,
        price: require_number(&input, "price")?,
        // Unspecified availability defaults to true at creation.
        availability: input
            .body_field("availability")
            .and_then(Value::as_bool)
            .unwrap_or(true),
    };

    let product = state.repository().create(data).await?;
    tracing::debug!(id = product.id, "product created");

    Ok(Created::new(product).into_response())
}

/// PUT /product/{id}
pub async fn update_product<R: ProductRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Response, Error> {
    let input = RawInput::new()
        .with_param("id", id)
        .with_body(body.map(|Json(v)| v));
    gate(&replace_rules(), &input)?;
    let id = parse_id(&input)?;

    if state.repository().find_by_id(id).await?.is_none() {
        return Err(not_found(id));
    }

    let data = UpdateProduct {
        name: require_text(&input, "name")?,
        price: require_number(&input, "price")?,
        availability: require_bool(&input, "availability")?,
    };

    // The row can vanish between lookup and act; that race resolves to the
    // same 404 as a failed lookup.
    let Some(product) = state.repository().update(id, data).await? else {
        return Err(not_found(id));
    };

    Ok(Data::new(product).into_response())
}

/// PATCH /product/{id}
///
/// An explicit boolean body sets `availability` to that exact value; an
/// absent field flips the current one. Nothing else changes.
pub async fn update_availability<R: ProductRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Response, Error> {
    let input = RawInput::new()
        .with_param("id", id)
        .with_body(body.map(|Json(v)| v));
    gate(&toggle_rules(), &input)?;
    let id = parse_id(&input)?;

    let Some(current) = state.repository().find_by_id(id).await? else {
        return Err(not_found(id));
    };

    let change = AvailabilityUpdate::from_field(input.body_field("availability"));
    let data = UpdateProduct {
        name: current.name,
        price: current.price,
        availability: change.apply(current.availability),
    };

    let Some(product) = state.repository().update(id, data).await? else {
        return Err(not_found(id));
    };

    Ok(Data::new(product).into_response())
}

/// DELETE /product/{id}
pub async fn delete_product<R: ProductRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Response, Error> {
    let input = RawInput::new().with_param("id", id);
    gate(&id_rules(), &input)?;
    let id = parse_id(&input)?;

    if state.repository().find_by_id(id).await?.is_none() {
        return Err(not_found(id));
    }

    if !state.repository().delete(id).await? {
        return Err(not_found(id));
    }
    tracing::debug!(id, "product deleted");

    Ok(Data::new(DELETED_MSG).into_response())
}

fn not_found(id: i64) -> Error {
    Error::NotFound(FieldError::new(
        "id",
        Location::Params,
        Some(json!(id)),
        NOT_FOUND_MSG,
    ))
}

// The accessors below run only behind the gate, so a miss is a bug in the
// rule declarations, not a client error.

fn parse_id(input: &RawInput) -> Result<i64, Error> {
    input
        .param("id")
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| Error::Internal("id parameter missing after validation".to_string()))
}

fn require_text(input: &RawInput, path: &str) -> Result<String, Error> {
    input
        .body_field(path)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| Error::Internal(format!("{path} missing after validation")))
}

// The numeric check accepts both JSON numbers and numeric strings.
fn require_number(input: &RawInput, path: &str) -> Result<f64, Error> {
    match input.body_field(path) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    }
    .ok_or_else(|| Error::Internal(format!("{path} missing after validation")))
}

fn require_bool(input: &RawInput, path: &str) -> Result<bool, Error> {
    input
        .body_field(path)
        .and_then(Value::as_bool)
        .ok_or_else(|| Error::Internal(format!("{path} missing after validation")))
}
