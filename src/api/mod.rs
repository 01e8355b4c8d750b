use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::core::{
    DEFAULT_TIER_ID, PayoutMode, SimulationResult, Tier, compute_quotas,
    parse_contribution, simulate, tiers,
};
use crate::error::{RequestError, parse_tier_id, tier_by_id};
use crate::report::{
    DISCLAIMER, EMPTY_PROMPT, SummaryRow, advisory, minimum_hint, summary_rows,
    tier_option_label,
};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiPayoutMode {
    #[serde(rename = "mensal", alias = "monthly", alias = "Mensal")]
    Monthly,
    #[serde(alias = "lump-sum", alias = "lumpSum", alias = "Bullet")]
    Bullet,
}

impl From<ApiPayoutMode> for PayoutMode {
    fn from(value: ApiPayoutMode) -> Self {
        match value {
            ApiPayoutMode::Monthly => PayoutMode::Monthly,
            ApiPayoutMode::Bullet => PayoutMode::Bullet,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
enum ResponseMode {
    Mensal,
    Bullet,
}

impl From<PayoutMode> for ResponseMode {
    fn from(value: PayoutMode) -> Self {
        match value {
            PayoutMode::Monthly => ResponseMode::Mensal,
            PayoutMode::Bullet => ResponseMode::Bullet,
        }
    }
}

/// Form fields arrive as strings from the page but as numbers from scripts.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Number(f64),
    Text(String),
}

impl TextOrNumber {
    fn into_text(self) -> String {
        match self {
            TextOrNumber::Number(n) => n.to_string(),
            TextOrNumber::Text(s) => s,
        }
    }

    /// Numbers are already amounts; only typed text goes through the
    /// locale-aware parser.
    fn into_contribution(self) -> f64 {
        match self {
            TextOrNumber::Number(n) => n,
            TextOrNumber::Text(s) => parse_contribution(&s),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SimulatePayload {
    #[serde(alias = "lote")]
    lote_id: Option<TextOrNumber>,
    #[serde(alias = "contribution")]
    valor: Option<TextOrNumber>,
    #[serde(alias = "mode")]
    modo: Option<ApiPayoutMode>,
}

#[derive(Debug)]
struct ApiRequest {
    tier: &'static Tier,
    contribution: f64,
    mode: PayoutMode,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierResponse {
    #[serde(flatten)]
    tier: Tier,
    label: String,
    minimum_hint: String,
}

impl From<&Tier> for TierResponse {
    fn from(tier: &Tier) -> Self {
        Self {
            tier: *tier,
            label: tier_option_label(tier),
            minimum_hint: minimum_hint(tier),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogResponse {
    default_lote_id: u32,
    lotes: Vec<TierResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultResponse {
    monthly_yield: f64,
    total_yield: f64,
    final_value: f64,
}

impl From<&SimulationResult> for ResultResponse {
    fn from(result: &SimulationResult) -> Self {
        Self {
            monthly_yield: result.monthly_yield,
            total_yield: result.total_yield,
            final_value: result.final_value,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateResponse {
    lote: TierResponse,
    modo: ResponseMode,
    contribution: f64,
    quota_count: u64,
    principal: f64,
    remainder: f64,
    result: Option<ResultResponse>,
    summary: Vec<SummaryRow>,
    advisory: Option<String>,
    prompt: Option<&'static str>,
    disclaimer: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "simulator listening");
    info!("local access: http://127.0.0.1:{port}/");

    axum::serve(listener, router()).await
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route("/api/lotes", get(lotes_handler))
        .route(
            "/api/simulate",
            get(simulate_get_handler).post(simulate_post_handler),
        )
        .fallback(not_found_handler)
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn lotes_handler() -> Response {
    json_response(StatusCode::OK, catalog_response())
}

async fn simulate_get_handler(Query(payload): Query<SimulatePayload>) -> Response {
    simulate_handler_impl(payload).await
}

async fn simulate_post_handler(Json(payload): Json<SimulatePayload>) -> Response {
    simulate_handler_impl(payload).await
}

async fn simulate_handler_impl(payload: SimulatePayload) -> Response {
    let request = match api_request_from_payload(payload) {
        Ok(request) => request,
        Err(err) => {
            warn!(error = %err, "rejected simulate request");
            return error_response(StatusCode::BAD_REQUEST, &err.to_string());
        }
    };

    let response = build_simulate_response(request.tier, request.contribution, request.mode);
    debug!(
        lote = request.tier.id,
        quotas = response.quota_count,
        has_result = response.result.is_some(),
        "simulated"
    );
    json_response(StatusCode::OK, response)
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> Result<ApiRequest, String> {
    let payload = serde_json::from_str::<SimulatePayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    api_request_from_payload(payload).map_err(|e| e.to_string())
}

fn api_request_from_payload(payload: SimulatePayload) -> Result<ApiRequest, RequestError> {
    let tier = match payload.lote_id {
        Some(raw) => parse_tier_id(&raw.into_text())?,
        None => tier_by_id(DEFAULT_TIER_ID)?,
    };

    Ok(ApiRequest {
        tier,
        contribution: payload
            .valor
            .map(TextOrNumber::into_contribution)
            .unwrap_or_default(),
        mode: payload.modo.map(PayoutMode::from).unwrap_or_default(),
    })
}

fn catalog_response() -> CatalogResponse {
    CatalogResponse {
        default_lote_id: DEFAULT_TIER_ID,
        lotes: tiers().iter().map(TierResponse::from).collect(),
    }
}

pub fn build_simulate_response(
    tier: &Tier,
    contribution: f64,
    mode: PayoutMode,
) -> SimulateResponse {
    let quotas = compute_quotas(contribution, tier);
    let result = simulate(&quotas, tier, mode);

    SimulateResponse {
        lote: TierResponse::from(tier),
        modo: mode.into(),
        contribution,
        quota_count: quotas.quota_count,
        principal: quotas.principal,
        remainder: quotas.remainder,
        result: result.as_ref().map(ResultResponse::from),
        summary: result
            .as_ref()
            .map(|r| summary_rows(tier, r))
            .unwrap_or_default(),
        advisory: advisory(tier, &quotas),
        prompt: result.is_none().then_some(EMPTY_PROMPT),
        disclaimer: DISCLAIMER,
    }
}
