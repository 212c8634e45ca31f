//! HTTP routes and handlers.

use crate::domain::{InboundSms, MessagingResponse, SmsOutcome, TWIML_CONTENT_TYPE};
use crate::middleware::{GatewayMetrics, MetricsSnapshot, TimeoutLayer, TracingLayer};
use axum::{
    extract::{rejection::FormRejection, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use rw_01_wheel_codec::WheelCodecApi;
use rw_telemetry::component_span;
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{debug, info, warn};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub wheel: Arc<dyn WheelCodecApi>,
    pub metrics: Arc<GatewayMetrics>,
}

impl AppState {
    pub fn new(wheel: Arc<dyn WheelCodecApi>) -> Self {
        Self {
            wheel,
            metrics: Arc::new(GatewayMetrics::new()),
        }
    }
}

/// Build the gateway router with its middleware.
///
/// Each layer goes through `Router::layer` on its own so the body limit's
/// response type is mapped back before the tracing and timeout layers see it.
pub fn build_router(state: AppState, request_timeout: Duration, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/sms", post(handle_sms))
        .route("/metrics", get(metrics_snapshot))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TracingLayer::new())
        .with_state(state)
}

/// Liveness check
async fn health_check() -> &'static str {
    "Health Check"
}

/// Inbound SMS webhook.
///
/// Always answers with TwiML; form errors become the generic error reply.
async fn handle_sms(
    State(state): State<AppState>,
    form: Result<Form<InboundSms>, FormRejection>,
) -> Response {
    let sms = match form {
        Ok(Form(sms)) => sms,
        Err(rejection) => {
            warn!(error = %rejection, "Unreadable webhook form");
            InboundSms::default()
        }
    };

    let outcome = process_sms(&state, &sms);
    twiml_reply(&outcome.reply_text())
}

fn process_sms(state: &AppState, sms: &InboundSms) -> SmsOutcome {
    let _span = component_span!(
        "process_sms",
        component = "gateway",
        message_sid = sms.message_sid.as_deref().unwrap_or("-")
    )
    .entered();

    let outcome = SmsOutcome::classify(sms.body.as_deref(), |body| state.wheel.decode(body));
    state.metrics.record_outcome(&outcome);

    match &outcome {
        SmsOutcome::Decoded(report) => info!(
            day_of_month = report.day_of_month,
            condition = report.condition.name(),
            case_count = report.case_count,
            "Decoded report"
        ),
        SmsOutcome::Rejected => debug!("Message is not a valid code"),
        SmsOutcome::Malformed => warn!("Webhook carried no Body field"),
    }

    outcome
}

async fn metrics_snapshot(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

fn twiml_reply(text: &str) -> Response {
    (
        [(header::CONTENT_TYPE, TWIML_CONTENT_TYPE)],
        MessagingResponse::new(text).to_xml(),
    )
        .into_response()
}
