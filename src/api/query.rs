use axum::{extract::State, response::Html, Form};

use super::AppState;
use crate::{
    config::Config,
    constants::{PLAYERS, PROPERTIES, QUERY_METHODS},
    error::Result,
    models::{QueryForm, QueryView},
    services::console::{build_query, query_outcome, QueryOutcome},
    views::{render, QUERY_TEMPLATE},
};

fn blank_view(config: &Config) -> QueryView {
    echo_view(
        QueryForm {
            channel: config.channel.clone(),
            chaincode: config.chaincode.clone(),
            chaincode_ver: config.chaincode_version.clone(),
            ..Default::default()
        },
        QueryOutcome::default(),
    )
}

fn echo_view(form: QueryForm, outcome: QueryOutcome) -> QueryView {
    QueryView {
        channel: form.channel,
        chaincode: form.chaincode,
        chaincode_ver: form.chaincode_ver,
        method: form.method,
        player: form.player,
        property: form.property,
        transactions: outcome.transactions,
        message: outcome.message,
        methods: QUERY_METHODS,
        players: PLAYERS,
        properties: PROPERTIES,
    }
}

/// GET /query
pub async fn show_form(State(state): State<AppState>) -> Result<Html<String>> {
    render(&state.templates, QUERY_TEMPLATE, &blank_view(&state.config))
}

/// POST /query
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<QueryForm>,
) -> Result<Html<String>> {
    tracing::debug!("Query form: {:?}", form);

    let request = build_query(&form);
    tracing::info!(
        "Querying {} on channel {} ({} args)",
        request.method,
        request.channel,
        request.args.len()
    );

    let reply = state.gateway.query(&request).await;
    let outcome = query_outcome(&request, reply);
    tracing::debug!("Query {} produced {} entries", request.method, outcome.transactions.len());

    render(&state.templates, QUERY_TEMPLATE, &echo_view(form, outcome))
}
