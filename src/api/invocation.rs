use axum::{extract::State, response::Html, Form};

use super::AppState;
use crate::{
    config::Config,
    constants::{INVOCATION_METHODS, PLAYERS, PROPERTIES},
    error::Result,
    models::{InvocationForm, InvocationView},
    services::console::{build_invocation, invocation_message},
    views::{render, INVOCATION_TEMPLATE},
};

fn blank_view(config: &Config) -> InvocationView {
    echo_view(
        InvocationForm {
            channel: config.channel.clone(),
            chaincode: config.chaincode.clone(),
            chaincode_ver: config.chaincode_version.clone(),
            ..Default::default()
        },
        None,
    )
}

fn echo_view(form: InvocationForm, message: Option<String>) -> InvocationView {
    InvocationView {
        channel: form.channel,
        chaincode: form.chaincode,
        chaincode_ver: form.chaincode_ver,
        method: form.method,
        player: form.player,
        player2: form.player2,
        property: form.property,
        value: form.value,
        message,
        methods: INVOCATION_METHODS,
        players: PLAYERS,
        properties: PROPERTIES,
    }
}

/// GET /invocation
pub async fn show_form(State(state): State<AppState>) -> Result<Html<String>> {
    render(&state.templates, INVOCATION_TEMPLATE, &blank_view(&state.config))
}

/// POST /invocation
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<InvocationForm>,
) -> Result<Html<String>> {
    tracing::debug!("Invocation form: {:?}", form);

    let request = build_invocation(&form);
    tracing::info!(
        "Invoking {} on channel {} ({} args)",
        request.method,
        request.channel,
        request.args.len()
    );

    let reply = state.gateway.invoke(&request).await;
    let message = invocation_message(&request, reply);

    render(&state.templates, INVOCATION_TEMPLATE, &echo_view(form, Some(message)))
}
