use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::Result;

const LAYOUT: &str = include_str!("../templates/layout.html");
const INVOCATION: &str = include_str!("../templates/invocation.html");
const QUERY: &str = include_str!("../templates/query.html");

pub const INVOCATION_TEMPLATE: &str = "invocation.html";
pub const QUERY_TEMPLATE: &str = "query.html";

/// Compiles the page templates bundled into the binary. Autoescaping is on for
/// every `.html` template, so echoed form input never reaches the page raw.
pub fn load_templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("layout.html", LAYOUT),
        (INVOCATION_TEMPLATE, INVOCATION),
        (QUERY_TEMPLATE, QUERY),
    ])?;
    Ok(tera)
}

pub fn render<T: Serialize>(tera: &Tera, template: &str, view: &T) -> Result<Html<String>> {
    let context = Context::from_serialize(view)?;
    Ok(Html(tera.render(template, &context)?))
}
