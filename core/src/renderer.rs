#![deny(missing_docs)]

//! # Schema Walker
//!
//! Walks an [`ApiDescription`] once, endpoints first and models second, and
//! appends the corresponding blocks to a [`RenderedDocument`].
//!
//! Rendering never fails. Every field is optional and resolves through a
//! short-circuit lookup chain that ends in a default.

use crate::document::{ParagraphStyle, RenderedDocument, Table, TableKind};
use crate::oas::document::ApiDescription;
use crate::oas::lookup::{child, first_text, is_truthy, text};
use serde_json::{Map, Value};

/// Placeholder for any missing table cell.
const MISSING: &str = "-";

/// Title heading emitted at the top of every document.
pub const DOCUMENT_TITLE: &str = "API Documentation";

/// Heading of the Models section.
pub const MODELS_TITLE: &str = "Models";

/// Renders the whole description.
pub fn render(api: &ApiDescription) -> RenderedDocument {
    let mut doc = RenderedDocument::new();
    doc.push_heading(1, DOCUMENT_TITLE);

    let mut endpoints = 0usize;
    for (path, item) in api.paths() {
        let Some(methods) = item.as_object() else {
            tracing::debug!(path, "skipping path item that is not an object");
            continue;
        };
        for (method, operation) in methods {
            if !operation.is_object() {
                tracing::debug!(path, key = %method, "skipping non-operation entry");
                continue;
            }
            render_operation(&mut doc, path, method, operation);
            endpoints += 1;
        }
    }

    let models = api.model_schemas().map_or(0, |schemas| {
        render_models(&mut doc, schemas);
        schemas.len()
    });

    tracing::info!(endpoints, models, blocks = doc.len(), "rendered API description");
    doc
}

/// Emits the block of a single operation.
fn render_operation(doc: &mut RenderedDocument, path: &str, method: &str, operation: &Value) {
    tracing::debug!(path, method, "rendering operation");
    doc.push_heading(2, format!("{} {}", method.to_uppercase(), path));

    let summary = first_text(operation, &[&["summary"]]).unwrap_or_default();
    doc.push_paragraph(summary, ParagraphStyle::Subheading);

    if let Some(description) = child(operation, "description")
        .filter(|v| is_truthy(v))
        .and_then(text)
    {
        doc.push_paragraph(description, ParagraphStyle::Body);
    }

    // Presence of the key drives the section, even for an empty collection.
    if let Some(parameters) = child(operation, "parameters") {
        doc.push_heading(3, "Parameters");
        doc.push_table(parameters_table(parameters));
    }

    if let Some(responses) = child(operation, "responses") {
        doc.push_heading(3, "Responses");
        doc.push_table(responses_table(responses));
    }
}

fn parameters_table(parameters: &Value) -> Table {
    let mut table = Table::new(TableKind::Parameters);
    for param in parameters.as_array().into_iter().flatten() {
        let required = child(param, "required").is_some_and(is_truthy);
        table.push_row(vec![
            or_missing(first_text(param, &[&["name"]])),
            or_missing(first_text(param, &[&["in"]])),
            or_missing(first_text(param, &[&["type"], &["schema", "type"]])),
            or_missing(first_text(param, &[&["description"]])),
            if required { "Yes" } else { "No" }.to_string(),
        ]);
    }
    table
}

fn responses_table(responses: &Value) -> Table {
    let mut table = Table::new(TableKind::Responses);
    for (code, response) in responses.as_object().into_iter().flatten() {
        let schema = first_text(
            response,
            &[
                &["content", "application/json", "schema", "$ref"],
                &["content", "application/json", "schema", "type"],
            ],
        );
        table.push_row(vec![
            code.clone(),
            or_missing(first_text(response, &[&["description"]])),
            or_missing(schema),
        ]);
    }
    table
}

/// Emits the Models heading and one block per model.
fn render_models(doc: &mut RenderedDocument, schemas: &Map<String, Value>) {
    doc.push_heading(1, MODELS_TITLE);

    for (name, model) in schemas {
        tracing::debug!(model = %name, "rendering model");
        doc.push_heading(2, name.as_str());

        let mut table = Table::new(TableKind::Properties);
        let properties = child(model, "properties").and_then(Value::as_object);
        for (prop_name, prop) in properties.into_iter().flatten() {
            table.push_row(vec![
                prop_name.clone(),
                or_missing(first_text(prop, &[&["type"]])),
                or_missing(first_text(prop, &[&["description"]])),
            ]);
        }
        doc.push_table(table);
    }
}

fn or_missing(value: Option<String>) -> String {
    value.unwrap_or_else(|| MISSING.to_string())
}
