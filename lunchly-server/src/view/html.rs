//! Built-in HTML pages
//!
//! Every value taken from the context is escaped before it is written.

use serde_json::Value;
use shared::models::full_name;
use shared::util::format_millis;

use super::{RenderError, Renderer, View};

const NAV: &str = r#"<nav><a href="/">Customers</a> | <a href="/top-10">Top 10</a> | <a href="/add/">Add customer</a></nav>"#;

const SEARCH_FORM: &str = r#"<form action="/search/" method="get"><input name="term" placeholder="Search by name"> <button>Search</button></form>"#;

/// Renders the application's pages from their JSON context
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, template: &str, context: &Value) -> Result<String, RenderError> {
        let view = View::from_template(template)
            .ok_or_else(|| RenderError::UnknownTemplate(template.to_string()))?;

        let page = match view {
            View::CustomerList => customer_list(context),
            View::CustomerNewForm => customer_new_form(),
            View::CustomerDetail => customer_detail(context)?,
            View::CustomerEditForm => customer_edit_form(context)?,
            View::Error => error_page(context),
        };
        Ok(page)
    }
}

fn customer_list(ctx: &Value) -> String {
    let title = ctx.get("title").and_then(Value::as_str).unwrap_or("Customers");
    let mut body = format!("<h1>{}</h1>\n{SEARCH_FORM}\n", escape(title));

    if let Some(message) = ctx.pointer("/err/message").and_then(Value::as_str) {
        body.push_str(&format!("<p class=\"error\">{}</p>\n", escape(message)));
    }

    let customers = array(ctx, "customers");
    if !customers.is_empty() {
        body.push_str("<ul class=\"customers\">\n");
        for customer in customers {
            let name = escape(&display_name(customer));
            match customer.get("id").and_then(Value::as_i64) {
                Some(id) => body.push_str(&format!("<li><a href=\"/{id}/\">{name}</a></li>\n")),
                None => body.push_str(&format!("<li>{name}</li>\n")),
            }
        }
        body.push_str("</ul>\n");
    }

    layout(title, &body)
}

fn customer_new_form() -> String {
    let body = format!(
        "<h1>Add a customer</h1>\n<form action=\"/add/\" method=\"post\">\n{}</form>\n",
        customer_fields(&Value::Null)
    );
    layout("Add a customer", &body)
}

fn customer_detail(ctx: &Value) -> Result<String, RenderError> {
    let customer = required(ctx, "customer", View::CustomerDetail)?;
    let id = customer_id(customer, View::CustomerDetail)?;
    let name = page_name(ctx, customer);

    let mut body = format!("<h1>{}</h1>\n<dl>\n", escape(&name));
    body.push_str(&format!(
        "<dt>Phone</dt><dd>{}</dd>\n<dt>Notes</dt><dd>{}</dd>\n</dl>\n",
        escape(text(customer, "phone")),
        escape(text(customer, "notes"))
    ));
    body.push_str(&format!("<p><a href=\"/{id}/edit/\">Edit</a></p>\n"));

    body.push_str("<h2>Reservations</h2>\n");
    let reservations = array(ctx, "reservations");
    if reservations.is_empty() {
        body.push_str("<p>No reservations.</p>\n");
    } else {
        body.push_str("<ul class=\"reservations\">\n");
        for r in reservations {
            let start = r
                .get("startAt")
                .and_then(Value::as_i64)
                .map(format_millis)
                .unwrap_or_default();
            let guests = r.get("numGuests").and_then(Value::as_i64).unwrap_or_default();
            body.push_str(&format!(
                "<li>{} for {guests} guests<br><small>{}</small></li>\n",
                escape(&start),
                escape(text(r, "notes"))
            ));
        }
        body.push_str("</ul>\n");
    }

    body.push_str(&format!(
        concat!(
            "<h2>New reservation</h2>\n",
            "<form action=\"/{id}/add-reservation/\" method=\"post\">\n",
            "<label>Start <input type=\"datetime-local\" name=\"startAt\" required></label>\n",
            "<label>Guests <input type=\"number\" name=\"numGuests\" min=\"1\" required></label>\n",
            "<label>Notes <textarea name=\"notes\"></textarea></label>\n",
            "<button>Add reservation</button>\n",
            "</form>\n"
        ),
        id = id
    ));

    Ok(layout(&name, &body))
}

fn customer_edit_form(ctx: &Value) -> Result<String, RenderError> {
    let customer = required(ctx, "customer", View::CustomerEditForm)?;
    let id = customer_id(customer, View::CustomerEditForm)?;
    let name = page_name(ctx, customer);

    let body = format!(
        "<h1>Edit {}</h1>\n<form action=\"/{id}/edit/\" method=\"post\">\n{}</form>\n",
        escape(&name),
        customer_fields(customer)
    );
    Ok(layout(&format!("Edit {name}"), &body))
}

fn error_page(ctx: &Value) -> String {
    let message = ctx
        .pointer("/err/message")
        .and_then(Value::as_str)
        .unwrap_or("Something went wrong");
    let status = ctx.get("status").and_then(Value::as_u64).unwrap_or(500);

    let body = format!("<h1>Error {status}</h1>\n<p class=\"error\">{}</p>\n", escape(message));
    layout(&format!("Error {status}"), &body)
}

/// Shared create/edit inputs; `customer` pre-fills them when it is an object
fn customer_fields(customer: &Value) -> String {
    format!(
        concat!(
            "<label>First name <input name=\"firstName\" value=\"{}\" required></label>\n",
            "<label>Last name <input name=\"lastName\" value=\"{}\" required></label>\n",
            "<label>Phone <input name=\"phone\" value=\"{}\"></label>\n",
            "<label>Notes <textarea name=\"notes\">{}</textarea></label>\n",
            "<button>Save</button>\n"
        ),
        escape(text(customer, "firstName")),
        escape(text(customer, "lastName")),
        escape(text(customer, "phone")),
        escape(text(customer, "notes")),
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{} | Lunchly</title></head>\n<body>\n{NAV}\n<main>\n{body}</main>\n</body>\n</html>\n",
        escape(title)
    )
}

fn page_name(ctx: &Value, customer: &Value) -> String {
    ctx.get("fullName")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| display_name(customer))
}

fn display_name(customer: &Value) -> String {
    full_name(text(customer, "firstName"), text(customer, "lastName"))
}

fn required<'a>(ctx: &'a Value, key: &str, view: View) -> Result<&'a Value, RenderError> {
    ctx.get(key)
        .filter(|v| v.is_object())
        .ok_or_else(|| RenderError::Template {
            template: view.template().to_string(),
            message: format!("missing `{key}`"),
        })
}

fn customer_id(customer: &Value, view: View) -> Result<i64, RenderError> {
    customer
        .get("id")
        .and_then(Value::as_i64)
        .ok_or_else(|| RenderError::Template {
            template: view.template().to_string(),
            message: "customer has no id".to_string(),
        })
}

fn text<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

fn array<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
