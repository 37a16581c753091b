// src/routes/page.rs
use axum::{Form, extract::State, response::Html};

use crate::{message::QueryForm, services::chatbot::healthcare_chatbot, state::SharedState};

const TITLE: &str = "Healthcare Assistant Chatbot";
const PROMPT: &str = "How can I assist you today?";
const EMPTY_WARNING: &str = "Please enter a valid query.";

/// What the page shows below the form.
pub enum Outcome<'a> {
    Idle,
    Warning,
    Answered { user_input: &'a str, response: &'a str },
}

pub async fn index_handler() -> Html<String> {
    Html(render_page("", Outcome::Idle))
}

pub async fn submit_handler(
    State(state): State<SharedState>,
    Form(form): Form<QueryForm>,
) -> Html<String> {
    if form.user_input.trim().is_empty() {
        return Html(render_page(&form.user_input, Outcome::Warning));
    }

    let reply = healthcare_chatbot(state.generator.as_ref(), &form.user_input).await;
    Html(render_page(
        &form.user_input,
        Outcome::Answered { user_input: &form.user_input, response: &reply.reply },
    ))
}

pub fn render_page(current_input: &str, outcome: Outcome<'_>) -> String {
    let result = match outcome {
        Outcome::Idle => String::new(),
        Outcome::Warning => format!(r#"<div class="warning">{}</div>"#, EMPTY_WARNING),
        Outcome::Answered { user_input, response } => format!(
            r#"<p><strong>User:</strong> {}</p>
    <p><strong>Healthcare Assistant:</strong> {}</p>"#,
            escape_html(user_input),
            escape_html(response)
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; margin: 2rem 4rem; }}
    input[type=text] {{ width: 100%; padding: 0.5rem; font-size: 1rem; }}
    button {{ margin-top: 0.75rem; padding: 0.5rem 1.25rem; }}
    .warning {{ margin-top: 1rem; padding: 0.75rem; background: #fff4ce; border-radius: 4px; }}
  </style>
</head>
<body>
  <h1>{title}</h1>
  <form method="post" action="/" onsubmit="this.querySelector('button').textContent = 'Processing your query, please wait...'">
    <label for="user_input">{prompt}</label>
    <input type="text" id="user_input" name="user_input" value="{value}">
    <button type="submit">Submit</button>
  </form>
  <section>
    {result}
  </section>
</body>
</html>
"#,
        title = TITLE,
        prompt = PROMPT,
        value = escape_html(current_input),
        result = result,
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
