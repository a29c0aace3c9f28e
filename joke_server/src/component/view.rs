//! Rendering of the card page. Everything here is a pure function of the
//! current [`DisplayText`].

use super::DisplayText;

pub const TITLE: &str = "Random Joke";
pub const NEW_JOKE_LABEL: &str = "Get New Joke \u{1F921}";

/// Element id of the box holding the joke text, targeted by the page script.
pub const TEXT_ELEMENT_ID: &str = "joke-text";

pub fn render_page(text: &DisplayText, background_image_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
  body {{ margin: 0; font-family: sans-serif; }}
  .viewport {{ display: flex; flex-direction: column; align-items: center; justify-content: center;
    height: 100vh; padding: 1rem; box-sizing: border-box;
    background: url('{background}') center / cover; }}
  .card {{ background: linear-gradient(to bottom right, #a758b9, #e3901af7); border-radius: 9999px;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2); padding: 4rem; width: 100%; max-width: 28rem; }}
  h1 {{ font-size: 1.875rem; font-weight: bold; margin-bottom: 1.5rem; color: #facc15; text-align: center; }}
  .text {{ background: #fef3c7; border-radius: 0.5rem; padding: 1.75rem; margin-bottom: 1.75rem;
    color: black; font-size: 1.125rem; }}
  button {{ background: #4caf50; color: white; font-weight: bold; padding: 1rem; border: none;
    border-radius: 9999px; margin-left: 5rem; cursor: pointer; transition: background-color 300ms; }}
  button:hover {{ background: #77c4ba; }}
</style>
</head>
<body>
<div class="viewport">
  <div class="card">
    <h1><u>{title}</u>&#128526;&#128514;</h1>
    <div class="text" id="{text_id}">{text}</div>
    <form method="post" action="/joke">
      <button type="submit">{label}</button>
    </form>
  </div>
</div>
<script>
  new EventSource("/joke/events").onmessage = (event) => {{
    document.getElementById("{text_id}").textContent = event.data;
  }};
</script>
</body>
</html>
"#,
        title = TITLE,
        background = escape_html(background_image_url),
        text_id = TEXT_ELEMENT_ID,
        text = escape_html(text.rendered()),
        label = NEW_JOKE_LABEL,
    )
}

/// Formats one server-sent event carrying the rendered text.
pub fn render_event(text: &DisplayText) -> String {
    // A `data:` line cannot contain a line break.
    let data = text.rendered().replace(['\r', '\n'], " ");
    format!("data: {}\n\n", data)
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
