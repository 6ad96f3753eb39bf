use actix_web::http::StatusCode;
use std::borrow::Cow;

use crate::utils::html::escape_html;

const DEFAULT_TITLE: &str = "Portfolio";

/// A named page. Implementors hold exactly the data their page shows.
pub trait Template {
    fn title(&self) -> Cow<'_, str>;

    /// The page fragment, already escaped, placed inside `<main>`.
    fn render_body(&self) -> String;
}

/// Shell inputs shared by every page.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    pub owner: &'a str,
    pub flash: Option<&'a str>,
    pub year: i32,
}

pub fn render_page(layout: &Layout<'_>, page: &impl Template) -> String {
    let title = page.title();
    let title = if title.is_empty() { DEFAULT_TITLE } else { title.as_ref() };

    let flash = layout
        .flash
        .map(|message| {
            format!(
                r#"<div class="alert alert-success mt-3">{}</div>"#,
                escape_html(message)
            )
        })
        .unwrap_or_default();

    format!(
        r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css" rel="stylesheet">
    <style>
      body {{ padding-top: 56px; }}
      .hero {{ padding: 4rem 0; background: linear-gradient(90deg,#eef2ff,#ffffff); }}
      .post-content {{ white-space: pre-wrap; }}
      footer {{ padding: 2rem 0; margin-top: 3rem; background:#f8f9fa }}
    </style>
  </head>
  <body>
    <nav class="navbar navbar-expand-lg navbar-light bg-light fixed-top">
      <div class="container">
        <a class="navbar-brand" href="/">My Portfolio</a>
        <button class="navbar-toggler" type="button" data-bs-toggle="collapse" data-bs-target="#navmenu">
          <span class="navbar-toggler-icon"></span>
        </button>
        <div class="collapse navbar-collapse" id="navmenu">
          <ul class="navbar-nav ms-auto">
            <li class="nav-item"><a class="nav-link" href="/projects">Projects</a></li>
            <li class="nav-item"><a class="nav-link" href="/blog">Blog</a></li>
            <li class="nav-item"><a class="nav-link" href="/hobbies">Hobbies</a></li>
            <li class="nav-item"><a class="nav-link" href="/about">About</a></li>
            <li class="nav-item"><a class="nav-link" href="/contact">Contact</a></li>
          </ul>
        </div>
      </div>
    </nav>

    <main class="container">
      {flash}
      {body}
    </main>

    <footer class="text-center">
      <div class="container">
        <p class="mb-0">&copy; {year} — {owner}</p>
      </div>
    </footer>

    <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/js/bootstrap.bundle.min.js"></script>
  </body>
</html>
"##,
        title = escape_html(title),
        flash = flash,
        body = page.render_body(),
        year = layout.year,
        owner = escape_html(layout.owner),
    )
}

/// Bare page for failed requests; deliberately independent of the store.
pub fn render_error_page(status: StatusCode) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head><meta charset="utf-8"><title>{code} {reason}</title></head>
  <body>
    <h1>{code} {reason}</h1>
    <p>Something went wrong while handling your request.</p>
    <p><a href="/">Back to home</a></p>
  </body>
</html>
"#,
        code = status.as_u16(),
        reason = status.canonical_reason().unwrap_or("Error"),
    )
}
