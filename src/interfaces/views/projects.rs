use std::borrow::Cow;

use crate::{
    entities::project::Project,
    utils::html::{escape_html, escape_opt},
    views::Template,
};

/// Card list of every project plus the demo "add project" form.
pub struct ProjectsPage<'a> {
    pub projects: &'a [Project],
}

impl Template for ProjectsPage<'_> {
    fn title(&self) -> Cow<'_, str> {
        Cow::Borrowed("Projects")
    }

    fn render_body(&self) -> String {
        let mut cards = String::new();
        for p in self.projects {
            cards.push_str(&format!(
                r#"  <div class="col-md-6">
    <div class="card mb-3">
      <div class="card-body">
        <h5 class="card-title">{title}</h5>
        <p class="card-text">{description}</p>
        <a href="/projects/{id}" class="btn btn-outline-primary">Details</a>
      </div>
    </div>
  </div>
"#,
                id = p.id,
                title = escape_html(&p.title),
                description = escape_opt(p.description.as_deref()),
            ));
        }

        format!(
            r#"<h2>Projects</h2>
<div class="row">
{cards}</div>
<hr>
<h4>Add Project (demo admin)</h4>
<form method="post" action="/projects/add">
  <div class="mb-3"><input class="form-control" name="title" placeholder="Title"></div>
  <div class="mb-3"><input class="form-control" name="description" placeholder="Short description"></div>
  <div class="mb-3"><input class="form-control" name="url" placeholder="URL (optional)"></div>
  <div class="mb-3"><textarea class="form-control" name="details" placeholder="Details"></textarea></div>
  <button class="btn btn-success">Add</button>
</form>
"#
        )
    }
}

pub struct ProjectDetailPage<'a> {
    pub project: &'a Project,
}

impl Template for ProjectDetailPage<'_> {
    fn title(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.project.title.as_str())
    }

    fn render_body(&self) -> String {
        let p = self.project;

        let url_line = match p.url.as_deref() {
            Some(url) if !url.is_empty() => {
                let url = escape_html(url);
                format!(r#"<p>URL: <a href="{url}" target="_blank" rel="noopener">{url}</a></p>"#)
            }
            _ => String::new(),
        };

        format!(
            "<h2>{title}</h2>\n<p>{description}</p>\n<pre>{details}</pre>\n{url_line}\n",
            title = escape_html(&p.title),
            description = escape_opt(p.description.as_deref()),
            details = escape_opt(p.details.as_deref()),
        )
    }
}
