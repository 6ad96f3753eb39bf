use std::borrow::Cow;

use crate::{
    entities::{post::Post, project::Project, timestamp::date_part},
    utils::html::{escape_html, escape_opt},
    views::Template,
};

pub struct HomePage<'a> {
    pub owner: &'a str,
    pub projects: &'a [Project],
    pub posts: &'a [Post],
}

impl Template for HomePage<'_> {
    fn title(&self) -> Cow<'_, str> {
        Cow::Borrowed("Home")
    }

    fn render_body(&self) -> String {
        let mut projects = String::new();
        for p in self.projects {
            projects.push_str(&format!(
                r#"      <li class="list-group-item"><a href="/projects/{id}">{title}</a> — {description}</li>
"#,
                id = p.id,
                title = escape_html(&p.title),
                description = escape_opt(p.description.as_deref()),
            ));
        }

        let mut posts = String::new();
        for post in self.posts {
            posts.push_str(&format!(
                r#"      <li class="list-group-item"><a href="/blog/{id}">{title}</a> — {date}</li>
"#,
                id = post.id,
                title = escape_html(&post.title),
                date = escape_html(date_part(post.created_at.as_deref())),
            ));
        }

        format!(
            r#"<section class="hero text-center">
  <h1>Hello — I'm {owner}</h1>
  <p class="lead">Junior DevOps / Developer. Tôi xây dựng dự án, viết blog và học mọi thứ về hệ thống.</p>
  <p><a href="/projects" class="btn btn-primary">See my projects</a></p>
</section>

<div class="row mt-4">
  <div class="col-md-6">
    <h3>Recent Projects</h3>
    <ul class="list-group">
{projects}    </ul>
  </div>
  <div class="col-md-6">
    <h3>Latest Blog Posts</h3>
    <ul class="list-group">
{posts}    </ul>
  </div>
</div>
"#,
            owner = escape_html(self.owner),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: i64, title: &str, description: Option<&str>) -> Project {
        Project {
            id,
            title: title.into(),
            description: description.map(Into::into),
            details: None,
            url: None,
            created_at: Some("2024-05-01T10:00:00.000000".into()),
        }
    }

    #[test]
    fn links_projects_and_posts() {
        let projects = [project(7, "Rust CLI", Some("A tool"))];
        let posts = [Post {
            id: 3,
            title: "Hello".into(),
            content: None,
            created_at: Some("2024-06-02T08:00:00.000000".into()),
        }];

        let html = HomePage { owner: "Your Name", projects: &projects, posts: &posts }.render_body();

        assert!(html.contains(r#"<a href="/projects/7">Rust CLI</a> — A tool"#));
        assert!(html.contains(r#"<a href="/blog/3">Hello</a> — 2024-06-02"#));
        assert!(html.contains("Hello — I'm Your Name"));
    }

    #[test]
    fn missing_description_renders_empty() {
        let projects = [project(1, "Bare", None)];
        let html = HomePage { owner: "Me", projects: &projects, posts: &[] }.render_body();

        assert!(html.contains(r#"<a href="/projects/1">Bare</a> — </li>"#));
        assert!(!html.contains("None"));
    }
}
