use std::borrow::Cow;

use crate::{
    entities::{post::Post, timestamp::date_part},
    utils::html::{escape_html, escape_opt},
    views::Template,
};

pub struct BlogPage<'a> {
    pub posts: &'a [Post],
}

impl Template for BlogPage<'_> {
    fn title(&self) -> Cow<'_, str> {
        Cow::Borrowed("Blog")
    }

    fn render_body(&self) -> String {
        let mut items = String::new();
        for post in self.posts {
            items.push_str(&format!(
                r#"  <li class="list-group-item"><a href="/blog/{id}">{title}</a> — {date}</li>
"#,
                id = post.id,
                title = escape_html(&post.title),
                date = escape_html(date_part(post.created_at.as_deref())),
            ));
        }

        format!(
            r#"<h2>Blog</h2>
<ul class="list-group">
{items}</ul>

<hr>
<h4>Add Post (demo admin)</h4>
<form method="post" action="/blog/add">
  <div class="mb-3"><input class="form-control" name="title" placeholder="Title"></div>
  <div class="mb-3"><textarea class="form-control" name="content" placeholder="Content"></textarea></div>
  <button class="btn btn-success">Add Post</button>
</form>
"#
        )
    }
}

pub struct PostDetailPage<'a> {
    pub post: &'a Post,
}

impl Template for PostDetailPage<'_> {
    fn title(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.post.title.as_str())
    }

    fn render_body(&self) -> String {
        format!(
            "<h2>{title}</h2>\n<p class=\"text-muted\">{date}</p>\n<div class=\"post-content\">{content}</div>\n",
            title = escape_html(&self.post.title),
            date = escape_html(date_part(self.post.created_at.as_deref())),
            content = escape_opt(self.post.content.as_deref()),
        )
    }
}
