use std::borrow::Cow;

use crate::{
    entities::{message::ContactMessage, timestamp::date_part},
    utils::html::{escape_html, escape_opt},
    views::Template,
};

/// Contact form followed by the most recent messages, as given (newest first).
pub struct ContactPage<'a> {
    pub messages: &'a [ContactMessage],
}

impl Template for ContactPage<'_> {
    fn title(&self) -> Cow<'_, str> {
        Cow::Borrowed("Contact")
    }

    fn render_body(&self) -> String {
        let mut items = String::new();
        for m in self.messages {
            items.push_str(&format!(
                r#"  <li class="list-group-item"><strong>{name}</strong>: {message} <br><small class="text-muted">{date}</small></li>
"#,
                name = escape_opt(m.name.as_deref()),
                message = escape_opt(m.message.as_deref()),
                date = escape_html(date_part(m.created_at.as_deref())),
            ));
        }

        format!(
            r#"<h2>Contact</h2>
<form method="post" action="/contact">
  <div class="mb-3"><input class="form-control" name="name" placeholder="Your name"></div>
  <div class="mb-3"><input class="form-control" name="email" placeholder="Email"></div>
  <div class="mb-3"><textarea class="form-control" name="message" placeholder="Message"></textarea></div>
  <button class="btn btn-primary">Send</button>
</form>

<hr>
<h4>Recent messages (demo)</h4>
<ul class="list-group">
{items}</ul>
"#
        )
    }
}
