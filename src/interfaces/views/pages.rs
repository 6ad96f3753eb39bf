//! Pages without stored data.

use std::borrow::Cow;

use crate::{entities::hobby::Hobby, utils::html::escape_html, views::Template};

pub struct AboutPage;

impl Template for AboutPage {
    fn title(&self) -> Cow<'_, str> {
        Cow::Borrowed("About")
    }

    fn render_body(&self) -> String {
        r#"<h2>About me</h2>
<p>Viết vài dòng về bản thân: học ngành gì, kỹ năng, mục tiêu nghề nghiệp. Ví dụ:</p>
<ul>
  <li>Ngôn ngữ: Rust, Python, C++</li>
  <li>Tools: Docker, Git, Linux</li>
  <li>Interests: DevOps, embedded systems, IoT</li>
</ul>
"#
        .to_string()
    }
}

pub struct HobbiesPage<'a> {
    pub hobbies: &'a [Hobby],
}

impl Template for HobbiesPage<'_> {
    fn title(&self) -> Cow<'_, str> {
        Cow::Borrowed("Hobbies")
    }

    fn render_body(&self) -> String {
        let mut cards = String::new();
        for h in self.hobbies {
            cards.push_str(&format!(
                r#"  <div class="col-md-4">
    <div class="card mb-3">
      <div class="card-body">
        <h5 class="card-title">{name}</h5>
        <p class="card-text">{description}</p>
      </div>
    </div>
  </div>
"#,
                name = escape_html(h.name),
                description = escape_html(h.description),
            ));
        }

        format!("<h2>Hobbies</h2>\n<div class=\"row\">\n{cards}</div>\n")
    }
}
