use crate::annotator::AnnotatedGroup;

/// Escape text for interpolation into HTML
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the matched groups as a self-contained HTML page
pub fn render_html(groups: &[AnnotatedGroup]) -> String {
    let mut sections = String::new();

    for (index, group) in groups.iter().enumerate() {
        sections.push_str(&format!(
            "    <section class=\"group\">\n      <h2>Group {}</h2>\n      <ul class=\"members\">\n",
            index + 1
        ));
        for person in &group.matches {
            sections.push_str(&format!("        <li>{}</li>\n", escape(&person.name)));
        }
        sections.push_str("      </ul>\n");

        if !group.common_attributes.is_empty() {
            sections.push_str("      <h3>Things to talk about</h3>\n      <ul class=\"topics\">\n");
            for topic in &group.common_attributes {
                sections.push_str(&format!("        <li>{}</li>\n", escape(topic)));
            }
            sections.push_str("      </ul>\n");
        }

        sections.push_str("    </section>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Discussion Groups</title>
    <style>
      body {{ font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }}
      section.group {{ border: 1px solid #ccc; border-radius: 6px; padding: 0 1rem 1rem; margin-bottom: 1rem; }}
      h3 {{ margin-bottom: 0.25rem; }}
    </style>
  </head>
  <body>
    <h1>Discussion Groups</h1>
{sections}  </body>
</html>
"#
    )
}
