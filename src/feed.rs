use crate::config::FeedConfig;
use crate::store::Episode;

/// Render the store contents as an RSS 2.0 document. Episode-derived text
/// is escaped so a hostile title cannot break the feed structure.
pub fn render(config: &FeedConfig, episodes: &[Episode]) -> String {
    let mut items = String::new();
    for episode in episodes {
        items.push_str(&format!(
            "\n    <item>\n      <title>{}</title>\n      <pubDate>{}</pubDate>\n",
            escape_xml(&episode.title),
            escape_xml(&episode.pub_date),
        ));
        if let Some(url) = &episode.audio_url {
            items.push_str(&format!(
                "      <enclosure url=\"{}\" type=\"audio/mpeg\" />\n",
                escape_xml(url)
            ));
        }
        items.push_str(&format!(
            "      <guid>{}</guid>\n    </item>",
            escape_xml(&episode.id)
        ));
    }

    format!(
        r#"<rss version="2.0">
  <channel>
    <title>{}</title>
    <link>{}</link>
    <description>{}</description>{}
  </channel>
</rss>"#,
        escape_xml(&config.title),
        escape_xml(&config.link),
        escape_xml(&config.description),
        items
    )
}

/// Escape the five XML-reserved characters for use in text nodes and
/// attribute values.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
