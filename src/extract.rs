use dom_smoothie::{Config, Readability};
use log::debug;

/// Derives the main readable text from page markup, dropping navigation,
/// scripts and other boilerplate.
pub trait Extract {
    fn extract(&self, raw: Option<&str>) -> Option<String>;
}

/// Readability pass over the page. By default the whole document is parsed,
/// however many elements it has.
#[derive(Debug, Default)]
pub struct ReadabilityExtractor {
    /// `0` means no limit.
    max_elements: usize,
}

impl ReadabilityExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives up on documents with more than `max_elements` elements.
    pub fn with_element_limit(max_elements: usize) -> Self {
        Self { max_elements }
    }

    fn config(&self) -> Config {
        Config {
            max_elements_to_parse: self.max_elements,
            ..Default::default()
        }
    }
}

impl Extract for ReadabilityExtractor {
    fn extract(&self, raw: Option<&str>) -> Option<String> {
        let html = raw?;

        let mut readability = match Readability::new(html, None, Some(self.config())) {
            Ok(readability) => readability,
            Err(err) => {
                debug!("readability setup failed: {err}");
                return None;
            }
        };

        let article = match readability.parse() {
            Ok(article) => article,
            Err(err) => {
                debug!("no article content: {err}");
                return None;
            }
        };

        let text = article.text_content.trim();
        if text.is_empty() {
            debug!("article has no text");
            return None;
        }

        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Field notes</title>
    <script>console.log("tracking");</script>
  </head>
  <body>
    <div class="sidebar" id="menu">
      <a href="/">Home</a> <a href="/about">About</a>
      <p>Subscribe to our newsletter</p>
    </div>
    <article>
      <h1>Field notes</h1>
      <p>The river had risen overnight, and by morning the lower meadow was a
      shallow lake dotted with the tops of fence posts. We walked the edge of
      the water for an hour, counting herons and trying to guess where the old
      path used to run before the flood took it.</p>
      <p>By noon the sun had burned through the clouds, and the water began to
      drop again. The herons stayed, patient and grey, standing in the new
      shallows as if they had always lived there, while the rest of us went
      back to the farmhouse to dry our boots by the stove.</p>
      <p>In the evening we wrote down everything we had seen, because the
      meadow changes every season and nobody remembers the details for long.
      These notes are the only record of the morning the river came visiting.</p>
    </article>
  </body>
</html>"#;

    #[test]
    fn extracts_article_text() {
        let text = ReadabilityExtractor::new().extract(Some(ARTICLE)).unwrap();

        assert!(text.contains("The river had risen overnight"));
        assert!(text.contains("the morning the river came visiting"));
        assert!(!text.contains("console.log"));
        assert!(!text.contains("Subscribe to our newsletter"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let text = ReadabilityExtractor::new().extract(Some(ARTICLE)).unwrap();

        assert_eq!(text, text.trim());
    }

    #[test]
    fn missing_markup_is_none() {
        assert_eq!(ReadabilityExtractor::new().extract(None), None);
    }

    #[test]
    fn empty_markup_is_none() {
        let extractor = ReadabilityExtractor::new();

        assert_eq!(extractor.extract(Some("")), None);
        assert_eq!(extractor.extract(Some("<html><body></body></html>")), None);
    }

    #[test]
    fn large_page_still_yields_text() {
        let mut html = String::from("<html><body><nav class=\"menu\">");
        for i in 0..10_000 {
            html.push_str(&format!("<a href=\"/p/{i}\">link {i}</a>"));
        }
        html.push_str("</nav><article><h1>Long read</h1>");
        for i in 0..400 {
            html.push_str(&format!(
                "<p>Paragraph {i} of the long read keeps going, with enough words, \
                 commas, and sentences to look like real prose to the scorer.</p>"
            ));
        }
        html.push_str("</article></body></html>");

        let text = ReadabilityExtractor::new().extract(Some(&html)).unwrap();

        assert!(text.contains("Paragraph 0 of the long read"));
        assert!(text.contains("Paragraph 399 of the long read"));
    }

    #[test]
    fn element_limit_is_opt_in() {
        let extractor = ReadabilityExtractor::with_element_limit(3);

        assert_eq!(extractor.extract(Some(ARTICLE)), None);
    }
}
