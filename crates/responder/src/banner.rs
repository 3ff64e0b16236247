use figlet_rs::FIGfont;
use shared::error::ResponderError;

/// Turns a single word into multi-line large-character ASCII art.
pub trait BannerRenderer: Send + Sync {
    fn render(&self, word: &str) -> String;
}

/// Renderer backed by the standard FIGlet font bundled with `figlet-rs`.
pub struct FigletRenderer {
    font: FIGfont,
}

impl FigletRenderer {
    pub fn standard() -> Result<Self, ResponderError> {
        let font = FIGfont::standard().map_err(ResponderError::FontUnavailable)?;
        Ok(Self { font })
    }

    fn draw(&self, text: &str) -> Option<String> {
        let rendered = self.font.convert(text)?.to_string();
        (!rendered.trim().is_empty()).then_some(rendered)
    }
}

impl BannerRenderer for FigletRenderer {
    /// Words with any character the font cannot draw are echoed verbatim.
    /// The standard font covers printable ASCII and a few Latin-1 letters.
    fn render(&self, word: &str) -> String {
        let drawable = word
            .chars()
            .filter(|c| !c.is_whitespace())
            .all(|c| self.draw(c.encode_utf8(&mut [0; 4])).is_some());
        match drawable.then(|| self.draw(word)).flatten() {
            Some(rendered) => rendered,
            None => format!("{word}\n"),
        }
    }
}

/// Renders every whitespace-separated word of `argument_text` as its own
/// banner, each preceded by a newline, and fences the result as a code block.
pub fn render_words(renderer: &dyn BannerRenderer, argument_text: &str) -> String {
    let mut block = String::new();
    for word in argument_text.split_whitespace() {
        block.push('\n');
        block.push_str(&renderer.render(word));
    }
    format!("```{block}\n```")
}

#[cfg(test)]
#[path = "tests/banner_tests.rs"]
mod tests;
