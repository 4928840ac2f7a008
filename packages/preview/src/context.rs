/// Output formatting for the HTML renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit one element per line, indented
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

impl RenderOptions {
    /// Single-line output
    pub fn compact() -> Self {
        Self {
            pretty: false,
            indent: String::new(),
        }
    }
}

pub(crate) struct Context {
    options: RenderOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            for _ in 0..self.depth {
                self.buffer.push_str(&self.options.indent);
            }
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    /// Opening tag on its own line, then indent
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        let line = format!("<{}{}>", tag, attributes(attrs));
        self.add_line(&line);
        self.depth += 1;
    }

    pub fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.add_line(&format!("</{}>", tag));
    }

    /// Element with escaped text content on a single line
    pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
        let line = format!("<{}{}>{}</{}>", tag, attributes(attrs), escape_html(text), tag);
        self.add_line(&line);
    }

    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        let line = format!("<{}{} />", tag, attributes(attrs));
        self.add_line(&line);
    }

    pub fn get_output(self) -> String {
        self.buffer
    }
}

fn attributes(attrs: &[(&str, &str)]) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!(" {}=\"{}\"", name, escape_html(value)))
        .collect()
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
