mod html;
mod raw;
mod text;

pub use html::Html;
pub use raw::Raw;
pub use text::Text;

use crate::triangle::Pascal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Html,
    Raw,
}

impl Format {
    pub const NAMES: [&'static str; 3] = ["text", "html", "raw"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Format::Text),
            "html" => Some(Format::Html),
            "raw" => Some(Format::Raw),
            _ => None,
        }
    }
}

/// Renders `pascal` in `format`. A `width` of 0 picks the text column width
/// from the biggest value; other formats ignore it.
pub fn render(pascal: &Pascal, format: Format, headers: bool, width: usize) -> String {
    match format {
        Format::Text => {
            let width = (width > 0).then_some(width);
            Text::new(pascal, headers, width).to_string()
        }
        Format::Html => Html::new(pascal, headers).to_string(),
        Format::Raw => Raw::new(pascal, headers).to_string(),
    }
}
