//! Render surface the pipeline writes into.
//!
//! The hosting page has three addressable regions: a status/location line,
//! an error line and a container the pollen cards are appended to. The
//! pipeline talks to them through [`RenderSurface`]; [`HtmlPage`] is the
//! implementation backing the server-rendered page.

use crate::models::PollenReading;

/// The three addressable regions of the hosting page
pub trait RenderSurface {
    /// Status line with the location name and the presented hour
    fn set_status(&mut self, text: &str);

    /// Error region, shown when the fetch fails
    fn set_error(&mut self, text: &str);

    /// Container-level notice replacing the card list
    fn set_notice(&mut self, text: &str);

    /// Append one pollen card to the container
    fn push_card(&mut self, reading: &PollenReading);
}

/// Accumulates the rendered regions and serializes them into a full page
#[derive(Debug, Default)]
pub struct HtmlPage {
    status: String,
    error: String,
    cards: String,
}

impl RenderSurface for HtmlPage {
    fn set_status(&mut self, text: &str) {
        self.status = escape(text);
    }

    fn set_error(&mut self, text: &str) {
        self.error = escape(text);
    }

    fn set_notice(&mut self, text: &str) {
        self.cards = format!("<p class=\"notice\">{}</p>", escape(text));
    }

    fn push_card(&mut self, reading: &PollenReading) {
        let class = reading.category.css_class();
        self.cards.push_str(&format!(
            "<div class=\"pollen-card {class}\">\
             <h2>{}</h2><p>{}</p><span class=\"count\">{}</span></div>",
            escape(&reading.display_name),
            reading.category.label(),
            reading.value
        ));
    }
}

impl HtmlPage {
    /// Serialize the regions into the hosting page
    #[must_use]
    pub fn into_html(self) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>Pollen counts</title>\n\
             <style>{PAGE_STYLE}</style>\n\
             </head>\n\
             <body>\n\
             <h1 id=\"location-date\">{}</h1>\n\
             <p id=\"error-message\">{}</p>\n\
             <div id=\"pollen-cards-container\">{}</div>\n\
             </body>\n\
             </html>\n",
            self.status, self.error, self.cards
        )
    }
}

const PAGE_STYLE: &str = "\
body{font-family:sans-serif;max-width:40rem;margin:2rem auto;padding:0 1rem}\
#error-message{color:#b91c1c}\
.notice{text-align:center;color:#555}\
.pollen-card{display:flex;justify-content:space-between;align-items:center;\
padding:1rem;margin:.5rem 0;border-left:.5rem solid;border-radius:.25rem;\
box-shadow:0 1px 3px rgba(0,0,0,.2)}\
.pollen-card .count{font-size:1.5rem;font-weight:bold}\
.pollen-card.low{border-color:#16a34a}\
.pollen-card.moderate{border-color:#eab308}\
.pollen-card.high{border-color:#ea580c}\
.pollen-card.very-high{border-color:#b91c1c}";

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
