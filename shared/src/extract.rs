use log::trace;
use scraper::{ElementRef, Html};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineupEntry {
    pub artist_name: String,
    pub image_url: String,
}

/// A parsed lineup page. Parsing happens once, `entries` walks the parsed
/// tree lazily in document order.
pub struct LineupPage {
    document: Html,
    marker: String,
}

impl LineupPage {
    pub fn parse(markup: &str, marker: &str) -> Self {
        Self {
            document: Html::parse_document(markup),
            marker: marker.to_string(),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = LineupEntry> + '_ {
        self.document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|e| e.value().name() == "img")
            .filter_map(move |img| entry_from_image(img, &self.marker))
    }
}

fn entry_from_image(img: ElementRef, marker: &str) -> Option<LineupEntry> {
    let alt = img.value().attr("alt")?;
    if !alt.contains(marker) {
        return None;
    }

    let src = match img.value().attr("src") {
        Some(src) if !src.is_empty() => src,
        _ => {
            trace!("Skipping '{}': no src", alt);
            return None;
        }
    };

    let (name, _) = alt.split_once(marker)?;
    let name = name.trim();
    if name.is_empty() {
        trace!("Skipping '{}': no artist name", alt);
        return None;
    }

    Some(LineupEntry {
        artist_name: name.to_string(),
        image_url: src.to_string(),
    })
}
