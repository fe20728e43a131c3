use super::document::{EventField, EventNode};
use super::model::Event;
use super::normalizer::{calculate_expires_at, format_date, format_excerpt};
use crate::error::ScrapeError;
use tracing::trace;

const IMAGE_ATTRIBUTE: &str = "data-src";

/// Field values as read from an event block, before normalization.
/// Absent nodes are read as empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEvent {
    pub title: String,
    pub date_text: String,
    pub time: String,
    pub image: String,
    pub excerpt_html: String,
}

impl RawEvent {
    pub fn from_node<N: EventNode>(node: &N) -> Self {
        Self {
            title: read(node.text(EventField::Title), EventField::Title)
                .trim()
                .to_string(),
            date_text: read(node.text(EventField::Date), EventField::Date),
            time: read(node.text(EventField::Time), EventField::Time),
            image: read(node.attr(EventField::Image, IMAGE_ATTRIBUTE), EventField::Image),
            excerpt_html: read(node.inner_html(EventField::Excerpt), EventField::Excerpt),
        }
    }

    #[tracing::instrument(skip(self), fields(title = %self.title))]
    pub fn to_model(&self) -> Result<Event, ScrapeError> {
        let date = format_date(&self.date_text)?;
        let expires_at = calculate_expires_at(date)?;

        Ok(Event::new(
            self.title.to_string(),
            date,
            self.time.to_string(),
            self.image.to_string(),
            format_excerpt(&self.excerpt_html),
            expires_at,
        ))
    }
}

fn read(value: Option<String>, field: EventField) -> String {
    value.unwrap_or_else(|| {
        let name: &'static str = field.into();
        trace!("No {} found (leaving it empty)", name);
        String::new()
    })
}
