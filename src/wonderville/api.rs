use super::document::{EventDocument, HtmlDocument};
use super::dto::RawEvent;
use super::model::Event;
use crate::error::ScrapeError;
use lazy_static::lazy_static;
use reqwest::Client;
use tracing::{info, warn};

pub const WONDERVILLE_EVENTS_URL: &str = "https://www.wonderville.nyc/events";

lazy_static! {
    static ref REST_CLIENT: Client = Client::new();
}

/// Retrieves the raw markup of a page.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, ScrapeError>;
}

pub struct WondervilleAPI;

impl PageFetcher for WondervilleAPI {
    #[tracing::instrument(skip(self))]
    async fn fetch_html(&self, url: &str) -> Result<String, ScrapeError> {
        let fetch_error = |err: reqwest::Error| ScrapeError::Fetch {
            url: url.to_string(),
            source: Box::new(err),
        };

        REST_CLIENT
            .get(url)
            .send()
            .await
            .map_err(fetch_error)?
            .error_for_status()
            .map_err(fetch_error)?
            .text()
            .await
            .map_err(fetch_error)
    }
}

impl WondervilleAPI {
    /// Returns the events of the page in the order they appear
    pub fn parse_events(html: &str) -> Vec<Event> {
        Self::get_events(&HtmlDocument::parse(html))
    }

    /// Events whose date can't be read are left out
    #[tracing::instrument(skip_all)]
    pub fn get_events<D: EventDocument>(document: &D) -> Vec<Event> {
        let events: Vec<Event> = document
            .event_nodes()
            .iter()
            .map(RawEvent::from_node)
            .filter_map(|raw| match raw.to_model() {
                Ok(event) => Some(event),
                Err(err) => {
                    warn!("Skipping event '{}': {}", raw.title, err);
                    None
                }
            })
            .collect();

        info!("Found {} events", events.len());

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wonderville::document::{EventField, EventNode};

    struct FakeDocument(Vec<FakeNode>);

    struct FakeNode {
        title: &'static str,
        date: &'static str,
    }

    impl EventDocument for FakeDocument {
        type Node<'a> = &'a FakeNode;

        fn event_nodes(&self) -> Vec<&FakeNode> {
            self.0.iter().collect()
        }
    }

    impl EventNode for &FakeNode {
        fn text(&self, field: EventField) -> Option<String> {
            match field {
                EventField::Title => Some(self.title.to_string()),
                EventField::Date => Some(self.date.to_string()),
                _ => None,
            }
        }

        fn attr(&self, _field: EventField, _name: &str) -> Option<String> {
            None
        }

        fn inner_html(&self, _field: EventField) -> Option<String> {
            None
        }
    }

    #[test_log::test]
    fn should_keep_document_order_and_duplicates() {
        let document = FakeDocument(vec![
            FakeNode { title: "B", date: "Friday, Mar 15, 2024" },
            FakeNode { title: "A", date: "Thursday, Mar 14, 2024" },
            FakeNode { title: "B", date: "Friday, Mar 15, 2024" },
        ]);

        let titles: Vec<String> = WondervilleAPI::get_events(&document)
            .into_iter()
            .map(|event| event.title)
            .collect();

        assert_eq!(titles, vec!["B", "A", "B"]);
    }

    #[test_log::test]
    fn when_date_is_malformed_should_skip_only_that_event() {
        let document = FakeDocument(vec![
            FakeNode { title: "Good", date: "Friday, Mar 15, 2024" },
            FakeNode { title: "Bad", date: "Someday soon" },
        ]);

        let events = WondervilleAPI::get_events(&document);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Good");
        assert_eq!(events[0].image, "");
        assert_eq!(events[0].excerpt, "");
    }

    #[test_log::test]
    fn when_page_has_no_events_should_be_empty() {
        let events = WondervilleAPI::parse_events("<html><body><p>Nothing here</p></body></html>");

        assert!(events.is_empty());
    }
}
