use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

const EVENTS_SELECTOR: &str = ".sqs-events-collection-list > div > article";
const META_DATE_SELECTOR: &str =
    "div ul li.eventlist-meta-item.eventlist-meta-date.event-meta-item";

lazy_static! {
    static ref EVENTS: Selector = parse_selector(EVENTS_SELECTOR);
    static ref TITLE: Selector = parse_selector("div h1");
    static ref DATE: Selector = parse_selector(&format!("{META_DATE_SELECTOR} > time:nth-child(1)"));
    static ref TIME: Selector = parse_selector(&format!(
        "{META_DATE_SELECTOR} > span:nth-child(2) > time.event-time-12hr"
    ));
    static ref IMAGE: Selector = parse_selector("a.eventlist-column-thumbnail img");
    static ref EXCERPT: Selector = parse_selector(".eventlist-description .sqs-block-content p");
}

fn parse_selector(selector: &str) -> Selector {
    Selector::parse(selector).unwrap_or_else(|_| panic!("Invalid selector '{}'", selector))
}

/// The parts of an event block fields are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::IntoStaticStr)]
pub enum EventField {
    Title,
    Date,
    Time,
    Image,
    Excerpt,
}

/// A parsed page holding repeated event blocks.
pub trait EventDocument {
    type Node<'a>: EventNode
    where
        Self: 'a;

    /// Event blocks in document order
    fn event_nodes(&self) -> Vec<Self::Node<'_>>;
}

/// Accessors over one event block. `None` means the field's node is absent.
pub trait EventNode {
    fn text(&self, field: EventField) -> Option<String>;
    fn attr(&self, field: EventField, name: &str) -> Option<String>;
    fn inner_html(&self, field: EventField) -> Option<String>;
}

pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }
}

impl EventDocument for HtmlDocument {
    type Node<'a> = HtmlNode<'a>;

    fn event_nodes(&self) -> Vec<HtmlNode<'_>> {
        self.html.select(&EVENTS).map(HtmlNode).collect()
    }
}

pub struct HtmlNode<'a>(ElementRef<'a>);

impl HtmlNode<'_> {
    fn first(&self, field: EventField) -> Option<ElementRef<'_>> {
        let selector: &Selector = match field {
            EventField::Title => &*TITLE,
            EventField::Date => &*DATE,
            EventField::Time => &*TIME,
            EventField::Image => &*IMAGE,
            EventField::Excerpt => &*EXCERPT,
        };

        self.0.select(selector).next()
    }
}

impl EventNode for HtmlNode<'_> {
    fn text(&self, field: EventField) -> Option<String> {
        self.first(field).map(|element| element.text().collect())
    }

    fn attr(&self, field: EventField, name: &str) -> Option<String> {
        self.first(field)
            .and_then(|element| element.value().attr(name))
            .map(str::to_string)
    }

    fn inner_html(&self, field: EventField) -> Option<String> {
        self.first(field).map(|element| element.inner_html())
    }
}
