use crate::config::Config;
use crate::image_input::blob::ImageBlob;
use crate::waste_category::{Category, Counters};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

pub const POSITION_ENTRY: u8 = 0;
pub const POSITION_MIDWAY: u8 = 50;
pub const POSITION_BIN_EDGE: u8 = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HighlightId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Entering,
    Traveling,
    Classified,
    Dropping,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub image: ImageBlob,
    pub category: Option<Category>,
    pub status: Status,
    pub position: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub id: HighlightId,
    pub category: Category,
}

/// Whole plant state. Every event produces a fresh snapshot from the previous one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub items: Vec<Item>,
    pub counters: Counters,
    pub highlights: Vec<Highlight>,
    next_highlight: u64,
}

impl Model {
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Most recently lit bin that has not expired yet.
    pub fn active_bin(&self) -> Option<Category> {
        self.highlights.last().map(|highlight| highlight.category)
    }

    pub fn active_bins(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| self.highlights.iter().any(|h| h.category == *category))
            .collect()
    }

    pub fn is_idle(&self) -> bool {
        self.items.is_empty() && self.highlights.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Submitted { id: ItemId, image: ImageBlob },
    TravelDue(ItemId),
    ClassifyDue(ItemId),
    ClassifyDone { id: ItemId, category: Category },
    ApproachDue(ItemId),
    DropDue(ItemId),
    HighlightExpired(HighlightId),
    SettleDue(ItemId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Schedule { after: Duration, event: Event },
    Classify { id: ItemId, image: ImageBlob },
}

fn schedule(after: Duration, event: Event) -> Effect {
    Effect::Schedule { after, event }
}

pub fn init() -> (Model, Vec<Effect>) {
    (Model::default(), vec![])
}

pub fn transition(config: &Config, model: Model, event: Event) -> (Model, Vec<Effect>) {
    let timeline = &config.timeline;
    let mut model = model;

    match event {
        Event::Submitted { id, image } => {
            if model.item(id).is_some() {
                return (model, vec![]);
            }
            model.items.push(Item {
                id,
                image,
                category: None,
                status: Status::Entering,
                position: POSITION_ENTRY,
            });
            (
                model,
                vec![
                    schedule(timeline.travel_after(), Event::TravelDue(id)),
                    schedule(timeline.classify_after(), Event::ClassifyDue(id)),
                ],
            )
        }

        Event::TravelDue(id) => {
            if let Some(item) = model.item_mut(id) {
                if item.status == Status::Entering {
                    item.status = Status::Traveling;
                    item.position = POSITION_MIDWAY;
                }
            }
            (model, vec![])
        }

        Event::ClassifyDue(id) => {
            let effects = match model.item(id) {
                Some(item) if item.category.is_none() => vec![Effect::Classify {
                    id,
                    image: item.image.clone(),
                }],
                _ => vec![],
            };
            (model, effects)
        }

        // Later steps chain off this one, so the category is always known
        // before the item reaches the bins.
        Event::ClassifyDone { id, category } => match model.item_mut(id) {
            Some(item) if item.status <= Status::Traveling => {
                item.status = Status::Classified;
                item.category = Some(category);
                item.position = item.position.max(POSITION_MIDWAY);
                (
                    model,
                    vec![schedule(timeline.approach_after(), Event::ApproachDue(id))],
                )
            }
            _ => (model, vec![]),
        },

        Event::ApproachDue(id) => match model.item_mut(id) {
            Some(item) if item.status == Status::Classified => {
                item.position = POSITION_BIN_EDGE;
                (
                    model,
                    vec![schedule(timeline.drop_after(), Event::DropDue(id))],
                )
            }
            _ => (model, vec![]),
        },

        Event::DropDue(id) => {
            let category = match model.item_mut(id) {
                Some(item) if item.status == Status::Classified => {
                    item.status = Status::Dropping;
                    item.category
                }
                _ => None,
            };
            match category {
                Some(category) => {
                    let highlight = HighlightId(model.next_highlight);
                    model.next_highlight += 1;
                    model.highlights.push(Highlight {
                        id: highlight,
                        category,
                    });
                    (
                        model,
                        vec![
                            schedule(
                                timeline.highlight_for(),
                                Event::HighlightExpired(highlight),
                            ),
                            schedule(timeline.settle_after(), Event::SettleDue(id)),
                        ],
                    )
                }
                None => (model, vec![]),
            }
        }

        Event::HighlightExpired(highlight) => {
            model.highlights.retain(|h| h.id != highlight);
            (model, vec![])
        }

        Event::SettleDue(id) => {
            let category = match model.item(id) {
                Some(item) if item.status == Status::Dropping => item.category,
                _ => None,
            };
            if let Some(category) = category {
                model.counters.increment(category);
                model.items.retain(|item| item.id != id);
            }
            (model, vec![])
        }
    }
}
