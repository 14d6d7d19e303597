use super::fixture::image;
use crate::config::Config;
use crate::recycling_plant::core::{transition, Event, ItemId, Model};
use crate::recycling_plant::render::{bins_line, conveyor_line};
use crate::waste_category::Category;

fn with_item(model: Model, events: impl Fn(ItemId) -> Vec<Event>) -> (ItemId, Model) {
    let config = Config::default();
    let id = ItemId::new();
    let (mut model, _) = transition(
        &config,
        model,
        Event::Submitted {
            id,
            image: image("item.jpg"),
        },
    );
    for event in events(id) {
        model = transition(&config, model, event).0;
    }
    (id, model)
}

#[test]
fn empty_belt_is_a_bare_track() {
    let model = Model::default();

    assert_eq!(conveyor_line(&model, 20), "_".repeat(20));
    assert_eq!(
        bins_line(&model, 48),
        "cardboard 0  plastic 0  glass 0"
    );
}

#[test]
fn items_are_drawn_at_their_position() {
    let (_, model) = with_item(Model::default(), |_| vec![]);
    let (_, model) = with_item(model, |id| vec![Event::TravelDue(id)]);
    let (_, model) = with_item(model, |id| {
        vec![
            Event::TravelDue(id),
            Event::ClassifyDone {
                id,
                category: Category::Glass,
            },
            Event::ApproachDue(id),
        ]
    });

    let line = conveyor_line(&model, 21);
    let chars: Vec<char> = line.chars().collect();
    assert_eq!(chars.len(), 21);
    assert_eq!(chars[0], 'o');
    assert_eq!(chars[10], 'o');
    assert_eq!(chars[19], 'G');
}

#[test]
fn dropping_items_and_lit_bins_are_marked() {
    let (_, model) = with_item(Model::default(), |id| {
        vec![
            Event::TravelDue(id),
            Event::ClassifyDone {
                id,
                category: Category::Plastic,
            },
            Event::ApproachDue(id),
            Event::DropDue(id),
        ]
    });

    assert!(conveyor_line(&model, 48).contains('v'));
    assert_eq!(bins_line(&model, 48), "cardboard 0  *plastic 0*  glass 0");
    assert_eq!(bins_line(&model, 16), "C 0  *P 0*  G 0");
}
