use chrono::{Days, NaiveDate};
use tabiwari_domain::{ScheduleItem, TripConfig};

use crate::trip::TripBook;

/// Where an itinerary item lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Day(u32),
    Pool,
}

/// Itinerary editing: items move freely between trip days and the
/// inspiration pool.
pub struct ScheduleService;

impl ScheduleService {
    /// Adds a new item or replaces the one sharing its id, at the given
    /// placement.
    pub fn upsert_item(book: &mut TripBook, mut item: ScheduleItem, placement: Placement) {
        Self::detach(book, &item.id);
        match placement {
            Placement::Day(day_index) => {
                item.day_index = day_index;
                book.itinerary.push(item);
            }
            Placement::Pool => book.pool.push(item),
        }
    }

    /// Moves an existing item onto a day, whether it came from the pool or
    /// another day. Unknown ids are a no-op.
    pub fn move_to_day(book: &mut TripBook, id: &str, day_index: u32) -> bool {
        let Some(mut item) = Self::detach(book, id) else {
            return false;
        };
        item.day_index = day_index;
        book.itinerary.push(item);
        true
    }

    /// Parks an existing item in the inspiration pool.
    pub fn move_to_pool(book: &mut TripBook, id: &str) -> bool {
        let Some(item) = Self::detach(book, id) else {
            return false;
        };
        book.pool.push(item);
        true
    }

    pub fn remove_item(book: &mut TripBook, id: &str) -> bool {
        Self::detach(book, id).is_some()
    }

    fn detach(book: &mut TripBook, id: &str) -> Option<ScheduleItem> {
        if let Some(pos) = book.itinerary.iter().position(|item| item.id == id) {
            return Some(book.itinerary.remove(pos));
        }
        if let Some(pos) = book.pool.iter().position(|item| item.id == id) {
            return Some(book.pool.remove(pos));
        }
        None
    }

    /// Items scheduled on `day_index`, in time order.
    pub fn items_for_day(book: &TripBook, day_index: u32) -> Vec<&ScheduleItem> {
        let mut items: Vec<&ScheduleItem> = book
            .itinerary
            .iter()
            .filter(|item| item.day_index == day_index)
            .collect();
        items.sort_by(|a, b| a.time.cmp(&b.time).then_with(|| a.id.cmp(&b.id)));
        items
    }

    /// Concrete dates for every trip day.
    pub fn day_dates(config: &TripConfig) -> Vec<NaiveDate> {
        (0..config.duration_days)
            .map(|offset| {
                config
                    .start_date
                    .checked_add_days(Days::new(u64::from(offset)))
                    .unwrap_or(config.start_date)
            })
            .collect()
    }

    /// Days until departure; zero once the trip has started.
    pub fn countdown_days(config: &TripConfig, today: NaiveDate) -> u32 {
        let days = (config.start_date - today).num_days();
        u32::try_from(days).unwrap_or(0)
    }
}
