//! Trip content entities: members, itinerary, bookings, journal, checklists.
//!
//! These are plain data carried by the persisted trip aggregate. Derived
//! values (balances, plans, totals) never live here.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{MemberId, Money};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripMember {
    pub id: MemberId,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripConfig {
    pub trip_name: String,
    #[serde(default)]
    pub region: String,
    pub start_date: NaiveDate,
    pub duration_days: u32,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            trip_name: "Ohana Trip".to_owned(),
            region: String::new(),
            start_date: NaiveDate::default(),
            duration_days: 5,
        }
    }
}

/// Category of an itinerary entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Attraction,
    Food,
    Transport,
    Stay,
    Other,
}

/// One itinerary entry, either placed on a trip day or parked in the
/// inspiration pool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: String,
    pub day_index: u32,
    /// Wall-clock time as "HH:MM"; lexicographic order is chronological.
    pub time: String,
    pub title: String,
    pub location: String,
    pub category: ItemCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// e.g. "2.4km, 15 min walk"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_info: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingKind {
    Flight,
    Hotel,
    Car,
    Restaurant,
    Amusement,
    Ticket,
}

/// A stored booking/voucher. `details` is intentionally free-form: flights
/// carry seat and gate, hotels carry check-in dates, and so on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub kind: BookingKind,
    pub title: String,
    /// Booking reference / PNR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booked_by: Option<MemberId>,
    /// Cost in pivot-currency units; zero for award/comped bookings.
    pub cost: Money,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JournalPost {
    pub id: String,
    pub author: MemberId,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub date: NaiveDate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChecklistKind {
    Packing,
    Shopping,
}

/// Who an item is assigned to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assignee {
    Everyone,
    Member(MemberId),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub kind: ChecklistKind,
    pub title: String,
    pub assignee: Assignee,
    #[serde(default)]
    pub completed: bool,
}
