//! Event Details
//!
//! The three parts of the day; each invitation covers a subset.

use crate::domain::Invites;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Cerkvena,
    Civilna,
    Ohcet,
}

impl EventKind {
    pub fn is_invited(&self, invites: &Invites) -> bool {
        match self {
            EventKind::Cerkvena => invites.cerkvena,
            EventKind::Civilna => invites.civilna,
            EventKind::Ohcet => invites.ohcet,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCard {
    pub kind: EventKind,
    pub title: &'static str,
    pub time: &'static str,
    pub place: &'static str,
    pub address: &'static str,
}

/// Display order of the cards
pub const EVENTS: [EventCard; 3] = [
    EventCard {
        kind: EventKind::Cerkvena,
        title: "Cerkvena poroka",
        time: "14:00",
        place: "Cerkev Marije Pomočnice na Rakovniku",
        address: "Rakovniška ulica 6",
    },
    EventCard {
        kind: EventKind::Civilna,
        title: "Civilna poroka",
        time: "12:00",
        place: "Grad Rakovnik",
        address: "Rakovniška ulica 6",
    },
    EventCard {
        kind: EventKind::Ohcet,
        title: "Ohcet",
        time: "18:30",
        place: "Gostišče Rupnik",
        address: "Sveti Andrej 38, Škofja Loka, Slovenia",
    },
];

/// Cards the guest is invited to, in display order
pub fn visible_events(invites: &Invites) -> Vec<EventCard> {
    EVENTS.iter().filter(|e| e.kind.is_invited(invites)).copied().collect()
}
