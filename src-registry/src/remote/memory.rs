//! In-Memory Endpoint
//!
//! Stand-in for the script used in tests. Claims are
//! first-come: a claim on an item held by someone else is refused, as is a
//! release by anyone but the holder. Responses can be scripted and delayed
//! to reproduce failures and races.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;

use crate::domain::{GiftItem, RawGuest, RegistryError, RegistryResult};
use crate::rsvp::RsvpSubmission;
use super::traits::RegistryEndpoint;
use super::wire::ToggleRequest;

#[derive(Default)]
struct MemoryState {
    items: Vec<GiftItem>,
    guests: HashMap<String, RawGuest>,
    scripted_fetches: VecDeque<(usize, RegistryResult<Vec<GiftItem>>)>,
    scripted_toggles: VecDeque<RegistryResult<()>>,
    toggle_delay: usize,
    toggles: Vec<ToggleRequest>,
    rsvps: Vec<RsvpSubmission>,
    fetch_count: usize,
}

/// Shared in-memory script; clones see the same state
#[derive(Clone, Default)]
pub struct MemoryEndpoint {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryEndpoint {
    pub fn new(items: Vec<GiftItem>) -> Self {
        let endpoint = Self::default();
        endpoint.state.borrow_mut().items = items;
        endpoint
    }

    pub fn add_guest(&self, token: &str, guest: RawGuest) {
        self.state.borrow_mut().guests.insert(token.to_string(), guest);
    }

    /// Current server-side list
    pub fn items(&self) -> Vec<GiftItem> {
        self.state.borrow().items.clone()
    }

    pub fn item(&self, id: &str) -> Option<GiftItem> {
        self.state.borrow().items.iter().find(|i| i.id == id).cloned()
    }

    /// Overwrite an item server-side, as another device would
    pub fn set_item(&self, item: GiftItem) {
        let mut state = self.state.borrow_mut();
        match state.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item,
            None => state.items.push(item),
        }
    }

    /// Answer the next wishlist read with `response` after `delay` yields
    pub fn script_fetch(&self, delay: usize, response: RegistryResult<Vec<GiftItem>>) {
        self.state.borrow_mut().scripted_fetches.push_back((delay, response));
    }

    /// Answer the next toggle with `response` without touching the list
    pub fn script_toggle(&self, response: RegistryResult<()>) {
        self.state.borrow_mut().scripted_toggles.push_back(response);
    }

    /// Number of yields every toggle takes before it is applied
    pub fn set_toggle_delay(&self, delay: usize) {
        self.state.borrow_mut().toggle_delay = delay;
    }

    /// Toggle requests received so far
    pub fn toggles(&self) -> Vec<ToggleRequest> {
        self.state.borrow().toggles.clone()
    }

    pub fn rsvps(&self) -> Vec<RsvpSubmission> {
        self.state.borrow().rsvps.clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.state.borrow().fetch_count
    }

    fn apply_toggle(&self, request: &ToggleRequest) -> RegistryResult<()> {
        let mut state = self.state.borrow_mut();
        let item = state
            .items
            .iter_mut()
            .find(|i| i.id == request.id)
            .ok_or_else(|| RegistryError::Server(Some(format!("Unknown item {}", request.id))))?;

        let held_by_other = item.taken && item.taken_by != request.taken_by;
        if request.taken {
            if held_by_other {
                return Err(RegistryError::Server(Some("Item is already taken".to_string())));
            }
            item.taken = true;
            item.taken_by = request.taken_by.clone();
        } else {
            // Release carries an empty takenBy, so compare against the holder directly
            if item.taken && !request.taken_by.is_empty() && item.taken_by != request.taken_by {
                return Err(RegistryError::Server(Some("Item is held by someone else".to_string())));
            }
            item.taken = false;
            item.taken_by.clear();
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl RegistryEndpoint for MemoryEndpoint {
    async fn fetch_wishlist(&self) -> RegistryResult<Vec<GiftItem>> {
        let scripted = {
            let mut state = self.state.borrow_mut();
            state.fetch_count += 1;
            state.scripted_fetches.pop_front()
        };
        match scripted {
            Some((delay, response)) => {
                yield_times(delay).await;
                response
            }
            None => Ok(self.items()),
        }
    }

    async fn toggle(&self, request: &ToggleRequest) -> RegistryResult<()> {
        let (delay, scripted) = {
            let mut state = self.state.borrow_mut();
            state.toggles.push(request.clone());
            (state.toggle_delay, state.scripted_toggles.pop_front())
        };
        yield_times(delay).await;
        match scripted {
            Some(response) => response,
            None => self.apply_toggle(request),
        }
    }

    async fn lookup_guest(&self, token: &str) -> RegistryResult<RawGuest> {
        if token.trim().is_empty() {
            return Err(RegistryError::MissingToken);
        }
        self.state
            .borrow()
            .guests
            .get(token)
            .cloned()
            .ok_or_else(|| RegistryError::Server(Some("Unknown token".to_string())))
    }

    async fn submit_rsvp(&self, submission: &RsvpSubmission) -> RegistryResult<()> {
        self.state.borrow_mut().rsvps.push(submission.clone());
        Ok(())
    }
}

async fn yield_times(n: usize) {
    for _ in 0..n {
        tokio::task::yield_now().await;
    }
}
