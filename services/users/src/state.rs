//! Application state shared across handlers

use crate::passengers::PassengerService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub passengers: PassengerService,
}
