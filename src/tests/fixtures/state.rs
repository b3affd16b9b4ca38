use crate::shell::state::AppState;
use crate::tests::fixtures::stores::InMemoryStores;

pub fn make_state(stores: &InMemoryStores) -> AppState {
    AppState::new(
        stores.vehicles.clone(),
        stores.spots.clone(),
        stores.events.clone(),
        stores.verification.clone(),
    )
}
