use common::session::{GameSnapshot, StateBroadcaster};

use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl StateBroadcaster for LocalBroadcaster {
    async fn publish(&self, snapshot: GameSnapshot) {
        self.shared_state.set_snapshot(snapshot);
    }
}
