use crate::app::{AppState, AppStateBuilder};
use crate::config::Config;
use crate::synthesis::tests::MockSynthesis;


fn state_with(mock: MockSynthesis) -> AppState {
    AppStateBuilder::new()
        .config(Config::default())
        .synthesis(Box::new(mock))
        .build()
        .unwrap()
}
