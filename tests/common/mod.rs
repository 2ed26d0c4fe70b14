//! Shared test infrastructure

pub mod generators;

use actix_web::web;
use polycraft_gateway::config::Config;
use polycraft_gateway::core::generators::Generators;
use polycraft_gateway::server::state::AppState;

/// Build application state over an arbitrary generator set
pub fn test_state(generators: Generators) -> web::Data<AppState> {
    web::Data::new(AppState::new(Config::default(), generators))
}

/// Generator set where every modality succeeds with fixed content
pub fn working_generators() -> Generators {
    use generators::{StubBinary, StubText};
    use std::sync::Arc;

    Generators::new(
        Arc::new(StubBinary::image()),
        Arc::new(StubBinary::audio()),
        Arc::new(StubText),
    )
}
