pub mod orchestrator;

pub use orchestrator::{NavigationSink, Orchestrator, SurfaceState, NO_MATCH_APOLOGY};
