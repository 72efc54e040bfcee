// TestDependencies - mock implementations for testing
//
// Builds ServerDeps around a MockIngestor so routes and activities can be
// exercised without network access.

use std::sync::Arc;

use extraction::MockIngestor;

use super::ServerDeps;

#[derive(Default)]
pub struct TestDependencies {
    ingestor: MockIngestor,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a pre-configured mock ingestor. Keep a clone to inspect calls.
    pub fn mock_ingestor(mut self, ingestor: MockIngestor) -> Self {
        self.ingestor = ingestor;
        self
    }

    pub fn into_server_deps(self) -> ServerDeps {
        ServerDeps::new(Arc::new(self.ingestor))
    }
}
