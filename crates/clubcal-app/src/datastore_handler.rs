use std::sync::Arc;

use clubcal_core::error::CoreError;
use clubcal_db::store::Datastore;
use salvo::async_trait;

use crate::error::AppResult;

/// Injects the datastore serving the directory and event collaborators.
pub struct DatastoreHandler {
    pub store: Arc<dyn Datastore>,
}

#[async_trait]
impl salvo::Handler for DatastoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.store));
    }
}

/// ## Summary
/// Retrieves the datastore from the depot.
///
/// ## Errors
/// Returns an error if the datastore is not found in the depot.
pub fn get_datastore_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn Datastore>> {
    depot
        .obtain::<Arc<dyn Datastore>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Datastore not found in depot").into())
}
