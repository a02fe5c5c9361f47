use log::{info, warn};

use super::{
    error::{MutationError, ValidationError},
    fetcher::DataFetcher,
    helpers::{endpoint, error_message, server_detail},
    models::{Creatable, Deletable},
    notifier::Notifier,
    renderer::Page,
    transport::Transport,
    validation::{validate, Form},
};

pub const DELETE_FAILED: &str = "Failed to delete entry";

/// Submits creates and deletes, then refreshes the affected page.
///
/// Each call sends at most one mutating request, renders the page at most once
/// and notifies the user at most once. Nothing is kept between calls.
pub struct MutationHandler<'a, H: Transport, N: Notifier> {
    transport: &'a H,
    notifier: &'a N,
    fetcher: DataFetcher<'a, H>,
}

impl<'a, H: Transport, N: Notifier> MutationHandler<'a, H, N> {
    pub fn new(transport: &'a H, notifier: &'a N, api_base: &'a str) -> Self {
        Self {
            transport,
            notifier,
            fetcher: DataFetcher::new(transport, api_base),
        }
    }

    pub async fn create<T: Creatable>(
        &self,
        form: &mut Form,
        page: &mut Page,
    ) -> Result<(), MutationError> {
        /* a form that fails its schema never leaves the client */
        let body = match validate(T::SCHEMA, form).and_then(|_| T::payload(form)) {
            Ok(body) => body,
            Err(err) => return self.fail(err.into()),
        };

        let url = endpoint(self.fetcher.api_base(), T::PATH);
        let reply = match self.transport.post_json(&url, &body).await {
            Ok(reply) => reply,
            Err(err) => return self.fail(err.into()),
        };
        if !reply.is_success() {
            return self.fail(MutationError::Rejected {
                status: reply.status,
                message: error_message(&reply),
            });
        }

        info!("Created record at {}", url);
        form.reset();
        self.notifier.notify(T::CREATED_MESSAGE);
        self.fetcher.load::<T>(page).await;
        Ok(())
    }

    pub async fn delete<T: Deletable>(
        &self,
        id: i64,
        page: &mut Page,
    ) -> Result<(), MutationError> {
        if id <= 0 {
            let err = ValidationError::new("id", "must be a positive whole number");
            return self.fail(err.into());
        }
        if !self
            .notifier
            .confirm(&format!("Are you sure you want to delete entry {}?", id))
        {
            info!("Deletion of entry {} cancelled", id);
            return Ok(());
        }

        let url = endpoint(self.fetcher.api_base(), &T::item_path(id));
        let reply = match self.transport.delete(&url).await {
            Ok(reply) => reply,
            Err(err) => return self.fail(err.into()),
        };
        if reply.status != 204 {
            return self.fail(MutationError::Rejected {
                status: reply.status,
                message: server_detail(&reply.body).unwrap_or_else(|| DELETE_FAILED.to_owned()),
            });
        }

        info!("Deleted entry {}", id);
        self.fetcher.load::<T>(page).await;
        Ok(())
    }

    fn fail(&self, err: MutationError) -> Result<(), MutationError> {
        warn!("{}", err);
        self.notifier.notify(&err.to_string());
        Err(err)
    }
}
