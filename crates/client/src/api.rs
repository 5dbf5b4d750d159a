//! HTTP client for the archive endpoints.

use std::sync::Arc;
use std::time::Duration;

use kindred_core::listing::{sort_by_year, sort_newest_first, Dated, ListingFilter, Searchable};
use kindred_core::pin::PIN_HEADER;
use kindred_core::types::DbId;
use kindred_core::models::timeline_note::TimelineNote;
use serde::de::DeserializeOwned;

use crate::cache::CollectionCache;
use crate::error::{Cause, ClientError, Operation};
use crate::pin_gate::PinGate;
use crate::resource::{Collection, Resource};

/// Client for one Kindred server.
///
/// Lists are read through a [`CollectionCache`]; any successful write drops
/// the cached list for that collection so the next read refetches it.
pub struct KindredClient {
    client: reqwest::Client,
    base_url: String,
    cache: CollectionCache,
    pin_gate: Option<PinGate>,
}

impl KindredClient {
    /// * `base_url` - server root, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            cache: CollectionCache::new(),
            pin_gate: None,
        }
    }

    /// A client whose requests give up after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Check entered PINs locally before sending deletes.
    pub fn with_pin_gate(mut self, gate: PinGate) -> Self {
        self.pin_gate = Some(gate);
        self
    }

    pub fn cache(&self) -> &CollectionCache {
        &self.cache
    }

    /// Every row of `T`'s collection, from cache when possible.
    pub async fn list<T: Resource>(&self) -> Result<Arc<Vec<T>>, ClientError> {
        if let Some(rows) = self.cache.get::<T>().await {
            return Ok(rows);
        }
        self.refresh::<T>().await
    }

    /// Fetch `T`'s collection and replace the cached copy.
    ///
    /// If a write invalidates the collection while the fetch is in flight,
    /// the fetched list is returned but not cached.
    pub async fn refresh<T: Resource>(&self) -> Result<Arc<Vec<T>>, ClientError> {
        let generation = self.cache.generation(T::COLLECTION).await;
        let rows: Vec<T> = self
            .send(self.client.get(self.collection_url(T::COLLECTION)))
            .await
            .map_err(failed(Operation::Load, T::COLLECTION))?;
        tracing::debug!(collection = %T::COLLECTION, count = rows.len(), "Collection fetched");
        Ok(self.cache.put(generation, rows).await)
    }

    pub async fn get<T: Resource>(&self, id: DbId) -> Result<T, ClientError> {
        self.send(self.client.get(self.item_url(T::COLLECTION, id)))
            .await
            .map_err(failed(Operation::Load, T::COLLECTION))
    }

    pub async fn create<T: Resource>(&self, input: &T::Create) -> Result<T, ClientError> {
        let row: T = self
            .send(self.client.post(self.collection_url(T::COLLECTION)).json(input))
            .await
            .map_err(failed(Operation::Add, T::COLLECTION))?;
        self.cache.invalidate(T::COLLECTION).await;
        Ok(row)
    }

    pub async fn update<T: Resource>(&self, id: DbId, input: &T::Update) -> Result<T, ClientError> {
        let row: T = self
            .send(self.client.patch(self.item_url(T::COLLECTION, id)).json(input))
            .await
            .map_err(failed(Operation::Update, T::COLLECTION))?;
        self.cache.invalidate(T::COLLECTION).await;
        Ok(row)
    }

    /// Delete a row, sending `pin` as the `x-pin` header.
    ///
    /// With a [`PinGate`] configured, a PIN it rejects fails with
    /// [`Cause::PinRejected`] and no request is made.
    pub async fn delete<T: Resource>(&self, id: DbId, pin: &str) -> Result<(), ClientError> {
        let fail = failed(Operation::Delete, T::COLLECTION);

        if let Some(gate) = &self.pin_gate {
            if !gate.admits(pin) {
                return Err(fail(Cause::PinRejected));
            }
        }

        let request = self
            .client
            .delete(self.item_url(T::COLLECTION, id))
            .header(PIN_HEADER, pin);
        let response = request.send().await.map_err(|e| fail(e.into()))?;
        ensure_success(response).await.map_err(fail)?;

        self.cache.invalidate(T::COLLECTION).await;
        Ok(())
    }

    /// Rows matching `filter`, newest first.
    pub async fn browse<T>(&self, filter: &ListingFilter) -> Result<Vec<T>, ClientError>
    where
        T: Resource + Searchable + Dated,
    {
        let rows = self.list::<T>().await?;
        let mut shown = filter.apply(&rows);
        sort_newest_first(&mut shown);
        Ok(shown)
    }

    /// Timeline notes by year, oldest first. Notes sharing a year keep
    /// insertion order.
    pub async fn timeline(&self) -> Result<Vec<TimelineNote>, ClientError> {
        let mut notes = self.list::<TimelineNote>().await?.as_ref().clone();
        sort_by_year(&mut notes);
        Ok(notes)
    }

    // ---- private helpers ----

    fn collection_url(&self, collection: Collection) -> String {
        format!("{}/api/{}", self.base_url, collection.path())
    }

    fn item_url(&self, collection: Collection, id: DbId) -> String {
        format!("{}/{id}", self.collection_url(collection))
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, Cause> {
        let response = ensure_success(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Return the response unchanged on 2xx, or capture status and body.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, Cause> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(Cause::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

fn failed(operation: Operation, collection: Collection) -> impl Fn(Cause) -> ClientError {
    move |cause| {
        let err = ClientError::new(operation, collection, cause);
        tracing::warn!(error = %err, status = ?err.status(), "Archive request failed");
        err
    }
}
