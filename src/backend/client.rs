//! KYC backend client
//!
//! JSON over HTTP against the employee endpoints of the farmer registry backend.

use crate::backend::KycBackend;
use crate::backend::credentials::CredentialProvider;
use crate::backend::error::BackendError;
use crate::consts::cli_consts::network;
use crate::models::{
    DashboardStats, EmployeeDetails, EmployeeProfile, EmployeeRecord, Farmer, KycDecision,
    RecordId, TodoBuckets,
};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, ClientBuilder, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl BackendClient {
    pub fn new(
        base_url: impl Into<String>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, BackendError> {
        let client = ClientBuilder::new()
            .connect_timeout(network::connect_timeout())
            .timeout(network::request_timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Attaches the bearer credential to a request.
    fn sign(&self, request: RequestBuilder) -> Result<RequestBuilder, BackendError> {
        Ok(request.header(AUTHORIZATION, self.credentials.authorization()?))
    }

    async fn handle_response_status(response: Response) -> Result<Response, BackendError> {
        if !response.status().is_success() {
            return Err(BackendError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, BackendError> {
        let url = self.build_url(endpoint);
        log::debug!("GET {}", url);
        let response = self.sign(self.client.get(&url))?.send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }

    async fn put_request(
        &self,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<String, BackendError> {
        let url = self.build_url(endpoint);
        log::debug!("PUT {}", url);
        let mut request = self.sign(self.client.put(&url))?;
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = Self::handle_response_status(request.send().await?).await?;
        Ok(response.text().await?)
    }

    async fn delete_request(&self, endpoint: &str) -> Result<String, BackendError> {
        let url = self.build_url(endpoint);
        log::debug!("DELETE {}", url);
        let response = self.sign(self.client.delete(&url))?.send().await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.text().await?)
    }
}

#[async_trait::async_trait]
impl KycBackend for BackendClient {
    async fn dashboard_stats(&self) -> Result<DashboardStats, BackendError> {
        self.get_request("api/employees/dashboard/stats").await
    }

    async fn assigned_farmers(&self) -> Result<Vec<Farmer>, BackendError> {
        self.get_request("api/employees/dashboard/assigned-farmers")
            .await
    }

    async fn todo_list(&self) -> Result<TodoBuckets, BackendError> {
        self.get_request("api/employees/dashboard/todo-list").await
    }

    async fn profile(&self) -> Result<EmployeeProfile, BackendError> {
        self.get_request("api/employees/dashboard/profile").await
    }

    async fn submit_kyc_decision(
        &self,
        farmer_id: &RecordId,
        decision: &KycDecision,
    ) -> Result<String, BackendError> {
        let endpoint = format!(
            "api/employees/kyc/{}/{}",
            decision.action().as_str(),
            farmer_id.path_segment()
        );
        // Only refer-back and reject carry a body.
        let body = decision.reason().map(|reason| json!({ "reason": reason }));
        self.put_request(&endpoint, body).await
    }

    async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, BackendError> {
        self.get_request("api/employees/list").await
    }

    async fn delete_employee(&self, id: &RecordId) -> Result<(), BackendError> {
        let endpoint = format!("api/employees/{}", id.path_segment());
        self.delete_request(&endpoint).await.map(|_| ())
    }

    async fn employee_details(&self, id: &RecordId) -> Result<EmployeeDetails, BackendError> {
        let endpoint = format!("api/employees/{}/details", id.path_segment());
        self.get_request(&endpoint).await
    }
}
