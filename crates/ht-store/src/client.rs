//! HTTP client for the remote tabular record store.

use crate::{Formula, Result, StoreConfig, StoreError, StoreRecord};

use reqwest::{Client as ReqwestClient, Method};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Query options for [`StoreClient::list`].
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    filter: Option<Formula>,
    max_records: Option<u32>,
    sort: Option<(String, SortDirection)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: Formula) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn max_records(mut self, max_records: u32) -> Self {
        self.max_records = Some(max_records);
        self
    }

    pub fn sort_by(mut self, field: &str, direction: SortDirection) -> Self {
        self.sort = Some((field.to_string(), direction));
        self
    }
}

/// Page of records as returned by list, create, and update responses
#[derive(Debug, Deserialize)]
struct RecordPage {
    #[serde(default)]
    records: Vec<StoreRecord>,
}

#[derive(Serialize)]
struct CreateBody<'a, F> {
    records: Vec<CreateEntry<'a, F>>,
}

#[derive(Serialize)]
struct CreateEntry<'a, F> {
    fields: &'a F,
}

#[derive(Serialize)]
struct PatchBody<'a, F> {
    records: Vec<PatchEntry<'a, F>>,
}

#[derive(Serialize)]
struct PatchEntry<'a, F> {
    id: &'a str,
    fields: &'a F,
}

/// Client for the record store REST API.
///
/// Tables are addressed as `{api_root}/{base_id}/{Table}`. Each write is a
/// single record operation, atomic at the store; there is no batch
/// atomicity to rely on, so callers never send more than one record per
/// request.
#[derive(Debug, Clone)]
pub struct StoreClient {
    config: StoreConfig,
    http: ReqwestClient,
}

impl StoreClient {
    pub fn new(config: StoreConfig) -> Result<Self> {
        let http = ReqwestClient::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { config, http })
    }

    fn request(&self, method: Method, table: &str) -> reqwest::RequestBuilder {
        let url = format!(
            "{}/{}/{}",
            self.config.api_root, self.config.base_id, table
        );

        self.http
            .request(method, &url)
            .bearer_auth(&self.config.token)
    }

    /// Fetch records from `table`, optionally filtered, capped, and sorted
    /// by the store.
    pub async fn list(&self, table: &str, query: &ListQuery) -> Result<Vec<StoreRecord>> {
        let mut req = self.request(Method::GET, table);

        if let Some(ref filter) = query.filter {
            req = req.query(&[("filterByFormula", filter.as_str())]);
        }
        if let Some(max_records) = query.max_records {
            req = req.query(&[("maxRecords", max_records.to_string().as_str())]);
        }
        if let Some((field, direction)) = &query.sort {
            req = req.query(&[
                ("sort[0][field]", field.as_str()),
                ("sort[0][direction]", direction.as_str()),
            ]);
        }

        let page = self.execute(req).await?;
        Ok(page.records)
    }

    /// Insert one record into `table` from a serializable field map.
    pub async fn create<F: Serialize>(&self, table: &str, fields: &F) -> Result<StoreRecord> {
        let body = CreateBody {
            records: vec![CreateEntry { fields }],
        };

        let req = self.request(Method::POST, table).json(&body);
        let page = self.execute(req).await?;

        page.records.into_iter().next().ok_or_else(|| {
            StoreError::decode(format!("create into {table} returned no record"))
        })
    }

    /// Partial patch of one existing record in `table`.
    pub async fn update<F: Serialize>(
        &self,
        table: &str,
        id: &str,
        fields: &F,
    ) -> Result<StoreRecord> {
        let body = PatchBody {
            records: vec![PatchEntry { id, fields }],
        };

        let req = self.request(Method::PATCH, table).json(&body);
        let page = self.execute(req).await?;

        page.records.into_iter().next().ok_or_else(|| {
            StoreError::decode(format!("patch of {table}/{id} returned no record"))
        })
    }

    /// Send the request and funnel every failure into `StoreError`.
    ///
    /// Non-2xx statuses are surfaced uniformly: the caller cannot tell a
    /// rate limit from a schema error, per the store's failure contract.
    async fn execute(&self, req: reqwest::RequestBuilder) -> Result<RecordPage> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::api(status.as_u16(), message));
        }

        Ok(response.json::<RecordPage>().await?)
    }
}
