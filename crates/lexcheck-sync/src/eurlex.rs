//! EUR-Lex SPARQL search client.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub const DEFAULT_ENDPOINT: &str = "https://eur-lex.europa.eu/sparql";
const CELEX_URL_PREFIX: &str = "https://eur-lex.europa.eu/legal-content/FR/TXT/?uri=CELEX:";
const RESULT_LIMIT: usize = 10;

#[derive(Error, Debug)]
pub enum EurLexError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A legal document returned by a title search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EurLexDocument {
    pub title: String,
    pub date: Option<String>,
    pub celex: String,
    pub url: String,
}

#[derive(Deserialize)]
struct SparqlResponse {
    results: Option<SparqlResults>,
}

#[derive(Deserialize)]
struct SparqlResults {
    #[serde(default)]
    bindings: Vec<Binding>,
}

#[derive(Deserialize)]
struct Binding {
    title: BindingValue,
    date: Option<BindingValue>,
    celex: BindingValue,
}

#[derive(Deserialize)]
struct BindingValue {
    value: String,
}

impl From<Binding> for EurLexDocument {
    fn from(binding: Binding) -> Self {
        let url = celex_url(&binding.celex.value);
        Self {
            title: binding.title.value,
            date: binding.date.map(|d| d.value),
            celex: binding.celex.value,
            url,
        }
    }
}

/// Client for the EUR-Lex SPARQL endpoint.
pub struct EurLexClient {
    client: reqwest::Client,
    endpoint: String,
}

impl EurLexClient {
    /// Create a client for the given SPARQL endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Search documents whose title contains `keyword` (case-insensitive).
    ///
    /// Returns at most ten documents. A reply without a result set is an
    /// empty list.
    pub async fn search(&self, keyword: &str) -> Result<Vec<EurLexDocument>, EurLexError> {
        let query = build_query(keyword);

        info!(endpoint = %self.endpoint, keyword = %keyword, "querying EUR-Lex");
        let resp = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/sparql-query")
            .header(reqwest::header::ACCEPT, "application/sparql-results+json")
            .body(query)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(EurLexError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().await?;
        let parsed: SparqlResponse = serde_json::from_slice(&bytes)?;
        let documents: Vec<EurLexDocument> = parsed
            .results
            .map(|r| r.bindings.into_iter().map(EurLexDocument::from).collect())
            .unwrap_or_default();
        info!(count = documents.len(), "EUR-Lex search complete");
        Ok(documents)
    }
}

/// Public EUR-Lex page for a CELEX number.
pub fn celex_url(celex: &str) -> String {
    format!("{CELEX_URL_PREFIX}{celex}")
}

/// SPARQL query selecting title, date and CELEX number of matching documents.
pub fn build_query(keyword: &str) -> String {
    let needle = escape_literal(&keyword.to_lowercase());
    format!(
        "PREFIX cdm: <http://publications.europa.eu/ontology/cdm#>\n\
         \n\
         SELECT ?title ?date ?celex WHERE {{\n  \
           ?doc a cdm:legal_resource ;\n       \
                cdm:work_title ?title ;\n       \
                cdm:work_date_document ?date ;\n       \
                cdm:work_celex_number ?celex .\n  \
           FILTER(CONTAINS(LCASE(STR(?title)), \"{needle}\"))\n\
         }}\n\
         LIMIT {RESULT_LIMIT}\n"
    )
}

/// Escape a value for a double-quoted SPARQL string literal.
fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}
