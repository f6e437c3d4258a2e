//! Class backend client
//!
//! A thin JSON client for the class-management service. All computation
//! (averages, attention flags) happens server-side; this client only moves
//! requests and responses.

use crate::backend::ClassApi;
use crate::backend::error::ApiError;
use crate::environment::Environment;
use crate::models::{AttentionReport, ClassReport, ClassStatistics, Student};
use log::debug;
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// User-Agent string with client version
const USER_AGENT: &str = concat!("classdash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

#[derive(Serialize)]
struct NewStudentBody<'a> {
    nome: &'a str,
}

#[derive(Serialize)]
struct GradesBody {
    notas: Vec<f64>,
}

#[derive(Serialize)]
struct AttendanceBody {
    frequencia: f64,
}

impl ApiClient {
    /// Build a client against the given environment. No request timeouts are
    /// configured; a request stays in flight until the network layer
    /// resolves or fails.
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Endpoint path for one student, with the name path-escaped.
    fn student_endpoint(name: &str) -> String {
        format!("alunos/{}", urlencoding::encode(name))
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.json().await?)
    }

    async fn post_json<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<(), ApiError> {
        let url = self.build_url(endpoint);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(body)
            .send()
            .await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }

    async fn put_json<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<(), ApiError> {
        let url = self.build_url(endpoint);
        debug!("PUT {}", url);
        let response = self
            .client
            .put(&url)
            .header("User-Agent", USER_AGENT)
            .json(body)
            .send()
            .await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }

    async fn delete_request(&self, endpoint: &str) -> Result<(), ApiError> {
        let url = self.build_url(endpoint);
        debug!("DELETE {}", url);
        let response = self
            .client
            .delete(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ClassApi for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.get_json("alunos").await
    }

    async fn get_student(&self, name: &str) -> Result<Student, ApiError> {
        self.get_json(&Self::student_endpoint(name)).await
    }

    async fn class_statistics(&self) -> Result<ClassStatistics, ApiError> {
        self.get_json("estatisticas/media-turma").await
    }

    async fn attention_report(&self) -> Result<AttentionReport, ApiError> {
        self.get_json("estatisticas/alunos-atencao").await
    }

    async fn class_report(&self) -> Result<ClassReport, ApiError> {
        self.get_json("relatorio-completo").await
    }

    async fn add_student(&self, name: &str) -> Result<(), ApiError> {
        self.post_json("alunos", &NewStudentBody { nome: name }).await
    }

    async fn remove_student(&self, name: &str) -> Result<(), ApiError> {
        self.delete_request(&Self::student_endpoint(name)).await
    }

    async fn update_grades(&self, name: &str, grades: Vec<f64>) -> Result<(), ApiError> {
        let endpoint = format!("{}/notas", Self::student_endpoint(name));
        self.put_json(&endpoint, &GradesBody { notas: grades }).await
    }

    async fn update_attendance(&self, name: &str, attendance: f64) -> Result<(), ApiError> {
        let endpoint = format!("{}/frequencia", Self::student_endpoint(name));
        self.put_json(
            &endpoint,
            &AttendanceBody {
                frequencia: attendance,
            },
        )
        .await
    }
}
