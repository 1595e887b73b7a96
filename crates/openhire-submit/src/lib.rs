// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;
use url::Url;

/// Position context for an application submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionPayload {
    pub title: String,
    pub company: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantPayload {
    pub first_name: String,
    pub last_name: String,
    pub address_1: String,
    pub address_2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub mobile: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    pub job: PositionPayload,
    pub applicant: ApplicantPayload,
    pub cv_file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionPayload {
    pub summary: String,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
    pub required_education: String,
    pub required_certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoursPayload {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingPayload {
    pub company_name: String,
    pub address: AddressPayload,
    pub supervisor: String,
    pub job_title: String,
    pub job_type: String,
    pub description: DescriptionPayload,
    pub shift: String,
    pub hours: HoursPayload,
    #[serde(rename = "dressCodePPE")]
    pub dress_code_ppe: Vec<String>,
    pub budget: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsPayload {
    pub email: String,
    pub password: String,
}

/// The sink's acknowledgement. Surfaced to the user exactly once per
/// submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub confirmation: String,
}

/// Stand-in for a backend: waits a fixed delay on the calling thread and
/// then succeeds. The delay is validated up front; zero would silently turn
/// the sink into a synchronous no-op and is treated as misconfiguration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedSink {
    delay: Duration,
}

impl SimulatedSink {
    pub fn new(delay: Duration) -> Result<Self> {
        if delay.is_zero() {
            bail!("simulated submit delay must be positive, got {delay:?}");
        }
        Ok(Self { delay })
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn submit_application(&self, payload: &ApplicationPayload) -> Result<Receipt> {
        thread::sleep(self.delay);
        Ok(Receipt {
            confirmation: format!(
                "We've recorded your application for {} at {}.",
                payload.job.title, payload.job.company
            ),
        })
    }

    pub fn post_job(&self, payload: &PostingPayload) -> Result<Receipt> {
        thread::sleep(self.delay);
        Ok(Receipt {
            confirmation: format!(
                "\"{}\" at {} has been posted.",
                payload.job_title, payload.company_name
            ),
        })
    }

    pub fn sign_in(&self, payload: &CredentialsPayload) -> Result<Receipt> {
        thread::sleep(self.delay);
        Ok(Receipt {
            confirmation: format!("Signed in as {}.", payload.email),
        })
    }
}

/// HTTP sink posting the same payloads to a real backend.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("submit.base_url must not be empty");
        }
        Url::parse(&base_url)
            .with_context(|| format!("submit.base_url {base_url:?} is not a valid URL"))?;
        if timeout.is_zero() {
            bail!("submit.timeout must be positive");
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn submit_application(&self, payload: &ApplicationPayload) -> Result<Receipt> {
        self.post("applications", payload, || {
            format!(
                "We've recorded your application for {} at {}.",
                payload.job.title, payload.job.company
            )
        })
    }

    pub fn post_job(&self, payload: &PostingPayload) -> Result<Receipt> {
        self.post("postings", payload, || {
            format!(
                "\"{}\" at {} has been posted.",
                payload.job_title, payload.company_name
            )
        })
    }

    pub fn sign_in(&self, payload: &CredentialsPayload) -> Result<Receipt> {
        self.post("sessions", payload, || {
            format!("Signed in as {}.", payload.email)
        })
    }

    fn post<T: Serialize>(
        &self,
        endpoint: &str,
        payload: &T,
        default_confirmation: impl FnOnce() -> String,
    ) -> Result<Receipt> {
        let response = self
            .http
            .post(format!("{}/{endpoint}", self.base_url))
            .json(payload)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        let body = response.text().unwrap_or_default();
        let confirmation = serde_json::from_str::<ReceiptEnvelope>(&body)
            .ok()
            .and_then(|envelope| envelope.confirmation)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(default_confirmation);
        Ok(Receipt { confirmation })
    }
}

/// Either sink behind one call surface; the config decides which.
#[derive(Debug, Clone)]
pub enum Sink {
    Simulated(SimulatedSink),
    Http(Client),
}

impl Sink {
    pub fn submit_application(&self, payload: &ApplicationPayload) -> Result<Receipt> {
        match self {
            Self::Simulated(sink) => sink.submit_application(payload),
            Self::Http(client) => client.submit_application(payload),
        }
    }

    pub fn post_job(&self, payload: &PostingPayload) -> Result<Receipt> {
        match self {
            Self::Simulated(sink) => sink.post_job(payload),
            Self::Http(client) => client.post_job(payload),
        }
    }

    pub fn sign_in(&self, payload: &CredentialsPayload) -> Result<Receipt> {
        match self {
            Self::Simulated(sink) => sink.sign_in(payload),
            Self::Http(client) => client.sign_in(payload),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct ReceiptEnvelope {
    confirmation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Message(String),
    Detailed { message: String },
}

impl ErrorBody {
    fn message(&self) -> &str {
        match self {
            Self::Message(message) => message,
            Self::Detailed { message } => message,
        }
    }
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!(
        "cannot reach {base_url} -- check [submit].base_url and that the service is up ({error})"
    )
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(error) = parsed.error
        && !error.message().is_empty()
    {
        return anyhow!("server error ({}): {}", status.as_u16(), error.message());
    }

    if body.len() < 100 && !body.contains('{') && !body.trim().is_empty() {
        return anyhow!("server error ({}): {}", status.as_u16(), body.trim());
    }

    anyhow!("server returned {}", status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::{
        AddressPayload, ApplicantPayload, ApplicationPayload, DescriptionPayload, HoursPayload,
        PositionPayload, PostingPayload, SimulatedSink, clean_error_response,
    };
    use reqwest::StatusCode;
    use std::time::{Duration, Instant};

    fn sample_application_payload() -> ApplicationPayload {
        ApplicationPayload {
            job: PositionPayload {
                title: "iOS Engineer".to_owned(),
                company: "TechCorp".to_owned(),
                location: "Kampala, UG".to_owned(),
            },
            applicant: ApplicantPayload {
                first_name: "Jane".to_owned(),
                last_name: "Doe".to_owned(),
                address_1: "123 Main St".to_owned(),
                address_2: "Apt 5B".to_owned(),
                city: "Kampala".to_owned(),
                state: "Central".to_owned(),
                zip_code: "00100".to_owned(),
                mobile: "+256700000000".to_owned(),
                email: "jane@example.com".to_owned(),
                message: "Excited to contribute.".to_owned(),
            },
            cv_file: "JaneDoe_CV.pdf".to_owned(),
        }
    }

    #[test]
    fn application_payload_serializes_with_camel_case_keys() {
        let payload = sample_application_payload();
        let json = serde_json::to_value(&payload).expect("serialize payload");
        assert_eq!(json["job"]["title"], "iOS Engineer");
        assert_eq!(json["applicant"]["firstName"], "Jane");
        assert_eq!(json["applicant"]["zipCode"], "00100");
        assert_eq!(json["cvFile"], "JaneDoe_CV.pdf");
    }

    #[test]
    fn posting_payload_serializes_nested_sections() {
        let payload = PostingPayload {
            company_name: "ShipFast".to_owned(),
            address: AddressPayload {
                street: "1 Harbor Rd".to_owned(),
                city: "Mbarara".to_owned(),
                state: "Western".to_owned(),
                zip: "25601".to_owned(),
            },
            supervisor: "A. Supervisor".to_owned(),
            job_title: "DevOps Engineer".to_owned(),
            job_type: "Contract".to_owned(),
            description: DescriptionPayload {
                summary: "Keep the fleet shipping.".to_owned(),
                responsibilities: vec!["Ship releases".to_owned()],
                skills: vec!["Rust".to_owned()],
                required_education: "BSc or equivalent".to_owned(),
                required_certifications: Vec::new(),
            },
            shift: "2nd".to_owned(),
            hours: HoursPayload {
                start: "14:00".to_owned(),
                end: "22:00".to_owned(),
            },
            dress_code_ppe: vec!["Hard hat".to_owned()],
            budget: "$30/hour".to_owned(),
        };

        let json = serde_json::to_value(&payload).expect("serialize payload");
        assert_eq!(json["companyName"], "ShipFast");
        assert_eq!(json["address"]["zip"], "25601");
        assert_eq!(json["description"]["requiredEducation"], "BSc or equivalent");
        assert_eq!(json["hours"]["start"], "14:00");
        assert_eq!(json["dressCodePPE"][0], "Hard hat");
    }

    #[test]
    fn simulated_sink_rejects_zero_delay() {
        assert!(SimulatedSink::new(Duration::ZERO).is_err());
    }

    #[test]
    fn simulated_sink_waits_then_confirms() {
        let sink = SimulatedSink::new(Duration::from_millis(20)).expect("sink");
        let started = Instant::now();
        let receipt = sink
            .submit_application(&sample_application_payload())
            .expect("simulated submission succeeds");
        assert!(started.elapsed() >= Duration::from_millis(20));
        assert!(receipt.confirmation.contains("iOS Engineer"));
        assert!(receipt.confirmation.contains("TechCorp"));
    }

    #[test]
    fn error_response_prefers_structured_message() {
        let error = clean_error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"error":{"message":"zip code rejected"}}"#,
        );
        assert!(error.to_string().contains("zip code rejected"));

        let flat = clean_error_response(StatusCode::BAD_GATEWAY, r#"{"error":"upstream down"}"#);
        assert!(flat.to_string().contains("upstream down"));

        let opaque = clean_error_response(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert!(opaque.to_string().contains("500"));
    }
}
