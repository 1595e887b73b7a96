// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow};
use openhire_submit::{
    ApplicantPayload, ApplicationPayload, Client, CredentialsPayload, PositionPayload, Sink,
    SimulatedSink,
};
use std::thread;
use std::time::Duration;
use tiny_http::{Header, Response, Server};

fn sample_payload() -> ApplicationPayload {
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
            address_2: String::new(),
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

fn json_header() -> Header {
    Header::from_bytes("Content-Type", "application/json").expect("valid content type header")
}

#[test]
fn client_rejects_bad_configuration() {
    assert!(Client::new("", Duration::from_secs(1)).is_err());
    assert!(Client::new("not a url", Duration::from_secs(1)).is_err());
    assert!(Client::new("http://localhost:8080", Duration::ZERO).is_err());
}

#[test]
fn connection_error_contains_actionable_remediation() {
    let client = Client::new("http://127.0.0.1:1", Duration::from_millis(50))
        .expect("client should initialize");

    let error = client
        .submit_application(&sample_payload())
        .expect_err("submission should fail for unreachable endpoint");
    let message = error.to_string();
    assert!(message.contains("[submit].base_url"));
}

#[test]
fn application_posts_to_applications_endpoint() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let mut request = server.recv().expect("request expected");
        assert_eq!(request.url(), "/applications");

        let mut body = String::new();
        request
            .as_reader()
            .read_to_string(&mut body)
            .expect("read request body");
        let parsed: serde_json::Value = serde_json::from_str(&body).expect("json body");
        assert_eq!(parsed["applicant"]["firstName"], "Jane");
        assert_eq!(parsed["cvFile"], "JaneDoe_CV.pdf");

        let response = Response::from_string(r#"{"confirmation":"Application received."}"#)
            .with_status_code(200)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let receipt = client.submit_application(&sample_payload())?;
    assert_eq!(receipt.confirmation, "Application received.");

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn empty_success_body_falls_back_to_default_confirmation() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        let response = Response::from_string("").with_status_code(204);
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let receipt = client.submit_application(&sample_payload())?;
    assert!(receipt.confirmation.contains("iOS Engineer"));
    assert!(receipt.confirmation.contains("TechCorp"));

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn structured_server_error_is_surfaced() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        let response =
            Response::from_string(r#"{"error":{"message":"posting quota exhausted"}}"#)
                .with_status_code(422)
                .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let error = client
        .sign_in(&CredentialsPayload {
            email: "jane@example.com".to_owned(),
            password: "secret".to_owned(),
        })
        .expect_err("422 should surface as an error");
    let message = error.to_string();
    assert!(message.contains("422"));
    assert!(message.contains("posting quota exhausted"));

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn sign_in_posts_to_sessions_endpoint() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        assert_eq!(request.url(), "/sessions");
        let response = Response::from_string(r#"{"confirmation":"Welcome back."}"#)
            .with_status_code(200)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let sink = Sink::Http(Client::new(&addr, Duration::from_secs(1))?);
    let receipt = sink.sign_in(&CredentialsPayload {
        email: "jane@example.com".to_owned(),
        password: "secret".to_owned(),
    })?;
    assert_eq!(receipt.confirmation, "Welcome back.");

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn simulated_sink_reports_the_position_applied_for() -> Result<()> {
    let sink = Sink::Simulated(SimulatedSink::new(Duration::from_millis(5))?);
    let receipt = sink.submit_application(&sample_payload())?;
    assert!(receipt.confirmation.contains("iOS Engineer"));
    Ok(())
}
