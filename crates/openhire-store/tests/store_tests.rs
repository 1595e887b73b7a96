// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use openhire_app::{ApplicationStatus, EmploymentType, ShiftKind};
use openhire_store::{NewApplication, NewJobListing, NewPosting, Store, validate_db_path};
use time::macros::{date, time};

fn sample_listing(title: &str, company: &str, posted_on: time::Date) -> NewJobListing {
    NewJobListing {
        title: title.to_owned(),
        company: company.to_owned(),
        location: "Kampala, UG".to_owned(),
        employment_type: EmploymentType::FullTime,
        salary_range: "$70,000-100,000 USD".to_owned(),
        rating: 4.5,
        description: "Build and ship product features.".to_owned(),
        requirements: vec![
            "3+ years relevant experience".to_owned(),
            "Strong communication skills".to_owned(),
        ],
        company_about: company.to_owned(),
        posted_on,
        featured: false,
        hero_slug: String::new(),
    }
}

fn sample_application(job_title: &str, submitted_on: time::Date) -> NewApplication {
    NewApplication {
        job_title: job_title.to_owned(),
        company: "TechCorp".to_owned(),
        location: "Kampala, UG".to_owned(),
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        address_line_1: "123 Main St".to_owned(),
        address_line_2: "Apt 5B".to_owned(),
        city: "Kampala".to_owned(),
        state: "Central".to_owned(),
        zip_code: "00100".to_owned(),
        mobile: "+256700000000".to_owned(),
        email: "jane@example.com".to_owned(),
        message: "Excited to contribute.".to_owned(),
        resume_file_name: "JaneDoe_CV.pdf".to_owned(),
        submitted_on,
        status: ApplicationStatus::Submitted,
    }
}

#[test]
fn validate_db_path_rejects_uri_forms() {
    assert!(validate_db_path("file:test.db").is_err());
    assert!(validate_db_path("https://example.com/db.sqlite").is_err());
    assert!(validate_db_path("db.sqlite?mode=ro").is_err());
    assert!(validate_db_path("/tmp/openhire.db").is_ok());
    assert!(validate_db_path(":memory:").is_ok());
}

#[test]
fn bootstrap_creates_empty_board() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;

    assert!(store.list_job_listings()?.is_empty());
    assert!(store.list_applications()?.is_empty());
    assert!(store.list_postings()?.is_empty());
    Ok(())
}

#[test]
fn bootstrap_rejects_schema_missing_required_column() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;

    store.raw_connection().execute_batch(
        "
        ALTER TABLE applications RENAME TO applications_old;
        CREATE TABLE applications (
          id INTEGER PRIMARY KEY,
          job_title TEXT NOT NULL,
          company TEXT NOT NULL,
          location TEXT NOT NULL,
          first_name TEXT NOT NULL,
          last_name TEXT NOT NULL,
          address_line_1 TEXT NOT NULL,
          address_line_2 TEXT NOT NULL DEFAULT '',
          city TEXT NOT NULL,
          state TEXT NOT NULL,
          zip_code TEXT NOT NULL,
          mobile TEXT NOT NULL,
          email TEXT NOT NULL,
          message TEXT NOT NULL DEFAULT '',
          resume_file_name TEXT NOT NULL DEFAULT '',
          submitted_on TEXT NOT NULL,
          created_at TEXT NOT NULL,
          updated_at TEXT NOT NULL
        );
        DROP TABLE applications_old;
        ",
    )?;

    let err = store
        .bootstrap()
        .expect_err("schema validation should fail");
    let message = err.to_string();
    assert!(message.contains("table `applications` is missing required columns"));
    assert!(message.contains("status"));
    Ok(())
}

#[test]
fn job_listing_round_trips_all_fields() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;

    let mut listing = sample_listing("Software Engineer (iOS)", "TechCorp", date!(2025 - 08 - 31));
    listing.featured = true;
    listing.hero_slug = "job_banner_ios".to_owned();
    let listing_id = store.create_job_listing(&listing)?;

    let loaded = store.get_job_listing(listing_id)?;
    assert_eq!(loaded.title, "Software Engineer (iOS)");
    assert_eq!(loaded.company, "TechCorp");
    assert_eq!(loaded.employment_type, EmploymentType::FullTime);
    assert_eq!(loaded.salary_range, "$70,000-100,000 USD");
    assert_eq!(loaded.rating, 4.5);
    assert_eq!(loaded.requirements.len(), 2);
    assert_eq!(loaded.requirements[0], "3+ years relevant experience");
    assert_eq!(loaded.posted_on, date!(2025 - 08 - 31));
    assert!(loaded.featured);
    assert_eq!(loaded.hero_slug, "job_banner_ios");
    Ok(())
}

#[test]
fn listings_order_newest_first_with_id_tiebreaker() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;

    store.create_job_listing(&sample_listing("Older", "A", date!(2025 - 08 - 24)))?;
    store.create_job_listing(&sample_listing("Newest", "B", date!(2025 - 08 - 31)))?;
    store.create_job_listing(&sample_listing("Tied One", "C", date!(2025 - 08 - 29)))?;
    store.create_job_listing(&sample_listing("Tied Two", "D", date!(2025 - 08 - 29)))?;

    let titles: Vec<String> = store
        .list_job_listings()?
        .into_iter()
        .map(|listing| listing.title)
        .collect();
    assert_eq!(titles, vec!["Newest", "Tied One", "Tied Two", "Older"]);
    Ok(())
}

#[test]
fn featured_listings_are_a_filtered_subset() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;

    let mut featured = sample_listing("Product Manager", "Innovate LLC", date!(2025 - 08 - 28));
    featured.featured = true;
    store.create_job_listing(&featured)?;
    store.create_job_listing(&sample_listing("QA Engineer", "QualityPro", date!(2025 - 08 - 27)))?;

    let featured_rows = store.list_featured_job_listings()?;
    assert_eq!(featured_rows.len(), 1);
    assert_eq!(featured_rows[0].title, "Product Manager");
    assert_eq!(store.list_job_listings()?.len(), 2);
    Ok(())
}

#[test]
fn application_round_trips_and_lists_newest_first() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;

    store.create_application(&sample_application("Older Role", date!(2025 - 09 - 02)))?;
    let newer_id =
        store.create_application(&sample_application("Newer Role", date!(2025 - 09 - 06)))?;

    let applications = store.list_applications()?;
    assert_eq!(applications.len(), 2);
    assert_eq!(applications[0].job_title, "Newer Role");
    assert_eq!(applications[0].id, newer_id);

    let loaded = store.get_application(newer_id)?;
    assert_eq!(loaded.applicant_name(), "Jane Doe");
    assert_eq!(loaded.address_line_2, "Apt 5B");
    assert_eq!(loaded.status, ApplicationStatus::Submitted);
    assert_eq!(loaded.submitted_on, date!(2025 - 09 - 06));
    Ok(())
}

#[test]
fn posting_round_trips_line_fields_and_times() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;

    let posting_id = store.create_posting(&NewPosting {
        company_name: "ShipFast".to_owned(),
        street_address: "1 Harbor Rd".to_owned(),
        city: "Mbarara".to_owned(),
        state: "Western".to_owned(),
        zip_code: "25601".to_owned(),
        supervisor: "A. Supervisor".to_owned(),
        job_title: "DevOps Engineer".to_owned(),
        employment_type: EmploymentType::Contract,
        summary: "Keep the fleet shipping.".to_owned(),
        responsibilities: vec!["Ship releases".to_owned(), "Review PRs".to_owned()],
        skills: vec!["Rust".to_owned()],
        required_education: "BSc or equivalent".to_owned(),
        required_certifications: Vec::new(),
        shift: ShiftKind::Second,
        start_time: time!(14:00),
        end_time: time!(22:00),
        dress_code: vec!["Hard hat".to_owned(), "Safety boots".to_owned()],
        budget: "$30/hour".to_owned(),
    })?;

    let postings = store.list_postings()?;
    assert_eq!(postings.len(), 1);
    let posting = &postings[0];
    assert_eq!(posting.id, posting_id);
    assert_eq!(posting.employment_type, EmploymentType::Contract);
    assert_eq!(posting.shift, ShiftKind::Second);
    assert_eq!(posting.start_time, time!(14:00));
    assert_eq!(posting.end_time, time!(22:00));
    assert_eq!(
        posting.responsibilities,
        vec!["Ship releases".to_owned(), "Review PRs".to_owned()]
    );
    assert!(posting.required_certifications.is_empty());
    assert_eq!(
        posting.dress_code,
        vec!["Hard hat".to_owned(), "Safety boots".to_owned()]
    );
    Ok(())
}

#[test]
fn demo_seed_is_deterministic_and_idempotent() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;

    store.seed_demo_data()?;
    let listings = store.list_job_listings()?;
    assert_eq!(listings.len(), 10);
    assert_eq!(listings[0].title, "Software Engineer (iOS)");
    assert_eq!(store.list_featured_job_listings()?.len(), 3);
    assert_eq!(store.list_applications()?.len(), 2);

    store.seed_demo_data()?;
    assert_eq!(store.list_job_listings()?.len(), 10);
    assert_eq!(store.list_applications()?.len(), 2);
    Ok(())
}

#[test]
fn open_rejects_uri_style_path() {
    let error = Store::open(std::path::Path::new("file:owned.db"))
        .err()
        .expect("uri path should be rejected");
    assert!(error.to_string().contains("file:"));
}

#[test]
fn open_on_disk_database_survives_reopen() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("openhire.db");

    {
        let store = Store::open(&path)?;
        store.bootstrap()?;
        store.create_job_listing(&sample_listing("Persisted", "DiskCo", date!(2025 - 08 - 20)))?;
    }

    let store = Store::open(&path)?;
    store.bootstrap()?;
    let listings = store.list_job_listings()?;
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].title, "Persisted");
    Ok(())
}
