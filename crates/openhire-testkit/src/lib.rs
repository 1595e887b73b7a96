// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use openhire_app::{
    ApplicationId, ApplicationRecord, ApplicationStatus, EmploymentType, JobListing, JobListingId,
};
use std::path::PathBuf;
use time::macros::date;
use time::{Date, OffsetDateTime};

pub const BANNER_SLUGS: [&str; 3] = ["landing1", "landing2", "landing3"];

const SAMPLE_REQUIREMENTS: [&str; 3] = [
    "3+ years relevant experience",
    "Strong communication skills",
    "Ability to ship features end-to-end",
];

struct SampleJob {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    posted_on: Date,
    featured: bool,
    hero_slug: &'static str,
}

const SAMPLE_JOBS: [SampleJob; 10] = [
    SampleJob {
        title: "Software Engineer (iOS)",
        company: "TechCorp",
        location: "Kampala, UG",
        posted_on: date!(2025 - 08 - 31),
        featured: true,
        hero_slug: "job_banner_ios",
    },
    SampleJob {
        title: "Backend Developer",
        company: "CloudNine",
        location: "Kigali, RW",
        posted_on: date!(2025 - 08 - 30),
        featured: false,
        hero_slug: "job_banner_backend",
    },
    SampleJob {
        title: "UI/UX Designer",
        company: "Creative Labs",
        location: "Bujumbura, BI",
        posted_on: date!(2025 - 08 - 29),
        featured: true,
        hero_slug: "job_banner_design",
    },
    SampleJob {
        title: "Data Analyst",
        company: "Insight AI",
        location: "Nairobi, KE",
        posted_on: date!(2025 - 08 - 29),
        featured: false,
        hero_slug: "job_banner_data",
    },
    SampleJob {
        title: "Product Manager",
        company: "Innovate LLC",
        location: "Kampala, UG",
        posted_on: date!(2025 - 08 - 28),
        featured: true,
        hero_slug: "job_banner_pm",
    },
    SampleJob {
        title: "QA Engineer",
        company: "QualityPro",
        location: "Dar es Salaam, TZ",
        posted_on: date!(2025 - 08 - 27),
        featured: false,
        hero_slug: "job_banner_qa",
    },
    SampleJob {
        title: "DevOps Engineer",
        company: "ShipFast",
        location: "Mbarara, UG",
        posted_on: date!(2025 - 08 - 27),
        featured: false,
        hero_slug: "job_banner_devops",
    },
    SampleJob {
        title: "Support Specialist",
        company: "HelpDesk Co",
        location: "Goma, DRC",
        posted_on: date!(2025 - 08 - 26),
        featured: false,
        hero_slug: "job_banner_support",
    },
    SampleJob {
        title: "Frontend Developer",
        company: "PixelWorks",
        location: "Bukavu, DRC",
        posted_on: date!(2025 - 08 - 25),
        featured: false,
        hero_slug: "job_banner_frontend",
    },
    SampleJob {
        title: "Solutions Architect",
        company: "CloudBridge",
        location: "Arusha, TZ",
        posted_on: date!(2025 - 08 - 24),
        featured: false,
        hero_slug: "job_banner_arch",
    },
];

pub fn fixture_timestamp() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH
}

pub fn job_listing(
    id: i64,
    title: &str,
    company: &str,
    location: &str,
    posted_on: Date,
) -> JobListing {
    JobListing {
        id: JobListingId::new(id),
        title: title.to_owned(),
        company: company.to_owned(),
        location: location.to_owned(),
        employment_type: EmploymentType::FullTime,
        salary_range: "$70,000-100,000 USD".to_owned(),
        rating: 4.5,
        description: "Work on building responsive and accessible UIs for millions of users."
            .to_owned(),
        requirements: SAMPLE_REQUIREMENTS.iter().map(|&r| r.to_owned()).collect(),
        company_about: company.to_owned(),
        posted_on,
        featured: false,
        hero_slug: String::new(),
        created_at: fixture_timestamp(),
        updated_at: fixture_timestamp(),
    }
}

/// The ten-listing sample board, newest-first, ids 1..=10.
pub fn sample_job_listings() -> Vec<JobListing> {
    SAMPLE_JOBS
        .iter()
        .enumerate()
        .map(|(index, job)| {
            let mut listing = job_listing(
                (index + 1) as i64,
                job.title,
                job.company,
                job.location,
                job.posted_on,
            );
            listing.featured = job.featured;
            listing.hero_slug = job.hero_slug.to_owned();
            listing
        })
        .collect()
}

pub fn sample_featured_jobs() -> Vec<JobListing> {
    sample_job_listings()
        .into_iter()
        .filter(|listing| listing.featured)
        .collect()
}

pub fn application(id: i64, job_title: &str, company: &str) -> ApplicationRecord {
    ApplicationRecord {
        id: ApplicationId::new(id),
        job_title: job_title.to_owned(),
        company: company.to_owned(),
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
        message: "Excited to contribute to your iOS team.".to_owned(),
        resume_file_name: "JaneDoe_CV.pdf".to_owned(),
        submitted_on: date!(2025 - 09 - 06),
        status: ApplicationStatus::Reviewing,
        created_at: fixture_timestamp(),
        updated_at: fixture_timestamp(),
    }
}

/// The two-record sample application list, newest-first.
pub fn sample_applications() -> Vec<ApplicationRecord> {
    let jane = application(1, "iOS Engineer", "TechCorp");
    let mut mike = application(2, "Product Manager", "Innovate LLC");
    mike.location = "Dar es Salaam, TZ".to_owned();
    mike.first_name = "Mike".to_owned();
    mike.last_name = "Kimani".to_owned();
    mike.address_line_1 = "7 Ocean Rd".to_owned();
    mike.address_line_2 = String::new();
    mike.city = "Dar es Salaam".to_owned();
    mike.state = "DSM".to_owned();
    mike.zip_code = "14111".to_owned();
    mike.mobile = "+255712345678".to_owned();
    mike.email = "mike@example.com".to_owned();
    mike.message = "Attached is my CV. Looking forward to an interview.".to_owned();
    mike.resume_file_name = "MikeK_PM.docx".to_owned();
    mike.submitted_on = date!(2025 - 09 - 02);
    mike.status = ApplicationStatus::Submitted;
    vec![jane, mike]
}

pub fn temp_db_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("openhire.db");
    Ok((dir, path))
}

#[cfg(test)]
mod tests {
    use super::{BANNER_SLUGS, sample_applications, sample_featured_jobs, sample_job_listings};

    #[test]
    fn sample_board_is_deterministic() {
        let first = sample_job_listings();
        let second = sample_job_listings();
        assert_eq!(first, second);
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].title, "Software Engineer (iOS)");
    }

    #[test]
    fn featured_sample_matches_flagged_listings() {
        let featured = sample_featured_jobs();
        assert_eq!(featured.len(), 3);
        assert!(featured.iter().all(|listing| listing.featured));
    }

    #[test]
    fn sample_applications_cover_distinct_statuses() {
        let applications = sample_applications();
        assert_eq!(applications.len(), 2);
        assert_ne!(applications[0].status, applications[1].status);
    }

    #[test]
    fn banners_rotate_three_slugs() {
        assert_eq!(BANNER_SLUGS.len(), 3);
    }
}
