// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod validation;

use anyhow::{Context, Result, anyhow, bail};
use openhire_app::{
    AppSetting, ApplicationId, ApplicationRecord, ApplicationStatus, EmploymentType, JobListing,
    JobListingId, JobPosting, JobPostingId, SettingKey, SettingValue, ShiftKind, UserRole,
    parse_lines,
};
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};
use validation::{format_date, format_time, parse_required_date, parse_required_time};

pub const APP_NAME: &str = "openhire";

const REQUIRED_SCHEMA: &[(&str, &[&str])] = &[
    (
        "job_listings",
        &[
            "id",
            "title",
            "company",
            "location",
            "employment_type",
            "salary_range",
            "rating",
            "description",
            "requirements",
            "company_about",
            "posted_on",
            "featured",
            "hero_slug",
            "created_at",
            "updated_at",
        ],
    ),
    (
        "applications",
        &[
            "id",
            "job_title",
            "company",
            "location",
            "first_name",
            "last_name",
            "address_line_1",
            "address_line_2",
            "city",
            "state",
            "zip_code",
            "mobile",
            "email",
            "message",
            "resume_file_name",
            "submitted_on",
            "status",
            "created_at",
            "updated_at",
        ],
    ),
    (
        "postings",
        &[
            "id",
            "company_name",
            "street_address",
            "city",
            "state",
            "zip_code",
            "supervisor",
            "job_title",
            "employment_type",
            "summary",
            "responsibilities",
            "skills",
            "required_education",
            "required_certifications",
            "shift",
            "start_time",
            "end_time",
            "dress_code",
            "budget",
            "created_at",
            "updated_at",
        ],
    ),
    ("settings", &["key", "value", "updated_at"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RequiredIndex {
    name: &'static str,
    create_sql: &'static str,
}

const REQUIRED_INDEXES: &[RequiredIndex] = &[
    RequiredIndex {
        name: "idx_job_listings_posted_on",
        create_sql: "CREATE INDEX IF NOT EXISTS idx_job_listings_posted_on ON job_listings (posted_on);",
    },
    RequiredIndex {
        name: "idx_job_listings_featured",
        create_sql: "CREATE INDEX IF NOT EXISTS idx_job_listings_featured ON job_listings (featured);",
    },
    RequiredIndex {
        name: "idx_applications_submitted_on",
        create_sql: "CREATE INDEX IF NOT EXISTS idx_applications_submitted_on ON applications (submitted_on);",
    },
    RequiredIndex {
        name: "idx_applications_status",
        create_sql: "CREATE INDEX IF NOT EXISTS idx_applications_status ON applications (status);",
    },
    RequiredIndex {
        name: "idx_postings_created_at",
        create_sql: "CREATE INDEX IF NOT EXISTS idx_postings_created_at ON postings (created_at);",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct NewJobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub salary_range: String,
    pub rating: f64,
    pub description: String,
    pub requirements: Vec<String>,
    pub company_about: String,
    pub posted_on: Date,
    pub featured: bool,
    pub hero_slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub first_name: String,
    pub last_name: String,
    pub address_line_1: String,
    pub address_line_2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub mobile: String,
    pub email: String,
    pub message: String,
    pub resume_file_name: String,
    pub submitted_on: Date,
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPosting {
    pub company_name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub supervisor: String,
    pub job_title: String,
    pub employment_type: EmploymentType,
    pub summary: String,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
    pub required_education: String,
    pub required_certifications: Vec<String>,
    pub shift: ShiftKind,
    pub start_time: Time,
    pub end_time: Time,
    pub dress_code: Vec<String>,
    pub budget: String,
}

struct DemoJob {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    salary_range: &'static str,
    rating: f64,
    description: &'static str,
    posted_on: (i32, Month, u8),
    featured: bool,
    hero_slug: &'static str,
}

const DEMO_JOBS: [DemoJob; 10] = [
    DemoJob {
        title: "Software Engineer (iOS)",
        company: "TechCorp",
        location: "Kampala, UG",
        salary_range: "$70,000-100,000 USD",
        rating: 4.5,
        description: "Work on building responsive and accessible UIs for millions of users.",
        posted_on: (2025, Month::August, 31),
        featured: true,
        hero_slug: "job_banner_ios",
    },
    DemoJob {
        title: "Backend Developer",
        company: "CloudNine",
        location: "Kigali, RW",
        salary_range: "$60,000-90,000 USD",
        rating: 4.2,
        description: "Design and operate the APIs behind our hiring marketplace.",
        posted_on: (2025, Month::August, 30),
        featured: false,
        hero_slug: "job_banner_backend",
    },
    DemoJob {
        title: "UI/UX Designer",
        company: "Creative Labs",
        location: "Bujumbura, BI",
        salary_range: "$45,000-70,000 USD",
        rating: 4.4,
        description: "Own design systems and accessibility across our product suite.",
        posted_on: (2025, Month::August, 29),
        featured: true,
        hero_slug: "job_banner_design",
    },
    DemoJob {
        title: "Data Analyst",
        company: "Insight AI",
        location: "Nairobi, KE",
        salary_range: "$50,000-75,000 USD",
        rating: 4.1,
        description: "Turn hiring-funnel data into decisions the team can act on.",
        posted_on: (2025, Month::August, 29),
        featured: false,
        hero_slug: "job_banner_data",
    },
    DemoJob {
        title: "Product Manager",
        company: "Innovate LLC",
        location: "Kampala, UG",
        salary_range: "$80,000-110,000 USD",
        rating: 4.6,
        description: "Drive roadmap and delivery for the candidate experience.",
        posted_on: (2025, Month::August, 28),
        featured: true,
        hero_slug: "job_banner_pm",
    },
    DemoJob {
        title: "QA Engineer",
        company: "QualityPro",
        location: "Dar es Salaam, TZ",
        salary_range: "$40,000-65,000 USD",
        rating: 4.0,
        description: "Build the automated test coverage that keeps releases boring.",
        posted_on: (2025, Month::August, 27),
        featured: false,
        hero_slug: "job_banner_qa",
    },
    DemoJob {
        title: "DevOps Engineer",
        company: "ShipFast",
        location: "Mbarara, UG",
        salary_range: "$65,000-95,000 USD",
        rating: 4.3,
        description: "Keep the deploy pipeline fast and the pager quiet.",
        posted_on: (2025, Month::August, 27),
        featured: false,
        hero_slug: "job_banner_devops",
    },
    DemoJob {
        title: "Support Specialist",
        company: "HelpDesk Co",
        location: "Goma, DRC",
        salary_range: "$30,000-45,000 USD",
        rating: 3.9,
        description: "Be the first responder for employers and candidates alike.",
        posted_on: (2025, Month::August, 26),
        featured: false,
        hero_slug: "job_banner_support",
    },
    DemoJob {
        title: "Frontend Developer",
        company: "PixelWorks",
        location: "Bukavu, DRC",
        salary_range: "$55,000-80,000 USD",
        rating: 4.2,
        description: "Ship polished, accessible interfaces for the job board.",
        posted_on: (2025, Month::August, 25),
        featured: false,
        hero_slug: "job_banner_frontend",
    },
    DemoJob {
        title: "Solutions Architect",
        company: "CloudBridge",
        location: "Arusha, TZ",
        salary_range: "$90,000-120,000 USD",
        rating: 4.5,
        description: "Design integrations between employers and our platform.",
        posted_on: (2025, Month::August, 24),
        featured: false,
        hero_slug: "job_banner_arch",
    },
];

const DEMO_REQUIREMENTS: [&str; 3] = [
    "3+ years relevant experience",
    "Strong communication skills",
    "Ability to ship features end-to-end",
];

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let printable = path.to_string_lossy().to_string();
        validate_db_path(&printable)?;
        let conn = Connection::open(path)
            .with_context(|| format!("open database at {}", path.display()))?;
        configure_connection(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory database")?;
        configure_connection(&conn)?;
        Ok(Self { conn })
    }

    pub fn raw_connection(&self) -> &Connection {
        &self.conn
    }

    pub fn bootstrap(&self) -> Result<()> {
        if has_user_tables(&self.conn)? {
            validate_schema(&self.conn)?;
        } else {
            self.conn
                .execute_batch(include_str!("sql/schema.sql"))
                .context("create schema")?;
        }

        ensure_required_indexes(&self.conn)?;
        Ok(())
    }

    pub fn create_job_listing(&self, listing: &NewJobListing) -> Result<JobListingId> {
        let now = now_rfc3339()?;
        self.conn
            .execute(
                "
                INSERT INTO job_listings (
                  title, company, location, employment_type, salary_range,
                  rating, description, requirements, company_about, posted_on,
                  featured, hero_slug, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ",
                params![
                    listing.title,
                    listing.company,
                    listing.location,
                    listing.employment_type.as_str(),
                    listing.salary_range,
                    listing.rating,
                    listing.description,
                    listing.requirements.join("\n"),
                    listing.company_about,
                    format_date(listing.posted_on),
                    listing.featured,
                    listing.hero_slug,
                    now,
                    now,
                ],
            )
            .context("insert job listing")?;

        Ok(JobListingId::new(self.conn.last_insert_rowid()))
    }

    pub fn get_job_listing(&self, listing_id: JobListingId) -> Result<JobListing> {
        self.conn
            .query_row(
                &format!("{JOB_LISTING_SELECT} WHERE id = ?"),
                params![listing_id.get()],
                map_job_listing_row,
            )
            .with_context(|| format!("load job listing {}", listing_id.get()))
    }

    /// Listings newest-first by posted date, id as the deterministic
    /// tiebreaker.
    pub fn list_job_listings(&self) -> Result<Vec<JobListing>> {
        let sql = format!("{JOB_LISTING_SELECT} ORDER BY posted_on DESC, id ASC");
        let mut stmt = self.conn.prepare(&sql).context("prepare listings query")?;
        let rows = stmt
            .query_map([], map_job_listing_row)
            .context("query job listings")?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .context("collect job listings")
    }

    pub fn list_featured_job_listings(&self) -> Result<Vec<JobListing>> {
        let sql =
            format!("{JOB_LISTING_SELECT} WHERE featured = 1 ORDER BY posted_on DESC, id ASC");
        let mut stmt = self.conn.prepare(&sql).context("prepare featured query")?;
        let rows = stmt
            .query_map([], map_job_listing_row)
            .context("query featured job listings")?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .context("collect featured job listings")
    }

    pub fn create_application(&self, application: &NewApplication) -> Result<ApplicationId> {
        let now = now_rfc3339()?;
        self.conn
            .execute(
                "
                INSERT INTO applications (
                  job_title, company, location, first_name, last_name,
                  address_line_1, address_line_2, city, state, zip_code,
                  mobile, email, message, resume_file_name, submitted_on,
                  status, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ",
                params![
                    application.job_title,
                    application.company,
                    application.location,
                    application.first_name,
                    application.last_name,
                    application.address_line_1,
                    application.address_line_2,
                    application.city,
                    application.state,
                    application.zip_code,
                    application.mobile,
                    application.email,
                    application.message,
                    application.resume_file_name,
                    format_date(application.submitted_on),
                    application.status.as_str(),
                    now,
                    now,
                ],
            )
            .context("insert application")?;

        Ok(ApplicationId::new(self.conn.last_insert_rowid()))
    }

    pub fn get_application(&self, application_id: ApplicationId) -> Result<ApplicationRecord> {
        self.conn
            .query_row(
                &format!("{APPLICATION_SELECT} WHERE id = ?"),
                params![application_id.get()],
                map_application_row,
            )
            .with_context(|| format!("load application {}", application_id.get()))
    }

    /// Applications newest-first by submission date.
    pub fn list_applications(&self) -> Result<Vec<ApplicationRecord>> {
        let sql = format!("{APPLICATION_SELECT} ORDER BY submitted_on DESC, id ASC");
        let mut stmt = self
            .conn
            .prepare(&sql)
            .context("prepare applications query")?;
        let rows = stmt
            .query_map([], map_application_row)
            .context("query applications")?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .context("collect applications")
    }

    pub fn create_posting(&self, posting: &NewPosting) -> Result<JobPostingId> {
        let now = now_rfc3339()?;
        self.conn
            .execute(
                "
                INSERT INTO postings (
                  company_name, street_address, city, state, zip_code,
                  supervisor, job_title, employment_type, summary,
                  responsibilities, skills, required_education,
                  required_certifications, shift, start_time, end_time,
                  dress_code, budget, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ",
                params![
                    posting.company_name,
                    posting.street_address,
                    posting.city,
                    posting.state,
                    posting.zip_code,
                    posting.supervisor,
                    posting.job_title,
                    posting.employment_type.as_str(),
                    posting.summary,
                    posting.responsibilities.join("\n"),
                    posting.skills.join("\n"),
                    posting.required_education,
                    posting.required_certifications.join("\n"),
                    posting.shift.as_str(),
                    format_time(posting.start_time),
                    format_time(posting.end_time),
                    posting.dress_code.join("\n"),
                    posting.budget,
                    now,
                    now,
                ],
            )
            .context("insert posting")?;

        Ok(JobPostingId::new(self.conn.last_insert_rowid()))
    }

    pub fn list_postings(&self) -> Result<Vec<JobPosting>> {
        let sql = format!("{POSTING_SELECT} ORDER BY created_at DESC, id ASC");
        let mut stmt = self.conn.prepare(&sql).context("prepare postings query")?;
        let rows = stmt
            .query_map([], map_posting_row)
            .context("query postings")?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .context("collect postings")
    }

    fn get_setting_raw(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("load setting {key}"))
    }

    pub fn get_setting(&self, key: SettingKey) -> Result<Option<SettingValue>> {
        let Some(raw) = self.get_setting_raw(key.as_str())? else {
            return Ok(None);
        };
        let value = SettingValue::parse_for_key(key, &raw).ok_or_else(|| {
            anyhow!(
                "setting `{}` holds unusable value {raw:?}; clear or correct it",
                key.as_str()
            )
        })?;
        Ok(Some(value))
    }

    pub fn put_setting(&self, key: SettingKey, value: SettingValue) -> Result<()> {
        let storage = value.to_storage(key).ok_or_else(|| {
            anyhow!(
                "setting `{}` expects a {:?} value",
                key.as_str(),
                key.expected_value_kind()
            )
        })?;
        let now = now_rfc3339()?;
        self.conn
            .execute(
                "
                INSERT INTO settings (key, value, updated_at)
                VALUES (?, ?, ?)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
                ",
                params![key.as_str(), storage, now],
            )
            .with_context(|| format!("store setting {}", key.as_str()))?;
        Ok(())
    }

    pub fn list_settings(&self) -> Result<Vec<AppSetting>> {
        let mut settings = Vec::with_capacity(SettingKey::ALL.len());
        for key in SettingKey::ALL {
            let value = self
                .get_setting(key)?
                .unwrap_or_else(|| default_setting_value(key));
            settings.push(AppSetting { key, value });
        }
        Ok(settings)
    }

    /// The persisted account role, if one was saved at account creation.
    pub fn get_user_role(&self) -> Result<Option<UserRole>> {
        match self.get_setting(SettingKey::UserRole)? {
            Some(SettingValue::Text(value)) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                let role = UserRole::parse(trimmed).ok_or_else(|| {
                    anyhow!(
                        "setting `{}` holds unknown role {trimmed:?}; sign up again to reset it",
                        SettingKey::UserRole.as_str()
                    )
                })?;
                Ok(Some(role))
            }
            Some(SettingValue::Bool(_)) => bail!(
                "setting `{}` must be text; clear it and sign up again",
                SettingKey::UserRole.as_str()
            ),
            None => Ok(None),
        }
    }

    pub fn put_user_role(&self, role: UserRole) -> Result<()> {
        self.put_setting(
            SettingKey::UserRole,
            SettingValue::Text(role.as_str().to_owned()),
        )
    }

    /// Sign-out: removes the persisted role entirely.
    pub fn clear_user_role(&self) -> Result<()> {
        self.conn
            .execute(
                "DELETE FROM settings WHERE key = ?",
                params![SettingKey::UserRole.as_str()],
            )
            .context("clear user role")?;
        Ok(())
    }

    pub fn get_show_banners(&self) -> Result<bool> {
        match self.get_setting(SettingKey::UiShowBanners)? {
            Some(SettingValue::Bool(value)) => Ok(value),
            Some(SettingValue::Text(_)) => bail!(
                "setting `{}` must be on/off; clear or correct it",
                SettingKey::UiShowBanners.as_str()
            ),
            None => Ok(true),
        }
    }

    pub fn put_show_banners(&self, show: bool) -> Result<()> {
        self.put_setting(SettingKey::UiShowBanners, SettingValue::Bool(show))
    }

    /// Seeds the sample board used by `--demo`. Idempotent: an already
    /// populated board is left alone.
    pub fn seed_demo_data(&self) -> Result<()> {
        if !self.list_job_listings()?.is_empty() {
            return Ok(());
        }

        for job in &DEMO_JOBS {
            let (year, month, day) = job.posted_on;
            self.create_job_listing(&NewJobListing {
                title: job.title.to_owned(),
                company: job.company.to_owned(),
                location: job.location.to_owned(),
                employment_type: EmploymentType::FullTime,
                salary_range: job.salary_range.to_owned(),
                rating: job.rating,
                description: job.description.to_owned(),
                requirements: DEMO_REQUIREMENTS.iter().map(|&r| r.to_owned()).collect(),
                company_about: job.company.to_owned(),
                posted_on: Date::from_calendar_date(year, month, day)
                    .with_context(|| format!("demo posted_on for {}", job.title))?,
                featured: job.featured,
                hero_slug: job.hero_slug.to_owned(),
            })?;
        }

        self.create_application(&NewApplication {
            job_title: "iOS Engineer".to_owned(),
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
            message: "Excited to contribute to your iOS team.".to_owned(),
            resume_file_name: "JaneDoe_CV.pdf".to_owned(),
            submitted_on: Date::from_calendar_date(2025, Month::September, 6)
                .context("demo application date")?,
            status: ApplicationStatus::Reviewing,
        })?;

        self.create_application(&NewApplication {
            job_title: "Product Manager".to_owned(),
            company: "Innovate LLC".to_owned(),
            location: "Dar es Salaam, TZ".to_owned(),
            first_name: "Mike".to_owned(),
            last_name: "Kimani".to_owned(),
            address_line_1: "7 Ocean Rd".to_owned(),
            address_line_2: String::new(),
            city: "Dar es Salaam".to_owned(),
            state: "DSM".to_owned(),
            zip_code: "14111".to_owned(),
            mobile: "+255712345678".to_owned(),
            email: "mike@example.com".to_owned(),
            message: "Attached is my CV. Looking forward to an interview.".to_owned(),
            resume_file_name: "MikeK_PM.docx".to_owned(),
            submitted_on: Date::from_calendar_date(2025, Month::September, 2)
                .context("demo application date")?,
            status: ApplicationStatus::Submitted,
        })?;

        Ok(())
    }
}

const JOB_LISTING_SELECT: &str = "
    SELECT
      id, title, company, location, employment_type, salary_range,
      rating, description, requirements, company_about, posted_on,
      featured, hero_slug, created_at, updated_at
    FROM job_listings
";

const APPLICATION_SELECT: &str = "
    SELECT
      id, job_title, company, location, first_name, last_name,
      address_line_1, address_line_2, city, state, zip_code,
      mobile, email, message, resume_file_name, submitted_on,
      status, created_at, updated_at
    FROM applications
";

const POSTING_SELECT: &str = "
    SELECT
      id, company_name, street_address, city, state, zip_code,
      supervisor, job_title, employment_type, summary, responsibilities,
      skills, required_education, required_certifications, shift,
      start_time, end_time, dress_code, budget, created_at, updated_at
    FROM postings
";

fn map_job_listing_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<JobListing> {
    let employment_raw: String = row.get(4)?;
    let employment_type = EmploymentType::parse(&employment_raw).ok_or_else(|| {
        invalid_column(4, format!("unknown employment type {employment_raw}"))
    })?;

    let requirements_raw: String = row.get(8)?;
    let posted_on_raw: String = row.get(10)?;
    let created_at_raw: String = row.get(13)?;
    let updated_at_raw: String = row.get(14)?;

    Ok(JobListing {
        id: JobListingId::new(row.get(0)?),
        title: row.get(1)?,
        company: row.get(2)?,
        location: row.get(3)?,
        employment_type,
        salary_range: row.get(5)?,
        rating: row.get(6)?,
        description: row.get(7)?,
        requirements: parse_lines(&requirements_raw),
        company_about: row.get(9)?,
        posted_on: parse_required_date(&posted_on_raw)
            .map_err(|error| invalid_column(10, error.to_string()))?,
        featured: row.get(11)?,
        hero_slug: row.get(12)?,
        created_at: parse_datetime(&created_at_raw).map_err(to_sql_error)?,
        updated_at: parse_datetime(&updated_at_raw).map_err(to_sql_error)?,
    })
}

fn map_application_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ApplicationRecord> {
    let submitted_on_raw: String = row.get(15)?;
    let status_raw: String = row.get(16)?;
    let status = ApplicationStatus::parse(&status_raw)
        .ok_or_else(|| invalid_column(16, format!("unknown application status {status_raw}")))?;
    let created_at_raw: String = row.get(17)?;
    let updated_at_raw: String = row.get(18)?;

    Ok(ApplicationRecord {
        id: ApplicationId::new(row.get(0)?),
        job_title: row.get(1)?,
        company: row.get(2)?,
        location: row.get(3)?,
        first_name: row.get(4)?,
        last_name: row.get(5)?,
        address_line_1: row.get(6)?,
        address_line_2: row.get(7)?,
        city: row.get(8)?,
        state: row.get(9)?,
        zip_code: row.get(10)?,
        mobile: row.get(11)?,
        email: row.get(12)?,
        message: row.get(13)?,
        resume_file_name: row.get(14)?,
        submitted_on: parse_required_date(&submitted_on_raw)
            .map_err(|error| invalid_column(15, error.to_string()))?,
        status,
        created_at: parse_datetime(&created_at_raw).map_err(to_sql_error)?,
        updated_at: parse_datetime(&updated_at_raw).map_err(to_sql_error)?,
    })
}

fn map_posting_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<JobPosting> {
    let employment_raw: String = row.get(8)?;
    let employment_type = EmploymentType::parse(&employment_raw).ok_or_else(|| {
        invalid_column(8, format!("unknown employment type {employment_raw}"))
    })?;
    let shift_raw: String = row.get(14)?;
    let shift = ShiftKind::parse(&shift_raw)
        .ok_or_else(|| invalid_column(14, format!("unknown shift {shift_raw}")))?;

    let responsibilities_raw: String = row.get(10)?;
    let skills_raw: String = row.get(11)?;
    let certifications_raw: String = row.get(13)?;
    let start_time_raw: String = row.get(15)?;
    let end_time_raw: String = row.get(16)?;
    let dress_code_raw: String = row.get(17)?;
    let created_at_raw: String = row.get(19)?;
    let updated_at_raw: String = row.get(20)?;

    Ok(JobPosting {
        id: JobPostingId::new(row.get(0)?),
        company_name: row.get(1)?,
        street_address: row.get(2)?,
        city: row.get(3)?,
        state: row.get(4)?,
        zip_code: row.get(5)?,
        supervisor: row.get(6)?,
        job_title: row.get(7)?,
        employment_type,
        summary: row.get(9)?,
        responsibilities: parse_lines(&responsibilities_raw),
        skills: parse_lines(&skills_raw),
        required_education: row.get(12)?,
        required_certifications: parse_lines(&certifications_raw),
        shift,
        start_time: parse_required_time(&start_time_raw)
            .map_err(|error| invalid_column(15, error.to_string()))?,
        end_time: parse_required_time(&end_time_raw)
            .map_err(|error| invalid_column(16, error.to_string()))?,
        dress_code: parse_lines(&dress_code_raw),
        budget: row.get(18)?,
        created_at: parse_datetime(&created_at_raw).map_err(to_sql_error)?,
        updated_at: parse_datetime(&updated_at_raw).map_err(to_sql_error)?,
    })
}

pub fn default_db_path() -> Result<PathBuf> {
    if let Some(override_path) = env::var_os("OPENHIRE_DB_PATH") {
        return Ok(PathBuf::from(override_path));
    }

    let data_root = dirs::data_local_dir().ok_or_else(|| {
        anyhow!("cannot resolve data directory; set OPENHIRE_DB_PATH to a writable database path")
    })?;

    let app_dir = data_root.join(APP_NAME);
    fs::create_dir_all(&app_dir)
        .with_context(|| format!("create data directory {}", app_dir.display()))?;
    Ok(app_dir.join("openhire.db"))
}

pub fn validate_db_path(path: &str) -> Result<()> {
    if path.is_empty() {
        bail!("database path must not be empty");
    }
    if path == ":memory:" {
        return Ok(());
    }

    if let Some(index) = path.find("://")
        && index > 0
    {
        let scheme = &path[..index];
        if scheme.chars().all(char::is_alphabetic) {
            bail!(
                "database path {path:?} looks like a URI ({scheme}://); pass a filesystem path instead"
            );
        }
    }

    if path.starts_with("file:") {
        bail!("database path {path:?} uses file: URI syntax; pass a plain filesystem path");
    }

    if path.contains('?') {
        bail!(
            "database path {path:?} contains '?'; remove query parameters and use a plain file path"
        );
    }

    Ok(())
}

fn has_user_tables(conn: &Connection) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "
            SELECT COUNT(*)
            FROM sqlite_master
            WHERE type = 'table'
              AND name NOT LIKE 'sqlite_%'
            ",
            [],
            |row| row.get(0),
        )
        .context("count user tables")?;
    Ok(count > 0)
}

fn validate_schema(conn: &Connection) -> Result<()> {
    for (table, required_columns) in REQUIRED_SCHEMA {
        if !table_exists(conn, table)? {
            bail!(
                "database is missing required table `{table}`; use an openhire-compatible database or migrate first"
            );
        }

        let columns = table_columns(conn, table)?;
        let missing: Vec<&str> = required_columns
            .iter()
            .copied()
            .filter(|column| !columns.contains(*column))
            .collect();

        if !missing.is_empty() {
            bail!(
                "table `{table}` is missing required columns: {}; run migration before launching",
                missing.join(", ")
            );
        }
    }

    Ok(())
}

fn ensure_required_indexes(conn: &Connection) -> Result<()> {
    for index in REQUIRED_INDEXES {
        conn.execute_batch(index.create_sql)
            .with_context(|| format!("ensure required index `{}`", index.name))?;
    }

    let existing_indexes = index_names(conn)?;
    let missing = REQUIRED_INDEXES
        .iter()
        .filter(|index| !existing_indexes.contains(index.name))
        .map(|index| index.name)
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        bail!(
            "database is missing required indexes: {}; run migration before launching",
            missing.join(", ")
        );
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let exists = conn
        .query_row(
            "
            SELECT EXISTS(
              SELECT 1
              FROM sqlite_master
              WHERE type = 'table' AND name = ?
            )
            ",
            params![table],
            |row| row.get::<_, i64>(0),
        )
        .with_context(|| format!("check table existence for {table}"))?;
    Ok(exists == 1)
}

fn table_columns(conn: &Connection, table: &str) -> Result<BTreeSet<String>> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table})"))
        .with_context(|| format!("inspect columns for {table}"))?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .with_context(|| format!("query column info for {table}"))?;

    let names = rows
        .collect::<rusqlite::Result<BTreeSet<_>>>()
        .with_context(|| format!("collect columns for {table}"))?;
    Ok(names)
}

fn index_names(conn: &Connection) -> Result<BTreeSet<String>> {
    let mut stmt = conn
        .prepare(
            "
            SELECT name
            FROM sqlite_master
            WHERE type = 'index'
              AND name NOT LIKE 'sqlite_%'
            ORDER BY name ASC
            ",
        )
        .context("prepare index names query")?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .context("query index names")?;
    rows.collect::<rusqlite::Result<BTreeSet<_>>>()
        .context("collect index names")
}

fn configure_connection(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        ",
    )
    .context("configure sqlite pragmas")
}

fn default_setting_value(key: SettingKey) -> SettingValue {
    match key {
        SettingKey::UserRole => SettingValue::Text(String::new()),
        SettingKey::UiShowBanners => SettingValue::Bool(true),
    }
}

fn now_rfc3339() -> Result<String> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("format current timestamp")
}

fn parse_datetime(raw: &str) -> Result<OffsetDateTime> {
    if let Ok(value) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(value);
    }

    if let Ok(value) = PrimitiveDateTime::parse(
        raw,
        &format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    ) {
        return Ok(value.assume_utc());
    }

    if let Ok(value) = PrimitiveDateTime::parse(
        raw,
        &format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    ) {
        return Ok(value.assume_utc());
    }

    bail!("unsupported datetime format {raw:?}")
}

fn invalid_column(index: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        index,
        rusqlite::types::Type::Text,
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            message,
        )),
    )
}

fn to_sql_error(error: anyhow::Error) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            error.to_string(),
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::Store;
    use anyhow::Result;
    use openhire_app::{SettingKey, SettingValue, UserRole};

    #[test]
    fn list_settings_returns_typed_defaults() -> Result<()> {
        let store = Store::open_memory()?;
        store.bootstrap()?;

        let settings = store.list_settings()?;
        assert_eq!(settings.len(), SettingKey::ALL.len());
        assert!(settings.iter().any(|setting| {
            setting.key == SettingKey::UiShowBanners && setting.value == SettingValue::Bool(true)
        }));
        Ok(())
    }

    #[test]
    fn role_setting_round_trips_and_clears() -> Result<()> {
        let store = Store::open_memory()?;
        store.bootstrap()?;

        assert_eq!(store.get_user_role()?, None);
        store.put_user_role(UserRole::Client)?;
        assert_eq!(store.get_user_role()?, Some(UserRole::Client));

        store.clear_user_role()?;
        assert_eq!(store.get_user_role()?, None);
        Ok(())
    }
}
