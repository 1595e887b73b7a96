// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, Time};

use crate::filter::Searchable;
use crate::ids::*;
use crate::selection::Identified;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Submitted,
    Reviewing,
    Interview,
    Rejected,
    Accepted,
}

impl ApplicationStatus {
    pub const ALL: [Self; 5] = [
        Self::Submitted,
        Self::Reviewing,
        Self::Interview,
        Self::Rejected,
        Self::Accepted,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Reviewing => "reviewing",
            Self::Interview => "interview",
            Self::Rejected => "rejected",
            Self::Accepted => "accepted",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "submitted" => Some(Self::Submitted),
            "reviewing" => Some(Self::Reviewing),
            "interview" => Some(Self::Interview),
            "rejected" => Some(Self::Rejected),
            "accepted" => Some(Self::Accepted),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Reviewing => "Reviewing",
            Self::Interview => "Interview",
            Self::Rejected => "Rejected",
            Self::Accepted => "Accepted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Temporary,
}

impl EmploymentType {
    pub const ALL: [Self; 5] = [
        Self::FullTime,
        Self::PartTime,
        Self::Contract,
        Self::Internship,
        Self::Temporary,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "full_time",
            Self::PartTime => "part_time",
            Self::Contract => "contract",
            Self::Internship => "internship",
            Self::Temporary => "temporary",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "full_time" => Some(Self::FullTime),
            "part_time" => Some(Self::PartTime),
            "contract" => Some(Self::Contract),
            "internship" => Some(Self::Internship),
            "temporary" => Some(Self::Temporary),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Internship => "Internship",
            Self::Temporary => "Temporary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftKind {
    First,
    Second,
    Third,
}

impl ShiftKind {
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "first" => Some(Self::First),
            "second" => Some(Self::Second),
            "third" => Some(Self::Third),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::First => "1st",
            Self::Second => "2nd",
            Self::Third => "3rd",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Candidate,
    Client,
}

impl UserRole {
    pub const ALL: [Self; 2] = [Self::Candidate, Self::Client];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Client => "client",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "candidate" => Some(Self::Candidate),
            "client" => Some(Self::Client),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Candidate => "Candidate",
            Self::Client => "Client",
        }
    }
}

/// The bottom-sheet screens; exactly one can be open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalKind {
    Profile,
    Jobs,
    Applications,
    SignIn,
    CreateAccount,
    PostJob,
}

impl ModalKind {
    pub const ALL: [Self; 6] = [
        Self::Profile,
        Self::Jobs,
        Self::Applications,
        Self::SignIn,
        Self::CreateAccount,
        Self::PostJob,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Jobs => "Jobs",
            Self::Applications => "Applications",
            Self::SignIn => "Sign In",
            Self::CreateAccount => "Create Account",
            Self::PostJob => "Post a Job",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    Home,
    CreateAccount,
    Login,
    Jobs,
    Applications,
    Profile,
    PostJob,
}

impl MenuSelection {
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::CreateAccount,
        Self::Login,
        Self::Jobs,
        Self::Applications,
        Self::Profile,
        Self::PostJob,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::CreateAccount => "Create an account",
            Self::Login => "Login",
            Self::Jobs => "Jobs",
            Self::Applications => "Applications",
            Self::Profile => "Profile",
            Self::PostJob => "Post a Job",
        }
    }

    pub const fn modal(self) -> Option<ModalKind> {
        match self {
            Self::Home => None,
            Self::CreateAccount => Some(ModalKind::CreateAccount),
            Self::Login => Some(ModalKind::SignIn),
            Self::Jobs => Some(ModalKind::Jobs),
            Self::Applications => Some(ModalKind::Applications),
            Self::Profile => Some(ModalKind::Profile),
            Self::PostJob => Some(ModalKind::PostJob),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingKey {
    UserRole,
    UiShowBanners,
}

impl SettingKey {
    pub const ALL: [Self; 2] = [Self::UserRole, Self::UiShowBanners];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserRole => "user.role",
            Self::UiShowBanners => "ui.show_banners",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user.role" => Some(Self::UserRole),
            "ui.show_banners" => Some(Self::UiShowBanners),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UserRole => "account role",
            Self::UiShowBanners => "landing banners",
        }
    }

    pub const fn expected_value_kind(self) -> SettingValueKind {
        match self {
            Self::UserRole => SettingValueKind::Text,
            Self::UiShowBanners => SettingValueKind::Bool,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingValueKind {
    Bool,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingValue {
    Bool(bool),
    Text(String),
}

impl SettingValue {
    pub fn parse_for_key(key: SettingKey, raw: &str) -> Option<Self> {
        match key.expected_value_kind() {
            SettingValueKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => Some(Self::Bool(true)),
                "0" | "false" | "off" | "no" => Some(Self::Bool(false)),
                _ => None,
            },
            SettingValueKind::Text => Some(Self::Text(raw.to_owned())),
        }
    }

    pub fn to_storage(&self, key: SettingKey) -> Option<String> {
        match (key.expected_value_kind(), self) {
            (SettingValueKind::Bool, Self::Bool(value)) => {
                Some(if *value { "true" } else { "false" }.to_owned())
            }
            (SettingValueKind::Text, Self::Text(value)) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn display(&self) -> String {
        match self {
            Self::Bool(true) => "on".to_owned(),
            Self::Bool(false) => "off".to_owned(),
            Self::Text(value) => value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSetting {
    pub key: SettingKey,
    pub value: SettingValue,
}

/// A browsable job listing. `requirements` keeps its authored line order;
/// `hero_slug` is empty when the listing has no banner asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: JobListingId,
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
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// A submitted application. `address_line_2` and `resume_file_name` are
/// empty when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
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
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl ApplicationRecord {
    pub fn applicant_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A job posting recorded through the posting form. List fields hold the
/// trimmed lines of their free-text inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobPostingId,
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
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Searchable for JobListing {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.company, &self.location]
    }
}

impl Searchable for ApplicationRecord {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.job_title, &self.company, &self.city, &self.state]
    }
}

impl Identified for JobListing {
    type Id = JobListingId;

    fn record_id(&self) -> JobListingId {
        self.id
    }
}

impl Identified for ApplicationRecord {
    type Id = ApplicationId;

    fn record_id(&self) -> ApplicationId {
        self.id
    }
}
