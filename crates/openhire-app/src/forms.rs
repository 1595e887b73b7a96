// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use time::Time;
use time::macros::time;

use crate::{EmploymentType, JobListing, ShiftKind, UserRole};

/// Splits free-form text into trimmed, non-empty lines. Order and
/// duplicates are preserved; any input yields a (possibly empty) sequence.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Application,
    JobPost,
    SignIn,
    CreateAccount,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationFormInput {
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
}

impl ApplicationFormInput {
    /// Blank form pre-filled with the position being applied for.
    pub fn for_listing(listing: &JobListing) -> Self {
        Self {
            job_title: listing.title.clone(),
            company: listing.company.clone(),
            location: listing.location.clone(),
            ..Self::default()
        }
    }

    /// Submission gate: address line 2 and the resume file name are the
    /// only optional fields, and the email must at least look routable.
    pub fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.address_line_1.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.state.trim().is_empty()
            && !self.zip_code.trim().is_empty()
            && !self.mobile.trim().is_empty()
            && self.email.contains('@')
            && !self.message.trim().is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.job_title.trim().is_empty() {
            bail!("application position is missing -- open the form from a job listing");
        }
        if self.first_name.trim().is_empty() {
            bail!("first name is required -- enter a first name and retry");
        }
        if self.last_name.trim().is_empty() {
            bail!("last name is required -- enter a last name and retry");
        }
        if self.address_line_1.trim().is_empty() {
            bail!("address is required -- enter an address and retry");
        }
        if self.city.trim().is_empty() {
            bail!("city is required -- enter a city and retry");
        }
        if self.state.trim().is_empty() {
            bail!("state is required -- enter a state and retry");
        }
        if self.zip_code.trim().is_empty() {
            bail!("zip code is required -- enter a zip code and retry");
        }
        if self.mobile.trim().is_empty() {
            bail!("mobile number is required -- enter a number and retry");
        }
        if !self.email.contains('@') {
            bail!("email address must contain '@' -- fix the email and retry");
        }
        if self.message.trim().is_empty() {
            bail!("message is required -- write a short cover message and retry");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPostFormInput {
    pub company_name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub supervisor: String,
    pub job_title: String,
    pub employment_type: EmploymentType,
    pub summary: String,
    pub responsibilities_text: String,
    pub skills_text: String,
    pub required_education: String,
    pub certifications_text: String,
    pub shift: ShiftKind,
    pub start_time: Time,
    pub end_time: Time,
    pub dress_code_text: String,
    pub budget: String,
}

impl Default for JobPostFormInput {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            street_address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            supervisor: String::new(),
            job_title: String::new(),
            employment_type: EmploymentType::FullTime,
            summary: String::new(),
            responsibilities_text: String::new(),
            skills_text: String::new(),
            required_education: String::new(),
            certifications_text: String::new(),
            shift: ShiftKind::First,
            start_time: time!(9:00),
            end_time: time!(17:00),
            dress_code_text: String::new(),
            budget: String::new(),
        }
    }
}

impl JobPostFormInput {
    pub fn responsibilities(&self) -> Vec<String> {
        parse_lines(&self.responsibilities_text)
    }

    pub fn skills(&self) -> Vec<String> {
        parse_lines(&self.skills_text)
    }

    pub fn required_certifications(&self) -> Vec<String> {
        parse_lines(&self.certifications_text)
    }

    pub fn dress_code(&self) -> Vec<String> {
        parse_lines(&self.dress_code_text)
    }

    pub fn is_complete(&self) -> bool {
        !self.company_name.trim().is_empty()
            && !self.street_address.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.state.trim().is_empty()
            && !self.zip_code.trim().is_empty()
            && !self.job_title.trim().is_empty()
            && !self.summary.trim().is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.company_name.trim().is_empty() {
            bail!("company name is required -- enter a company name and retry");
        }
        if self.street_address.trim().is_empty() {
            bail!("company address is required -- enter an address and retry");
        }
        if self.city.trim().is_empty() {
            bail!("city is required -- enter a city and retry");
        }
        if self.state.trim().is_empty() {
            bail!("state is required -- enter a state and retry");
        }
        if self.zip_code.trim().is_empty() {
            bail!("zip code is required -- enter a zip code and retry");
        }
        if self.job_title.trim().is_empty() {
            bail!("job title is required -- enter a title and retry");
        }
        if self.summary.trim().is_empty() {
            bail!("job summary is required -- enter a summary and retry");
        }
        Ok(())
    }

    /// Minutes between start and end time when the range is forward;
    /// `None` for zero or backward ranges.
    pub fn work_minutes(&self) -> Option<i64> {
        let minutes = (self.end_time - self.start_time).whole_minutes();
        if minutes > 0 { Some(minutes) } else { None }
    }

    pub fn work_hours_label(&self) -> Option<String> {
        let minutes = self.work_minutes()?;
        Some(format!("Total: {}h {}m", minutes / 60, minutes % 60))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignInFormInput {
    pub email: String,
    pub password: String,
}

impl SignInFormInput {
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() {
            bail!("email is required -- enter your email and retry");
        }
        if self.password.is_empty() {
            bail!("password is required -- enter your password and retry");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateAccountFormInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Option<UserRole>,
}

impl CreateAccountFormInput {
    pub fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.password.is_empty()
            && self.role.is_some()
    }

    pub fn validate(&self) -> Result<()> {
        if self.first_name.trim().is_empty() {
            bail!("first name is required -- enter a first name and retry");
        }
        if self.last_name.trim().is_empty() {
            bail!("last name is required -- enter a last name and retry");
        }
        if self.email.trim().is_empty() {
            bail!("email is required -- enter an email and retry");
        }
        if self.password.is_empty() {
            bail!("password is required -- choose a password and retry");
        }
        if self.role.is_none() {
            bail!("account type is required -- choose Candidate or Client and retry");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPayload {
    Application(ApplicationFormInput),
    JobPost(JobPostFormInput),
    SignIn(SignInFormInput),
    CreateAccount(CreateAccountFormInput),
}

impl FormPayload {
    pub fn kind(&self) -> FormKind {
        match self {
            Self::Application(_) => FormKind::Application,
            Self::JobPost(_) => FormKind::JobPost,
            Self::SignIn(_) => FormKind::SignIn,
            Self::CreateAccount(_) => FormKind::CreateAccount,
        }
    }

    pub fn blank_for(kind: FormKind) -> Self {
        match kind {
            FormKind::Application => Self::Application(ApplicationFormInput::default()),
            FormKind::JobPost => Self::JobPost(JobPostFormInput::default()),
            FormKind::SignIn => Self::SignIn(SignInFormInput::default()),
            FormKind::CreateAccount => Self::CreateAccount(CreateAccountFormInput::default()),
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            Self::Application(form) => form.is_complete(),
            Self::JobPost(form) => form.is_complete(),
            Self::SignIn(form) => form.is_complete(),
            Self::CreateAccount(form) => form.is_complete(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Application(form) => form.validate(),
            Self::JobPost(form) => form.validate(),
            Self::SignIn(form) => form.validate(),
            Self::CreateAccount(form) => form.validate(),
        }
    }
}
