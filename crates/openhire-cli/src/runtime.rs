// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use openhire_app::{
    ApplicationFormInput, ApplicationRecord, ApplicationStatus, JobListing, JobPostFormInput,
    SignInFormInput, UserRole,
};
use openhire_store::validation::format_time;
use openhire_store::{NewApplication, NewPosting, Store};
use openhire_submit::{
    AddressPayload, ApplicantPayload, ApplicationPayload, CredentialsPayload, DescriptionPayload,
    HoursPayload, PositionPayload, PostingPayload, Sink,
};
use openhire_tui::{
    AppRuntime, InternalEvent, SubmissionJob, SubmissionOutcome, SubmissionReceipt,
};
use std::sync::mpsc::Sender;
use std::thread;
use time::OffsetDateTime;

pub struct StoreRuntime<'a> {
    store: &'a Store,
    sink: Sink,
}

impl<'a> StoreRuntime<'a> {
    pub fn new(store: &'a Store, sink: Sink) -> Self {
        Self { store, sink }
    }
}

impl AppRuntime for StoreRuntime<'_> {
    fn load_job_listings(&mut self) -> Result<Vec<JobListing>> {
        self.store.list_job_listings()
    }

    fn load_featured_jobs(&mut self) -> Result<Vec<JobListing>> {
        self.store.list_featured_job_listings()
    }

    fn load_applications(&mut self) -> Result<Vec<ApplicationRecord>> {
        self.store.list_applications()
    }

    fn load_user_role(&mut self) -> Result<Option<UserRole>> {
        self.store.get_user_role()
    }

    fn save_user_role(&mut self, role: UserRole) -> Result<()> {
        self.store.put_user_role(role)
    }

    fn clear_user_role(&mut self) -> Result<()> {
        self.store.clear_user_role()
    }

    fn record_application(&mut self, form: &ApplicationFormInput) -> Result<()> {
        self.store.create_application(&new_application(form))?;
        Ok(())
    }

    fn record_posting(&mut self, form: &JobPostFormInput) -> Result<()> {
        self.store.create_posting(&new_posting(form))?;
        Ok(())
    }

    fn perform_submission(&mut self, job: &SubmissionJob) -> Result<SubmissionReceipt> {
        submit_through_sink(&self.sink, job)
    }

    /// Sink work moves to a worker thread; the result comes back through the
    /// internal event channel tagged with the request id.
    fn spawn_submission(
        &mut self,
        request_id: u64,
        job: SubmissionJob,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let sink = self.sink.clone();
        thread::spawn(move || {
            let outcome = match submit_through_sink(&sink, &job) {
                Ok(receipt) => SubmissionOutcome::Completed(receipt),
                Err(error) => SubmissionOutcome::Failed(error.to_string()),
            };
            let _ = tx.send(InternalEvent::Submission {
                request_id,
                outcome,
            });
        });
        Ok(())
    }
}

fn submit_through_sink(sink: &Sink, job: &SubmissionJob) -> Result<SubmissionReceipt> {
    let receipt = match job {
        SubmissionJob::Application(form) => sink.submit_application(&application_payload(form))?,
        SubmissionJob::Posting(form) => sink.post_job(&posting_payload(form))?,
        SubmissionJob::SignIn(form) => sink.sign_in(&credentials_payload(form))?,
    };
    Ok(SubmissionReceipt {
        confirmation: receipt.confirmation,
    })
}

fn new_application(form: &ApplicationFormInput) -> NewApplication {
    NewApplication {
        job_title: form.job_title.clone(),
        company: form.company.clone(),
        location: form.location.clone(),
        first_name: form.first_name.trim().to_owned(),
        last_name: form.last_name.trim().to_owned(),
        address_line_1: form.address_line_1.trim().to_owned(),
        address_line_2: form.address_line_2.trim().to_owned(),
        city: form.city.trim().to_owned(),
        state: form.state.trim().to_owned(),
        zip_code: form.zip_code.trim().to_owned(),
        mobile: form.mobile.trim().to_owned(),
        email: form.email.trim().to_owned(),
        message: form.message.trim().to_owned(),
        resume_file_name: form.resume_file_name.trim().to_owned(),
        submitted_on: OffsetDateTime::now_utc().date(),
        status: ApplicationStatus::Submitted,
    }
}

fn new_posting(form: &JobPostFormInput) -> NewPosting {
    NewPosting {
        company_name: form.company_name.trim().to_owned(),
        street_address: form.street_address.trim().to_owned(),
        city: form.city.trim().to_owned(),
        state: form.state.trim().to_owned(),
        zip_code: form.zip_code.trim().to_owned(),
        supervisor: form.supervisor.trim().to_owned(),
        job_title: form.job_title.trim().to_owned(),
        employment_type: form.employment_type,
        summary: form.summary.trim().to_owned(),
        responsibilities: form.responsibilities(),
        skills: form.skills(),
        required_education: form.required_education.trim().to_owned(),
        required_certifications: form.required_certifications(),
        shift: form.shift,
        start_time: form.start_time,
        end_time: form.end_time,
        dress_code: form.dress_code(),
        budget: form.budget.trim().to_owned(),
    }
}

fn application_payload(form: &ApplicationFormInput) -> ApplicationPayload {
    ApplicationPayload {
        job: PositionPayload {
            title: form.job_title.clone(),
            company: form.company.clone(),
            location: form.location.clone(),
        },
        applicant: ApplicantPayload {
            first_name: form.first_name.trim().to_owned(),
            last_name: form.last_name.trim().to_owned(),
            address_1: form.address_line_1.trim().to_owned(),
            address_2: form.address_line_2.trim().to_owned(),
            city: form.city.trim().to_owned(),
            state: form.state.trim().to_owned(),
            zip_code: form.zip_code.trim().to_owned(),
            mobile: form.mobile.trim().to_owned(),
            email: form.email.trim().to_owned(),
            message: form.message.trim().to_owned(),
        },
        cv_file: if form.resume_file_name.trim().is_empty() {
            "none".to_owned()
        } else {
            form.resume_file_name.trim().to_owned()
        },
    }
}

fn posting_payload(form: &JobPostFormInput) -> PostingPayload {
    PostingPayload {
        company_name: form.company_name.trim().to_owned(),
        address: AddressPayload {
            street: form.street_address.trim().to_owned(),
            city: form.city.trim().to_owned(),
            state: form.state.trim().to_owned(),
            zip: form.zip_code.trim().to_owned(),
        },
        supervisor: form.supervisor.trim().to_owned(),
        job_title: form.job_title.trim().to_owned(),
        job_type: form.employment_type.label().to_owned(),
        description: DescriptionPayload {
            summary: form.summary.trim().to_owned(),
            responsibilities: form.responsibilities(),
            skills: form.skills(),
            required_education: form.required_education.trim().to_owned(),
            required_certifications: form.required_certifications(),
        },
        shift: form.shift.label().to_owned(),
        hours: HoursPayload {
            start: format_time(form.start_time),
            end: format_time(form.end_time),
        },
        dress_code_ppe: form.dress_code(),
        budget: form.budget.trim().to_owned(),
    }
}

fn credentials_payload(form: &SignInFormInput) -> CredentialsPayload {
    CredentialsPayload {
        email: form.email.trim().to_owned(),
        password: form.password.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreRuntime, application_payload, posting_payload};
    use anyhow::Result;
    use openhire_app::{ApplicationFormInput, EmploymentType, JobPostFormInput, ShiftKind};
    use openhire_store::Store;
    use openhire_submit::{Sink, SimulatedSink};
    use openhire_tui::{AppRuntime, SubmissionJob};
    use std::time::Duration;
    use time::macros::time;

    fn simulated_sink() -> Sink {
        Sink::Simulated(SimulatedSink::new(Duration::from_millis(5)).expect("sink"))
    }

    fn filled_application() -> ApplicationFormInput {
        ApplicationFormInput {
            job_title: "iOS Engineer".to_owned(),
            company: "TechCorp".to_owned(),
            location: "Kampala, UG".to_owned(),
            first_name: " Jane ".to_owned(),
            last_name: "Doe".to_owned(),
            address_line_1: "123 Main St".to_owned(),
            address_line_2: String::new(),
            city: "Kampala".to_owned(),
            state: "Central".to_owned(),
            zip_code: "00100".to_owned(),
            mobile: "+256700000000".to_owned(),
            email: "jane@example.com".to_owned(),
            message: "Excited to contribute.".to_owned(),
            resume_file_name: String::new(),
        }
    }

    #[test]
    fn record_application_persists_a_submitted_row() -> Result<()> {
        let store = Store::open_memory()?;
        store.bootstrap()?;

        let mut runtime = StoreRuntime::new(&store, simulated_sink());
        runtime.record_application(&filled_application())?;

        let applications = store.list_applications()?;
        assert_eq!(applications.len(), 1);
        assert_eq!(applications[0].first_name, "Jane");
        assert_eq!(
            applications[0].status,
            openhire_app::ApplicationStatus::Submitted
        );
        Ok(())
    }

    #[test]
    fn record_posting_persists_parsed_line_fields() -> Result<()> {
        let store = Store::open_memory()?;
        store.bootstrap()?;

        let mut runtime = StoreRuntime::new(&store, simulated_sink());
        runtime.record_posting(&JobPostFormInput {
            company_name: "ShipFast".to_owned(),
            street_address: "1 Harbor Rd".to_owned(),
            city: "Mbarara".to_owned(),
            state: "Western".to_owned(),
            zip_code: "25601".to_owned(),
            job_title: "DevOps Engineer".to_owned(),
            summary: "Keep the fleet shipping.".to_owned(),
            responsibilities_text: "Ship releases\n\n Review PRs ".to_owned(),
            ..JobPostFormInput::default()
        })?;

        let postings = store.list_postings()?;
        assert_eq!(postings.len(), 1);
        assert_eq!(
            postings[0].responsibilities,
            vec!["Ship releases".to_owned(), "Review PRs".to_owned()]
        );
        Ok(())
    }

    #[test]
    fn perform_submission_confirms_through_the_sink() -> Result<()> {
        let store = Store::open_memory()?;
        store.bootstrap()?;

        let mut runtime = StoreRuntime::new(&store, simulated_sink());
        let receipt =
            runtime.perform_submission(&SubmissionJob::Application(filled_application()))?;
        assert!(receipt.confirmation.contains("iOS Engineer"));
        assert!(receipt.confirmation.contains("TechCorp"));
        Ok(())
    }

    #[test]
    fn application_payload_trims_and_defaults_cv_name() {
        let payload = application_payload(&filled_application());
        assert_eq!(payload.applicant.first_name, "Jane");
        assert_eq!(payload.cv_file, "none");
    }

    #[test]
    fn posting_payload_uses_display_labels_and_clock_times() {
        let payload = posting_payload(&JobPostFormInput {
            company_name: "ShipFast".to_owned(),
            job_title: "DevOps Engineer".to_owned(),
            summary: "Keep shipping.".to_owned(),
            employment_type: EmploymentType::Contract,
            shift: ShiftKind::Second,
            start_time: time!(14:00),
            end_time: time!(22:00),
            dress_code_text: "Hard hat\nSafety boots".to_owned(),
            ..JobPostFormInput::default()
        });

        assert_eq!(payload.job_type, "Contract");
        assert_eq!(payload.shift, "2nd");
        assert_eq!(payload.hours.start, "14:00");
        assert_eq!(payload.hours.end, "22:00");
        assert_eq!(
            payload.dress_code_ppe,
            vec!["Hard hat".to_owned(), "Safety boots".to_owned()]
        );
    }
}
