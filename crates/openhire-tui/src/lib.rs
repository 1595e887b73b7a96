// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use openhire_app::{
    AppCommand, AppMode, AppState, ApplicationFormInput, ApplicationId, ApplicationRecord,
    Carousel, CreateAccountFormInput, DetailSelector, EmploymentType, FilterableCollection,
    JobListing, JobListingId, JobPostFormInput, MenuSelection, ModalKind, ShiftKind,
    SignInFormInput, UserRole,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use time::macros::format_description;
use time::{Date, Time};

const POLL_INTERVAL: Duration = Duration::from_millis(120);
const STATUS_CLEAR_SECS: u64 = 4;
const CURSOR_MARK: &str = ">";

/// Presentation options resolved by the caller from config and store.
#[derive(Debug, Clone, PartialEq)]
pub struct UiOptions {
    pub banner_slugs: Vec<String>,
    pub show_banners: bool,
    pub banner_interval: Duration,
    pub featured_interval: Duration,
}

/// One unit of sink work. The runtime decides how the payload reaches the
/// backend; the UI only tracks the in-flight request id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionJob {
    Application(ApplicationFormInput),
    Posting(JobPostFormInput),
    SignIn(SignInFormInput),
}

impl SubmissionJob {
    const fn label(&self) -> &'static str {
        match self {
            Self::Application(_) => "application",
            Self::Posting(_) => "job post",
            Self::SignIn(_) => "sign in",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub confirmation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Completed(SubmissionReceipt),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
    Submission { request_id: u64, outcome: SubmissionOutcome },
}

pub trait AppRuntime {
    fn load_job_listings(&mut self) -> Result<Vec<JobListing>>;
    fn load_featured_jobs(&mut self) -> Result<Vec<JobListing>>;
    fn load_applications(&mut self) -> Result<Vec<ApplicationRecord>>;
    fn load_user_role(&mut self) -> Result<Option<UserRole>>;
    fn save_user_role(&mut self, role: UserRole) -> Result<()>;
    fn clear_user_role(&mut self) -> Result<()>;
    /// Persists a successfully submitted application so the Applications
    /// screen reflects it.
    fn record_application(&mut self, form: &ApplicationFormInput) -> Result<()>;
    fn record_posting(&mut self, form: &JobPostFormInput) -> Result<()>;
    /// Blocking sink call; completes exactly once per job.
    fn perform_submission(&mut self, job: &SubmissionJob) -> Result<SubmissionReceipt>;
    fn spawn_submission(
        &mut self,
        request_id: u64,
        job: SubmissionJob,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let outcome = match self.perform_submission(&job) {
            Ok(receipt) => SubmissionOutcome::Completed(receipt),
            Err(error) => SubmissionOutcome::Failed(error.to_string()),
        };
        tx.send(InternalEvent::Submission {
            request_id,
            outcome,
        })
        .map_err(|_| anyhow::anyhow!("submission event channel closed"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Secret,
    Multiline,
    EmploymentChoice,
    ShiftChoice,
    RoleChoice,
    TimePicker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FormFieldSpec {
    label: &'static str,
    kind: FieldKind,
}

const APPLICATION_FORM_FIELDS: [FormFieldSpec; 11] = [
    FormFieldSpec { label: "First name *", kind: FieldKind::Text },
    FormFieldSpec { label: "Last name *", kind: FieldKind::Text },
    FormFieldSpec { label: "Address 1 *", kind: FieldKind::Text },
    FormFieldSpec { label: "Address 2", kind: FieldKind::Text },
    FormFieldSpec { label: "City *", kind: FieldKind::Text },
    FormFieldSpec { label: "State *", kind: FieldKind::Text },
    FormFieldSpec { label: "Zip Code *", kind: FieldKind::Text },
    FormFieldSpec { label: "Mobile Number *", kind: FieldKind::Text },
    FormFieldSpec { label: "Email address *", kind: FieldKind::Text },
    FormFieldSpec { label: "Message *", kind: FieldKind::Multiline },
    FormFieldSpec { label: "CV file name", kind: FieldKind::Text },
];

const JOB_POST_FORM_FIELDS: [FormFieldSpec; 18] = [
    FormFieldSpec { label: "Company *", kind: FieldKind::Text },
    FormFieldSpec { label: "Address *", kind: FieldKind::Text },
    FormFieldSpec { label: "City *", kind: FieldKind::Text },
    FormFieldSpec { label: "State *", kind: FieldKind::Text },
    FormFieldSpec { label: "Zip Code *", kind: FieldKind::Text },
    FormFieldSpec { label: "Supervisor", kind: FieldKind::Text },
    FormFieldSpec { label: "Job Title *", kind: FieldKind::Text },
    FormFieldSpec { label: "Job Type", kind: FieldKind::EmploymentChoice },
    FormFieldSpec { label: "Summary *", kind: FieldKind::Text },
    FormFieldSpec { label: "Responsibilities", kind: FieldKind::Multiline },
    FormFieldSpec { label: "Skills", kind: FieldKind::Multiline },
    FormFieldSpec { label: "Required Education", kind: FieldKind::Text },
    FormFieldSpec { label: "Required Certifications", kind: FieldKind::Multiline },
    FormFieldSpec { label: "Shift", kind: FieldKind::ShiftChoice },
    FormFieldSpec { label: "Start Time", kind: FieldKind::TimePicker },
    FormFieldSpec { label: "End Time", kind: FieldKind::TimePicker },
    FormFieldSpec { label: "Dress Code (PPE)", kind: FieldKind::Multiline },
    FormFieldSpec { label: "Budget", kind: FieldKind::Text },
];

const SIGN_IN_FORM_FIELDS: [FormFieldSpec; 2] = [
    FormFieldSpec { label: "Email", kind: FieldKind::Text },
    FormFieldSpec { label: "Password", kind: FieldKind::Secret },
];

const CREATE_ACCOUNT_FORM_FIELDS: [FormFieldSpec; 5] = [
    FormFieldSpec { label: "First Name", kind: FieldKind::Text },
    FormFieldSpec { label: "Last Name", kind: FieldKind::Text },
    FormFieldSpec { label: "Email", kind: FieldKind::Text },
    FormFieldSpec { label: "Password", kind: FieldKind::Secret },
    FormFieldSpec { label: "Account Type", kind: FieldKind::RoleChoice },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldEdit {
    Char(char),
    Backspace,
    Newline,
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq)]
struct ApplicationFormUiState {
    input: ApplicationFormInput,
    field_index: usize,
}

#[derive(Debug, Clone, PartialEq)]
struct JobPostFormUiState {
    input: JobPostFormInput,
    field_index: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct SignInFormUiState {
    input: SignInFormInput,
    field_index: usize,
    reveal_password: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct CreateAccountFormUiState {
    input: CreateAccountFormInput,
    field_index: usize,
    reveal_password: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct LandingUiState {
    banners: Option<Carousel<String>>,
    featured: Option<Carousel<JobListing>>,
    banner_deadline: Option<Instant>,
    featured_deadline: Option<Instant>,
    featured_detail: DetailSelector<JobListingId>,
}

impl LandingUiState {
    fn new() -> Self {
        Self {
            banners: None,
            featured: None,
            banner_deadline: None,
            featured_deadline: None,
            featured_detail: DetailSelector::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct JobsUiState {
    collection: FilterableCollection<JobListing>,
    cursor: usize,
    detail: DetailSelector<JobListingId>,
    form: Option<ApplicationFormUiState>,
}

impl JobsUiState {
    fn new() -> Self {
        Self {
            collection: FilterableCollection::new(Vec::new()),
            cursor: 0,
            detail: DetailSelector::new(),
            form: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ApplicationsUiState {
    collection: FilterableCollection<ApplicationRecord>,
    cursor: usize,
    detail: DetailSelector<ApplicationId>,
}

impl ApplicationsUiState {
    fn new() -> Self {
        Self {
            collection: FilterableCollection::new(Vec::new()),
            cursor: 0,
            detail: DetailSelector::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SubmitInFlight {
    request_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
struct ViewData {
    options: UiOptions,
    landing: LandingUiState,
    jobs: JobsUiState,
    applications: ApplicationsUiState,
    post_form: Option<JobPostFormUiState>,
    sign_in_form: SignInFormUiState,
    create_account_form: CreateAccountFormUiState,
    menu_cursor: usize,
    help_visible: bool,
    in_flight: Option<SubmitInFlight>,
    next_request_id: u64,
    status_token: u64,
}

impl ViewData {
    fn new(options: UiOptions) -> Self {
        Self {
            options,
            landing: LandingUiState::new(),
            jobs: JobsUiState::new(),
            applications: ApplicationsUiState::new(),
            post_form: None,
            sign_in_form: SignInFormUiState::default(),
            create_account_form: CreateAccountFormUiState::default(),
            menu_cursor: 0,
            help_visible: false,
            in_flight: None,
            next_request_id: 0,
            status_token: 0,
        }
    }
}

pub fn run_app<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    options: UiOptions,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::new(options);
    let (internal_tx, internal_rx) = mpsc::channel();

    if let Err(error) = refresh_view_data(state, runtime, &mut view_data) {
        state.dispatch(AppCommand::SetStatus(format!("load failed: {error}")));
    }

    let mut result = Ok(());
    loop {
        process_internal_events(state, runtime, &mut view_data, &internal_tx, &internal_rx);
        update_carousel_activity(state, &mut view_data);
        service_carousels(&mut view_data, Instant::now());

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(POLL_INTERVAL).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn refresh_view_data<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
) -> Result<()> {
    let listings = runtime.load_job_listings()?;
    view_data.jobs.collection.replace_records(listings);
    view_data
        .jobs
        .detail
        .drop_stale(view_data.jobs.collection.records());
    clamp_cursor(
        &mut view_data.jobs.cursor,
        view_data.jobs.collection.results().len(),
    );

    let applications = runtime.load_applications()?;
    view_data.applications.collection.replace_records(applications);
    view_data
        .applications
        .detail
        .drop_stale(view_data.applications.collection.records());
    clamp_cursor(
        &mut view_data.applications.cursor,
        view_data.applications.collection.results().len(),
    );

    if view_data.landing.banners.is_none() && view_data.options.show_banners {
        let slugs = view_data.options.banner_slugs.clone();
        view_data.landing.banners =
            Some(Carousel::new(slugs, view_data.options.banner_interval)?);
    }

    let featured = runtime.load_featured_jobs()?;
    view_data.landing.featured_detail.drop_stale(&featured);
    let featured_unchanged = view_data
        .landing
        .featured
        .as_ref()
        .is_some_and(|carousel| carousel.items() == featured.as_slice());
    if !featured_unchanged {
        view_data.landing.featured =
            Some(Carousel::new(featured, view_data.options.featured_interval)?);
    }

    state.role = runtime.load_user_role()?;
    Ok(())
}

fn featured_items(view_data: &ViewData) -> &[JobListing] {
    view_data
        .landing
        .featured
        .as_ref()
        .map(|carousel| carousel.items())
        .unwrap_or(&[])
}

fn clamp_cursor(cursor: &mut usize, len: usize) {
    if len == 0 {
        *cursor = 0;
    } else if *cursor >= len {
        *cursor = len - 1;
    }
}

/// Landing carousels only respond to ticks while the landing screen is the
/// visible surface; the held index survives the inactive stretch.
fn update_carousel_activity(state: &AppState, view_data: &mut ViewData) {
    let landing_visible =
        state.mode == AppMode::Landing && !state.menu_visible && !view_data.help_visible;
    let featured_visible = landing_visible && !view_data.landing.featured_detail.has_selection();

    if let Some(banners) = &mut view_data.landing.banners {
        banners.set_active(landing_visible);
    }
    if let Some(featured) = &mut view_data.landing.featured {
        featured.set_active(featured_visible);
    }
}

/// The external tick scheduler: one deadline per carousel, re-armed after
/// every tick. Deadlines also re-arm while a carousel is inactive so a
/// reactivated carousel waits a full interval before its next advance.
fn service_carousels(view_data: &mut ViewData, now: Instant) {
    if let Some(banners) = &mut view_data.landing.banners {
        let interval = banners.interval();
        match view_data.landing.banner_deadline {
            Some(deadline) if now >= deadline => {
                banners.tick();
                view_data.landing.banner_deadline = Some(now + interval);
            }
            Some(_) => {}
            None => view_data.landing.banner_deadline = Some(now + interval),
        }
    }

    if let Some(featured) = &mut view_data.landing.featured {
        let interval = featured.interval();
        match view_data.landing.featured_deadline {
            Some(deadline) if now >= deadline => {
                featured.tick();
                view_data.landing.featured_deadline = Some(now + interval);
            }
            Some(_) => {}
            None => view_data.landing.featured_deadline = Some(now + interval),
        }
    }
}

fn process_internal_events<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::Submission {
                request_id,
                outcome,
            } => {
                handle_submission_event(state, runtime, view_data, tx, request_id, outcome);
            }
        }
    }
}

/// Applies a submission completion exactly once. A result whose request id
/// does not match the current in-flight slot belongs to an abandoned or
/// superseded submission and is discarded without touching any state.
fn handle_submission_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    request_id: u64,
    outcome: SubmissionOutcome,
) {
    let Some(in_flight) = view_data.in_flight else {
        return;
    };
    if in_flight.request_id != request_id {
        return;
    }
    view_data.in_flight = None;

    match outcome {
        SubmissionOutcome::Completed(receipt) => {
            let mut status = receipt.confirmation;
            match state.mode {
                AppMode::Modal(ModalKind::Jobs) => {
                    if let Some(form) = view_data.jobs.form.take() {
                        if let Err(error) = runtime.record_application(&form.input) {
                            status = format!("submitted, but saving locally failed: {error}");
                        }
                    }
                    view_data.jobs.detail.dismiss();
                    if let Err(error) = refresh_view_data(state, runtime, view_data) {
                        status = format!("submitted, but reload failed: {error}");
                    }
                }
                AppMode::Modal(ModalKind::PostJob) => {
                    if let Some(form) = view_data.post_form.take()
                        && let Err(error) = runtime.record_posting(&form.input)
                    {
                        status = format!("posted, but saving locally failed: {error}");
                    }
                    state.dispatch(AppCommand::CloseModal);
                }
                AppMode::Modal(ModalKind::SignIn) => {
                    view_data.sign_in_form = SignInFormUiState::default();
                    state.dispatch(AppCommand::CompleteSignIn);
                }
                _ => {}
            }
            emit_status(state, view_data, tx, status);
        }
        SubmissionOutcome::Failed(error) => {
            // Form state stays untouched so the user can correct and retry.
            emit_status(state, view_data, tx, format!("submission failed: {error}"));
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(STATUS_CLEAR_SECS));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn start_submission<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    job: SubmissionJob,
) {
    if view_data.in_flight.is_some() {
        emit_status(state, view_data, internal_tx, "a submission is already in flight");
        return;
    }

    view_data.next_request_id = view_data.next_request_id.saturating_add(1);
    let request_id = view_data.next_request_id;
    view_data.in_flight = Some(SubmitInFlight { request_id });

    let label = job.label();
    if let Err(error) = runtime.spawn_submission(request_id, job, internal_tx.clone()) {
        view_data.in_flight = None;
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("could not start {label}: {error}"),
        );
    } else {
        emit_status(state, view_data, internal_tx, format!("sending {label}..."));
    }
}

/// Abandons interest in the in-flight submission: its eventual completion
/// no longer matches and is dropped on arrival.
fn cancel_in_flight(view_data: &mut ViewData) -> bool {
    view_data.in_flight.take().is_some()
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    if key.code == KeyCode::Char('?') && !editing_text(state) {
        view_data.help_visible = true;
        return false;
    }

    if state.menu_visible {
        handle_menu_key(state, runtime, view_data, internal_tx, key);
        return false;
    }

    match state.mode {
        AppMode::Landing => handle_landing_key(state, view_data, internal_tx, key),
        AppMode::Modal(ModalKind::Jobs) => {
            handle_jobs_key(state, runtime, view_data, internal_tx, key)
        }
        AppMode::Modal(ModalKind::Applications) => {
            handle_applications_key(state, view_data, key)
        }
        AppMode::Modal(ModalKind::SignIn) => {
            handle_sign_in_key(state, runtime, view_data, internal_tx, key)
        }
        AppMode::Modal(ModalKind::CreateAccount) => {
            handle_create_account_key(state, runtime, view_data, internal_tx, key)
        }
        AppMode::Modal(ModalKind::PostJob) => {
            handle_post_job_key(state, runtime, view_data, internal_tx, key)
        }
        AppMode::Modal(ModalKind::Profile) => {
            handle_profile_key(state, runtime, view_data, internal_tx, key)
        }
    }
    false
}

/// True while the focused surface consumes plain characters, so global
/// hotkeys like `?` must stay out of the way.
fn editing_text(state: &AppState) -> bool {
    if state.menu_visible {
        return false;
    }
    match state.mode {
        AppMode::Landing => false,
        AppMode::Modal(ModalKind::Jobs) => true,
        AppMode::Modal(ModalKind::Applications) => true,
        AppMode::Modal(ModalKind::SignIn) => true,
        AppMode::Modal(ModalKind::CreateAccount) => true,
        AppMode::Modal(ModalKind::PostJob) => true,
        AppMode::Modal(ModalKind::Profile) => false,
    }
}

fn handle_menu_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            state.dispatch(AppCommand::CloseMenu);
        }
        KeyCode::Up => {
            view_data.menu_cursor = view_data
                .menu_cursor
                .checked_sub(1)
                .unwrap_or(MenuSelection::ALL.len() - 1);
        }
        KeyCode::Down => {
            view_data.menu_cursor = (view_data.menu_cursor + 1) % MenuSelection::ALL.len();
        }
        KeyCode::Enter => {
            let selection = MenuSelection::ALL[view_data.menu_cursor];
            state.dispatch(AppCommand::MenuSelect(selection));
            if let Err(error) = refresh_view_data(state, runtime, view_data) {
                emit_status(state, view_data, internal_tx, format!("load failed: {error}"));
            }
        }
        _ => {}
    }
}

fn handle_landing_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    if view_data.landing.featured_detail.has_selection() {
        match key.code {
            KeyCode::Esc => view_data.landing.featured_detail.dismiss(),
            KeyCode::Enter | KeyCode::Char('a') => {
                // Apply to the featured job: route through the jobs flow.
                let selected = view_data
                    .landing
                    .featured_detail
                    .current(featured_items(view_data))
                    .cloned();
                if let Some(listing) = selected {
                    view_data.landing.featured_detail.dismiss();
                    state.dispatch(AppCommand::OpenModal(ModalKind::Jobs));
                    view_data.jobs.detail.select(listing.id);
                    view_data.jobs.form = Some(ApplicationFormUiState {
                        input: ApplicationFormInput::for_listing(&listing),
                        field_index: 0,
                    });
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('m') => {
            view_data.menu_cursor = 0;
            state.dispatch(AppCommand::OpenMenu);
        }
        KeyCode::Char('p') => {
            state.dispatch(AppCommand::OpenModal(ModalKind::Profile));
        }
        KeyCode::Char('j') => {
            state.dispatch(AppCommand::OpenModal(ModalKind::Jobs));
        }
        KeyCode::Char('a') => {
            state.dispatch(AppCommand::OpenModal(ModalKind::Applications));
        }
        KeyCode::Char('l') => {
            state.dispatch(AppCommand::OpenModal(ModalKind::SignIn));
        }
        KeyCode::Enter => {
            let current = view_data
                .landing
                .featured
                .as_ref()
                .and_then(|carousel| carousel.current())
                .map(|listing| listing.id);
            if let Some(id) = current {
                view_data.landing.featured_detail.select(id);
            } else {
                emit_status(state, view_data, internal_tx, "no featured jobs to open");
            }
        }
        _ => {}
    }
}

fn handle_jobs_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    if view_data.jobs.form.is_some() {
        handle_application_form_key(state, runtime, view_data, internal_tx, key);
        return;
    }

    if view_data.jobs.detail.has_selection() {
        match key.code {
            KeyCode::Esc => view_data.jobs.detail.dismiss(),
            KeyCode::Enter | KeyCode::Char('a') => {
                let selected = view_data
                    .jobs
                    .detail
                    .current(view_data.jobs.collection.records())
                    .cloned();
                if let Some(listing) = selected {
                    view_data.jobs.form = Some(ApplicationFormUiState {
                        input: ApplicationFormInput::for_listing(&listing),
                        field_index: 0,
                    });
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            state.dispatch(AppCommand::CloseModal);
        }
        KeyCode::Up => {
            view_data.jobs.cursor = view_data.jobs.cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            let len = view_data.jobs.collection.results().len();
            if len > 0 && view_data.jobs.cursor + 1 < len {
                view_data.jobs.cursor += 1;
            }
        }
        KeyCode::Enter => {
            let selected = view_data
                .jobs
                .collection
                .results()
                .get(view_data.jobs.cursor)
                .map(|listing| listing.id);
            if let Some(id) = selected {
                view_data.jobs.detail.select(id);
            }
        }
        KeyCode::Backspace => {
            let mut query = view_data.jobs.collection.query().to_owned();
            query.pop();
            view_data.jobs.collection.set_query(&query);
            clamp_cursor(
                &mut view_data.jobs.cursor,
                view_data.jobs.collection.results().len(),
            );
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut query = view_data.jobs.collection.query().to_owned();
            query.push(c);
            view_data.jobs.collection.set_query(&query);
            view_data.jobs.cursor = 0;
        }
        _ => {}
    }
}

fn handle_applications_key(state: &mut AppState, view_data: &mut ViewData, key: KeyEvent) {
    if view_data.applications.detail.has_selection() {
        if key.code == KeyCode::Esc || key.code == KeyCode::Enter {
            view_data.applications.detail.dismiss();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            state.dispatch(AppCommand::CloseModal);
        }
        KeyCode::Up => {
            view_data.applications.cursor = view_data.applications.cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            let len = view_data.applications.collection.results().len();
            if len > 0 && view_data.applications.cursor + 1 < len {
                view_data.applications.cursor += 1;
            }
        }
        KeyCode::Enter => {
            let selected = view_data
                .applications
                .collection
                .results()
                .get(view_data.applications.cursor)
                .map(|application| application.id);
            if let Some(id) = selected {
                view_data.applications.detail.select(id);
            }
        }
        KeyCode::Backspace => {
            let mut query = view_data.applications.collection.query().to_owned();
            query.pop();
            view_data.applications.collection.set_query(&query);
            clamp_cursor(
                &mut view_data.applications.cursor,
                view_data.applications.collection.results().len(),
            );
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut query = view_data.applications.collection.query().to_owned();
            query.push(c);
            view_data.applications.collection.set_query(&query);
            view_data.applications.cursor = 0;
        }
        _ => {}
    }
}

fn handle_application_form_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    if key.code == KeyCode::Esc {
        if cancel_in_flight(view_data) {
            emit_status(
                state,
                view_data,
                internal_tx,
                "submission abandoned; its result will be ignored",
            );
        }
        view_data.jobs.form = None;
        return;
    }

    if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
        if view_data.in_flight.is_some() {
            return;
        }
        let Some(form) = &view_data.jobs.form else {
            return;
        };
        if !form.input.is_complete() {
            emit_status(
                state,
                view_data,
                internal_tx,
                "fill the required fields before sending",
            );
            return;
        }
        let job = SubmissionJob::Application(form.input.clone());
        start_submission(state, runtime, view_data, internal_tx, job);
        return;
    }

    let Some(form) = &mut view_data.jobs.form else {
        return;
    };
    if let Some(edit) = field_edit_for_key(key) {
        let field_count = APPLICATION_FORM_FIELDS.len();
        match edit {
            FieldEdit::Previous => {
                form.field_index = form.field_index.checked_sub(1).unwrap_or(field_count - 1);
            }
            FieldEdit::Next => {
                form.field_index = (form.field_index + 1) % field_count;
            }
            edit => {
                let multiline =
                    APPLICATION_FORM_FIELDS[form.field_index].kind == FieldKind::Multiline;
                edit_text_field(
                    application_field_mut(&mut form.input, form.field_index),
                    edit,
                    multiline,
                );
            }
        }
    }
}

fn application_field_mut(input: &mut ApplicationFormInput, index: usize) -> &mut String {
    match index {
        0 => &mut input.first_name,
        1 => &mut input.last_name,
        2 => &mut input.address_line_1,
        3 => &mut input.address_line_2,
        4 => &mut input.city,
        5 => &mut input.state,
        6 => &mut input.zip_code,
        7 => &mut input.mobile,
        8 => &mut input.email,
        9 => &mut input.message,
        _ => &mut input.resume_file_name,
    }
}

fn field_edit_for_key(key: KeyEvent) -> Option<FieldEdit> {
    match key.code {
        KeyCode::Up | KeyCode::BackTab => Some(FieldEdit::Previous),
        KeyCode::Down | KeyCode::Tab => Some(FieldEdit::Next),
        KeyCode::Backspace => Some(FieldEdit::Backspace),
        KeyCode::Enter => Some(FieldEdit::Newline),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(FieldEdit::Char(c))
        }
        _ => None,
    }
}

fn edit_text_field(field: &mut String, edit: FieldEdit, multiline: bool) {
    match edit {
        FieldEdit::Char(c) => field.push(c),
        FieldEdit::Backspace => {
            field.pop();
        }
        FieldEdit::Newline if multiline => field.push('\n'),
        FieldEdit::Newline | FieldEdit::Previous | FieldEdit::Next => {}
    }
}

fn handle_sign_in_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    if key.code == KeyCode::Esc {
        if cancel_in_flight(view_data) {
            emit_status(
                state,
                view_data,
                internal_tx,
                "sign in abandoned; its result will be ignored",
            );
        }
        state.dispatch(AppCommand::CloseModal);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => {
                if view_data.in_flight.is_some() {
                    return;
                }
                if !view_data.sign_in_form.input.is_complete() {
                    emit_status(
                        state,
                        view_data,
                        internal_tx,
                        "enter email and password before signing in",
                    );
                    return;
                }
                let job = SubmissionJob::SignIn(view_data.sign_in_form.input.clone());
                start_submission(state, runtime, view_data, internal_tx, job);
            }
            KeyCode::Char('r') => {
                view_data.sign_in_form.reveal_password = !view_data.sign_in_form.reveal_password;
            }
            KeyCode::Char('n') => {
                state.dispatch(AppCommand::OpenModal(ModalKind::CreateAccount));
            }
            _ => {}
        }
        return;
    }

    if let Some(edit) = field_edit_for_key(key) {
        let form = &mut view_data.sign_in_form;
        match edit {
            FieldEdit::Previous => {
                form.field_index = form
                    .field_index
                    .checked_sub(1)
                    .unwrap_or(SIGN_IN_FORM_FIELDS.len() - 1);
            }
            FieldEdit::Next => {
                form.field_index = (form.field_index + 1) % SIGN_IN_FORM_FIELDS.len();
            }
            edit => {
                let field = if form.field_index == 0 {
                    &mut form.input.email
                } else {
                    &mut form.input.password
                };
                edit_text_field(field, edit, false);
            }
        }
    }
}

fn handle_create_account_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    if key.code == KeyCode::Esc {
        state.dispatch(AppCommand::CloseModal);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => {
                let form = view_data.create_account_form.clone();
                if !form.input.is_complete() {
                    emit_status(
                        state,
                        view_data,
                        internal_tx,
                        "fill all fields and choose an account type",
                    );
                    return;
                }
                // Account creation is local: the chosen role is persisted
                // and the profile opens, as the sign-up flow does.
                let Some(role) = form.input.role else {
                    return;
                };
                if let Err(error) = runtime.save_user_role(role) {
                    emit_status(
                        state,
                        view_data,
                        internal_tx,
                        format!("could not save account role: {error}"),
                    );
                    return;
                }
                state.dispatch(AppCommand::SetRole(Some(role)));
                view_data.create_account_form = CreateAccountFormUiState::default();
                state.dispatch(AppCommand::OpenModal(ModalKind::Profile));
                emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("account created as {}", role.label()),
                );
            }
            KeyCode::Char('r') => {
                view_data.create_account_form.reveal_password =
                    !view_data.create_account_form.reveal_password;
            }
            KeyCode::Char('n') => {
                state.dispatch(AppCommand::OpenModal(ModalKind::SignIn));
            }
            _ => {}
        }
        return;
    }

    if let Some(edit) = field_edit_for_key(key) {
        let form = &mut view_data.create_account_form;
        let field_count = CREATE_ACCOUNT_FORM_FIELDS.len();
        match edit {
            FieldEdit::Previous => {
                form.field_index = form.field_index.checked_sub(1).unwrap_or(field_count - 1);
            }
            FieldEdit::Next => {
                form.field_index = (form.field_index + 1) % field_count;
            }
            edit => match form.field_index {
                0 => edit_text_field(&mut form.input.first_name, edit, false),
                1 => edit_text_field(&mut form.input.last_name, edit, false),
                2 => edit_text_field(&mut form.input.email, edit, false),
                3 => edit_text_field(&mut form.input.password, edit, false),
                _ => {
                    if let FieldEdit::Char(' ') = edit {
                        form.input.role = next_role_choice(form.input.role);
                    }
                }
            },
        }
    }
}

const fn next_role_choice(current: Option<UserRole>) -> Option<UserRole> {
    match current {
        None => Some(UserRole::Candidate),
        Some(UserRole::Candidate) => Some(UserRole::Client),
        Some(UserRole::Client) => Some(UserRole::Candidate),
    }
}

fn handle_post_job_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    if view_data.post_form.is_none() {
        view_data.post_form = Some(JobPostFormUiState {
            input: JobPostFormInput::default(),
            field_index: 0,
        });
    }

    if key.code == KeyCode::Esc {
        if cancel_in_flight(view_data) {
            emit_status(
                state,
                view_data,
                internal_tx,
                "posting abandoned; its result will be ignored",
            );
        }
        view_data.post_form = None;
        state.dispatch(AppCommand::CloseModal);
        return;
    }

    if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
        if view_data.in_flight.is_some() {
            return;
        }
        let Some(form) = &view_data.post_form else {
            return;
        };
        if !form.input.is_complete() {
            emit_status(
                state,
                view_data,
                internal_tx,
                "fill the required fields before posting",
            );
            return;
        }
        let job = SubmissionJob::Posting(form.input.clone());
        start_submission(state, runtime, view_data, internal_tx, job);
        return;
    }

    let Some(form) = &mut view_data.post_form else {
        return;
    };
    let field_count = JOB_POST_FORM_FIELDS.len();
    let kind = JOB_POST_FORM_FIELDS[form.field_index].kind;

    match key.code {
        KeyCode::Left => match kind {
            FieldKind::EmploymentChoice => {
                form.input.employment_type = cycle_employment(form.input.employment_type, -1);
            }
            FieldKind::ShiftChoice => {
                form.input.shift = cycle_shift(form.input.shift, -1);
            }
            FieldKind::TimePicker => {
                shift_time_field(form, -15);
            }
            _ => {}
        },
        KeyCode::Right => match kind {
            FieldKind::EmploymentChoice => {
                form.input.employment_type = cycle_employment(form.input.employment_type, 1);
            }
            FieldKind::ShiftChoice => {
                form.input.shift = cycle_shift(form.input.shift, 1);
            }
            FieldKind::TimePicker => {
                shift_time_field(form, 15);
            }
            _ => {}
        },
        _ => {
            if let Some(edit) = field_edit_for_key(key) {
                match edit {
                    FieldEdit::Previous => {
                        form.field_index =
                            form.field_index.checked_sub(1).unwrap_or(field_count - 1);
                    }
                    FieldEdit::Next => {
                        form.field_index = (form.field_index + 1) % field_count;
                    }
                    edit => {
                        if let Some(field) = job_post_text_field_mut(&mut form.input, form.field_index)
                        {
                            edit_text_field(field, edit, kind == FieldKind::Multiline);
                        }
                    }
                }
            }
        }
    }
}

fn job_post_text_field_mut(input: &mut JobPostFormInput, index: usize) -> Option<&mut String> {
    match index {
        0 => Some(&mut input.company_name),
        1 => Some(&mut input.street_address),
        2 => Some(&mut input.city),
        3 => Some(&mut input.state),
        4 => Some(&mut input.zip_code),
        5 => Some(&mut input.supervisor),
        6 => Some(&mut input.job_title),
        8 => Some(&mut input.summary),
        9 => Some(&mut input.responsibilities_text),
        10 => Some(&mut input.skills_text),
        11 => Some(&mut input.required_education),
        12 => Some(&mut input.certifications_text),
        16 => Some(&mut input.dress_code_text),
        17 => Some(&mut input.budget),
        _ => None,
    }
}

fn cycle_employment(current: EmploymentType, delta: isize) -> EmploymentType {
    let all = EmploymentType::ALL;
    let index = all.iter().position(|&e| e == current).unwrap_or(0) as isize;
    let next = (index + delta).rem_euclid(all.len() as isize) as usize;
    all[next]
}

fn cycle_shift(current: ShiftKind, delta: isize) -> ShiftKind {
    let all = ShiftKind::ALL;
    let index = all.iter().position(|&s| s == current).unwrap_or(0) as isize;
    let next = (index + delta).rem_euclid(all.len() as isize) as usize;
    all[next]
}

fn shift_time_field(form: &mut JobPostFormUiState, minutes: i64) {
    let delta = time::Duration::minutes(minutes);
    if JOB_POST_FORM_FIELDS[form.field_index].label == "Start Time" {
        form.input.start_time += delta;
    } else {
        form.input.end_time += delta;
    }
}

fn handle_profile_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            state.dispatch(AppCommand::CloseModal);
        }
        KeyCode::Char('s') => {
            if state.role.is_none() {
                emit_status(state, view_data, internal_tx, "no account on this device");
                return;
            }
            if let Err(error) = runtime.clear_user_role() {
                emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("sign out failed: {error}"),
                );
                return;
            }
            state.dispatch(AppCommand::SetRole(None));
            state.dispatch(AppCommand::CloseModal);
            emit_status(state, view_data, internal_tx, "signed out");
        }
        _ => {}
    }
}

// Rendering -----------------------------------------------------------------

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let (title, lines) = active_screen(state, view_data);
    let body = Paragraph::new(lines.join("\n"))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(body, chunks[0]);

    let status = Paragraph::new(status_text(state)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, chunks[1]);

    if let Some((overlay_title, overlay_lines)) = active_overlay(state, view_data) {
        let area = centered_rect(frame.area(), 80, 80);
        frame.render_widget(Clear, area);
        let overlay = Paragraph::new(overlay_lines.join("\n")).block(
            Block::default()
                .borders(Borders::ALL)
                .title(overlay_title)
                .style(Style::default().add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(overlay, area);
    }
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn active_screen(state: &AppState, view_data: &ViewData) -> (String, Vec<String>) {
    match state.mode {
        AppMode::Landing => ("OpenHire".to_owned(), landing_lines(state, view_data)),
        AppMode::Modal(ModalKind::Jobs) => {
            if let Some(form) = &view_data.jobs.form {
                ("Apply".to_owned(), application_form_lines(form, view_data))
            } else if let Some(listing) = view_data
                .jobs
                .detail
                .current(view_data.jobs.collection.records())
            {
                (listing.title.clone(), job_detail_lines(listing))
            } else {
                ("Jobs".to_owned(), jobs_list_lines(&view_data.jobs))
            }
        }
        AppMode::Modal(ModalKind::Applications) => (
            "Applications".to_owned(),
            applications_list_lines(&view_data.applications),
        ),
        AppMode::Modal(ModalKind::SignIn) => (
            "Sign In".to_owned(),
            sign_in_lines(&view_data.sign_in_form, view_data.in_flight.is_some()),
        ),
        AppMode::Modal(ModalKind::CreateAccount) => (
            "Sign Up".to_owned(),
            create_account_lines(&view_data.create_account_form),
        ),
        AppMode::Modal(ModalKind::PostJob) => (
            "Post a Job".to_owned(),
            post_job_lines(view_data.post_form.as_ref(), view_data.in_flight.is_some()),
        ),
        AppMode::Modal(ModalKind::Profile) => ("Profile".to_owned(), profile_lines(state)),
    }
}

fn active_overlay(state: &AppState, view_data: &ViewData) -> Option<(String, Vec<String>)> {
    if view_data.help_visible {
        return Some(("Help".to_owned(), help_lines()));
    }
    if state.menu_visible {
        return Some(("Menu".to_owned(), menu_lines(view_data.menu_cursor, state.role)));
    }
    if state.mode == AppMode::Landing
        && let Some(listing) = view_data
            .landing
            .featured_detail
            .current(featured_items(view_data))
    {
        return Some((listing.title.clone(), job_detail_lines(listing)));
    }
    if state.mode == AppMode::Modal(ModalKind::Applications)
        && let Some(record) = view_data
            .applications
            .detail
            .current(view_data.applications.collection.records())
    {
        return Some(("Submission Details".to_owned(), application_detail_lines(record)));
    }
    None
}

fn status_text(state: &AppState) -> String {
    state.status_line.clone().unwrap_or_default()
}

fn format_posted_date(value: Date) -> String {
    value
        .format(&format_description!("[month repr:short] [day], [year]"))
        .unwrap_or_else(|_| value.to_string())
}

fn format_clock(value: Time) -> String {
    value
        .format(&format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| "00:00".to_owned())
}

fn landing_lines(state: &AppState, view_data: &ViewData) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Find your dream job".to_owned());
    lines.push(String::new());

    if let Some(banners) = &view_data.landing.banners {
        if let (Some(slug), Some(index)) = (banners.current(), banners.index()) {
            lines.push(format!(
                "[ {} ]  ({}/{})",
                slug,
                index + 1,
                banners.len()
            ));
        }
        lines.push(String::new());
    }

    match &view_data.landing.featured {
        Some(carousel) if !carousel.is_empty() => {
            lines.push("Featured jobs".to_owned());
            if let Some(listing) = carousel.current() {
                lines.push(format!("  {}", listing.title));
                lines.push(format!("  {} - {}", listing.company, listing.location));
                lines.push(format!("  Posted {}", format_posted_date(listing.posted_on)));
            }
            if let Some(index) = carousel.index() {
                lines.push(format!("  ({}/{})", index + 1, carousel.len()));
            }
        }
        _ => {
            lines.push("No featured jobs yet".to_owned());
        }
    }

    lines.push(String::new());
    match state.role {
        Some(role) => lines.push(format!("Signed up as {}", role.label())),
        None => lines.push("Log in / Create an account from the menu".to_owned()),
    }
    lines.push(String::new());
    lines.push("p profile | j jobs | a applications | l login | m menu | ? help".to_owned());
    lines
}

fn menu_lines(cursor: usize, role: Option<UserRole>) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, selection) in MenuSelection::ALL.iter().enumerate() {
        let marker = if index == cursor { CURSOR_MARK } else { " " };
        lines.push(format!("{marker} {}", selection.label()));
    }
    lines.push(String::new());
    match role {
        Some(role) => lines.push(format!("Account: {}", role.label())),
        None => lines.push("Account: none".to_owned()),
    }
    lines.push("up/down pick | enter open | esc close".to_owned());
    lines
}

fn jobs_list_lines(jobs: &JobsUiState) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Search jobs: {}_", jobs.collection.query()));
    lines.push(String::new());

    let results = jobs.collection.results();
    if results.is_empty() {
        lines.push("No jobs match".to_owned());
    }
    for (index, listing) in results.iter().enumerate() {
        let marker = if index == jobs.cursor { CURSOR_MARK } else { " " };
        lines.push(format!("{marker} {}", listing.title));
        lines.push(format!("    {}", listing.company));
        lines.push(format!(
            "    {} | Posted {}",
            listing.location,
            format_posted_date(listing.posted_on)
        ));
    }

    lines.push(String::new());
    lines.push("type to search | up/down pick | enter open | esc back".to_owned());
    lines
}

fn job_detail_lines(listing: &JobListing) -> Vec<String> {
    let mut lines = Vec::new();
    if !listing.hero_slug.is_empty() {
        lines.push(format!("[ {} ]", listing.hero_slug));
        lines.push(String::new());
    }
    lines.push(listing.title.clone());
    lines.push(listing.location.clone());
    lines.push(format!(
        "{} | {} | {:.1}",
        listing.employment_type.label(),
        listing.salary_range,
        listing.rating
    ));
    lines.push(String::new());
    lines.push("Job Description".to_owned());
    lines.push(format!("  {}", listing.description));
    lines.push(String::new());
    lines.push("Requirements".to_owned());
    for requirement in &listing.requirements {
        lines.push(format!("  - {requirement}"));
    }
    lines.push(String::new());
    lines.push("About Company".to_owned());
    lines.push(format!("  {}", listing.company_about));
    lines.push(String::new());
    lines.push("a apply | esc back".to_owned());
    lines
}

fn application_form_lines(form: &ApplicationFormUiState, view_data: &ViewData) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Position".to_owned());
    lines.push(format!("  {}", form.input.job_title));
    lines.push(format!("  {} - {}", form.input.company, form.input.location));
    lines.push(String::new());

    for (index, spec) in APPLICATION_FORM_FIELDS.iter().enumerate() {
        let marker = if index == form.field_index { CURSOR_MARK } else { " " };
        let value = application_field_value(&form.input, index);
        if spec.kind == FieldKind::Multiline {
            lines.push(format!("{marker} {}:", spec.label));
            for line in value.lines() {
                lines.push(format!("    {line}"));
            }
        } else {
            lines.push(format!("{marker} {}: {value}", spec.label));
        }
    }

    lines.push(String::new());
    if view_data.in_flight.is_some() {
        lines.push("Sending...".to_owned());
    } else if form.input.is_complete() {
        lines.push("ctrl+s send application | esc back".to_owned());
    } else {
        lines.push("fill required fields (*) to enable sending | esc back".to_owned());
    }
    lines
}

fn application_field_value(input: &ApplicationFormInput, index: usize) -> &str {
    match index {
        0 => &input.first_name,
        1 => &input.last_name,
        2 => &input.address_line_1,
        3 => &input.address_line_2,
        4 => &input.city,
        5 => &input.state,
        6 => &input.zip_code,
        7 => &input.mobile,
        8 => &input.email,
        9 => &input.message,
        _ => &input.resume_file_name,
    }
}

fn applications_list_lines(applications: &ApplicationsUiState) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "Search applications: {}_",
        applications.collection.query()
    ));
    lines.push(String::new());

    let results = applications.collection.results();
    if results.is_empty() {
        lines.push("No applications match".to_owned());
    }
    for (index, record) in results.iter().enumerate() {
        let marker = if index == applications.cursor {
            CURSOR_MARK
        } else {
            " "
        };
        lines.push(format!(
            "{marker} {}  [{}]",
            record.job_title,
            record.status.label()
        ));
        lines.push(format!("    {}", record.company));
        lines.push(format!(
            "    {}, {} | {}",
            record.city,
            record.state,
            format_posted_date(record.submitted_on)
        ));
    }

    lines.push(String::new());
    lines.push("type to search | up/down pick | enter open | esc back".to_owned());
    lines
}

fn application_detail_lines(record: &ApplicationRecord) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Position".to_owned());
    lines.push(format!("  {}", record.job_title));
    lines.push(format!("  {} - {}", record.company, record.location));
    lines.push(String::new());
    lines.push("Status".to_owned());
    lines.push(format!("  Current Status: {}", record.status.label()));
    lines.push(format!(
        "  Submitted On: {}",
        format_posted_date(record.submitted_on)
    ));
    lines.push(String::new());
    lines.push("Applicant".to_owned());
    lines.push(format!("  Name: {}", record.applicant_name()));
    lines.push(format!("  Mobile: {}", record.mobile));
    lines.push(format!("  Email: {}", record.email));
    lines.push(String::new());
    lines.push("Address".to_owned());
    lines.push(format!("  {}", record.address_line_1));
    if !record.address_line_2.is_empty() {
        lines.push(format!("  {}", record.address_line_2));
    }
    lines.push(format!(
        "  {}, {} {}",
        record.city, record.state, record.zip_code
    ));
    lines.push(String::new());
    lines.push("Message".to_owned());
    lines.push(format!("  {}", record.message));
    lines.push(String::new());
    lines.push("CV".to_owned());
    if record.resume_file_name.is_empty() {
        lines.push("  No file attached".to_owned());
    } else {
        lines.push(format!("  {}", record.resume_file_name));
    }
    lines.push(String::new());
    lines.push("esc close".to_owned());
    lines
}

fn sign_in_lines(form: &SignInFormUiState, sending: bool) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("OpenHire".to_owned());
    lines.push(String::new());

    let email_marker = if form.field_index == 0 { CURSOR_MARK } else { " " };
    lines.push(format!("{email_marker} Email: {}", form.input.email));

    let password_marker = if form.field_index == 1 { CURSOR_MARK } else { " " };
    let password = if form.reveal_password {
        form.input.password.clone()
    } else {
        "*".repeat(form.input.password.chars().count())
    };
    lines.push(format!("{password_marker} Password: {password}"));

    lines.push(String::new());
    if sending {
        lines.push("Signing in...".to_owned());
    } else if form.input.is_complete() {
        lines.push("ctrl+s sign in".to_owned());
    } else {
        lines.push("enter email and password to enable sign in".to_owned());
    }
    lines.push("New here? ctrl+n sign up | ctrl+r show/hide password | esc back".to_owned());
    lines
}

fn create_account_lines(form: &CreateAccountFormUiState) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Create Account".to_owned());
    lines.push(String::new());

    for (index, spec) in CREATE_ACCOUNT_FORM_FIELDS.iter().enumerate() {
        let marker = if index == form.field_index { CURSOR_MARK } else { " " };
        let value = match index {
            0 => form.input.first_name.clone(),
            1 => form.input.last_name.clone(),
            2 => form.input.email.clone(),
            3 => {
                if form.reveal_password {
                    form.input.password.clone()
                } else {
                    "*".repeat(form.input.password.chars().count())
                }
            }
            _ => match form.input.role {
                Some(role) => format!("(x) {}", role.label()),
                None => "( ) Candidate  ( ) Client".to_owned(),
            },
        };
        lines.push(format!("{marker} {}: {value}", spec.label));
    }

    lines.push(String::new());
    if form.input.is_complete() {
        lines.push("ctrl+s sign up".to_owned());
    } else {
        lines.push("fill all fields (space toggles account type) to enable sign up".to_owned());
    }
    lines.push("Already have an account? ctrl+n sign in | esc back".to_owned());
    lines
}

fn post_job_lines(form: Option<&JobPostFormUiState>, sending: bool) -> Vec<String> {
    let Some(form) = form else {
        return vec!["loading form...".to_owned()];
    };

    let mut lines = Vec::new();
    for (index, spec) in JOB_POST_FORM_FIELDS.iter().enumerate() {
        let marker = if index == form.field_index { CURSOR_MARK } else { " " };
        match spec.kind {
            FieldKind::EmploymentChoice => {
                lines.push(format!(
                    "{marker} {}: {}",
                    spec.label,
                    form.input.employment_type.label()
                ));
            }
            FieldKind::ShiftChoice => {
                lines.push(format!("{marker} {}: {}", spec.label, form.input.shift.label()));
            }
            FieldKind::TimePicker => {
                let value = if spec.label == "Start Time" {
                    form.input.start_time
                } else {
                    form.input.end_time
                };
                lines.push(format!("{marker} {}: {}", spec.label, format_clock(value)));
            }
            FieldKind::Multiline => {
                lines.push(format!("{marker} {}:", spec.label));
                let text = match index {
                    9 => &form.input.responsibilities_text,
                    10 => &form.input.skills_text,
                    12 => &form.input.certifications_text,
                    _ => &form.input.dress_code_text,
                };
                for line in openhire_app::parse_lines(text) {
                    lines.push(format!("    - {line}"));
                }
            }
            FieldKind::Text | FieldKind::Secret | FieldKind::RoleChoice => {
                let value = job_post_text_field_value(&form.input, index);
                lines.push(format!("{marker} {}: {value}", spec.label));
            }
        }
    }

    if let Some(total) = form.input.work_hours_label() {
        lines.push(format!("  {total}"));
    }

    lines.push(String::new());
    if sending {
        lines.push("Posting...".to_owned());
    } else if form.input.is_complete() {
        lines.push("ctrl+s post | esc back".to_owned());
    } else {
        lines.push("fill required fields (*) to enable posting | esc back".to_owned());
    }
    lines.push("left/right cycles type, shift, and times | enter adds a line".to_owned());
    lines
}

fn job_post_text_field_value(input: &JobPostFormInput, index: usize) -> &str {
    match index {
        0 => &input.company_name,
        1 => &input.street_address,
        2 => &input.city,
        3 => &input.state,
        4 => &input.zip_code,
        5 => &input.supervisor,
        6 => &input.job_title,
        8 => &input.summary,
        11 => &input.required_education,
        _ => &input.budget,
    }
}

fn profile_lines(state: &AppState) -> Vec<String> {
    let mut lines = Vec::new();
    match state.role {
        Some(role) => {
            lines.push(format!("Account type: {}", role.label()));
            lines.push(String::new());
            lines.push("s sign out | esc back".to_owned());
        }
        None => {
            lines.push("No account on this device".to_owned());
            lines.push(String::new());
            lines.push("Create one from the menu | esc back".to_owned());
        }
    }
    lines
}

fn help_lines() -> Vec<String> {
    vec![
        "landing: p profile | j jobs | a applications | l login | m menu".to_owned(),
        "landing: enter opens the featured job, esc closes it".to_owned(),
        "lists: type to search | up/down pick | enter open | esc back".to_owned(),
        "forms: up/down move | ctrl+s submit | esc back".to_owned(),
        "post form: left/right cycles type, shift, and times".to_owned(),
        "anywhere: ctrl+q quit | ? toggles this help".to_owned(),
    ]
}
