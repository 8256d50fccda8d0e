pub mod backend;

pub use backend::{AuthBackend, SimulatedAuthBackend};

use crate::data::DEFAULT_COMPANY_ID;
use crate::models::{User, UserRole};
use anyhow::{Context, Result};
use tracing::{debug, info};

pub const MIN_PHONE_LEN: usize = 8;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_NAME_LEN: usize = 2;
pub const OTP_LEN: usize = 4;
/// Seconds before a code can be re-sent
pub const OTP_RESEND_SECS: u32 = 60;

const NEW_USER_NAME: &str = "مستخدم جديد";
const NEW_USER_CREDITS: u32 = 10;

/// Screen the login dialog is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthView {
    Main,
    Otp,
    ForgotPassword,
    ResetPassword,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// Why a code was sent, decides where verification leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OtpPurpose {
    Register,
    PasswordReset,
}

/// Credentials handed back once the flow finishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSuccess {
    pub phone: String,
    pub name: Option<String>,
}

/// Result of one user submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowStep {
    /// Input was incomplete or invalid; nothing changed
    Stayed,
    Moved(AuthView),
    Completed(AuthSuccess),
}

/// Convert Arabic-Indic digits (٠-٩) to ASCII digits
pub fn normalize_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{0660}'..='\u{0669}' => {
                char::from(b'0' + (c as u32 - 0x0660) as u8)
            }
            other => other,
        })
        .collect()
}

/// Phone/OTP login and registration dialog.
///
/// All backend round trips are `async` and only touch the flow's state after
/// the backend answers, so dropping a pending call leaves the flow as it was.
pub struct AuthFlow<B: AuthBackend> {
    backend: B,
    view: AuthView,
    mode: AuthMode,
    name: String,
    phone: String,
    password: String,
    new_password: String,
    otp: [Option<char>; OTP_LEN],
    otp_purpose: OtpPurpose,
    resend_countdown: u32,
}

impl<B: AuthBackend> AuthFlow<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            view: AuthView::Main,
            mode: AuthMode::Login,
            name: String::new(),
            phone: String::new(),
            password: String::new(),
            new_password: String::new(),
            otp: [None; OTP_LEN],
            otp_purpose: OtpPurpose::Register,
            resend_countdown: 0,
        }
    }

    pub fn view(&self) -> AuthView {
        self.view
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn resend_countdown(&self) -> u32 {
        self.resend_countdown
    }

    /// Switch between login and registration, clearing the name
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.name.clear();
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Keeps digits only, after normalising Arabic-Indic ones
    pub fn set_phone(&mut self, phone: &str) {
        self.phone = normalize_digits(phone)
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
    }

    pub fn set_password(&mut self, password: &str) {
        self.password = normalize_digits(password);
    }

    pub fn set_new_password(&mut self, password: &str) {
        self.new_password = normalize_digits(password);
    }

    fn phone_valid(&self) -> bool {
        self.phone.len() >= MIN_PHONE_LEN
    }

    pub fn is_form_valid(&self) -> bool {
        let base = self.phone_valid() && self.password.chars().count() >= MIN_PASSWORD_LEN;
        match self.mode {
            AuthMode::Login => base,
            AuthMode::Register => base && self.name.trim().chars().count() >= MIN_NAME_LEN,
        }
    }

    /// Set one OTP box. Only the last typed character is kept and it must be
    /// a digit; an empty value clears the box.
    pub fn enter_otp_digit(&mut self, index: usize, value: &str) {
        if index >= OTP_LEN {
            return;
        }
        let normalized = normalize_digits(value);
        match normalized.chars().last() {
            None => self.otp[index] = None,
            Some(c) if c.is_ascii_digit() => self.otp[index] = Some(c),
            Some(_) => {}
        }
    }

    pub fn otp_complete(&self) -> bool {
        self.otp.iter().all(Option::is_some)
    }

    fn otp_code(&self) -> String {
        self.otp.iter().flatten().collect()
    }

    /// Advance the resend countdown by one second while the code screen is up
    pub fn tick(&mut self) {
        if self.view == AuthView::Otp && self.resend_countdown > 0 {
            self.resend_countdown -= 1;
        }
    }

    pub fn can_resend(&self) -> bool {
        self.view == AuthView::Otp && self.resend_countdown == 0
    }

    /// Return to the main screen from any intermediate screen
    pub fn back(&mut self) {
        if !matches!(self.view, AuthView::Main | AuthView::Success) {
            self.move_to(AuthView::Main);
        }
    }

    /// Open the forgot-password screen. If a valid phone is already entered
    /// a code is sent straight away.
    pub async fn forgot_password(&mut self) -> Result<FlowStep> {
        if self.view != AuthView::Main {
            return Ok(FlowStep::Stayed);
        }
        if self.phone_valid() {
            return self.send_otp(OtpPurpose::PasswordReset).await;
        }
        self.move_to(AuthView::ForgotPassword);
        Ok(FlowStep::Moved(AuthView::ForgotPassword))
    }

    /// Submit whatever the current screen holds
    pub async fn submit(&mut self) -> Result<FlowStep> {
        match self.view {
            AuthView::Main => self.submit_main().await,
            AuthView::ForgotPassword => {
                if !self.phone_valid() {
                    return Ok(FlowStep::Stayed);
                }
                self.send_otp(OtpPurpose::PasswordReset).await
            }
            AuthView::Otp => self.verify_otp().await,
            AuthView::ResetPassword => self.submit_new_password().await,
            AuthView::Success => Ok(FlowStep::Stayed),
        }
    }

    async fn submit_main(&mut self) -> Result<FlowStep> {
        if !self.is_form_valid() {
            return Ok(FlowStep::Stayed);
        }

        match self.mode {
            AuthMode::Login => {
                self.backend
                    .login(&self.phone, &self.password)
                    .await
                    .context("Login failed")?;
                info!("Logged in {} via {}", self.phone, self.backend.backend_name());
                self.move_to(AuthView::Success);
                Ok(FlowStep::Completed(self.success()))
            }
            AuthMode::Register => self.send_otp(OtpPurpose::Register).await,
        }
    }

    async fn send_otp(&mut self, purpose: OtpPurpose) -> Result<FlowStep> {
        self.backend
            .request_otp(&self.phone)
            .await
            .context("Failed to send verification code")?;
        self.otp_purpose = purpose;
        self.otp = [None; OTP_LEN];
        self.resend_countdown = OTP_RESEND_SECS;
        self.move_to(AuthView::Otp);
        Ok(FlowStep::Moved(AuthView::Otp))
    }

    /// Send a fresh code once the countdown has run out
    pub async fn resend_otp(&mut self) -> Result<FlowStep> {
        if !self.can_resend() {
            return Ok(FlowStep::Stayed);
        }
        self.send_otp(self.otp_purpose).await
    }

    pub async fn verify_otp(&mut self) -> Result<FlowStep> {
        if self.view != AuthView::Otp || !self.otp_complete() {
            return Ok(FlowStep::Stayed);
        }

        let code = self.otp_code();
        self.backend
            .verify_otp(&self.phone, &code)
            .await
            .context("Verification failed")?;

        match self.otp_purpose {
            OtpPurpose::Register => {
                info!("Registered {}", self.phone);
                self.move_to(AuthView::Success);
                Ok(FlowStep::Completed(self.success()))
            }
            OtpPurpose::PasswordReset => {
                self.move_to(AuthView::ResetPassword);
                Ok(FlowStep::Moved(AuthView::ResetPassword))
            }
        }
    }

    async fn submit_new_password(&mut self) -> Result<FlowStep> {
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Ok(FlowStep::Stayed);
        }
        self.backend
            .reset_password(&self.phone, &self.new_password)
            .await
            .context("Password reset failed")?;
        info!("Password reset for {}", self.phone);
        self.password = std::mem::take(&mut self.new_password);
        self.move_to(AuthView::Success);
        Ok(FlowStep::Completed(self.success()))
    }

    fn success(&self) -> AuthSuccess {
        let name = self.name.trim();
        AuthSuccess {
            phone: self.phone.clone(),
            name: (!name.is_empty()).then(|| name.to_string()),
        }
    }

    fn move_to(&mut self, view: AuthView) {
        debug!("Auth view {:?} -> {:?}", self.view, view);
        self.view = view;
    }
}

/// The signed-in user for a completed login: a known member by phone, or a
/// fresh employee account.
pub fn resolve_user(users: &[User], success: &AuthSuccess) -> User {
    if let Some(user) = users.iter().find(|u| u.phone == success.phone) {
        return user.clone();
    }

    User {
        id: "new_user".to_string(),
        name: success
            .name
            .clone()
            .unwrap_or_else(|| NEW_USER_NAME.to_string()),
        phone: success.phone.clone(),
        role: UserRole::Employee,
        company_id: DEFAULT_COMPANY_ID.to_string(),
        assigned_credits: NEW_USER_CREDITS,
        used_credits: 0,
    }
}
