use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("please fill in your {0}")]
    MissingField(&'static str),
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("could not encode message: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("message relay answered with status {0}")]
    Status(u16),
}

/// Body posted to the form relay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactPayload {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if self.message.is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        if !looks_like_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ContactError> {
        self.validate()?;
        serde_json::to_string(self).map_err(|e| ContactError::Encode(e.to_string()))
    }
}

fn looks_like_email(s: &str) -> bool {
    let mut parts = s.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut labels = domain.split('.');
    domain.contains('.') && labels.all(|l| !l.is_empty())
}

/// Map a relay HTTP status to the submission outcome.
#[inline]
pub fn check_status(status: u16) -> Result<(), ContactError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ContactError::Status(status))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Sent => "Message Sent",
            Notice::Failed => "Message Not Sent",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Notice::Sent => "Thanks for reaching out! I'll get back to you soon.",
            Notice::Failed => "Something went wrong. Please check the form and try again.",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Notice::Sent => "notice-success",
            Notice::Failed => "notice-error",
        }
    }
}

/// Guards against double submission while a request is in flight.
#[derive(Debug, Default)]
pub struct Submission {
    in_flight: bool,
}

impl Submission {
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Finish the in-flight request and pick the notice to show.
    pub fn finish(&mut self, outcome: &Result<(), ContactError>) -> Notice {
        self.in_flight = false;
        match outcome {
            Ok(()) => Notice::Sent,
            Err(_) => Notice::Failed,
        }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}
