//! Static form descriptions driving the generic engine.
//!
//! DESIGN
//! ======
//! A form is data: its ordered fields with one rule each, the endpoint it
//! posts to, how the success payload turns into a banner message, whether a
//! token is persisted, and where the user lands afterwards. The sign-in and
//! sign-up views differ only in the schema they hand to the engine.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

/// Storage key the auth token is written under.
pub const TOKEN_KEY: &str = "token";

/// Banner text used when a failed submission carries no usable body.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// HTML input type rendered for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
}

impl InputKind {
    /// Value for the `type` attribute of the rendered `<input>`.
    #[must_use]
    pub fn as_html(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Validation rule attached to a single field. First failing check wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Trimmed value must be non-empty.
    Required { message: &'static str },
    /// Trimmed value must be non-empty, then the raw value must pass
    /// [`crate::email::is_valid_email`].
    Email { required: &'static str, invalid: &'static str },
    /// Trimmed value must be non-empty, then the raw value must equal the raw
    /// value of `field`.
    Confirms { field: &'static str, required: &'static str, mismatch: &'static str },
}

/// One input of a form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field key; also the JSON key in the request payload.
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub rule: Rule,
}

/// How the banner message is derived from a success payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuccessMessage {
    /// Read the named member of a JSON object payload.
    Field(&'static str),
    /// Show the whole payload.
    Payload,
}

/// Link to the sibling view rendered under the submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlternateLink {
    pub prompt: &'static str,
    pub label: &'static str,
    pub route: &'static str,
}

/// Complete description of one auth form.
#[derive(Debug, PartialEq, Eq)]
pub struct FormSchema {
    pub title: &'static str,
    pub submit_label: &'static str,
    /// Endpoint path passed to the transport, e.g. `/signin`.
    pub endpoint: &'static str,
    pub fields: &'static [FieldSpec],
    pub success_message: SuccessMessage,
    /// Payload member persisted under [`TOKEN_KEY`] on success.
    pub token_field: Option<&'static str>,
    /// Route navigated to once the success banner expires.
    pub success_route: &'static str,
    pub alternate: AlternateLink,
}

impl FormSchema {
    /// Look up a field by key.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field keys in display order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

const PASSWORD_REQUIRED: &str = "Password required";

const EMAIL_FIELD: FieldSpec = FieldSpec {
    name: "Email",
    label: "Email",
    input: InputKind::Email,
    rule: Rule::Email { required: "Email ID is required", invalid: "Invalid email format" },
};

const PASSWORD_FIELD: FieldSpec = FieldSpec {
    name: "Password",
    label: "Password",
    input: InputKind::Password,
    rule: Rule::Required { message: PASSWORD_REQUIRED },
};

/// Sign-in form: `POST /signin` with `{ Email, Password }`, stores the token,
/// lands on `/`.
pub static SIGN_IN: FormSchema = FormSchema {
    title: "Welcome to My Blog",
    submit_label: "Sign In",
    endpoint: "/signin",
    fields: &[EMAIL_FIELD, PASSWORD_FIELD],
    success_message: SuccessMessage::Field("message"),
    token_field: Some("token"),
    success_route: "/",
    alternate: AlternateLink { prompt: "Don't Have An Account?", label: "Sign Up", route: "/signup" },
};

/// Sign-up form: `POST /signup` with
/// `{ userName, Email, Password, correctPassword }`, lands on `/signin`.
pub static SIGN_UP: FormSchema = FormSchema {
    title: "Register in My Blog",
    submit_label: "Register",
    endpoint: "/signup",
    fields: &[
        FieldSpec {
            name: "userName",
            label: "Username",
            input: InputKind::Text,
            rule: Rule::Required { message: "User Name is required" },
        },
        EMAIL_FIELD,
        PASSWORD_FIELD,
        FieldSpec {
            name: "correctPassword",
            label: "Confirm Password",
            input: InputKind::Password,
            rule: Rule::Confirms { field: "Password", required: PASSWORD_REQUIRED, mismatch: "Password mismatch" },
        },
    ],
    success_message: SuccessMessage::Payload,
    token_field: None,
    success_route: "/signin",
    alternate: AlternateLink { prompt: "Already Have An Account?", label: "Sign In", route: "/signin" },
};
