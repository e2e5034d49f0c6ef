/// Declarative flag descriptions shared by the command table and the parser.
use chrono::Local;

use crate::invocation::FlagValue;

/// Environment variable consulted when `--bucket` is not passed.
pub const BUCKET_ENV: &str = "AQ_DEFAULT_BUCKET";

/// How a flag's raw text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Free-form string value.
    Text,
    /// Signed integer value.
    Integer,
    /// Presence flag; takes no value on the command line.
    Switch,
}

impl FlagKind {
    /// Value a flag takes when nothing (CLI, environment, default) sets it.
    #[must_use]
    pub fn empty(self) -> FlagValue {
        match self {
            Self::Text => FlagValue::Text(String::new()),
            Self::Integer => FlagValue::Integer(0),
            Self::Switch => FlagValue::Switch(false),
        }
    }

    /// Interpret raw text (from the environment or a default) as this kind.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem when `raw` is not a valid
    /// integer or boolean for the respective kinds.
    pub fn parse(self, raw: &str) -> Result<FlagValue, String> {
        match self {
            Self::Text => Ok(FlagValue::Text(raw.to_owned())),
            Self::Integer => raw
                .trim()
                .parse::<i64>()
                .map(FlagValue::Integer)
                .map_err(|e| format!("'{raw}' is not an integer: {e}")),
            Self::Switch => match raw.trim().to_ascii_lowercase().as_str() {
                "" | "0" | "f" | "false" | "no" => Ok(FlagValue::Switch(false)),
                "1" | "t" | "true" | "yes" => Ok(FlagValue::Switch(true)),
                _ => Err(format!("'{raw}' is not a boolean")),
            },
        }
    }
}

/// Where a flag's value comes from when it is not passed explicitly and no
/// environment fallback applies.
#[derive(Debug, Clone, Copy)]
pub enum FlagDefault {
    /// No default; the flag resolves to its kind's empty value.
    Unset,
    /// Fixed raw value.
    Value(&'static str),
    /// Evaluated each time an invocation is parsed.
    Computed(fn() -> String),
}

impl FlagDefault {
    /// Raw default text, if any, evaluated now.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        match self {
            Self::Unset => None,
            Self::Value(v) => Some((*v).to_owned()),
            Self::Computed(f) => Some(f()),
        }
    }
}

/// One configurable option of a command.
#[derive(Debug, Clone)]
pub struct FlagSpec {
    /// Long name, used as `--name`.
    pub name: &'static str,
    /// Single-letter alias, used as `-x`.
    pub short: char,
    pub kind: FlagKind,
    pub default: FlagDefault,
    /// Environment variable consulted when the flag is not passed.
    pub env: Option<&'static str>,
    pub help: &'static str,
}

impl FlagSpec {
    #[must_use]
    pub const fn text(name: &'static str, short: char, help: &'static str) -> Self {
        Self {
            name,
            short,
            kind: FlagKind::Text,
            default: FlagDefault::Unset,
            env: None,
            help,
        }
    }

    #[must_use]
    pub const fn integer(name: &'static str, short: char, help: &'static str) -> Self {
        Self {
            kind: FlagKind::Integer,
            ..Self::text(name, short, help)
        }
    }

    #[must_use]
    pub const fn switch(name: &'static str, short: char, help: &'static str) -> Self {
        Self {
            kind: FlagKind::Switch,
            ..Self::text(name, short, help)
        }
    }

    #[must_use]
    pub const fn default_value(mut self, value: &'static str) -> Self {
        self.default = FlagDefault::Value(value);
        self
    }

    #[must_use]
    pub const fn default_with(mut self, f: fn() -> String) -> Self {
        self.default = FlagDefault::Computed(f);
        self
    }

    #[must_use]
    pub const fn env(mut self, var: &'static str) -> Self {
        self.env = Some(var);
        self
    }
}

/// `--bucket`, shared by every command.
#[must_use]
pub fn bucket() -> FlagSpec {
    FlagSpec::text("bucket", 'b', "S3 bucket where the query result is stored.").env(BUCKET_ENV)
}

/// `--object_prefix`, shared by every command.
#[must_use]
pub fn object_prefix() -> FlagSpec {
    FlagSpec::text(
        "object_prefix",
        'o',
        "S3 object prefix where the query result is stored.",
    )
    .default_with(unsaved_prefix)
}

/// Default result prefix: `Unsaved/YYYY/MM/DD` for today's local date.
#[must_use]
pub fn unsaved_prefix() -> String {
    Local::now().format("Unsaved/%Y/%m/%d").to_string()
}
