//! Field format contracts for cultor submissions.
//!
//! The patterns are part of the public contract with clients and must not
//! drift. Each `is_valid_*` function expects an already-trimmed value.

use std::sync::LazyLock;

use regex::Regex;

/// `<V|E>-<1..8 digits>`.
pub const ID_NUMBER_PATTERN: &str = r"^[VE]-\d{1,8}$";

/// Venezuelan mobile number `04XX-XXXXXXX` on one of the allowed carriers.
pub const PHONE_NUMBER_PATTERN: &str = r"^04(12|14|16|24|26)-\d{7}$";

pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]{1,64}@[a-zA-Z0-9.-]{1,184}\.[a-zA-Z]{2,10}$";

/// Instagram handle without the "no consecutive `.`/`_`" rule, which the
/// `regex` crate cannot express as a lookahead; see [`is_valid_instagram_user`].
pub const INSTAGRAM_USER_PATTERN: &str = r"^[a-zA-Z0-9](?:[a-zA-Z0-9._]{0,28}[a-zA-Z0-9])?$";

pub const PERSONAL_NAME_PATTERN: &str =
    r"^[A-Za-zÁÉÍÓÚáéíóúÑñ]+([ '\-][A-Za-zÁÉÍÓÚáéíóúÑñ]+)*$";

/// Free text: addresses, group names, health notes, custom disciplines.
/// Whitespace is the ASCII set only.
pub const FREE_TEXT_PATTERN: &str = r"^[A-Za-zÁÉÍÓÚáéíóúÑñ0-9\t\n\x0B\f\r \-',.]{0,100}$";

static ID_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ID_NUMBER_PATTERN).expect("valid regex"));
static PHONE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_NUMBER_PATTERN).expect("valid regex"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));
static INSTAGRAM_USER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(INSTAGRAM_USER_PATTERN).expect("valid regex"));
static PERSONAL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PERSONAL_NAME_PATTERN).expect("valid regex"));
static FREE_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FREE_TEXT_PATTERN).expect("valid regex"));

pub fn is_valid_id_number(value: &str) -> bool {
    ID_NUMBER_RE.is_match(value)
}

pub fn is_valid_phone_number(value: &str) -> bool {
    PHONE_NUMBER_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_instagram_user(value: &str) -> bool {
    INSTAGRAM_USER_RE.is_match(value)
        && !value
            .as_bytes()
            .windows(2)
            .any(|w| matches!(w[0], b'.' | b'_') && matches!(w[1], b'.' | b'_'))
}

pub fn is_valid_personal_name(value: &str) -> bool {
    PERSONAL_NAME_RE.is_match(value)
}

/// Blank input is accepted; callers decide whether the field is required.
pub fn is_valid_free_text(value: &str) -> bool {
    FREE_TEXT_RE.is_match(value)
}
