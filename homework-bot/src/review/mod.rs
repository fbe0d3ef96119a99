//! Response validation and message formatting. No I/O.

mod formatter;
mod validator;

pub use formatter::{
    failure_report, format_status, no_submissions, status_update, StatusUpdate, FAILURE_PREFIX,
    NO_SUBMISSIONS_MESSAGE,
};
pub use validator::validate;
