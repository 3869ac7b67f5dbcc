//! Timestamp query parsing helpers.

use jiff::Timestamp;
use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::ResultExt;

pub(crate) trait TimestampParamExt {
    fn into_optional_timestamp(self, name: &str) -> Result<Option<Timestamp>, StatusError>;
}

impl TimestampParamExt for QueryParam<String, false> {
    fn into_optional_timestamp(self, name: &str) -> Result<Option<Timestamp>, StatusError> {
        self.into_inner()
            .map(|value| value.parse::<Timestamp>())
            .transpose()
            .or_400(name)
    }
}
