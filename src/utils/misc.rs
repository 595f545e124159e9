use std::{
    str::FromStr,
    time::{SystemTime, UNIX_EPOCH},
};

use super::AppError;

/// Get EPOCH timestamp in seconds
pub fn get_epoch_ts() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(n) => n.as_secs(),
        Err(_) => panic!("SystemTime before UNIX EPOCH!"),
    }
}

/// Read an env variable, falling back to `default` when it is missing or
/// does not parse
pub fn get_env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<T>().ok())
        .unwrap_or(default)
}

/// Parse a numeric id received in the path
pub fn parse_id(id: &str, error_message: &str) -> Result<u32, AppError> {
    let id = id.trim().parse::<u32>().map_err(|err| {
        tracing::debug!("{:?}", err);
        AppError::BadRequestErr(error_message.into())
    })?;
    Ok(id)
}
