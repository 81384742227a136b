// Waiting for answers the host writes into its result slots.

use std::time::Duration;

use tokio::time::Instant;

use crate::error::BridgeError;

/// Calls `poll` every `interval` until it yields a value or fails
///
/// With `timeout == None` this waits for as long as the host needs, which is
/// what screens the user works through at their own pace need.
#[cfg_attr(not(target_os = "android"), allow(dead_code))]
pub(crate) async fn poll_until<F>(
    what: &str,
    timeout: Option<Duration>,
    interval: Duration,
    mut poll: F,
) -> Result<String, BridgeError>
where
    F: FnMut() -> Result<Option<String>, BridgeError>,
{
    let deadline = timeout.map(|t| Instant::now() + t);

    loop {
        if let Some(value) = poll()? {
            log::debug!("Bridge: {} answered", what);
            return Ok(value);
        }

        if let (Some(deadline), Some(timeout)) = (deadline, timeout) {
            if Instant::now() >= deadline {
                return Err(BridgeError::Timeout(format!(
                    "{} gave no answer within {:?}",
                    what, timeout
                )));
            }
        }

        tokio::time::sleep(interval).await;
    }
}
