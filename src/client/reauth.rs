//! Transparent reauthentication.

use std::future::Future;

use tracing::warn;

use crate::Result;

/// Run `perform`, recovering once from a rejected bearer token.
///
/// If the first attempt fails with an error for which
/// [`Error::is_invalid_authorization`](crate::Error::is_invalid_authorization)
/// holds, `refresh` runs and `perform` is attempted exactly one more time.
/// The second attempt's result is returned as-is. Any other failure, and
/// any failure of `refresh`, is returned unchanged without a retry.
pub(crate) async fn with_reauth<T, P, PF, R, RF>(mut perform: P, refresh: R) -> Result<T>
where
    P: FnMut() -> PF,
    PF: Future<Output = Result<T>>,
    R: FnOnce() -> RF,
    RF: Future<Output = Result<()>>,
{
    match perform().await {
        Err(err) if err.is_invalid_authorization() => {
            warn!(error = %err, "authorization rejected, logging in again");
            refresh().await?;
            perform().await
        }
        result => result,
    }
}
