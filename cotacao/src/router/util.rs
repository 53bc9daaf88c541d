use cotacao_core::{Capability, CotacaoError};

/// Join a collection of tasks and apply an optional request-level deadline.
///
/// This wraps `futures::future::join_all(tasks)` in `tokio::time::timeout`.
/// On timeout it returns `RequestTimeout` labeled with the given capability.
///
/// # Errors
/// Returns `RequestTimeout` when the deadline elapses before all tasks
/// complete.
pub async fn join_with_deadline<I, F, T>(
    tasks: I,
    deadline: Option<std::time::Duration>,
    capability: Capability,
) -> Result<Vec<T>, CotacaoError>
where
    I: IntoIterator<Item = F>,
    F: core::future::Future<Output = T>,
{
    let joined = futures::future::join_all(tasks);
    match deadline {
        Some(d) => (tokio::time::timeout(d, joined).await)
            .map_err(|_| CotacaoError::request_timeout(capability.as_str())),
        None => Ok(joined.await),
    }
}
