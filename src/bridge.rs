use std::future::Future;
use std::io;

/// Runs a single asynchronous operation to completion on a dedicated
/// single-threaded runtime, blocking the calling thread until it finishes.
///
/// The runtime is built per call and dropped before returning, so no
/// scheduling state survives between requests.
pub fn execute<F: Future>(future: F) -> io::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    #[test]
    fn returns_operation_output_unmodified() {
        let output = execute(async { "Bonjour, comment ça va ?".to_owned() }).unwrap();
        assert_eq!(output, "Bonjour, comment ça va ?");
    }

    #[test]
    fn propagates_operation_errors_unchanged() {
        let output = execute(async { Err::<(), _>(anyhow!("connection reset")) }).unwrap();
        assert_eq!(output.unwrap_err().to_string(), "connection reset");
    }

    #[test]
    fn each_call_gets_a_fresh_runtime() {
        for i in 0..3 {
            let output = execute(async move { i * 2 }).unwrap();
            assert_eq!(output, i * 2);
        }
    }
}
