//! Concurrency-bounded batch capture.

use crate::ShotClient;
use futures_util::future::try_join_all;
use shotapi_core::{validate_options, Result, ScreenshotOptions, ScreenshotResponse};
use tracing::debug;

impl ShotClient {
    /// Capture many URLs with shared options.
    ///
    /// URLs are split into consecutive chunks of at most `max_concurrent`.
    /// Requests within a chunk run concurrently; chunks run one after
    /// another with a short pause in between. Results are returned in input
    /// order. The first failure aborts the whole batch and no partial
    /// results are returned.
    pub async fn batch<S: AsRef<str>>(
        &self,
        urls: &[S],
        options: &ScreenshotOptions,
    ) -> Result<Vec<ScreenshotResponse>> {
        let requests = urls
            .iter()
            .map(|url| options.for_url(url.as_ref()))
            .collect::<Vec<_>>();

        // Reject malformed items before touching the network
        for request in &requests {
            validate_options(request)?;
        }

        let config = self.config();
        let mut results = Vec::with_capacity(requests.len());

        for (index, chunk) in chunks(&requests, config.max_concurrent).enumerate() {
            if index > 0 {
                tokio::time::sleep(config.batch_pacing).await;
            }
            debug!(chunk = index, size = chunk.len(), "dispatching batch chunk");

            let captured = try_join_all(chunk.iter().map(|request| self.screenshot(request))).await?;
            results.extend(captured);
        }

        Ok(results)
    }
}

/// Split `items` into consecutive chunks of at most `size` (minimum 1)
pub(crate) fn chunks<T>(items: &[T], size: usize) -> std::slice::Chunks<'_, T> {
    items.chunks(size.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_sizes() {
        let urls = ["a", "b", "c", "d", "e", "f"];
        let sizes: Vec<usize> = chunks(&urls, 2).map(<[_]>::len).collect();
        assert_eq!(sizes, vec![2, 2, 2]);

        let sizes: Vec<usize> = chunks(&urls, 4).map(<[_]>::len).collect();
        assert_eq!(sizes, vec![4, 2]);
    }

    #[test]
    fn test_chunks_preserve_order() {
        let urls = ["a", "b", "c", "d", "e"];
        let flattened: Vec<&str> = chunks(&urls, 2).flatten().copied().collect();
        assert_eq!(flattened, urls);
    }

    #[test]
    fn test_zero_size_is_clamped() {
        let urls = ["a", "b"];
        assert_eq!(chunks(&urls, 0).count(), 2);
        assert_eq!(chunks::<&str>(&[], 3).count(), 0);
    }
}
