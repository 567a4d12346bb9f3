use crate::domain::errors::ScoreError;
use crate::domain::ports::ScoreStore;

// Response returned by the score submission use case.
pub struct SubmitScoreResult {
    pub id: u64,
}

// Score submission use case with injected storage.
pub struct SubmitScoreUseCase<S> {
    pub store: S,
}

impl<S> SubmitScoreUseCase<S>
where
    S: ScoreStore,
{
    pub async fn execute(&self, name: &str, time_ms: u64) -> Result<SubmitScoreResult, ScoreError> {
        let name = validate_name(name)?;
        if time_ms == 0 {
            return Err(ScoreError::InvalidTime);
        }

        let id = self
            .store
            .insert(&name, time_ms)
            .await
            .map_err(|_| ScoreError::StorageFailure)?;

        Ok(SubmitScoreResult { id })
    }
}

fn validate_name(value: &str) -> Result<String, ScoreError> {
    // Keep names compact enough for the in-game leaderboard panel.
    const MAX_LEN: usize = 50;

    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_LEN {
        return Err(ScoreError::InvalidName);
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{FailureFlags, RecordingStore};

    #[tokio::test]
    async fn when_the_payload_is_valid_then_the_row_is_stored_and_an_id_returned() {
        let store = RecordingStore::new();
        let use_case = SubmitScoreUseCase {
            store: store.clone(),
        };

        let result = use_case
            .execute("Ada", 65_234)
            .await
            .expect("expected submission to succeed");

        assert_eq!(result.id, 1);
        let rows = store.stored_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ada");
        assert_eq!(rows[0].time_ms, 65_234);
    }

    #[tokio::test]
    async fn when_the_name_has_surrounding_whitespace_then_it_is_stored_trimmed() {
        let store = RecordingStore::new();
        let use_case = SubmitScoreUseCase {
            store: store.clone(),
        };

        use_case
            .execute("  Ada  ", 1_000)
            .await
            .expect("expected trimmed name to be valid");

        assert_eq!(store.stored_rows()[0].name, "Ada");
    }

    #[tokio::test]
    async fn when_the_name_is_blank_then_returns_invalid_name() {
        let use_case = SubmitScoreUseCase {
            store: RecordingStore::new(),
        };

        let result = use_case.execute("   ", 1_000).await;

        assert!(matches!(result, Err(ScoreError::InvalidName)));
    }

    #[tokio::test]
    async fn when_the_name_is_fifty_characters_then_it_is_accepted() {
        let use_case = SubmitScoreUseCase {
            store: RecordingStore::new(),
        };

        let result = use_case.execute(&"a".repeat(50), 1_000).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn when_the_name_is_fifty_one_characters_then_returns_invalid_name() {
        let use_case = SubmitScoreUseCase {
            store: RecordingStore::new(),
        };

        let result = use_case.execute(&"a".repeat(51), 1_000).await;

        assert!(matches!(result, Err(ScoreError::InvalidName)));
    }

    #[tokio::test]
    async fn when_the_time_is_zero_then_returns_invalid_time() {
        let use_case = SubmitScoreUseCase {
            store: RecordingStore::new(),
        };

        let result = use_case.execute("Ada", 0).await;

        assert!(matches!(result, Err(ScoreError::InvalidTime)));
    }

    #[tokio::test]
    async fn when_the_store_insert_fails_then_returns_storage_failure() {
        let use_case = SubmitScoreUseCase {
            store: RecordingStore::new().with_failures(FailureFlags {
                insert: true,
                ..Default::default()
            }),
        };

        let result = use_case.execute("Ada", 1_000).await;

        assert!(matches!(result, Err(ScoreError::StorageFailure)));
    }
}
