use async_trait::async_trait;

use super::AccountService;
use crate::errors::RequestError;
use crate::models::Elder;

/// Account backed by data supplied at construction. Used by the demo
/// binary and tests until a real profile service is wired in.
pub struct FixedAccount {
    user_id: i64,
    elders: Vec<Elder>,
}

impl FixedAccount {
    pub fn new(user_id: i64, elders: Vec<Elder>) -> Self {
        Self { user_id, elders }
    }
}

#[async_trait]
impl AccountService for FixedAccount {
    fn current_user_id(&self) -> i64 {
        self.user_id
    }

    async fn list_elders(&self) -> Result<Vec<Elder>, RequestError> {
        Ok(self.elders.clone())
    }
}
