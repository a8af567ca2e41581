pub mod fixed;

use async_trait::async_trait;

use crate::errors::RequestError;
use crate::models::Elder;

/// The caller's account/profile collaborator: who is booking, and which
/// elders they may book for. The engines never hardcode identity.
#[async_trait]
pub trait AccountService: Send + Sync {
    fn current_user_id(&self) -> i64;

    async fn list_elders(&self) -> Result<Vec<Elder>, RequestError>;
}
