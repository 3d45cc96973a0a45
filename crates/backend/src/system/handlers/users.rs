use axum::extract::{Json, State};
use contracts::system::auth::UserInfo;

use crate::state::SharedState;

/// User directory listing (role-gated in routes)
pub async fn list(State(app): State<SharedState>) -> Json<Vec<UserInfo>> {
    Json(app.users.list())
}
