use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::parking::use_cases::list_free_spots::handler::list_free_spots;
use crate::modules::parking::use_cases::list_free_spots::projection::SpotView;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct FreeSpotsQuery;

#[Object]
impl FreeSpotsQuery {
    async fn free_spots(&self, context: &Context<'_>) -> GqlResult<Vec<SpotView>> {
        let state = context.data_unchecked::<AppState>();
        list_free_spots(state.spots.as_ref())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }
}
