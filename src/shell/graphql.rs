use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;

use crate::modules::parking::use_cases::check_in::inbound::graphql::CheckInMutation;
use crate::modules::parking::use_cases::check_out::inbound::graphql::CheckOutMutation;
use crate::modules::parking::use_cases::get_vehicle::inbound::graphql::VehicleQuery;
use crate::modules::parking::use_cases::list_free_spots::inbound::graphql::FreeSpotsQuery;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(FreeSpotsQuery, VehicleQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(CheckInMutation, CheckOutMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
