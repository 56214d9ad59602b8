use async_graphql::{EmptySubscription, Schema};

pub use crate::modules::appointments::use_cases::create_appointment::inbound::graphql::MutationRoot;
pub use crate::modules::appointments::use_cases::list_appointments_by_user::inbound::graphql::QueryRoot;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
