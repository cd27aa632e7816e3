//! GraphQL client for integration testing.
//!
//! Executes GraphQL queries directly against the schema without HTTP overhead.

use juniper::{InputValue, Variables};
use serde::Serialize;
use serde_json::Value;
use social_core::kernel::EntityStore;
use social_core::server::graphql::{create_schema, GraphQLContext, Schema};
use std::sync::Arc;

/// Builds GraphQL variables from serializable values.
///
/// Input objects are passed as `json!` values:
/// `vars! { "data" => json!({ "firstName": "Ann" }) }`.
#[macro_export]
macro_rules! vars {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut vars = juniper::Variables::new();
        $(
            vars.insert($key.to_string(), $crate::common::input_value(&$value));
        )*
        vars
    }};
}

/// Converts a serializable value into a GraphQL input value.
pub fn input_value(value: &impl Serialize) -> InputValue {
    let json = serde_json::to_value(value).expect("Variable is not serializable");
    serde_json::from_value(json).expect("Variable is not a GraphQL input value")
}

/// GraphQL client for executing queries and mutations in tests.
pub struct GraphQLClient {
    schema: Schema,
    context: GraphQLContext,
}

/// Result of a GraphQL execution.
#[derive(Debug)]
pub struct GraphQLResult {
    pub data: Option<Value>,
    pub errors: Vec<String>,
    /// `extensions.code` of each error, in the same order as `errors`.
    pub codes: Vec<Option<String>>,
}

impl GraphQLResult {
    /// Returns true if the execution had no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Unwraps the data, panicking if there were errors.
    pub fn unwrap(self) -> Value {
        if !self.errors.is_empty() {
            panic!("GraphQL errors: {:?}", self.errors);
        }
        self.data.expect("No data returned")
    }

    /// Gets a value at the given JSON path.
    ///
    /// # Example
    /// ```ignore
    /// let name = result.get("user.firstName").as_str();
    /// ```
    pub fn get(&self, path: &str) -> Value {
        let data = self.data.as_ref().expect("No data returned");
        let mut current = data;
        for key in path.split('.') {
            current = &current[key];
        }
        current.clone()
    }

    /// The single error code, panicking unless exactly one error was returned.
    pub fn error_code(&self) -> &str {
        assert_eq!(self.codes.len(), 1, "expected one error, got {:?}", self.errors);
        self.codes[0].as_deref().expect("error without code")
    }
}

impl GraphQLClient {
    /// Creates a new GraphQL client over the given store.
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self {
            schema: create_schema(),
            context: GraphQLContext::new(store),
        }
    }

    /// Execute a GraphQL query/mutation.
    pub async fn execute(&self, query: &str) -> GraphQLResult {
        self.execute_with_vars(query, Variables::new()).await
    }

    /// Execute a GraphQL query/mutation with variables.
    pub async fn execute_with_vars(&self, query: &str, variables: Variables) -> GraphQLResult {
        let (result, errors) =
            juniper::execute(query, None, &self.schema, &variables, &self.context)
                .await
                .expect("GraphQL execution failed");

        // Convert juniper::Value to serde_json::Value
        let data = Some(serde_json::to_value(&result).expect("Failed to serialize GraphQL result"));

        let error_messages: Vec<String> = errors
            .iter()
            .map(|e| e.error().message().to_string())
            .collect();

        let codes = errors
            .iter()
            .map(|e| {
                e.error()
                    .extensions()
                    .as_object_value()
                    .and_then(|extensions| extensions.get_field_value("code"))
                    .and_then(|code| code.as_string_value())
                    .map(String::from)
            })
            .collect();

        GraphQLResult {
            data,
            errors: error_messages,
            codes,
        }
    }

    /// Execute a query and expect success, returning the data.
    pub async fn query(&self, query: &str) -> Value {
        self.execute(query).await.unwrap()
    }

    /// Execute a query with variables and expect success.
    pub async fn query_with_vars(&self, query: &str, variables: Variables) -> Value {
        self.execute_with_vars(query, variables).await.unwrap()
    }
}
