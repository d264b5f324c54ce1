//! Ability invocation.
//!
//! Abilities annotated `readonly: true` run with `GET`, passing their input as
//! a JSON string in the `input` query parameter. Everything else runs with
//! `POST` and a `{"input": ...}` body. Arguments are dropped for abilities whose
//! schema declares no input. Each invocation is exactly one request, with no
//! retries.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;

use super::client::AbilitiesClient;
use crate::{error::BridgeResult, inventory::Ability, transform::accepts_input};

/// Outbound request derived from an ability and the caller's arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationPlan {
    pub method: Method,
    pub url: String,
    /// JSON-encoded arguments for the `input` query parameter (GET only).
    pub query_input: Option<String>,
    /// Request body (POST only).
    pub body: Option<Value>,
}

/// Absent and `{}` mean "no input supplied". Any other value, `null` and
/// falsy primitives included, counts as supplied.
pub fn has_arguments(arguments: Option<&Value>) -> bool {
    match arguments {
        None => false,
        Some(Value::Object(map)) => !map.is_empty(),
        Some(_) => true,
    }
}

pub struct InvocationDispatcher {
    client: Arc<AbilitiesClient>,
}

impl InvocationDispatcher {
    pub fn new(client: Arc<AbilitiesClient>) -> Self {
        Self { client }
    }

    /// Advertised execution link, or `{base}/abilities/{name}/run`.
    pub fn target_url(&self, ability: &Ability) -> String {
        ability
            .execution_link()
            .map(str::to_string)
            .unwrap_or_else(|| self.client.run_url(&ability.name))
    }

    pub fn plan(
        &self,
        ability: &Ability,
        arguments: Option<&Value>,
    ) -> BridgeResult<InvocationPlan> {
        let url = self.target_url(ability);
        let input =
            arguments.filter(|args| accepts_input(ability) && has_arguments(Some(*args)));

        let plan = if ability.is_readonly() {
            InvocationPlan {
                method: Method::GET,
                url,
                query_input: input.map(serde_json::to_string).transpose()?,
                body: None,
            }
        } else {
            InvocationPlan {
                method: Method::POST,
                url,
                query_input: None,
                body: Some(match input {
                    Some(args) => json!({ "input": args }),
                    None => json!({}),
                }),
            }
        };
        Ok(plan)
    }

    /// Run the ability and return the response body as parsed JSON.
    pub async fn invoke(
        &self,
        ability: &Ability,
        arguments: Option<&Value>,
    ) -> BridgeResult<Value> {
        let plan = self.plan(ability, arguments)?;
        let with_input = plan.query_input.is_some()
            || plan.body.as_ref().is_some_and(|b| b.get("input").is_some());
        debug!(
            ability = %ability.name,
            method = %plan.method,
            url = %plan.url,
            with_input,
            "Invoking ability"
        );

        let mut builder = self.client.request(plan.method.clone(), &plan.url);
        if let Some(ref input) = plan.query_input {
            builder = builder.query(&[("input", input)]);
        }
        if let Some(ref body) = plan.body {
            builder = builder.json(body);
        }

        let body = self.client.send(plan.method, &plan.url, builder).await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}
