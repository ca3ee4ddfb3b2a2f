use reqwest;
use serde::{Deserialize, Serialize};
use crate::{apis::ResponseContent, models};
use super::{Error, configuration};


/// struct for typed errors of method [`post_valentine_profiles`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostValentineProfilesError {
    DefaultResponse(models::PostgrestError),
    UnknownValue(serde_json::Value),
}


/// Insert rows to the valentine profiles table. The table name is a path parameter because the hosted database exposes every table under the same REST prefix.
pub async fn post_valentine_profiles(configuration: &configuration::Configuration, table: &str, valentine_profile: Vec<models::ValentineProfile>, prefer: Option<&str>) -> Result<(), Error<PostValentineProfilesError>> {
    let local_var_configuration = configuration;

    let local_var_client = &local_var_configuration.client;

    let local_var_uri_str = format!("{}/rest/v1/{table}", local_var_configuration.base_path, table=crate::apis::urlencode(table));
    let mut local_var_req_builder = local_var_client.request(reqwest::Method::POST, local_var_uri_str.as_str());

    if let Some(ref local_var_user_agent) = local_var_configuration.user_agent {
        local_var_req_builder = local_var_req_builder.header(reqwest::header::USER_AGENT, local_var_user_agent.clone());
    }
    if let Some(local_var_param_value) = prefer {
        local_var_req_builder = local_var_req_builder.header("Prefer", local_var_param_value.to_string());
    }
    if let Some(ref local_var_apikey) = local_var_configuration.api_key {
        let local_var_key = local_var_apikey.key.clone();
        let local_var_value = match local_var_apikey.prefix {
            Some(ref local_var_prefix) => format!("{} {}", local_var_prefix, local_var_key),
            None => local_var_key,
        };
        local_var_req_builder = local_var_req_builder.header("apikey", local_var_value);
    };
    if let Some(ref local_var_token) = local_var_configuration.bearer_access_token {
        local_var_req_builder = local_var_req_builder.bearer_auth(local_var_token.to_owned());
    };
    local_var_req_builder = local_var_req_builder.json(&valentine_profile);

    let local_var_req = local_var_req_builder.build()?;
    let local_var_resp = local_var_client.execute(local_var_req).await?;

    let local_var_status = local_var_resp.status();
    if !local_var_status.is_client_error() && !local_var_status.is_server_error() {
        // Body is not read on success.
        return Ok(());
    }

    let local_var_content = local_var_resp.text().await?;
    let local_var_entity: Option<PostValentineProfilesError> = serde_json::from_str(&local_var_content).ok();
    let local_var_error = ResponseContent { status: local_var_status, content: local_var_content, entity: local_var_entity };
    Err(Error::ResponseError(local_var_error))
}
